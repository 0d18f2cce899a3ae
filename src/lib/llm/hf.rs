use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{Summarizer, SummaryRequest, SummaryResponse};

/// Client for the hosted Hugging Face inference API.
pub struct HfInferenceClient {
    client: Client,
    api_token: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum HfError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    /// A 200 response whose body did not have the expected shape. The raw
    /// body is kept for diagnostic display.
    #[error("Parse error: {detail}")]
    Parse { detail: String, body: String },
}

impl HfInferenceClient {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: api_token.into(),
            base_url: "https://api-inference.huggingface.co".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Issues a single POST to the model endpoint. No retries, no streaming;
    /// the transport's default timeout applies.
    pub async fn send_summary_request(
        &self,
        model_id: &str,
        text: &str,
    ) -> Result<SummaryResponse, HfError> {
        let body = serde_json::json!({ "inputs": text });

        let resp = self
            .client
            .post(format!("{}/models/{}", self.base_url, model_id))
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let status = resp.status();
        let body = resp.text().await?;

        interpret_response(status, &body)
    }
}

/// Expected shape of a successful response: a JSON array whose first element
/// carries the summary.
#[derive(Debug, Deserialize)]
struct SummaryEntry {
    summary_text: String,
}

fn interpret_response(status: StatusCode, body: &str) -> Result<SummaryResponse, HfError> {
    if status != StatusCode::OK {
        return Err(HfError::Api {
            status: status.as_u16(),
            message: body.to_string(),
        });
    }

    let entries: Vec<SummaryEntry> =
        serde_json::from_str(body).map_err(|e| HfError::Parse {
            detail: e.to_string(),
            body: body.to_string(),
        })?;

    let first = entries.into_iter().next().ok_or_else(|| HfError::Parse {
        detail: "response array is empty".into(),
        body: body.to_string(),
    })?;

    Ok(SummaryResponse {
        summary: first.summary_text,
    })
}

impl Summarizer for HfInferenceClient {
    type Error = HfError;

    async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse, HfError> {
        self.send_summary_request(request.model().model_id(), request.text())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))
    }
}
