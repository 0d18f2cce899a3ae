use std::fmt::Debug;

use crate::{
    metrics::{clamp_input, compute_metrics, InputMetrics, DEFAULT_MAX_CHARS},
    SummaryModel, SummaryRequest, SummaryResponse, Summarizer,
};

/// Per-view summarization state: the current clamped input, its metrics, and
/// the last successful summary. One session per user-facing view; requests
/// run one at a time through `&mut self`.
pub struct SummarizeSession<S>
where
    S: Summarizer,
{
    summarizer: S,
    max_chars: usize,
    input: String,
    metrics: InputMetrics,
    last_summary: Option<SummaryResponse>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError<E: Debug> {
    #[error("no input text; provide some text to summarize")]
    EmptyInput,
    #[error("summarization failed: {0:?}")]
    Summarizer(E),
}

impl<S> SummarizeSession<S>
where
    S: Summarizer,
{
    pub fn new(summarizer: S) -> Self {
        SummarizeSession {
            summarizer,
            max_chars: DEFAULT_MAX_CHARS,
            input: String::new(),
            metrics: compute_metrics("", DEFAULT_MAX_CHARS),
            last_summary: None,
        }
    }

    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self.metrics = compute_metrics(&self.input, max_chars);
        self
    }

    /// Replaces the current input, recomputing metrics from the raw text.
    ///
    /// Metrics reflect the text as provided; the stored input is clamped to
    /// the cap, with truncation surfaced as a warning rather than an error.
    pub fn update_input(&mut self, text: &str) -> InputMetrics {
        self.metrics = compute_metrics(text, self.max_chars);

        if self.metrics.char_count > self.max_chars {
            tracing::warn!(
                char_count = self.metrics.char_count,
                max_chars = self.max_chars,
                "Input exceeded the character cap and will be trimmed"
            );
        }

        self.input = clamp_input(text, self.max_chars).into_owned();
        self.metrics
    }

    pub fn metrics(&self) -> InputMetrics {
        self.metrics
    }

    pub fn last_summary(&self) -> Option<&SummaryResponse> {
        self.last_summary.as_ref()
    }

    /// Runs one summarization request against the current input.
    ///
    /// Empty or whitespace-only input short-circuits without invoking the
    /// summarizer at all.
    #[tracing::instrument(skip(self))]
    pub async fn summarize(
        &mut self,
        model: SummaryModel,
    ) -> Result<SummaryResponse, SessionError<S::Error>> {
        if self.input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let request = SummaryRequest::new(self.input.clone(), model, self.max_chars);

        let response = self
            .summarizer
            .summarize(&request)
            .await
            .map_err(SessionError::Summarizer)?;

        self.last_summary = Some(response.clone());
        Ok(response)
    }
}
