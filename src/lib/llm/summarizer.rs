use std::{fmt, future::Future, str::FromStr};

use serde::Deserialize;

use crate::metrics::clamp_input;

pub trait Summarizer {
    type Error: fmt::Debug;

    fn summarize(
        &self,
        request: &SummaryRequest,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>>;
}

/// Summarization models hosted on the inference API.
///
/// The hosted service accepts any model id matching its naming convention, so
/// unknown ids are carried through as [`SummaryModel::Custom`] without
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryModel {
    DistilbartCnn,
    T5Small,
    PegasusXsum,
    Custom(String),
}

impl SummaryModel {
    pub fn model_id(&self) -> &str {
        match self {
            SummaryModel::DistilbartCnn => "sshleifer/distilbart-cnn-12-6",
            SummaryModel::T5Small => "t5-small",
            SummaryModel::PegasusXsum => "google/pegasus-xsum",
            SummaryModel::Custom(id) => id,
        }
    }
}

impl FromStr for SummaryModel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "sshleifer/distilbart-cnn-12-6" => SummaryModel::DistilbartCnn,
            "t5-small" => SummaryModel::T5Small,
            "google/pegasus-xsum" => SummaryModel::PegasusXsum,
            other => SummaryModel::Custom(other.to_string()),
        })
    }
}

impl fmt::Display for SummaryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_id())
    }
}

/// A single summarization request, immutable once built.
///
/// Construction clamps the text to `max_chars`, so the length cap holds for
/// every request that reaches a [`Summarizer`]. Emptiness is guarded at the
/// session layer before a request is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    text: String,
    model: SummaryModel,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>, model: SummaryModel, max_chars: usize) -> Self {
        let text = text.into();
        let text = clamp_input(&text, max_chars).into_owned();
        SummaryRequest { text, model }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn model(&self) -> &SummaryModel {
        &self.model
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
