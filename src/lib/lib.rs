mod export;
mod llm;
pub mod metrics;
mod session;
pub mod tracing;

pub use export::{data_uri, save_summary, SUMMARY_FILENAME, SUMMARY_MIME};
pub use llm::hf;
pub use llm::summarizer::{Summarizer, SummaryModel, SummaryRequest, SummaryResponse};
pub use session::{SessionError, SummarizeSession};
