//! Text summarization provider trait.

use crate::types::summarization::SummarizeOptions;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for length-bounded text summarization engines.
///
/// Implementations condense a bounded-size input into a summary within the
/// requested length window. Most engines enforce a hard per-call input limit;
/// callers are responsible for chunking longer inputs (see the hierarchical
/// summarizer in the domain layer). Implementations may parallelize
/// internally but must respect their own concurrency/resource limits — a
/// GPU-bound local model typically serializes calls.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Summarize `text` within the bounds given by `options`.
    ///
    /// With `options.deterministic` set, identical input must yield identical
    /// output for the same provider and model (no sampling). Errors propagate
    /// without local retry.
    async fn summarize(
        &self,
        text: &str,
        options: SummarizeOptions,
    ) -> std::result::Result<String, Error>;

    /// Return unique identifier for this provider (e.g., "bart_cnn", "lemur").
    ///
    /// Used for logging and provider selection. Must be lowercase,
    /// alphanumeric with underscores only.
    fn provider_id(&self) -> &str;
}
