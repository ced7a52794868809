//! Types for summarization operations.

use serde::{Deserialize, Serialize};

/// Length and determinism bounds for one summarization call.
///
/// `max_length`/`min_length` are provider token-ish length bounds, passed
/// through to the engine. `deterministic` disables sampling so identical
/// input reproduces identical output for the same model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeOptions {
    pub max_length: u32,
    pub min_length: u32,
    pub deterministic: bool,
}

impl SummarizeOptions {
    pub fn deterministic(max_length: u32, min_length: u32) -> Self {
        Self {
            max_length,
            min_length,
            deterministic: true,
        }
    }
}
