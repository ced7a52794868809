//! Provider trait abstractions.

pub mod summarization;
pub mod transcription;
