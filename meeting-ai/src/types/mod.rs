//! Types shared across provider traits.

pub mod summarization;
pub mod transcription;
