//! Types for transcription operations.

use serde::{Deserialize, Serialize};

/// One timestamped span of speech as reported by the ASR engine.
///
/// Timestamps are seconds from the start of the audio. `speaker` is populated
/// only by providers that perform diarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentOutput {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

/// Complete result of one transcription run.
///
/// `text` is the full concatenated transcript; `segments` is the ordered
/// sequence it was assembled from. `language` is the detected (or forced)
/// language code when the provider reports one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub text: String,
    pub segments: Vec<SegmentOutput>,
}
