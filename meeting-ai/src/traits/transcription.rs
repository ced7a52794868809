//! Transcription provider trait.

use crate::types::transcription::TranscriptOutput;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for speech-to-text transcription engines.
///
/// Implementations convert raw audio bytes into full text plus an ordered
/// sequence of timestamped segments. Supports local Whisper models as well as
/// hosted APIs. This trait enables provider swapping for cost optimization
/// and quality comparison without touching pipeline code.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Transcribe the given audio, optionally forcing a language.
    ///
    /// When `language` is `None` the provider auto-detects and reports the
    /// detected language in the output. Segment timestamps are seconds from
    /// the start of the audio. Failures are not retried by callers inside the
    /// pipeline; they propagate as-is.
    async fn transcribe(
        &self,
        audio: &[u8],
        language: Option<&str>,
    ) -> std::result::Result<TranscriptOutput, Error>;

    /// Return unique identifier for this provider (e.g., "whisper", "assemblyai").
    ///
    /// Used for logging and provider selection. Must be lowercase,
    /// alphanumeric with underscores only.
    fn provider_id(&self) -> &str;
}
