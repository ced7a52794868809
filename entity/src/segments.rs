//! Timestamped transcript segments as produced by an ASR provider.

use serde::{Deserialize, Serialize};

/// Speaker label assigned to segments that carry no diarization label.
/// Until diarization is wired in, every segment lands under this speaker.
pub const DEFAULT_SPEAKER: &str = "S1";

/// One timestamped span of transcribed speech.
///
/// `end >= start` is expected but not enforced; consumers clamp negative
/// durations to zero rather than erroring. Missing timestamps deserialize
/// to 0.0 so stats stay computable from whatever segments exist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Segment {
    /// The diarization label for this segment, or [`DEFAULT_SPEAKER`] when absent.
    pub fn speaker_label(&self) -> &str {
        self.speaker.as_deref().unwrap_or(DEFAULT_SPEAKER)
    }

    /// Segment duration in seconds, clamped to zero for malformed timestamps.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Number of whitespace-delimited tokens in the segment text.
    pub fn word_count(&self) -> u32 {
        self.text.split_whitespace().count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_label_defaults_when_unlabeled() {
        let segment = Segment {
            start: 0.0,
            end: 1.0,
            text: "hello".to_string(),
            speaker: None,
        };
        assert_eq!(segment.speaker_label(), DEFAULT_SPEAKER);
    }

    #[test]
    fn duration_clamps_negative_spans() {
        let segment = Segment {
            start: 5.0,
            end: 3.5,
            text: String::new(),
            speaker: None,
        };
        assert_eq!(segment.duration(), 0.0);
    }

    #[test]
    fn missing_timestamps_deserialize_to_zero() {
        let segment: Segment = serde_json::from_str(r#"{"text": "hi there"}"#).unwrap();
        assert_eq!(segment.start, 0.0);
        assert_eq!(segment.end, 0.0);
        assert_eq!(segment.word_count(), 2);
    }

    #[test]
    fn empty_text_counts_zero_words() {
        let segment = Segment {
            start: 0.0,
            end: 1.0,
            text: "   ".to_string(),
            speaker: None,
        };
        assert_eq!(segment.word_count(), 0);
    }
}
