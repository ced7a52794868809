//! Per-speaker participation statistics derived from transcript segments.

use crate::Id;
use serde::{Deserialize, Serialize};

/// Aggregated participation for one speaker across a transcript.
///
/// Derived, never a source of truth: recomputed on demand from segments, with
/// a snapshot optionally cached per transcript id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeakerStat {
    pub speaker: String,
    pub turns: u32,
    pub talk_time: f64,
    pub words: u32,
}

/// Cached per-transcript snapshot of speaker statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeakerAnalytics {
    pub transcript_id: Id,
    pub stats: Vec<SpeakerStat>,
}
