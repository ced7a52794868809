//! A completed ASR run over one recording.

use crate::segments::Segment;
use crate::Id;
use serde::{Deserialize, Serialize};

/// Full transcript for one recording: the concatenated text plus the ordered
/// segment sequence it was assembled from.
///
/// Created once per ASR run and immutable thereafter. Derived artifacts
/// (speaker analytics, minutes) reference it by `id` and never mutate it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}
