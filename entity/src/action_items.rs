//! Candidate action items extracted from transcript segments.

use serde::{Deserialize, Serialize};

/// Maximum length of an action item title, in characters. Longer segment
/// texts are hard-cut with no ellipsis.
pub const TITLE_MAX_CHARS: usize = 160;

/// Owner assigned when no capitalized name could be matched in the segment.
pub const UNASSIGNED_OWNER: &str = "Unassigned";

/// The segment timestamps an action item was extracted from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: f64,
    pub end: f64,
}

/// One heuristically extracted task or commitment.
///
/// Best-effort: false positives and negatives are expected. No dedup is
/// performed across segments; each matching segment emits its own item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub title: String,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub source_span: SourceSpan,
}
