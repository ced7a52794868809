//! Minutes of Meeting: the persisted summary + action items artifact.

use crate::action_items::ActionItem;
use crate::Id;
use serde::{Deserialize, Serialize};

/// Derived meeting minutes for one transcript.
///
/// Keyed 1:1 with a transcript id. Regenerating replaces the stored document
/// in place (overwrite semantics, no version history). Carries no timestamps
/// so regeneration from the same transcript is byte-identical.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinutesOfMeeting {
    pub transcript_id: Id,
    pub summary: String,
    pub action_items: Vec<ActionItem>,
}
