// Transcript-derived meeting intelligence entities
pub mod action_items;
pub mod minutes;
pub mod segments;
pub mod speaker_analytics;
pub mod transcripts;

/// A type alias that represents a Transcript's id as handed back by the document
/// store. Opaque to this crate; aliased so the underlying type is easy to change.
pub type Id = String;
