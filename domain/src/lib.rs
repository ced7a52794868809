//! The derivation pipeline: pure, replayable transforms from a transcript's
//! segment sequence to meeting intelligence artifacts.
//!
//! Consumers of this crate do not need to depend on `entity_api` or
//! `meeting-ai` directly; the store and provider capabilities are re-exported
//! here and everything else is plain in-process function contracts. All
//! derivations are stateless functions over an immutable transcript snapshot;
//! the only side effects are the explicit upserts into the injected store.

pub use entity_api::{DocumentStore, InMemoryStore, Id};
pub use meeting_ai::traits::{summarization, transcription};

pub mod action_items;
pub mod analytics;
pub mod chunk;
pub mod error;
pub mod minutes;
pub mod summarizer;
pub mod transcripts;
