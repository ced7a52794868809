//! Document store boundary for transcripts and their derived artifacts.
//!
//! The pipeline treats persistence as an external capability: a
//! key-value-ish store of whole documents keyed by transcript id, with
//! replace-on-conflict upsert semantics. [`DocumentStore`] is the trait the
//! domain layer consumes; [`InMemoryStore`] is the reference implementation
//! used by tests and embedders that need no external database.

pub use entity::{action_items, minutes, segments, speaker_analytics, transcripts, Id};

pub mod error;
pub mod store;

pub use store::{DocumentStore, InMemoryStore};
