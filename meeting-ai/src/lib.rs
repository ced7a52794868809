//! Meeting AI abstraction layer for transcription and summarization providers.
//!
//! This crate provides trait-based abstractions for the external AI
//! capabilities the minutes pipeline consumes:
//! - Speech-to-text transcription producing timestamped segments
//! - Length-bounded text summarization
//!
//! The design is provider-agnostic, enabling applications to swap between
//! different engines (Whisper, AssemblyAI, a local transformer model, etc.)
//! without changing pipeline code. Providers are explicitly constructed and
//! injected by the caller; no process-wide model singletons.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::summarization::SummarizeOptions;
pub use types::transcription::TranscriptOutput;
