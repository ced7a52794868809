//! Error types for meeting AI operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common variants.
///
/// All provider implementations map their native errors to these variants,
/// preserving context while keeping a provider-agnostic interface. The
/// pipeline never retries or degrades on a provider error; it propagates the
/// failure so the orchestrating layer can decide on retry/backoff policy.
#[derive(Debug)]
pub enum Error {
    /// Network connectivity issues, DNS failures, or connection resets.
    /// These errors are typically transient and may benefit from retry logic.
    Network(String),

    /// Invalid parameters, missing required fields, or malformed configuration.
    /// These errors indicate a programming error and should be fixed at development time.
    Configuration(String),

    /// Provider-side business logic errors (e.g., model rejected the input,
    /// audio format unsupported). May require user intervention.
    Provider(String),

    /// Operation exceeded the configured or provider-enforced timeout period.
    Timeout(String),

    /// Requested resource (model, transcription job) does not exist on the provider.
    NotFound(String),

    /// Failed to serialize or deserialize provider payloads.
    Serialization(String),

    /// Catch-all for errors that don't fit other categories.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Error::Other(err) => write!(f, "Other error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
