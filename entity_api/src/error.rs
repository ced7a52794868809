//! Error types for entity API
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

/// Errors while executing operations against the document store.
/// The intent is to categorize errors into two major types:
///  * Errors related to data. Ex EntityApiErrorKind::RecordNotFound
///  * Errors related to interactions with the store itself. Ex EntityApiErrorKind::SystemError
#[derive(Debug)]
pub struct Error {
    // Underlying error emitted from the store implementation, if any
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    // Enum representing which category of error
    pub error_kind: EntityApiErrorKind,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum EntityApiErrorKind {
    // Record not found for the given key
    RecordNotFound,
    // Invalid key or document shape
    InvalidInput,
    // Errors related to interactions with the store itself
    SystemError,
    // Other errors
    Other,
}

impl Error {
    /// Shorthand for a NotFound error with no underlying source.
    pub fn record_not_found() -> Self {
        Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entity API Error: {:?}", self)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
