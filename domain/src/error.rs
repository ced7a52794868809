//! Error types for the `domain` layer.
use entity_api::error::{EntityApiErrorKind, Error as EntityApiError};
use meeting_ai::Error as MeetingAiError;
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the domain layer are modeled as a tree structure with
/// `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain
/// layer or in lower layers. The `source` field holds the original error that
/// caused the domain error. The intent is to translate errors between layers
/// while maintaining layer boundaries: callers of `domain` match on
/// `error_kind` (e.g. NotFound vs upstream provider failure) without
/// depending on `entity_api` or `meeting-ai` directly.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Entity(EntityErrorKind),
    Other(String),
}

/// Enum representing the kinds of entity errors that can bubble up from the
/// store layer (`entity_api`), reduced to the subset relevant here.
#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    NotFound,
    Invalid,
    Other(String),
}

/// Enum representing failures of external capabilities (ASR, summarization).
/// These are never retried or degraded inside the domain layer; the
/// orchestrating layer owns retry/backoff policy.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    Network,
    Timeout,
    Provider(String),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `entity_api` layer to the `domain` layer.
impl From<EntityApiError> for Error {
    fn from(err: EntityApiError) -> Self {
        let entity_error_kind = match err.error_kind {
            EntityApiErrorKind::RecordNotFound => EntityErrorKind::NotFound,
            EntityApiErrorKind::InvalidInput => EntityErrorKind::Invalid,
            _ => EntityErrorKind::Other("EntityApiErrorKind".to_string()),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(entity_error_kind)),
        }
    }
}

// Provider errors are upstream failures; classify transient transport issues
// separately from provider-side rejections so callers can pick a retry policy.
impl From<MeetingAiError> for Error {
    fn from(err: MeetingAiError) -> Self {
        let error_kind = match &err {
            MeetingAiError::Network(_) => DomainErrorKind::External(ExternalErrorKind::Network),
            MeetingAiError::Timeout(_) => DomainErrorKind::External(ExternalErrorKind::Timeout),
            MeetingAiError::Configuration(msg) => {
                DomainErrorKind::Internal(InternalErrorKind::Other(msg.clone()))
            }
            other => DomainErrorKind::External(ExternalErrorKind::Provider(other.to_string())),
        };
        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}
