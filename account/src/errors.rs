//! Error taxonomy of the account services
//!
//! Every denial or lookup failure has its own variant; the transport layer
//! maps variants to stable codes.

use thiserror::Error;

use crate::resource::{Operation, ResourceKind};

/// Opaque failure reported by a repository adapter.
///
/// The services never inspect, retry or suppress it; it is propagated to the
/// transport boundary as [`AccountError::Persistence`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct RepositoryError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl RepositoryError {
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Box::new(error))
    }

    /// Creates an error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }
}

/// Errors returned by the account service façades
#[derive(Debug, Error)]
pub enum AccountError {
    /// No valid caller identity for an operation that requires one
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The repository has no record with the given id
    #[error("{kind} not found: {id}")]
    ResourceNotFound { kind: ResourceKind, id: String },

    /// The guard denied the operation despite a valid caller
    #[error("Unauthorized to {operation} {kind}")]
    Unauthorized { kind: ResourceKind, operation: Operation },

    /// Required fields were blank or values were out of range
    #[error("Missing or invalid fields: {}", .missing_fields.join(", "))]
    ValidationFailed { missing_fields: Vec<String> },

    /// The referenced country does not exist or is not active
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    /// The owner already has a basket with this title
    #[error("Basket '{0}' already exists")]
    BasketExists(String),

    /// The newsletter confirmation code does not match
    #[error("Invalid confirmation code for {0}")]
    InvalidConfirmCode(String),

    /// Failure of the persistence collaborator
    #[error("Persistence failure: {0}")]
    Persistence(#[from] RepositoryError),
}

impl AccountError {
    pub fn not_found(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self::ResourceNotFound { kind, id: id.into() }
    }

    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ValidationFailed {
            missing_fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Result type alias for account service operations
pub type Result<T> = std::result::Result<T, AccountError>;
