//! Error types and utilities for the Emporium API
//!
//! This module provides:
//! - Server-level errors (ApiError enum) for infrastructure failures
//! - GraphQL error codes and message templates for API responses
//! - Builder functions turning account errors into GraphQL errors with
//!   `extensions.code` and `extensions.status`

use async_graphql::ErrorExtensions;
use emporium_account::AccountError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

// ============================================================================
// Server-Level Errors
// ============================================================================

/// API-related errors for server infrastructure
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server binding error
    #[error("Failed to bind server: {0}")]
    BindError(#[from] std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] emporium_db::DbSqlError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration provided")]
    NoConfiguration,
    #[error("failed to parse config file: {0}")]
    Parse(String),
    #[error("failed to validate config: {0}")]
    Validation(ValidationErrors),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// GraphQL Error Codes
// ============================================================================

/// Error codes for GraphQL API errors
///
/// Every error produced by a resolver carries one of these codes in
/// `extensions.code`. Clients match on the code, never on the message.
pub mod codes {
    /// No valid caller for an operation that requires one
    pub const NOT_AUTHENTICATED: &str = "NOT_AUTHENTICATED";

    /// Caller is known but may not perform the operation
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";

    /// Resource not found errors
    pub const NOT_FOUND: &str = "NOT_FOUND";

    /// Required fields missing or values out of range
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";

    /// Unknown or inactive country
    pub const COUNTRY_NOT_FOUND: &str = "COUNTRY_NOT_FOUND";

    /// Basket title already taken by the caller
    pub const BASKET_EXISTS: &str = "BASKET_EXISTS";

    /// Newsletter confirmation code mismatch
    pub const INVALID_CONFIRM_CODE: &str = "INVALID_CONFIRM_CODE";

    /// Storage failures
    pub const PERSISTENCE_FAILURE: &str = "PERSISTENCE_FAILURE";

    /// Context retrieval errors
    pub const CONTEXT_ERROR: &str = "CONTEXT_ERROR";
}

/// HTTP status reported for an error code.
pub fn status_for_code(code: &str) -> u16 {
    match code {
        codes::NOT_AUTHENTICATED | codes::UNAUTHORIZED => 401,
        codes::NOT_FOUND => 404,
        codes::VALIDATION_FAILED | codes::COUNTRY_NOT_FOUND | codes::BASKET_EXISTS | codes::INVALID_CONFIRM_CODE => {
            400
        }
        _ => 500,
    }
}

/// Error code for an account error.
pub fn code_for(error: &AccountError) -> &'static str {
    match error {
        AccountError::NotAuthenticated => codes::NOT_AUTHENTICATED,
        AccountError::Unauthorized { .. } => codes::UNAUTHORIZED,
        AccountError::ResourceNotFound { .. } => codes::NOT_FOUND,
        AccountError::ValidationFailed { .. } => codes::VALIDATION_FAILED,
        AccountError::CountryNotFound(_) => codes::COUNTRY_NOT_FOUND,
        AccountError::BasketExists(_) => codes::BASKET_EXISTS,
        AccountError::InvalidConfirmCode(_) => codes::INVALID_CONFIRM_CODE,
        AccountError::Persistence(_) => codes::PERSISTENCE_FAILURE,
    }
}

// ============================================================================
// GraphQL Error Message Templates
// ============================================================================

/// Message templates for errors raised by the API layer itself
pub mod messages {
    /// Context retrieval error message
    pub fn context_error(context_type: &str, error: impl std::fmt::Display) -> String {
        format!("Failed to get {} from context: {}", context_type, error)
    }

    /// Storage failures are reported without backend details
    pub fn persistence_failure() -> String {
        "Persistence failure".to_string()
    }

    /// Request body could not be parsed
    pub fn invalid_request(error: impl std::fmt::Display) -> String {
        format!("Invalid GraphQL request: {}", error)
    }
}

// ============================================================================
// GraphQL Error Builder Functions
// ============================================================================

fn with_code(message: String, code: &'static str) -> async_graphql::Error {
    async_graphql::Error::new(message).extend_with(|_, e| {
        e.set("code", code);
        e.set("status", status_for_code(code));
    })
}

/// Converts an account error into a GraphQL error
///
/// Persistence failures are logged here and reach the client with a generic
/// message only.
pub fn account_error(err: AccountError) -> async_graphql::Error {
    let code = code_for(&err);
    let message = err.to_string();
    match err {
        AccountError::Persistence(source) => {
            error!(error = %source, "persistence failure");
            with_code(messages::persistence_failure(), code)
        }
        AccountError::ValidationFailed { missing_fields } => {
            with_code(message, code).extend_with(move |_, e| e.set("fields", missing_fields))
        }
        _ => with_code(message, code),
    }
}

/// Creates an error for missing schema data
pub fn context_error(context_type: &str, error: impl std::fmt::Display) -> async_graphql::Error {
    with_code(messages::context_error(context_type, error), codes::CONTEXT_ERROR)
}
