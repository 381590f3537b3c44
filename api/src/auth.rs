//! Resolution of the per-request caller from the `Authorization` header

use std::sync::Arc;

use axum::http::{header, HeaderMap};
use emporium_account::{
    auth::{resolve_caller, Authentication, Authorization},
    Caller,
};

/// Extracts the token of a `Bearer` authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
}

/// Authentication and authorization collaborators shared by all requests
#[derive(Clone)]
pub struct CallerResolver {
    authentication: Arc<dyn Authentication>,
    authorization: Arc<dyn Authorization>,
}

impl CallerResolver {
    pub fn new(authentication: Arc<dyn Authentication>, authorization: Arc<dyn Authorization>) -> Self {
        Self {
            authentication,
            authorization,
        }
    }

    /// Returns the caller for a request; missing or unknown tokens yield `None`.
    pub fn resolve(&self, headers: &HeaderMap) -> Option<Caller> {
        resolve_caller(
            self.authentication.as_ref(),
            self.authorization.as_ref(),
            bearer_token(headers),
        )
    }
}
