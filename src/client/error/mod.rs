//! Error types for the Coffeebook client.
//!
//! Failures fall into three groups: request errors from the REST API, form
//! validation errors that are shown inline next to fields, and configuration
//! errors raised at startup. None of them are fatal to the running
//! application; callers log them and surface a message to the user.

pub mod api;
pub mod config;

use thiserror::Error;

use crate::client::{
    error::{api::ApiError, config::ConfigError},
    form::FormErrors,
    store::inflight::RequestKey,
};

/// Main error type for the Coffeebook client.
///
/// Aggregates the domain-specific error types so services and form
/// controllers can propagate with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Request to the REST API failed or returned a non-success status.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Configuration error (invalid build-time environment values).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Form values failed their schema; no request was sent.
    #[error("Validation failed: {0}")]
    ValidationError(#[from] FormErrors),
    /// An identical request is still awaiting its response.
    #[error("Request already in progress: {0}")]
    DuplicateRequest(RequestKey),
}

impl Error {
    /// Message suitable for an inline banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::ApiError(err) => err.user_message(),
            Self::ConfigError(_) => "The application is misconfigured".to_string(),
            Self::ValidationError(_) => "Please fix the highlighted fields".to_string(),
            Self::DuplicateRequest(_) => "Still working on your last request".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::store::inflight::Operation;

    #[test]
    fn describes_validation_failure() {
        let mut errors = FormErrors::default();
        errors.insert("name", "Must enter cafe's name");

        let err = Error::from(errors);

        assert_eq!(err.to_string(), "Validation failed: name: Must enter cafe's name");
        assert_eq!(err.user_message(), "Please fix the highlighted fields");
    }

    #[test]
    fn api_messages_pass_through() {
        let err = Error::from(ApiError::Unauthorized("Invalid username or password".to_string()));
        assert_eq!(err.user_message(), "Invalid username or password");

        let err = Error::DuplicateRequest(RequestKey::for_entity(Operation::SaveNote, 4));
        assert_eq!(err.to_string(), "Request already in progress: SaveNote #4");
    }
}
