use thiserror::Error;

/// Failure of a single REST call.
///
/// There is no distinction between transient and permanent failures and no
/// retry policy; callers log the error and show [`ApiError::user_message`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("Failed to send request: {0}")]
    RequestFailed(String),
    /// 401 from the server.
    #[error("Not authorized: {0}")]
    Unauthorized(String),
    /// 404 from the server.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Any other non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected type.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status the server answered with, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for an inline banner.
    ///
    /// Server-provided messages are passed through; transport and decode
    /// failures collapse into a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized(message) | Self::NotFound(message) => message.clone(),
            Self::Status { message, .. } => message.clone(),
            Self::RequestFailed(_) => "Unable to reach the server, please try again".to_string(),
            Self::Decode(_) | Self::Encode(_) => "Something went wrong, please try again".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_server_message_through() {
        let err = ApiError::Status {
            status: 422,
            message: "Username already exists".to_string(),
        };
        assert_eq!(err.user_message(), "Username already exists");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn hides_transport_details() {
        let err = ApiError::RequestFailed("TypeError: NetworkError".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.user_message().contains("TypeError"));
    }
}
