use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when requesting the GitHub OAuth authorization URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationUrlDto {
    pub authorization_url: String,
}
