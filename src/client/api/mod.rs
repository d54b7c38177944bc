//! Typed access to the Coffeebook REST API.
//!
//! [`ApiClient`] resolves paths against the configured base URL, serializes
//! request bodies, maps non-success statuses to [`ApiError`], and decodes
//! response bodies into the DTOs in [`crate::model`]. The actual HTTP work is
//! delegated to a [`Transport`]: `reqwasm` in the browser, `reqwest` on native
//! targets (desktop builds and tests).

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{config::Config, error::api::ApiError},
    model::api::ErrorDto,
};

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;
#[cfg(target_arch = "wasm32")]
pub use web::ReqwasmTransport;

/// Transport used by the running application on this target.
#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = ReqwasmTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = ReqwestTransport;

/// API client used by the running application on this target.
pub type Client = ApiClient<DefaultTransport>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one HTTP request and returns the raw response.
///
/// Implementations must include credentials (session cookies) and must only
/// return `Err` when no response was received at all.
#[allow(async_fn_in_trait)]
pub trait Transport: Clone + 'static {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport> {
    transport: T,
    config: Config,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.send(Method::Get, path, None).await?;
        decode(&response)
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self.send(Method::Post, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self.send(Method::Patch, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    /// Issues a DELETE; any success body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.config.url(path),
            body,
        };

        let response = self.transport.send(request).await?;

        check_status(response)
    }
}

/// Maps a non-2xx response to an [`ApiError`].
///
/// The message is taken from the server's `ErrorDto` body when present,
/// falling back to the raw body text.
pub fn check_status(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(response);
    }

    let message = match serde_json::from_str::<ErrorDto>(&response.body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if response.body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => response.body.trim().to_string(),
    };

    Err(match response.status {
        401 => ApiError::Unauthorized(message),
        404 => ApiError::NotFound(message),
        status => ApiError::Status { status, message },
    })
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
