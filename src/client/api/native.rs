use reqwest::header::CONTENT_TYPE;

use crate::client::{
    api::{ApiRequest, ApiResponse, Method, Transport},
    error::api::ApiError,
};

/// Native transport with a cookie store so the session survives across calls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Default for ReqwestTransport {
    /// Client without a cookie store, for when [`ReqwestTransport::new`] fails.
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut http_request = self.client.request(method, &request.url);

        if let Some(body) = request.body {
            http_request = http_request
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
