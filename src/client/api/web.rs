use reqwasm::http::{Method as HttpMethod, Request, RequestCredentials};

use crate::client::{
    api::{ApiRequest, ApiResponse, Method, Transport},
    error::api::ApiError,
};

/// Browser `fetch` transport, sending the session cookie with every request.
#[derive(Debug, Clone, Default)]
pub struct ReqwasmTransport;

impl ReqwasmTransport {
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self)
    }
}

impl Transport for ReqwasmTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Patch => HttpMethod::PATCH,
            Method::Delete => HttpMethod::DELETE,
        };

        let mut http_request = Request::new(&request.url)
            .method(method)
            .credentials(RequestCredentials::Include);

        if let Some(body) = request.body {
            http_request = http_request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
