//! Mock endpoint creation for the Coffeebook REST API.
//!
//! Each method registers one endpoint on the mock server and records it on
//! the [`TestContext`] so [`TestContext::assert_mocks`] can verify how often
//! it was called.

use mockito::Matcher;
use serde_json::Value;

use crate::{fixtures::factory, TestContext};

pub struct ApiFixtures<'a> {
    pub(crate) context: &'a mut TestContext,
}

impl<'a> ApiFixtures<'a> {
    /// Registers an endpoint answering with a JSON body.
    ///
    /// # Arguments
    /// - `method` - HTTP method, e.g. `"POST"`
    /// - `path` - Request path, e.g. `"/notes/3"`
    /// - `status` - Status code to answer with
    /// - `body` - JSON response body
    /// - `expected_requests` - How many times the endpoint must be hit
    pub fn create_json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> &mut Self {
        let mock = self
            .context
            .server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();

        self.context.mocks.push(mock);
        self
    }

    /// Registers an endpoint answering with an empty body.
    pub fn create_empty_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> &mut Self {
        let mock = self
            .context
            .server
            .mock(method, path)
            .with_status(status)
            .expect(expected_requests)
            .create();

        self.context.mocks.push(mock);
        self
    }

    /// Registers an endpoint that only matches when the request body
    /// contains `request` and answers with `response`.
    pub fn create_json_body_endpoint(
        &mut self,
        method: &str,
        path: &str,
        request: Value,
        status: usize,
        response: &Value,
        expected_requests: usize,
    ) -> &mut Self {
        let mock = self
            .context
            .server
            .mock(method, path)
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(request))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create();

        self.context.mocks.push(mock);
        self
    }

    /// `GET /check_session`, answering with `user` or a 401 when `None`.
    pub fn create_session_endpoint(
        &mut self,
        user: Option<Value>,
        expected_requests: usize,
    ) -> &mut Self {
        match user {
            Some(user) => {
                self.create_json_endpoint("GET", "/check_session", 200, &user, expected_requests)
            }
            None => self.create_json_endpoint(
                "GET",
                "/check_session",
                401,
                &factory::error("Unauthorized"),
                expected_requests,
            ),
        }
    }

    /// `GET /cafes` and `GET /coffees`.
    pub fn create_catalog_endpoints(
        &mut self,
        cafes: Vec<Value>,
        coffees: Vec<Value>,
        expected_requests: usize,
    ) -> &mut Self {
        self.create_json_endpoint("GET", "/cafes", 200, &Value::Array(cafes), expected_requests)
            .create_json_endpoint(
                "GET",
                "/coffees",
                200,
                &Value::Array(coffees),
                expected_requests,
            )
    }

    /// `DELETE /logout` answering 204.
    pub fn create_logout_endpoint(&mut self, expected_requests: usize) -> &mut Self {
        self.create_empty_endpoint("DELETE", "/logout", 204, expected_requests)
    }
}
