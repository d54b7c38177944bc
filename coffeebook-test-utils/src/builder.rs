//! Declarative setup of the mock API.
//!
//! Endpoints are queued on the builder and registered in order during
//! `build()`.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, fixtures::ApiFixtures, TestContext};

type FixtureSetup = Box<dyn FnOnce(&mut ApiFixtures<'_>)>;

/// Builder for a mock API server.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_session_endpoint(Some(factory::user(vec![])), 1)
///     .with_catalog_endpoints(vec![factory::cafe(1, "Heart", "Portland")], vec![], 1)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    fixtures: Vec<FixtureSetup>,
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `GET /check_session`.
    ///
    /// # Arguments
    /// - `user` - Body from [`factory::user`](crate::fixtures::factory::user), `None` answers 401
    /// - `expected_requests` - How many times the endpoint must be hit
    pub fn with_session_endpoint(mut self, user: Option<Value>, expected_requests: usize) -> Self {
        self.fixtures.push(Box::new(move |api: &mut ApiFixtures<'_>| {
            api.create_session_endpoint(user, expected_requests);
        }));
        self
    }

    /// Add `GET /cafes` and `GET /coffees`.
    pub fn with_catalog_endpoints(
        mut self,
        cafes: Vec<Value>,
        coffees: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.fixtures.push(Box::new(move |api: &mut ApiFixtures<'_>| {
            api.create_catalog_endpoints(cafes, coffees, expected_requests);
        }));
        self
    }

    /// Add an endpoint answering with a JSON body.
    pub fn with_json_endpoint(
        mut self,
        method: &'static str,
        path: impl Into<String>,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        let path = path.into();
        self.fixtures.push(Box::new(move |api: &mut ApiFixtures<'_>| {
            api.create_json_endpoint(method, &path, status, &body, expected_requests);
        }));
        self
    }

    /// Add an endpoint that requires a JSON request body containing `request`.
    pub fn with_json_body_endpoint(
        mut self,
        method: &'static str,
        path: impl Into<String>,
        request: Value,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Self {
        let path = path.into();
        self.fixtures.push(Box::new(move |api: &mut ApiFixtures<'_>| {
            api.create_json_body_endpoint(
                method,
                &path,
                request,
                status,
                &response,
                expected_requests,
            );
        }));
        self
    }

    /// Add an endpoint answering with an empty body.
    pub fn with_empty_endpoint(
        mut self,
        method: &'static str,
        path: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        let path = path.into();
        self.fixtures.push(Box::new(move |api: &mut ApiFixtures<'_>| {
            api.create_empty_endpoint(method, &path, status, expected_requests);
        }));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Starts the mock server and registers every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Server running with all endpoints registered
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await;

        {
            let mut api = context.api();
            for setup in self.fixtures {
                setup(&mut api);
            }
        }

        for mock_builder in self.mock_builders {
            let mock = mock_builder(&mut context.server);
            context.mocks.push(mock);
        }

        Ok(context)
    }
}
