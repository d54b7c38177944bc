//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};

use crate::fixtures::ApiFixtures;

/// Running mock API server and the endpoints registered on it.
///
/// ```ignore
/// let mut test = TestBuilder::new()
///     .with_session_endpoint(Some(factory::user(vec![])), 1)
///     .build()
///     .await?;
///
/// let client = client_for(test.url());
/// // ...
/// test.api().create_logout_endpoint(1);
/// test.assert_mocks();
/// ```
pub struct TestContext {
    pub(crate) server: ServerGuard,
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock server, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Helpers for adding endpoints after `build()`.
    pub fn api(&mut self) -> ApiFixtures<'_> {
        ApiFixtures { context: self }
    }

    /// Asserts every registered endpoint was hit the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
