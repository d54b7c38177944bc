//! Test utilities for the Coffeebook client.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares the mock API
//! endpoints a test needs, `build()` starts a mock server and registers them,
//! and the returned [`TestContext`] exposes the server URL plus helpers for
//! creating further endpoints while the test runs.
//!
//! The crate does not depend on `coffeebook`; fixtures are plain JSON shaped
//! like the API's responses so the client's own decoding is exercised.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
