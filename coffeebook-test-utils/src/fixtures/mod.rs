//! Fixture helpers.
//!
//! - `factory` - JSON bodies shaped like the API's responses
//! - `mockito` - Mock endpoint creation on a running [`TestContext`](crate::TestContext)

pub mod factory;
pub mod mockito;

pub use self::mockito::ApiFixtures;
