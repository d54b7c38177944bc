//! Values shared by fixtures so tests can assert against them.

/// ID of the signed in user in every user fixture.
pub static TEST_USER_ID: i32 = 1;

pub static TEST_USERNAME: &str = "ada";

pub static TEST_PASSWORD: &str = "flat-white";

pub static TEST_EMAIL: &str = "ada@example.com";

/// Authorization URL returned by the mock GitHub sign in endpoint.
pub static TEST_GITHUB_AUTHORIZATION_URL: &str =
    "https://github.com/login/oauth/authorize?client_id=test-client";
