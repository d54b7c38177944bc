//! Tests for SessionService against a mock API.

use coffeebook::client::{
    error::{api::ApiError, Error},
    form::login::LoginMode,
    service::SessionService,
    store::session::SessionState,
};
use coffeebook::model::user::CredentialsDto;
use coffeebook_test_utils::{
    constant::{TEST_GITHUB_AUTHORIZATION_URL, TEST_PASSWORD, TEST_USERNAME},
    prelude::*,
};
use serde_json::json;

use crate::setup::client;

fn credentials() -> CredentialsDto {
    CredentialsDto {
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
        email: None,
    }
}

/// Tests restoring a session that has notes.
///
/// Expected: Ok(Some) with the user's coffees derived from their notes
#[tokio::test]
async fn restores_session_with_notes() -> Result<(), TestError> {
    let notes = vec![
        factory::note(1, 4, "Bright", factory::coffee(9, "Hair Bender", 1)),
        factory::note(2, 2, "Flat", factory::coffee(9, "Hair Bender", 1)),
    ];
    let test = TestBuilder::new()
        .with_session_endpoint(Some(factory::user(notes)), 1)
        .build()
        .await?;
    let api = client(&test);

    let user = SessionService::new(&api).fetch_session().await.unwrap();

    let mut session = SessionState::default();
    session.apply_session(user);

    assert!(session.fetched);
    let user = session.user.as_ref().unwrap();
    assert_eq!(user.username, TEST_USERNAME);
    assert_eq!(user.notes.len(), 2);
    assert_eq!(user.coffees.len(), 1);
    assert_eq!(user.coffees[0].id, 9);
    test.assert_mocks();

    Ok(())
}

/// Tests the probe when nobody is signed in.
///
/// Expected: Ok(None) and the session is marked fetched without a user
#[tokio::test]
async fn unauthorized_probe_means_signed_out() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_session_endpoint(None, 1)
        .build()
        .await?;
    let api = client(&test);

    let user = SessionService::new(&api).fetch_session().await.unwrap();

    assert_eq!(user, None);
    let mut session = SessionState::default();
    session.apply_session(user);
    assert!(session.fetched);
    assert!(!session.is_authenticated());
    test.assert_mocks();

    Ok(())
}

/// Tests the probe when the server fails.
///
/// Expected: Err with the server's status
#[tokio::test]
async fn probe_server_error_is_reported() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/check_session", 500, factory::error("Database offline"), 1)
        .build()
        .await?;
    let api = client(&test);

    let result = SessionService::new(&api).fetch_session().await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::Status { status: 500, ref message })) if message == "Database offline"
    ));
    test.assert_mocks();

    Ok(())
}

/// Tests signing in with valid credentials.
///
/// Expected: Ok with the user, credentials sent as JSON
#[tokio::test]
async fn login_sends_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_body_endpoint(
            "POST",
            "/login",
            json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD }),
            200,
            factory::user(vec![]),
            1,
        )
        .build()
        .await?;
    let api = client(&test);

    let user = SessionService::new(&api).login(&credentials()).await.unwrap();

    let mut session = SessionState::default();
    session.begin_auth();
    session.apply_login(user);
    assert!(session.is_authenticated());
    assert!(!session.loading);
    test.assert_mocks();

    Ok(())
}

/// Tests signing in with a wrong password.
///
/// Expected: Err(Unauthorized) whose server message is shown to the user
#[tokio::test]
async fn rejected_login_shows_server_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "POST",
            "/login",
            401,
            factory::error("Invalid username or password"),
            1,
        )
        .build()
        .await?;
    let api = client(&test);

    let err = SessionService::new(&api)
        .login(&credentials())
        .await
        .unwrap_err();

    let mut session = SessionState::default();
    session.begin_auth();
    session.apply_auth_error(LoginMode::SignIn.failure_message(&err));
    assert_eq!(session.error.as_deref(), Some("Invalid username or password"));
    assert!(!session.is_authenticated());
    assert!(!session.loading);
    test.assert_mocks();

    Ok(())
}

/// Tests signing up with a taken username.
///
/// Expected: Err(Status 422) with the server's message
#[tokio::test]
async fn signup_conflict_shows_server_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("POST", "/signup", 422, factory::error("Username already taken"), 1)
        .build()
        .await?;
    let api = client(&test);

    let err = SessionService::new(&api)
        .signup(&credentials())
        .await
        .unwrap_err();

    assert_eq!(LoginMode::SignUp.failure_message(&err), "Username already taken");
    test.assert_mocks();

    Ok(())
}

/// Tests signing out.
///
/// Expected: Ok for both 204 and 401 responses
#[tokio::test]
async fn logout_accepts_missing_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    test.api().create_logout_endpoint(1);
    let api = client(&test);

    assert!(SessionService::new(&api).logout().await.is_ok());

    let signed_out = TestBuilder::new()
        .with_empty_endpoint("DELETE", "/logout", 401, 1)
        .build()
        .await?;
    let signed_out_api = client(&signed_out);

    assert!(SessionService::new(&signed_out_api).logout().await.is_ok());

    test.assert_mocks();
    signed_out.assert_mocks();

    Ok(())
}

/// Tests resolving the GitHub sign in target from a JSON answer.
///
/// Expected: The authorization URL from the body
#[tokio::test]
async fn oauth_target_uses_authorization_url() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint(
            "GET",
            "/auth/github",
            200,
            json!({ "authorization_url": TEST_GITHUB_AUTHORIZATION_URL }),
            1,
        )
        .build()
        .await?;
    let api = client(&test);

    let target = SessionService::new(&api).oauth_target().await;

    assert_eq!(target, TEST_GITHUB_AUTHORIZATION_URL);
    test.assert_mocks();

    Ok(())
}

/// Tests the GitHub sign in fallback when the endpoint fails.
///
/// Expected: The browser is sent to the endpoint itself
#[tokio::test]
async fn oauth_target_falls_back_to_endpoint() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json_endpoint("GET", "/auth/github", 500, factory::error("OAuth disabled"), 1)
        .build()
        .await?;
    let api = client(&test);

    let target = SessionService::new(&api).oauth_target().await;

    assert_eq!(target, format!("{}/auth/github", test.url()));
    test.assert_mocks();

    Ok(())
}
