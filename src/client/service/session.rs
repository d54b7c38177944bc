use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, Transport},
        error::{api::ApiError, Error},
    },
    model::{
        api::AuthorizationUrlDto,
        user::{CredentialsDto, UserDto},
    },
};

pub static GITHUB_AUTH_PATH: &str = "/auth/github";

/// Service for the authentication endpoints.
///
/// The session itself is a cookie managed by the server and the transport;
/// this service only issues the calls and decodes the user.
pub struct SessionService<'a, T: Transport> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> SessionService<'a, T> {
    pub fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// Signs in with a username and password.
    ///
    /// # Arguments
    /// - `credentials` - Username and password entered by the user
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The signed in user with their notes
    /// - `Err(Error::ApiError)` - Rejected credentials (`Unauthorized`) or request failure
    pub async fn login(&self, credentials: &CredentialsDto) -> Result<UserDto, Error> {
        Ok(self.api.post("/login", credentials).await?)
    }

    /// Creates an account and signs in.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The new user
    /// - `Err(Error::ApiError)` - Username taken or missing fields (`Status` 422), or request failure
    pub async fn signup(&self, credentials: &CredentialsDto) -> Result<UserDto, Error> {
        Ok(self.api.post("/signup", credentials).await?)
    }

    /// Ends the server session.
    ///
    /// A 401 means there was no session to end and is treated as success.
    pub async fn logout(&self) -> Result<(), Error> {
        match self.api.delete("/logout").await {
            Ok(()) | Err(ApiError::Unauthorized(_)) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Probes the current session.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - A user is signed in
    /// - `Ok(None)` - No session (server answered 401)
    /// - `Err(Error::ApiError)` - Any other failure
    pub async fn fetch_session(&self) -> Result<Option<UserDto>, Error> {
        match self.api.get("/check_session").await {
            Ok(user) => Ok(Some(user)),
            Err(ApiError::Unauthorized(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Resolves where the browser should go to start GitHub sign in.
    ///
    /// The server either answers with a JSON authorization URL or redirects;
    /// when no usable URL comes back the browser is sent to the endpoint
    /// itself so the server's redirect takes over.
    pub async fn oauth_target(&self) -> String {
        let endpoint = self.api.config().url(GITHUB_AUTH_PATH);

        match self.api.get::<AuthorizationUrlDto>(GITHUB_AUTH_PATH).await {
            Ok(dto) => dto.authorization_url,
            Err(err) => {
                tracing::warn!(
                    "Falling back to direct GitHub auth redirect after error: {}",
                    err
                );
                endpoint
            }
        }
    }
}
