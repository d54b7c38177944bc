use serde::{Deserialize, Serialize};

use crate::model::{coffee::CoffeeDto, note::NoteDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "avatar")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_oauth_user: bool,
    /// Notes authored by the user, each embedding its coffee and cafe
    #[serde(default)]
    pub notes: Vec<NoteDto>,
    /// Coffees the user has at least one note for
    #[serde(default)]
    pub coffees: Vec<CoffeeDto>,
}

impl UserDto {
    /// First letter of the username, used as the avatar placeholder
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Body for `POST /login` and `POST /signup`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialsDto {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
