use crate::{
    client::{
        error::{api::ApiError, Error},
        form::{FieldRule, FieldSchema, FieldValue, FormSchema},
    },
    model::user::CredentialsDto,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

impl LoginMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Message shown when a login or signup fails.
    ///
    /// The server's own message is used when it answered with one, so a
    /// taken username or bad password is reported as such.
    pub fn failure_message(self, err: &Error) -> String {
        match err {
            Error::ApiError(ApiError::Unauthorized(message))
            | Error::ApiError(ApiError::Status { message, .. }) => message.clone(),
            _ => match self {
                Self::SignIn => "Login failed".to_string(),
                Self::SignUp => "Signup failed".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub mode: LoginMode,
}

impl FormSchema for LoginForm {
    const NAME: &'static str = "credentials";
    const FIELDS: &'static [FieldSchema] = &[
        FieldSchema {
            name: "username",
            rules: &[FieldRule::Required("Must enter a username")],
        },
        FieldSchema {
            name: "password",
            rules: &[FieldRule::Required("Must enter a password")],
        },
    ];

    fn value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "username" => FieldValue::Text(&self.username),
            _ => FieldValue::Text(&self.password),
        }
    }
}

impl LoginForm {
    /// Whether the submit button should be enabled, using the same rules as
    /// the submit itself.
    pub fn is_complete(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn credentials(&self) -> CredentialsDto {
        CredentialsDto {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            email: None,
        }
    }
}
