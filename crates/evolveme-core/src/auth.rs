//! Authentication types and the login/register form state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::route::Route;
use crate::text;

/// Opaque bearer credential returned by the login endpoint.
///
/// The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new AuthToken from a string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

impl From<String> for AuthToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AuthToken {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Email and password, as sent to `/auth/register` and `/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-blank. Values are sent as typed.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.email.trim().is_empty() {
            return Err(CoreError::MissingField("Email"));
        }
        if self.password.trim().is_empty() {
            return Err(CoreError::MissingField("Password"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Response body of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    pub access_token: AuthToken,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body of `POST /auth/register`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Local state of the login and register forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    /// A request is in flight; the submit control is disabled.
    pub loading: bool,
    /// Message for the dismissible error banner.
    pub error: Option<String>,
    /// Informational message (e.g. after registering).
    pub notice: Option<String>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submit.
    ///
    /// Returns the credentials to send, or `None` if a request is already in
    /// flight or a field is blank (in which case `error` is set).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.notice = None;

        let credentials = Credentials::new(self.email.clone(), self.password.clone());
        if let Err(e) = credentials.validate() {
            self.error = Some(e.to_string());
            return None;
        }

        self.loading = true;
        Some(credentials)
    }

    /// Finish a login request. Returns where to navigate, if anywhere.
    pub fn finish_login<T>(&mut self, result: Result<T, String>) -> Option<Route> {
        self.loading = false;
        match result {
            Ok(_) => {
                self.password.clear();
                Some(Route::Chat)
            }
            Err(message) => {
                self.error = Some(non_empty_or(message, text::LOGIN_FAILED));
                None
            }
        }
    }

    /// Finish a register request. Returns where to navigate, if anywhere.
    pub fn finish_register<T>(&mut self, result: Result<T, String>) -> Option<Route> {
        self.loading = false;
        match result {
            Ok(_) => {
                self.password.clear();
                self.notice = Some(text::REGISTERED.to_string());
                Some(Route::Login)
            }
            Err(message) => {
                self.error = Some(non_empty_or(message, text::REGISTER_FAILED));
                None
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
