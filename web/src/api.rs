//! Calls to the EvolveMe backend from the browser.
//!
//! Errors come back as banner-ready strings.

use evolveme_client::{ApiClient, ClientConfig, ClientError, TokenStore};
use evolveme_core::{text, ChatMessage, Credentials};

use crate::storage::LocalStorageTokenStore;

/// Base URL baked in at build time (`EVOLVEME_API_URL=... trunk build`).
const BASE_URL: Option<&str> = option_env!("EVOLVEME_API_URL");

pub type WebClient = ApiClient<LocalStorageTokenStore>;

fn client() -> Result<WebClient, ClientError> {
    let config = match BASE_URL {
        Some(url) => ClientConfig::default().with_base_url(url),
        None => ClientConfig::default(),
    };
    ApiClient::new(&config, LocalStorageTokenStore)
}

fn report(err: ClientError, fallback: &str) -> String {
    web_sys::console::warn_1(&format!("API call failed: {}", err).into());
    err.user_message(fallback)
}

/// Whether a token is stored.
pub fn is_authenticated() -> bool {
    matches!(LocalStorageTokenStore.get(), Ok(Some(_)))
}

/// Log in and store the token.
pub async fn login(credentials: &Credentials) -> Result<(), String> {
    let client = client().map_err(|e| report(e, text::LOGIN_FAILED))?;
    client
        .login(credentials)
        .await
        .map(|_| ())
        .map_err(|e| report(e, text::LOGIN_FAILED))
}

/// Create an account.
pub async fn register(credentials: &Credentials) -> Result<(), String> {
    let client = client().map_err(|e| report(e, text::REGISTER_FAILED))?;
    client
        .register(credentials)
        .await
        .map(|_| ())
        .map_err(|e| report(e, text::REGISTER_FAILED))
}

/// Fetch conversation history.
pub async fn fetch_conversations() -> Result<Vec<ChatMessage>, String> {
    let client = client().map_err(|e| report(e, text::HISTORY_FAILED))?;
    client
        .conversations()
        .await
        .map_err(|e| report(e, text::HISTORY_FAILED))
}

/// Send a message and return the coach's reply.
pub async fn post_message(content: &str) -> Result<ChatMessage, String> {
    let client = client().map_err(|e| report(e, text::SEND_FAILED))?;
    client
        .post_message(content)
        .await
        .map_err(|e| report(e, text::SEND_FAILED))
}

/// Remove the stored token.
pub fn logout() {
    if let Err(e) = LocalStorageTokenStore.clear() {
        web_sys::console::error_1(&format!("Failed to clear token: {}", e).into());
    }
}
