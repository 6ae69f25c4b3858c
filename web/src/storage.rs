//! Token storage in `window.localStorage`.

use evolveme_client::{ClientError, TokenStore, TOKEN_KEY};
use evolveme_core::AuthToken;
use web_sys::Storage;

/// Keeps the bearer token in browser local storage under `access_token`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

fn local_storage() -> Result<Storage, ClientError> {
    web_sys::window()
        .ok_or_else(|| ClientError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|e| ClientError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Result<Option<AuthToken>, ClientError> {
        let value = local_storage()?
            .get_item(TOKEN_KEY)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))?;
        Ok(value.filter(|v| !v.is_empty()).map(AuthToken::new))
    }

    fn set(&self, token: &AuthToken) -> Result<(), ClientError> {
        local_storage()?
            .set_item(TOKEN_KEY, token.as_str())
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), ClientError> {
        local_storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|e| ClientError::Storage(format!("{:?}", e)))
    }
}
