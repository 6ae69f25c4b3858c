//! Bearer token storage.
//!
//! The client reads the token through [`TokenStore`] on every request, so
//! logging in or out anywhere takes effect on the next call.

use std::sync::{Arc, RwLock};

use evolveme_core::AuthToken;

use crate::error::ClientError;

/// Key the token is stored under (browser local storage).
pub const TOKEN_KEY: &str = "access_token";

/// Somewhere to keep the bearer token between requests.
pub trait TokenStore {
    /// Current token, if one is stored.
    fn get(&self) -> Result<Option<AuthToken>, ClientError>;

    /// Store a token, replacing any previous one.
    fn set(&self, token: &AuthToken) -> Result<(), ClientError>;

    /// Remove the token. Succeeds if none is stored.
    fn clear(&self) -> Result<(), ClientError>;
}

/// In-memory token store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<RwLock<Option<AuthToken>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token.
    pub fn with_token(token: impl Into<AuthToken>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<AuthToken>, ClientError> {
        self.slot
            .read()
            .map(|slot| slot.clone())
            .map_err(|e| ClientError::Storage(e.to_string()))
    }

    fn set(&self, token: &AuthToken) -> Result<(), ClientError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        *slot = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use tracing::debug;

    use super::*;

    /// Token kept as the sole contents of a file.
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl TokenStore for FileTokenStore {
        fn get(&self) -> Result<Option<AuthToken>, ClientError> {
            match std::fs::read_to_string(&self.path) {
                Ok(contents) => {
                    let token = contents.trim();
                    if token.is_empty() {
                        Ok(None)
                    } else {
                        Ok(Some(AuthToken::new(token)))
                    }
                }
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(storage_error(&self.path, e)),
            }
        }

        fn set(&self, token: &AuthToken) -> Result<(), ClientError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| storage_error(parent, e))?;
            }
            write_private(&self.path, token.as_str()).map_err(|e| storage_error(&self.path, e))?;
            debug!(path = %self.path.display(), "Token saved");
            Ok(())
        }

        fn clear(&self) -> Result<(), ClientError> {
            match std::fs::remove_file(&self.path) {
                Ok(()) => {
                    debug!(path = %self.path.display(), "Token removed");
                    Ok(())
                }
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(storage_error(&self.path, e)),
            }
        }
    }

    /// Write `contents` to a file only the owner can read.
    #[cfg(unix)]
    fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        // `mode` only applies on creation; tighten a file left by an older run.
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        file.write_all(contents.as_bytes())
    }

    #[cfg(not(unix))]
    fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
        std::fs::write(path, contents)
    }

    fn storage_error(path: &Path, e: std::io::Error) -> ClientError {
        ClientError::Storage(format!("{}: {}", path.display(), e))
    }
}
