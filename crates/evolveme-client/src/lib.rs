//! REST client for the EvolveMe backend.
//!
//! Wraps the auth and conversation endpoints and attaches the stored bearer
//! token to every request. Compiles for native targets and for wasm32.

pub mod client;
pub mod config;
pub mod error;
pub mod token;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
#[cfg(not(target_arch = "wasm32"))]
pub use token::FileTokenStore;
pub use token::{MemoryTokenStore, TokenStore, TOKEN_KEY};
