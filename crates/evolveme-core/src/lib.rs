//! EvolveMe Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Browser APIs
//! - Runtime specifics
//!
//! Every front end (browser app, terminal client) drives the same route
//! guard and form/chat state machines defined here.

pub mod auth;
pub mod chat;
pub mod error;
pub mod route;
pub mod text;

// Re-export commonly used types
pub use auth::{AuthForm, AuthToken, Credentials, LoginResponse, RegisterResponse};
pub use chat::{ChatMessage, ChatRole, ChatSession, ConversationsResponse, PostMessageRequest};
pub use error::CoreError;
pub use route::{guard, Page, Route, RouteDecision};
