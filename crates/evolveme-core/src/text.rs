//! User-facing fallback strings.
//!
//! Shown when a request fails without a server-provided `error` message.

pub const LOGIN_FAILED: &str = "Login failed, please try again";
pub const REGISTER_FAILED: &str = "Registration failed, please try again";
pub const HISTORY_FAILED: &str = "Failed to load conversation history";
pub const SEND_FAILED: &str = "Failed to send message, please try again";
pub const REGISTERED: &str = "Registration successful, please log in";
pub const NOT_LOGGED_IN: &str = "Not logged in";
