//! UI components for the EvolveMe app.

mod auth_form;
mod chat;
mod error_banner;
mod login;
mod register;

pub use chat::ChatPage;
pub use error_banner::ErrorBanner;
pub use login::LoginPage;
pub use register::RegisterPage;
