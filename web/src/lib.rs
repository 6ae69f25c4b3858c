//! EvolveMe browser app.
//!
//! Leptos CSR single-page app: login, registration, and a chat view that
//! talks to the AI coach backend.

pub mod api;
mod app;
mod components;
mod markdown;
mod storage;

pub use app::App;
pub use storage::LocalStorageTokenStore;

/// Mount the app on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <App /> });
}
