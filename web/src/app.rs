//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use evolveme_core::{guard, Page, Route as AppRoute, RouteDecision};

use crate::api;
use crate::components::{ChatPage, LoginPage, RegisterPage};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen">
                <Routes>
                    <Route path="/" view=Guarded />
                    <Route path="/login" view=Guarded />
                    <Route path="/register" view=Guarded />
                    <Route path="/chat" view=Guarded />
                    <Route path="/*any" view=Guarded />
                </Routes>
            </div>
        </Router>
    }
}

/// Runs the current location through the auth guard, then renders the page
/// or redirects (replacing the history entry).
#[component]
fn Guarded() -> impl IntoView {
    let route = AppRoute::from_path(&use_location().pathname.get_untracked());

    match guard(route, api::is_authenticated()) {
        RouteDecision::Render(page) => render_page(page),
        RouteDecision::Redirect(to) => view! {
            <Redirect
                path=to.path()
                options=NavigateOptions {
                    replace: true,
                    ..Default::default()
                }
            />
        }
        .into_view(),
    }
}

fn render_page(page: Page) -> View {
    match page {
        Page::Login => view! { <LoginPage /> }.into_view(),
        Page::Register => view! { <RegisterPage /> }.into_view(),
        Page::Chat => view! { <ChatPage /> }.into_view(),
    }
}
