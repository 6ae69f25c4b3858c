//! Login page.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::*;

use evolveme_core::{text, AuthForm, Route as AppRoute};

use super::auth_form::{AuthCard, CredentialFields};
use crate::api;

/// Login form. On success the token is stored and the chat view opens.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = create_rw_signal(AuthForm::new());
    let navigate = use_navigate();

    // Arriving from a successful registration
    let query = use_query_map();
    if query.with_untracked(|q| q.get("registered").is_some()) {
        form.update(|f| f.notice = Some(text::REGISTERED.to_string()));
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::login(&credentials).await;
            if let Some(next) = form.try_update(|f| f.finish_login(result)).flatten() {
                navigate(next.path(), Default::default());
            }
        });
    };

    view! {
        <AuthCard title="Log in">
            <form on:submit=on_submit>
                <CredentialFields form=form submit_label="Log in" loading_label="Logging in..." />
            </form>
            <p class="text-center text-sm text-gray-600 mt-4">
                "No account yet?"
                <A href=AppRoute::Register.path() class="ml-2 text-blue-600 underline">
                    "Register"
                </A>
            </p>
        </AuthCard>
    }
}
