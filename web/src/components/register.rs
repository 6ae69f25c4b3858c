//! Registration page.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::*;

use evolveme_core::{AuthForm, Route as AppRoute};

use super::auth_form::{AuthCard, CredentialFields};
use crate::api;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = create_rw_signal(AuthForm::new());
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::register(&credentials).await;
            if let Some(next) = form.try_update(|f| f.finish_register(result)).flatten() {
                navigate(&format!("{}?registered=1", next.path()), Default::default());
            }
        });
    };

    view! {
        <AuthCard title="Create an account">
            <form on:submit=on_submit>
                <CredentialFields form=form submit_label="Register" loading_label="Registering..." />
            </form>
            <p class="text-center text-sm text-gray-600 mt-4">
                "Already have an account?"
                <A href=AppRoute::Login.path() class="ml-2 text-blue-600 underline">
                    "Log in"
                </A>
            </p>
        </AuthCard>
    }
}
