//! Layout and fields shared by the login and register pages.

use leptos::*;

use evolveme_core::AuthForm;

use super::ErrorBanner;

/// Centered card with a title.
#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100">
            <div class="bg-white p-8 rounded-lg shadow-md w-full max-w-md">
                <h2 class="text-2xl font-bold text-center text-gray-800 mb-8">{title}</h2>
                {children()}
            </div>
        </div>
    }
}

/// Email and password inputs, notice, error banner, and submit button.
#[component]
pub fn CredentialFields(
    form: RwSignal<AuthForm>,
    submit_label: &'static str,
    loading_label: &'static str,
) -> impl IntoView {
    let loading = move || form.with(|f| f.loading);

    view! {
        <div class="mb-4">
            <label class="block text-sm text-gray-600 mb-2">"Email"</label>
            <input
                type="email"
                required=true
                class="w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:border-blue-500"
                placeholder="you@example.com"
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
        </div>

        <div class="mb-6">
            <label class="block text-sm text-gray-600 mb-2">"Password"</label>
            <input
                type="password"
                required=true
                class="w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:border-blue-500"
                placeholder="Password"
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            />
        </div>

        {move || form.with(|f| f.notice.clone()).map(|notice| view! {
            <div class="mb-4 p-3 bg-green-50 border border-green-200 rounded-lg text-green-700 text-sm">
                {notice}
            </div>
        })}

        <ErrorBanner
            message=Signal::derive(move || form.with(|f| f.error.clone()))
            on_dismiss=move |_: ()| form.update(|f| f.dismiss_error())
        />

        <button
            type="submit"
            class="w-full py-2 bg-blue-600 hover:bg-blue-700 text-white rounded transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed"
            disabled=loading
        >
            {move || if loading() { loading_label } else { submit_label }}
        </button>
    }
}
