//! Dismissible error banner.

use leptos::*;

/// Red banner showing `message` while it is `Some`, with a close button.
#[component]
pub fn ErrorBanner(message: Signal<Option<String>>, #[prop(into)] on_dismiss: Callback<()>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div
                    role="alert"
                    class="mb-4 p-3 flex items-start justify-between gap-3 bg-red-50 border border-red-200 rounded-lg text-red-700 text-sm"
                >
                    <span>{text}</span>
                    <button
                        type="button"
                        class="text-red-400 hover:text-red-600 font-bold"
                        aria-label="Dismiss"
                        on:click=move |_| on_dismiss.call(())
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
