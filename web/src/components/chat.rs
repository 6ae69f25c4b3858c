//! Chat view: history, composer, and logout.

use leptos::ev::SubmitEvent;
use leptos::html::Div;
use leptos::*;
use leptos_router::*;

use evolveme_core::{ChatMessage, ChatRole, ChatSession, Route as AppRoute};

use super::ErrorBanner;
use crate::api;
use crate::markdown::render_markdown;

/// Chat with the AI coach.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = create_rw_signal(ChatSession::new());
    let navigate = use_navigate();
    let end_ref = create_node_ref::<Div>();

    // Load history on mount
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_conversations().await;
            session.update(|s| s.load_history(result));
        });
    });

    // Keep the newest message in view
    create_effect(move |_| {
        session.with(|s| (s.messages.len(), s.loading));
        if let Some(end) = end_ref.get() {
            end.scroll_into_view();
        }
    });

    let on_logout = move |_| {
        api::logout();
        navigate(AppRoute::Login.path(), Default::default());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(content) = session.try_update(|s| s.begin_send()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = api::post_message(&content).await;
            session.update(|s| s.finish_send(result));
        });
    };

    let loading = move || session.with(|s| s.loading);

    view! {
        <div class="flex flex-col h-screen max-w-3xl mx-auto bg-white shadow">
            // Header
            <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200">
                <h1 class="text-xl font-bold">"EvolveMe - AI Coach"</h1>
                <button
                    class="px-4 py-2 text-sm bg-gray-200 hover:bg-gray-300 rounded-lg transition-colors"
                    on:click=on_logout
                >
                    "Log out"
                </button>
            </div>

            // Messages
            <div class="flex-1 overflow-y-auto p-6 space-y-4">
                <For
                    each=move || session.with(|s| s.messages.iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(index, message)| (*index, message.timestamp)
                    children=move |(_, message)| view! { <MessageBubble message=message /> }
                />

                {move || loading().then(|| view! {
                    <div class="flex justify-start">
                        <div class="px-4 py-2 rounded-lg bg-gray-100 text-gray-500 italic">
                            "The coach is thinking..."
                        </div>
                    </div>
                })}

                <div node_ref=end_ref />
            </div>

            <div class="px-6">
                <ErrorBanner
                    message=Signal::derive(move || session.with(|s| s.error.clone()))
                    on_dismiss=move |_: ()| session.update(|s| s.dismiss_error())
                />
            </div>

            // Composer
            <form class="flex gap-2 px-6 py-4 border-t border-gray-200" on:submit=on_submit>
                <input
                    type="text"
                    class="flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-blue-500"
                    placeholder="Type your message..."
                    disabled=loading
                    prop:value=move || session.with(|s| s.input.clone())
                    on:input=move |ev| session.update(|s| s.input = event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-6 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed"
                    disabled=move || !session.with(|s| s.can_send())
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

/// A single message, aligned and colored by role. Coach replies are markdown.
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (align, bubble) = match message.role {
        ChatRole::User => ("justify-end", "bg-blue-600 text-white"),
        ChatRole::Ai => ("justify-start", "bg-gray-100 text-gray-900"),
        _ => ("justify-center", "bg-yellow-50 text-gray-700 text-sm"),
    };
    let time = message.local_time();
    let body = match message.role {
        ChatRole::Ai => view! {
            <div class="markdown break-words" inner_html=render_markdown(&message.content) />
        }
        .into_view(),
        _ => view! { <div class="whitespace-pre-wrap break-words">{message.content}</div> }.into_view(),
    };

    view! {
        <div class=format!("flex {}", align)>
            <div class=format!("max-w-[80%] px-4 py-2 rounded-lg {}", bubble)>
                {body}
                <div class="mt-1 text-xs opacity-70 text-right">{time}</div>
            </div>
        </div>
    }
}
