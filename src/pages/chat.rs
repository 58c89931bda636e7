//! Free-form custom-design chat composer.

use leptos::prelude::*;

use crate::components::chat_transcript::ChatTranscript;
use crate::state::chat::ChatComposer;

#[component]
pub fn ChatPage() -> impl IntoView {
    let composer = RwSignal::new(ChatComposer::default());
    let input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        if composer.try_update(|c| c.submit(&text)).unwrap_or(false) {
            input.set(String::new());
        }
    };

    let messages = Signal::derive(move || composer.with(|c| c.transcript.messages().to_vec()));

    view! {
        <div class="custom-chat-page">
            <Show when=move || composer.with(|c| c.intro_visible)>
                <p id="intro-text" class="intro-text">
                    "Type \"start\" to begin designing your packaging."
                </p>
            </Show>
            <ChatTranscript messages=messages/>
            <form id="chat-form" class="chat-form" on:submit=on_submit>
                <input
                    id="user-input"
                    class="chat-input"
                    type="text"
                    placeholder="Write a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Send"</button>
            </form>
        </div>
    }
}
