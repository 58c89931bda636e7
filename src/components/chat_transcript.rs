//! Scrolling list of user/bot bubbles.

use leptos::prelude::*;

use crate::state::transcript::TranscriptMessage;

/// Transcript view that keeps the newest message in sight.
#[component]
pub fn ChatTranscript(#[prop(into)] messages: Signal<Vec<TranscriptMessage>>) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Re-runs on every transcript change, including in-place rewrites.
    Effect::new(move || {
        messages.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-messages" node_ref=messages_ref>
            {move || {
                messages
                    .get()
                    .into_iter()
                    .map(|msg| {
                        let class = msg.role.css_class();
                        let image = msg.image_url.map(|src| {
                            view! { <img class="msg-image" src=src alt="Generated packaging design"/> }
                        });
                        view! {
                            <div class=class>
                                <p class="msg-text">{msg.text}</p>
                                {image}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
