//! Smart-picks product card image box.

use leptos::prelude::*;

use crate::state::smart_picks::CardState;

#[component]
pub fn VibeCard(#[prop(into)] state: Signal<CardState>) -> impl IntoView {
    let background = move || match state.get() {
        CardState::Image(url) => format!("url({url})"),
        _ => "none".to_owned(),
    };
    let has_image = move || matches!(state.get(), CardState::Image(_));

    view! {
        <div class="brand-card">
            <div
                class="brand-card-image"
                class:brand-card-image--filled=has_image
                style:background-image=background
            >
                {move || state.get().caption()}
            </div>
        </div>
    }
}
