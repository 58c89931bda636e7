//! Smart-picks page: choose a vibe, get one generated product photo per card.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::spawn;
use crate::components::vibe_card::VibeCard;
use crate::config::ClientConfig;
use crate::net::api;
use crate::state::smart_picks::{SmartPicks, Vibe, drive};

#[component]
pub fn SmartPicksPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let endpoint = config.generate_endpoint();

    let picks = RwSignal::new(SmartPicks::new(config.smart_pick_cards));

    let select = Callback::new(move |vibe: Vibe| {
        let Some(run) = picks.try_update(|p| p.begin(vibe)).flatten() else {
            return;
        };
        let ticket = run.ticket;
        let endpoint = endpoint.clone();
        spawn(drive(
            run,
            move |request| {
                let endpoint = endpoint.clone();
                async move { api::generate(&endpoint, &request).await }
            },
            move |update| picks.update(|p| p.apply(ticket, update)),
        ));
    });

    // `/smartPicks?vibe=luxury` starts a run as soon as the page mounts.
    let query = use_query_map();
    if let Some(vibe) = query.with_untracked(|q| q.get("vibe")).as_deref().and_then(Vibe::from_label) {
        select.run(vibe);
    }

    let busy = move || picks.with(SmartPicks::busy);

    view! {
        <div class="smartPicks-page">
            <div class="vibe-row">
                {Vibe::ALL
                    .into_iter()
                    .map(|vibe| {
                        view! {
                            <button
                                class="vibe-btn"
                                class:vibe-btn--active=move || picks.with(|p| p.vibe() == Some(vibe))
                                data-vibe=vibe.as_str()
                                disabled=busy
                                on:click=move |_| select.run(vibe)
                            >
                                {vibe.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="brand-cards">
                {(0..config.smart_pick_cards)
                    .map(|index| {
                        let state = Signal::derive(move || {
                            picks.with(|p| p.cards().get(index).cloned().unwrap_or_default())
                        });
                        view! { <VibeCard state=state/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
