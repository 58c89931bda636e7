//! Custom-packaging wizard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every click or submission becomes a [`WizardEvent`]; the single
//! generation request the reducer asks for is performed here and its result
//! dispatched back with the run ticket it was issued under.

use leptos::prelude::*;

use super::spawn;
use crate::components::chat_transcript::ChatTranscript;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::GenerateOutcome;
use crate::state::wizard::{Wizard, WizardEffect, WizardEvent};

#[component]
pub fn CustomDesignPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let endpoint = config.generate_endpoint();

    let wizard = RwSignal::new(Wizard::default());
    let input = RwSignal::new(String::new());

    let dispatch = Callback::new(move |event: WizardEvent| {
        let Some(WizardEffect::Generate { ticket, request }) = wizard.try_update(|w| w.dispatch(event)).flatten()
        else {
            return;
        };
        let endpoint = endpoint.clone();
        spawn(async move {
            let outcome = GenerateOutcome::from_result(api::generate(&endpoint, &request).await);
            wizard.update(|w| {
                w.dispatch(WizardEvent::GenerationFinished { ticket, outcome });
            });
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        if text.trim().is_empty() || !wizard.with_untracked(Wizard::input_enabled) {
            return;
        }
        dispatch.run(WizardEvent::SubmitText(text));
        input.set(String::new());
    };

    let messages = Signal::derive(move || wizard.with(|w| w.transcript().messages().to_vec()));
    let started = move || wizard.with(Wizard::started);
    let input_enabled = move || wizard.with(Wizard::input_enabled);

    view! {
        <div class="custom-design-page">
            <div class="chat-box">
                <ChatTranscript messages=messages/>

                <div class="options-row">
                    {move || {
                        wizard
                            .with(|w| w.buttons().to_vec())
                            .into_iter()
                            .enumerate()
                            .map(|(index, button)| {
                                view! {
                                    <button
                                        class="option-btn"
                                        class:option-btn--chosen=button.chosen
                                        data-value=button.value
                                        disabled=button.disabled
                                        on:click=move |_| dispatch.run(WizardEvent::Choose(index))
                                    >
                                        {button.label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <form id="chat-form" class="chat-form" on:submit=on_submit>
                    <input
                        id="user-input"
                        class="chat-input"
                        type="text"
                        placeholder="Describe your packaging..."
                        disabled=move || !input_enabled()
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || !input_enabled()>
                        "Send"
                    </button>
                </form>

                <button class="btn start-btn" on:click=move |_| dispatch.run(WizardEvent::Start)>
                    {move || if started() { "Start over" } else { "Start" }}
                </button>
            </div>
        </div>
    }
}
