//! Custom-packaging wizard: a fixed, forward-only question sequence.
//!
//! ARCHITECTURE
//! ============
//! The page turns DOM events into [`WizardEvent`]s and feeds them to
//! [`Wizard::dispatch`]. The reducer mutates the wizard and may hand back a
//! [`WizardEffect`] describing the one network call the page must perform;
//! its completion comes back in as [`WizardEvent::GenerationFinished`].
//!
//! Each start takes a fresh run ticket. Completions carrying an older ticket
//! are dropped, so a restart while a request is in flight never lets the old
//! response overwrite the new run.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::transcript::{Role, Transcript};
use crate::net::types::{GenerateOutcome, GenerateRequest, NETWORK_ERROR_MESSAGE};

pub const INTRO_MESSAGE: &str = "Design your own product packaging. Press Start to begin.";
pub const GENERATING_MESSAGE: &str = "Generating your packaging design...";
pub const SUCCESS_MESSAGE: &str = "Your packaging design is ready!";
pub const GENERATION_FAILED_MESSAGE: &str = "Could not generate the design. Please try again.";
pub const GENERATE_CONTEXT: &str = "custom-packaging";

/// One selectable answer of a choice step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Step input kind. Only choice steps carry options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Choice(&'static [ChoiceOption]),
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepDefinition {
    pub key: &'static str,
    pub kind: StepKind,
    pub prompt: &'static str,
}

impl StepDefinition {
    pub fn options(&self) -> &'static [ChoiceOption] {
        match self.kind {
            StepKind::Choice(options) => options,
            StepKind::Text => &[],
        }
    }
}

const fn opt(label: &'static str, value: &'static str) -> ChoiceOption {
    ChoiceOption { label, value }
}

const PRODUCT_TYPES: &[ChoiceOption] = &[
    opt("Lipstick", "LIPSTICK"),
    opt("Mascara", "MASCARA"),
    opt("Blush", "BLUSH"),
    opt("Foundation", "FOUNDATION"),
    opt("Eyeliner", "EYELINER"),
];

const FORMULA_BASES: &[ChoiceOption] = &[
    opt("Water", "WATER"),
    opt("Oil", "OIL"),
    opt("Cream", "CREAM"),
    opt("Gel", "GEL"),
    opt("Powder", "POWDER"),
    opt("Silicone", "SILICONE"),
];

const COVERAGES: &[ChoiceOption] = &[opt("Sheer", "SHEER"), opt("Medium", "MEDIUM"), opt("Full", "FULL")];

const FINISHES: &[ChoiceOption] =
    &[opt("Matte", "MATTE"), opt("Natural", "NATURAL"), opt("Dewy", "DEWY"), opt("Glowy", "GLOWY")];

const SKIN_TYPES: &[ChoiceOption] = &[
    opt("Normal", "NORMAL"),
    opt("Oily", "OILY"),
    opt("Dry", "DRY"),
    opt("Combination", "COMBINATION"),
    opt("Sensitive", "SENSITIVE"),
];

/// The packaging questionnaire, in order.
pub static PACKAGING_STEPS: &[StepDefinition] = &[
    StepDefinition {
        key: "product_type",
        prompt: "What product are you designing?",
        kind: StepKind::Choice(PRODUCT_TYPES),
    },
    StepDefinition { key: "formula_base", prompt: "Pick a formula base.", kind: StepKind::Choice(FORMULA_BASES) },
    StepDefinition { key: "coverage", prompt: "How much coverage?", kind: StepKind::Choice(COVERAGES) },
    StepDefinition { key: "finish", prompt: "Which finish?", kind: StepKind::Choice(FINISHES) },
    StepDefinition { key: "skin_type", prompt: "Which skin type is it for?", kind: StepKind::Choice(SKIN_TYPES) },
    StepDefinition {
        key: "packaging_desc",
        prompt: "Describe the packaging you have in mind.",
        kind: StepKind::Text,
    },
];

/// Progress through the questionnaire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardState {
    pub step: usize,
    pub done: bool,
    /// One entry per step key; `None` until that step is answered.
    pub answers: BTreeMap<&'static str, Option<String>>,
}

impl WizardState {
    pub fn new(steps: &[StepDefinition]) -> Self {
        Self { step: 0, done: false, answers: steps.iter().map(|s| (s.key, None)).collect() }
    }

    pub fn answer(&self, key: &str) -> Option<&str> {
        self.answers.get(key).and_then(|v| v.as_deref())
    }
}

/// Render model for one option button of the current choice step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionButton {
    pub label: &'static str,
    pub value: &'static str,
    pub disabled: bool,
    pub chosen: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum WizardEvent {
    Start,
    Choose(usize),
    SubmitText(String),
    GenerationFinished { ticket: u64, outcome: GenerateOutcome },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardEffect {
    Generate { ticket: u64, request: GenerateRequest },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    steps: &'static [StepDefinition],
    state: WizardState,
    started: bool,
    ticket: u64,
    transcript: Transcript,
    buttons: Vec<OptionButton>,
    input_enabled: bool,
    placeholder: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(PACKAGING_STEPS)
    }
}

impl Wizard {
    pub fn new(steps: &'static [StepDefinition]) -> Self {
        let mut transcript = Transcript::default();
        transcript.add_message(Role::Bot, INTRO_MESSAGE);
        Self {
            steps,
            state: WizardState::new(steps),
            started: false,
            ticket: 0,
            transcript,
            buttons: Vec::new(),
            input_enabled: false,
            placeholder: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn buttons(&self) -> &[OptionButton] {
        &self.buttons
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// The step currently awaiting an answer, if any.
    pub fn current_step(&self) -> Option<&'static StepDefinition> {
        if !self.started || self.state.done {
            return None;
        }
        let steps = self.steps;
        steps.get(self.state.step)
    }

    /// Apply one UI event.
    pub fn dispatch(&mut self, event: WizardEvent) -> Option<WizardEffect> {
        match event {
            WizardEvent::Start => self.start(),
            WizardEvent::Choose(index) => self.choose(index),
            WizardEvent::SubmitText(text) => self.submit_text(&text),
            WizardEvent::GenerationFinished { ticket, outcome } => {
                self.finish_generation(ticket, outcome);
                None
            }
        }
    }

    fn start(&mut self) -> Option<WizardEffect> {
        self.ticket += 1;
        self.started = true;
        self.state = WizardState::new(self.steps);
        self.placeholder = None;
        log::debug!("wizard run {} started", self.ticket);
        self.render_step()
    }

    fn choose(&mut self, index: usize) -> Option<WizardEffect> {
        let step = self.current_step()?;
        let Some(option) = step.options().get(index) else {
            log::debug!("ignoring choice {index} on step {}", step.key);
            return None;
        };
        if self.buttons.iter().any(|b| b.disabled) {
            return None;
        }

        self.state.answers.insert(step.key, Some(option.value.to_owned()));
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.disabled = true;
            button.chosen = i == index;
        }
        self.transcript.add_message(Role::User, format!("✓ {}", option.label));
        self.advance()
    }

    fn submit_text(&mut self, text: &str) -> Option<WizardEffect> {
        let step = self.current_step()?;
        let text = text.trim();
        if step.kind != StepKind::Text || !self.input_enabled || text.is_empty() {
            return None;
        }

        self.state.answers.insert(step.key, Some(text.to_owned()));
        self.transcript.add_message(Role::User, text);
        self.advance()
    }

    fn advance(&mut self) -> Option<WizardEffect> {
        self.state.step += 1;
        self.render_step()
    }

    fn render_step(&mut self) -> Option<WizardEffect> {
        let steps = self.steps;
        let Some(step) = steps.get(self.state.step) else {
            return Some(self.complete());
        };

        self.transcript.clear();
        self.transcript.add_message(Role::Bot, step.prompt);
        self.buttons = step
            .options()
            .iter()
            .map(|o| OptionButton { label: o.label, value: o.value, disabled: false, chosen: false })
            .collect();
        self.input_enabled = step.kind == StepKind::Text;
        None
    }

    fn complete(&mut self) -> WizardEffect {
        self.state.done = true;
        self.input_enabled = false;
        self.placeholder = Some(self.transcript.add_message(Role::Bot, GENERATING_MESSAGE));

        let prompt = packaging_prompt(&self.state);
        log::info!("wizard run {} complete, requesting design", self.ticket);
        WizardEffect::Generate {
            ticket: self.ticket,
            request: GenerateRequest { prompt, context: Some(GENERATE_CONTEXT.to_owned()), vibe: None },
        }
    }

    fn finish_generation(&mut self, ticket: u64, outcome: GenerateOutcome) {
        if ticket != self.ticket {
            log::debug!("dropping stale generation result for run {ticket}");
            return;
        }
        let Some(id) = self.placeholder.take() else {
            return;
        };

        match outcome {
            GenerateOutcome::Image { url, product } => {
                let text = match product {
                    Some(p) => product_summary(&p.name, p.price_sar, p.size.as_deref()),
                    None => SUCCESS_MESSAGE.to_owned(),
                };
                self.transcript.rewrite(&id, text);
                self.transcript.attach_image(&id, url);
            }
            GenerateOutcome::Failed { message } => {
                let text = message.map_or_else(
                    || GENERATION_FAILED_MESSAGE.to_owned(),
                    |m| format!("Could not generate the design: {m}"),
                );
                self.transcript.rewrite(&id, text);
            }
            GenerateOutcome::NetworkError => {
                self.transcript.rewrite(&id, NETWORK_ERROR_MESSAGE);
            }
        }
    }
}

/// Interpolate the collected answers into the image prompt.
///
/// The packaging description follows a `Packaging:` marker, which the
/// backend uses to name the generated product.
pub fn packaging_prompt(state: &WizardState) -> String {
    let get = |key: &str| state.answer(key).unwrap_or_default();
    format!(
        "Professional cosmetic packaging design for a {} product. Formula: {}. Coverage: {}. Finish: {}. \
         Skin type: {}. Packaging: {}. Studio lighting, no text, white background.",
        get("product_type"),
        get("formula_base"),
        get("coverage"),
        get("finish"),
        get("skin_type"),
        get("packaging_desc"),
    )
}

fn product_summary(name: &str, price_sar: Option<f64>, size: Option<&str>) -> String {
    let mut text = format!("{SUCCESS_MESSAGE} Meet {name}");
    if let Some(price) = price_sar {
        let _ = write!(text, " · {price} SAR");
    }
    if let Some(size) = size {
        let _ = write!(text, " · {size}");
    }
    text
}
