//! Smart picks: one vibe selection fills every card with a generated image.
//!
//! CONCURRENCY
//! ===========
//! Requests for a run are issued strictly one after another; each is awaited
//! before the next starts, so a run never has more than one request in flight.
//! Vibe buttons stay disabled until [`drive`] reports [`PicksUpdate::Finished`],
//! which it does on every exit path. Updates carry their run ticket and are
//! dropped when a newer run has begun.

#[cfg(test)]
#[path = "smart_picks_test.rs"]
mod smart_picks_test;

use std::future::Future;

use crate::net::types::{ApiError, GenerateOutcome, GenerateReply, GenerateRequest};

pub const PROMPT_BASE: &str =
    "High-quality product photo of 3 makeup products, studio lighting, no text, white background. ";
pub const GENERATE_CONTEXT: &str = "smartpicks";

/// Style category driving the smart-picks prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vibe {
    Cute,
    Luxury,
    Minimal,
}

impl Vibe {
    pub const ALL: [Vibe; 3] = [Vibe::Cute, Vibe::Luxury, Vibe::Minimal];

    /// Parse a button's vibe value or label.
    ///
    /// Blank input yields `None`; anything unrecognised is treated as minimal.
    pub fn from_label(raw: &str) -> Option<Self> {
        let vibe = raw.trim().to_lowercase();
        match vibe.as_str() {
            "" => None,
            "cute" => Some(Self::Cute),
            "luxury" => Some(Self::Luxury),
            _ => Some(Self::Minimal),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cute => "cute",
            Self::Luxury => "luxury",
            Self::Minimal => "minimal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cute => "Cute",
            Self::Luxury => "Luxury",
            Self::Minimal => "Minimal",
        }
    }

    fn style(self) -> &'static str {
        match self {
            Self::Cute => "Cute pastel kawaii style, soft pink colors. ",
            Self::Luxury => "Luxury black and gold packaging. ",
            Self::Minimal => "Ultra minimal white and beige packaging. ",
        }
    }
}

/// Prompt for card `index` (0-based) of a run.
pub fn build_prompt(vibe: Vibe, index: usize) -> String {
    format!("{PROMPT_BASE}{}Variation #{}", vibe.style(), index + 1)
}

/// What a single card currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CardState {
    #[default]
    Idle,
    Loading,
    Image(String),
    Error,
    NetworkError,
}

impl CardState {
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Idle | Self::Image(_) => "",
            Self::Loading => "Loading...",
            Self::Error => "⚠️ Error",
            Self::NetworkError => "❌ Network error",
        }
    }
}

/// A run handed to [`drive`] by [`SmartPicks::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PicksRun {
    pub ticket: u64,
    pub vibe: Vibe,
    pub cards: usize,
}

impl PicksRun {
    pub fn request(&self, index: usize) -> GenerateRequest {
        GenerateRequest {
            prompt: build_prompt(self.vibe, index),
            context: Some(GENERATE_CONTEXT.to_owned()),
            vibe: Some(self.vibe.as_str().to_owned()),
        }
    }
}

/// Progress reported by [`drive`].
#[derive(Clone, Debug, PartialEq)]
pub enum PicksUpdate {
    Card { index: usize, outcome: GenerateOutcome },
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmartPicks {
    cards: Vec<CardState>,
    busy: bool,
    ticket: u64,
    vibe: Option<Vibe>,
}

impl SmartPicks {
    pub fn new(card_count: usize) -> Self {
        Self { cards: vec![CardState::Idle; card_count], busy: false, ticket: 0, vibe: None }
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    /// Whether the vibe buttons are disabled.
    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn vibe(&self) -> Option<Vibe> {
        self.vibe
    }

    /// Start a run for `vibe`: every card shows loading and the selector locks.
    ///
    /// Returns `None` while a run is already in progress.
    pub fn begin(&mut self, vibe: Vibe) -> Option<PicksRun> {
        if self.busy {
            log::debug!("vibe {} ignored, run {} in progress", vibe.as_str(), self.ticket);
            return None;
        }
        self.ticket += 1;
        self.busy = true;
        self.vibe = Some(vibe);
        self.cards.fill(CardState::Loading);
        log::info!("smartpicks run {} started: {} x{}", self.ticket, vibe.as_str(), self.cards.len());
        Some(PicksRun { ticket: self.ticket, vibe, cards: self.cards.len() })
    }

    /// Apply one update from [`drive`]. Updates for a superseded run are dropped.
    pub fn apply(&mut self, ticket: u64, update: PicksUpdate) {
        if ticket != self.ticket {
            log::debug!("dropping stale smartpicks update for run {ticket}");
            return;
        }
        match update {
            PicksUpdate::Card { index, outcome } => self.apply_card(index, outcome),
            PicksUpdate::Finished => {
                self.busy = false;
                log::info!("smartpicks run {ticket} finished");
            }
        }
    }

    fn apply_card(&mut self, index: usize, outcome: GenerateOutcome) {
        match outcome {
            GenerateOutcome::Image { url, .. } => {
                if let Some(card) = self.cards.get_mut(index) {
                    *card = CardState::Image(url);
                }
            }
            GenerateOutcome::Failed { message } => {
                log::warn!("smartpicks card {index} failed: {}", message.as_deref().unwrap_or("no message"));
                if let Some(card) = self.cards.get_mut(index) {
                    *card = CardState::Error;
                }
            }
            GenerateOutcome::NetworkError => {
                // The run stops here; nothing still loading will be filled.
                for card in &mut self.cards {
                    if *card == CardState::Loading {
                        *card = CardState::NetworkError;
                    }
                }
            }
        }
    }
}

/// Issue one request per card, sequentially, reporting each result.
///
/// A transport failure ends the run early. [`PicksUpdate::Finished`] is
/// always the last update.
pub async fn drive<G, Fut, A>(run: PicksRun, mut generate: G, mut apply: A)
where
    G: FnMut(GenerateRequest) -> Fut,
    Fut: Future<Output = Result<GenerateReply, ApiError>>,
    A: FnMut(PicksUpdate),
{
    for index in 0..run.cards {
        let outcome = GenerateOutcome::from_result(generate(run.request(index)).await);
        let stop = outcome == GenerateOutcome::NetworkError;
        apply(PicksUpdate::Card { index, outcome });
        if stop {
            break;
        }
    }
    apply(PicksUpdate::Finished);
}
