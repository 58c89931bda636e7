use std::cell::RefCell;
use std::future::ready;

use super::*;
use crate::net::types::GenerateResponse;

// =============================================================
// Helpers
// =============================================================

fn image_reply(url: &str) -> Result<GenerateReply, ApiError> {
    Ok(GenerateReply {
        http_ok: true,
        body: GenerateResponse { ok: true, image_url: Some(url.to_owned()), ..GenerateResponse::default() },
    })
}

fn failed_reply() -> Result<GenerateReply, ApiError> {
    Ok(GenerateReply {
        http_ok: false,
        body: GenerateResponse { ok: false, message: Some("Please login".to_owned()), ..GenerateResponse::default() },
    })
}

/// Run a vibe against scripted replies, applying updates to `picks`.
fn run_scripted(
    picks: &mut SmartPicks,
    vibe: Vibe,
    replies: Vec<Result<GenerateReply, ApiError>>,
) -> Vec<GenerateRequest> {
    let run = picks.begin(vibe).expect("run starts");
    let sent = RefCell::new(Vec::new());
    let mut replies = replies.into_iter();
    futures::executor::block_on(drive(
        run,
        |request| {
            sent.borrow_mut().push(request);
            ready(replies.next().unwrap_or_else(|| Err(ApiError::Network("unscripted".to_owned()))))
        },
        |update| {
            assert!(picks.busy() || update == PicksUpdate::Finished);
            picks.apply(run.ticket, update);
        },
    ));
    sent.into_inner()
}

// =============================================================
// Vibe parsing and prompts
// =============================================================

#[test]
fn vibe_from_label_normalizes_case_and_whitespace() {
    assert_eq!(Vibe::from_label("  Luxury "), Some(Vibe::Luxury));
    assert_eq!(Vibe::from_label("CUTE"), Some(Vibe::Cute));
    assert_eq!(Vibe::from_label("minimal"), Some(Vibe::Minimal));
}

#[test]
fn vibe_from_blank_label_is_none() {
    assert_eq!(Vibe::from_label("   "), None);
}

#[test]
fn unknown_vibe_falls_back_to_minimal() {
    assert_eq!(Vibe::from_label("boho"), Some(Vibe::Minimal));
}

#[test]
fn prompt_numbers_variations_from_one() {
    assert_eq!(
        build_prompt(Vibe::Luxury, 0),
        "High-quality product photo of 3 makeup products, studio lighting, no text, white background. \
         Luxury black and gold packaging. Variation #1"
    );
    assert!(build_prompt(Vibe::Cute, 2).ends_with("Cute pastel kawaii style, soft pink colors. Variation #3"));
}

#[test]
fn run_request_carries_context_and_vibe() {
    let run = PicksRun { ticket: 1, vibe: Vibe::Minimal, cards: 3 };
    let request = run.request(1);
    assert_eq!(request.context.as_deref(), Some("smartpicks"));
    assert_eq!(request.vibe.as_deref(), Some("minimal"));
    assert!(request.prompt.ends_with("Variation #2"));
}

// =============================================================
// Run lifecycle
// =============================================================

#[test]
fn new_picks_are_idle() {
    let picks = SmartPicks::new(3);
    assert_eq!(picks.cards(), &[CardState::Idle, CardState::Idle, CardState::Idle]);
    assert!(!picks.busy());
    assert_eq!(picks.vibe(), None);
}

#[test]
fn begin_locks_selector_and_shows_loading() {
    let mut picks = SmartPicks::new(2);
    let run = picks.begin(Vibe::Cute).unwrap();
    assert_eq!(run.cards, 2);
    assert!(picks.busy());
    assert_eq!(picks.vibe(), Some(Vibe::Cute));
    assert!(picks.cards().iter().all(|c| *c == CardState::Loading));
    assert_eq!(picks.cards()[0].caption(), "Loading...");
}

#[test]
fn begin_while_busy_is_refused() {
    let mut picks = SmartPicks::new(2);
    picks.begin(Vibe::Cute).unwrap();
    assert_eq!(picks.begin(Vibe::Luxury), None);
    assert_eq!(picks.vibe(), Some(Vibe::Cute));
}

#[test]
fn luxury_run_sends_three_sequential_requests() {
    let mut picks = SmartPicks::new(3);
    let sent = run_scripted(
        &mut picks,
        Vibe::Luxury,
        vec![image_reply("http://x/1.png"), image_reply("http://x/2.png"), image_reply("http://x/3.png")],
    );

    assert_eq!(sent.len(), 3);
    for (i, request) in sent.iter().enumerate() {
        let expected = format!("Luxury black and gold packaging. Variation #{}", i + 1);
        assert!(request.prompt.contains(&expected), "{}", request.prompt);
    }
    assert_eq!(
        picks.cards(),
        &[
            CardState::Image("http://x/1.png".to_owned()),
            CardState::Image("http://x/2.png".to_owned()),
            CardState::Image("http://x/3.png".to_owned()),
        ]
    );
    assert!(!picks.busy());
}

#[test]
fn failed_card_does_not_stop_the_run() {
    let mut picks = SmartPicks::new(3);
    let sent = run_scripted(
        &mut picks,
        Vibe::Luxury,
        vec![image_reply("http://x/1.png"), failed_reply(), image_reply("http://x/3.png")],
    );
    assert_eq!(sent.len(), 3);
    assert_eq!(picks.cards()[1], CardState::Error);
    assert_eq!(picks.cards()[1].caption(), "⚠️ Error");
    assert_eq!(picks.cards()[2], CardState::Image("http://x/3.png".to_owned()));
    assert!(!picks.busy());
}

#[test]
fn network_failure_stops_run_and_marks_pending_cards() {
    let mut picks = SmartPicks::new(3);
    let sent = run_scripted(
        &mut picks,
        Vibe::Cute,
        vec![image_reply("http://x/1.png"), Err(ApiError::Network("offline".to_owned()))],
    );
    assert_eq!(sent.len(), 2);
    assert_eq!(
        picks.cards(),
        &[CardState::Image("http://x/1.png".to_owned()), CardState::NetworkError, CardState::NetworkError]
    );
    assert!(!picks.busy());
}

#[test]
fn ok_http_without_image_is_error_card() {
    let mut picks = SmartPicks::new(1);
    let reply = Ok(GenerateReply { http_ok: true, body: GenerateResponse { ok: true, ..GenerateResponse::default() } });
    run_scripted(&mut picks, Vibe::Minimal, vec![reply]);
    assert_eq!(picks.cards(), &[CardState::Error]);
}

#[test]
fn selector_reenabled_for_next_run() {
    let mut picks = SmartPicks::new(1);
    run_scripted(&mut picks, Vibe::Cute, vec![failed_reply()]);
    assert!(!picks.busy());
    let sent = run_scripted(&mut picks, Vibe::Minimal, vec![image_reply("http://x/m.png")]);
    assert_eq!(sent.len(), 1);
    assert_eq!(picks.vibe(), Some(Vibe::Minimal));
}

#[test]
fn stale_updates_are_dropped() {
    let mut picks = SmartPicks::new(1);
    let old = picks.begin(Vibe::Cute).unwrap();
    picks.apply(old.ticket, PicksUpdate::Finished);
    let new = picks.begin(Vibe::Luxury).unwrap();

    picks.apply(
        old.ticket,
        PicksUpdate::Card {
            index: 0,
            outcome: GenerateOutcome::Image { url: "http://x/old.png".to_owned(), product: None },
        },
    );
    picks.apply(old.ticket, PicksUpdate::Finished);

    assert_eq!(picks.cards(), &[CardState::Loading]);
    assert!(picks.busy());
    assert_ne!(old.ticket, new.ticket);
}

#[test]
fn drive_always_ends_with_finished() {
    let run = PicksRun { ticket: 7, vibe: Vibe::Cute, cards: 2 };
    let mut updates = Vec::new();
    futures::executor::block_on(drive(
        run,
        |_| ready(Err(ApiError::Network("down".to_owned()))),
        |update| updates.push(update),
    ));
    assert_eq!(
        updates,
        vec![PicksUpdate::Card { index: 0, outcome: GenerateOutcome::NetworkError }, PicksUpdate::Finished]
    );
}
