//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from plain props; pages own the state signals and
//! decide what changes.

pub mod chat_transcript;
pub mod vibe_card;
