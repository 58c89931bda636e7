//! Custom-design chat composer.
//!
//! Echoes each submission and answers with a canned bot line; the `start`
//! keyword dismisses the intro text and greets the user.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::transcript::{Role, Transcript};

pub const START_KEYWORD: &str = "start";
pub const GREETING: &str = "Welcome! Describe the packaging look you want ✨";
pub const ACKNOWLEDGEMENT: &str = "👌 Got your description, preparing the preview…";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatComposer {
    pub transcript: Transcript,
    pub intro_visible: bool,
}

impl Default for ChatComposer {
    fn default() -> Self {
        Self { transcript: Transcript::default(), intro_visible: true }
    }
}

impl ChatComposer {
    /// Handle a composer submission. Returns `false` when the text was blank
    /// and nothing changed, in which case the input should not be cleared.
    pub fn submit(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.transcript.add_message(Role::User, text);
        if text.eq_ignore_ascii_case(START_KEYWORD) {
            self.intro_visible = false;
            self.transcript.add_message(Role::Bot, GREETING);
        } else {
            self.transcript.add_message(Role::Bot, ACKNOWLEDGEMENT);
        }
        true
    }
}
