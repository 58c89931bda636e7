//! Chat transcript model shared by the wizard and the chat composer.
//!
//! Messages carry stable ids so a single bubble (the wizard's "generating"
//! placeholder) can be rewritten in place rather than appended twice.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

/// Who authored a transcript line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "msg user",
            Self::Bot => "msg bot",
        }
    }
}

/// A single transcript bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    /// Image rendered beneath the text, if any.
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<TranscriptMessage>,
}

impl Transcript {
    /// Append a message and return its id.
    pub fn add_message(&mut self, role: Role, text: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.messages.push(TranscriptMessage { id: id.clone(), role, text: text.into(), image_url: None });
        id
    }

    /// Replace the text of message `id`. Returns `false` if it is gone.
    pub fn rewrite(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.find_mut(id) {
            Some(msg) => {
                msg.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Attach an image beneath message `id`. Returns `false` if it is gone.
    pub fn attach_image(&mut self, id: &str, url: impl Into<String>) -> bool {
        match self.find_mut(id) {
            Some(msg) => {
                msg.image_url = Some(url.into());
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[TranscriptMessage] {
        &self.messages
    }

    pub fn get(&self, id: &str) -> Option<&TranscriptMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn last(&self) -> Option<&TranscriptMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Sources of every attached image, oldest first.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().filter_map(|m| m.image_url.as_deref())
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut TranscriptMessage> {
        self.messages.iter_mut().find(|m| m.id == id)
    }
}
