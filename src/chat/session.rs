use super::responder::{GREETING, respond};
use crate::timer;
use crate::types::ChatMessage;
use std::time::Duration;

/// A bot reply waiting for its simulated typing delay to pass.
///
/// Only [`ChatSession::submit`] creates one and [`ChatSession::deliver`]
/// consumes it, so a session never has two replies in flight.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending reply must be delivered or the typing indicator never clears"]
pub struct PendingReply {
    reply: &'static str,
}

impl PendingReply {
    pub fn reply(&self) -> &'static str {
        self.reply
    }
}

/// State of the chat widget: panel visibility, input buffer, transcript
/// and typing indicator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    open: bool,
    input: String,
    typing: bool,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the panel. The greeting is seeded on the first open only.
    pub fn open(&mut self) {
        self.open = true;
        if self.transcript.is_empty() {
            self.transcript.push(ChatMessage::bot(GREETING));
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Whether the send button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.typing && !self.input.trim().is_empty()
    }

    /// Moves the input buffer, exactly as typed, into the transcript as a
    /// visitor message and starts the typing indicator.
    ///
    /// Returns `None` without touching any state when the buffer is blank or
    /// a reply is already pending.
    pub fn submit(&mut self) -> Option<PendingReply> {
        if !self.can_submit() {
            return None;
        }

        let text = std::mem::take(&mut self.input);
        let reply = respond(&text);
        tracing::debug!(len = text.len(), "chat message submitted");

        self.transcript.push(ChatMessage::user(text));
        self.typing = true;
        Some(PendingReply { reply })
    }

    /// Appends the bot reply and clears the typing indicator.
    pub fn deliver(&mut self, pending: PendingReply) {
        self.transcript.push(ChatMessage::bot(pending.reply));
        self.typing = false;
    }
}

/// Holds `pending` for the simulated typing `delay`, then hands it to
/// `deliver`, which is expected to call [`ChatSession::deliver`].
pub async fn deliver_after<F>(delay: Duration, pending: PendingReply, deliver: F)
where
    F: FnOnce(PendingReply),
{
    timer::sleep(delay).await;
    deliver(pending);
}
