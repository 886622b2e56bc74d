//! A parsed chat scoped to one upload/render cycle.
//!
//! The session owns the [`Chat`] and remembers which participant is viewing
//! it, so the renderer can put that participant's messages on the other side.
//! Sessions are plain values: callers serving several users keep one per
//! user, keyed however their front end identifies sessions.

use crate::chat::Chat;
use crate::error::{ChatError, Result};
use crate::message::ParsedMessage;

/// A parsed chat plus the viewer selection.
///
/// # Example
///
/// ```rust
/// use chatreplay::attachment::NoAttachments;
/// use chatreplay::chat::parse_str;
/// use chatreplay::session::ChatSession;
///
/// let chat = parse_str("1/2/23, 10:00 - Alice: Hi\n1/2/23, 10:01 - Bob: Hey", &NoAttachments)?;
/// let mut session = ChatSession::new(chat);
/// session.select_user("Bob")?;
///
/// let outgoing: Vec<bool> = session.chat().messages().iter().map(|m| session.is_outgoing(m)).collect();
/// assert_eq!(outgoing, vec![false, true]);
/// # Ok::<(), chatreplay::ChatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChatSession {
    chat: Chat,
    username: Option<String>,
}

impl ChatSession {
    /// Starts a session for a freshly parsed chat.
    pub fn new(chat: Chat) -> Self {
        Self {
            chat,
            username: None,
        }
    }

    /// Returns the parsed chat.
    pub fn chat(&self) -> &Chat {
        &self.chat
    }

    /// Consumes the session, returning the chat.
    pub fn into_chat(self) -> Chat {
        self.chat
    }

    /// Participants the viewer can pick from.
    pub fn names(&self) -> Vec<String> {
        self.chat.names()
    }

    /// Selects the viewing participant.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::UnknownSender`] if `name` never sent a message.
    pub fn select_user(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if !self.chat.has_sender(&name) {
            return Err(ChatError::UnknownSender { name });
        }
        self.username = Some(name);
        Ok(())
    }

    /// Returns the selected viewer, if any.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns `true` if `message` was sent by the selected viewer.
    pub fn is_outgoing(&self, message: &ParsedMessage) -> bool {
        self.username.is_some() && message.sender() == self.username()
    }
}
