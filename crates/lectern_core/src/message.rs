//! Chat message type.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A role-tagged segment of a chat prompt.
///
/// # Examples
///
/// ```
/// use lectern_core::{ChatMessage, Role};
///
/// let message = ChatMessage::user("Style: Short (bullet points)\n\nNotes:\nCells divide.");
///
/// assert_eq!(*message.role(), Role::User);
/// assert!(message.content().ends_with("Cells divide."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChatMessage {
    /// The role of the message author
    role: Role,
    /// Message text
    content: String,
}

impl ChatMessage {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system instruction.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
