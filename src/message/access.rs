//! Access rules for messages.
//!
//! Each check runs after the message has been loaded, so a missing message
//! always surfaces as "not found" before any permission decision.

use crate::{MessagelyError, Result};

use super::types::Message;

/// Only the sender or the recipient may view a message.
pub fn ensure_can_view(message: &Message, caller: &str) -> Result<()> {
    if message.is_participant(caller) {
        Ok(())
    } else {
        Err(MessagelyError::Permission(
            "you are not authorized to view this message".to_string(),
        ))
    }
}

/// Only the recipient may mark a message read. The sender is rejected too.
pub fn ensure_recipient(message: &Message, caller: &str) -> Result<()> {
    if message.is_recipient(caller) {
        Ok(())
    } else {
        Err(MessagelyError::Permission(
            "only the recipient can mark this message as read".to_string(),
        ))
    }
}

/// A user's message lists are visible to that user only.
pub fn ensure_same_user(caller: &str, username: &str) -> Result<()> {
    if caller == username {
        Ok(())
    } else {
        Err(MessagelyError::Permission(
            "you can only view your own messages".to_string(),
        ))
    }
}
