//! The `update` half of the TEA loop
//!
//! `update` dispatches each [`Message`]; the per-area handlers live in:
//! - `keys`: key presses to messages, per UI mode
//! - `navigation`: View switching and scrolling
//! - `theme`: Theme preference and appearance subscription
//! - `companion`: Companion widget and chat panel
//! - `contact`: Contact form

pub(crate) mod companion;
pub(crate) mod contact;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod theme;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use agdeck_core::ThemePreference;

use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Send `message` back into the loop after `delay`
    Schedule { delay: Duration, message: Message },

    /// Wait one attention interval, roll the dice, and report back with
    /// `Message::CompanionAttentionRoll`
    ScheduleAttentionRoll { generation: u64 },

    /// Ask the text-generation collaborator for a reply
    RequestAssistantReply { prompt: String },

    /// Write the raw theme preference to disk
    PersistThemePreference(ThemePreference),

    /// Start the OS appearance subscription
    WatchSystemAppearance,

    /// Stop the OS appearance subscription
    UnwatchSystemAppearance,

    /// Several independent actions from one message
    Batch(Vec<UpdateAction>),
}

impl UpdateAction {
    pub fn schedule(delay: Duration, message: Message) -> Self {
        UpdateAction::Schedule { delay, message }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Attach a follow-up message to this result
    pub fn with_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
