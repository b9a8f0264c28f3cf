//! Message processing
//!
//! Runs a message through the TEA update function, follows any chained
//! messages, and dispatches the resulting actions.

use crate::actions::{handle_action, ActionContext};
use crate::assistant::TextGenerator;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<G>(state: &mut AppState, message: Message, ctx: &mut ActionContext<'_, G>)
where
    G: TextGenerator + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, ctx);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
