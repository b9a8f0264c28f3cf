//! Contact form handlers

use agdeck_core::ViewState;
use tracing::debug;

use crate::contact::SUBMIT_DURATION;
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_start_editing(state: &mut AppState) -> UpdateResult {
    if state.view() == ViewState::Contact {
        state.contact.start_editing();
    }
    UpdateResult::none()
}

/// Idle → Submitting; the mock transmission completes after a fixed delay.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.contact.submit() {
        Some(generation) => {
            debug!("Contact form submitted");
            UpdateResult::action(UpdateAction::schedule(
                SUBMIT_DURATION,
                Message::ContactSubmitElapsed { generation },
            ))
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_submit_elapsed(state: &mut AppState, generation: u64) -> UpdateResult {
    if state.contact.complete(generation) {
        debug!("Contact form transmission complete");
    }
    UpdateResult::none()
}
