//! Companion widget and chat panel handlers
//!
//! Timers never reach into state: every delayed effect comes back as a
//! message carrying the generation it was scheduled with, and the chat
//! state drops it if the generation is stale.

use tracing::{debug, warn};

use crate::chat::{
    AttentionOutcome, MenuItem, REPLY_MOOD_DURATION, SLEEP_DURATION, TOAST_DURATION, WAVE_DURATION,
};
use crate::message::Message;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_wake(state: &mut AppState) -> UpdateResult {
    if !state.companion_enabled {
        return UpdateResult::none();
    }
    let Some(timers) = state.chat.wake() else {
        return UpdateResult::none();
    };
    debug!("Companion awake");
    UpdateResult::action(UpdateAction::Batch(vec![
        UpdateAction::schedule(
            WAVE_DURATION,
            Message::CompanionMoodElapsed {
                generation: timers.mood_generation,
            },
        ),
        UpdateAction::ScheduleAttentionRoll {
            generation: timers.attention_generation,
        },
    ]))
}

pub fn handle_toggle_menu(state: &mut AppState) -> UpdateResult {
    if state.companion_enabled {
        state.chat.toggle_menu();
    }
    UpdateResult::none()
}

pub fn handle_menu_up(state: &mut AppState) -> UpdateResult {
    if state.chat.is_menu_open() {
        state.chat.menu_up();
    }
    UpdateResult::none()
}

pub fn handle_menu_down(state: &mut AppState) -> UpdateResult {
    if state.chat.is_menu_open() {
        state.chat.menu_down();
    }
    UpdateResult::none()
}

pub fn handle_menu_confirm(state: &mut AppState) -> UpdateResult {
    if !state.chat.is_menu_open() {
        return UpdateResult::none();
    }
    UpdateResult::message(Message::CompanionMenuChoose(state.chat.menu_selected()))
}

pub fn handle_menu_choose(state: &mut AppState, item: MenuItem) -> UpdateResult {
    if !state.chat.is_menu_open() || state.chat.is_closing() {
        return UpdateResult::none();
    }
    match item {
        MenuItem::Help => {
            state.chat.open_panel();
            UpdateResult::none()
        }
        MenuItem::Grid => {
            state.chat.close_menu();
            UpdateResult::message(Message::ToggleTheme)
        }
        MenuItem::Sleep => UpdateResult::message(Message::CompanionSleep),
    }
}

pub fn handle_sleep(state: &mut AppState) -> UpdateResult {
    match state.chat.begin_sleep() {
        Some(generation) => {
            debug!("Companion going to sleep");
            UpdateResult::action(UpdateAction::schedule(
                SLEEP_DURATION,
                Message::CompanionSleepElapsed { generation },
            ))
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_sleep_elapsed(state: &mut AppState, generation: u64) -> UpdateResult {
    state.chat.finish_sleep(generation);
    UpdateResult::none()
}

pub fn handle_mood_elapsed(state: &mut AppState, generation: u64) -> UpdateResult {
    state.chat.expire_mood(generation);
    UpdateResult::none()
}

pub fn handle_attention_roll(state: &mut AppState, generation: u64, show: bool) -> UpdateResult {
    match state.chat.attention_roll(generation, show) {
        AttentionOutcome::Stop => UpdateResult::none(),
        AttentionOutcome::Continue => {
            UpdateResult::action(UpdateAction::ScheduleAttentionRoll { generation })
        }
        AttentionOutcome::ShowToast { toast_generation } => {
            UpdateResult::action(UpdateAction::Batch(vec![
                UpdateAction::schedule(
                    TOAST_DURATION,
                    Message::CompanionToastElapsed {
                        generation: toast_generation,
                    },
                ),
                UpdateAction::ScheduleAttentionRoll { generation },
            ]))
        }
    }
}

pub fn handle_toast_elapsed(state: &mut AppState, generation: u64) -> UpdateResult {
    state.chat.dismiss_toast(generation);
    UpdateResult::none()
}

fn request_reply(prompt: Option<String>) -> UpdateResult {
    match prompt {
        Some(prompt) => UpdateResult::action(UpdateAction::RequestAssistantReply { prompt }),
        None => UpdateResult::none(),
    }
}

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    request_reply(state.chat.submit())
}

pub fn handle_quick_prompt(state: &mut AppState, index: usize) -> UpdateResult {
    request_reply(state.chat.send_quick_prompt(index))
}

pub fn handle_reply(state: &mut AppState, result: Result<String, String>) -> UpdateResult {
    if let Err(e) = &result {
        warn!("Assistant request failed: {}", e);
    }
    match state.chat.receive_reply(result) {
        Some(generation) => UpdateResult::action(UpdateAction::schedule(
            REPLY_MOOD_DURATION,
            Message::CompanionMoodElapsed { generation },
        )),
        None => UpdateResult::none(),
    }
}
