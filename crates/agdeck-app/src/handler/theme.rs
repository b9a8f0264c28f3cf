//! Theme preference and OS appearance subscription handlers
//!
//! Every preference change persists the raw preference and then re-checks
//! the appearance subscription, so the watcher runs exactly while the
//! preference is `system`.

use agdeck_core::ThemePreference;
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::AppState;
use crate::theme::SubscriptionChange;

use super::{UpdateAction, UpdateResult};

fn preference_changed(state: &AppState) -> UpdateResult {
    let preference = state.theme.preference();
    info!(
        "Theme preference: {} (dark: {})",
        preference,
        state.theme.is_dark()
    );
    UpdateResult::action(UpdateAction::PersistThemePreference(preference))
        .with_message(Message::SyncAppearanceSubscription)
}

pub fn handle_set_preference(state: &mut AppState, preference: ThemePreference) -> UpdateResult {
    state.theme.set_preference(preference);
    preference_changed(state)
}

/// Quick toggle: dark becomes light, anything else becomes dark.
pub fn handle_toggle(state: &mut AppState) -> UpdateResult {
    state.theme.toggle();
    preference_changed(state)
}

/// light → dark → system → light
pub fn handle_cycle(state: &mut AppState) -> UpdateResult {
    let next = match state.theme.preference() {
        ThemePreference::Light => ThemePreference::Dark,
        ThemePreference::Dark => ThemePreference::System,
        ThemePreference::System => ThemePreference::Light,
    };
    handle_set_preference(state, next)
}

pub fn handle_sync_subscription(state: &mut AppState) -> UpdateResult {
    let Some(change) = state.theme.pending_subscription_change() else {
        return UpdateResult::none();
    };
    state.theme.apply_subscription_change(change);
    match change {
        SubscriptionChange::Subscribe => {
            UpdateResult::action(UpdateAction::WatchSystemAppearance)
        }
        SubscriptionChange::Unsubscribe => {
            state.watcher_error = None;
            UpdateResult::action(UpdateAction::UnwatchSystemAppearance)
        }
    }
}

/// Recompute the effective mode and persist the raw preference again.
pub fn handle_system_appearance(state: &mut AppState, prefers_dark: bool) -> UpdateResult {
    if state.theme.set_os_signal(prefers_dark) {
        debug!("OS appearance flipped effective theme (dark: {})", state.is_dark());
    }
    state.watcher_error = None;
    UpdateResult::action(UpdateAction::PersistThemePreference(
        state.theme.preference(),
    ))
}

pub fn handle_watcher_error(state: &mut AppState, message: String) -> UpdateResult {
    warn!("Appearance watcher: {}", message);
    state.watcher_error = Some(message);
    UpdateResult::none()
}
