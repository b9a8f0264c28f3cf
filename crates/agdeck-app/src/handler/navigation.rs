//! View switching and page scrolling handlers

use agdeck_core::ViewState;
use tracing::debug;

use crate::message::Message;
use crate::navigation::{DeferredScroll, DEFERRED_SCROLL_DELAY, PAGE_SCROLL_LINES};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Leaving a view drops whatever transient UI it had open.
fn close_transient_ui(state: &mut AppState) {
    state.pages.services_menu.close();
    state.contact.stop_editing();
}

pub fn handle_navigate(state: &mut AppState, view: ViewState, anchor: Option<String>) -> UpdateResult {
    close_transient_ui(state);
    let deferred = state.nav.navigate(view, anchor.as_deref());
    debug!("Navigate to {} (anchor: {:?})", view.label(), anchor);

    match deferred {
        Some(scroll) => UpdateResult::action(UpdateAction::schedule(
            DEFERRED_SCROLL_DELAY,
            Message::DeferredScrollElapsed(scroll),
        )),
        None => UpdateResult::none(),
    }
}

pub fn handle_select_service(state: &mut AppState, id: String) -> UpdateResult {
    close_transient_ui(state);
    debug!("Select service {}", id);
    state.nav.select_service(id);
    UpdateResult::none()
}

pub fn handle_deferred_scroll(state: &mut AppState, scroll: DeferredScroll) -> UpdateResult {
    if !state.nav.apply_deferred_scroll(&scroll) {
        debug!("Dropping superseded scroll to #{}", scroll.anchor);
    }
    UpdateResult::none()
}

pub fn handle_services_menu_select(state: &mut AppState) -> UpdateResult {
    let id = state.pages.services_menu.selected_service().id;
    handle_select_service(state, id.to_string())
}

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.nav.scroll.up(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.nav.scroll.down(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.nav.scroll.up(PAGE_SCROLL_LINES);
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.nav.scroll.down(PAGE_SCROLL_LINES);
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.nav.scroll.to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.nav.scroll.to_bottom();
    UpdateResult::none()
}
