//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in sibling modules:
//! - `navigation`: view switching and scrolling
//! - `theme`: theme preference and appearance subscription
//! - `companion`: companion widget and chat panel
//! - `contact`: contact form

use crate::message::Message;
use crate::state::AppState;

use super::{companion, contact, keys::handle_key, navigation, theme, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        // Nothing animates between frames; ticks only keep the loop drawing
        Message::Tick => UpdateResult::none(),

        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate { view, anchor } => navigation::handle_navigate(state, view, anchor),
        Message::SelectService { id } => navigation::handle_select_service(state, id),
        Message::DeferredScrollElapsed(scroll) => navigation::handle_deferred_scroll(state, scroll),

        Message::ScrollUp => navigation::handle_scroll_up(state),
        Message::ScrollDown => navigation::handle_scroll_down(state),
        Message::PageUp => navigation::handle_page_up(state),
        Message::PageDown => navigation::handle_page_down(state),
        Message::ScrollToTop => navigation::handle_scroll_to_top(state),
        Message::ScrollToBottom => navigation::handle_scroll_to_bottom(state),

        Message::ToggleServicesMenu => {
            state.pages.services_menu.toggle();
            UpdateResult::none()
        }
        Message::ServicesMenuUp => {
            state.pages.services_menu.up();
            UpdateResult::none()
        }
        Message::ServicesMenuDown => {
            state.pages.services_menu.down();
            UpdateResult::none()
        }
        Message::ServicesMenuSelect => navigation::handle_services_menu_select(state),

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::SetThemePreference(preference) => theme::handle_set_preference(state, preference),
        Message::ToggleTheme => theme::handle_toggle(state),
        Message::CycleThemePreference => theme::handle_cycle(state),
        Message::SyncAppearanceSubscription => theme::handle_sync_subscription(state),
        Message::SystemAppearanceChanged { prefers_dark } => {
            theme::handle_system_appearance(state, prefers_dark)
        }
        Message::AppearanceWatcherError { message } => theme::handle_watcher_error(state, message),

        // ─────────────────────────────────────────────────────────
        // Companion
        // ─────────────────────────────────────────────────────────
        Message::CompanionWake => companion::handle_wake(state),
        Message::CompanionToggleMenu => companion::handle_toggle_menu(state),
        Message::CompanionMenuUp => companion::handle_menu_up(state),
        Message::CompanionMenuDown => companion::handle_menu_down(state),
        Message::CompanionMenuConfirm => companion::handle_menu_confirm(state),
        Message::CompanionMenuChoose(item) => companion::handle_menu_choose(state, item),
        Message::CompanionSleep => companion::handle_sleep(state),
        Message::CompanionSleepElapsed { generation } => {
            companion::handle_sleep_elapsed(state, generation)
        }
        Message::CompanionMoodElapsed { generation } => {
            companion::handle_mood_elapsed(state, generation)
        }
        Message::CompanionAttentionRoll { generation, show } => {
            companion::handle_attention_roll(state, generation, show)
        }
        Message::CompanionToastElapsed { generation } => {
            companion::handle_toast_elapsed(state, generation)
        }

        Message::ChatClose => {
            state.chat.close_panel();
            UpdateResult::none()
        }
        Message::ChatInput(c) => {
            state.chat.push_input(c);
            UpdateResult::none()
        }
        Message::ChatBackspace => {
            state.chat.pop_input();
            UpdateResult::none()
        }
        Message::ChatClearInput => {
            state.chat.clear_input();
            UpdateResult::none()
        }
        Message::ChatSubmit => companion::handle_submit(state),
        Message::ChatQuickPrompt(index) => companion::handle_quick_prompt(state, index),
        Message::AssistantReplied { result } => companion::handle_reply(state, result),

        // ─────────────────────────────────────────────────────────
        // Contact form
        // ─────────────────────────────────────────────────────────
        Message::ContactStartEditing => contact::handle_start_editing(state),
        Message::ContactStopEditing => {
            state.contact.stop_editing();
            UpdateResult::none()
        }
        Message::ContactNextField => {
            state.contact.next_field();
            UpdateResult::none()
        }
        Message::ContactPrevField => {
            state.contact.prev_field();
            UpdateResult::none()
        }
        Message::ContactInput(c) => {
            state.contact.push_char(c);
            UpdateResult::none()
        }
        Message::ContactBackspace => {
            state.contact.pop_char();
            UpdateResult::none()
        }
        Message::ContactCycleCategory { forward } => {
            state.contact.cycle_category(forward);
            UpdateResult::none()
        }
        Message::ContactSubmit => contact::handle_submit(state),
        Message::ContactSubmitElapsed { generation } => {
            contact::handle_submit_elapsed(state, generation)
        }
        Message::ContactReset => {
            state.contact.reset();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Page state
        // ─────────────────────────────────────────────────────────
        Message::ToggleFaq(index) => {
            state.pages.toggle_faq(index);
            UpdateResult::none()
        }
        Message::NextTestimonial => {
            state.pages.next_testimonial();
            UpdateResult::none()
        }
        Message::PrevTestimonial => {
            state.pages.prev_testimonial();
            UpdateResult::none()
        }
        Message::NextPortfolioCategory => {
            state.pages.next_category();
            UpdateResult::none()
        }
        Message::PrevPortfolioCategory => {
            state.pages.prev_category();
            UpdateResult::none()
        }
    }
}
