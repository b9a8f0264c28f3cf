//! Key event handlers for different UI modes

use agdeck_core::{HomeSection, ViewState, FAQ_ITEMS, SERVICES};

use crate::chat::{MenuItem, QUICK_PROMPTS};
use crate::contact::{ContactField, ContactStatus};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always quits, whatever has focus
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::Help => handle_key_help(key),
        UiMode::Chat => handle_key_chat(state, key),
        UiMode::CompanionMenu => handle_key_companion_menu(key),
        UiMode::ServicesMenu => handle_key_services_menu(key),
        UiMode::ContactEdit => handle_key_contact_edit(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('?' | 'q') | InputKey::Enter => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Typing goes to the chat draft; digits pick a quick prompt while the
/// draft is empty.
fn handle_key_chat(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ChatClose),
        InputKey::Enter => Some(Message::ChatSubmit),
        InputKey::Backspace => Some(Message::ChatBackspace),
        InputKey::CharCtrl('u') => Some(Message::ChatClearInput),

        InputKey::Char(c @ '1'..='9')
            if state.chat.input().is_empty() && state.chat.quick_prompts_visible() =>
        {
            let index = c as usize - '1' as usize;
            (index < QUICK_PROMPTS.len()).then_some(Message::ChatQuickPrompt(index))
        }

        other => other.printable().map(Message::ChatInput),
    }
}

fn handle_key_companion_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::CompanionMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CompanionMenuDown),
        InputKey::Enter => Some(Message::CompanionMenuConfirm),
        InputKey::Esc | InputKey::Char('m') => Some(Message::CompanionToggleMenu),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char(c) => MenuItem::ALL
            .into_iter()
            .find(|item| item.hotkey() == c)
            .map(Message::CompanionMenuChoose),
        _ => None,
    }
}

fn handle_key_services_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ServicesMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ServicesMenuDown),
        InputKey::Enter => Some(Message::ServicesMenuSelect),
        InputKey::Esc | InputKey::Char('s') => Some(Message::ToggleServicesMenu),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_contact_edit(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.contact.focus();
    match key {
        InputKey::Esc => Some(Message::ContactStopEditing),
        InputKey::Tab | InputKey::Down => Some(Message::ContactNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::ContactPrevField),
        InputKey::CharCtrl('s') => Some(Message::ContactSubmit),
        InputKey::Enter if focus == ContactField::Brief => Some(Message::ContactSubmit),
        InputKey::Enter => Some(Message::ContactNextField),
        InputKey::Backspace => Some(Message::ContactBackspace),

        InputKey::Left if focus == ContactField::Category => {
            Some(Message::ContactCycleCategory { forward: false })
        }
        InputKey::Right | InputKey::Char(' ') if focus == ContactField::Category => {
            Some(Message::ContactCycleCategory { forward: true })
        }

        other => other.printable().map(Message::ContactInput),
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let view = state.view();

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('?') => Some(Message::ToggleHelp),

        // ─────────────────────────────────────────────────────────
        // Navbar
        // ─────────────────────────────────────────────────────────
        InputKey::Char('h') => Some(Message::navigate_home_to(HomeSection::Hero.anchor())),
        InputKey::Char('a') => Some(Message::navigate(ViewState::About)),
        InputKey::Char('p') => Some(Message::navigate(ViewState::Portfolio)),
        InputKey::Char('c') => Some(Message::navigate(ViewState::Contact)),
        InputKey::Char('s') => Some(Message::ToggleServicesMenu),
        InputKey::Char('b') | InputKey::Esc if view != ViewState::Home => {
            Some(Message::navigate(ViewState::Home))
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('T') => Some(Message::CycleThemePreference),

        // ─────────────────────────────────────────────────────────
        // Companion
        // ─────────────────────────────────────────────────────────
        InputKey::Char('w') if state.companion_enabled && !state.chat.is_visible() => {
            Some(Message::CompanionWake)
        }
        InputKey::Char('m') if state.companion_visible() => Some(Message::CompanionToggleMenu),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        _ => handle_key_page(state, view, key),
    }
}

/// Keys whose meaning depends on the page on screen
fn handle_key_page(state: &AppState, view: ViewState, key: InputKey) -> Option<Message> {
    match (view, key) {
        // Home: section stepping, service cards, testimonial carousel
        (ViewState::Home, InputKey::Tab) => {
            let next = state
                .nav
                .scroll
                .last_section
                .map_or(HomeSection::Services, |s| s.next());
            Some(Message::navigate_home_to(next.anchor()))
        }
        (ViewState::Home, InputKey::BackTab) => {
            let prev = state
                .nav
                .scroll
                .last_section
                .map_or(HomeSection::Hero, |s| s.prev());
            Some(Message::navigate_home_to(prev.anchor()))
        }
        (ViewState::Home, InputKey::Char(c @ '1'..='9')) => {
            let index = c as usize - '1' as usize;
            SERVICES.get(index).map(|service| Message::SelectService {
                id: service.id.to_string(),
            })
        }
        (ViewState::Home, InputKey::Char('[')) => Some(Message::PrevTestimonial),
        (ViewState::Home, InputKey::Char(']')) => Some(Message::NextTestimonial),
        (ViewState::Home, InputKey::Enter) => Some(Message::navigate(ViewState::Contact)),

        // About: FAQ accordion
        (ViewState::About, InputKey::Char(c @ '1'..='9')) => {
            let index = c as usize - '1' as usize;
            (index < FAQ_ITEMS.len()).then_some(Message::ToggleFaq(index))
        }

        // Portfolio: category filter
        (ViewState::Portfolio, InputKey::Char('[') | InputKey::Left) => {
            Some(Message::PrevPortfolioCategory)
        }
        (ViewState::Portfolio, InputKey::Char(']') | InputKey::Right) => {
            Some(Message::NextPortfolioCategory)
        }

        // Contact: edit, send another
        (ViewState::Contact, InputKey::Enter) => match state.contact.status() {
            ContactStatus::Idle => Some(Message::ContactStartEditing),
            ContactStatus::Success => Some(Message::ContactReset),
            ContactStatus::Submitting => None,
        },
        (ViewState::Contact, InputKey::Char('r')) => Some(Message::ContactReset),

        // Service detail: "Start project" goes to the contact page
        (ViewState::ServiceDetail, InputKey::Enter) => Some(Message::navigate(ViewState::Contact)),

        _ => None,
    }
}
