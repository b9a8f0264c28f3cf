//! Tests for handler module

use std::time::Duration;

use super::*;
use crate::chat::{
    ChatPhase, MenuItem, ERROR_FALLBACK, QUICK_PROMPTS, REPLY_MOOD_DURATION, SLEEP_DURATION,
    TOAST_DURATION, WAVE_DURATION,
};
use crate::contact::{ContactField, ContactStatus, SUBMIT_DURATION};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::{ScrollRequest, DEFERRED_SCROLL_DELAY};
use crate::state::{AppState, UiMode};
use agdeck_core::{HomeSection, Mood, ThemePreference, ViewState};

/// Run a message and every follow-up message, collecting the actions
/// the way the engine's process loop would.
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        if let Some(action) = result.action {
            actions.push(action);
        }
        next = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

/// Pull the `(delay, message)` of every scheduled timer out of `actions`
fn scheduled(actions: &[UpdateAction]) -> Vec<(Duration, Message)> {
    let mut out = Vec::new();
    for action in actions {
        match action {
            UpdateAction::Schedule { delay, message } => out.push((*delay, message.clone())),
            UpdateAction::Batch(inner) => out.extend(scheduled(inner)),
            _ => {}
        }
    }
    out
}

fn awake_state() -> AppState {
    let mut state = AppState::new();
    run(&mut state, Message::CompanionWake);
    state
}

fn chat_open_state() -> AppState {
    let mut state = awake_state();
    run(&mut state, Message::CompanionToggleMenu);
    run(&mut state, Message::CompanionMenuChoose(MenuItem::Help));
    state
}

// ─────────────────────────────────────────────────────────────────────────────
// Quit & help
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_quit_message() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
}

#[test]
fn test_ctrl_c_quits_from_every_mode() {
    let mut state = chat_open_state();
    assert_eq!(state.ui_mode(), UiMode::Chat);
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));

    state.show_help = true;
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_help_overlay_toggles() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('?'));
    assert_eq!(state.ui_mode(), UiMode::Help);

    // Navigation keys are swallowed while help is up
    assert_eq!(handle_key(&state, InputKey::Char('a')), None);

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode(), UiMode::Normal);
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_system_preference_follows_light_os_signal() {
    let mut state = AppState::with_settings(Default::default(), ThemePreference::Dark, false);

    run(&mut state, Message::SetThemePreference(ThemePreference::System));

    assert!(!state.is_dark());
}

#[test]
fn test_dark_preference_ignores_os_signal() {
    let mut state = AppState::new();
    run(&mut state, Message::SetThemePreference(ThemePreference::Dark));

    for prefers_dark in [false, true, false] {
        run(&mut state, Message::SystemAppearanceChanged { prefers_dark });
        assert!(state.is_dark());
    }
}

#[test]
fn test_effective_mode_recomputed_on_os_change() {
    let mut state = AppState::new();
    run(&mut state, Message::SetThemePreference(ThemePreference::System));

    run(&mut state, Message::SystemAppearanceChanged { prefers_dark: false });
    assert!(!state.is_dark());
    run(&mut state, Message::SystemAppearanceChanged { prefers_dark: true });
    assert!(state.is_dark());
}

#[test]
fn test_os_change_persists_raw_preference() {
    let mut state = AppState::new();
    run(&mut state, Message::SetThemePreference(ThemePreference::System));

    let actions = run(&mut state, Message::SystemAppearanceChanged { prefers_dark: false });
    assert_eq!(
        actions,
        vec![UpdateAction::PersistThemePreference(ThemePreference::System)]
    );
}

#[test]
fn test_preference_change_persists_and_subscribes() {
    let mut state = AppState::new();

    let actions = run(&mut state, Message::SetThemePreference(ThemePreference::System));

    assert_eq!(
        actions,
        vec![
            UpdateAction::PersistThemePreference(ThemePreference::System),
            UpdateAction::WatchSystemAppearance,
        ]
    );
    assert!(state.theme.is_subscribed());
}

#[test]
fn test_leaving_system_unsubscribes() {
    let mut state = AppState::new();
    run(&mut state, Message::SetThemePreference(ThemePreference::System));

    let actions = run(&mut state, Message::SetThemePreference(ThemePreference::Light));

    assert_eq!(
        actions,
        vec![
            UpdateAction::PersistThemePreference(ThemePreference::Light),
            UpdateAction::UnwatchSystemAppearance,
        ]
    );
    assert!(!state.theme.is_subscribed());
}

#[test]
fn test_setting_same_preference_still_persists_without_resubscribing() {
    let mut state = AppState::new();
    run(&mut state, Message::SetThemePreference(ThemePreference::System));

    let actions = run(&mut state, Message::SetThemePreference(ThemePreference::System));

    assert_eq!(
        actions,
        vec![UpdateAction::PersistThemePreference(ThemePreference::System)]
    );
}

#[test]
fn test_toggle_key_flips_dark_to_light() {
    let mut state = AppState::new();
    assert!(state.is_dark());

    let actions = press(&mut state, InputKey::Char('t'));

    assert!(!state.is_dark());
    assert_eq!(state.theme.preference(), ThemePreference::Light);
    assert_eq!(
        actions,
        vec![UpdateAction::PersistThemePreference(ThemePreference::Light)]
    );
}

#[test]
fn test_toggle_from_system_goes_dark() {
    let mut state = AppState::with_settings(Default::default(), ThemePreference::System, false);
    run(&mut state, Message::ToggleTheme);
    assert_eq!(state.theme.preference(), ThemePreference::Dark);
}

#[test]
fn test_cycle_preference_order() {
    let mut state = AppState::with_settings(Default::default(), ThemePreference::Light, true);
    let mut seen = Vec::new();
    for _ in 0..3 {
        press(&mut state, InputKey::Char('T'));
        seen.push(state.theme.preference());
    }
    assert_eq!(
        seen,
        vec![
            ThemePreference::Dark,
            ThemePreference::System,
            ThemePreference::Light
        ]
    );
}

#[test]
fn test_watcher_error_is_recorded_and_cleared_by_signal() {
    let mut state = AppState::new();
    run(
        &mut state,
        Message::AppearanceWatcherError {
            message: "inotify limit".to_string(),
        },
    );
    assert_eq!(state.watcher_error.as_deref(), Some("inotify limit"));

    run(&mut state, Message::SystemAppearanceChanged { prefers_dark: true });
    assert!(state.watcher_error.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_navigate_contact_from_any_view() {
    for from in [
        ViewState::Home,
        ViewState::About,
        ViewState::Portfolio,
        ViewState::ServiceDetail,
        ViewState::Contact,
    ] {
        let mut state = AppState::new();
        if from == ViewState::ServiceDetail {
            run(&mut state, Message::SelectService { id: "web".into() });
        } else {
            run(&mut state, Message::navigate(from));
        }
        state.nav.scroll.down(25);

        let actions = run(&mut state, Message::navigate(ViewState::Contact));

        assert!(actions.is_empty());
        assert_eq!(state.view(), ViewState::Contact);
        assert!(state.nav.selected_service_id().is_none());
        assert_eq!(state.nav.scroll.offset, 0);
    }
}

#[test]
fn test_select_service_resolves_catalog_entry() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectService { id: "web".into() });

    assert_eq!(state.view(), ViewState::ServiceDetail);
    let service = state.active_service().unwrap();
    assert_eq!(service.id, "web");
    assert_eq!(service.title, agdeck_core::find_service("web").unwrap().title);
}

#[test]
fn test_select_unknown_service_has_nothing_to_render() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectService { id: "ghost".into() });
    assert_eq!(state.view(), ViewState::ServiceDetail);
    assert!(state.active_service().is_none());
}

#[test]
fn test_navigate_home_with_anchor_schedules_deferred_scroll() {
    let mut state = AppState::new();
    run(&mut state, Message::navigate(ViewState::About));

    let actions = run(&mut state, Message::navigate_home_to("process"));
    let timers = scheduled(&actions);

    assert_eq!(timers.len(), 1);
    let (delay, message) = timers[0].clone();
    assert_eq!(delay, DEFERRED_SCROLL_DELAY);

    run(&mut state, message);
    assert_eq!(
        state.nav.scroll.request,
        Some(ScrollRequest::Section(HomeSection::Process))
    );
}

#[test]
fn test_deferred_scroll_dropped_after_newer_navigation() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::navigate_home_to("testimonials"));
    let (_, stale) = scheduled(&actions).remove(0);

    run(&mut state, Message::navigate(ViewState::Portfolio));
    run(&mut state, stale);

    assert_eq!(state.view(), ViewState::Portfolio);
    assert_eq!(state.nav.scroll.request, None);
}

#[test]
fn test_navbar_keys() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('a'));
    assert_eq!(state.view(), ViewState::About);
    press(&mut state, InputKey::Char('p'));
    assert_eq!(state.view(), ViewState::Portfolio);
    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.view(), ViewState::Contact);
    press(&mut state, InputKey::Char('b'));
    assert_eq!(state.view(), ViewState::Home);
}

#[test]
fn test_escape_on_home_does_nothing() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Esc), None);
}

#[test]
fn test_services_dropdown_selects_service() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('s'));
    assert_eq!(state.ui_mode(), UiMode::ServicesMenu);

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode(), UiMode::Normal);
    assert_eq!(state.view(), ViewState::ServiceDetail);
    assert_eq!(
        state.active_service().map(|s| s.id),
        Some(agdeck_core::SERVICES[1].id)
    );
}

#[test]
fn test_home_digit_opens_service_card() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char('3'));
    assert_eq!(
        state.active_service().map(|s| s.id),
        Some(agdeck_core::SERVICES[2].id)
    );
    assert_eq!(handle_key(&AppState::new(), InputKey::Char('9')), None);
}

#[test]
fn test_home_tab_steps_through_sections() {
    let mut state = AppState::new();

    for expected in [HomeSection::Services, HomeSection::Portfolio] {
        let actions = press(&mut state, InputKey::Tab);
        let (_, elapsed) = scheduled(&actions).remove(0);
        run(&mut state, elapsed);
        assert_eq!(
            state.nav.scroll.request,
            Some(ScrollRequest::Section(expected))
        );
    }

    let actions = press(&mut state, InputKey::BackTab);
    let (_, elapsed) = scheduled(&actions).remove(0);
    run(&mut state, elapsed);
    assert_eq!(state.nav.scroll.last_section, Some(HomeSection::Services));
}

#[test]
fn test_scroll_keys() {
    let mut state = AppState::new();
    press(&mut state, InputKey::PageDown);
    press(&mut state, InputKey::Down);
    assert_eq!(state.nav.scroll.offset, 11);
    press(&mut state, InputKey::Up);
    assert_eq!(state.nav.scroll.offset, 10);
    press(&mut state, InputKey::End);
    assert_eq!(state.nav.scroll.request, Some(ScrollRequest::Bottom));
    press(&mut state, InputKey::Home);
    assert_eq!(state.nav.scroll.offset, 0);
    assert_eq!(state.nav.scroll.request, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_about_digits_toggle_faq() {
    let mut state = AppState::new();
    run(&mut state, Message::navigate(ViewState::About));
    press(&mut state, InputKey::Char('2'));
    assert_eq!(state.pages.faq_open, Some(1));
    press(&mut state, InputKey::Char('2'));
    assert_eq!(state.pages.faq_open, None);
}

#[test]
fn test_portfolio_brackets_change_category() {
    let mut state = AppState::new();
    run(&mut state, Message::navigate(ViewState::Portfolio));
    assert_eq!(state.pages.category(), "All");
    press(&mut state, InputKey::Char(']'));
    assert_ne!(state.pages.category(), "All");
    press(&mut state, InputKey::Char('['));
    assert_eq!(state.pages.category(), "All");
}

#[test]
fn test_home_brackets_rotate_testimonials() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Char(']'));
    assert_eq!(state.pages.testimonial, 1);
    press(&mut state, InputKey::Char('['));
    assert_eq!(state.pages.testimonial, 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Companion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_wake_waves_then_reverts() {
    let mut state = AppState::new();
    let actions = press(&mut state, InputKey::Char('w'));

    assert_eq!(state.chat.phase(), ChatPhase::AwakeIdle);
    assert_eq!(state.chat.mood(), Mood::Wave);
    assert!(actions.iter().any(|a| matches!(
        a,
        UpdateAction::Batch(inner)
            if inner.iter().any(|i| matches!(i, UpdateAction::ScheduleAttentionRoll { .. }))
    )));

    let (delay, revert) = scheduled(&actions).remove(0);
    assert_eq!(delay, WAVE_DURATION);
    run(&mut state, revert);
    assert_eq!(state.chat.mood(), Mood::Neutral);
}

#[test]
fn test_wake_ignored_when_companion_disabled() {
    let mut state = AppState::new();
    state.companion_enabled = false;
    assert_eq!(handle_key(&state, InputKey::Char('w')), None);

    let actions = run(&mut state, Message::CompanionWake);
    assert!(actions.is_empty());
    assert!(!state.companion_visible());
}

#[test]
fn test_menu_toggle_and_help_opens_panel() {
    let mut state = awake_state();
    press(&mut state, InputKey::Char('m'));
    assert_eq!(state.ui_mode(), UiMode::CompanionMenu);

    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.chat.phase(), ChatPhase::AwakeChatOpen);
    assert!(!state.chat.is_menu_open());
    assert_eq!(state.ui_mode(), UiMode::Chat);
}

#[test]
fn test_menu_navigation_and_confirm() {
    let mut state = awake_state();
    run(&mut state, Message::CompanionToggleMenu);
    press(&mut state, InputKey::Down);
    assert_eq!(state.chat.menu_selected(), MenuItem::Grid);

    press(&mut state, InputKey::Enter);

    assert!(!state.chat.is_menu_open());
    assert!(!state.is_dark());
}

#[test]
fn test_menu_cannot_toggle_with_panel_open() {
    let mut state = chat_open_state();
    run(&mut state, Message::CompanionToggleMenu);
    assert!(!state.chat.is_menu_open());
    assert!(state.chat.is_panel_open());
}

#[test]
fn test_sleep_hides_after_delay() {
    let mut state = chat_open_state();
    run(&mut state, Message::ChatClose);
    run(&mut state, Message::CompanionToggleMenu);

    let actions = press(&mut state, InputKey::Char('z'));
    assert_eq!(state.chat.phase(), ChatPhase::AwakeClosing);
    assert_eq!(state.chat.mood(), Mood::Affection);

    let (delay, elapsed) = scheduled(&actions).remove(0);
    assert_eq!(delay, SLEEP_DURATION);
    run(&mut state, elapsed);

    assert_eq!(state.chat.phase(), ChatPhase::Dormant);
    assert!(!state.chat.is_menu_open());
    assert!(!state.chat.is_panel_open());
}

#[test]
fn test_attention_roll_shows_toast_and_keeps_rolling() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::CompanionWake);
    let generation = actions
        .iter()
        .find_map(|a| match a {
            UpdateAction::Batch(inner) => inner.iter().find_map(|i| match i {
                UpdateAction::ScheduleAttentionRoll { generation } => Some(*generation),
                _ => None,
            }),
            _ => None,
        })
        .unwrap();

    let actions = run(
        &mut state,
        Message::CompanionAttentionRoll {
            generation,
            show: true,
        },
    );
    assert!(state.chat.is_toast_visible());
    let (delay, dismiss) = scheduled(&actions).remove(0);
    assert_eq!(delay, TOAST_DURATION);

    run(&mut state, dismiss);
    assert!(!state.chat.is_toast_visible());

    let actions = run(
        &mut state,
        Message::CompanionAttentionRoll {
            generation,
            show: false,
        },
    );
    assert_eq!(
        actions,
        vec![UpdateAction::ScheduleAttentionRoll { generation }]
    );
}

#[test]
fn test_attention_roll_suppressed_while_panel_open() {
    let mut state = chat_open_state();
    let generation = 1;
    run(
        &mut state,
        Message::CompanionAttentionRoll {
            generation,
            show: true,
        },
    );
    assert!(!state.chat.is_toast_visible());
}

#[test]
fn test_empty_chat_submit_changes_nothing() {
    let mut state = chat_open_state();
    let before = state.chat.messages().len();

    let actions = press(&mut state, InputKey::Enter);

    assert!(actions.is_empty());
    assert_eq!(state.chat.messages().len(), before);
    assert!(!state.chat.is_pending());
    assert_eq!(state.chat.input(), "");
}

#[test]
fn test_typing_and_submitting_requests_reply() {
    let mut state = chat_open_state();
    for c in "hi there".chars() {
        press(&mut state, InputKey::Char(c));
    }
    assert_eq!(state.chat.input(), "hi there");

    let actions = press(&mut state, InputKey::Enter);

    assert_eq!(
        actions,
        vec![UpdateAction::RequestAssistantReply {
            prompt: "hi there".to_string()
        }]
    );
    assert!(state.chat.is_pending());
    assert_eq!(state.chat.mood(), Mood::Scanning);
    assert_eq!(state.chat.input(), "");
}

#[test]
fn test_failed_reply_appends_fallback_and_clears_pending() {
    let mut state = chat_open_state();
    let before = state.chat.messages().len();
    run(&mut state, Message::ChatQuickPrompt(0));

    let actions = run(
        &mut state,
        Message::AssistantReplied {
            result: Err("connection refused".to_string()),
        },
    );

    assert!(!state.chat.is_pending());
    assert_eq!(state.chat.messages().len(), before + 2);
    assert_eq!(state.chat.messages().last().unwrap().text, ERROR_FALLBACK);
    assert_eq!(state.chat.mood(), Mood::Alert);

    let (delay, revert) = scheduled(&actions).remove(0);
    assert_eq!(delay, REPLY_MOOD_DURATION);
    run(&mut state, revert);
    assert_eq!(state.chat.mood(), Mood::Neutral);
}

#[test]
fn test_send_while_pending_is_rejected() {
    let mut state = chat_open_state();
    run(&mut state, Message::ChatQuickPrompt(1));
    let before = state.chat.messages().len();

    let actions = run(&mut state, Message::ChatQuickPrompt(2));

    assert!(actions.is_empty());
    assert_eq!(state.chat.messages().len(), before);
}

#[test]
fn test_quick_prompt_digits_only_with_empty_draft() {
    let mut state = chat_open_state();
    assert_eq!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::ChatQuickPrompt(0))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('5')),
        None,
        "only {} quick prompts exist",
        QUICK_PROMPTS.len()
    );

    press(&mut state, InputKey::Char('a'));
    assert_eq!(
        handle_key(&state, InputKey::Char('1')),
        Some(Message::ChatInput('1'))
    );
}

#[test]
fn test_stale_mood_revert_is_ignored() {
    let mut state = chat_open_state();
    let stale = scheduled(&run(&mut state, Message::ChatQuickPrompt(0)));
    assert!(stale.is_empty());

    let actions = run(
        &mut state,
        Message::AssistantReplied {
            result: Ok("Uplink secure".to_string()),
        },
    );
    let (_, first_revert) = scheduled(&actions).remove(0);
    assert_eq!(state.chat.mood(), Mood::Happy);

    run(&mut state, Message::ChatQuickPrompt(1));
    assert_eq!(state.chat.mood(), Mood::Scanning);

    run(&mut state, first_revert);
    assert_eq!(state.chat.mood(), Mood::Scanning);
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact form
// ─────────────────────────────────────────────────────────────────────────────

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

#[test]
fn test_contact_form_flow() {
    let mut state = AppState::new();
    run(&mut state, Message::navigate(ViewState::Contact));

    press(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode(), UiMode::ContactEdit);

    type_text(&mut state, "Ada");
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "ada@example.com");
    press(&mut state, InputKey::Tab);
    assert_eq!(state.contact.focus(), ContactField::Category);
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Tab);
    type_text(&mut state, "New storefront");

    let actions = press(&mut state, InputKey::Enter);
    assert_eq!(state.contact.status(), ContactStatus::Submitting);
    assert_eq!(state.ui_mode(), UiMode::Normal);

    let (delay, elapsed) = scheduled(&actions).remove(0);
    assert_eq!(delay, SUBMIT_DURATION);
    run(&mut state, elapsed);
    assert_eq!(state.contact.status(), ContactStatus::Success);

    press(&mut state, InputKey::Enter);
    assert_eq!(state.contact.status(), ContactStatus::Idle);
    assert_eq!(state.contact.name, "");
}

#[test]
fn test_invalid_contact_submit_stays_idle() {
    let mut state = AppState::new();
    run(&mut state, Message::navigate(ViewState::Contact));
    press(&mut state, InputKey::Enter);

    let actions = press(&mut state, InputKey::CharCtrl('s'));

    assert!(actions.is_empty());
    assert_eq!(state.contact.status(), ContactStatus::Idle);
    assert!(state.contact.error().is_some());
}

#[test]
fn test_reset_during_submit_drops_completion() {
    let mut state = AppState::new();
    run(&mut state, Message::navigate(ViewState::Contact));
    state.contact.name = "Ada".into();
    state.contact.email = "ada@example.com".into();
    state.contact.brief = "Rebrand".into();

    let actions = run(&mut state, Message::ContactSubmit);
    let (_, elapsed) = scheduled(&actions).remove(0);
    run(&mut state, Message::ContactReset);
    run(&mut state, elapsed);

    assert_eq!(state.contact.status(), ContactStatus::Idle);
}

#[test]
fn test_leaving_contact_stops_editing() {
    let mut state = AppState::new();
    run(&mut state, Message::navigate(ViewState::Contact));
    run(&mut state, Message::ContactStartEditing);
    assert!(state.contact.is_editing());

    run(&mut state, Message::navigate(ViewState::About));
    assert!(!state.contact.is_editing());
    assert_eq!(state.ui_mode(), UiMode::Normal);
}
