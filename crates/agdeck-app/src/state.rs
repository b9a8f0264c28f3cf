//! Application state (Model in TEA pattern)
//!
//! One top-level object owns everything: theme, navigation, companion,
//! contact form and page state. Handlers receive it mutably; the renderer
//! receives it as well and only touches the scroll position.

use agdeck_core::{Service, ThemePreference, ViewState};

use crate::chat::{ChatPhase, ChatState};
use crate::config::Settings;
use crate::contact::ContactForm;
use crate::navigation::ViewNavigator;
use crate::pages::PageState;
use crate::theme::ThemeResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which component receives key presses.
///
/// Derived from state rather than stored, so it can never disagree with
/// what is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Page browsing
    Normal,
    /// Key help overlay
    Help,
    /// Navbar services dropdown
    ServicesMenu,
    /// Companion quick menu
    CompanionMenu,
    /// Companion chat panel (typing goes to the chat input)
    Chat,
    /// Typing into the contact form
    ContactEdit,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub theme: ThemeResolver,
    pub nav: ViewNavigator,
    pub chat: ChatState,
    pub contact: ContactForm,
    pub pages: PageState,
    pub show_help: bool,
    /// The companion widget is shipped only when enabled
    pub companion_enabled: bool,
    /// Last appearance watcher problem, shown in the footer
    pub watcher_error: Option<String>,
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), ThemePreference::default(), true)
    }

    pub fn with_settings(
        settings: Settings,
        preference: ThemePreference,
        os_prefers_dark: bool,
    ) -> Self {
        Self {
            phase: AppPhase::Running,
            theme: ThemeResolver::new(preference, os_prefers_dark),
            nav: ViewNavigator::new(),
            chat: ChatState::new(),
            contact: ContactForm::new(),
            pages: PageState::default(),
            show_help: false,
            companion_enabled: settings.assistant.enabled,
            watcher_error: None,
            settings,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.show_help {
            return UiMode::Help;
        }
        if self.companion_enabled {
            match self.chat.phase() {
                ChatPhase::AwakeChatOpen | ChatPhase::AwakeSending => return UiMode::Chat,
                ChatPhase::AwakeMenuOpen => return UiMode::CompanionMenu,
                _ => {}
            }
        }
        if self.pages.services_menu.open {
            return UiMode::ServicesMenu;
        }
        if self.nav.view() == ViewState::Contact && self.contact.is_editing() {
            return UiMode::ContactEdit;
        }
        UiMode::Normal
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn view(&self) -> ViewState {
        self.nav.view()
    }

    /// Service shown by the detail view, if the selection resolves
    pub fn active_service(&self) -> Option<&'static Service> {
        self.nav.active_service()
    }

    pub fn companion_visible(&self) -> bool {
        self.companion_enabled && self.chat.is_visible()
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
