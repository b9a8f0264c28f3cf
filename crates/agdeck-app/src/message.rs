//! Message types for the application (TEA pattern)

use agdeck_core::{ThemePreference, ViewState};

use crate::chat::MenuItem;
use crate::input_key::InputKey;
use crate::navigation::DeferredScroll;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Toggle the key help overlay
    ToggleHelp,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch views; an anchor on Home scrolls there after a short delay
    Navigate {
        view: ViewState,
        anchor: Option<String>,
    },
    /// Open the detail view for a service id
    SelectService { id: String },
    /// Deferred anchor scroll fired by its timer
    DeferredScrollElapsed(DeferredScroll),

    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Navbar services dropdown
    // ─────────────────────────────────────────────────────────
    ToggleServicesMenu,
    ServicesMenuUp,
    ServicesMenuDown,
    ServicesMenuSelect,

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    SetThemePreference(ThemePreference),
    /// Quick toggle: dark → light, anything else → dark
    ToggleTheme,
    /// light → dark → system → light
    CycleThemePreference,
    /// Start or stop the OS appearance subscription to match the preference
    SyncAppearanceSubscription,
    /// OS appearance signal changed
    SystemAppearanceChanged { prefers_dark: bool },
    /// Appearance watcher reported an error
    AppearanceWatcherError { message: String },

    // ─────────────────────────────────────────────────────────
    // Companion
    // ─────────────────────────────────────────────────────────
    CompanionWake,
    CompanionToggleMenu,
    CompanionMenuUp,
    CompanionMenuDown,
    /// Activate the highlighted menu entry
    CompanionMenuConfirm,
    CompanionMenuChoose(MenuItem),
    CompanionSleep,
    /// Goodbye animation finished
    CompanionSleepElapsed { generation: u64 },
    /// Timed mood ran out
    CompanionMoodElapsed { generation: u64 },
    /// Attention interval elapsed; `show` is the dice roll
    CompanionAttentionRoll { generation: u64, show: bool },
    CompanionToastElapsed { generation: u64 },

    ChatClose,
    ChatInput(char),
    ChatBackspace,
    ChatClearInput,
    ChatSubmit,
    ChatQuickPrompt(usize),
    /// The in-flight assistant request resolved
    AssistantReplied { result: Result<String, String> },

    // ─────────────────────────────────────────────────────────
    // Contact form
    // ─────────────────────────────────────────────────────────
    ContactStartEditing,
    ContactStopEditing,
    ContactNextField,
    ContactPrevField,
    ContactInput(char),
    ContactBackspace,
    ContactCycleCategory { forward: bool },
    ContactSubmit,
    ContactSubmitElapsed { generation: u64 },
    ContactReset,

    // ─────────────────────────────────────────────────────────
    // Page state
    // ─────────────────────────────────────────────────────────
    ToggleFaq(usize),
    NextTestimonial,
    PrevTestimonial,
    NextPortfolioCategory,
    PrevPortfolioCategory,
}

impl Message {
    pub fn navigate(view: ViewState) -> Self {
        Message::Navigate { view, anchor: None }
    }

    pub fn navigate_home_to(anchor: impl Into<String>) -> Self {
        Message::Navigate {
            view: ViewState::Home,
            anchor: Some(anchor.into()),
        }
    }
}
