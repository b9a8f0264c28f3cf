//! Core domain types shared by the app and TUI crates

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// The user's raw appearance preference.
///
/// This is the only durable state in the application. It is persisted as one
/// of the literal strings `"light"`, `"dark"` or `"system"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parse the persisted literal. Anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }

    /// Resolve against the OS "prefers dark" signal.
    pub fn resolve(&self, os_prefers_dark: bool) -> bool {
        match self {
            ThemePreference::System => os_prefers_dark,
            ThemePreference::Dark => true,
            ThemePreference::Light => false,
        }
    }

    /// The preference the quick toggles switch to (`dark` ⇄ `light`).
    ///
    /// `system` toggles to `dark`, matching a first press from an unset state.
    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            _ => ThemePreference::Dark,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level view currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ViewState {
    #[default]
    Home,
    About,
    Contact,
    Portfolio,
    ServiceDetail,
}

impl ViewState {
    /// Views reachable from the navbar, in display order.
    pub const NAV_ORDER: [ViewState; 4] = [
        ViewState::Home,
        ViewState::About,
        ViewState::Portfolio,
        ViewState::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Home => "Home",
            ViewState::About => "About",
            ViewState::Contact => "Contact",
            ViewState::Portfolio => "Portfolio",
            ViewState::ServiceDetail => "Service",
        }
    }

    /// Parse a view name as given on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Some(ViewState::Home),
            "about" | "about-page" => Some(ViewState::About),
            "contact" | "contact-page" => Some(ViewState::Contact),
            "portfolio" | "portfolio-page" => Some(ViewState::Portfolio),
            "service-detail" => Some(ViewState::ServiceDetail),
            _ => None,
        }
    }
}

/// Scroll anchors inside the home view, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeSection {
    Hero,
    Services,
    Portfolio,
    Process,
    Testimonials,
    Contact,
}

impl HomeSection {
    pub const ALL: [HomeSection; 6] = [
        HomeSection::Hero,
        HomeSection::Services,
        HomeSection::Portfolio,
        HomeSection::Process,
        HomeSection::Testimonials,
        HomeSection::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            HomeSection::Hero => "hero",
            HomeSection::Services => "services",
            HomeSection::Portfolio => "portfolio",
            HomeSection::Process => "process",
            HomeSection::Testimonials => "testimonials",
            HomeSection::Contact => "contact",
        }
    }

    /// Look up a section by its anchor id. Unknown anchors yield `None`.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor.trim())
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The section below this one; the last section stays put.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// The section above this one; the first section stays put.
    pub fn prev(&self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Companion chat
// ─────────────────────────────────────────────────────────────────────────────

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single entry in the companion chat history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    /// Format timestamp for display (HH:MM)
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Transient mascot expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Neutral,
    /// Greeting after waking up
    Wave,
    /// Waiting on the collaborator
    Scanning,
    /// Reply arrived
    Happy,
    /// Reply failed
    Alert,
    /// Saying goodbye before going dormant
    Affection,
}

impl Mood {
    /// Two-glyph face used by the TUI mascot
    pub fn face(&self) -> &'static str {
        match self {
            Mood::Neutral => "■ ■",
            Mood::Wave => "◕ ◕",
            Mood::Scanning => "◌ ◌",
            Mood::Happy => "^ ^",
            Mood::Alert => "- -",
            Mood::Affection => "♥ ♥",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_preference_resolution_table() {
        for os in [true, false] {
            assert_eq!(ThemePreference::System.resolve(os), os);
            assert!(ThemePreference::Dark.resolve(os));
            assert!(!ThemePreference::Light.resolve(os));
        }
    }

    #[test]
    fn test_theme_preference_literals() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
        }
        assert_eq!(ThemePreference::parse("sepia"), None);
        assert_eq!(ThemePreference::parse(" dark\n"), Some(ThemePreference::Dark));
    }

    #[test]
    fn test_theme_preference_default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::System.toggled(), ThemePreference::Dark);
    }

    #[test]
    fn test_view_state_parse_accepts_page_suffix() {
        assert_eq!(ViewState::parse("contact"), Some(ViewState::Contact));
        assert_eq!(ViewState::parse("contact-page"), Some(ViewState::Contact));
        assert_eq!(ViewState::parse("PORTFOLIO"), Some(ViewState::Portfolio));
        assert_eq!(ViewState::parse("services-hub"), None);
    }

    #[test]
    fn test_home_section_anchor_lookup() {
        for section in HomeSection::ALL {
            assert_eq!(HomeSection::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(HomeSection::from_anchor("pricing"), None);
    }

    #[test]
    fn test_home_section_stepping_clamps() {
        assert_eq!(HomeSection::Hero.prev(), HomeSection::Hero);
        assert_eq!(HomeSection::Hero.next(), HomeSection::Services);
        assert_eq!(HomeSection::Testimonials.next(), HomeSection::Contact);
        assert_eq!(HomeSection::Contact.next(), HomeSection::Contact);
    }

    #[test]
    fn test_chat_message_constructors() {
        let user = ChatMessage::user("hi");
        assert!(user.is_user());
        let bot = ChatMessage::assistant("hello");
        assert_eq!(bot.role, ChatRole::Assistant);
        assert_eq!(bot.formatted_time().len(), 5);
    }
}
