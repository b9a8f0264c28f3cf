//! Theme resolution
//!
//! Resolves the tri-state [`ThemePreference`] against the OS "prefers dark"
//! signal and tracks whether the OS signal subscription should be live.
//! The effective mode is never stored; it is recomputed from its two inputs.

use agdeck_core::ThemePreference;

/// Change to the OS appearance subscription requested by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionChange {
    Subscribe,
    Unsubscribe,
}

#[derive(Debug, Clone)]
pub struct ThemeResolver {
    preference: ThemePreference,
    os_prefers_dark: bool,
    subscribed: bool,
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(ThemePreference::default(), true)
    }
}

impl ThemeResolver {
    pub fn new(preference: ThemePreference, os_prefers_dark: bool) -> Self {
        Self {
            preference,
            os_prefers_dark,
            subscribed: false,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn os_prefers_dark(&self) -> bool {
        self.os_prefers_dark
    }

    /// Effective dark mode: `system` follows the OS, otherwise `pref == dark`.
    pub fn is_dark(&self) -> bool {
        self.preference.resolve(self.os_prefers_dark)
    }

    /// Record a new preference. Returns `true` when the effective mode flipped.
    pub fn set_preference(&mut self, preference: ThemePreference) -> bool {
        let was_dark = self.is_dark();
        self.preference = preference;
        was_dark != self.is_dark()
    }

    /// Quick toggle used by the navbar and the companion's Grid action.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.preference.toggled();
        self.set_preference(next);
        next
    }

    /// Record a new OS signal. Returns `true` when the effective mode flipped.
    pub fn set_os_signal(&mut self, prefers_dark: bool) -> bool {
        let was_dark = self.is_dark();
        self.os_prefers_dark = prefers_dark;
        was_dark != self.is_dark()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// The subscription change needed to match the current preference, if any.
    ///
    /// The OS signal is only observed while the preference is `system`.
    pub fn pending_subscription_change(&self) -> Option<SubscriptionChange> {
        let wanted = self.preference == ThemePreference::System;
        match (wanted, self.subscribed) {
            (true, false) => Some(SubscriptionChange::Subscribe),
            (false, true) => Some(SubscriptionChange::Unsubscribe),
            _ => None,
        }
    }

    /// Apply a subscription change once it has been requested.
    pub fn apply_subscription_change(&mut self, change: SubscriptionChange) {
        self.subscribed = change == SubscriptionChange::Subscribe;
    }
}
