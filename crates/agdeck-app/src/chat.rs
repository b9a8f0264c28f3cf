//! Companion chat state machine
//!
//! The companion is a mascot that can be woken, opens a quick menu, hosts a
//! chat panel, and keeps at most one request to the assistant in flight.
//! All timers live outside this module; every timed transition carries a
//! generation number and is ignored once a newer transition superseded it.

use std::time::Duration;

use agdeck_core::{ChatMessage, Mood};

/// Mood shown right after waking up
pub const WAVE_DURATION: Duration = Duration::from_millis(2000);
/// Mood shown after a reply (or failure) arrives
pub const REPLY_MOOD_DURATION: Duration = Duration::from_millis(3000);
/// Goodbye animation before the widget hides
pub const SLEEP_DURATION: Duration = Duration::from_millis(1200);
/// How often the attention toast may appear
pub const ATTENTION_INTERVAL: Duration = Duration::from_secs(15);
/// Chance that the toast appears on a given interval
pub const ATTENTION_PROBABILITY: f64 = 0.15;
/// How long the toast stays up
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

pub const TOAST_TEXT: &str = "Request Assistance?";

pub const GREETING: &str = "Beep Boop! Uplink established! I'm AG-Bot, your digital assistant! I can help you with pricing, our creative process, or choosing the right service for your brand! How can I assist you today, Commander? 🤖✨";

/// Appended when the assistant answers with empty text
pub const EMPTY_REPLY_FALLBACK: &str = "Protocol Failure! My gears skipped a beat. ⚙️ Can you re-send?";

/// Appended when the assistant call fails or times out
pub const ERROR_FALLBACK: &str =
    "Signal interference! 🛰️ Please re-send transmission, Commander! My logic circuits are buffering. ✨";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickPrompt {
    pub label: &'static str,
    pub text: &'static str,
}

pub const QUICK_PROMPTS: [QuickPrompt; 4] = [
    QuickPrompt {
        label: "Pricing ⚡",
        text: "AG-Bot, can you break down the pricing for your services? I want to know what I get for my investment! 🤖",
    },
    QuickPrompt {
        label: "Our Process ⚙️",
        text: "How does AG Creatorz handle a project from start to finish? Explain the protocol! 🛰️",
    },
    QuickPrompt {
        label: "Portfolio 💎",
        text: "Show me some examples of your best engineered masterpieces! ✨",
    },
    QuickPrompt {
        label: "Custom Help 🧸",
        text: "I have a unique project. Can you help me figure out which service I need? 🌀",
    },
];

/// Entries of the mascot's quick menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Open the chat panel
    Help,
    /// Toggle the theme
    Grid,
    /// Put the companion to sleep
    Sleep,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Help, MenuItem::Grid, MenuItem::Sleep];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Help => "Help",
            MenuItem::Grid => "Grid",
            MenuItem::Sleep => "Sleep",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            MenuItem::Help => 'h',
            MenuItem::Grid => 'g',
            MenuItem::Sleep => 'z',
        }
    }
}

/// Observable phase, derived from the underlying flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Dormant,
    AwakeIdle,
    AwakeMenuOpen,
    AwakeChatOpen,
    AwakeSending,
    AwakeClosing,
}

impl ChatPhase {
    pub fn is_awake(&self) -> bool {
        !matches!(self, ChatPhase::Dormant | ChatPhase::AwakeClosing)
    }
}

/// Generations returned by [`ChatState::wake`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeTimers {
    pub mood_generation: u64,
    pub attention_generation: u64,
}

/// What to do after an attention interval elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttentionOutcome {
    /// The loop belongs to an earlier wake; let it die
    Stop,
    /// Keep rolling
    Continue,
    /// Toast shown; dismiss it with this generation
    ShowToast { toast_generation: u64 },
}

#[derive(Debug, Clone)]
pub struct ChatState {
    visible: bool,
    closing: bool,
    menu_open: bool,
    menu_selected: usize,
    panel_open: bool,
    messages: Vec<ChatMessage>,
    input: String,
    pending: bool,
    mood: Mood,
    mood_generation: u64,
    sleep_generation: u64,
    attention_generation: u64,
    toast_generation: u64,
    toast: Option<u64>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            visible: false,
            closing: false,
            menu_open: false,
            menu_selected: 0,
            panel_open: false,
            messages: vec![ChatMessage::assistant(GREETING)],
            input: String::new(),
            pending: false,
            mood: Mood::Neutral,
            mood_generation: 0,
            sleep_generation: 0,
            attention_generation: 0,
            toast_generation: 0,
            toast: None,
        }
    }

    pub fn phase(&self) -> ChatPhase {
        if !self.visible {
            ChatPhase::Dormant
        } else if self.closing {
            ChatPhase::AwakeClosing
        } else if self.panel_open && self.pending {
            ChatPhase::AwakeSending
        } else if self.panel_open {
            ChatPhase::AwakeChatOpen
        } else if self.menu_open {
            ChatPhase::AwakeMenuOpen
        } else {
            ChatPhase::AwakeIdle
        }
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn menu_selected(&self) -> MenuItem {
        MenuItem::ALL[self.menu_selected % MenuItem::ALL.len()]
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn is_toast_visible(&self) -> bool {
        self.toast.is_some()
    }

    /// Quick prompts are hidden while a request is in flight
    pub fn quick_prompts_visible(&self) -> bool {
        !self.pending
    }

    // ─────────────────────────────────────────────────────────
    // Mood
    // ─────────────────────────────────────────────────────────

    fn set_mood(&mut self, mood: Mood) -> u64 {
        self.mood = mood;
        self.mood_generation = self.mood_generation.wrapping_add(1);
        self.mood_generation
    }

    /// Revert a timed mood. Stale generations are ignored.
    pub fn expire_mood(&mut self, generation: u64) -> bool {
        if generation != self.mood_generation {
            return false;
        }
        self.mood = Mood::Neutral;
        true
    }

    // ─────────────────────────────────────────────────────────
    // Visibility
    // ─────────────────────────────────────────────────────────

    /// Dormant → AwakeIdle with a waving mood. No-op unless dormant.
    pub fn wake(&mut self) -> Option<WakeTimers> {
        if self.visible {
            return None;
        }
        self.visible = true;
        self.closing = false;
        self.attention_generation = self.attention_generation.wrapping_add(1);
        Some(WakeTimers {
            mood_generation: self.set_mood(Mood::Wave),
            attention_generation: self.attention_generation,
        })
    }

    /// Start the goodbye. Returns the generation the hide timer must carry.
    pub fn begin_sleep(&mut self) -> Option<u64> {
        if !self.phase().is_awake() {
            return None;
        }
        self.closing = true;
        self.toast = None;
        self.set_mood(Mood::Affection);
        self.sleep_generation = self.sleep_generation.wrapping_add(1);
        Some(self.sleep_generation)
    }

    /// Hide the widget and force-close its menu and panel.
    pub fn finish_sleep(&mut self, generation: u64) -> bool {
        if !self.closing || generation != self.sleep_generation {
            return false;
        }
        self.visible = false;
        self.closing = false;
        self.menu_open = false;
        self.panel_open = false;
        self.toast = None;
        self.attention_generation = self.attention_generation.wrapping_add(1);
        self.set_mood(Mood::Neutral);
        true
    }

    // ─────────────────────────────────────────────────────────
    // Menu and panel
    // ─────────────────────────────────────────────────────────

    /// Mascot press. Only toggles while awake with the panel closed.
    pub fn toggle_menu(&mut self) -> bool {
        if !self.phase().is_awake() || self.panel_open {
            return false;
        }
        self.menu_open = !self.menu_open;
        self.menu_selected = 0;
        true
    }

    pub fn menu_up(&mut self) {
        let len = MenuItem::ALL.len();
        self.menu_selected = (self.menu_selected + len - 1) % len;
    }

    pub fn menu_down(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % MenuItem::ALL.len();
    }

    /// Menu "Help": open the chat panel and close the menu.
    pub fn open_panel(&mut self) -> bool {
        if !self.phase().is_awake() {
            return false;
        }
        self.panel_open = true;
        self.menu_open = false;
        self.toast = None;
        true
    }

    /// Used by the Grid action, which closes the menu after toggling the theme.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn close_panel(&mut self) {
        if !self.closing {
            self.panel_open = false;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Sending
    // ─────────────────────────────────────────────────────────

    pub fn push_input(&mut self, c: char) {
        if self.panel_open && !self.closing {
            self.input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submit the draft. See [`ChatState::send`].
    pub fn submit(&mut self) -> Option<String> {
        let text = self.input.clone();
        self.send(&text)
    }

    /// Send a quick prompt through the same guarded path as typed input.
    pub fn send_quick_prompt(&mut self, index: usize) -> Option<String> {
        let prompt = *QUICK_PROMPTS.get(index)?;
        self.send(prompt.text)
    }

    /// Guarded send.
    ///
    /// Empty or whitespace text, a pending request, or a closed panel leave
    /// every field untouched (including the draft). Otherwise the trimmed
    /// text is appended as a user message, the draft is cleared, and the
    /// text to hand to the assistant is returned.
    pub fn send(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.pending || self.phase() != ChatPhase::AwakeChatOpen {
            return None;
        }
        let text = trimmed.to_string();
        self.messages.push(ChatMessage::user(text.clone()));
        self.input.clear();
        self.pending = true;
        self.set_mood(Mood::Scanning);
        Some(text)
    }

    /// Resolve the in-flight request with exactly one assistant message.
    ///
    /// Returns the mood generation to revert after [`REPLY_MOOD_DURATION`],
    /// or `None` when nothing was pending or the companion is going to sleep.
    pub fn receive_reply(&mut self, result: Result<String, String>) -> Option<u64> {
        if !self.pending {
            return None;
        }
        self.pending = false;

        let (text, mood) = match result {
            Ok(text) if !text.trim().is_empty() => (text, Mood::Happy),
            Ok(_) => (EMPTY_REPLY_FALLBACK.to_string(), Mood::Alert),
            Err(_) => (ERROR_FALLBACK.to_string(), Mood::Alert),
        };
        self.messages.push(ChatMessage::assistant(text));

        if !self.phase().is_awake() {
            return None;
        }
        Some(self.set_mood(mood))
    }

    // ─────────────────────────────────────────────────────────
    // Attention toast
    // ─────────────────────────────────────────────────────────

    /// Handle one elapsed attention interval. `show` is the dice roll.
    pub fn attention_roll(&mut self, generation: u64, show: bool) -> AttentionOutcome {
        if generation != self.attention_generation || !self.visible {
            return AttentionOutcome::Stop;
        }
        if !show || self.phase() != ChatPhase::AwakeIdle {
            return AttentionOutcome::Continue;
        }
        self.toast_generation = self.toast_generation.wrapping_add(1);
        self.toast = Some(self.toast_generation);
        AttentionOutcome::ShowToast {
            toast_generation: self.toast_generation,
        }
    }

    pub fn dismiss_toast(&mut self, generation: u64) -> bool {
        if self.toast != Some(generation) {
            return false;
        }
        self.toast = None;
        true
    }
}
