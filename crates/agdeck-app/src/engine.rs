//! Engine - orchestration state shared by the TUI runner and headless tests
//!
//! The Engine owns the TEA state, the message channel, the assistant
//! collaborator, and the OS appearance subscription. Frontends feed it
//! messages and draw `engine.state`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use agdeck_core::{ThemePreference, ViewState};
use tokio::sync::mpsc;
use tracing::info;

use crate::actions::ActionContext;
use crate::appearance::{detect_prefers_dark, signal_file, AppearanceSubscription};
use crate::assistant::{Assistant, TextGenerator};
use crate::config::{self, load_theme_preference, Settings};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the engine message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Startup options, usually filled from the command line.
///
/// `Default` gives a self-contained engine: default settings, no preference
/// storage, no OS signal handler. [`EngineOptions::load`] reads the user's
/// configuration instead.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// View to open instead of Home
    pub initial_view: Option<ViewState>,
    /// Home section to scroll to after startup
    pub section: Option<String>,
    /// Service to open in the detail view (wins over `initial_view`)
    pub service: Option<String>,
    /// Theme preference for this run; persisted like any other change
    pub theme: Option<ThemePreference>,
    /// Never show the companion
    pub no_assistant: bool,
    /// Where the theme preference lives. `None` keeps it in memory.
    pub preferences_path: Option<PathBuf>,
    pub settings: Settings,
    /// Turn SIGINT/SIGTERM into `Message::Quit`
    pub handle_signals: bool,
}

impl EngineOptions {
    /// Options backed by the user's config and data directories
    pub fn load() -> Self {
        Self {
            preferences_path: config::preferences_path(),
            settings: config::load_settings(),
            handle_signals: true,
            ..Self::default()
        }
    }
}

/// Orchestration engine for Agency Deck.
///
/// Generic over the text generator so tests can plug in a fake; the binary
/// uses [`Assistant`].
pub struct Engine<G = Assistant> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, key poller).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    generator: Arc<G>,
    preferences_path: Option<PathBuf>,
    appearance: AppearanceSubscription,
}

impl Engine<Assistant> {
    /// Create an engine with the assistant backend chosen from settings
    /// and the environment.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(options: EngineOptions) -> Self {
        let generator = Assistant::from_settings(&options.settings.assistant);
        Self::with_generator(options, generator)
    }
}

impl<G> Engine<G>
where
    G: TextGenerator + Send + Sync + 'static,
{
    /// Create an engine around an explicit text generator.
    ///
    /// Performs startup:
    /// - Loads the stored theme preference (default dark)
    /// - Detects the OS appearance signal
    /// - Creates AppState and the message channel
    /// - Applies and persists the initial theme, which starts the
    ///   appearance watcher when the preference is `system`
    /// - Opens the initial view
    pub fn with_generator(options: EngineOptions, generator: G) -> Self {
        let mut settings = options.settings;
        if options.no_assistant {
            settings.assistant.enabled = false;
        }

        let stored = load_theme_preference(options.preferences_path.as_deref());
        let preference = options.theme.unwrap_or(stored);
        let os_prefers_dark = detect_prefers_dark(signal_file(&settings.appearance).as_deref());
        let appearance = AppearanceSubscription::from_settings(&settings.appearance);

        let state = AppState::with_settings(settings.clone(), preference, os_prefers_dark);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        if options.handle_signals {
            signals::spawn_signal_handler(msg_tx.clone());
        }

        let mut engine = Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            generator: Arc::new(generator),
            preferences_path: options.preferences_path,
            appearance,
        };

        info!(
            "Engine ready: theme={} dark={} companion={}",
            preference,
            engine.state.is_dark(),
            engine.state.companion_enabled
        );

        // Boot applies the theme like any other preference change: persist
        // it and start the watcher when it is `system`
        engine.process_message(Message::SetThemePreference(preference));

        if let Some(id) = options.service {
            engine.process_message(Message::SelectService { id });
        } else if options.initial_view.is_some() || options.section.is_some() {
            engine.process_message(Message::Navigate {
                view: options.initial_view.unwrap_or_default(),
                anchor: options.section,
            });
        }

        engine
    }

    fn reply_timeout(&self) -> Duration {
        Duration::from_secs(self.settings.assistant.timeout_secs)
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let reply_timeout = self.reply_timeout();
        let mut ctx = ActionContext {
            msg_tx: &self.msg_tx,
            generator: &self.generator,
            reply_timeout,
            preferences_path: self.preferences_path.as_deref(),
            appearance: &mut self.appearance,
        };
        process::process_message(&mut self.state, msg, &mut ctx);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task and process it.
    ///
    /// Returns `false` if the channel closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn is_watching_appearance(&self) -> bool {
        self.appearance.is_active()
    }

    /// Stop the appearance watcher. Pending timers die with the runtime.
    pub fn shutdown(&mut self) {
        self.appearance.unsubscribe();
        info!("Engine shut down");
    }
}
