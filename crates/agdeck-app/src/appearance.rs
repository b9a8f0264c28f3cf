//! System appearance signal
//!
//! Terminals expose no color-scheme change notification, so the "OS prefers
//! dark" signal comes from two places:
//! - `COLORFGBG` (set by many terminals) gives the initial value
//! - an appearance file containing `dark` or `light` overrides it, and is
//!   watched for changes while the theme preference is `system`
//!
//! A desktop hook (e.g. a `gsettings monitor` script) can keep the file in
//! sync with the real desktop setting.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use crate::config::{config_dir, AppearanceSettings};
use crate::message::Message;

pub const APPEARANCE_FILENAME: &str = "appearance";

/// Value used when no signal is available
pub const DEFAULT_PREFERS_DARK: bool = true;

/// `<config dir>/agdeck/appearance`
pub fn default_signal_file() -> Option<PathBuf> {
    config_dir().map(|d| d.join(APPEARANCE_FILENAME))
}

/// The signal file configured in settings, or the default location
pub fn signal_file(settings: &AppearanceSettings) -> Option<PathBuf> {
    settings.signal_file.clone().or_else(default_signal_file)
}

/// Parse `COLORFGBG` (`"fg;bg"` or `"fg;default;bg"`).
///
/// Background indexes 0-6 and 8 are dark, 7 and 9-15 are light.
pub fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        0..=6 | 8 => Some(true),
        7 | 9..=15 => Some(false),
        _ => None,
    }
}

/// Parse appearance file content: `dark` or `light`, case-insensitive.
pub fn parse_signal(content: &str) -> Option<bool> {
    match content.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

pub fn read_signal_file(path: &Path) -> Option<bool> {
    let content = std::fs::read_to_string(path).ok()?;
    let parsed = parse_signal(&content);
    if parsed.is_none() {
        debug!("Ignoring unrecognised appearance signal in {:?}", path);
    }
    parsed
}

/// Current "prefers dark" value: appearance file, then `COLORFGBG`, then dark.
pub fn detect_prefers_dark(signal_file: Option<&Path>) -> bool {
    signal_file
        .and_then(read_signal_file)
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| parse_colorfgbg(&v))
        })
        .unwrap_or(DEFAULT_PREFERS_DARK)
}

/// Configuration for the appearance watcher
#[derive(Debug, Clone)]
pub struct AppearanceWatcherConfig {
    pub signal_file: PathBuf,
    pub debounce: Duration,
}

impl AppearanceWatcherConfig {
    pub fn new(signal_file: PathBuf) -> Self {
        Self {
            signal_file,
            debounce: Duration::from_millis(200),
        }
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }
}

/// Watches the appearance file and reports changes to the engine.
///
/// The subscription ends on [`AppearanceWatcher::stop`] or drop.
pub struct AppearanceWatcher {
    config: AppearanceWatcherConfig,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl AppearanceWatcher {
    pub fn new(config: AppearanceWatcherConfig) -> Self {
        Self {
            config,
            stop_tx: None,
        }
    }

    /// Start watching.
    ///
    /// Sends `Message::SystemAppearanceChanged` for every readable change
    /// and `Message::AppearanceWatcherError` for watcher failures.
    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<(), String> {
        if self.is_running() {
            return Err("Appearance watcher is already running".to_string());
        }

        let config = self.config.clone();
        let (stop_tx, stop_rx) = oneshot::channel();
        self.stop_tx = Some(stop_tx);

        tokio::task::spawn_blocking(move || {
            Self::run_watcher(config, message_tx, stop_rx);
        });

        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    fn run_watcher(
        config: AppearanceWatcherConfig,
        message_tx: mpsc::Sender<Message>,
        stop_rx: oneshot::Receiver<()>,
    ) {
        let signal_file = config.signal_file.clone();
        // The file may not exist yet, so watch its directory
        let Some(watch_dir) = signal_file.parent().map(Path::to_path_buf) else {
            let _ = message_tx.blocking_send(Message::AppearanceWatcherError {
                message: format!("No parent directory for {}", signal_file.display()),
            });
            return;
        };
        if let Err(e) = std::fs::create_dir_all(&watch_dir) {
            warn!("Failed to create {}: {}", watch_dir.display(), e);
        }

        let tx_clone = message_tx.clone();
        let target = signal_file.clone();
        let debouncer_result = new_debouncer(
            config.debounce,
            None,
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    let touched = events
                        .iter()
                        .any(|event| event.paths.iter().any(|p| p.file_name() == target.file_name()));
                    if !touched {
                        return;
                    }
                    if let Some(prefers_dark) = read_signal_file(&target) {
                        debug!("Appearance signal changed: prefers_dark={}", prefers_dark);
                        let _ = tx_clone
                            .blocking_send(Message::SystemAppearanceChanged { prefers_dark });
                    }
                }
                Err(errors) => {
                    for error in errors {
                        warn!("Appearance watcher error: {:?}", error);
                        let _ = tx_clone.blocking_send(Message::AppearanceWatcherError {
                            message: error.to_string(),
                        });
                    }
                }
            },
        );

        let mut debouncer = match debouncer_result {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to create appearance watcher: {}", e);
                let _ = message_tx.blocking_send(Message::AppearanceWatcherError {
                    message: format!("Failed to create watcher: {}", e),
                });
                return;
            }
        };

        if let Err(e) = debouncer.watch(&watch_dir, RecursiveMode::NonRecursive) {
            warn!("Failed to watch {}: {}", watch_dir.display(), e);
            let _ = message_tx.blocking_send(Message::AppearanceWatcherError {
                message: e.to_string(),
            });
            return;
        }
        info!("Watching appearance signal: {}", signal_file.display());

        // Blocks until stop() or the watcher is dropped
        let _ = stop_rx.blocking_recv();
        info!("Appearance watcher stopping");
    }
}

impl Drop for AppearanceWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The engine's handle on the OS appearance subscription.
///
/// At most one watcher exists. Without a signal file location the
/// subscription cannot start and reports an error instead.
pub struct AppearanceSubscription {
    config: Option<AppearanceWatcherConfig>,
    watcher: Option<AppearanceWatcher>,
}

impl AppearanceSubscription {
    pub fn new(config: Option<AppearanceWatcherConfig>) -> Self {
        Self {
            config,
            watcher: None,
        }
    }

    pub fn from_settings(settings: &AppearanceSettings) -> Self {
        Self::new(
            signal_file(settings)
                .map(|file| AppearanceWatcherConfig::new(file).with_debounce_ms(settings.debounce_ms)),
        )
    }

    /// Start watching and report the current signal right away, since it may
    /// have changed while nobody was listening.
    pub fn subscribe(&mut self, message_tx: &mpsc::Sender<Message>) -> Result<(), String> {
        if self.is_active() {
            return Ok(());
        }
        let Some(config) = self.config.clone() else {
            return Err("No location for the appearance signal file".to_string());
        };

        let prefers_dark = detect_prefers_dark(Some(&config.signal_file));
        let _ = message_tx.try_send(Message::SystemAppearanceChanged { prefers_dark });

        let mut watcher = AppearanceWatcher::new(config);
        watcher.start(message_tx.clone())?;
        self.watcher = Some(watcher);
        Ok(())
    }

    pub fn unsubscribe(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.stop();
            debug!("Appearance subscription ended");
        }
    }

    pub fn is_active(&self) -> bool {
        self.watcher.as_ref().is_some_and(AppearanceWatcher::is_running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_parse_colorfgbg() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("0;default;7"), Some(false));
        assert_eq!(parse_colorfgbg("7;8"), Some(true));
        assert_eq!(parse_colorfgbg("default"), None);
        assert_eq!(parse_colorfgbg("0;200"), None);
    }

    #[test]
    fn test_parse_signal() {
        assert_eq!(parse_signal("dark\n"), Some(true));
        assert_eq!(parse_signal("  LIGHT "), Some(false));
        assert_eq!(parse_signal("auto"), None);
    }

    #[test]
    #[serial]
    fn test_detect_prefers_dark_file_overrides_env() {
        let temp = tempdir().unwrap();
        let file = temp.path().join(APPEARANCE_FILENAME);
        std::fs::write(&file, "light").unwrap();

        std::env::set_var("COLORFGBG", "15;0");
        assert!(!detect_prefers_dark(Some(&file)));
        assert!(detect_prefers_dark(None));

        std::env::set_var("COLORFGBG", "0;15");
        assert!(!detect_prefers_dark(None));

        std::env::remove_var("COLORFGBG");
        assert_eq!(detect_prefers_dark(None), DEFAULT_PREFERS_DARK);
    }

    #[test]
    #[serial]
    fn test_detect_ignores_garbage_file() {
        std::env::remove_var("COLORFGBG");
        let temp = tempdir().unwrap();
        let file = temp.path().join(APPEARANCE_FILENAME);
        std::fs::write(&file, "purple").unwrap();
        assert!(detect_prefers_dark(Some(&file)));
    }

    #[test]
    fn test_signal_file_uses_override() {
        let settings = AppearanceSettings {
            debounce_ms: 200,
            signal_file: Some(PathBuf::from("/tmp/signal")),
        };
        assert_eq!(signal_file(&settings), Some(PathBuf::from("/tmp/signal")));
    }

    #[tokio::test]
    #[serial]
    async fn test_subscription_reports_current_signal() {
        std::env::remove_var("COLORFGBG");
        let temp = tempdir().unwrap();
        let file = temp.path().join(APPEARANCE_FILENAME);
        std::fs::write(&file, "light").unwrap();

        let mut subscription =
            AppearanceSubscription::new(Some(AppearanceWatcherConfig::new(file)));
        let (tx, mut rx) = mpsc::channel(8);

        subscription.subscribe(&tx).unwrap();
        assert!(subscription.is_active());
        assert_eq!(
            rx.try_recv().unwrap(),
            Message::SystemAppearanceChanged {
                prefers_dark: false
            }
        );

        subscription.unsubscribe();
        assert!(!subscription.is_active());
    }

    #[tokio::test]
    async fn test_subscription_without_location_fails() {
        let mut subscription = AppearanceSubscription::new(None);
        let (tx, _rx) = mpsc::channel(8);
        assert!(subscription.subscribe(&tx).is_err());
        assert!(!subscription.is_active());
    }

    #[tokio::test]
    async fn test_watcher_stop_when_not_started() {
        let mut watcher = AppearanceWatcher::new(AppearanceWatcherConfig::new(
            PathBuf::from("/tmp/agdeck-test/appearance"),
        ));
        watcher.stop();
        assert!(!watcher.is_running());
    }

    #[tokio::test]
    async fn test_watcher_double_start_error() {
        let temp = tempdir().unwrap();
        let mut watcher = AppearanceWatcher::new(
            AppearanceWatcherConfig::new(temp.path().join(APPEARANCE_FILENAME))
                .with_debounce_ms(50),
        );
        let (tx, _rx) = mpsc::channel(32);

        assert!(watcher.start(tx.clone()).is_ok());
        assert!(watcher.is_running());

        let second = watcher.start(tx);
        assert!(second.unwrap_err().contains("already running"));

        watcher.stop();
        assert!(!watcher.is_running());
    }
}
