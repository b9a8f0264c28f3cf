//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Background tasks never touch `AppState`. Each one reports back by
//! sending a `Message` on the engine channel.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use agdeck_core::Error;
use rand::Rng;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::appearance::AppearanceSubscription;
use crate::assistant::{request_reply, TextGenerator};
use crate::chat::{ATTENTION_INTERVAL, ATTENTION_PROBABILITY};
use crate::config::save_theme_preference;
use crate::message::Message;
use crate::UpdateAction;

/// Everything an action may need from the engine
pub struct ActionContext<'a, G> {
    pub msg_tx: &'a mpsc::Sender<Message>,
    pub generator: &'a Arc<G>,
    pub reply_timeout: Duration,
    pub preferences_path: Option<&'a Path>,
    pub appearance: &'a mut AppearanceSubscription,
}

/// Execute an action. Timers and the reply run as background tasks; the
/// preference write and watcher changes happen before this returns.
pub fn handle_action<G>(action: UpdateAction, ctx: &mut ActionContext<'_, G>)
where
    G: TextGenerator + Send + Sync + 'static,
{
    match action {
        UpdateAction::Schedule { delay, message } => {
            spawn_timer(ctx.msg_tx.clone(), delay, message);
        }

        UpdateAction::ScheduleAttentionRoll { generation } => {
            let tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(ATTENTION_INTERVAL).await;
                let show = rand::thread_rng().gen_bool(ATTENTION_PROBABILITY);
                let _ = tx
                    .send(Message::CompanionAttentionRoll { generation, show })
                    .await;
            });
        }

        UpdateAction::RequestAssistantReply { prompt } => {
            let tx = ctx.msg_tx.clone();
            let generator = Arc::clone(ctx.generator);
            let timeout = ctx.reply_timeout;
            tokio::spawn(async move {
                let result = request_reply(generator.as_ref(), &prompt, timeout)
                    .await
                    .map_err(|e| {
                        if e.is_assistant_failure() {
                            warn!("Assistant reply failed: {}", e);
                        } else {
                            error!("Assistant reply failed unexpectedly: {}", e);
                        }
                        e.to_string()
                    });
                let _ = tx.send(Message::AssistantReplied { result }).await;
            });
        }

        // Written in place so saves land in the order the preference changed
        UpdateAction::PersistThemePreference(preference) => {
            match save_theme_preference(ctx.preferences_path, preference) {
                Ok(()) => debug!("Theme preference saved: {}", preference),
                Err(Error::StorageUnavailable { .. }) => {
                    debug!("No preference storage, keeping {} in memory", preference)
                }
                Err(e) => warn!("Theme preference not saved: {}", e),
            }
        }

        UpdateAction::WatchSystemAppearance => {
            if let Err(message) = ctx.appearance.subscribe(ctx.msg_tx) {
                let _ = ctx
                    .msg_tx
                    .try_send(Message::AppearanceWatcherError { message });
            }
        }

        UpdateAction::UnwatchSystemAppearance => {
            ctx.appearance.unsubscribe();
        }

        UpdateAction::Batch(actions) => {
            for action in actions {
                handle_action(action, ctx);
            }
        }
    }
}

fn spawn_timer(tx: mpsc::Sender<Message>, delay: Duration, message: Message) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(message).await;
    });
}
