//! Text-generation collaborator behind the companion chat
//!
//! The engine only knows the [`TextGenerator`] trait. [`Assistant`] picks a
//! concrete backend at startup: the REST client when an API key is present,
//! otherwise a generator that always fails (the chat then shows its
//! fallback reply).

pub mod gemini;
pub mod persona;

use std::time::Duration;

use agdeck_core::prelude::*;

use crate::config::AssistantSettings;

pub use gemini::GeminiClient;

/// Environment variables checked for the API key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Produces one reply for one prompt.
#[trait_variant::make(TextGenerator: Send)]
pub trait LocalTextGenerator {
    /// Generate a reply to `prompt` under the `system` preamble.
    ///
    /// An empty string is a valid (if unhelpful) reply.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String>;
}

/// Stand-in used when no API key is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredGenerator;

impl TextGenerator for UnconfiguredGenerator {
    async fn generate(&self, _system: &str, _prompt: &str) -> Result<String> {
        Err(Error::AssistantUnconfigured)
    }
}

/// Backend selected at startup
#[derive(Debug, Clone)]
pub enum Assistant {
    Gemini(GeminiClient),
    Unconfigured(UnconfiguredGenerator),
}

impl Assistant {
    pub fn from_settings(settings: &AssistantSettings) -> Self {
        let Some(key) = api_key_from_env() else {
            info!("No assistant API key set; companion replies will use the fallback");
            return Assistant::Unconfigured(UnconfiguredGenerator);
        };
        match GeminiClient::new(&settings.endpoint, &settings.model, key) {
            Ok(client) => {
                info!("Assistant configured: {}", client.url());
                Assistant::Gemini(client)
            }
            Err(e) => {
                warn!("Assistant disabled: {}", e);
                Assistant::Unconfigured(UnconfiguredGenerator)
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Assistant::Gemini(_))
    }
}

impl TextGenerator for Assistant {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String> {
        match self {
            Assistant::Gemini(client) => TextGenerator::generate(client, system, prompt).await,
            Assistant::Unconfigured(stub) => TextGenerator::generate(stub, system, prompt).await,
        }
    }
}

/// First non-empty key among [`API_KEY_VARS`]
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

/// Ask for one reply, bounded by `timeout`.
pub async fn request_reply<G>(generator: &G, prompt: &str, timeout: Duration) -> Result<String>
where
    G: TextGenerator + Sync,
{
    let system = persona::system_instruction();
    let call = TextGenerator::generate(generator, &system, prompt);
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(Error::AssistantTimeout {
            secs: timeout.as_secs(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct SlowGenerator;

    impl TextGenerator for SlowGenerator {
        async fn generate(&self, _system: &str, _prompt: &str) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    struct EchoGenerator;

    impl TextGenerator for EchoGenerator {
        async fn generate(&self, system: &str, prompt: &str) -> Result<String> {
            assert!(system.contains("AG-Bot"));
            Ok(format!("echo: {prompt}"))
        }
    }

    #[tokio::test]
    async fn test_unconfigured_generator_fails() {
        let err = TextGenerator::generate(&UnconfiguredGenerator, "s", "p")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AssistantUnconfigured));
    }

    #[tokio::test]
    async fn test_request_reply_passes_persona() {
        let reply = request_reply(&EchoGenerator, "hi", Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(reply, "echo: hi");
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_reply_times_out() {
        let err = request_reply(&SlowGenerator, "hi", Duration::from_secs(30))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AssistantTimeout { secs: 30 }));
    }

    #[test]
    #[serial]
    fn test_api_key_lookup_order() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
        assert_eq!(api_key_from_env(), None);

        std::env::set_var("API_KEY", "fallback");
        assert_eq!(api_key_from_env().as_deref(), Some("fallback"));

        std::env::set_var("GEMINI_API_KEY", "  ");
        assert_eq!(api_key_from_env().as_deref(), Some("fallback"));

        std::env::set_var("GEMINI_API_KEY", "primary");
        assert_eq!(api_key_from_env().as_deref(), Some("primary"));

        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
    }

    #[test]
    #[serial]
    fn test_assistant_without_key_is_unconfigured() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
        let assistant = Assistant::from_settings(&AssistantSettings::default());
        assert!(!assistant.is_configured());
    }
}
