//! Generative Language REST client
//!
//! One `POST {endpoint}/models/{model}:generateContent` per reply. No
//! streaming, no history: each request carries the persona preamble and the
//! single user message.

use std::time::Duration;

use agdeck_core::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

use super::TextGenerator;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate. Empty when there is none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    url: Url,
    api_key: String,
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str, api_key: impl Into<String>) -> Result<Self> {
        let url = generate_url(endpoint, model)?;
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| Error::assistant(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            url,
            api_key: api_key.into(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// `{endpoint}/models/{model}:generateContent`
fn generate_url(endpoint: &str, model: &str) -> Result<Url> {
    let raw = format!(
        "{}/models/{}:generateContent",
        endpoint.trim_end_matches('/'),
        model
    );
    Url::parse(&raw).map_err(|e| Error::config(format!("Invalid assistant endpoint {:?}: {}", raw, e)))
}

fn request_body<'a>(system: &'a str, prompt: &'a str) -> GenerateRequest<'a> {
    GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: system }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part { text: prompt }],
        }],
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String> {
        debug!("Assistant request to {}", self.url);

        let response = self
            .http
            .post(self.url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body(system, prompt))
            .send()
            .await
            .map_err(|e| Error::assistant(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::assistant(format!("HTTP {}: {}", status, body.trim())));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::assistant(format!("Malformed response: {}", e)))?;
        Ok(parsed.text())
    }
}
