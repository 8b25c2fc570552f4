//! Client for the upstream AI endpoint that writes motivational phrases.
//!
//! The feature is non-critical: any upstream failure (no key, timeout,
//! non-2xx, unparseable body) degrades to a built-in phrase instead of
//! surfacing an error.

use anyhow::{Context, bail};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ai::AiConfig;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 100;

const SYSTEM_PROMPT: &str = "Sei un coach motivazionale per studenti italiani. \
    Genera una frase breve e motivazionale (max 15 parole) per incoraggiare lo studio. \
    Usa un tono positivo ed energico.";

pub const FALLBACK_PHRASES: [&str; 5] = [
    "Ogni minuto di studio è un passo verso il successo!",
    "La disciplina è il ponte tra obiettivi e risultati.",
    "Stai investendo nel tuo futuro, continua così!",
    "Il sapere è l'unica ricchezza che nessuno può rubarti.",
    "Oggi è più vicino di ieri ai tuoi obiettivi!",
];

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Clone, Debug)]
pub struct MotivationClient {
    http_client: reqwest::Client,
    config: AiConfig,
}

impl MotivationClient {
    pub fn new(config: AiConfig) -> Result<Self, anyhow::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Returns a motivational phrase for the given study context.
    ///
    /// Never fails: upstream problems are logged and answered with a
    /// fallback phrase.
    pub async fn generate(&self, context: &str) -> String {
        if self.config.api_key.is_none() {
            return self.fallback_phrase();
        }

        match self.request_phrase(context).await {
            Ok(phrase) if !phrase.is_empty() => phrase,
            Ok(_) => self.fallback_phrase(),
            Err(e) => {
                tracing::warn!(error = %e, "Motivational phrase generation failed, using fallback");
                self.fallback_phrase()
            }
        }
    }

    async fn request_phrase(&self, context: &str) -> Result<String, anyhow::Error> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .context("AI API key not configured")?;

        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: MAX_TOKENS,
            system: SYSTEM_PROMPT,
            messages: vec![Message {
                role: "user",
                content: format!(
                    "Genera una frase motivazionale per uno studente che sta studiando: {}. \
                     Rispondi solo con la frase, senza spiegazioni.",
                    context
                ),
            }],
        };

        let response = self
            .http_client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .context("AI endpoint unreachable")?;

        let status = response.status();
        if !status.is_success() {
            bail!("AI endpoint answered {}", status);
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .context("Failed to parse AI response")?;

        let text = parsed
            .content
            .iter()
            .map(|block| block.text.as_str())
            .collect::<String>()
            .trim()
            .to_string();

        Ok(text)
    }

    fn fallback_phrase(&self) -> String {
        FALLBACK_PHRASES
            .choose(&mut rand::thread_rng())
            .unwrap_or(&FALLBACK_PHRASES[0])
            .to_string()
    }
}
