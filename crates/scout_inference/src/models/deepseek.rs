use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use scout_core::{retry::with_retry, CompetitorRecord, Error, RawSourceBundle, Result};

use crate::prompt::build_prompt;

use super::{strip_code_fences, ExtractionModel};

const CHAT_TIMEOUT: Duration = Duration::from_secs(60);
const REPLY_EXCERPT_CHARS: usize = 200;

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

pub struct DeepSeekModel {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl DeepSeekModel {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .ok_or_else(|| Error::Config("DeepSeek API key is required".to_string()))?;
        let client = Arc::new(Client::builder().timeout(CHAT_TIMEOUT).build()?);
        Ok(Self {
            client,
            api_key,
            base_url: "https://api.deepseek.com/v1".to_string(),
        })
    }

    /// Strict decode of a model reply into the record schema. A reply
    /// that does not match the schema is an extraction failure; silently
    /// defaulting here would fabricate facts about the competitor.
    fn decode_reply(reply: &str) -> Result<CompetitorRecord> {
        let body = strip_code_fences(reply);
        serde_json::from_str(body).map_err(|e| {
            let excerpt: String = body.chars().take(REPLY_EXCERPT_CHARS).collect();
            Error::Extraction(format!(
                "model reply did not match the record schema: {} (reply: {})",
                e, excerpt
            ))
        })
    }
}

impl fmt::Debug for DeepSeekModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepSeekModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl ExtractionModel for DeepSeekModel {
    fn name(&self) -> &str {
        "DeepSeek"
    }

    async fn extract(&self, bundle: &RawSourceBundle) -> Result<CompetitorRecord> {
        let prompt = build_prompt(bundle);
        debug!("Built extraction prompt ({} chars)", prompt.len());

        let response = with_retry("chat completion", || async {
            let request = ChatRequest {
                model: "deepseek-chat".to_string(),
                messages: vec![ChatMessage {
                    role: "user".to_string(),
                    content: prompt.clone(),
                }],
                response_format: ResponseFormat {
                    format_type: "json_object".to_string(),
                },
            };

            let response = self
                .client
                .post(format!("{}/chat/completions", self.base_url))
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&request)
                .send()
                .await?
                .error_for_status()?
                .json::<ChatResponse>()
                .await?;
            Ok(response)
        })
        .await?;

        let reply = response
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| Error::Extraction("model returned no choices".to_string()))?;

        Self::decode_reply(reply)
    }
}
