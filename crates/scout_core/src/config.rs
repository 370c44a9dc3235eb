use crate::{Error, Result};

const BRAVE_KEY_VAR: &str = "BRAVE_API_KEY";
const DEEPSEEK_KEY_VAR: &str = "DEEPSEEK_API_KEY";

/// Credentials for the external services, resolved once at startup and
/// passed explicitly to the fetch and extraction stages.
#[derive(Debug, Clone)]
pub struct Config {
    pub brave_api_key: String,
    pub deepseek_api_key: Option<String>,
}

impl Config {
    /// Reads credentials from the environment. The search key is always
    /// required; the LLM key is validated by the model that needs it,
    /// still before any network call is made.
    pub fn from_env() -> Result<Self> {
        let brave_api_key = std::env::var(BRAVE_KEY_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", BRAVE_KEY_VAR)))?;
        let deepseek_api_key = std::env::var(DEEPSEEK_KEY_VAR).ok();
        Ok(Self {
            brave_api_key,
            deepseek_api_key,
        })
    }
}
