use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use scout_core::{CompetitorRecord, Error, RawSourceBundle, Result};

pub mod deepseek;
pub mod dummy;

pub use deepseek::DeepSeekModel;
pub use dummy::DummyModel;

#[async_trait]
pub trait ExtractionModel: Send + Sync + fmt::Debug {
    /// Returns the name of the model backend
    fn name(&self) -> &str;

    /// Extracts a structured competitor record from the fetched sources.
    /// Fields without supporting evidence come back absent, never guessed.
    async fn extract(&self, bundle: &RawSourceBundle) -> Result<CompetitorRecord>;
}

/// Builds the configured extraction model. `deepseek` needs an API key;
/// `dummy` is the deterministic offline backend used in tests.
pub fn create_model(kind: &str, api_key: Option<String>) -> Result<Arc<dyn ExtractionModel>> {
    match kind {
        "deepseek" => Ok(Arc::new(DeepSeekModel::new(api_key)?)),
        "dummy" => Ok(Arc::new(DummyModel::new())),
        other => Err(Error::Config(format!(
            "Unknown model: {}. Available models: deepseek, dummy",
            other
        ))),
    }
}

/// Strips a markdown code fence if the model wrapped its JSON in one.
pub(crate) fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches('\n')
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_dummy() {
        let model = create_model("dummy", None).unwrap();
        assert_eq!(model.name(), "Dummy");
    }

    #[test]
    fn test_create_model_unknown() {
        let err = create_model("gpt-nonexistent", None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_create_deepseek_requires_key() {
        assert!(create_model("deepseek", None).is_err());
        assert!(create_model("deepseek", Some("test-key".to_string())).is_ok());
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }
}
