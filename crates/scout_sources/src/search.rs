use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use scout_core::{retry::with_retry, Result};

const BRAVE_SEARCH_URL: &str = "https://api.search.brave.com/res/v1/web/search";
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
const RESULTS_PER_QUERY: u32 = 5;

/// One web-search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

impl SearchHit {
    /// Single-line rendering used when search hits are folded into a
    /// source slot for extraction.
    pub fn as_snippet(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs a web search and returns the top hits. An empty result list
    /// is a valid outcome, not an error.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;
}

#[derive(Deserialize)]
struct BraveResponse {
    #[serde(default)]
    web: Option<BraveWebResults>,
}

#[derive(Deserialize)]
struct BraveWebResults {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Brave Web Search API client.
pub struct BraveSearch {
    client: Client,
    api_key: String,
}

impl BraveSearch {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder().timeout(SEARCH_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    fn decode(body: &str) -> Result<Vec<SearchHit>> {
        let response: BraveResponse = serde_json::from_str(body)?;
        Ok(response.web.map(|w| w.results).unwrap_or_default())
    }
}

impl fmt::Debug for BraveSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BraveSearch")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl SearchProvider for BraveSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        with_retry("web search", || async {
            let count = RESULTS_PER_QUERY.to_string();
            let body = self
                .client
                .get(BRAVE_SEARCH_URL)
                .header("X-Subscription-Token", &self.api_key)
                .query(&[("q", query), ("count", count.as_str())])
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            Self::decode(&body)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_brave_response() {
        let body = r#"{
            "web": {
                "results": [
                    {"title": "Stripe", "description": "Payments infrastructure", "url": "https://stripe.com"},
                    {"title": "Stripe pricing", "description": "2.9% + 30c", "url": "https://stripe.com/pricing"}
                ]
            }
        }"#;
        let hits = BraveSearch::decode(body).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Stripe");
        assert_eq!(hits[1].url, "https://stripe.com/pricing");
    }

    #[test]
    fn test_decode_empty_response() {
        let hits = BraveSearch::decode("{}").unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_decode_invalid_response() {
        assert!(BraveSearch::decode("not json").is_err());
    }

    #[test]
    fn test_snippet_rendering() {
        let hit = SearchHit {
            title: "Stripe review".to_string(),
            description: "great developer experience".to_string(),
            url: String::new(),
        };
        assert_eq!(hit.as_snippet(), "Stripe review: great developer experience");
    }
}
