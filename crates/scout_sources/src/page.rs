use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::Html;

use scout_core::{retry::with_retry, Result};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; CompetitorScout/0.1)";
const PAGE_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_PAGE_CHARS: usize = 5000;
const SKIP_TAGS: [&str; 4] = ["script", "style", "nav", "footer"];

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieves a page and returns its visible text, truncated to a
    /// size the extraction prompt can absorb.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Live page fetcher backed by reqwest.
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(PAGE_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

impl fmt::Debug for HttpPageFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPageFetcher")
            .field("client", &"<reqwest::Client>")
            .finish()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let html = with_retry("page fetch", || async {
            let body = self
                .client
                .get(url)
                .header("User-Agent", USER_AGENT)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            Ok(body)
        })
        .await?;
        Ok(extract_text(&html))
    }
}

/// Strips chrome (scripts, styles, navigation, footers) and joins the
/// remaining text nodes.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let skipped = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map_or(false, |el| SKIP_TAGS.contains(&el.name()))
        });
        if skipped {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }

    let joined = parts.join(" ");
    if joined.chars().count() > MAX_PAGE_CHARS {
        joined.chars().take(MAX_PAGE_CHARS).collect()
    } else {
        joined
    }
}
