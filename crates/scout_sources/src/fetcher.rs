use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::{info, warn};

use scout_core::{CompetitorQuery, Error, RawSourceBundle, Result, SourceText};

use crate::page::PageFetcher;
use crate::search::SearchProvider;

const HITS_PER_SLOT: usize = 3;

/// Gathers raw text for one competitor: the website itself plus news and
/// market-perception searches. Individual sources degrade to
/// `SourceText::Unavailable`; only a fully empty result aborts the scan.
pub struct SourceFetcher {
    pages: Arc<dyn PageFetcher>,
    search: Arc<dyn SearchProvider>,
}

impl SourceFetcher {
    pub fn new(pages: Arc<dyn PageFetcher>, search: Arc<dyn SearchProvider>) -> Self {
        Self { pages, search }
    }

    pub async fn fetch(&self, query: &CompetitorQuery) -> Result<RawSourceBundle> {
        info!("📄 Fetching website: {}", query.website_url());
        let website = match self.pages.fetch_text(&query.website_url()).await {
            Ok(text) if !text.is_empty() => SourceText::Available(text),
            Ok(_) => {
                warn!("⚠️ Website for {} returned no visible text", query.domain);
                SourceText::Unavailable
            }
            Err(e) => {
                warn!("⚠️ Could not fetch website for {}: {}", query.domain, e);
                SourceText::Unavailable
            }
        };

        info!("📰 Searching for news about {}", query.raw);
        let news = self
            .search_slot(&format!("{} news {}", query.raw, Utc::now().year()))
            .await;

        info!("💬 Gathering market perception for {}", query.raw);
        let social = self
            .search_slot(&format!("{} review pros cons", query.raw))
            .await;

        let bundle = RawSourceBundle {
            query: query.clone(),
            website,
            news,
            social,
        };

        if bundle.is_empty() {
            return Err(Error::Fetch(query.raw.clone()));
        }
        Ok(bundle)
    }

    async fn search_slot(&self, search_query: &str) -> SourceText {
        match self.search.search(search_query).await {
            Ok(hits) if !hits.is_empty() => {
                let text = hits
                    .iter()
                    .take(HITS_PER_SLOT)
                    .map(|hit| hit.as_snippet())
                    .collect::<Vec<_>>()
                    .join("\n");
                SourceText::Available(text)
            }
            Ok(_) => {
                warn!("⚠️ Search returned no hits for '{}'", search_query);
                SourceText::Unavailable
            }
            Err(e) => {
                warn!("⚠️ Search failed for '{}': {}", search_query, e);
                SourceText::Unavailable
            }
        }
    }
}
