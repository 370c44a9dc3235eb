use async_trait::async_trait;
use tracing::debug;

use scout_core::{CompetitorRecord, RawSourceBundle, Result};

use super::ExtractionModel;

const PRICING_SIGNALS: [&str; 5] = ["pricing", "price", "cost", "$", "€"];
const POSITIVE_SIGNALS: [&str; 4] = ["great", "excellent", "best", "love"];
const NEGATIVE_SIGNALS: [&str; 4] = ["bad", "worst", "hate", "problem"];
const OVERVIEW_CHARS: usize = 200;

/// Deterministic offline model. Every field it fills is echoed straight
/// from an available source slot, so a field can only be present when its
/// provenance is. Used by tests and by `--model dummy`.
#[derive(Debug, Default)]
pub struct DummyModel;

impl DummyModel {
    pub fn new() -> Self {
        Self
    }

    // Splits on sentence boundaries without breaking decimals like "$0.30".
    fn sentences_matching(text: &str, signals: &[&str]) -> Vec<String> {
        text.lines()
            .flat_map(|line| line.split(". "))
            .map(|s| s.trim().trim_end_matches('.'))
            .filter(|s| !s.is_empty())
            .filter(|s| {
                let lower = s.to_lowercase();
                signals.iter().any(|signal| lower.contains(signal))
            })
            .take(3)
            .map(str::to_string)
            .collect()
    }
}

#[async_trait]
impl ExtractionModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn extract(&self, bundle: &RawSourceBundle) -> Result<CompetitorRecord> {
        let mut record = CompetitorRecord::empty();

        if let Some(website) = bundle.website.as_text() {
            record.overview = Some(website.chars().take(OVERVIEW_CHARS).collect());
            record.pricing = Self::sentences_matching(website, &PRICING_SIGNALS)
                .into_iter()
                .next();
            record.strengths = Self::sentences_matching(website, &POSITIVE_SIGNALS);
            record.weaknesses = Self::sentences_matching(website, &NEGATIVE_SIGNALS);
        }

        if let Some(news) = bundle.news.as_text() {
            record.recent_news = Some(news.to_string());
        }

        if let Some(social) = bundle.social.as_text() {
            record.social_presence = Some(social.to_string());
            let mut positives = Self::sentences_matching(social, &POSITIVE_SIGNALS);
            let mut negatives = Self::sentences_matching(social, &NEGATIVE_SIGNALS);
            record.strengths.append(&mut positives);
            record.weaknesses.append(&mut negatives);
        }

        if !record.weaknesses.is_empty() {
            record.competitive_angle = Some(format!(
                "Position against their weakest point: {}",
                record.weaknesses[0]
            ));
        }

        debug!("Dummy extraction produced record: {:?}", record);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::{CompetitorQuery, SourceText};

    fn bundle(website: SourceText, news: SourceText, social: SourceText) -> RawSourceBundle {
        RawSourceBundle {
            query: CompetitorQuery::parse("acme.com").unwrap(),
            website,
            news,
            social,
        }
    }

    #[tokio::test]
    async fn test_no_hallucination_for_missing_sources() {
        // Website populated, news and social unavailable: the record must
        // not report values for fields with no supporting slot.
        let model = DummyModel::new();
        let record = model
            .extract(&bundle(
                SourceText::Available(
                    "Acme makes great widgets. Pricing starts at $5 per unit.".to_string(),
                ),
                SourceText::Unavailable,
                SourceText::Unavailable,
            ))
            .await
            .unwrap();

        assert!(record.overview.is_some());
        assert!(record.pricing.is_some());
        assert!(record.recent_news.is_none());
        assert!(record.social_presence.is_none());
    }

    #[tokio::test]
    async fn test_pricing_echoes_source_evidence() {
        let model = DummyModel::new();
        let record = model
            .extract(&bundle(
                SourceText::Available(
                    "Stripe builds payments infrastructure. \
                     Standard plans cost 2.9% + $0.30 per transaction."
                        .to_string(),
                ),
                SourceText::Unavailable,
                SourceText::Unavailable,
            ))
            .await
            .unwrap();
        assert!(record
            .pricing
            .unwrap()
            .contains("2.9% + $0.30 per transaction"));
    }

    #[tokio::test]
    async fn test_angle_derives_from_weaknesses() {
        let model = DummyModel::new();
        let record = model
            .extract(&bundle(
                SourceText::Available("Support is the worst part of the product.".to_string()),
                SourceText::Unavailable,
                SourceText::Unavailable,
            ))
            .await
            .unwrap();
        assert!(!record.weaknesses.is_empty());
        let angle = record.competitive_angle.unwrap();
        assert!(angle.contains(&record.weaknesses[0]));
    }

    #[tokio::test]
    async fn test_empty_bundle_yields_empty_record() {
        let model = DummyModel::new();
        let record = model
            .extract(&bundle(
                SourceText::Unavailable,
                SourceText::Unavailable,
                SourceText::Unavailable,
            ))
            .await
            .unwrap();
        assert!(record.overview.is_none());
        assert!(record.strengths.is_empty());
        assert!(record.competitive_angle.is_none());
    }
}
