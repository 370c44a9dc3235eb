use tracing::info;

use scout_core::{CompetitorQuery, CompetitorRecord, Config, Result};
use scout_inference::{create_model, ExtractionModel};
use scout_sources::SourceFetcher;

/// Runs one scan end to end. The extraction model is built (and its
/// credentials validated) before the fetcher is touched, so a
/// configuration error can never be preceded by an outbound call; after
/// that the pipeline is strictly sequential, and any fatal error
/// short-circuits before a report is assembled.
pub async fn scan(
    config: &Config,
    model_kind: &str,
    fetcher: &SourceFetcher,
    query: &CompetitorQuery,
) -> Result<CompetitorRecord> {
    let model = create_model(model_kind, config.deepseek_api_key.clone())?;
    info!("🧠 Extraction model initialized (using {})", model.name());
    analyze(fetcher, model.as_ref(), query).await
}

/// Fetch the sources, then extract the record.
pub async fn analyze(
    fetcher: &SourceFetcher,
    model: &dyn ExtractionModel,
    query: &CompetitorQuery,
) -> Result<CompetitorRecord> {
    info!("🔍 Analyzing: {}", query.raw);
    let bundle = fetcher.fetch(query).await?;

    info!("🧠 Extracting structured record (using {})", model.name());
    let record = model.extract(&bundle).await?;
    info!("✨ Extraction complete");

    Ok(record)
}
