use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scout_core::{CompetitorQuery, Config, Result};
use scout_sources::{BraveSearch, HttpPageFetcher, SourceFetcher};

mod pipeline;

#[derive(Parser, Debug)]
#[command(author, version, about = "AI-powered competitor analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Analyze a competitor and print the report
    Run {
        /// Company name or URL to analyze (e.g. stripe.com)
        identifier: String,
        /// Output the structured record as JSON instead of a text report
        #[arg(long)]
        json: bool,
        /// Also save the output to a file
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(
            long,
            default_value = "deepseek",
            help = "Model to use for extraction. Available models: deepseek (default), dummy"
        )]
        model: String,
    },
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            identifier,
            json,
            output,
            model,
        } => {
            // All credentials are resolved before any network call.
            let config = Config::from_env()?;
            let query = CompetitorQuery::parse(&identifier)?;

            let pages = Arc::new(HttpPageFetcher::new()?);
            let search = Arc::new(BraveSearch::new(config.brave_api_key.clone())?);
            let fetcher = SourceFetcher::new(pages, search);

            let record = pipeline::scan(&config, &model, &fetcher, &query).await?;

            // The report is rendered in full before the first byte is
            // printed, so an interrupt never leaves partial output behind.
            let rendered = if json {
                scout_report::to_json(&record, &query)?
            } else {
                scout_report::assemble(&record, &query)
            };

            println!("{}", rendered);

            if let Some(path) = output {
                std::fs::write(&path, &rendered)?;
                info!("💾 Saved report to {}", path.display());
            }

            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
