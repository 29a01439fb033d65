//! CLI front end for urlstash.
//!
//! Collects batches of up to five URL entries, renders per-field validation
//! feedback, resolves shortcodes, and lists stored records with their click
//! ledgers. Resolution prints the redirect target; it never navigates.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a batch; entries are URL[,validity-minutes[,shortcode]]
//! urlstash shorten https://example.com "https://docs.rs,5" "https://crates.io,,mycode99"
//!
//! # Resolve a shortcode (records a click)
//! urlstash resolve mycode99
//!
//! # Open a full short URL, as the statistics listing would
//! urlstash open http://localhost:3000/mycode99
//!
//! # List every record and its click details
//! urlstash stats
//! ```
//!
//! # Environment Variables
//!
//! - `BASE_URL` - origin prefix for rendered short URLs
//! - `STORAGE_DIR` - directory of the file-backed store
//! - `STORAGE_KEY` - key the collection is persisted under
//! - `RUST_LOG` - log filter

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use urlstash::application::services::{
    CreationRequest, RequestResult, ResolutionOutcome, ResolutionService, ShortenService,
    StatsService,
};
use urlstash::config::Config;
use urlstash::domain::entities::sources;
use urlstash::infrastructure::persistence::{FileStore, KvUrlRepository};

type Repository = KvUrlRepository<FileStore>;

/// Local-first URL shortener with expiring links and click tracking.
#[derive(Parser)]
#[command(name = "urlstash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten up to five URLs in one batch
    Shorten {
        /// Entries in the form `URL[,validity-minutes[,shortcode]]`
        #[arg(required = true, num_args = 1..=5)]
        entries: Vec<String>,
    },

    /// Resolve a shortcode and print its redirect target
    Resolve {
        code: String,

        /// Provenance tag recorded with the click
        #[arg(short, long, default_value = sources::DIRECT_ACCESS)]
        source: String,
    },

    /// Resolve a full short URL (the statistics "open" action)
    Open { short_url: String },

    /// List every stored short URL with its click ledger
    Stats,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();

    let store = FileStore::new(config.storage_dir.clone());
    let repository = Arc::new(KvUrlRepository::new(store, config.storage_key.clone()));

    match cli.command {
        Commands::Shorten { entries } => shorten(repository, &config, &entries),
        Commands::Resolve { code, source } => {
            resolve(ResolutionService::new(repository).resolve(&code, &source));
            Ok(())
        }
        Commands::Open { short_url } => {
            resolve(
                ResolutionService::new(repository)
                    .resolve_short_url(&short_url, sources::STATISTICS_PAGE),
            );
            Ok(())
        }
        Commands::Stats => stats(repository, &config),
    }
}

fn shorten(repository: Arc<Repository>, config: &Config, entries: &[String]) -> Result<()> {
    let requests: Vec<CreationRequest> = entries.iter().map(|e| parse_entry(e)).collect();

    let batch = ShortenService::new(repository).shorten(&requests)?;

    for (index, result) in batch.results.iter().enumerate() {
        match result {
            RequestResult::Created(record) => {
                println!(
                    "{} {} {} {}",
                    format!("[{index}]").dimmed(),
                    record.short_url(&config.base_url).green().bold(),
                    "->".dimmed(),
                    record.long_url
                );
                println!(
                    "    {} {}",
                    "expires".dimmed(),
                    record.expires_at.to_rfc3339()
                );
            }
            RequestResult::Rejected(errors) => {
                println!("{} {}", format!("[{index}]").dimmed(), "rejected".red().bold());
                for (field, message) in [
                    ("url", &errors.long_url),
                    ("validity", &errors.validity),
                    ("shortcode", &errors.shortcode),
                ] {
                    if let Some(message) = message {
                        println!("    {} {}", format!("{field}:").red(), message);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Splits `URL[,validity[,shortcode]]` into a creation request.
fn parse_entry(entry: &str) -> CreationRequest {
    let mut parts = entry.splitn(3, ',');
    let long_url = parts.next().unwrap_or_default().to_string();
    let validity = parts.next().map(str::to_string);
    let shortcode = parts.next().map(str::to_string);

    CreationRequest {
        long_url,
        validity,
        shortcode,
    }
}

fn resolve(outcome: ResolutionOutcome) {
    match outcome {
        ResolutionOutcome::Redirect(long_url) => {
            println!("{} {}", "->".green().bold(), long_url);
        }
        ResolutionOutcome::NotFound => {
            println!("{}", "Short URL not found".red());
        }
        ResolutionOutcome::Expired => {
            println!("{}", "This short URL has expired".yellow());
        }
        ResolutionOutcome::Failed => {
            println!("{}", "An error occurred during redirection".red());
        }
    }
}

fn stats(repository: Arc<Repository>, config: &Config) -> Result<()> {
    let service = StatsService::new(repository);
    let records = service.list_all()?;

    if records.is_empty() {
        println!("No shortened URLs yet.");
        return Ok(());
    }

    for record in &records {
        println!(
            "{} {} {}",
            record.short_url(&config.base_url).cyan().bold(),
            "->".dimmed(),
            record.long_url
        );
        println!(
            "    created {}  expires {}  clicks {}",
            record.created_at.to_rfc3339().dimmed(),
            record.expires_at.to_rfc3339().dimmed(),
            record.clicks.to_string().bold()
        );
        for click in &record.click_data {
            println!(
                "      {} {} ({})",
                click.timestamp.to_rfc3339().dimmed(),
                click.source,
                click.location.dimmed()
            );
        }
    }

    println!(
        "\n{} records, {} total clicks",
        records.len(),
        service.total_clicks()?
    );

    Ok(())
}
