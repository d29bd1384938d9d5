//! zettel - incremental enrichment pipeline for knowledge-base notes.
//!
//! Usage:
//!   zettel [--limit N] [--force] [--ledger PATH] [--archive-dir DIR]
//!
//! Credentials and endpoints come from the environment (a `.env` file is
//! honored): NOTION_TOKEN, NOTION_DATABASE_ID, OPENAI_API_KEY,
//! GITHUB_TOKEN, GITHUB_REPO.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zettel_archive::GitHubArchive;
use zettel_core::defaults;
use zettel_inference::ChatBackend;
use zettel_pipeline::{Ledger, Pipeline, RunConfig};
use zettel_store::NotionStore;

#[derive(Debug)]
struct Args {
    limit: Option<usize>,
    force_reprocess: bool,
    ledger_path: PathBuf,
    archive_dir: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            limit: None,
            force_reprocess: false,
            ledger_path: PathBuf::from(defaults::LEDGER_PATH),
            archive_dir: None,
        }
    }
}

fn print_usage() {
    eprintln!(
        "zettel - incremental enrichment pipeline for knowledge-base notes\n\
         \n\
         USAGE:\n\
         \x20   zettel [OPTIONS]\n\
         \n\
         OPTIONS:\n\
         \x20   --limit, -n N        Process at most N notes\n\
         \x20   --force, -f          Reprocess every note, ignoring the ledger\n\
         \x20   --ledger PATH        Ledger file (default: {})\n\
         \x20   --archive-dir DIR    Archive directory (default: {})\n\
         \x20   --help, -h           Show this help",
        defaults::LEDGER_PATH,
        defaults::ARCHIVE_DIR,
    );
}

fn parse_args() -> Option<Args> {
    let argv: Vec<String> = std::env::args().collect();
    let mut args = Args::default();

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--limit" | "-n" => {
                i += 1;
                match argv.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    Some(limit) => args.limit = Some(limit),
                    None => {
                        eprintln!("--limit requires a number");
                        return None;
                    }
                }
            }
            "--force" | "-f" => args.force_reprocess = true,
            "--ledger" => {
                i += 1;
                match argv.get(i) {
                    Some(path) => args.ledger_path = PathBuf::from(path),
                    None => {
                        eprintln!("--ledger requires a path");
                        return None;
                    }
                }
            }
            "--archive-dir" => {
                i += 1;
                match argv.get(i) {
                    Some(dir) => args.archive_dir = Some(dir.clone()),
                    None => {
                        eprintln!("--archive-dir requires a directory");
                        return None;
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            unknown => {
                eprintln!("Unknown argument: {}", unknown);
                print_usage();
                return None;
            }
        }
        i += 1;
    }

    Some(args)
}

fn init_tracing() {
    // LOG_FORMAT: "json" or "text" (default). RUST_LOG: standard env filter.
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "zettel=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let Some(args) = parse_args() else {
        std::process::exit(2);
    };

    let store = Arc::new(NotionStore::from_env()?);
    let backend = Arc::new(ChatBackend::from_env()?);
    let archive = Arc::new(GitHubArchive::from_env()?);
    let ledger = Ledger::load(&args.ledger_path);

    info!(
        ledger = %args.ledger_path.display(),
        force = args.force_reprocess,
        limit = ?args.limit,
        "Starting zettel run"
    );

    let mut config = RunConfig::from_env();
    if args.force_reprocess {
        config = config.with_force_reprocess(true);
    }
    if let Some(limit) = args.limit {
        config = config.with_limit(limit);
    }

    let mut pipeline = Pipeline::new(store, backend, archive, ledger, config);
    if let Some(dir) = args.archive_dir {
        pipeline = pipeline.with_archive_dir(dir);
    }

    let summary = pipeline.run().await?;
    println!("{}", summary);

    Ok(())
}
