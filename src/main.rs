/*!
# Aura - A Mood-Aware Journaling Tool

Aura is an interactive command-line journal. Each entry you write is scored for
sentiment by a hosted inference model, tagged with a mood, and saved to a local
SQLite database. You can list, search and delete entries, or view a mood report.

## Usage

```
aura [OPTIONS]

Options:
      --db <PATH>             Path to the journal database (overrides AURA_DB_PATH)
  -v, --verbose               Print verbose (debug) logs
      --log-format <FORMAT>   Log output format [default: text] [possible values: text, json]
  -h, --help                  Print help
  -V, --version               Print version
```

## Configuration

- `HF_TOKEN`: Access token for the inference API (required)
- `AURA_DB_PATH`: Journal database location (defaults to ~/.local/share/aura/journal.db)
- `AURA_SENTIMENT_MODEL`, `AURA_INFERENCE_URL`, `AURA_REQUEST_TIMEOUT_SECS`
*/

use aura::cli::menu::Menu;
use aura::cli::CliArgs;
use aura::config::Config;
use aura::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use aura::errors::AppResult;
use aura::ops::Journal;
use aura::sentiment::HuggingFaceClient;
use aura::store::SqliteStore;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn init_tracing(args: &CliArgs) {
    let filter = if args.verbose {
        EnvFilter::new(VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    // Logs go to stderr so the menu owns stdout.
    if args.log_format == LOG_FORMAT_JSON {
        tracing_subscriber::fmt()
            .json()
            .with_current_span(true)
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

/// Loads configuration, wires the provider and store, and runs the menu.
fn run(args: CliArgs) -> AppResult<()> {
    let mut config = Config::load()?;
    if let Some(db) = args.db.as_deref() {
        config.override_db_path(db)?;
    }
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let provider = HuggingFaceClient::new(
        &config.inference_url,
        &config.sentiment_model,
        &config.hf_token,
        config.request_timeout,
    )?;
    let store = SqliteStore::open(&config.db_path)?;
    let mut journal = Journal::new(provider, store);

    println!("=== AURA AI-Powered Journaling App ===");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut journal, stdin.lock(), stdout.lock()).run()
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args);

    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %Uuid::new_v4()
    );
    let _guard = root_span.enter();

    info!("Starting aura");
    match run(args) {
        Ok(()) => {
            info!("Exiting aura");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("aura failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
