/*!
# Aura

Aura is a mood-aware journaling tool. Each entry is scored for sentiment by a
remote inference model, tagged with a coarse mood, and persisted to SQLite. Stored
entries can be listed, searched by sentiment or keyword, deleted, and summarized
in a mood report.

## Architecture

Raw text flows through a small layered pipeline:

```text
text -> CachingSentimentProxy -> EntryFactory -> TaggingDecorator -> EntryStore::insert
```

- `journal`: the `Entry` record, its factory and the mood tagging decorator
- `sentiment`: the `SentimentProvider` capability, the HTTP client and the caching proxy
- `db`: pooled SQLite database, schema and row operations
- `store`: the `EntryStore` capability and its SQLite implementation
- `report`: mood statistics over stored entries
- `ops`: user-facing operations and the `Journal` service
- `cli`: argument parsing and the interactive menu
- `config`: configuration loading and validation
- `errors`: error handling infrastructure

## Usage Example

```rust,no_run
use aura::{Config, Journal};
use aura::sentiment::HuggingFaceClient;
use aura::store::SqliteStore;

fn main() -> aura::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let provider = HuggingFaceClient::new(
        &config.inference_url,
        &config.sentiment_model,
        &config.hf_token,
        config.request_timeout,
    )?;
    let mut journal = Journal::new(provider, SqliteStore::open(&config.db_path)?);

    let entry = journal.add_entry("Life is good")?;
    println!("Saved with tag {:?}", entry.tag);
    println!("{}", journal.mood_report()?);
    Ok(())
}
```
*/

/// Command-line interface and interactive menu
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// SQLite database access
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Entry record, factory and tagging
pub mod journal;
/// User-facing journaling operations
pub mod ops;
/// Mood statistics
pub mod report;
/// Sentiment inference
pub mod sentiment;
/// Entry persistence capability
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{Entry, EntryFactory, EntryId, MoodTag, Sentiment, SentimentLabel, TaggingDecorator};
pub use ops::Journal;
pub use report::MoodReport;
pub use sentiment::{CachingSentimentProxy, SentimentProvider};
pub use store::{EntryStore, SqliteStore};
