//! Command-line interface: argument parsing and the interactive menu.

pub mod menu;

use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::Parser;

/// A journaling tool that tracks the mood of your entries
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION, version, long_about = None)]
pub struct CliArgs {
    /// Path to the journal database (overrides AURA_DB_PATH)
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Print verbose (debug) logs
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_name = "FORMAT", default_value = LOG_FORMAT_TEXT,
          value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,
}
