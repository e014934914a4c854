//! rAttendance library root.
//! Exposes the line parser, the daily aggregator, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

pub use crate::core::{DailyAggregator, ParseReport, aggregate, parse_line, parse_lines};
pub use models::{ClockEvent, DailyAttendance, Punch};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = resolved_config_path(&cli);

    // init must work even when the current file is broken
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}

/// `--config` if given, otherwise the per-user config file.
pub fn resolved_config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file)
}
