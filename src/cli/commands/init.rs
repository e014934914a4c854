use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes a default
/// configuration file. An existing file is left untouched.
pub fn handle(cli: &Cli, config_path: &Path) -> AppResult<()> {
    info("Initializing rAttendance…");

    Config::init_all(config_path, cli.test)?;

    let cfg = Config::load_from(config_path)?;
    info(format!("Config file : {}", config_path.display()));
    info(format!(
        "Clock-in cutoff hour: {:02}:59",
        cfg.in_cutoff_hour
    ));

    success("rAttendance initialization completed!");
    Ok(())
}
