use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{missing_fields, migrate_config_file};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `rattendance init`.",
                    path.display()
                ));
            } else {
                let missing = missing_fields(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields: {} (run `rattendance config --migrate`)",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            if migrate_config_file(path)? {
                success(format!("Configuration file updated: {}", path.display()));
            } else {
                info("Configuration file already up to date.");
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "no configuration file at {}; run `rattendance init` first",
            path.display()
        )));
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor_to_use}'"));
        }
        _ if editor_to_use != default_editor => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{default_editor}'"));
                }
                _ => return Err(edit_failed(&default_editor)),
            }
        }
        _ => return Err(edit_failed(&editor_to_use)),
    }

    // the edited file must still load
    Config::load_from(path).map(|_| ())
}

fn edit_failed(editor: &str) -> AppError {
    AppError::Config(format!("failed to edit configuration file using '{editor}'"))
}
