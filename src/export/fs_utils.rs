// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check that an output file can be created or replaced.
///
/// - directory, or missing parent directory → error
/// - file does not exist, or `force` → Ok
/// - file exists without `force` → ask on stdin
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "output path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(AppError::Export(format!(
            "output directory does not exist: {}",
            parent.display()
        )));
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    if confirm(io::stdin().lock())? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}

/// With the log piped through stdin there is nobody left to answer the
/// overwrite prompt, so an existing output needs `--force` up front.
pub(crate) fn ensure_unattended_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "output file '{}' already exists and the log is read from stdin; use --force to overwrite",
            path.display()
        )));
    }
    Ok(())
}

fn confirm<R: BufRead>(mut input: R) -> AppResult<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}
