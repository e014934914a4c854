//! Line sources: a text file on disk or standard input (`-`).

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Input name that selects standard input.
pub const STDIN_INPUT: &str = "-";

/// Read all lines from `input`, which is either a path or `-` for stdin.
pub fn read_lines(input: &str) -> AppResult<Vec<String>> {
    if input == STDIN_INPUT {
        let stdin = io::stdin();
        return collect_lines(stdin.lock());
    }

    let path = expand_tilde(input);
    let file = File::open(&path).map_err(|e| {
        AppError::from(io::Error::new(
            e.kind(),
            format!("cannot open input '{}': {e}", path.display()),
        ))
    })?;

    collect_lines(BufReader::new(file))
}

/// Collect lines from any buffered reader, stripping a UTF-8 BOM if present.
pub fn collect_lines<R: BufRead>(reader: R) -> AppResult<Vec<String>> {
    let mut lines = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if idx == 0 {
            lines.push(line.trim_start_matches('\u{feff}').to_string());
        } else {
            lines.push(line);
        }
    }

    Ok(lines)
}
