//! Colour helpers for the console attendance table.

use ansi_term::Colour;

/// Placeholder shown for an absent clock time.
pub const EMPTY_TIME: &str = "--:--";
/// Placeholder shown for an absent terminal.
pub const EMPTY_TEXT: &str = "-";

fn is_empty_cell(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == EMPTY_TIME || v == EMPTY_TEXT
}

/// Grey for placeholders, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if is_empty_cell(value) {
        Colour::Fixed(8).paint(value).to_string()
    } else {
        value.to_string()
    }
}

/// Clock-in times green, clock-out times red, placeholders grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if is_empty_cell(value) {
        return colorize_optional(value);
    }

    if is_in {
        Colour::Green.paint(value).to_string()
    } else {
        Colour::Red.paint(value).to_string()
    }
}

/// Weekend days stand out in the weekday column.
pub fn colorize_weekday(value: &str) -> String {
    match value {
        "Saturday" | "Sunday" => Colour::Yellow.paint(value).to_string(),
        _ => value.to_string(),
    }
}
