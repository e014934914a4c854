//! Console status lines (icon + colour), the only "log" the CLI writes.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Honour https://no-color.org
fn colour_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(colour: Colour, icon: &str) -> String {
    if colour_enabled() {
        colour.bold().paint(icon).to_string()
    } else {
        icon.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", prefix(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", prefix(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", prefix(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", prefix(Colour::Red, ICON_ERR), msg);
}

/// Section header above tables.
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("====================== {msg}");
    if colour_enabled() {
        println!("{}\n", Style::new().bold().fg(Colour::Blue).paint(line));
    } else {
        println!("{line}\n");
    }
}
