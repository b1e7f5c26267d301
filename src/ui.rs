//! Campfire console output helpers.

use colored::{ColoredString, Colorize};

use crate::models::{Rgb, UI_ERROR_COLOR, UI_INFO_COLOR, UI_SUCCESS_COLOR, UI_WARNING_COLOR};

pub const GLYPH_ACTION: &str = "⏺";
pub const GLYPH_BRANCH: &str = "⎿";
pub const GLYPH_LOGIC: &str = "∴";
pub const GLYPH_WAIT: &str = "✻";

/// Apply a 24-bit foreground color
pub fn paint(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.0, color.1, color.2)
}

pub fn print_header(title: &str) {
    println!("{} {}", paint(GLYPH_ACTION, UI_INFO_COLOR), title.bold());
}

pub fn print_branch(message: &str) {
    println!("  {} {}", GLYPH_BRANCH.dimmed(), message);
}

pub fn print_logic(message: &str) {
    println!("{} {}", paint(GLYPH_LOGIC, UI_INFO_COLOR), message);
}

pub fn print_wait(message: &str) {
    println!("{} {}", paint(GLYPH_WAIT, UI_WARNING_COLOR), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", paint(GLYPH_ACTION, UI_SUCCESS_COLOR), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", paint(GLYPH_ACTION, UI_INFO_COLOR), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", paint(GLYPH_ACTION, UI_WARNING_COLOR), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", paint(GLYPH_ACTION, UI_ERROR_COLOR), paint(message, UI_ERROR_COLOR));
}

/// Align `key: value` rows on the longest key
pub fn format_columnar(rows: &[(String, String)]) -> Vec<String> {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|(key, value)| {
            let pad = key_width - key.chars().count();
            format!("{}{}  {}", key, " ".repeat(pad), value)
        })
        .collect()
}

pub fn print_columnar(rows: &[(String, String)]) {
    for line in format_columnar(rows) {
        print_branch(&line);
    }
}
