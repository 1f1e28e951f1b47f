//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Warn that a requested length was clamped into policy bounds
pub fn length_clamped(requested: usize, clamped: usize) {
    warn(&format!(
        "Length {} out of range, using {} (allowed: {}-{})",
        requested,
        clamped,
        crate::settings::MIN_LENGTH,
        crate::settings::MAX_LENGTH
    ));
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt when the clipboard is unavailable. Returns true to fall back to
/// terminal output, false to abort. Quiet/non-interactive runs fall back
/// silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Print password output summary - suppressed in quiet mode
pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}

/// Warn that settings could not be loaded
pub fn settings_load_failed(err: &str) {
    warn(&format!("Failed to load settings: {}", err));
}
