//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers, entropy formatting.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Entropy
// ============================================================================

/// Shannon entropy of a password in bits: length * log2(pool size).
pub fn calculate_entropy(length: usize, pool_size: usize) -> f64 {
    if pool_size < 2 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Rough strength label for an entropy figure.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits {
        b if b < 28.0 => "very weak",
        b if b < 36.0 => "weak",
        b if b < 60.0 => "reasonable",
        b if b < 128.0 => "strong",
        _ => "very strong",
    }
}

// ============================================================================
// Box Drawing (62 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 62;

/// Visible width of a line: chars minus ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }
    width
}

/// Print box top with optional title: ┌─ Title ──────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content      │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        println!("│ {}{} │", content, " ".repeat(inner_width - display_len));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line.
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total = inner_width - display_len;
        let left = total / 2;
        println!(
            "│ {}{}{} │",
            " ".repeat(left),
            content,
            " ".repeat(total - left)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print an option line: flag column padded to 24, then description.
pub fn box_opt(flag: &str, desc: &str) {
    let padded = format!("{:<24}{}", flag, desc);
    box_line(&padded);
}

/// Print box bottom.
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_ignores_ansi_sequences() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{UNDERLINE}Flags{RESET}:")), 6);
        assert_eq!(console_width(""), 0);
    }

    #[test]
    fn entropy_matches_known_figures() {
        // 8 letters-only chars: 8 * log2(52) ~= 45.6 bits
        let bits = calculate_entropy(8, 52);
        assert!((bits - 45.6).abs() < 0.1, "{bits}");
        assert_eq!(calculate_entropy(0, 52), 0.0);
        assert_eq!(calculate_entropy(10, 0), 0.0);
    }

    #[test]
    fn strength_labels_are_ordered() {
        assert_eq!(entropy_strength(10.0), "very weak");
        assert_eq!(entropy_strength(30.0), "weak");
        assert_eq!(entropy_strength(45.6), "reasonable");
        assert_eq!(entropy_strength(100.0), "strong");
        assert_eq!(entropy_strength(300.0), "very strong");
    }
}
