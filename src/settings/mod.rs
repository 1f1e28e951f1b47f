//! Generation settings and length policy.

mod file;

use crate::pass::Request;

/// Length bounds enforced at the edges (CLI flags, TUI input). The core
/// generator itself never validates.
pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub include_symbols: bool,
    pub include_digits: bool,
    pub count: usize,
    pub output_file_path: String,
    pub output_to_terminal: bool,
    /// Runtime state, never persisted; a provider must exist before use.
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    /// The generation request these settings describe.
    pub fn request(&self) -> Request {
        Request {
            length: self.length,
            include_symbols: self.include_symbols,
            include_digits: self.include_digits,
        }
    }

    /// Apply a user-supplied length, clamped into policy bounds. Returns
    /// the clamped value so callers can warn when input was adjusted.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        self.length
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 8,
            include_symbols: false,
            include_digits: false,
            count: 1,
            output_file_path: String::from(""),
            output_to_terminal: true,
            to_clipboard: false,
        }
    }
}
