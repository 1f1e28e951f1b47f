//! Raw mode RAII guard.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Guard that disables raw mode when dropped, including on panic or
/// early return out of an input loop.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
