//! Interactive TUI mode.

mod input;
mod screen;
mod text;

pub use input::*;
pub use text::print_help;

/// Run TUI interactive mode.
pub fn run() {
    screen::main_menu();
}
