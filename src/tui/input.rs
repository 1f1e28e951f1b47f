use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Read a line in raw mode with basic editing (cursor movement,
/// backspace/delete, Ctrl+U clear). Esc or Ctrl+Q cancels and returns
/// None; Ctrl+C exits the process.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, |_| true)
}

/// Read a number; only digit keys are accepted. Returns None on cancel
/// or when the buffer doesn't parse (empty input).
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    edit_line(prompt, &initial, |c| c.is_ascii_digit()).and_then(|s| s.parse().ok())
}

fn edit_line(prompt: &str, initial_value: &str, accept: impl Fn(char) -> bool) -> Option<String> {
    let mut input = initial_value.to_string();
    let mut cursor_pos = input.len() + 1; // 1-based: 1 = before first char
    let mut last_len = input.len();
    let mut cancelled = false;

    // Guard keeps raw mode scoped even on panic or early return
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(input),
    };

    print!("{}: {}", prompt, input);
    flush();

    loop {
        match read() {
            Ok(Event::Key(key_event)) => {
                match key_event.code {
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        // process::exit skips destructors, reset first
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.clear();
                        cursor_pos = 1;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_pos <= input.len() {
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Left => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if cursor_pos < input.len() + 1 {
                            cursor_pos += 1;
                        }
                    }
                    KeyCode::Home => cursor_pos = 1,
                    KeyCode::End => cursor_pos = input.len() + 1,
                    KeyCode::Char(c) if accept(c) => {
                        input.insert(cursor_pos - 1, c);
                        cursor_pos += 1;
                    }
                    _ => {}
                }

                // Redraw the input line
                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, input);
                last_len = input.len();

                // Move cursor to correct position
                print!("\x1b[{}G", prompt.len() + 2 + cursor_pos);
                flush();
            }
            Err(_) => break,
            _ => {}
        }
    }

    // Leave raw mode BEFORE the trailing newline
    drop(_guard);
    println!();
    if cancelled { None } else { Some(input) }
}
