//! Interactive generator screen.
//!
//! Mirrors the generator's three controls (length, symbols, digits); any
//! change regenerates immediately. Keeps one previous password in memory,
//! never on disk.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::pass;
use crate::rand::Rng;
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::text::{enter_prompt, print_help, print_screen};
use super::{get_editable_input, get_numeric_input};

pub fn main_menu() {
    reset_terminal();
    clear();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        println!("Error loading settings: {}", e);
        Settings::default()
    });
    // Saved files predating the bounds may carry anything
    settings.set_length(settings.length);

    let mut rng = Rng::from_entropy();
    let mut password = pass::generate(&settings.request(), &mut rng);
    let mut previous = String::new();
    let mut error: Option<String> = None;

    loop {
        print_screen(&settings, &password, &previous, error.as_deref());
        error = None;

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        clear();
        match input.trim() {
            "" => regenerate(&settings, &mut rng, &mut password, &mut previous),
            "1" => {
                if let Some(len) = get_numeric_input("Enter new password length", settings.length) {
                    let clamped = settings.set_length(len);
                    if clamped != len {
                        error = Some(format!("Length clamped to {}", clamped));
                    }
                    regenerate(&settings, &mut rng, &mut password, &mut previous);
                }
                clear();
            }
            "2" => {
                settings.include_symbols = !settings.include_symbols;
                regenerate(&settings, &mut rng, &mut password, &mut previous);
            }
            "3" => {
                settings.include_digits = !settings.include_digits;
                regenerate(&settings, &mut rng, &mut password, &mut previous);
            }
            "4" => copy_to_clipboard(&password, &mut error),
            "5" => {
                if previous.is_empty() {
                    error = Some("No previous password yet.".to_string());
                }
                // Otherwise already on screen; nothing to do
            }
            "s" => {
                if let Err(e) = settings.save_to_file() {
                    error = Some(format!("Error saving settings: {}", e));
                }
            }
            "f" => match Settings::load_from_file() {
                Ok(s) => {
                    settings = s;
                    settings.set_length(settings.length);
                    regenerate(&settings, &mut rng, &mut password, &mut previous);
                }
                Err(e) => error = Some(format!("Error loading settings: {}", e)),
            },
            "r" => {
                settings = Settings::default();
                regenerate(&settings, &mut rng, &mut password, &mut previous);
            }
            "h" | "help" => print_help(),
            "q" | "quit" => break,
            _ => error = Some("Invalid option.".to_string()),
        }
    }

    clear();
    password.zeroize();
    previous.zeroize();
}

/// New password; the old one becomes the single remembered previous.
fn regenerate(settings: &Settings, rng: &mut Rng, password: &mut String, previous: &mut String) {
    previous.zeroize();
    *previous = std::mem::take(password);
    *password = pass::generate(&settings.request(), rng);
}

fn copy_to_clipboard(password: &str, error: &mut Option<String>) {
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(password.to_string()) {
            Ok(_) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                println!("*** -COPIED TO CLIPBOARD- ***");
            }
            Err(e) => *error = Some(format!("Clipboard error: {}", e)),
        },
        Err(e) => *error = Some(format!("Clipboard unavailable: {}", e)),
    }
}
