//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::pass;
use crate::rand::Rng;
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::settings_load_failed(&e.to_string());
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("genpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings. Length bounds are enforced here, at
    /// the caller edge, never inside the generator.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            let clamped = self.settings.set_length(len);
            if clamped != len {
                prompts::length_clamped(len, clamped);
            }
        }
        if let Some(num) = self.flags.number {
            self.settings.count = num;
        }
        if self.flags.symbols {
            self.settings.include_symbols = true;
        }
        if self.flags.digits {
            self.settings.include_digits = true;
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = if path.ends_with('/') || path == "." {
                if path == "." {
                    "genpass.txt".to_string()
                } else {
                    format!("{}genpass.txt", path)
                }
            } else if !path.ends_with(".txt") {
                format!("{}.txt", path)
            } else {
                path.clone()
            };
            self.settings.output_to_terminal = false;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Clipboard output needs the provider `apply_flags` sets up; with the
    /// flag set but no provider the batch would be generated and dropped
    /// unseen, so print instead.
    fn resolve_clipboard(&mut self) {
        if self.settings.to_clipboard && self.clipboard.is_none() {
            self.settings.to_clipboard = false;
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        self.resolve_clipboard();

        let count = self.settings.count.max(1);
        let mut rng = Rng::from_entropy();

        if self.settings.to_clipboard {
            let passwords = pass::generate_batch(&self.settings, count, &mut rng);
            if let (Some(ctx), Some(mut passwords)) = (self.clipboard.as_mut(), passwords) {
                match ctx.set_contents(passwords.clone()) {
                    Ok(_) => {
                        if let Ok(mut retrieved) = ctx.get_contents() {
                            retrieved.zeroize();
                        }
                        prompts::clipboard_copied();
                    }
                    Err(e) => {
                        prompts::clipboard_error(&e.to_string());
                    }
                }
                passwords.zeroize();
            }
        } else if !self.settings.output_file_path.is_empty() {
            pass::generate_batch(&self.settings, count, &mut rng);
            let full_path = std::fs::canonicalize(&self.settings.output_file_path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            prompts::passwords_written(count, &full_path);
        } else {
            pass::generate_batch(&self.settings, count, &mut rng);
        }
    }
}
