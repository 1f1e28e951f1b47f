//! TUI screen and help text.

use crate::pass::alphabet;
use crate::settings::Settings;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, calculate_entropy,
    entropy_strength, flush, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Draw the generator screen: current password, the three controls, and
/// the action menu.
pub fn print_screen(settings: &Settings, password: &str, previous: &str, error: Option<&str>) {
    let pool = alphabet::size(&settings.request());
    let bits = calculate_entropy(settings.length, pool);

    box_top("Genpass");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");
    box_line(&format!("{UNDERLINE}Password{RESET}:"));
    box_line(&format!("  {}", password));
    if !previous.is_empty() {
        box_line(&format!("  previous: {}", previous));
    }
    box_line("");
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(&format!("  1) Length: {}", settings.length));
    box_line(&format!("  2) Symbols: {}", on_off(settings.include_symbols)));
    box_line(&format!("  3) Digits: {}", on_off(settings.include_digits)));
    box_line("");
    box_line(&format!(
        "{UNDERLINE}Entropy{RESET}: {:.1} bits ({}) \u{2022} {} chars in pool",
        bits,
        entropy_strength(bits),
        pool
    ));
    box_line("");
    print_rule();
    box_line("     4) copy to clipboard  |  5) show previous");
    box_line("     s) save settings  |  f) load saved  |  r) defaults");
    box_line("     h) help  |  q) quit");
    box_bottom();

    // Error message (or blank line to keep the layout stable)
    match error {
        Some(msg) => print_error(msg),
        None => println!(),
    }
    flush();
}

pub fn print_help() {
    box_top("Genpass");
    box_line_center("Random password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a menu to");
    box_line("     adjust length and character classes; every change");
    box_line("     regenerates the password.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to");
    box_line("     generate passwords without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  genpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 6-100 (default: 8)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --symbols", "Include symbol characters");
    box_opt("      --digits", "Include digit characters");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Write to file (default: genpass.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Use saved settings from config file");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  genpass                  Interactive mode");
    box_line("  genpass -l 16            One password, 16 characters");
    box_line("  genpass -l 20 -n 3       Three passwords, 20 characters");
    box_line("  genpass --symbols --digits -b   Full pool, to clipboard");
    box_line("");
    box_bottom();
    println!();
}
