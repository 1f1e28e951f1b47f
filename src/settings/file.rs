//! Settings file persistence.
//!
//! One comma-separated line at `~/.config/genpass/settings`. Malformed or
//! truncated content is rewritten from current values rather than treated
//! as an error.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    save_to(settings, &get_path())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    load_from(settings, &get_path())
}

fn save_to(settings: &Settings, path: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    // to_clipboard is runtime state and is deliberately not written
    let data = format!(
        "{},{},{},{},{},{}\n",
        settings.length,
        settings.include_symbols,
        settings.include_digits,
        settings.count,
        settings.output_file_path,
        settings.output_to_terminal
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

fn load_from(settings: &mut Settings, path: &str) -> std::io::Result<()> {
    if !Path::new(path).exists()
        && let Some(parent) = Path::new(path).parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        eprintln!("Failed to create directory for settings file: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() {
        save_to(settings, path)?;
        return Ok(());
    }

    let parts: Vec<&str> = line.trim().split(',').collect();

    if parts.len() == 6 {
        settings.length = parts[0].parse().unwrap_or(settings.length);
        settings.include_symbols = parts[1].parse().unwrap_or(settings.include_symbols);
        settings.include_digits = parts[2].parse().unwrap_or(settings.include_digits);
        settings.count = parts[3].parse().unwrap_or(settings.count);
        settings.output_file_path = parts[4].to_string();
        settings.output_to_terminal = parts[5].parse().unwrap_or(settings.output_to_terminal);
    } else {
        // Stale format: rewrite from current values
        save_to(settings, path)?;
    }

    Ok(())
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/genpass/settings", home)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("genpass-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name).display().to_string()
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let mut saved = Settings::default();
        saved.length = 24;
        saved.include_symbols = true;
        saved.include_digits = true;
        saved.count = 5;
        saved.output_file_path = "out.txt".to_string();
        save_to(&saved, &path).unwrap();

        let mut loaded = Settings::default();
        load_from(&mut loaded, &path).unwrap();
        assert_eq!(loaded, saved);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn empty_file_is_seeded_with_defaults() {
        let path = temp_path("empty");
        let _ = std::fs::remove_file(&path);

        let mut settings = Settings::default();
        load_from(&mut settings, &path).unwrap();
        assert_eq!(settings, Settings::default());

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim(), "8,false,false,1,,true");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn clipboard_flag_is_never_persisted() {
        let path = temp_path("clipboard");
        let mut saved = Settings::default();
        saved.to_clipboard = true;
        save_to(&saved, &path).unwrap();

        let mut loaded = Settings::default();
        load_from(&mut loaded, &path).unwrap();
        assert!(!loaded.to_clipboard);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_rewritten() {
        let path = temp_path("malformed");
        std::fs::write(&path, "not,a,settings,line\n").unwrap();

        let mut settings = Settings::default();
        load_from(&mut settings, &path).unwrap();
        assert_eq!(settings, Settings::default());

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim().split(',').count(), 6);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unparseable_fields_keep_prior_values() {
        let path = temp_path("badfields");
        std::fs::write(&path, "banana,true,maybe,2,,true\n").unwrap();

        let mut settings = Settings::default();
        load_from(&mut settings, &path).unwrap();
        assert_eq!(settings.length, 8);
        assert!(settings.include_symbols);
        assert!(!settings.include_digits);
        assert_eq!(settings.count, 2);

        let _ = std::fs::remove_file(&path);
    }
}
