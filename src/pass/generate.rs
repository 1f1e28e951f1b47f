//! Password generation.

use std::fs::OpenOptions;

use zeroize::Zeroize;

use super::{Request, SecureBufWriter, alphabet};
use crate::rand::Rng;
use crate::settings::Settings;

/// Generate a single password. Each character is drawn independently from
/// the pool implied by the request, so the result has exactly
/// `request.length` characters (zero length gives the empty string).
pub fn generate(request: &Request, rng: &mut Rng) -> String {
    let chars = alphabet::build(request);

    let bytes: Vec<u8> = (0..request.length)
        .map(|_| chars[rng.below(chars.len())])
        .collect();
    // Safety: the alphabet is all ASCII
    unsafe { String::from_utf8_unchecked(bytes) }
}

/// Generate `count` passwords to stdout, the output file, or (when the
/// clipboard flag is set) a returned newline-joined buffer for the caller
/// to hand to the clipboard and zeroize.
pub fn generate_batch(settings: &Settings, count: usize, rng: &mut Rng) -> Option<String> {
    let chars = alphabet::build(&settings.request());

    let mut file: Option<SecureBufWriter<std::fs::File>> = None;
    if !settings.output_file_path.is_empty() {
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.output_file_path)
        {
            Ok(f) => file = Some(SecureBufWriter::new(f)),
            Err(e) => {
                crate::cli::prompts::error(&format!(
                    "Failed to open {}: {}",
                    settings.output_file_path, e
                ));
                return None;
            }
        }
    }

    let stdout = std::io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());

    let mut passwords = String::new();
    let mut buf = Vec::with_capacity(settings.length + 1);

    for _ in 0..count {
        buf.clear();
        buf.extend((0..settings.length).map(|_| chars[rng.below(chars.len())]));

        if settings.to_clipboard {
            // Safety: buf contains only ASCII bytes from the alphabet
            passwords.push_str(unsafe { std::str::from_utf8_unchecked(&buf) });
            passwords.push('\n');
        } else {
            buf.push(b'\n');
            if let Some(ref mut f) = file {
                let _ = f.write_all(&buf);
            } else {
                let _ = out.write_all(&buf);
            }
        }
        buf.zeroize();
    }

    if settings.to_clipboard {
        return Some(passwords);
    }
    None
}
