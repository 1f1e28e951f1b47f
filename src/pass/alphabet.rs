//! Alphabet assembly from character classes.
//!
//! Classes are concatenated in a fixed order: letters first, then symbols,
//! then digits. The order is observable (it sets the relative class weight
//! when sampling), so it must not be rearranged.

use super::Request;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SYMBOLS: &[u8] = b"<>?/,.;!@#$%^&*()-_+=`~";
pub const DIGITS: &[u8] = b"1234567890";

/// Build the character pool for one request. Letters are always present,
/// so the result is never empty.
pub fn build(request: &Request) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(request));
    chars.extend_from_slice(LOWERCASE);
    chars.extend_from_slice(UPPERCASE);
    if request.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }
    if request.include_digits {
        chars.extend_from_slice(DIGITS);
    }
    chars
}

/// Pool size implied by the request's flags (for entropy display).
pub fn size(request: &Request) -> usize {
    let mut size = LOWERCASE.len() + UPPERCASE.len();
    if request.include_symbols {
        size += SYMBOLS.len();
    }
    if request.include_digits {
        size += DIGITS.len();
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(include_symbols: bool, include_digits: bool) -> Request {
        Request {
            length: 8,
            include_symbols,
            include_digits,
        }
    }

    #[test]
    fn base_pool_is_letters_only() {
        let pool = build(&request(false, false));
        assert_eq!(
            pool,
            b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
    }

    #[test]
    fn symbols_append_after_letters() {
        let pool = build(&request(true, false));
        assert_eq!(&pool[..52], &build(&request(false, false))[..]);
        assert_eq!(&pool[52..], SYMBOLS);
    }

    #[test]
    fn digits_append_last() {
        let pool = build(&request(true, true));
        assert_eq!(&pool[52..75], SYMBOLS);
        assert_eq!(&pool[75..], DIGITS);

        let pool = build(&request(false, true));
        assert_eq!(&pool[52..], DIGITS);
    }

    #[test]
    fn sizes_match_flag_combinations() {
        assert_eq!(size(&request(false, false)), 52);
        assert_eq!(size(&request(false, true)), 62);
        assert_eq!(size(&request(true, false)), 75);
        assert_eq!(size(&request(true, true)), 85);
    }

    #[test]
    fn pool_length_always_matches_size() {
        for symbols in [false, true] {
            for digits in [false, true] {
                let req = request(symbols, digits);
                assert_eq!(build(&req).len(), size(&req));
            }
        }
    }
}
