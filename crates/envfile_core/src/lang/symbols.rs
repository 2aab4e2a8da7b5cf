//! Permitted symbol vocabulary.
//!
//! A "character" in the env file grammar is any member of [`ALLOWED_SYMBOLS`]: Latin letters, digits and a fixed
//! punctuation subset. Keys and unquoted values are runs of these symbols; everything else is either structural
//! (see [`crate::lang::markers`]) or rejected.
//!
//! ## Notes
//! - Only membership matters. The table order is the documented order and carries no meaning.
//! - Membership is answered from a 128-bit mask computed at compile time from the table, so the two can never
//!   disagree. A non-ASCII entry in the table fails the build.
//!
//! ## Examples
//! ```rust
//! use envfile_core::lang::symbols;
//!
//! assert!(symbols::is_allowed('k'));
//! assert!(symbols::is_allowed('|'));
//! assert!(!symbols::is_allowed('='));
//! ```

/// Registry of every permitted literal symbol.
pub const ALLOWED_SYMBOLS: &[char] = &[
    // Uppercase
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
    // Lowercase
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u',
    'v', 'w', 'x', 'y', 'z',
    // Digits
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    // Punctuation
    '!', '@', '+', '$', '%', '^', '&', '*', '(', ')', '-', '_', '~', '`', ':', ';', '<', '>', ',', '.', '/', '?',
    '\'', '{', '}', '[', '\\', ']', '|',
];

const ALLOWED_MASK: u128 = build_mask(ALLOWED_SYMBOLS);

const fn build_mask(symbols: &[char]) -> u128 {
    let mut mask = 0u128;
    let mut i = 0;
    while i < symbols.len() {
        // Shifting by >= 128 is a const-eval error, which rejects non-ASCII entries at build time.
        mask |= 1u128 << (symbols[i] as u32);
        i += 1;
    }
    mask
}

/// Return `true` if `c` is a permitted literal symbol.
#[inline]
pub fn is_allowed(c: char) -> bool {
    let code = c as u32;
    code < 128 && ALLOWED_MASK & (1u128 << code) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits_are_allowed() {
        for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            assert!(is_allowed(c), "expected {c:?} to be allowed");
        }
    }

    #[test]
    fn test_punctuation_subset_is_allowed() {
        for c in "!@+$%^&*()-_~`:;<>,./?'{}[\\]|".chars() {
            assert!(is_allowed(c), "expected {c:?} to be allowed");
        }
    }

    #[test]
    fn test_structural_and_whitespace_are_not_allowed() {
        for c in ['=', '#', '"', ' ', '\t', '\n', '\r'] {
            assert!(!is_allowed(c), "expected {c:?} to be rejected");
        }
    }

    #[test]
    fn test_non_ascii_is_not_allowed() {
        assert!(!is_allowed('é'));
        assert!(!is_allowed('λ'));
        assert!(!is_allowed('\u{7f}'));
    }

    #[test]
    fn test_registry_size() {
        assert_eq!(ALLOWED_SYMBOLS.len(), 91);
    }

    #[test]
    fn test_mask_agrees_with_table() {
        for code in 0u8..128 {
            let c = char::from(code);
            assert_eq!(is_allowed(c), ALLOWED_SYMBOLS.contains(&c), "mismatch for {c:?}");
        }
    }
}
