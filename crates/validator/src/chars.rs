//! Character classes and the string scans built on them.
//!
//! Every predicate works on decoded `char`s, never on bytes, so a multi-byte
//! code point at either end of a string is classified as a whole.
//!
//! # Examples
//!
//! ```
//! use sieve_validator::chars::{self, CharClass};
//!
//! assert!(chars::contains_any("DasPasswort#123", CharClass::Digit));
//! assert!(chars::ends_with("Grüße", CharClass::LowerAlpha));
//! assert!(!chars::starts_with("Ärger", CharClass::UpperAlpha)); // `Ä` is not ASCII
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// CHARACTER SETS
// ============================================================================

/// ASCII lowercase letters.
pub const LOWER_ALPHA: &str = "abcdefghijklmnopqrstuvwxyz";

/// ASCII uppercase letters.
pub const UPPER_ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII letters, lowercase first.
pub const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII decimal digits.
pub const DIGIT: &str = "0123456789";

/// The symbols that count as special characters.
///
/// This is an allow-list: a character outside it (space, `§`, emoji) is not
/// special even though it is not alphanumeric.
pub const SPECIAL_CHARACTERS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

// ============================================================================
// CHARACTER CLASS
// ============================================================================

/// A class of characters that string checks can scan for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    /// [`ALPHA`]
    Alpha,
    /// [`LOWER_ALPHA`]
    LowerAlpha,
    /// [`UPPER_ALPHA`]
    UpperAlpha,
    /// [`DIGIT`]
    Digit,
    /// [`SPECIAL_CHARACTERS`]
    SpecialCharacter,
    /// Unicode `White_Space`.
    Whitespace,
}

impl CharClass {
    /// Every class, in declaration order.
    pub const ALL: [CharClass; 6] = [
        CharClass::Alpha,
        CharClass::LowerAlpha,
        CharClass::UpperAlpha,
        CharClass::Digit,
        CharClass::SpecialCharacter,
        CharClass::Whitespace,
    ];

    /// Returns true if `c` belongs to this class.
    #[inline]
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Alpha => is_alpha(c),
            CharClass::LowerAlpha => is_lower_alpha(c),
            CharClass::UpperAlpha => is_upper_alpha(c),
            CharClass::Digit => is_digit(c),
            CharClass::SpecialCharacter => is_special_character(c),
            CharClass::Whitespace => is_whitespace(c),
        }
    }

    /// The snake_case suffix used in check names (`contains_<class>`).
    pub const fn as_str(self) -> &'static str {
        match self {
            CharClass::Alpha => "alpha",
            CharClass::LowerAlpha => "lower_alpha",
            CharClass::UpperAlpha => "upper_alpha",
            CharClass::Digit => "digit",
            CharClass::SpecialCharacter => "special_character",
            CharClass::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SINGLE CHARACTER PREDICATES
// ============================================================================

/// ASCII letter.
#[inline]
pub const fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII lowercase letter.
#[inline]
pub const fn is_lower_alpha(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// ASCII uppercase letter.
#[inline]
pub const fn is_upper_alpha(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// ASCII decimal digit.
#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Member of [`SPECIAL_CHARACTERS`].
#[inline]
pub const fn is_special_character(c: char) -> bool {
    // ASCII punctuation is exactly the special character set.
    c.is_ascii_punctuation()
}

/// Unicode whitespace.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

// ============================================================================
// STRING SCANS
// ============================================================================

/// Returns true if at least one character of `s` belongs to `class`.
#[inline]
pub fn contains_any(s: &str, class: CharClass) -> bool {
    s.chars().any(|c| class.matches(c))
}

/// Returns true if no character of `s` belongs to `class`.
#[inline]
pub fn excludes(s: &str, class: CharClass) -> bool {
    !contains_any(s, class)
}

/// Returns true if the first character of `s` belongs to `class`.
#[inline]
pub fn starts_with(s: &str, class: CharClass) -> bool {
    s.chars().next().is_some_and(|c| class.matches(c))
}

/// Returns true if the last character of `s` belongs to `class`.
#[inline]
pub fn ends_with(s: &str, class: CharClass) -> bool {
    s.chars().next_back().is_some_and(|c| class.matches(c))
}

/// Returns true if every character of `s` is printable text.
///
/// Letters, marks, numbers, punctuation, symbols and whitespace (newlines and
/// tabs included) are text. Everything else is not: control characters such
/// as NUL, format characters such as U+202E RIGHT-TO-LEFT OVERRIDE, U+200B
/// ZERO WIDTH SPACE or a BOM, private-use and unassigned code points. U+FFFD
/// is rejected too, since it only shows up when malformed bytes were decoded
/// upstream.
pub fn is_text(s: &str) -> bool {
    !s.contains(char::REPLACEMENT_CHARACTER) && TEXT_REGEX.is_match(s)
}

static TEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{M}\p{N}\p{P}\p{S}\s]*$").expect("text pattern compiles")
});

/// Returns true if `s` has the shape of a display title.
///
/// A title is one or more words joined by single spaces. Each word starts
/// with an uppercase letter and continues with letters, apostrophes or
/// hyphens. Leading, trailing or doubled spaces and any other whitespace
/// (newline, tab) disqualify the string.
pub fn is_title(s: &str) -> bool {
    !s.is_empty() && s.split(' ').all(is_title_word)
}

fn is_title_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            chars.all(|c| c.is_alphabetic() || c == '\'' || c == '-')
        }
        _ => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
