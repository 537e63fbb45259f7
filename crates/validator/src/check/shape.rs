//! Shape checks: address, phone and identifier formats, case, uniqueness.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter;
use std::sync::LazyLock;

use regex::Regex;

use super::{Builtin, Check, CheckName};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

// ============================================================================
// FORMATS
// ============================================================================

crate::check! {
    /// Email address: `local@domain`, each domain label 1 to 63 characters
    /// and never starting or ending with `-`.
    ///
    /// ```
    /// use sieve_validator::check::{Check, Email};
    ///
    /// assert!(Email.evaluate("yav@example.com"));
    /// assert!(!Email.evaluate("yav+123"));
    /// ```
    pub Email: str => Email;
    rule(input) { EMAIL_REGEX.is_match(input) }
}

crate::check! {
    /// E.164 phone number: `+` followed by 7 to 15 digits, the first non-zero.
    ///
    /// Country codes never start with `0`, so `+0123456` is rejected even
    /// though the looser `^\+[1-9]?[0-9]{7,14}$` found in other validators
    /// accepts it.
    pub E164: str => E164;
    rule(input) { is_e164(input) }
}

crate::check! {
    /// Canonical lowercase UUID, `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
    pub Uuid: str => Uuid;
    rule(input) { is_uuid(input) }
}

fn is_e164(input: &str) -> bool {
    let Some(digits) = input.strip_prefix('+') else {
        return false;
    };
    (7..=15).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
        && !digits.starts_with('0')
}

fn is_uuid(input: &str) -> bool {
    const HYPHENS: [usize; 4] = [8, 13, 18, 23];

    input.len() == 36
        && input.bytes().enumerate().all(|(i, b)| {
            if HYPHENS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_digit() || (b'a'..=b'f').contains(&b)
            }
        })
}

// ============================================================================
// CASE
// ============================================================================

crate::check! {
    /// Non-empty and unchanged by Unicode lowercasing.
    pub Lowercase: str => Lowercase;
    rule(input) {
        !input.is_empty() && input.chars().all(|c| c.to_lowercase().eq(iter::once(c)))
    }
}

crate::check! {
    /// Non-empty and unchanged by Unicode uppercasing.
    pub Uppercase: str => Uppercase;
    rule(input) {
        !input.is_empty() && input.chars().all(|c| c.to_uppercase().eq(iter::once(c)))
    }
}

// ============================================================================
// UNIQUE
// ============================================================================

/// Validates that no two elements of a sequence are equal. Empty sequences
/// pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unique;

/// Below this many elements a pairwise scan beats hashing.
const PAIRWISE_LIMIT: usize = 16;

fn all_distinct<T: Eq + Hash>(items: &[T]) -> bool {
    if items.len() <= PAIRWISE_LIMIT {
        return items
            .iter()
            .enumerate()
            .all(|(i, item)| !items[i + 1..].contains(item));
    }
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item))
}

impl<T: Eq + Hash> Check<[T]> for Unique {
    #[inline]
    fn name(&self) -> CheckName {
        CheckName::Builtin(Builtin::Unique)
    }

    fn evaluate(&self, value: &[T]) -> bool {
        all_distinct(value)
    }
}

impl<T: Eq + Hash> Check<Vec<T>> for Unique {
    #[inline]
    fn name(&self) -> CheckName {
        CheckName::Builtin(Builtin::Unique)
    }

    fn evaluate(&self, value: &Vec<T>) -> bool {
        all_distinct(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
