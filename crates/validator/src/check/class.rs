//! Character-class checks and the composite text checks.
//!
//! Each class check pairs a [`Scan`] with a [`CharClass`]; the pair picks one
//! of the 24 `contains_*`, `excludes_*`, `starts_with_*` and `ends_with_*`
//! names.
//!
//! ```
//! use sieve_validator::chars::CharClass;
//! use sieve_validator::check::{Check, Contains, Excludes};
//!
//! assert!(Contains(CharClass::Digit).evaluate("DasPasswort#123"));
//! assert!(!Contains(CharClass::Digit).evaluate("DasPasswort#"));
//! assert!(Excludes(CharClass::Whitespace).evaluate("DasPasswort#123"));
//! ```

use super::{Builtin, Check, CheckName};
use crate::chars::{self, CharClass};

// ============================================================================
// SCAN
// ============================================================================

/// How a class check looks at a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scan {
    /// At least one character is in the class.
    Contains,
    /// No character is in the class.
    Excludes,
    /// The first character is in the class.
    StartsWith,
    /// The last character is in the class.
    EndsWith,
}

impl Scan {
    /// Every scan, in declaration order.
    pub const ALL: [Scan; 4] = [Scan::Contains, Scan::Excludes, Scan::StartsWith, Scan::EndsWith];

    /// Runs the scan over `s`.
    #[inline]
    pub fn test(self, s: &str, class: CharClass) -> bool {
        match self {
            Scan::Contains => chars::contains_any(s, class),
            Scan::Excludes => chars::excludes(s, class),
            Scan::StartsWith => chars::starts_with(s, class),
            Scan::EndsWith => chars::ends_with(s, class),
        }
    }

    /// The built-in check for this scan over `class`.
    pub const fn builtin(self, class: CharClass) -> Builtin {
        use CharClass as C;
        match (self, class) {
            (Scan::Contains, C::Alpha) => Builtin::ContainsAlpha,
            (Scan::Contains, C::LowerAlpha) => Builtin::ContainsLowerAlpha,
            (Scan::Contains, C::UpperAlpha) => Builtin::ContainsUpperAlpha,
            (Scan::Contains, C::Digit) => Builtin::ContainsDigit,
            (Scan::Contains, C::SpecialCharacter) => Builtin::ContainsSpecialCharacter,
            (Scan::Contains, C::Whitespace) => Builtin::ContainsWhitespace,

            (Scan::Excludes, C::Alpha) => Builtin::ExcludesAlpha,
            (Scan::Excludes, C::LowerAlpha) => Builtin::ExcludesLowerAlpha,
            (Scan::Excludes, C::UpperAlpha) => Builtin::ExcludesUpperAlpha,
            (Scan::Excludes, C::Digit) => Builtin::ExcludesDigit,
            (Scan::Excludes, C::SpecialCharacter) => Builtin::ExcludesSpecialCharacter,
            (Scan::Excludes, C::Whitespace) => Builtin::ExcludesWhitespace,

            (Scan::StartsWith, C::Alpha) => Builtin::StartsWithAlpha,
            (Scan::StartsWith, C::LowerAlpha) => Builtin::StartsWithLowerAlpha,
            (Scan::StartsWith, C::UpperAlpha) => Builtin::StartsWithUpperAlpha,
            (Scan::StartsWith, C::Digit) => Builtin::StartsWithDigit,
            (Scan::StartsWith, C::SpecialCharacter) => Builtin::StartsWithSpecialCharacter,
            (Scan::StartsWith, C::Whitespace) => Builtin::StartsWithWhitespace,

            (Scan::EndsWith, C::Alpha) => Builtin::EndsWithAlpha,
            (Scan::EndsWith, C::LowerAlpha) => Builtin::EndsWithLowerAlpha,
            (Scan::EndsWith, C::UpperAlpha) => Builtin::EndsWithUpperAlpha,
            (Scan::EndsWith, C::Digit) => Builtin::EndsWithDigit,
            (Scan::EndsWith, C::SpecialCharacter) => Builtin::EndsWithSpecialCharacter,
            (Scan::EndsWith, C::Whitespace) => Builtin::EndsWithWhitespace,
        }
    }
}

// ============================================================================
// CLASS CHECKS
// ============================================================================

macro_rules! class_check {
    ($(#[$meta:meta])* $name:ident => $scan:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub CharClass);

        impl<T: AsRef<str> + ?Sized> Check<T> for $name {
            #[inline]
            fn name(&self) -> CheckName {
                CheckName::Builtin(Scan::$scan.builtin(self.0))
            }

            #[inline]
            fn evaluate(&self, value: &T) -> bool {
                Scan::$scan.test(value.as_ref(), self.0)
            }
        }
    };
}

class_check! {
    /// At least one character of the class; `contains_<class>`.
    Contains => Contains
}

class_check! {
    /// No character of the class; `excludes_<class>`.
    Excludes => Excludes
}

class_check! {
    /// First character in the class; `starts_with_<class>`. Empty fails.
    StartsWith => StartsWith
}

class_check! {
    /// Last character in the class; `ends_with_<class>`. Empty fails.
    EndsWith => EndsWith
}

// ============================================================================
// COMPOSITE TEXT
// ============================================================================

crate::check! {
    /// Printable text, see [`chars::is_text`].
    pub Text: str => Text;
    rule(input) { chars::is_text(input) }
}

crate::check! {
    /// Display title, see [`chars::is_title`].
    pub Title: str => Title;
    rule(input) { chars::is_title(input) }
}
