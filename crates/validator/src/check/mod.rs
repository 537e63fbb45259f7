//! The check vocabulary.
//!
//! Every check has a stable snake_case name ([`CheckName`]) that downstream
//! consumers key off, an optional parameter, and a pure predicate over one
//! field value ([`Check::evaluate`]).
//!
//! # Families
//!
//! - **Presence**: [`Required`], [`RequiredIf`] (`required_with_any`,
//!   `required_with_all`, `required_without_any`, `required_without_all`)
//! - **Length / range**: [`Min`], [`Max`], [`Len`], [`Gt`], [`Gte`], [`Lt`], [`Lte`]
//! - **Shape**: [`Unique`], [`Email`], [`E164`], [`Uuid`], [`Lowercase`], [`Uppercase`]
//! - **Character class**: [`Contains`], [`Excludes`], [`StartsWith`], [`EndsWith`]
//! - **Composite text**: [`Text`], [`Title`]
//! - **Custom**: [`Pattern`](crate::pattern::Pattern), registered at setup
//!
//! # Parameterless and valueless checks
//!
//! Some checks never report their parameter (there is none worth showing) and
//! some never report the offending value (presence checks: the value is
//! empty by definition). The flags live in the [`Builtin`] table and are
//! enforced by [`ValidationError::new`](crate::error::ValidationError::new).

mod class;
mod presence;
mod range;
mod shape;

pub use class::{Contains, EndsWith, Excludes, Scan, StartsWith, Text, Title};
pub use presence::{
    Condition, Required, RequiredIf, Sibling, required_with_all, required_with_any,
    required_without_all, required_without_any, sibling,
};
pub use range::{Gt, Gte, Len, Lt, Lte, Max, Min};
pub use shape::{E164, Email, Lowercase, Unique, Uppercase, Uuid};

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::chars::CharClass;

// ============================================================================
// CHECK TRAIT
// ============================================================================

/// A named predicate over a field value of type `T`.
///
/// Implementations must be pure: the result depends only on `self` and
/// `value`.
pub trait Check<T: ?Sized> {
    /// The stable name reported in violations.
    fn name(&self) -> CheckName;

    /// The configured argument, if the check has one.
    ///
    /// Only called when a violation is recorded.
    fn parameter(&self) -> Option<Cow<'static, str>> {
        None
    }

    /// Returns true if `value` passes.
    fn evaluate(&self, value: &T) -> bool;
}

impl<T: ?Sized, C: Check<T> + ?Sized> Check<T> for &C {
    #[inline]
    fn name(&self) -> CheckName {
        (**self).name()
    }

    fn parameter(&self) -> Option<Cow<'static, str>> {
        (**self).parameter()
    }

    #[inline]
    fn evaluate(&self, value: &T) -> bool {
        (**self).evaluate(value)
    }
}

// ============================================================================
// BUILT-IN TABLE
// ============================================================================

macro_rules! builtins {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $name:literal, parameterless: $parameterless:literal, valueless: $valueless:literal;
    )+) => {
        /// Every built-in check.
        ///
        /// The string form ([`Builtin::as_str`]) is part of the wire contract.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum Builtin {
            $($(#[$meta])* $variant,)+
        }

        impl Builtin {
            /// Every built-in check, in table order.
            pub const ALL: &'static [Builtin] = &[$(Builtin::$variant),+];

            /// The stable check name.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Builtin::$variant => $name,)+
                }
            }

            /// True if violations of this check never carry a parameter.
            pub const fn is_parameterless(self) -> bool {
                match self {
                    $(Builtin::$variant => $parameterless,)+
                }
            }

            /// True if violations of this check never carry the offending value.
            pub const fn is_valueless(self) -> bool {
                match self {
                    $(Builtin::$variant => $valueless,)+
                }
            }
        }

        impl FromStr for Builtin {
            type Err = UnknownCheck;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Builtin::$variant),)+
                    _ => Err(UnknownCheck(s.to_owned())),
                }
            }
        }
    };
}

builtins! {
    // ── Presence ─────────────────────────────────────────────────────────
    /// Value is non-zero / non-empty.
    Required => "required", parameterless: true, valueless: true;
    /// Required when any named sibling is present.
    RequiredWithAny => "required_with_any", parameterless: false, valueless: true;
    /// Required when every named sibling is present.
    RequiredWithAll => "required_with_all", parameterless: false, valueless: true;
    /// Required when any named sibling is absent.
    RequiredWithoutAny => "required_without_any", parameterless: false, valueless: true;
    /// Required when every named sibling is absent.
    RequiredWithoutAll => "required_without_all", parameterless: false, valueless: true;

    // ── Length / range ───────────────────────────────────────────────────
    /// Measure `>=` bound.
    Min => "min", parameterless: false, valueless: false;
    /// Measure `<=` bound.
    Max => "max", parameterless: false, valueless: false;
    /// Measure `==` bound.
    Len => "len", parameterless: false, valueless: false;
    /// Measure `>` bound.
    Gt => "gt", parameterless: false, valueless: false;
    /// Measure `>=` bound.
    Gte => "gte", parameterless: false, valueless: false;
    /// Measure `<` bound.
    Lt => "lt", parameterless: false, valueless: false;
    /// Measure `<=` bound.
    Lte => "lte", parameterless: false, valueless: false;

    // ── Shape ────────────────────────────────────────────────────────────
    /// No two elements are equal.
    Unique => "unique", parameterless: true, valueless: false;
    /// Email address shape.
    Email => "email", parameterless: true, valueless: false;
    /// E.164 phone number.
    E164 => "e164", parameterless: true, valueless: false;
    /// Canonical lowercase UUID.
    Uuid => "uuid", parameterless: true, valueless: false;
    /// Unchanged by lowercasing.
    Lowercase => "lowercase", parameterless: true, valueless: false;
    /// Unchanged by uppercasing.
    Uppercase => "uppercase", parameterless: true, valueless: false;

    // ── Character class ──────────────────────────────────────────────────
    ContainsAlpha => "contains_alpha", parameterless: true, valueless: false;
    ContainsLowerAlpha => "contains_lower_alpha", parameterless: true, valueless: false;
    ContainsUpperAlpha => "contains_upper_alpha", parameterless: true, valueless: false;
    ContainsDigit => "contains_digit", parameterless: true, valueless: false;
    ContainsSpecialCharacter => "contains_special_character", parameterless: true, valueless: false;
    ContainsWhitespace => "contains_whitespace", parameterless: true, valueless: false;

    ExcludesAlpha => "excludes_alpha", parameterless: true, valueless: false;
    ExcludesLowerAlpha => "excludes_lower_alpha", parameterless: true, valueless: false;
    ExcludesUpperAlpha => "excludes_upper_alpha", parameterless: true, valueless: false;
    ExcludesDigit => "excludes_digit", parameterless: true, valueless: false;
    ExcludesSpecialCharacter => "excludes_special_character", parameterless: true, valueless: false;
    ExcludesWhitespace => "excludes_whitespace", parameterless: true, valueless: false;

    StartsWithAlpha => "starts_with_alpha", parameterless: true, valueless: false;
    StartsWithLowerAlpha => "starts_with_lower_alpha", parameterless: true, valueless: false;
    StartsWithUpperAlpha => "starts_with_upper_alpha", parameterless: true, valueless: false;
    StartsWithDigit => "starts_with_digit", parameterless: true, valueless: false;
    StartsWithSpecialCharacter => "starts_with_special_character", parameterless: true, valueless: false;
    StartsWithWhitespace => "starts_with_whitespace", parameterless: true, valueless: false;

    EndsWithAlpha => "ends_with_alpha", parameterless: true, valueless: false;
    EndsWithLowerAlpha => "ends_with_lower_alpha", parameterless: true, valueless: false;
    EndsWithUpperAlpha => "ends_with_upper_alpha", parameterless: true, valueless: false;
    EndsWithDigit => "ends_with_digit", parameterless: true, valueless: false;
    EndsWithSpecialCharacter => "ends_with_special_character", parameterless: true, valueless: false;
    EndsWithWhitespace => "ends_with_whitespace", parameterless: true, valueless: false;

    // ── Composite text ───────────────────────────────────────────────────
    /// Printable text, see [`chars::is_text`](crate::chars::is_text).
    Text => "text", parameterless: true, valueless: false;
    /// Display title, see [`chars::is_title`](crate::chars::is_title).
    Title => "title", parameterless: true, valueless: false;
}

impl Builtin {
    /// The scan and class behind a character-class check, if this is one.
    pub fn class_scan(self) -> Option<(Scan, CharClass)> {
        Scan::ALL.into_iter().find_map(|scan| {
            CharClass::ALL
                .into_iter()
                .find(|class| scan.builtin(*class) == self)
                .map(|class| (scan, class))
        })
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Builtin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returned when parsing a name that is not a built-in check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown check name `{0}`")]
pub struct UnknownCheck(pub String);

// ============================================================================
// CHECK NAME
// ============================================================================

/// The name a violation reports: a built-in check or a registered pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckName {
    /// One of the closed set of built-in checks.
    Builtin(Builtin),
    /// A pattern check registered at setup.
    Custom(Arc<str>),
}

impl CheckName {
    /// The stable string form.
    pub fn as_str(&self) -> &str {
        match self {
            CheckName::Builtin(builtin) => builtin.as_str(),
            CheckName::Custom(name) => name,
        }
    }

    /// True if violations never carry a parameter. Pattern checks have none.
    pub fn is_parameterless(&self) -> bool {
        match self {
            CheckName::Builtin(builtin) => builtin.is_parameterless(),
            CheckName::Custom(_) => true,
        }
    }

    /// True if violations never carry the offending value.
    pub fn is_valueless(&self) -> bool {
        match self {
            CheckName::Builtin(builtin) => builtin.is_valueless(),
            CheckName::Custom(_) => false,
        }
    }

    /// Returns the built-in check, if this is one.
    pub fn builtin(&self) -> Option<Builtin> {
        match self {
            CheckName::Builtin(builtin) => Some(*builtin),
            CheckName::Custom(_) => None,
        }
    }
}

impl From<Builtin> for CheckName {
    fn from(builtin: Builtin) -> Self {
        CheckName::Builtin(builtin)
    }
}

impl PartialEq<str> for CheckName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CheckName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Builtin> for CheckName {
    fn eq(&self, other: &Builtin) -> bool {
        *self == CheckName::Builtin(*other)
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for CheckName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================
