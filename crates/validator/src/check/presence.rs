//! Presence checks, including requirements conditioned on sibling fields.
//!
//! # Examples
//!
//! ```rust,ignore
//! use sieve_validator::prelude::*;
//!
//! errors
//!     .field("email", &self.email)
//!     .check(required_without_any([sibling("phone", &self.phone)]))
//!     .omit_empty()
//!     .check(Email);
//! ```

use std::borrow::Cow;

use super::{Builtin, Check, CheckName};
use crate::field::Presence;

// ============================================================================
// REQUIRED
// ============================================================================

/// Validates that a value is present (non-zero, non-empty, `Some`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Required;

impl<T: Presence + ?Sized> Check<T> for Required {
    #[inline]
    fn name(&self) -> CheckName {
        CheckName::Builtin(Builtin::Required)
    }

    #[inline]
    fn evaluate(&self, value: &T) -> bool {
        value.is_present()
    }
}

// ============================================================================
// CONDITIONAL REQUIRED
// ============================================================================

/// A sibling field, reduced to what conditional checks need: its name and
/// whether it is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sibling {
    /// Field name, reported in the check's parameter.
    pub name: &'static str,
    /// Whether the sibling is present.
    pub present: bool,
}

/// Captures a sibling field for a conditional requirement.
#[inline]
pub fn sibling<T: Presence + ?Sized>(name: &'static str, value: &T) -> Sibling {
    Sibling {
        name,
        present: value.is_present(),
    }
}

/// When a [`RequiredIf`] check demands a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Any sibling is present.
    WithAny,
    /// Every sibling is present.
    WithAll,
    /// Any sibling is absent.
    WithoutAny,
    /// Every sibling is absent.
    WithoutAll,
}

impl Condition {
    /// The check reported when the condition holds and the value is absent.
    pub const fn builtin(self) -> Builtin {
        match self {
            Condition::WithAny => Builtin::RequiredWithAny,
            Condition::WithAll => Builtin::RequiredWithAll,
            Condition::WithoutAny => Builtin::RequiredWithoutAny,
            Condition::WithoutAll => Builtin::RequiredWithoutAll,
        }
    }

    /// Evaluates the condition over sibling presence flags.
    ///
    /// With no siblings the `All` forms hold vacuously and the `Any` forms
    /// never do.
    pub fn holds(self, mut present: impl Iterator<Item = bool>) -> bool {
        match self {
            Condition::WithAny => present.any(|p| p),
            Condition::WithAll => present.all(|p| p),
            Condition::WithoutAny => present.any(|p| !p),
            Condition::WithoutAll => present.all(|p| !p),
        }
    }
}

/// Validates that a value is present whenever its [`Condition`] over the
/// sibling fields holds. Valueless; the parameter lists sibling names
/// separated by spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequiredIf<const N: usize> {
    /// Condition over the siblings.
    pub condition: Condition,
    /// Siblings, in declaration order.
    pub siblings: [Sibling; N],
}

impl<const N: usize> RequiredIf<N> {
    /// Creates a conditional requirement.
    pub const fn new(condition: Condition, siblings: [Sibling; N]) -> Self {
        Self {
            condition,
            siblings,
        }
    }

    /// Returns true if the condition demands a value.
    pub fn triggered(&self) -> bool {
        self.condition.holds(self.siblings.iter().map(|s| s.present))
    }
}

impl<T: Presence + ?Sized, const N: usize> Check<T> for RequiredIf<N> {
    #[inline]
    fn name(&self) -> CheckName {
        CheckName::Builtin(self.condition.builtin())
    }

    fn parameter(&self) -> Option<Cow<'static, str>> {
        match self.siblings.as_slice() {
            [] => None,
            [only] => Some(Cow::Borrowed(only.name)),
            siblings => {
                let names: Vec<&str> = siblings.iter().map(|s| s.name).collect();
                Some(Cow::Owned(names.join(" ")))
            }
        }
    }

    #[inline]
    fn evaluate(&self, value: &T) -> bool {
        !self.triggered() || value.is_present()
    }
}

/// Required when any of `siblings` is present.
pub const fn required_with_any<const N: usize>(siblings: [Sibling; N]) -> RequiredIf<N> {
    RequiredIf::new(Condition::WithAny, siblings)
}

/// Required when all of `siblings` are present.
pub const fn required_with_all<const N: usize>(siblings: [Sibling; N]) -> RequiredIf<N> {
    RequiredIf::new(Condition::WithAll, siblings)
}

/// Required when any of `siblings` is absent.
pub const fn required_without_any<const N: usize>(siblings: [Sibling; N]) -> RequiredIf<N> {
    RequiredIf::new(Condition::WithoutAny, siblings)
}

/// Required when all of `siblings` are absent.
pub const fn required_without_all<const N: usize>(siblings: [Sibling; N]) -> RequiredIf<N> {
    RequiredIf::new(Condition::WithoutAll, siblings)
}

// ============================================================================
// TESTS
// ============================================================================
