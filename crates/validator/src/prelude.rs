//! Prelude module for convenient imports.
//!
//! Provides a single `use sieve_validator::prelude::*;` import that brings
//! in the traits, the checks and the aggregate needed to write a
//! [`Validate`] implementation.

// ============================================================================
// TRAITS & EXECUTOR
// ============================================================================

pub use crate::check::{Check, CheckName};
pub use crate::field::{Measure, Presence};
pub use crate::validate::{FieldChecks, Validate, Validator};

// ============================================================================
// ERRORS
// ============================================================================

pub use crate::error::{ValidationError, ValidationErrors};
pub use crate::pattern::RegistrationError;

// ============================================================================
// CHECKS
// ============================================================================

pub use crate::chars::CharClass;
pub use crate::check::{
    Builtin, Contains, E164, Email, EndsWith, Excludes, Gt, Gte, Len, Lowercase, Lt, Lte, Max,
    Min, Required, StartsWith, Text, Title, Unique, Uppercase, Uuid, required_with_all,
    required_with_any, required_without_all, required_without_any, sibling,
};
pub use crate::pattern::{Pattern, pattern, register_pattern};
