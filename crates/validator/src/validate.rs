//! The validation executor.
//!
//! A record implements [`Validate::collect`] by walking its fields in
//! declaration order and attaching checks through the [`FieldChecks`] cursor
//! returned by [`ValidationErrors::field`]. That table is the whole binding
//! between fields and checks; nothing is looked up by name at runtime.
//!
//! Two execution strategies share the same `collect`:
//!
//! - **Ordinary**: [`Validate::validate`] fills a fresh aggregate per call.
//! - **Pre-allocated**: [`Validate::validate_into`] refills a caller-owned
//!   buffer, and [`Validator`] owns one across calls. Both clear the buffer
//!   first and keep its capacity.
//!
//! # Examples
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! struct Signup {
//!     login: String,
//!     age: u8,
//! }
//!
//! impl Validate for Signup {
//!     fn collect(&self, errors: &mut ValidationErrors) {
//!         errors
//!             .field("login", &self.login)
//!             .check(Required)
//!             .check(Lowercase);
//!         errors.field("age", &self.age).check(Gte(18_u8)).check(Lte(100_u8));
//!     }
//! }
//!
//! let signup = Signup { login: "LOGIN".into(), age: 17 };
//! let errors = signup.validate().unwrap_err();
//! let names: Vec<_> = errors.iter().map(|e| e.check_name().as_str()).collect();
//! assert_eq!(names, ["lowercase", "gte"]);
//!
//! let mut validator = Validator::new();
//! assert_eq!(validator.validate(&signup), Err(&errors));
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::check::Check;
use crate::error::{ValidationError, ValidationErrors};
use crate::field::Presence;

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// A record with a declared field/check table.
pub trait Validate {
    /// Evaluates every declared check and appends violations to `errors`.
    ///
    /// Must not clear `errors`, so records can be nested.
    fn collect(&self, errors: &mut ValidationErrors);

    /// Ordinary strategy: validates into a fresh aggregate.
    ///
    /// Allocates nothing when the record is valid.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.collect(&mut errors);
        errors.into_result()
    }

    /// Pre-allocated strategy: clears `errors` and refills it.
    ///
    /// `errors` keeps its capacity, so a buffer reused across calls stops
    /// allocating once it has grown to the largest aggregate seen.
    fn validate_into<'e>(
        &self,
        errors: &'e mut ValidationErrors,
    ) -> Result<(), &'e ValidationErrors> {
        errors.clear();
        self.collect(errors);
        let errors: &'e ValidationErrors = errors;
        errors.as_result()
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn collect(&self, errors: &mut ValidationErrors) {
        (**self).collect(errors);
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn collect(&self, errors: &mut ValidationErrors) {
        (**self).collect(errors);
    }
}

// ============================================================================
// FIELD NAMES
// ============================================================================

/// A field name that is only materialized when a violation is recorded.
pub trait FieldName {
    /// Produces the name.
    fn name(&self) -> Cow<'static, str>;
}

impl FieldName for &'static str {
    #[inline]
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(*self)
    }
}

/// A field name built on demand, such as `avatars[32x32]`.
#[derive(Clone, Copy)]
pub struct Lazy<F>(pub F);

impl<F: Fn() -> String> FieldName for Lazy<F> {
    fn name(&self) -> Cow<'static, str> {
        Cow::Owned((self.0)())
    }
}

impl<F> fmt::Debug for Lazy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Lazy(..)")
    }
}

// ============================================================================
// FIELD CURSOR
// ============================================================================

/// Evaluates the checks of one field, in the order they are attached.
///
/// Every check runs regardless of earlier failures on the same field.
/// [`omit_empty`](Self::omit_empty) is positional: checks attached after it
/// are skipped when the value is not present.
///
/// Recording never fails. When the offending value has no JSON form, the
/// violation is recorded without a value, and `unknown` is left untouched.
pub struct FieldChecks<'e, 'v, T: ?Sized, N> {
    errors: &'e mut ValidationErrors,
    name: N,
    value: &'v T,
    skip: bool,
}

impl<T: Serialize + ?Sized, N: FieldName> FieldChecks<'_, '_, T, N> {
    /// Evaluates `check` and records a violation if it fails.
    #[inline]
    pub fn check<C: Check<T>>(mut self, check: C) -> Self {
        if !self.skip && !check.evaluate(self.value) {
            self.record(&check);
        }
        self
    }

    /// Skips the checks attached after this point when the value is empty.
    #[inline]
    pub fn omit_empty(mut self) -> Self
    where
        T: Presence,
    {
        self.skip = self.skip || !self.value.is_present();
        self
    }

    #[cold]
    #[inline(never)]
    fn record<C: Check<T>>(&mut self, check: &C) {
        let check_name = check.name();
        let parameter = if check_name.is_parameterless() {
            None
        } else {
            check.parameter()
        };
        // A value JSON cannot represent, such as a map with non-string keys,
        // is left out. The violation itself still stands.
        let value = if check_name.is_valueless() {
            None
        } else {
            serde_json::to_value(self.value).ok()
        };
        self.errors.push(ValidationError::new(
            check_name,
            parameter,
            self.name.name(),
            value,
        ));
    }
}

impl<T: ?Sized, N: fmt::Debug> fmt::Debug for FieldChecks<'_, '_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldChecks")
            .field("name", &self.name)
            .field("skip", &self.skip)
            .finish_non_exhaustive()
    }
}

impl ValidationErrors {
    /// Starts attaching checks to a field with a static name.
    pub fn field<'e, 'v, T: ?Sized>(
        &'e mut self,
        name: &'static str,
        value: &'v T,
    ) -> FieldChecks<'e, 'v, T, &'static str> {
        FieldChecks {
            errors: self,
            name,
            value,
            skip: false,
        }
    }

    /// Starts attaching checks to a field whose name is built by `name`.
    ///
    /// `name` only runs when a violation is recorded.
    pub fn field_with<'e, 'v, T: ?Sized, F: Fn() -> String>(
        &'e mut self,
        name: F,
        value: &'v T,
    ) -> FieldChecks<'e, 'v, T, Lazy<F>> {
        FieldChecks {
            errors: self,
            name: Lazy(name),
            value,
            skip: false,
        }
    }

    /// Validates a nested record, prefixing the names of its violations and
    /// the faults it reports with `prefix.`.
    ///
    /// `prefix` only runs when the nested record has violations.
    pub fn nest<R, F>(&mut self, prefix: F, record: &R) -> &mut Self
    where
        R: Validate + ?Sized,
        F: FnOnce() -> String,
    {
        let mark = self.mark();
        record.collect(self);
        if self.grew_since(mark) {
            self.nest_since(mark, &prefix());
        }
        self
    }
}

// ============================================================================
// REUSABLE VALIDATOR
// ============================================================================

/// Validates records into a buffer it owns across calls.
///
/// One buffer serves one call at a time; the `&mut self` receiver enforces
/// it. Use one `Validator` per thread to validate concurrently.
#[derive(Debug, Default)]
pub struct Validator {
    buffer: ValidationErrors,
}

impl Validator {
    /// Creates a validator with an empty buffer.
    pub const fn new() -> Self {
        Self {
            buffer: ValidationErrors::new(),
        }
    }

    /// Creates a validator whose buffer fits `capacity` violations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: ValidationErrors::with_capacity(capacity),
        }
    }

    /// Current buffer capacity, in violations.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Validates `record`, reusing the buffer.
    ///
    /// The returned aggregate borrows the buffer and is overwritten by the
    /// next call.
    pub fn validate<R: Validate + ?Sized>(&mut self, record: &R) -> Result<(), &ValidationErrors> {
        let before = self.buffer.capacity();
        self.buffer.clear();
        record.collect(&mut self.buffer);
        let after = self.buffer.capacity();
        if after > before {
            trace!(before, after, "validator buffer grew");
        }
        self.buffer.as_result()
    }
}

// ============================================================================
// TESTS
// ============================================================================
