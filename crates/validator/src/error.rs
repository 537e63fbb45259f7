//! Violation records and the aggregate the executor fills.
//!
//! Strings are `Cow<'static, str>` so the common case of static field names
//! and parameterless checks never allocates. Offending values are kept as
//! [`serde_json::Value`] so the aggregate serializes straight to the wire
//! shape:
//!
//! ```json
//! {
//!   "validation": [
//!     { "check_name": "gte", "parameter": "18", "value_name": "age", "value": 17 }
//!   ],
//!   "unknown": []
//! }
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::check::CheckName;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One rule violation.
///
/// Built only through [`ValidationError::new`], which drops the parameter and
/// the value for checks that never report them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    check_name: CheckName,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<Cow<'static, str>>,
    value_name: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

impl ValidationError {
    /// Creates a violation.
    ///
    /// `parameter` is dropped for parameterless checks and `value` for
    /// valueless ones, whatever the caller passed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_validator::check::Builtin;
    /// use sieve_validator::error::ValidationError;
    ///
    /// let error = ValidationError::new(Builtin::Required, None, "id", Some("".into()));
    /// assert_eq!(error.value(), None);
    /// assert_eq!(error.to_string(), "id: required");
    /// ```
    pub fn new(
        check_name: impl Into<CheckName>,
        parameter: Option<Cow<'static, str>>,
        value_name: impl Into<Cow<'static, str>>,
        value: Option<Value>,
    ) -> Self {
        let check_name = check_name.into();
        let parameter = if check_name.is_parameterless() {
            None
        } else {
            parameter
        };
        let value = if check_name.is_valueless() {
            None
        } else {
            value
        };
        Self {
            check_name,
            parameter,
            value_name: value_name.into(),
            value,
        }
    }

    /// The violated check.
    pub fn check_name(&self) -> &CheckName {
        &self.check_name
    }

    /// The check's configured argument, if it reports one.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// The field name or path, such as `avatars[32x32].width`.
    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    /// The offending value, if the check reports one.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Prepends `prefix.` to the field name.
    pub(crate) fn nest_under(&mut self, prefix: &str) {
        self.value_name = Cow::Owned(format!("{prefix}.{}", self.value_name));
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.value_name, self.check_name)?;
        if let Some(parameter) = &self.parameter {
            write!(f, "={parameter}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The result of validating one record.
///
/// `validation` holds rule violations in field declaration order, then check
/// order within a field. `unknown` holds faults that are not violations. The
/// built-in checks never produce one; it is there for validators that
/// interpret checks at runtime and can fail to. Both empty means the record
/// is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    validation: Vec<ValidationError>,
    unknown: Vec<String>,
}

impl ValidationErrors {
    /// Creates an empty aggregate. Does not allocate.
    pub const fn new() -> Self {
        Self {
            validation: Vec::new(),
            unknown: Vec::new(),
        }
    }

    /// Creates an empty aggregate with room for `capacity` violations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            validation: Vec::with_capacity(capacity),
            unknown: Vec::new(),
        }
    }

    /// Appends a violation.
    pub fn push(&mut self, error: ValidationError) {
        self.validation.push(error);
    }

    /// Appends an execution fault.
    pub fn push_unknown(&mut self, fault: impl Into<String>) {
        self.unknown.push(fault.into());
    }

    /// Returns true if there are neither violations nor faults.
    pub fn is_empty(&self) -> bool {
        self.validation.is_empty() && self.unknown.is_empty()
    }

    /// Number of violations and faults together.
    pub fn len(&self) -> usize {
        self.validation.len() + self.unknown.len()
    }

    /// Rule violations, in recording order.
    pub fn validation(&self) -> &[ValidationError] {
        &self.validation
    }

    /// Execution faults, in recording order.
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    /// Empties the aggregate, keeping its capacity.
    pub fn clear(&mut self) {
        self.validation.clear();
        self.unknown.clear();
    }

    /// How many violations fit without reallocating.
    pub fn capacity(&self) -> usize {
        self.validation.capacity()
    }

    /// `None` when empty, the aggregate otherwise.
    pub fn as_error(&self) -> Option<&Self> {
        if self.is_empty() { None } else { Some(self) }
    }

    /// `Ok(())` when empty, the aggregate otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Borrowing form of [`into_result`](Self::into_result).
    pub fn as_result(&self) -> Result<(), &Self> {
        self.as_error().map_or(Ok(()), Err)
    }

    /// Iterates over the violations.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.validation.iter()
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark {
            validation: self.validation.len(),
            unknown: self.unknown.len(),
        }
    }

    pub(crate) fn grew_since(&self, mark: Mark) -> bool {
        self.validation.len() > mark.validation || self.unknown.len() > mark.unknown
    }

    /// Prefixes everything recorded since `mark` with `prefix.`.
    pub(crate) fn nest_since(&mut self, mark: Mark, prefix: &str) {
        for error in &mut self.validation[mark.validation..] {
            error.nest_under(prefix);
        }
        for fault in &mut self.unknown[mark.unknown..] {
            fault.insert(0, '.');
            fault.insert_str(0, prefix);
        }
    }
}

/// Lengths of both sequences at some point of a validation pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    validation: usize,
    unknown: usize,
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.validation.into_iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            validation: iter.into_iter().collect(),
            unknown: Vec::new(),
        }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.validation.extend(iter);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed with {} error(s)", self.len())?;
        for error in &self.validation {
            write!(f, "\n  {error}")?;
        }
        for fault in &self.unknown {
            write!(f, "\n  unknown: {fault}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
