//! Custom pattern checks registered at setup.
//!
//! A pattern check is a regular expression stored under a new check name.
//! It is compiled once, at registration, and reported like a built-in check
//! (parameterless, value included).
//!
//! Register every pattern before validation starts. There is no
//! unregistration.
//!
//! # Examples
//!
//! ```
//! use sieve_validator::check::Check;
//! use sieve_validator::pattern::PatternRegistry;
//!
//! let registry = PatternRegistry::new();
//! let hex = registry.register("hex_token", "^[0-9a-f]{8}$").unwrap();
//! assert!(hex.evaluate("deadbeef"));
//! assert!(registry.register("hex_token", ".*").is_err());
//! ```

use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use regex::Regex;
use tracing::{info, warn};

use crate::check::{Builtin, Check, CheckName};

// ============================================================================
// ERRORS
// ============================================================================

/// Why a pattern could not be registered.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// The name is not lowercase snake_case.
    #[error("invalid check name `{name}`: expected lowercase snake_case")]
    InvalidName {
        /// Rejected name.
        name: String,
    },

    /// The name belongs to a built-in check.
    #[error("check name `{name}` is reserved by a built-in check")]
    Reserved {
        /// Rejected name.
        name: String,
    },

    /// A pattern is already registered under the name.
    #[error("check name `{name}` is already registered")]
    Duplicate {
        /// Rejected name.
        name: String,
    },

    /// The regular expression does not compile.
    #[error("invalid pattern for `{name}`")]
    InvalidPattern {
        /// Name the pattern was registered under.
        name: String,
        /// Compilation error.
        #[source]
        source: regex::Error,
    },
}

// ============================================================================
// PATTERN
// ============================================================================

/// A registered pattern check. Passes when the regular expression matches
/// the string field; anchor it with `^..$` to require a whole-value match.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: Arc<str>,
    regex: Regex,
}

impl Pattern {
    /// The registered check name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source regular expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl<T: AsRef<str> + ?Sized> Check<T> for Pattern {
    #[inline]
    fn name(&self) -> CheckName {
        CheckName::Custom(Arc::clone(&self.name))
    }

    #[inline]
    fn evaluate(&self, value: &T) -> bool {
        self.regex.is_match(value.as_ref())
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Thread-safe store of pattern checks, keyed by check name.
///
/// Uses `DashMap` so lookups during validation never contend with each other.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    patterns: DashMap<Arc<str>, Pattern>,
}

static GLOBAL: LazyLock<PatternRegistry> = LazyLock::new(PatternRegistry::new);

impl PatternRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            patterns: DashMap::new(),
        }
    }

    /// The process-wide registry behind [`register_pattern`] and [`pattern`].
    pub fn global() -> &'static PatternRegistry {
        &GLOBAL
    }

    /// Compiles `regex` and stores it under `name`.
    pub fn register(&self, name: &str, regex: &str) -> Result<Pattern, RegistrationError> {
        let result = self.try_register(name, regex);
        match &result {
            Ok(_) => info!(check_name = name, pattern = regex, "registered pattern check"),
            Err(err) => warn!(check_name = name, error = %err, "rejected pattern check"),
        }
        result
    }

    fn try_register(&self, name: &str, regex: &str) -> Result<Pattern, RegistrationError> {
        if !is_snake_case(name) {
            return Err(RegistrationError::InvalidName { name: name.to_owned() });
        }
        if Builtin::from_str(name).is_ok() {
            return Err(RegistrationError::Reserved { name: name.to_owned() });
        }
        let regex = Regex::new(regex).map_err(|source| RegistrationError::InvalidPattern {
            name: name.to_owned(),
            source,
        })?;

        match self.patterns.entry(Arc::from(name)) {
            Entry::Occupied(_) => Err(RegistrationError::Duplicate { name: name.to_owned() }),
            Entry::Vacant(entry) => {
                let pattern = Pattern {
                    name: Arc::clone(entry.key()),
                    regex,
                };
                entry.insert(pattern.clone());
                Ok(pattern)
            }
        }
    }

    /// Looks up a registered pattern.
    pub fn get(&self, name: &str) -> Option<Pattern> {
        self.patterns.get(name).map(|entry| entry.value().clone())
    }

    /// Whether a pattern is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Registered check names, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.patterns.iter().map(|e| e.key().to_string()).collect()
    }
}

/// Registers a pattern check in the global registry.
pub fn register_pattern(name: &str, regex: &str) -> Result<Pattern, RegistrationError> {
    PatternRegistry::global().register(name, regex)
}

/// Looks up a pattern check in the global registry.
pub fn pattern(name: &str) -> Option<Pattern> {
    PatternRegistry::global().get(name)
}

fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !name.ends_with('_')
        && !name.contains("__")
}

// ============================================================================
// TESTS
// ============================================================================
