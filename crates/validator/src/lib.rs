//! # sieve-validator
//!
//! Struct field validation that reports every violation as data and costs
//! close to the sum of its predicates.
//!
//! ## Quick Start
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! struct Account {
//!     login: String,
//!     password: String,
//! }
//!
//! impl Validate for Account {
//!     fn collect(&self, errors: &mut ValidationErrors) {
//!         errors
//!             .field("login", &self.login)
//!             .check(Required)
//!             .check(Min(4_usize))
//!             .check(Lowercase);
//!         errors
//!             .field("password", &self.password)
//!             .check(Required)
//!             .check(Contains(CharClass::Digit))
//!             .check(Excludes(CharClass::Whitespace));
//!     }
//! }
//!
//! let account = Account {
//!     login: "yav".into(),
//!     password: "DasPasswort#".into(),
//! };
//! let errors = account.validate().unwrap_err();
//! assert_eq!(errors.to_string(), "validation failed with 2 error(s)\n  login: min=4\n  password: contains_digit");
//! ```
//!
//! ## Modules
//!
//! - [`chars`]: character classes and string scans
//! - [`check`]: the check vocabulary and the [`Check`](check::Check) trait
//! - [`field`]: [`Presence`](field::Presence) and [`Measure`](field::Measure)
//! - [`error`]: [`ValidationError`](error::ValidationError) and the
//!   [`ValidationErrors`](error::ValidationErrors) aggregate
//! - [`validate`]: the [`Validate`](validate::Validate) trait, the field
//!   cursor and the reusable [`Validator`](validate::Validator)
//! - [`pattern`]: regular-expression checks registered at setup

pub mod chars;
pub mod check;
pub mod error;
pub mod field;
mod macros;
pub mod pattern;
pub mod prelude;
pub mod validate;

pub use error::{ValidationError, ValidationErrors};
pub use pattern::{RegistrationError, register_pattern};
pub use validate::{Validate, Validator};
