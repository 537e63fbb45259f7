//! Length and range checks.
//!
//! All of them compare a field's [`Measure`](crate::field::Measure) with a
//! bound of the same type: a string's code-point count against a `usize`, a
//! `u8` age against a `u8`. The bound is the reported parameter.
//!
//! ```
//! use sieve_validator::check::{Check, Gte, Lte, Min};
//!
//! let age: u8 = 17;
//! assert!(!Gte(18_u8).evaluate(&age));
//! assert!(Lte(100_u8).evaluate(&age));
//! assert!(Min(4_usize).evaluate("yav!"));
//! ```

crate::check! {
    /// Inclusive lower bound.
    pub Min: measure => Min;
    rule(actual, bound) { actual >= bound }
}

crate::check! {
    /// Inclusive upper bound.
    pub Max: measure => Max;
    rule(actual, bound) { actual <= bound }
}

crate::check! {
    /// Exact measure.
    pub Len: measure => Len;
    rule(actual, bound) { actual == bound }
}

crate::check! {
    /// Exclusive lower bound.
    pub Gt: measure => Gt;
    rule(actual, bound) { actual > bound }
}

crate::check! {
    /// Inclusive lower bound, for numeric ranges.
    pub Gte: measure => Gte;
    rule(actual, bound) { actual >= bound }
}

crate::check! {
    /// Exclusive upper bound.
    pub Lt: measure => Lt;
    rule(actual, bound) { actual < bound }
}

crate::check! {
    /// Inclusive upper bound, for numeric ranges.
    pub Lte: measure => Lte;
    rule(actual, bound) { actual <= bound }
}
