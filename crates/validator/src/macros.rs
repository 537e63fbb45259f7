//! Macros for declaring built-in checks with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`check!`]: declare a check type and its [`Check`](crate::check::Check)
//!   implementation, bound to one [`Builtin`](crate::check::Builtin) name.
//!
//! # Examples
//!
//! ```rust,ignore
//! // String shape check (unit struct, any `AsRef<str>` field)
//! check! {
//!     pub Lowercase: str => Lowercase;
//!     rule(input) { input.chars().all(char::is_lowercase) }
//! }
//!
//! // Bound check (tuple struct over the field's `Measure`)
//! check! {
//!     pub Min: measure => Min;
//!     rule(actual, bound) { actual >= bound }
//! }
//! ```

// ============================================================================
// CHECK MACRO
// ============================================================================

/// Declares a check type and implements [`Check`](crate::check::Check) for it.
///
/// # Variants
///
/// **String check** (unit struct; applies to every `AsRef<str>` field,
/// parameterless):
/// ```rust,ignore
/// check! {
///     pub Uuid: str => Uuid;
///     rule(input) { is_uuid(input) }
/// }
/// ```
///
/// **Bound check** (`Name<B>(pub B)`; applies to every [`Measure`](crate::field::Measure)
/// field whose measure type is `B`, parameter is the bound):
/// ```rust,ignore
/// check! {
///     pub Max: measure => Max;
///     rule(actual, bound) { actual <= bound }
/// }
/// ```
#[macro_export]
macro_rules! check {
    // ── Variant 1: String check ──────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident: str => $builtin:ident;
        rule($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl<T: AsRef<str> + ?Sized> $crate::check::Check<T> for $name {
            #[inline]
            fn name(&self) -> $crate::check::CheckName {
                $crate::check::CheckName::Builtin($crate::check::Builtin::$builtin)
            }

            #[inline]
            fn evaluate(&self, value: &T) -> bool {
                let $inp: &str = value.as_ref();
                $rule
            }
        }
    };

    // ── Variant 2: Bound check over a field's measure ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident: measure => $builtin:ident;
        rule($actual:ident, $bound:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name<B>(pub B);

        impl<T> $crate::check::Check<T> for $name<<T as $crate::field::Measure>::Output>
        where
            T: $crate::field::Measure + ?Sized,
        {
            #[inline]
            fn name(&self) -> $crate::check::CheckName {
                $crate::check::CheckName::Builtin($crate::check::Builtin::$builtin)
            }

            fn parameter(&self) -> Option<::std::borrow::Cow<'static, str>> {
                Some(::std::borrow::Cow::Owned(self.0.to_string()))
            }

            #[inline]
            fn evaluate(&self, value: &T) -> bool {
                let $actual = value.measure();
                let $bound = self.0;
                $rule
            }
        }
    };
}
