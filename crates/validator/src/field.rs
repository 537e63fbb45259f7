//! What checks need to know about a field value.
//!
//! - [`Presence`] decides whether a value counts as "set" (non-zero,
//!   non-empty). Presence checks and `omit_empty` are built on it.
//! - [`Measure`] gives the quantity that length and range checks compare:
//!   numbers measure as themselves, strings by code points, collections by
//!   element count.
//!
//! A number's measure keeps the number's own type, so a `u8` field is compared
//! against a `u8` bound and never widened.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;

// ============================================================================
// PRESENCE
// ============================================================================

/// Whether a value is set.
pub trait Presence {
    /// Returns true if the value is non-zero / non-empty.
    fn is_present(&self) -> bool;
}

impl<T: Presence + ?Sized> Presence for &T {
    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl Presence for str {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for bool {
    #[inline]
    fn is_present(&self) -> bool {
        *self
    }
}

impl Presence for char {
    #[inline]
    fn is_present(&self) -> bool {
        *self != '\0'
    }
}

/// `Some` is present whatever it holds; only `None` is missing.
impl<T> Presence for Option<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

macro_rules! presence_by_zero {
    ($zero:literal => $($ty:ty),+) => {
        $(
            impl Presence for $ty {
                #[inline]
                fn is_present(&self) -> bool {
                    *self != $zero
                }
            }
        )+
    };
}

presence_by_zero!(0 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
presence_by_zero!(0.0 => f32, f64);

macro_rules! presence_by_emptiness {
    ($(impl<$($gen:ident),*> for $ty:ty;)+) => {
        $(
            impl<$($gen),*> Presence for $ty {
                #[inline]
                fn is_present(&self) -> bool {
                    !self.is_empty()
                }
            }
        )+
    };
}

presence_by_emptiness! {
    impl<T> for [T];
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<T, S> for HashSet<T, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T> for BTreeSet<T>;
}

// ============================================================================
// MEASURE
// ============================================================================

/// The quantity length and range checks compare against their bound.
pub trait Measure {
    /// The measured quantity. Also the type of the bound.
    type Output: PartialOrd + Display + Copy;

    /// Measures the value.
    fn measure(&self) -> Self::Output;
}

impl<T: Measure + ?Sized> Measure for &T {
    type Output = T::Output;

    #[inline]
    fn measure(&self) -> Self::Output {
        (**self).measure()
    }
}

impl Measure for str {
    type Output = usize;

    /// Code points, not bytes.
    #[inline]
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl Measure for String {
    type Output = usize;

    #[inline]
    fn measure(&self) -> usize {
        self.as_str().measure()
    }
}

macro_rules! measure_by_value {
    ($($ty:ty),+) => {
        $(
            impl Measure for $ty {
                type Output = $ty;

                #[inline]
                fn measure(&self) -> $ty {
                    *self
                }
            }
        )+
    };
}

measure_by_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

macro_rules! measure_by_len {
    ($(impl<$($gen:ident),*> for $ty:ty;)+) => {
        $(
            impl<$($gen),*> Measure for $ty {
                type Output = usize;

                #[inline]
                fn measure(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

measure_by_len! {
    impl<T> for [T];
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<T, S> for HashSet<T, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T> for BTreeSet<T>;
}

// ============================================================================
// TESTS
// ============================================================================
