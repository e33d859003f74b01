// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Generic min/max/clamp helpers.
//!
//! These use a single strict comparison each, so a NaN operand never
//! replaces an existing value in the in-place forms. [`crate::Vec3::set_max`]
//! and [`crate::Vec3::set_min`] are built on them.

/// Returns `a` if `a < b`, otherwise `b`.
#[inline]
pub fn min<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns `a` if `a > b`, otherwise `b`.
#[inline]
pub fn max<T: PartialOrd + Copy>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns `a` limited to `[lb, ub]`.
///
/// Unlike [`f64::clamp`] this never panics on an inverted range.
#[inline]
pub fn clamped<T: PartialOrd + Copy>(a: T, lb: T, ub: T) -> T {
    if a < lb {
        lb
    } else if ub < a {
        ub
    } else {
        a
    }
}

/// Lowers `a` to `b` when `b < a`.
#[inline]
pub fn set_min<T: PartialOrd + Copy>(a: &mut T, b: T) {
    if b < *a {
        *a = b;
    }
}

/// Raises `a` to `b` when `a < b`.
#[inline]
pub fn set_max<T: PartialOrd + Copy>(a: &mut T, b: T) {
    if *a < b {
        *a = b;
    }
}

/// In-place form of [`clamped`].
#[inline]
pub fn clamp<T: PartialOrd + Copy>(a: &mut T, lb: T, ub: T) {
    *a = clamped(*a, lb, ub);
}
