// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar constants and one-line numeric helpers used by the vector kernel.
//!
//! Contract:
//! - Every function is pure and total over `f64`; none of them panic.
//! - Domain overshoot is absorbed where the callers expect it (`arccos`,
//!   `arcsin`) and propagated as IEEE `±∞`/NaN everywhere else.

/// π.
pub const PI: f64 = core::f64::consts::PI;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// π/2.
pub const HALF_PI: f64 = PI * 0.5;

/// Radians per degree.
pub const RADS_PER_DEG: f64 = TWO_PI / 360.0;

/// Degrees per radian.
pub const DEGS_PER_RAD: f64 = 360.0 / TWO_PI;

/// √½, the component value of a unit vector bisecting two axes.
pub const SQRT12: f64 = core::f64::consts::FRAC_1_SQRT_2;

/// Machine epsilon; the threshold for [`fuzzy_zero`] and the `safe_*` vector paths.
pub const EPSILON: f64 = f64::EPSILON;

/// Largest finite `f64`, used as the initial bound of extreme-value scans.
pub const INFINITY: f64 = f64::MAX;

/// `1.0`
pub const ONE: f64 = 1.0;
/// `0.0`
pub const ZERO: f64 = 0.0;
/// `2.0`
pub const TWO: f64 = 2.0;
/// `0.5`
pub const HALF: f64 = 0.5;

/// Square root.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

/// Absolute value.
#[inline]
pub fn fabs(x: f64) -> f64 {
    x.abs()
}

/// Cosine of `x` radians.
#[inline]
pub fn cos(x: f64) -> f64 {
    x.cos()
}

/// Sine of `x` radians.
#[inline]
pub fn sin(x: f64) -> f64 {
    x.sin()
}

/// Tangent of `x` radians.
#[inline]
pub fn tan(x: f64) -> f64 {
    x.tan()
}

/// Arc cosine with the input clamped to `[-1, 1]`.
///
/// Dot products of unit vectors routinely overshoot the domain by a few ULPs;
/// those inputs return the boundary angle instead of NaN.
///
/// ```
/// use warp_math::math::scalar::arccos;
/// assert_eq!(arccos(1.000_000_000_1), 0.0);
/// ```
#[inline]
pub fn arccos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Arc sine with the input clamped to `[-1, 1]`.
#[inline]
pub fn arcsin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// Arc tangent.
#[inline]
pub fn atan(x: f64) -> f64 {
    x.atan()
}

/// Four-quadrant arc tangent of `y / x`.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

/// `e^x`.
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Natural logarithm.
#[inline]
pub fn log(x: f64) -> f64 {
    x.ln()
}

/// `x^y`.
#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// `1 / sqrt(x)`.
#[inline]
pub fn reciprocal_sqrt(x: f64) -> f64 {
    1.0 / x.sqrt()
}

/// `1 / x`. Yields `±∞` for a zero input; that is not treated as an error.
#[inline]
pub fn reciprocal(x: f64) -> f64 {
    1.0 / x
}

/// Cheap four-quadrant arc tangent.
///
/// Rational approximation anchored at π/4 and 3π/4. The absolute error
/// against [`atan2`] peaks at roughly 0.0712 rad; the sign of the result
/// follows `y`. The origin `(0, 0)` yields NaN.
pub fn fast_atan2(y: f64, x: f64) -> f64 {
    const COEFF_1: f64 = PI / 4.0;
    const COEFF_2: f64 = 3.0 * COEFF_1;
    let abs_y = y.abs();
    let angle = if x >= 0.0 {
        let r = (x - abs_y) / (x + abs_y);
        COEFF_1 - COEFF_1 * r
    } else {
        let r = (x + abs_y) / (abs_y - x);
        COEFF_2 - COEFF_1 * r
    };
    if y < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Returns `true` when `|x| < EPSILON`.
#[inline]
pub fn fuzzy_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Returns `true` when `a` lies within `[-eps, eps]`.
#[inline]
pub fn equal_within(a: f64, eps: f64) -> bool {
    (-eps..=eps).contains(&a)
}

/// Returns `true` when `a` is strictly greater than `eps` (or NaN).
#[inline]
pub fn greater_than_eps(a: f64, eps: f64) -> bool {
    a > eps || a.is_nan()
}

/// Returns `1` for negative input and `0` otherwise.
///
/// Integer rather than `bool` so callers can use it directly as an index or
/// multiplier.
#[inline]
pub fn is_negative(x: f64) -> i32 {
    i32::from(x < 0.0)
}

/// Converts degrees to radians.
#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees * RADS_PER_DEG
}

/// Converts radians to degrees.
#[inline]
pub fn degrees(radians: f64) -> f64 {
    radians * DEGS_PER_RAD
}

/// Reduces an angle in radians into `[-π, π]`.
///
/// Applies `% 2π` followed by a single boundary correction, which makes the
/// function idempotent.
pub fn normalize_angle(angle: f64) -> f64 {
    let reduced = angle % TWO_PI;
    if reduced < -PI {
        reduced + TWO_PI
    } else if reduced > PI {
        reduced - TWO_PI
    } else {
        reduced
    }
}
