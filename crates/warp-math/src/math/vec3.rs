// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use tracing::trace;

use crate::math::scalar::{self, EPSILON, INFINITY};
use crate::math::{minmax, Axis};
use crate::MathError;

/// Double-precision 3D vector used by Echo's physics code.
///
/// * `x`, `y`, `z` are the geometric components; they may represent points or
///   directions depending on the caller.
/// * `w` is a homogeneous/padding slot. Dot products, lengths, and cross
///   products never read it. Constructors, [`Vec3::set_value`], and
///   [`Vec3::set_zero`] reset it to `0`; only [`Vec3::set_w`],
///   [`Vec3::set_max`], and [`Vec3::set_min`] write anything else.
///
/// Every operation comes in two families. Value-returning methods (`add`,
/// `scale`, `normalize`, ...) leave `self` untouched; the `*_mut` methods
/// update `self` in place. Both produce bit-identical components for the same
/// inputs, and both carry `self.w` through unchanged.
///
/// Equality is exact IEEE comparison of all four components. Use
/// [`Vec3::fuzzy_zero`] for tolerance-based checks.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f64; 3],
    w: f64,
}

/// Winner of a [`Vec3::max_dot`] / [`Vec3::min_dot`] scan.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DotHit {
    /// Position of the winning element in the scanned slice.
    pub index: usize,
    /// Dot product of the winning element with the query vector.
    pub dot: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components with `w = 0`.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            data: [x, y, z],
            w: 0.0,
        }
    }

    /// Returns the geometric components as an array. `w` is not included.
    pub fn to_array(self) -> [f64; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f64 {
        self.data[idx]
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f64 {
        self.data[2]
    }

    /// Homogeneous slot.
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Sets the X component.
    pub fn set_x(&mut self, x: f64) {
        self.data[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f64) {
        self.data[1] = y;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, z: f64) {
        self.data[2] = z;
    }

    /// Sets the homogeneous slot.
    pub fn set_w(&mut self, w: f64) {
        self.w = w;
    }

    /// Replaces `x`, `y`, `z` and resets `w` to `0`.
    pub fn set_value(&mut self, x: f64, y: f64, z: f64) {
        self.data = [x, y, z];
        self.w = 0.0;
    }

    /// Resets all four components to `0`.
    pub fn set_zero(&mut self) {
        self.set_value(0.0, 0.0, 0.0);
    }

    /// Returns the component at `index`, or an error for indices outside `0..3`.
    pub fn try_component(&self, index: usize) -> Result<f64, MathError> {
        let axis = Axis::try_from(index)?;
        Ok(self[axis])
    }

    /// Adds two vectors.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: &Self) -> Self {
        let mut out = self;
        out.add_mut(other);
        out
    }

    /// Adds `other` to `self` in place.
    pub fn add_mut(&mut self, other: &Self) -> &mut Self {
        self.data[0] += other.component(0);
        self.data[1] += other.component(1);
        self.data[2] += other.component(2);
        self
    }

    /// Subtracts another vector.
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, other: &Self) -> Self {
        let mut out = self;
        out.sub_mut(other);
        out
    }

    /// Subtracts `other` from `self` in place.
    pub fn sub_mut(&mut self, other: &Self) -> &mut Self {
        self.data[0] -= other.component(0);
        self.data[1] -= other.component(1);
        self.data[2] -= other.component(2);
        self
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, s: f64) -> Self {
        let mut out = *self;
        out.scale_mut(s);
        out
    }

    /// Scales `self` in place.
    pub fn scale_mut(&mut self, s: f64) -> &mut Self {
        self.data[0] *= s;
        self.data[1] *= s;
        self.data[2] *= s;
        self
    }

    /// Divides every geometric component by `s`.
    ///
    /// Division by zero yields `±∞`/NaN components; no check is made.
    pub fn inverse_scale(&self, s: f64) -> Self {
        let mut out = *self;
        out.inverse_scale_mut(s);
        out
    }

    /// In-place form of [`Vec3::inverse_scale`].
    pub fn inverse_scale_mut(&mut self, s: f64) -> &mut Self {
        self.data[0] /= s;
        self.data[1] /= s;
        self.data[2] /= s;
        self
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        scalar::sqrt(self.length_squared())
    }

    /// Length, or `0` when the squared length is not above `EPSILON`.
    ///
    /// Guards against taking the root of a degenerate value produced by
    /// accumulated rounding.
    pub fn safe_norm(&self) -> f64 {
        let d = self.length_squared();
        if d > EPSILON {
            scalar::sqrt(d)
        } else {
            0.0
        }
    }

    /// Squared distance between the points `self` and `other`.
    pub fn distance_squared(&self, other: &Self) -> f64 {
        other.sub(self).length_squared()
    }

    /// Distance between the points `self` and `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        other.sub(self).length()
    }

    /// Returns `true` when the squared length is below `EPSILON²`.
    pub fn fuzzy_zero(&self) -> bool {
        self.length_squared() < EPSILON * EPSILON
    }

    /// Returns `true` when `x`, `y`, and `z` are all exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }

    /// Returns the vector scaled to unit length.
    ///
    /// Precondition: `self` is not (near) zero. A zero vector produces NaN
    /// components. Prefer [`Vec3::safe_normalize`] when the input may be
    /// degenerate.
    pub fn normalize(&self) -> Self {
        let mut out = *self;
        out.normalize_mut();
        out
    }

    /// In-place form of [`Vec3::normalize`]; same precondition.
    pub fn normalize_mut(&mut self) -> &mut Self {
        let len = self.length();
        self.inverse_scale_mut(len)
    }

    /// Returns the vector scaled to unit length, or `(1, 0, 0, 0)` when the
    /// squared length is below `EPSILON²`.
    ///
    /// This is the recommended normalization entry point.
    ///
    /// ```
    /// use warp_math::Vec3;
    /// assert_eq!(Vec3::ZERO.safe_normalize(), Vec3::UNIT_X);
    /// let n = Vec3::new(0.0, 3.0, 4.0).safe_normalize();
    /// assert!((n.length() - 1.0).abs() < 1e-12);
    /// ```
    pub fn safe_normalize(&self) -> Self {
        let mut out = *self;
        out.safe_normalize_mut();
        out
    }

    /// In-place form of [`Vec3::safe_normalize`].
    pub fn safe_normalize_mut(&mut self) -> &mut Self {
        let l2 = self.length_squared();
        if l2 >= EPSILON * EPSILON {
            self.inverse_scale_mut(scalar::sqrt(l2))
        } else {
            trace!(length_squared = l2, "degenerate vector normalized to +X");
            self.set_value(1.0, 0.0, 0.0);
            self
        }
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Scalar triple product `self · (a × b)`: the signed volume of the
    /// parallelepiped spanned by the three vectors.
    pub fn triple(&self, a: &Self, b: &Self) -> f64 {
        self.dot(&a.cross(b))
    }

    /// Rotates the vector about `axis` by `angle` radians (Rodrigues).
    ///
    /// `axis` is used as given. It must be unit length for a true rotation; a
    /// non-unit axis shears the result instead.
    pub fn rotate(&self, axis: &Self, angle: f64) -> Self {
        let mut out = *self;
        out.rotate_mut(axis, angle);
        out
    }

    /// In-place form of [`Vec3::rotate`].
    pub fn rotate_mut(&mut self, axis: &Self, angle: f64) -> &mut Self {
        let o = axis.scale(axis.dot(self));
        let x = self.sub(&o);
        let y = axis.cross(self);
        let (sin, cos) = angle.sin_cos();
        let rotated = o.add(&x.scale(cos)).add(&y.scale(sin));
        self.data = rotated.data;
        self
    }

    /// Angle in radians between `self` and `other`.
    ///
    /// Undefined (NaN) when either vector is zero. Rounding overshoot at the
    /// parallel/antiparallel boundary is absorbed by [`scalar::arccos`].
    pub fn angle(&self, other: &Self) -> f64 {
        let s = scalar::sqrt(self.length_squared() * other.length_squared());
        scalar::arccos(self.dot(other) / s)
    }

    /// Elementwise absolute value of `x`, `y`, `z`.
    pub fn absolute(&self) -> Self {
        Self::new(
            self.component(0).abs(),
            self.component(1).abs(),
            self.component(2).abs(),
        )
    }

    /// Axis of the smallest component. Ties go to the later axis.
    pub fn min_axis(&self) -> Axis {
        let [x, y, z] = self.data;
        if x < y {
            if x < z {
                Axis::X
            } else {
                Axis::Z
            }
        } else if y < z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Axis of the largest component. Ties go to the later axis.
    ///
    /// ```
    /// use warp_math::{Axis, Vec3};
    /// assert_eq!(Vec3::new(1.0, 3.0, 2.0).max_axis(), Axis::Y);
    /// assert_eq!(Vec3::new(1.0, 2.0, 2.0).max_axis(), Axis::Z);
    /// ```
    pub fn max_axis(&self) -> Axis {
        let [x, y, z] = self.data;
        if x <= y {
            if y <= z {
                Axis::Z
            } else {
                Axis::Y
            }
        } else if x <= z {
            Axis::Z
        } else {
            Axis::X
        }
    }

    /// [`Vec3::min_axis`] of the absolute components.
    pub fn furthest_axis(&self) -> Axis {
        self.absolute().min_axis()
    }

    /// [`Vec3::max_axis`] of the absolute components.
    pub fn closest_axis(&self) -> Axis {
        self.absolute().max_axis()
    }

    /// Linear interpolation towards `other`; `t` is not clamped.
    ///
    /// Evaluated as `self * (1 - t) + other * t` so that `t = 0` and `t = 1`
    /// reproduce the endpoints exactly. Values outside `[0, 1]` extrapolate.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mut out = *self;
        out.lerp_mut(other, t);
        out
    }

    /// In-place form of [`Vec3::lerp`].
    pub fn lerp_mut(&mut self, other: &Self, t: f64) -> &mut Self {
        let s = 1.0 - t;
        for (c, o) in self.data.iter_mut().zip(other.data) {
            *c = *c * s + o * t;
        }
        self
    }

    /// Raises each of the four components (including `w`) to `other`'s where
    /// `other` is larger.
    pub fn set_max(&mut self, other: &Self) {
        for (c, o) in self.data.iter_mut().zip(other.data) {
            minmax::set_max(c, o);
        }
        minmax::set_max(&mut self.w, other.w);
    }

    /// Lowers each of the four components (including `w`) to `other`'s where
    /// `other` is smaller.
    pub fn set_min(&mut self, other: &Self) {
        for (c, o) in self.data.iter_mut().zip(other.data) {
            minmax::set_min(c, o);
        }
        minmax::set_min(&mut self.w, other.w);
    }

    /// Element of `candidates` with the largest dot product against `self`.
    ///
    /// Scans the whole slice; the first element wins ties. Returns `None` for
    /// an empty slice (or when no dot product exceeds `-INFINITY`).
    ///
    /// ```
    /// use warp_math::Vec3;
    /// let basis = [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z];
    /// let hit = Vec3::new(0.5, 0.5, 0.5).max_dot(&basis);
    /// assert_eq!(hit.map(|h| (h.index, h.dot)), Some((0, 0.5)));
    /// ```
    pub fn max_dot(&self, candidates: &[Self]) -> Option<DotHit> {
        let mut best: Option<DotHit> = None;
        let mut bound = -INFINITY;
        for (index, candidate) in candidates.iter().enumerate() {
            let dot = candidate.dot(self);
            if dot > bound {
                bound = dot;
                best = Some(DotHit { index, dot });
            }
        }
        if best.is_none() {
            trace!(len = candidates.len(), "max_dot found no candidate");
        }
        best
    }

    /// Element of `candidates` with the smallest dot product against `self`.
    ///
    /// Same scan rules as [`Vec3::max_dot`].
    pub fn min_dot(&self, candidates: &[Self]) -> Option<DotHit> {
        let mut best: Option<DotHit> = None;
        let mut bound = INFINITY;
        for (index, candidate) in candidates.iter().enumerate() {
            let dot = candidate.dot(self);
            if dot < bound {
                bound = dot;
                best = Some(DotHit { index, dot });
            }
        }
        if best.is_none() {
            trace!(len = candidates.len(), "min_dot found no candidate");
        }
        best
    }

    /// Rows of the skew-symmetric matrix `[v]×`, so that `[v]× · u == v × u`.
    pub fn skew_symmetric_rows(&self) -> [Self; 3] {
        let [x, y, z] = self.data;
        [
            Self::new(0.0, -z, y),
            Self::new(z, 0.0, -x),
            Self::new(-y, x, 0.0),
        ]
    }

    /// Writes the rows of [`Vec3::skew_symmetric_rows`] into caller-owned
    /// vectors (each gets `w = 0`).
    pub fn skew_symmetric_into(&self, row0: &mut Self, row1: &mut Self, row2: &mut Self) {
        let [r0, r1, r2] = self.skew_symmetric_rows();
        *row0 = r0;
        *row1 = r1;
        *row2 = r2;
    }
}

/// Converts a 3-element `[f64; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use warp_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// assert_eq!(v.w(), 0.0);
/// ```
impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value, w: 0.0 }
    }
}

impl Index<Axis> for Vec3 {
    type Output = f64;

    fn index(&self, axis: Axis) -> &f64 {
        &self.data[axis.index()]
    }
}

impl IndexMut<Axis> for Vec3 {
    fn index_mut(&mut self, axis: Axis) -> &mut f64 {
        &mut self.data[axis.index()]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3::add(self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3::sub(self, &rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.inverse_scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2])
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.add_mut(&rhs);
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_mut(&rhs);
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_mut(rhs);
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        self.inverse_scale_mut(rhs);
    }
}

/// `a · b`.
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// `a × b`.
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// `v · (a × b)`.
pub fn triple(v: &Vec3, a: &Vec3, b: &Vec3) -> f64 {
    v.triple(a, b)
}

/// Squared distance between two points.
pub fn distance_squared(a: &Vec3, b: &Vec3) -> f64 {
    a.distance_squared(b)
}

/// Distance between two points.
pub fn distance(a: &Vec3, b: &Vec3) -> f64 {
    a.distance(b)
}

/// Angle between two non-zero vectors, in radians.
pub fn angle(a: &Vec3, b: &Vec3) -> f64 {
    a.angle(b)
}

/// Unclamped linear interpolation from `a` towards `b`.
pub fn lerp(a: &Vec3, b: &Vec3, t: f64) -> Vec3 {
    a.lerp(b, t)
}
