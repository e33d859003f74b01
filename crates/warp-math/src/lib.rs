// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! warp-math: the numeric substrate for Echo's physics and geometry code.
//!
//! This crate provides:
//! - Scalar helpers and constants ([`math::scalar`]).
//! - Generic min/max/clamp helpers ([`math::minmax`]).
//! - A double-precision 3D vector with a separate homogeneous `w` slot
//!   ([`Vec3`]), exposing both value-returning and in-place operations.
//! - Axis queries ([`Axis`]) and a minimal row-major 3×3 store ([`Mat3`]).
//!
//! Design notes:
//! - Everything is `f64` and allocation-free; all types are `Copy`.
//! - Degenerate input is handled by numeric convention, not by errors. The
//!   fast paths (`normalize`, `angle`, `inverse_scale`) may yield `±∞`/NaN;
//!   the `safe_*` variants substitute defined fallbacks and are the
//!   recommended default.
//! - [`MathError`] only reports structural misuse such as an out-of-range
//!   axis index.
#![forbid(unsafe_code)]

pub mod math;

mod error;

pub use error::MathError;
pub use math::{Axis, DotHit, Mat3, Vec3};
