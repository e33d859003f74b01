// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Vector algebra kernel covering scalar utilities, min/max helpers, the
//! [`Vec3`] value type, and a minimal [`Mat3`] row store.
//!
//! All arithmetic is IEEE-754 `f64`. Nothing here allocates, blocks, or keeps
//! shared state.

pub mod minmax;
pub mod scalar;

mod axis;
mod mat3;
mod vec3;

pub use axis::Axis;
pub use mat3::Mat3;
pub use vec3::{angle, cross, distance, distance_squared, dot, lerp, triple, DotHit, Vec3};
