// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised by checked accessors in the math kernel.
///
/// Numeric degeneracy (zero-length vectors, division by zero) is never
/// reported here; see the `safe_*` methods on [`crate::Vec3`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// An axis or row/column index outside `0..3` was supplied.
    #[error("axis index out of range: {index} (expected 0, 1, or 2)")]
    AxisOutOfRange {
        /// The rejected index.
        index: usize,
    },
}
