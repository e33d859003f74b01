// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::MathError;

/// One of the three geometric coordinate axes.
///
/// Returned by the axis-selection queries on [`crate::Vec3`] and usable as an
/// index into vectors and matrix rows. Converts losslessly to the `0/1/2`
/// index convention via [`Axis::index`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Index 0.
    X,
    /// Index 1.
    Y,
    /// Index 2.
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the component index (`X = 0`, `Y = 1`, `Z = 2`).
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> Self {
        axis.index()
    }
}

impl TryFrom<usize> for Axis {
    type Error = MathError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            _ => Err(MathError::AxisOutOfRange { index }),
        }
    }
}
