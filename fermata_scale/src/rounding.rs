// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a mapped value is snapped onto the step grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round to the nearest step; halfway values round away from zero.
    #[default]
    Nearest,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round toward zero.
    Trunc,
}

impl Rounding {
    /// Rounds `value` to an integer with this policy.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Nearest => libm::round(value),
            Self::Floor => libm::floor(value),
            Self::Ceil => libm::ceil(value),
            Self::Trunc => libm::trunc(value),
        }
    }
}
