// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::names;

/// Which group of behaviors owns the pointer.
///
/// The wheel-scroll and tooltip behaviors stay enabled in every mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    /// Drag pans, the wheel zooms.
    #[default]
    Navigate,
    /// Drag moves notes, dragging on empty space selects.
    Edit,
}

impl EditMode {
    /// Enabled flag for every installed behavior, in install order.
    #[must_use]
    pub fn enabled_map(self) -> [(&'static str, bool); 6] {
        let navigate = self == Self::Navigate;
        [
            (names::PAN, navigate),
            (names::DRAG, !navigate),
            (names::SELECT, !navigate),
            (names::WHEEL_ZOOM, navigate),
            (names::WHEEL_SCROLL, true),
            (names::TOOLTIP, true),
        ]
    }
}
