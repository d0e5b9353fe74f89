// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and wheel input as seen by behaviors.
//!
//! Positions arrive in client coordinates and are rewritten into
//! surface-local coordinates by the controller before any behavior runs.

use bitflags::bitflags;
use kurbo::{Point, Rect, Vec2};

/// Pointer button that started or ended a press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button, or a touch contact.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the middle mouse button.
    Auxiliary,
}

bitflags! {
    /// Keyboard modifiers held while an input event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CONTROL = 1 << 1;
        /// Alt / Option key.
        const ALT = 1 << 2;
        /// Meta / Command / Windows key.
        const META = 1 << 3;
    }
}

bitflags! {
    /// Set of axes a behavior acts on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// Horizontal (time) axis.
        const X = 1 << 0;
        /// Vertical (row) axis.
        const Y = 1 << 1;
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::all()
    }
}

impl Axes {
    /// Zeroes the components of `v` on disabled axes.
    #[must_use]
    pub fn mask(self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.contains(Self::X) { v.x } else { 0.0 },
            if self.contains(Self::Y) { v.y } else { 0.0 },
        )
    }

    /// Returns `factor` on enabled axes and `1.0` elsewhere.
    #[must_use]
    pub fn factor(self, factor: f64) -> Vec2 {
        Vec2::new(
            if self.contains(Self::X) { factor } else { 1.0 },
            if self.contains(Self::Y) { factor } else { 1.0 },
        )
    }
}

/// A single pointer or wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// A button was pressed.
    Down {
        /// Pointer position.
        position: Point,
        /// Pressed button.
        button: PointerButton,
        /// Held modifiers.
        modifiers: Modifiers,
    },
    /// The pointer moved.
    Move {
        /// Pointer position.
        position: Point,
        /// Held modifiers.
        modifiers: Modifiers,
    },
    /// A button was released.
    Up {
        /// Pointer position.
        position: Point,
        /// Released button.
        button: PointerButton,
        /// Held modifiers.
        modifiers: Modifiers,
    },
    /// The pointer left the surface, or the platform cancelled the stream.
    Out,
    /// The wheel or trackpad scrolled.
    Wheel {
        /// Pointer position.
        position: Point,
        /// Scroll delta in pixels. Positive `y` scrolls down.
        delta: Vec2,
        /// Held modifiers.
        modifiers: Modifiers,
    },
}

impl PointerInput {
    /// Returns the pointer position, if the event has one.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Down { position, .. }
            | Self::Move { position, .. }
            | Self::Up { position, .. }
            | Self::Wheel { position, .. } => Some(position),
            Self::Out => None,
        }
    }

    /// Returns the held modifiers; empty for [`PointerInput::Out`].
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        match *self {
            Self::Down { modifiers, .. }
            | Self::Move { modifiers, .. }
            | Self::Up { modifiers, .. }
            | Self::Wheel { modifiers, .. } => modifiers,
            Self::Out => Modifiers::empty(),
        }
    }

    /// Returns `true` if every coordinate carried by the event is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        let position_ok = self.position().is_none_or(|p| p.is_finite());
        let delta_ok = match *self {
            Self::Wheel { delta, .. } => delta.is_finite(),
            _ => true,
        };
        position_ok && delta_ok
    }

    /// Returns a copy with the position rewritten by `f`.
    #[must_use]
    pub fn map_position(self, f: impl FnOnce(Point) -> Point) -> Self {
        match self {
            Self::Down {
                position,
                button,
                modifiers,
            } => Self::Down {
                position: f(position),
                button,
                modifiers,
            },
            Self::Move {
                position,
                modifiers,
            } => Self::Move {
                position: f(position),
                modifiers,
            },
            Self::Up {
                position,
                button,
                modifiers,
            } => Self::Up {
                position: f(position),
                button,
                modifiers,
            },
            Self::Wheel {
                position,
                delta,
                modifiers,
            } => Self::Wheel {
                position: f(position),
                delta,
                modifiers,
            },
            Self::Out => Self::Out,
        }
    }
}

/// The element input is bound to.
///
/// The controller asks the surface for its bounds when binding and uses
/// [`InputSurface::to_local`] to convert every event position.
pub trait InputSurface {
    /// Bounds of the surface in client coordinates.
    fn bounds(&self) -> Rect;

    /// Converts a client-space position into surface-local coordinates.
    fn to_local(&self, client: Point) -> Point {
        client - self.bounds().origin().to_vec2()
    }
}

impl InputSurface for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}
