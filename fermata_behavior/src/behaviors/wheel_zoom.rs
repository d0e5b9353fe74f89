// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fermata_view::ZoomLimits;

use crate::command::Command;
use crate::input::{Axes, Modifiers, PointerInput};
use crate::{Behavior, EditorHost, Outcome};

/// Largest `|delta.y * sensitivity|` one event can apply. `exp` of this
/// stays finite and positive, so huge deltas saturate at the limits.
const MAX_EXPONENT: f64 = 700.0;

/// Wheel zoom anchored at the cursor.
///
/// Each wheel event multiplies the zoom on the enabled axes by
/// `exp(-delta.y * sensitivity)`, so scrolling up zooms in and equal wheel
/// distances give equal zoom ratios. The world point under the cursor stays
/// put.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelZoom {
    /// Axes that zoom.
    pub axes: Axes,
    /// Zoom response per wheel pixel.
    pub sensitivity: f64,
    /// Modifiers that must be held for the wheel to zoom.
    pub modifiers: Modifiers,
    /// Limits the resulting zoom is clamped into.
    pub limits: ZoomLimits,
}

impl Default for WheelZoom {
    fn default() -> Self {
        Self {
            axes: Axes::all(),
            sensitivity: Self::DEFAULT_SENSITIVITY,
            modifiers: Modifiers::empty(),
            limits: ZoomLimits::default(),
        }
    }
}

impl WheelZoom {
    /// Default zoom response per wheel pixel.
    pub const DEFAULT_SENSITIVITY: f64 = 0.002;

    /// Creates a wheel zoom with default props.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zooming axes.
    #[must_use]
    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }

    /// Sets the zoom response per wheel pixel.
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Requires `modifiers` to be held.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the zoom limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl<H: EditorHost> Behavior<H> for WheelZoom {
    fn handle(&mut self, input: &PointerInput, host: &mut H) -> Outcome {
        let PointerInput::Wheel {
            position,
            delta,
            modifiers,
        } = *input
        else {
            return Outcome::Continue;
        };
        if !modifiers.contains(self.modifiers) || self.axes.is_empty() {
            return Outcome::Continue;
        }
        let exponent = (-delta.y * self.sensitivity).clamp(-MAX_EXPONENT, MAX_EXPONENT);
        let factor = libm::exp(exponent);
        let current = host.viewport();
        let next =
            current.zoomed_about_screen_point(position, self.axes.factor(factor), &self.limits);
        if next != current {
            host.apply(Command::SetViewport(next));
        }
        Outcome::StopAndConsume
    }
}

#[cfg(test)]
mod tests {
    use fermata_view::ViewportState;
    use kurbo::{Point, Vec2};

    use super::*;
    use crate::testing::{TestHost, wheel};

    fn host() -> TestHost {
        TestHost {
            viewport: ViewportState::new(Point::new(2.0, 3.0), Vec2::new(10.0, 10.0)),
            ..TestHost::default()
        }
    }

    #[test]
    fn zoom_keeps_cursor_anchor() {
        let mut host = host();
        let mut zoom = WheelZoom::new();
        let anchor = Point::new(40.0, 25.0);
        let before = host.viewport.position_from_screen(anchor);

        let input = wheel(anchor.x, anchor.y, Vec2::new(0.0, -100.0), Modifiers::empty());
        assert_eq!(zoom.handle(&input, &mut host), Outcome::StopAndConsume);

        let expected = 10.0 * libm::exp(0.2);
        assert!((host.viewport.zoom().x - expected).abs() < 1e-9);
        let after = host.viewport.position_from_screen(anchor);
        assert!((after - before).hypot() < 1e-9);
    }

    #[test]
    fn single_axis_zoom() {
        let mut host = host();
        let mut zoom = WheelZoom::new().with_axes(Axes::X);
        zoom.handle(&wheel(0.0, 0.0, Vec2::new(0.0, 50.0), Modifiers::empty()), &mut host);
        assert!(host.viewport.zoom().x < 10.0);
        assert_eq!(host.viewport.zoom().y, 10.0);
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let mut host = host();
        let mut zoom = WheelZoom::new().with_limits(ZoomLimits::uniform(5.0, 20.0).unwrap());
        zoom.handle(&wheel(0.0, 0.0, Vec2::new(0.0, 10_000.0), Modifiers::empty()), &mut host);
        assert_eq!(host.viewport.zoom(), Vec2::new(5.0, 5.0));
        zoom.handle(&wheel(0.0, 0.0, Vec2::new(0.0, -10_000.0), Modifiers::empty()), &mut host);
        assert_eq!(host.viewport.zoom(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn huge_wheel_deltas_saturate_at_limits() {
        let mut host = TestHost {
            viewport: ViewportState::new(Point::ORIGIN, Vec2::new(4.0, 4.0)),
            ..TestHost::default()
        };
        let mut zoom = WheelZoom::new();
        let out = wheel(0.0, 0.0, Vec2::new(0.0, 1e6), Modifiers::empty());
        assert_eq!(zoom.handle(&out, &mut host), Outcome::StopAndConsume);
        assert_eq!(host.viewport.zoom(), Vec2::new(1.0, 1.0));

        let into = wheel(0.0, 0.0, Vec2::new(0.0, -1e300), Modifiers::empty());
        assert_eq!(zoom.handle(&into, &mut host), Outcome::StopAndConsume);
        assert_eq!(host.viewport.zoom(), Vec2::new(1e6, 1e6));
    }

    #[test]
    fn required_modifiers_gate_zoom() {
        let mut host = host();
        let mut zoom = WheelZoom::new().with_modifiers(Modifiers::CONTROL);
        let plain = wheel(0.0, 0.0, Vec2::new(0.0, 10.0), Modifiers::empty());
        assert_eq!(zoom.handle(&plain, &mut host), Outcome::Continue);
        assert!(host.applied.is_empty());
        let held = wheel(0.0, 0.0, Vec2::new(0.0, 10.0), Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(zoom.handle(&held, &mut host), Outcome::StopAndConsume);
        assert_eq!(host.applied.len(), 1);
    }
}
