// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::command::Command;
use crate::input::{Axes, Modifiers, PointerInput};
use crate::{Behavior, EditorHost, Outcome};

/// Wheel scrolling along the enabled axes.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelScroll {
    /// Axes that scroll.
    pub axes: Axes,
    /// Screen pixels scrolled per wheel pixel.
    pub speed: f64,
    /// Modifier that swaps the wheel axes, so a vertical wheel scrolls
    /// horizontally. `None` disables swapping.
    pub swap_modifier: Option<Modifiers>,
}

impl Default for WheelScroll {
    fn default() -> Self {
        Self {
            axes: Axes::all(),
            speed: 1.0,
            swap_modifier: Some(Modifiers::SHIFT),
        }
    }
}

impl WheelScroll {
    /// Creates a wheel scroll with default props.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scrolling axes.
    #[must_use]
    pub fn with_axes(mut self, axes: Axes) -> Self {
        self.axes = axes;
        self
    }

    /// Sets screen pixels scrolled per wheel pixel.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the axis-swap modifier.
    #[must_use]
    pub fn with_swap_modifier(mut self, modifier: Option<Modifiers>) -> Self {
        self.swap_modifier = modifier;
        self
    }
}

impl<H: EditorHost> Behavior<H> for WheelScroll {
    fn handle(&mut self, input: &PointerInput, host: &mut H) -> Outcome {
        let PointerInput::Wheel {
            delta, modifiers, ..
        } = *input
        else {
            return Outcome::Continue;
        };
        let swap = self
            .swap_modifier
            .is_some_and(|m| !m.is_empty() && modifiers.contains(m));
        let delta = if swap {
            Vec2::new(delta.y, delta.x)
        } else {
            delta
        };
        let delta = self.axes.mask(delta * self.speed);
        if delta == Vec2::ZERO || !delta.is_finite() {
            return Outcome::Continue;
        }
        let next = host.viewport().scrolled_by_screen(delta);
        host.apply(Command::SetViewport(next));
        Outcome::StopAndConsume
    }
}
