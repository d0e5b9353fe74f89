// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fermata_behavior::behaviors::{DragEvents, Pan, SelectBox, Tooltip, WheelScroll, WheelZoom};
use fermata_behavior::{BehaviorController, InputSurface, Modifiers, PointerButton};
use fermata_scale::QuantizedScale;
use fermata_view::ZoomLimits;

use crate::{EditMode, PianoRoll, RollError};

/// Registered behavior names.
pub mod names {
    /// [`Pan`](fermata_behavior::behaviors::Pan).
    pub const PAN: &str = "pan";
    /// [`DragEvents`](fermata_behavior::behaviors::DragEvents).
    pub const DRAG: &str = "drag";
    /// [`SelectBox`](fermata_behavior::behaviors::SelectBox).
    pub const SELECT: &str = "select";
    /// [`WheelZoom`](fermata_behavior::behaviors::WheelZoom).
    pub const WHEEL_ZOOM: &str = "wheel-zoom";
    /// [`WheelScroll`](fermata_behavior::behaviors::WheelScroll).
    pub const WHEEL_SCROLL: &str = "wheel-scroll";
    /// [`Tooltip`](fermata_behavior::behaviors::Tooltip).
    pub const TOOLTIP: &str = "tooltip";
}

/// Dispatch priorities used by [`install_behaviors`].
pub mod priorities {
    /// Pan.
    pub const PAN: i32 = 50;
    /// Note drag; above box select so presses on notes drag them.
    pub const DRAG: i32 = 40;
    /// Box select.
    pub const SELECT: i32 = 30;
    /// Wheel zoom; above scroll so it claims the wheel when both match.
    pub const WHEEL_ZOOM: i32 = 20;
    /// Wheel scroll.
    pub const WHEEL_SCROLL: i32 = 10;
    /// Tooltip; last, it never consumes.
    pub const TOOLTIP: i32 = 0;
}

/// Settings for the standard piano-roll behavior set.
#[derive(Clone, Debug, PartialEq)]
pub struct RollConfig {
    /// Zoom bounds for wheel zoom and for the note model.
    pub zoom_limits: ZoomLimits,
    /// Wheel zoom response per wheel pixel.
    pub zoom_sensitivity: f64,
    /// Modifiers that must be held for the wheel to zoom.
    pub zoom_modifiers: Modifiers,
    /// Screen pixels scrolled per wheel pixel.
    pub scroll_speed: f64,
    /// Grid step in beats that dragged notes snap to; `None` drags freely.
    pub beat_snap: Option<f64>,
    /// Whether dragged notes snap to whole rows.
    pub row_snap: bool,
    /// Mode enabled right after installation.
    pub mode: EditMode,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            zoom_limits: ZoomLimits::default(),
            zoom_sensitivity: WheelZoom::DEFAULT_SENSITIVITY,
            zoom_modifiers: Modifiers::empty(),
            scroll_speed: 1.0,
            beat_snap: Some(0.25),
            row_snap: true,
            mode: EditMode::default(),
        }
    }
}

impl RollConfig {
    /// Sets the zoom bounds.
    #[must_use]
    pub fn with_zoom_limits(mut self, limits: ZoomLimits) -> Self {
        self.zoom_limits = limits;
        self
    }

    /// Sets the beat grid dragged notes snap to.
    #[must_use]
    pub fn with_beat_snap(mut self, step: Option<f64>) -> Self {
        self.beat_snap = step;
        self
    }

    /// Sets whether dragged notes snap to whole rows.
    #[must_use]
    pub fn with_row_snap(mut self, row_snap: bool) -> Self {
        self.row_snap = row_snap;
        self
    }

    /// Sets the initial mode.
    #[must_use]
    pub fn with_mode(mut self, mode: EditMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds the snapping scale for one axis: an identity fit in world
    /// units, snapped to multiples of `step`.
    fn snap_scale(axis: &str, step: f64) -> Result<QuantizedScale, RollError> {
        Ok(QuantizedScale::new(axis, 0.0..1.0, "grid", 0.0..1.0)?.with_step(step)?)
    }
}

/// Registers the six standard behaviors on `controller` and enables the
/// configured mode.
///
/// # Errors
///
/// Fails if a name is already registered on `controller` or the beat snap
/// step is not finite and positive. Nothing is registered if the snap step
/// is invalid.
pub fn install_behaviors<S: InputSurface>(
    controller: &mut BehaviorController<PianoRoll, S>,
    config: &RollConfig,
    roll: &mut PianoRoll,
) -> Result<(), RollError> {
    let snap_x = config
        .beat_snap
        .map(|step| RollConfig::snap_scale("beats", step))
        .transpose()?;
    let snap_y = if config.row_snap {
        Some(RollConfig::snap_scale("rows", 1.0)?)
    } else {
        None
    };

    controller.add_behavior(
        names::PAN,
        Pan::new().with_button(PointerButton::Primary),
        priorities::PAN,
        roll,
    )?;
    controller.add_behavior(
        names::DRAG,
        DragEvents::new().with_snap_x(snap_x).with_snap_y(snap_y),
        priorities::DRAG,
        roll,
    )?;
    controller.add_behavior(
        names::SELECT,
        SelectBox::new().with_button(PointerButton::Primary),
        priorities::SELECT,
        roll,
    )?;
    controller.add_behavior(
        names::WHEEL_ZOOM,
        WheelZoom::new()
            .with_sensitivity(config.zoom_sensitivity)
            .with_modifiers(config.zoom_modifiers)
            .with_limits(config.zoom_limits),
        priorities::WHEEL_ZOOM,
        roll,
    )?;
    controller.add_behavior(
        names::WHEEL_SCROLL,
        WheelScroll::new().with_speed(config.scroll_speed),
        priorities::WHEEL_SCROLL,
        roll,
    )?;
    controller.add_behavior(names::TOOLTIP, Tooltip, priorities::TOOLTIP, roll)?;
    roll.set_zoom_limits(config.zoom_limits);
    set_mode(controller, config.mode, roll)
}

/// Switches the enabled behavior group.
///
/// A gesture owned by a behavior that gets disabled is cancelled.
///
/// # Errors
///
/// Fails if the standard behaviors are not installed on `controller`.
pub fn set_mode<S: InputSurface>(
    controller: &mut BehaviorController<PianoRoll, S>,
    mode: EditMode,
    roll: &mut PianoRoll,
) -> Result<(), RollError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(?mode, "switching edit mode");
    controller.update_enabled(mode.enabled_map(), roll)?;
    Ok(())
}
