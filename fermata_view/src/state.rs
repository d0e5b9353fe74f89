// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fermata_geometry::{div_components, mul_components};
use kurbo::{Point, Rect, Size, Vec2};

use crate::modes::{FitAxes, FitMode, FitOptions};
use crate::ZoomLimits;

/// Pan offset plus per-axis zoom.
///
/// - `offset` is the world-space point shown at the screen origin.
/// - `zoom` is screen pixels per world unit, per axis, and is always positive.
///
/// World → screen is `(world - offset) * zoom`, componentwise. The reverse
/// conversions are exact inverses, with no rounding of any kind.
///
/// The state is a value: operations return a new state and never modify the
/// receiver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    offset: Point,
    zoom: Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportState {
    /// World origin at the screen origin, one pixel per world unit.
    pub const IDENTITY: Self = Self {
        offset: Point::ORIGIN,
        zoom: Vec2::new(1.0, 1.0),
    };

    /// Creates a state from an offset and a zoom.
    ///
    /// Non-finite offset components become `0.0`. Zoom components that are
    /// not finite and positive become [`ZoomLimits::DEFAULT_MIN`]. No other
    /// clamping is applied; use [`ViewportState::new_clamped`] for that.
    #[must_use]
    pub fn new(offset: Point, zoom: Vec2) -> Self {
        let finite_or = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        let zoom_or_min = |v: f64| {
            if v.is_finite() && v > 0.0 {
                v
            } else {
                ZoomLimits::DEFAULT_MIN
            }
        };
        Self {
            offset: Point::new(finite_or(offset.x, 0.0), finite_or(offset.y, 0.0)),
            zoom: Vec2::new(zoom_or_min(zoom.x), zoom_or_min(zoom.y)),
        }
    }

    /// Creates a state with the zoom clamped into `limits`.
    #[must_use]
    pub fn new_clamped(offset: Point, zoom: Vec2, limits: &ZoomLimits) -> Self {
        Self::new(offset, limits.clamp(zoom))
    }

    /// Returns the world-space point at the screen origin.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Returns the per-axis zoom (screen pixels per world unit).
    #[must_use]
    pub fn zoom(&self) -> Vec2 {
        self.zoom
    }

    /// Returns a state with a different offset.
    ///
    /// A non-finite offset is ignored and the receiver is returned unchanged.
    #[must_use]
    pub fn with_offset(self, offset: Point) -> Self {
        if !offset.is_finite() {
            return self;
        }
        Self { offset, ..self }
    }

    /// Returns a state with a different zoom, clamped into `limits`.
    ///
    /// The offset is kept, so the world point at the screen origin stays put.
    #[must_use]
    pub fn with_zoom(self, zoom: Vec2, limits: &ZoomLimits) -> Self {
        Self {
            zoom: limits.clamp(zoom),
            ..self
        }
    }

    /// Converts a world-space point to screen space.
    #[must_use]
    pub fn position_to_screen(&self, world: Point) -> Point {
        mul_components(world - self.offset, self.zoom).to_point()
    }

    /// Converts a screen-space point to world space.
    #[must_use]
    pub fn position_from_screen(&self, screen: Point) -> Point {
        self.offset + div_components(screen.to_vec2(), self.zoom)
    }

    /// Converts a world-space size or delta to screen space.
    ///
    /// Sizes are translation-invariant, so the offset plays no part.
    #[must_use]
    pub fn size_to_screen(&self, world: Vec2) -> Vec2 {
        mul_components(world, self.zoom)
    }

    /// Converts a screen-space size or delta to world space.
    #[must_use]
    pub fn size_from_screen(&self, screen: Vec2) -> Vec2 {
        div_components(screen, self.zoom)
    }

    /// Converts a horizontal screen distance to world units.
    #[must_use]
    pub fn size_x_from_screen(&self, dx: f64) -> f64 {
        dx / self.zoom.x
    }

    /// Converts a vertical screen distance to world units.
    #[must_use]
    pub fn size_y_from_screen(&self, dy: f64) -> f64 {
        dy / self.zoom.y
    }

    /// Converts a world-space rectangle to screen space.
    #[must_use]
    pub fn rect_to_screen(&self, world: Rect) -> Rect {
        let world = world.abs();
        let p0 = self.position_to_screen(Point::new(world.x0, world.y0));
        let p1 = self.position_to_screen(Point::new(world.x1, world.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Converts a screen-space rectangle to world space.
    #[must_use]
    pub fn rect_from_screen(&self, screen: Rect) -> Rect {
        let screen = screen.abs();
        let p0 = self.position_from_screen(Point::new(screen.x0, screen.y0));
        let p1 = self.position_from_screen(Point::new(screen.x1, screen.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Pans so that content follows a pointer that moved by `delta` screen pixels.
    #[must_use]
    pub fn panned_by_screen(self, delta: Vec2) -> Self {
        self.with_offset(self.offset - self.size_from_screen(delta))
    }

    /// Moves the visible window by `delta` screen pixels (wheel scrolling).
    ///
    /// This is the opposite direction of [`ViewportState::panned_by_screen`]:
    /// a positive delta reveals content further right or further down.
    #[must_use]
    pub fn scrolled_by_screen(self, delta: Vec2) -> Self {
        self.with_offset(self.offset + self.size_from_screen(delta))
    }

    /// Multiplies the zoom by `factor` around a screen-space anchor.
    ///
    /// The world point under `anchor` stays under `anchor`, up to the effect
    /// of clamping. Non-finite or non-positive factors, or a non-finite
    /// anchor, leave the state unchanged.
    #[must_use]
    pub fn zoomed_about_screen_point(
        self,
        anchor: Point,
        factor: Vec2,
        limits: &ZoomLimits,
    ) -> Self {
        let usable = |f: f64| f.is_finite() && f > 0.0;
        if !usable(factor.x) || !usable(factor.y) || !anchor.is_finite() {
            return self;
        }
        let zoom = limits.clamp(mul_components(self.zoom, factor));
        let world_at_anchor = self.position_from_screen(anchor);
        let offset = world_at_anchor - div_components(anchor.to_vec2(), zoom);
        Self { offset, zoom }
    }

    /// Returns the world-space rectangle visible on a screen of `screen` size.
    #[must_use]
    pub fn visible_world_rect(&self, screen: Size) -> Rect {
        self.rect_from_screen(Rect::from_origin_size(Point::ORIGIN, screen))
    }

    /// Returns world units per screen pixel on each axis.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> Vec2 {
        Vec2::new(1.0 / self.zoom.x, 1.0 / self.zoom.y)
    }

    /// Suggests a “nice” horizontal grid spacing in world units.
    ///
    /// The spacing comes from a 1‑2‑5 ladder and puts lines roughly 64 pixels
    /// apart, with `base` as a lower bound in world units.
    #[must_use]
    pub fn suggest_grid_spacing_x(&self, base: f64) -> f64 {
        nice_spacing(self.world_units_per_pixel().x, base)
    }

    /// Suggests a “nice” vertical grid spacing in world units.
    ///
    /// See [`ViewportState::suggest_grid_spacing_x`].
    #[must_use]
    pub fn suggest_grid_spacing_y(&self, base: f64) -> f64 {
        nice_spacing(self.world_units_per_pixel().y, base)
    }

    /// Computes a state that shows `world` on a screen of `screen` size.
    ///
    /// Returns `None` when either rectangle is empty or not finite. With
    /// [`FitAxes::Uniform`] the smaller of the two axis fits is used on both
    /// axes, so the whole rectangle stays visible. Note that the fitted zoom
    /// is clamped into the option's limits, which may leave part of a large
    /// rectangle off screen.
    #[must_use]
    pub fn fit(world: Rect, screen: Size, options: &FitOptions) -> Option<Self> {
        let world = world.abs();
        if !world.is_finite() || world.width() <= 0.0 || world.height() <= 0.0 {
            return None;
        }
        let finite_positive = |v: f64| v.is_finite() && v > 0.0;
        if !finite_positive(screen.width) || !finite_positive(screen.height) {
            return None;
        }

        let fit = Vec2::new(screen.width / world.width(), screen.height / world.height());
        let zoom = match options.axes {
            FitAxes::Uniform => {
                let z = fit.x.min(fit.y);
                Vec2::new(z, z)
            }
            FitAxes::PerAxis => fit,
        };
        let zoom = options.limits.clamp(zoom);

        // Choose the offset so that either the content is centered or its
        // minimum corner aligns with the screen origin.
        let offset = match options.mode {
            FitMode::Center => {
                let half_screen = Vec2::new(screen.width * 0.5, screen.height * 0.5);
                world.center() - div_components(half_screen, zoom)
            }
            FitMode::AlignMin => world.origin(),
        };
        Some(Self { offset, zoom })
    }
}

fn nice_spacing(wu_per_px: f64, base: f64) -> f64 {
    let base = base.abs().max(f64::MIN_POSITIVE);
    let target_px = 64.0_f64;
    let desired = (wu_per_px.abs() * target_px).max(base);
    if !desired.is_finite() {
        return base;
    }

    let mut unit = 1.0_f64;
    while unit > desired {
        unit /= 10.0;
    }
    while unit * 10.0 <= desired {
        unit *= 10.0;
    }
    for m in [1.0_f64, 2.0, 5.0] {
        let step = m * unit;
        if step >= desired {
            return step;
        }
    }
    unit * 10.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::ViewportState;
    use crate::{FitAxes, FitMode, FitOptions, ZoomLimits};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn world_screen_roundtrip() {
        let states = [
            ViewportState::IDENTITY,
            ViewportState::new(Point::new(-12.5, 40.0), Vec2::new(3.0, 17.0)),
            ViewportState::new(Point::new(1e4, -3.25), Vec2::new(0.125, 96.0)),
        ];
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, -5.0),
            Point::new(-1234.5, 77.7),
        ];
        for s in states {
            for p in points {
                let back = s.position_from_screen(s.position_to_screen(p));
                assert!(close(back, p), "{s:?} {p:?} -> {back:?}");
                let size = p.to_vec2();
                let size_back = s.size_from_screen(s.size_to_screen(size));
                assert!((size_back - size).hypot() < 1e-9);
            }
        }
    }

    #[test]
    fn sizes_ignore_offset() {
        let s = ViewportState::new(Point::new(100.0, 100.0), Vec2::new(2.0, 4.0));
        assert_eq!(s.size_to_screen(Vec2::new(3.0, 1.0)), Vec2::new(6.0, 4.0));
        assert_eq!(s.size_x_from_screen(6.0), 3.0);
        assert_eq!(s.size_y_from_screen(4.0), 1.0);
    }

    #[test]
    fn new_repairs_invalid_components() {
        let s = ViewportState::new(Point::new(f64::NAN, 2.0), Vec2::new(0.0, f64::INFINITY));
        assert_eq!(s.offset(), Point::new(0.0, 2.0));
        assert_eq!(s.zoom(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn rect_conversion_matches_points() {
        let s = ViewportState::new(Point::new(2.0, 1.0), Vec2::new(10.0, 20.0));
        let world = Rect::new(4.0, 5.0, 6.0, 6.0);
        let screen = s.rect_to_screen(world);
        assert_eq!(screen, Rect::new(20.0, 80.0, 40.0, 100.0));
        let back = s.rect_from_screen(screen);
        assert!((back.x0 - world.x0).abs() < 1e-9);
        assert!((back.y1 - world.y1).abs() < 1e-9);
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let s = ViewportState::new(Point::ORIGIN, Vec2::new(2.0, 2.0));
        let world = Point::new(5.0, 5.0);
        let before = s.position_to_screen(world);
        let panned = s.panned_by_screen(Vec2::new(10.0, -4.0));
        let after = panned.position_to_screen(world);
        assert!(close(after, before + Vec2::new(10.0, -4.0)));
        assert_eq!(panned.zoom(), s.zoom());
    }

    #[test]
    fn scroll_reveals_content_in_delta_direction() {
        let s = ViewportState::new(Point::ORIGIN, Vec2::new(4.0, 1.0));
        let scrolled = s.scrolled_by_screen(Vec2::new(8.0, 3.0));
        assert_eq!(scrolled.offset(), Point::new(2.0, 3.0));
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let s = ViewportState::new(Point::new(1.0, 1.0), Vec2::new(1.0, 1.0));
        assert_eq!(s.panned_by_screen(Vec2::new(f64::NAN, 0.0)), s);
        assert_eq!(s.with_offset(Point::new(f64::INFINITY, 0.0)), s);
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let s = ViewportState::new(Point::new(3.0, -2.0), Vec2::new(5.0, 5.0));
        let anchor = Point::new(400.0, 300.0);
        let before = s.position_from_screen(anchor);
        let limits = ZoomLimits::uniform(0.1, 100.0).unwrap();
        let zoomed = s.zoomed_about_screen_point(anchor, Vec2::new(2.0, 0.5), &limits);
        assert_eq!(zoomed.zoom(), Vec2::new(10.0, 2.5));
        assert!(close(zoomed.position_from_screen(anchor), before));
    }

    #[test]
    fn zoom_respects_minimum() {
        let s = ViewportState::new(Point::ORIGIN, Vec2::new(1.5, 1.5));
        let limits = ZoomLimits::default();
        let out = s.zoomed_about_screen_point(Point::new(10.0, 10.0), Vec2::new(0.1, 0.1), &limits);
        assert_eq!(out.zoom(), Vec2::new(1.0, 1.0));
        let bad =
            s.zoomed_about_screen_point(Point::new(10.0, 10.0), Vec2::new(-1.0, 2.0), &limits);
        assert_eq!(bad, s);
    }

    #[test]
    fn fit_uniform_shows_whole_rect() {
        let screen = Size::new(200.0, 100.0);
        let world = Rect::new(-50.0, -25.0, 50.0, 40.0);
        let options = FitOptions::default().with_limits(ZoomLimits::uniform(0.01, 100.0).unwrap());
        let s = ViewportState::fit(world, screen, &options).unwrap();
        assert_eq!(s.zoom().x, s.zoom().y);

        let visible = s.visible_world_rect(screen);
        assert!(visible.x0 <= world.x0 + 1e-9);
        assert!(visible.x1 >= world.x1 - 1e-9);
        assert!(visible.y0 <= world.y0 + 1e-9);
        assert!(visible.y1 >= world.y1 - 1e-9);

        // Centered: the world center maps to the screen center.
        let c = s.position_to_screen(world.center());
        assert!(close(c, Point::new(100.0, 50.0)));
    }

    #[test]
    fn fit_per_axis_fills_screen() {
        let screen = Size::new(800.0, 600.0);
        let world = Rect::new(0.0, 0.0, 16.0, 60.0);
        let options = FitOptions::default().with_axes(FitAxes::PerAxis);
        let s = ViewportState::fit(world, screen, &options).unwrap();
        assert_eq!(s.zoom(), Vec2::new(50.0, 10.0));
        let visible = s.visible_world_rect(screen);
        assert!((visible.x0 - 0.0).abs() < 1e-9 && (visible.x1 - 16.0).abs() < 1e-9);
    }

    #[test]
    fn fit_align_min_puts_min_corner_at_origin() {
        let screen = Size::new(200.0, 100.0);
        let world = Rect::new(-50.0, -20.0, 150.0, 80.0);
        let options = FitOptions::default()
            .with_mode(FitMode::AlignMin)
            .with_limits(ZoomLimits::uniform(0.01, 100.0).unwrap());
        let s = ViewportState::fit(world, screen, &options).unwrap();
        assert!(close(s.position_to_screen(world.origin()), Point::ORIGIN));
    }

    #[test]
    fn fit_rejects_degenerate_input() {
        let options = FitOptions::default();
        let fit = |world, screen| ViewportState::fit(world, screen, &options);
        assert!(fit(Rect::new(0.0, 0.0, 0.0, 5.0), Size::new(10.0, 10.0)).is_none());
        assert!(fit(Rect::new(0.0, 0.0, 5.0, 5.0), Size::new(0.0, 10.0)).is_none());
        assert!(fit(Rect::new(0.0, f64::NAN, 5.0, 5.0), Size::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn grid_spacing_follows_zoom() {
        let base = 1.0 / 64.0;
        let wide = ViewportState::new(Point::ORIGIN, Vec2::new(1.0, 1.0));
        assert_eq!(wide.suggest_grid_spacing_x(base), 100.0);

        let close_up = ViewportState::new(Point::ORIGIN, Vec2::new(100.0, 1.0));
        assert_eq!(close_up.suggest_grid_spacing_x(base), 1.0);
        assert!(close_up.suggest_grid_spacing_x(base) <= wide.suggest_grid_spacing_x(base));

        // The base is a lower bound.
        assert!(close_up.suggest_grid_spacing_x(4.0) >= 4.0);
        assert_eq!(close_up.suggest_grid_spacing_y(base), 100.0);
    }
}
