// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fermata View: per-axis pan/zoom viewport state for grid editors.
//!
//! This crate provides a small, headless model of the transform between a
//! world-space grid (beats on X, rows on Y) and the screen. It focuses on:
//! - Viewport state (pan offset + independent zoom per axis).
//! - Coordinate conversion between world and screen space, in both directions.
//! - Zoom limits, and clamping that keeps zoom finite and positive.
//! - View fitting ("zoom to fit") and visible-region culling.
//! - A versioned persistence shape so a session can restore its view.
//!
//! [`ViewportState`] is an immutable value. Every pan or zoom produces a new
//! state, so consumers can detect changes by comparing values and the state
//! only becomes visible to readers once it is stored.
//!
//! Conversions here are exact. Snapping is a separate stage (see
//! `fermata_scale`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use fermata_view::{ViewportState, ZoomLimits};
//!
//! let view = ViewportState::new(Point::new(10.0, 0.0), Vec2::new(4.0, 2.0));
//! let screen = view.position_to_screen(Point::new(12.0, 3.0));
//! assert_eq!(screen, Point::new(8.0, 6.0));
//! assert_eq!(view.position_from_screen(screen), Point::new(12.0, 3.0));
//!
//! // Zoom in 2x horizontally around the cursor: the world point under the
//! // cursor stays put.
//! let limits = ZoomLimits::default();
//! let zoomed = view.zoomed_about_screen_point(screen, Vec2::new(2.0, 1.0), &limits);
//! let back = zoomed.position_from_screen(screen);
//! assert!((back.x - 12.0).abs() < 1e-9);
//! ```
//!
//! ## Fitting
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use fermata_view::{FitAxes, FitOptions, ViewportState};
//!
//! let world = Rect::new(0.0, 0.0, 16.0, 12.0);
//! let options = FitOptions::default().with_axes(FitAxes::PerAxis);
//! let view = ViewportState::fit(world, Size::new(800.0, 600.0), &options).unwrap();
//! assert_eq!(view.zoom().x, 50.0);
//! assert_eq!(view.zoom().y, 50.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "json")]
extern crate alloc;

mod error;
mod limits;
mod modes;
mod persist;
mod state;

pub use error::ViewError;
pub use limits::ZoomLimits;
pub use modes::{FitAxes, FitMode, FitOptions};
#[cfg(feature = "json")]
pub use persist::JsonSerializer;
pub use persist::{
    PersistedViewport, VIEWPORT_SCHEMA_VERSION, VersionedSerializer, ViewportSerializer,
};
pub use state::ViewportState;
