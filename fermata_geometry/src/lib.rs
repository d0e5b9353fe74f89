// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fermata Geometry: hit-testing primitives for grid editors.
//!
//! Positions, sizes and rectangles are plain [`kurbo`] types: [`Point`] for
//! positions, [`Vec2`] for sizes and deltas, and [`Rect`] for axis-aligned
//! boxes (build one from a position and size with [`Rect::from_origin_size`]).
//! This crate adds the two predicates every interaction in the editor relies
//! on, plus a per-frame list of drawn rectangles to run them against.
//!
//! - [`contains_point`]: single-point hit test (click, hover).
//! - [`intersects_rect`]: rectangle overlap test (box selection).
//! - [`HitList`]: drawn rectangles in paint order, rebuilt every frame.
//!
//! Both predicates use **half-open** semantics. A point exactly on the far
//! edge of a rect is not inside it, and two rects that only share an edge do
//! not intersect. This keeps adjacent grid cells from both claiming the
//! same pointer position.
//!
//! ## Minimal example
//!
//! ```rust
//! use fermata_geometry::{contains_point, intersects_rect, HitList};
//! use kurbo::{Point, Rect};
//!
//! let cell = Rect::new(0.0, 0.0, 10.0, 10.0);
//! assert!(contains_point(cell, Point::new(0.0, 0.0)));
//! assert!(!contains_point(cell, Point::new(10.0, 5.0)));
//!
//! let neighbor = Rect::new(10.0, 0.0, 20.0, 10.0);
//! assert!(!intersects_rect(cell, neighbor));
//!
//! let mut hits = HitList::new();
//! hits.push(cell, "a");
//! hits.push(Rect::new(5.0, 5.0, 15.0, 15.0), "b");
//! // The most recently drawn rect wins point hits.
//! assert_eq!(hits.hit_point(Point::new(7.0, 7.0)), Some(&"b"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;

pub use hit::{HitEntry, HitList};
pub use kurbo::{Point, Rect, Size, Vec2};

/// Returns `true` if `pt` lies inside `rect`.
///
/// The rect is normalized first, so negative sizes behave like their
/// positive counterparts. The near edges are inclusive and the far edges are
/// exclusive. NaN coordinates, in either the point or the rect, never hit.
#[must_use]
pub fn contains_point(rect: Rect, pt: Point) -> bool {
    if !rect.is_finite() {
        return false;
    }
    let r = rect.abs();
    pt.x >= r.x0 && pt.x < r.x1 && pt.y >= r.y0 && pt.y < r.y1
}

/// Returns `true` if `a` and `b` overlap.
///
/// Rects that only touch along an edge or at a corner do not intersect.
/// A zero-length span overlaps another span the way a point would, so a
/// zero-sized rect agrees with [`contains_point`] and a rect always
/// intersects itself. Non-finite rects never intersect. The test is
/// symmetric.
#[must_use]
pub fn intersects_rect(a: Rect, b: Rect) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let a = a.abs();
    let b = b.abs();
    spans_overlap(a.x0, a.x1, b.x0, b.x1) && spans_overlap(a.y0, a.y1, b.y0, b.y1)
}

/// Multiplies two vectors component by component.
#[must_use]
pub fn mul_components(v: Vec2, s: Vec2) -> Vec2 {
    Vec2::new(v.x * s.x, v.y * s.y)
}

/// Divides `v` by `s` component by component.
#[must_use]
pub fn div_components(v: Vec2, s: Vec2) -> Vec2 {
    Vec2::new(v.x / s.x, v.y / s.y)
}

fn spans_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    match (a0 == a1, b0 == b1) {
        (true, true) => a0 == b0,
        (true, false) => b0 <= a0 && a0 < b1,
        (false, true) => a0 <= b0 && b0 < a1,
        (false, false) => a0 < b1 && b0 < a1,
    }
}
