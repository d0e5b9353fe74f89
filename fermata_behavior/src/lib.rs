// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fermata Behavior: priority-ordered interaction behaviors over one input surface.
//!
//! ## Overview
//!
//! Several pointer and wheel behaviors (pan, zoom, scroll, drag, box select,
//! tooltip) compete for the same input stream. A [`BehaviorController`]
//! registers them by name with a priority, attaches the enabled ones to a
//! bound [`InputSurface`], and runs each event through them in descending
//! priority. A behavior answers with an [`Outcome`]:
//!
//! - [`Outcome::Continue`]: lower-priority behaviors see the event too.
//! - [`Outcome::Stop`]: propagation ends.
//! - [`Outcome::StopAndConsume`]: propagation ends and the event counts as consumed.
//!
//! ## State flow
//!
//! Behaviors hold gesture state only. Everything they change lives in the
//! host: they read it through [`EditorHost`] and describe every change as a
//! [`Command`] passed to [`EditorHost::apply`]. The host is the only reducer,
//! so viewport and selection are replaced whole and never observed half
//! updated.
//!
//! Grouping behaviors into modes is the caller's business. The controller
//! respects whatever enabled map it is given, and enabling is edge-triggered:
//! disabling a behavior mid-gesture cancels that gesture and clears its
//! transient visuals.
//!
//! ## Minimal example
//!
//! ```rust
//! use fermata_behavior::{BehaviorController, Command, EditorHost, PointerInput, Modifiers};
//! use fermata_behavior::behaviors::WheelScroll;
//! use fermata_geometry::HitList;
//! use fermata_view::ViewportState;
//! use kurbo::{Point, Rect, Vec2};
//!
//! #[derive(Default)]
//! struct Host { view: ViewportState, hits: HitList<u32> }
//!
//! impl EditorHost for Host {
//!     type Key = u32;
//!     fn viewport(&self) -> ViewportState { self.view }
//!     fn hits(&self) -> &HitList<u32> { &self.hits }
//!     fn is_selected(&self, _: &u32) -> bool { false }
//!     fn selected(&self) -> Vec<u32> { Vec::new() }
//!     fn world_position(&self, _: &u32) -> Option<Point> { None }
//!     fn apply(&mut self, command: Command<u32>) {
//!         if let Command::SetViewport(view) = command {
//!             self.view = view;
//!         }
//!     }
//! }
//!
//! let mut host = Host::default();
//! let mut controller = BehaviorController::<Host>::new();
//! controller.add_behavior("scroll", WheelScroll::new(), 0, &mut host).unwrap();
//! controller.bind(Rect::new(0.0, 0.0, 800.0, 600.0), &mut host).unwrap();
//!
//! let wheel = PointerInput::Wheel {
//!     position: Point::new(10.0, 10.0),
//!     delta: Vec2::new(0.0, 30.0),
//!     modifiers: Modifiers::empty(),
//! };
//! assert!(controller.dispatch(&wheel, &mut host));
//! assert_eq!(host.view.offset(), Point::new(0.0, 30.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod behavior;
pub mod behaviors;
mod command;
mod controller;
mod error;
mod input;

#[cfg(test)]
mod testing;

pub use behavior::{Behavior, EditorHost, Outcome};
pub use command::{Command, DragOrigin, DragUpdate, TooltipTarget};
pub use controller::{BehaviorController, BehaviorInfo};
pub use error::BehaviorError;
pub use input::{Axes, InputSurface, Modifiers, PointerButton, PointerInput};
