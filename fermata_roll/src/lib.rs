// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fermata Roll: a headless piano-roll note model wired to the Fermata behaviors.
//!
//! [`PianoRoll`] stores notes, the selection and the viewport, and implements
//! [`EditorHost`](fermata_behavior::EditorHost) so the standard behaviors can
//! drive it. [`install_behaviors`] registers those behaviors under the names in
//! [`names`], and [`EditMode`] switches between navigating and editing.
//!
//! Painting stays outside: call [`PianoRoll::render`] after anything that
//! moves notes or the viewport, so hit tests see the new layout.
//!
//! ## Example
//!
//! ```rust
//! use fermata_behavior::{BehaviorController, Modifiers, PointerButton, PointerInput};
//! use fermata_roll::{install_behaviors, set_mode, EditMode, Note, NoteId, PianoRoll, RollConfig};
//! use kurbo::{Point, Rect, Size};
//!
//! let mut roll = PianoRoll::new(Size::new(800.0, 600.0));
//! roll.add_note(Note::new(1, 4.0, 1.0, 5.0)).unwrap();
//! roll.render();
//!
//! let mut controller = BehaviorController::new();
//! install_behaviors(&mut controller, &RollConfig::default(), &mut roll).unwrap();
//! set_mode(&mut controller, EditMode::Edit, &mut roll).unwrap();
//! controller.bind(Rect::new(0.0, 0.0, 800.0, 600.0), &mut roll).unwrap();
//!
//! let press = |position, down| {
//!     let button = PointerButton::Primary;
//!     let modifiers = Modifiers::empty();
//!     if down {
//!         PointerInput::Down { position, button, modifiers }
//!     } else {
//!         PointerInput::Up { position, button, modifiers }
//!     }
//! };
//! controller.dispatch(&press(Point::new(4.5, 5.5), true), &mut roll);
//! controller.dispatch(&press(Point::new(6.5, 5.5), false), &mut roll);
//! assert_eq!(roll.note(NoteId(1)).unwrap().start, 6.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod mode;
mod note;
mod roll;
mod selection;

pub use config::{RollConfig, install_behaviors, names, priorities, set_mode};
pub use error::RollError;
pub use mode::EditMode;
pub use note::{Note, NoteId};
pub use roll::PianoRoll;
pub use selection::Selection;
