// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in interaction behaviors.
//!
//! Each behavior keeps its gesture in a private state enum whose variants
//! carry only the fields valid in that state, and exposes its props as
//! public fields with builder-style setters.

mod drag;
mod pan;
mod select_box;
mod tooltip;
mod wheel_scroll;
mod wheel_zoom;

pub use drag::DragEvents;
pub use pan::Pan;
pub use select_box::SelectBox;
pub use tooltip::Tooltip;
pub use wheel_scroll::WheelScroll;
pub use wheel_zoom::WheelZoom;
