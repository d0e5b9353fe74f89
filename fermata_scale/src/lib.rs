// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fermata Scale: quantized mapping between a continuous and a stepped axis.
//!
//! A [`QuantizedScale`] pairs two named axes:
//!
//! - a continuous **domain** axis, such as screen pixels or world units, and
//! - a discrete **range** axis, such as scale degrees or quarter notes.
//!
//! Each axis is calibrated by a span, and the two spans define a linear fit.
//! Mapping domain → range applies the fit and then snaps the result to a
//! multiple of the step size with the configured [`Rounding`] policy.
//! Mapping range → domain is exact: the domain is continuous, so nothing is
//! snapped on the way back.
//!
//! Axes are addressed by name. Extra names can be attached with
//! [`QuantizedScale::with_alias`]; an alias is only another spelling of an
//! axis and never changes the result of a mapping.
//!
//! ## Minimal example
//!
//! ```rust
//! use fermata_scale::{QuantizedScale, Rounding};
//!
//! // 0..100 pixels covers 0..10 scale degrees.
//! let scale = QuantizedScale::new("pixels", 0.0..100.0, "scaleDegrees", 0.0..10.0)
//!     .unwrap()
//!     .with_rounding(Rounding::Nearest);
//!
//! // Range → domain is exact.
//! assert_eq!(scale.to("pixels", 3.0).unwrap(), 30.0);
//! // Domain → range snaps to whole degrees.
//! assert_eq!(scale.to("scaleDegrees", 34.0).unwrap(), 3.0);
//! assert_eq!(scale.to("scaleDegrees", scale.to("pixels", 3.0).unwrap()).unwrap(), 3.0);
//! ```
//!
//! ## Deltas
//!
//! Drag gestures produce deltas, not positions. [`QuantizedScale::delta_to_range`]
//! and [`QuantizedScale::delta_to_domain`] only apply the slope, so a delta of
//! zero always maps to zero regardless of where the spans start.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod rounding;
mod scale;

pub use error::ScaleError;
pub use rounding::Rounding;
pub use scale::{AxisSide, QuantizedScale};
