// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistence of [`ViewportState`] across sessions.
//!
//! Storage is external; this module only defines the shape that gets stored
//! and the rules for reading it back. Stored values carry a schema version.
//! Anything with the wrong version, the wrong shape, or values that would
//! break the viewport invariants is discarded instead of being applied.

use kurbo::{Point, Vec2};

use crate::{ViewportState, ZoomLimits};

/// Current schema version written by the serializers in this crate.
pub const VIEWPORT_SCHEMA_VERSION: u32 = 1;

/// Plain-data form of a [`ViewportState`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersistedViewport {
    /// Schema version the value was written with.
    pub version: u32,
    /// World-space offset as `[x, y]`.
    pub offset: [f64; 2],
    /// Per-axis zoom as `[x, y]`.
    pub zoom: [f64; 2],
}

impl PersistedViewport {
    /// Captures `state` with the current schema version.
    #[must_use]
    pub fn capture(state: &ViewportState) -> Self {
        let offset = state.offset();
        let zoom = state.zoom();
        Self {
            version: VIEWPORT_SCHEMA_VERSION,
            offset: [offset.x, offset.y],
            zoom: [zoom.x, zoom.y],
        }
    }

    /// Rebuilds a state, or returns `None` if the value is unusable.
    ///
    /// Valid zoom values are clamped into `limits`.
    #[must_use]
    pub fn restore(&self, limits: &ZoomLimits) -> Option<ViewportState> {
        if self.version != VIEWPORT_SCHEMA_VERSION {
            return None;
        }
        if !self.offset.iter().all(|v| v.is_finite()) {
            return None;
        }
        if !self.zoom.iter().all(|v| v.is_finite() && *v > 0.0) {
            return None;
        }
        Some(ViewportState::new_clamped(
            Point::new(self.offset[0], self.offset[1]),
            Vec2::new(self.zoom[0], self.zoom[1]),
            limits,
        ))
    }
}

/// Round-trips a [`ViewportState`] through a storable primitive.
pub trait ViewportSerializer {
    /// The stored representation.
    type Primitive;

    /// Converts a state into its stored form.
    fn serialize(&self, state: &ViewportState) -> Self::Primitive;

    /// Reads a stored value back, or `None` if it must be discarded.
    fn deserialize(&self, primitive: &Self::Primitive) -> Option<ViewportState>;
}

/// Serializer whose primitive is [`PersistedViewport`] itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VersionedSerializer {
    /// Limits restored zoom values are clamped into.
    pub limits: ZoomLimits,
}

impl ViewportSerializer for VersionedSerializer {
    type Primitive = PersistedViewport;

    fn serialize(&self, state: &ViewportState) -> PersistedViewport {
        PersistedViewport::capture(state)
    }

    fn deserialize(&self, primitive: &PersistedViewport) -> Option<ViewportState> {
        primitive.restore(&self.limits)
    }
}

/// Serializer whose primitive is a JSON string, for string-only stores.
#[cfg(feature = "json")]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JsonSerializer {
    /// Limits restored zoom values are clamped into.
    pub limits: ZoomLimits,
}

#[cfg(feature = "json")]
impl ViewportSerializer for JsonSerializer {
    type Primitive = alloc::string::String;

    fn serialize(&self, state: &ViewportState) -> alloc::string::String {
        // Numbers and fixed arrays only, so this cannot fail.
        serde_json::to_string(&PersistedViewport::capture(state)).unwrap_or_default()
    }

    fn deserialize(&self, primitive: &alloc::string::String) -> Option<ViewportState> {
        serde_json::from_str::<PersistedViewport>(primitive)
            .ok()?
            .restore(&self.limits)
    }
}
