// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Messages behaviors send to the host.
//!
//! Behaviors never mutate host state directly. Every change is described by
//! a [`Command`] and handed to [`EditorHost::apply`](crate::EditorHost::apply),
//! which is the only place state is reduced.

use alloc::rc::Rc;
use alloc::vec::Vec;

use fermata_view::ViewportState;
use kurbo::{Point, Rect, Vec2};

use crate::input::Modifiers;

/// Where a dragged object was when the drag started.
#[derive(Clone, Debug, PartialEq)]
pub struct DragOrigin<K> {
    /// Object key.
    pub key: K,
    /// World position at the start of the drag.
    pub position: Point,
}

/// Progress of a drag gesture.
///
/// `origins` is the snapshot taken on press and is shared by every update of
/// the same gesture, so a host can always recompute `origin + world_delta`.
#[derive(Clone, Debug, PartialEq)]
pub struct DragUpdate<K> {
    /// Snapshot of the dragged objects.
    pub origins: Rc<[DragOrigin<K>]>,
    /// Quantized world-space delta since the press.
    pub world_delta: Vec2,
    /// Raw screen-space delta since the press.
    pub screen_delta: Vec2,
}

impl<K> DragUpdate<K> {
    /// Iterates over dragged keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.origins.iter().map(|o| &o.key)
    }
}

/// Object currently under the pointer, for tooltips.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipTarget<K> {
    /// Hovered object.
    pub key: K,
    /// Surface-local pointer position.
    pub position: Point,
}

/// A state change requested by a behavior.
#[derive(Clone, Debug, PartialEq)]
pub enum Command<K> {
    /// Replace the viewport.
    SetViewport(ViewportState),
    /// Replace the selection with exactly these keys.
    SetSelection(Vec<K>),
    /// A selection rectangle was committed.
    ///
    /// `keys` are topmost-first. The host decides how `modifiers` combine
    /// them with the existing selection.
    SelectRect {
        /// Keys whose hit rects intersect the box.
        keys: Vec<K>,
        /// Modifiers held on release.
        modifiers: Modifiers,
    },
    /// Dragged objects moved.
    DragMove(DragUpdate<K>),
    /// The drag was released.
    DragEnd(DragUpdate<K>),
    /// The drag was abandoned; objects belong back at their origins.
    DragCancel {
        /// Snapshot taken on press.
        origins: Rc<[DragOrigin<K>]>,
    },
    /// Show or clear the rubber-band rectangle, in surface coordinates.
    SelectionBox(Option<Rect>),
    /// Show or clear the tooltip.
    Tooltip(Option<TooltipTarget<K>>),
}
