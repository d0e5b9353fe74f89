// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::any::Any;
use core::fmt::Debug;

use fermata_geometry::HitList;
use fermata_view::ViewportState;
use kurbo::Point;

use crate::command::Command;
use crate::input::PointerInput;

/// Result of handling one input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// Let lower-priority behaviors see the event.
    #[default]
    Continue,
    /// End propagation without marking the event consumed.
    Stop,
    /// End propagation and mark the event consumed.
    StopAndConsume,
}

/// State the behaviors read, plus the single reducer they write through.
///
/// Hosts own their state, so behaviors can be boxed as `dyn Behavior<H>`.
pub trait EditorHost: 'static {
    /// Identifier of an editable object.
    type Key: Clone + PartialEq + Debug + 'static;

    /// Current viewport.
    fn viewport(&self) -> ViewportState;

    /// Hit rects from the last render, in surface coordinates.
    fn hits(&self) -> &HitList<Self::Key>;

    /// Returns `true` if `key` is selected.
    fn is_selected(&self, key: &Self::Key) -> bool;

    /// Currently selected keys.
    fn selected(&self) -> Vec<Self::Key>;

    /// World position of an object, used as its drag origin.
    fn world_position(&self, key: &Self::Key) -> Option<Point>;

    /// Applies a state change.
    fn apply(&mut self, command: Command<Self::Key>);
}

/// An interaction handler driven by a [`BehaviorController`](crate::BehaviorController).
///
/// Implementations keep their gesture state in an enum and their props in
/// plain fields the caller can update through
/// [`BehaviorController::behavior_mut`](crate::BehaviorController::behavior_mut).
pub trait Behavior<H: EditorHost>: Any {
    /// Handles one event in surface-local coordinates.
    fn handle(&mut self, input: &PointerInput, host: &mut H) -> Outcome;

    /// Called when the behavior starts receiving input.
    fn attach(&mut self, host: &mut H) {
        let _ = host;
    }

    /// Called when the behavior stops receiving input.
    ///
    /// The default cancels any gesture in progress.
    fn detach(&mut self, host: &mut H) {
        self.cancel(host);
    }

    /// Abandons the current gesture and clears transient visuals.
    ///
    /// Must leave the behavior idle and must not commit anything.
    fn cancel(&mut self, host: &mut H) {
        let _ = host;
    }

    /// Returns `true` while a gesture is in progress.
    fn is_active(&self) -> bool {
        false
    }
}
