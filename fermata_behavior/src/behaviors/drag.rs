// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use fermata_scale::QuantizedScale;
use kurbo::{Point, Vec2};

use crate::command::{Command, DragOrigin, DragUpdate};
use crate::input::{PointerButton, PointerInput};
use crate::{Behavior, EditorHost, Outcome};

#[derive(Clone, Debug)]
enum DragState<K> {
    Idle,
    Dragging {
        start: Point,
        origins: Rc<[DragOrigin<K>]>,
        world_delta: Vec2,
        screen_delta: Vec2,
    },
}

/// Drags hit objects, together with the rest of the selection.
///
/// Pressing on an unselected object selects it alone first. The positions of
/// every dragged object are captured on press, and each update reports the
/// total delta against that snapshot, so rounding never accumulates across
/// frames.
///
/// Snapping is optional per axis. A scale's domain is read as world units,
/// and deltas are quantized onto whole steps of its range.
#[derive(Clone, Debug)]
pub struct DragEvents<K> {
    /// Button that starts a drag.
    pub button: PointerButton,
    /// Horizontal snapping.
    pub snap_x: Option<QuantizedScale>,
    /// Vertical snapping.
    pub snap_y: Option<QuantizedScale>,
    state: DragState<K>,
}

impl<K> Default for DragEvents<K> {
    fn default() -> Self {
        Self {
            button: PointerButton::Primary,
            snap_x: None,
            snap_y: None,
            state: DragState::Idle,
        }
    }
}

impl<K> DragEvents<K> {
    /// Creates a primary-button drag without snapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the button that starts a drag.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Sets horizontal snapping.
    #[must_use]
    pub fn with_snap_x(mut self, scale: Option<QuantizedScale>) -> Self {
        self.snap_x = scale;
        self
    }

    /// Sets vertical snapping.
    #[must_use]
    pub fn with_snap_y(mut self, scale: Option<QuantizedScale>) -> Self {
        self.snap_y = scale;
        self
    }

    fn quantize(&self, raw: Vec2) -> Vec2 {
        let snap = |scale: &Option<QuantizedScale>, v: f64| {
            scale.as_ref().map_or(v, |s| s.quantize_domain_delta(v))
        };
        Vec2::new(snap(&self.snap_x, raw.x), snap(&self.snap_y, raw.y))
    }

    fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}

impl<K: Clone + PartialEq + Debug + 'static> DragEvents<K> {
    fn begin<H: EditorHost<Key = K>>(&mut self, position: Point, host: &mut H) -> Outcome {
        let Some(key) = host.hits().hit_point(position).cloned() else {
            return Outcome::Continue;
        };
        let keys = if host.is_selected(&key) {
            host.selected()
        } else {
            host.apply(Command::SetSelection(vec![key.clone()]));
            vec![key]
        };
        let origins: Rc<[DragOrigin<K>]> = keys
            .into_iter()
            .filter_map(|key| {
                let position = host.world_position(&key)?;
                Some(DragOrigin { key, position })
            })
            .collect::<Vec<_>>()
            .into();
        if origins.is_empty() {
            return Outcome::Continue;
        }
        self.state = DragState::Dragging {
            start: position,
            origins,
            world_delta: Vec2::ZERO,
            screen_delta: Vec2::ZERO,
        };
        Outcome::StopAndConsume
    }

    /// Recomputes the deltas and returns an update if the snapped delta changed.
    fn track<H: EditorHost<Key = K>>(
        &mut self,
        position: Point,
        host: &H,
    ) -> Option<DragUpdate<K>> {
        let DragState::Dragging { start, .. } = &self.state else {
            return None;
        };
        let screen = position - *start;
        let world = self.quantize(host.viewport().size_from_screen(screen));
        let DragState::Dragging {
            origins,
            world_delta,
            screen_delta,
            ..
        } = &mut self.state
        else {
            return None;
        };
        *screen_delta = screen;
        if *world_delta == world {
            return None;
        }
        *world_delta = world;
        Some(DragUpdate {
            origins: origins.clone(),
            world_delta: world,
            screen_delta: screen,
        })
    }
}

impl<H: EditorHost> Behavior<H> for DragEvents<H::Key> {
    fn handle(&mut self, input: &PointerInput, host: &mut H) -> Outcome {
        match *input {
            PointerInput::Down {
                position, button, ..
            } if button == self.button && !self.is_dragging() => self.begin(position, host),
            PointerInput::Move { position, .. } if self.is_dragging() => {
                if let Some(update) = self.track(position, host) {
                    host.apply(Command::DragMove(update));
                }
                Outcome::StopAndConsume
            }
            PointerInput::Up {
                position, button, ..
            } if button == self.button && self.is_dragging() => {
                self.track(position, host);
                if let DragState::Dragging {
                    origins,
                    world_delta,
                    screen_delta,
                    ..
                } = core::mem::replace(&mut self.state, DragState::Idle)
                {
                    host.apply(Command::DragEnd(DragUpdate {
                        origins,
                        world_delta,
                        screen_delta,
                    }));
                }
                Outcome::StopAndConsume
            }
            PointerInput::Out if self.is_dragging() => {
                self.cancel(host);
                Outcome::Continue
            }
            _ => Outcome::Continue,
        }
    }

    fn cancel(&mut self, host: &mut H) {
        if let DragState::Dragging { origins, .. } =
            core::mem::replace(&mut self.state, DragState::Idle)
        {
            host.apply(Command::DragCancel { origins });
        }
    }

    fn is_active(&self) -> bool {
        self.is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use fermata_view::ViewportState;
    use kurbo::Rect;

    use super::*;
    use crate::testing::{TestHost, down, moved, up};

    fn note_host() -> TestHost {
        TestHost::default()
            .with_object(1, Rect::new(4.0, 5.0, 6.0, 6.0))
            .with_object(2, Rect::new(10.0, 0.0, 12.0, 1.0))
    }

    fn update(command: &Command<u32>) -> &DragUpdate<u32> {
        match command {
            Command::DragMove(u) | Command::DragEnd(u) => u,
            other => panic!("expected a drag update, got {other:?}"),
        }
    }

    #[test]
    fn drag_reports_delta_against_snapshot() {
        let mut host = note_host();
        let mut drag = DragEvents::new();
        assert_eq!(drag.handle(&down(4.5, 5.5), &mut host), Outcome::StopAndConsume);
        assert_eq!(host.take(), vec![Command::SetSelection(vec![1])]);

        drag.handle(&moved(5.5, 5.5), &mut host);
        drag.handle(&moved(6.5, 5.5), &mut host);
        drag.handle(&up(6.5, 5.5), &mut host);

        let applied = host.take();
        assert_eq!(applied.len(), 3);
        assert!(matches!(applied[2], Command::DragEnd(_)));
        let end = update(&applied[2]);
        assert_eq!(end.world_delta, Vec2::new(2.0, 0.0));
        assert_eq!(end.origins[0].position, Point::new(4.0, 5.0));
        assert!(Rc::ptr_eq(&update(&applied[0]).origins, &end.origins));
    }

    #[test]
    fn selected_objects_move_together() {
        let mut host = note_host();
        host.selection = vec![1, 2];
        let mut drag = DragEvents::new();
        drag.handle(&down(11.0, 0.5), &mut host);
        drag.handle(&moved(12.0, 0.5), &mut host);
        let applied = host.take();
        assert_eq!(applied.len(), 1);
        let keys: Vec<_> = update(&applied[0]).keys().copied().collect();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn snapped_moves_only_report_changes() {
        let mut host = note_host();
        host.viewport = ViewportState::new(Point::ORIGIN, Vec2::new(10.0, 10.0));
        let quarter = QuantizedScale::new("beats", 0.0..1.0, "ticks", 0.0..4.0).unwrap();
        let mut drag = DragEvents::new().with_snap_x(Some(quarter));

        drag.handle(&down(4.5, 5.5), &mut host);
        host.take();
        // 1px is 0.1 beats, which rounds to zero ticks.
        drag.handle(&moved(5.5, 5.5), &mut host);
        assert!(host.applied.is_empty());
        // 2px is 0.2 beats, one tick.
        drag.handle(&moved(6.5, 5.5), &mut host);
        drag.handle(&moved(6.9, 5.5), &mut host);
        let applied = host.take();
        assert_eq!(applied.len(), 1);
        assert_eq!(update(&applied[0]).world_delta, Vec2::new(0.25, 0.0));
    }

    #[test]
    fn out_and_cancel_restore_origins() {
        let mut host = note_host();
        let mut drag = DragEvents::new();
        drag.handle(&down(4.5, 5.5), &mut host);
        drag.handle(&moved(9.0, 9.0), &mut host);
        host.take();
        assert_eq!(drag.handle(&PointerInput::Out, &mut host), Outcome::Continue);
        let applied = host.take();
        assert!(matches!(&applied[..], [Command::DragCancel { origins }] if origins[0].key == 1));

        drag.handle(&down(4.5, 5.5), &mut host);
        Behavior::<TestHost>::cancel(&mut drag, &mut host);
        assert!(!Behavior::<TestHost>::is_active(&drag));
        assert!(matches!(host.take().last(), Some(Command::DragCancel { .. })));
        // Nothing to cancel when idle.
        Behavior::<TestHost>::cancel(&mut drag, &mut host);
        assert!(host.applied.is_empty());
    }

    #[test]
    fn press_on_empty_space_propagates() {
        let mut host = note_host();
        let mut drag = DragEvents::new();
        assert_eq!(drag.handle(&down(100.0, 100.0), &mut host), Outcome::Continue);
        assert!(host.applied.is_empty());
    }
}
