// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::command::{Command, TooltipTarget};
use crate::input::PointerInput;
use crate::{Behavior, EditorHost, Outcome};

/// Reports the object under the pointer on every move. Never consumes input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tooltip;

impl<H: EditorHost> Behavior<H> for Tooltip {
    fn handle(&mut self, input: &PointerInput, host: &mut H) -> Outcome {
        match *input {
            PointerInput::Move { position, .. } => {
                let target = host
                    .hits()
                    .hit_point(position)
                    .cloned()
                    .map(|key| TooltipTarget { key, position });
                host.apply(Command::Tooltip(target));
            }
            PointerInput::Out => host.apply(Command::Tooltip(None)),
            _ => {}
        }
        Outcome::Continue
    }

    fn cancel(&mut self, host: &mut H) {
        host.apply(Command::Tooltip(None));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Point, Rect};

    use super::*;
    use crate::testing::{TestHost, down, moved};

    #[test]
    fn move_reports_topmost_hit() {
        let mut host = TestHost::default()
            .with_object(1, Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_object(2, Rect::new(5.0, 5.0, 15.0, 15.0));
        let mut tooltip = Tooltip;
        assert_eq!(tooltip.handle(&moved(7.0, 7.0), &mut host), Outcome::Continue);
        assert_eq!(tooltip.handle(&moved(50.0, 7.0), &mut host), Outcome::Continue);
        assert_eq!(tooltip.handle(&down(7.0, 7.0), &mut host), Outcome::Continue);
        assert_eq!(
            host.take(),
            vec![
                Command::Tooltip(Some(TooltipTarget {
                    key: 2,
                    position: Point::new(7.0, 7.0),
                })),
                Command::Tooltip(None),
            ]
        );
    }

    #[test]
    fn out_and_detach_hide() {
        let mut host = TestHost::default();
        let mut tooltip = Tooltip;
        tooltip.handle(&PointerInput::Out, &mut host);
        Behavior::<TestHost>::detach(&mut tooltip, &mut host);
        assert_eq!(host.take(), vec![Command::Tooltip(None), Command::Tooltip(None)]);
    }
}
