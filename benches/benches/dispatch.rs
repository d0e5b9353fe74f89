// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use fermata_behavior::{BehaviorController, Modifiers, PointerButton, PointerInput};
use fermata_roll::{EditMode, Note, PianoRoll, RollConfig, install_behaviors};
use kurbo::{Point, Rect, Size, Vec2};

const SURFACE: Rect = Rect::new(0.0, 0.0, 1280.0, 720.0);

fn editor(mode: EditMode) -> (PianoRoll, BehaviorController<PianoRoll>) {
    let mut roll = PianoRoll::new(Size::new(SURFACE.width(), SURFACE.height()));
    let mut id = 0;
    for row in 0..128 {
        for beat in (0..256).step_by(2) {
            roll.add_note(Note::new(id, f64::from(beat), 1.5, f64::from(row)))
                .unwrap();
            id += 1;
        }
    }
    roll.set_viewport(fermata_view::ViewportState::new(Point::ORIGIN, Vec2::new(16.0, 8.0)));
    roll.render();
    let mut controller = BehaviorController::new();
    install_behaviors(&mut controller, &RollConfig::default().with_mode(mode), &mut roll).unwrap();
    controller.bind(SURFACE, &mut roll).unwrap();
    (roll, controller)
}

fn hover(x: f64, y: f64) -> PointerInput {
    PointerInput::Move {
        position: Point::new(x, y),
        modifiers: Modifiers::empty(),
    }
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/hover");
    for mode in [EditMode::Navigate, EditMode::Edit] {
        let (mut roll, mut controller) = editor(mode);
        let mut x = 0.0;
        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| {
                x = (x + 7.0) % SURFACE.width();
                black_box(controller.dispatch(&hover(x, 300.0), &mut roll))
            });
        });
    }
    group.finish();
}

fn bench_drag_gesture(c: &mut Criterion) {
    c.bench_function("dispatch/drag_gesture", |b| {
        b.iter_batched(
            || editor(EditMode::Edit),
            |(mut roll, mut controller)| {
                let press = PointerInput::Down {
                    position: Point::new(4.0, 4.0),
                    button: PointerButton::Primary,
                    modifiers: Modifiers::empty(),
                };
                controller.dispatch(&press, &mut roll);
                for step in 0..32 {
                    controller.dispatch(&hover(4.0 + f64::from(step) * 3.0, 4.0), &mut roll);
                }
                let release = PointerInput::Up {
                    position: Point::new(100.0, 4.0),
                    button: PointerButton::Primary,
                    modifiers: Modifiers::empty(),
                };
                black_box(controller.dispatch(&release, &mut roll))
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_render(c: &mut Criterion) {
    let (mut roll, _) = editor(EditMode::Edit);
    c.bench_function("roll/render_culled", |b| {
        b.iter(|| black_box(roll.render()));
    });
}

criterion_group!(benches, bench_hover, bench_drag_gesture, bench_render);
criterion_main!(benches);
