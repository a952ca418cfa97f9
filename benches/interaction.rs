//! Criterion benchmarks for the pointer-event hot paths
//!
//! Covers: pixel-to-tick resolution, hover storms (pointer movement can
//! arrive at display refresh rate), and the full click/check/next cycle.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numberline::quiz::QuizGenerator;
use numberline::{DomainRange, InteractionStateMachine, Session, TrackMapper};

fn mapper() -> TrackMapper {
    TrackMapper::new(DomainRange::new(-6, 6).unwrap(), 500.0).unwrap()
}

fn bench_unscale(c: &mut Criterion) {
    let m = mapper();
    c.bench_function("unscale_in_track", |b| {
        b.iter(|| m.unscale(black_box(237.4)))
    });
    c.bench_function("unscale_out_of_track", |b| {
        b.iter(|| m.unscale(black_box(-4_000.0)))
    });
}

fn bench_hover_storm(c: &mut Criterion) {
    // Hover only matters while awaiting a direction, which is also where
    // the event rate peaks
    let mut machine = InteractionStateMachine::new(mapper());
    machine.click(250.0);

    let mut px = 0.0;
    c.bench_function("hover_storm", |b| {
        b.iter(|| {
            px = (px + 7.0) % 500.0;
            machine.hover(black_box(px));
        })
    });
}

fn bench_click_cycle(c: &mut Criterion) {
    let mut machine = InteractionStateMachine::new(mapper());
    c.bench_function("click_cycle", |b| {
        b.iter(|| {
            // place, direct, start over: lands back in NoSelection
            machine.click(black_box(250.0));
            machine.click(black_box(400.0));
            machine.click(black_box(100.0));
        })
    });
}

fn bench_full_round(c: &mut Criterion) {
    let mut session = Session::with_generator(
        DomainRange::new(-6, 6).unwrap(),
        500.0,
        QuizGenerator::seeded(1),
    )
    .expect("valid geometry");

    c.bench_function("solve_check_next", |b| {
        b.iter(|| {
            let bound_px = session.mapper().scale(session.quiz().bound);
            session.click(black_box(bound_px));
            session.click(black_box(bound_px + 40.0));
            session.check();
            session.next();
        })
    });
}

criterion_group!(
    benches,
    bench_unscale,
    bench_hover_storm,
    bench_click_cycle,
    bench_full_round
);
criterion_main!(benches);
