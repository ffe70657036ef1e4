use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use snake_controller::core::{GameConfig, RecordingController};
use snake_controller::types::Event;

/// Configuration with a `length`-segment snake coiled on a large map.
fn coiled_config(length: usize) -> String {
    let mut config = format!("W 1000 1000 F 999 999 S R {length}");
    // Lay the body out serpentine-style so it is a valid, non-overlapping
    // chain of the requested length.
    for i in 0..length {
        let row = i / 500;
        let col = if row % 2 == 0 { i % 500 } else { 499 - i % 500 };
        config.push_str(&format!(" {} {}", 500 - col as i32, 500 + row as i32));
    }
    config
}

fn bench_neutral_tick(c: &mut Criterion) {
    let config = coiled_config(100);

    c.bench_function("tick_100_segments", |b| {
        b.iter_batched(
            || RecordingController::recording(&config).unwrap(),
            |mut controller| {
                controller.handle(black_box(Event::Tick));
                controller
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config_parse(c: &mut Criterion) {
    let config = coiled_config(100);

    c.bench_function("parse_100_segment_config", |b| {
        b.iter(|| {
            let parsed: GameConfig = black_box(config.as_str()).parse().unwrap();
            black_box(parsed)
        })
    });
}

criterion_group!(benches, bench_neutral_tick, bench_config_parse);
criterion_main!(benches);
