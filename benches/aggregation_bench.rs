use criterion::{Criterion, criterion_group, criterion_main};
use scrolly_rs::core::{Aggregates, DateAxis, Dataset, RawRow, rank_snapshot};
use scrolly_rs::render::NullRenderer;
use scrolly_rs::scene::{SceneConfig, SceneController};
use std::hint::black_box;

fn synthetic_dataset(countries: usize, dates: usize) -> Dataset {
    let axis = DateAxis::new((0..dates).map(|d| format!("d{d}"))).expect("valid axis");
    let rows = (0..countries)
        .map(|c| {
            let growth = (c % 37 + 1) as u64;
            RawRow::new(
                format!("country-{c}"),
                (0..dates).map(|d| (d as u64 * growth).to_string()),
            )
        })
        .collect();
    Dataset::new(axis, rows).expect("valid dataset")
}

fn bench_aggregate_300x300(c: &mut Criterion) {
    let dataset = synthetic_dataset(300, 300);
    c.bench_function("aggregate_300x300", |b| {
        b.iter(|| {
            let _ = Aggregates::compute(black_box(&dataset));
        })
    });
}

fn bench_rank_latest_300(c: &mut Criterion) {
    let aggregates = Aggregates::compute(&synthetic_dataset(300, 300));
    let latest = aggregates.snapshot(299).expect("latest snapshot");
    c.bench_function("rank_latest_300", |b| {
        b.iter(|| {
            let _ = rank_snapshot(black_box(latest), 15);
        })
    });
}

fn bench_explore_slider_sweep(c: &mut Criterion) {
    let mut controller = SceneController::from_dataset(
        &synthetic_dataset(300, 300),
        SceneConfig::default(),
        NullRenderer::default(),
    )
    .expect("controller");
    controller.advance().expect("advance");
    controller.advance().expect("advance");

    c.bench_function("explore_slider_sweep_300", |b| {
        b.iter(|| {
            for index in 0..300 {
                controller.set_date(black_box(index)).expect("set date");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_aggregate_300x300,
    bench_rank_latest_300,
    bench_explore_slider_sweep
);
criterion_main!(benches);
