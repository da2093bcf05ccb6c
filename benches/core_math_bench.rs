use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use shotchart_rs::core::{
    CourtTransform, GameLog, LeagueBaseline, Shot, ShotType, ZoneName, hex_bins, percentile_rank,
    rolling_averages,
};
use shotchart_rs::render::DivergingScale;

fn synthetic_shots(count: usize) -> Vec<Shot> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let x = (t * 37.0).sin() * 240.0;
            let y = 40.0 + (t * 13.0).cos().abs() * 350.0;
            let zone = if y > 240.0 {
                ZoneName::AboveBreak3
            } else {
                ZoneName::MidRange
            };
            Shot::new(x, y, i % 5 != 0, Some(zone), ShotType::TwoPt)
        })
        .collect()
}

fn bench_hex_binning_10k(c: &mut Criterion) {
    let shots = synthetic_shots(10_000);
    let transform = CourtTransform::default();
    let baseline = LeagueBaseline::default();
    let scale = DivergingScale::default();

    c.bench_function("hex_binning_10k", |b| {
        b.iter(|| {
            let bins = hex_bins(
                black_box(&shots),
                black_box(transform),
                black_box(10.0),
                black_box(&baseline),
                black_box(scale),
            )
            .expect("binning should succeed");
            black_box(bins)
        })
    });
}

fn bench_percentile_rank_1k(c: &mut Criterion) {
    let cohort: Vec<f64> = (0..1_000).map(|i| f64::from(i) * 0.1).collect();

    c.bench_function("percentile_rank_1k", |b| {
        b.iter(|| black_box(percentile_rank(black_box(42.5), black_box(&cohort))))
    });
}

fn bench_rolling_averages_full_season(c: &mut Criterion) {
    let games: Vec<GameLog> = (0..82)
        .map(|i| GameLog {
            date: NaiveDate::from_num_days_from_ce_opt(739_000 + i).expect("valid date"),
            pts: 18.0 + f64::from(i % 20),
            reb: 6.0,
            ast: 5.0,
            fgm: 7 + (i as u32 % 5),
            fga: 16,
            fg3m: 2,
            fg3a: 6,
            ftm: 3,
            fta: 4,
        })
        .collect();

    c.bench_function("rolling_averages_full_season", |b| {
        b.iter(|| black_box(rolling_averages(black_box(&games))))
    });
}

criterion_group!(
    benches,
    bench_hex_binning_10k,
    bench_percentile_rank_1k,
    bench_rolling_averages_full_season
);
criterion_main!(benches);
