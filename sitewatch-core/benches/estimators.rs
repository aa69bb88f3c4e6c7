use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sitewatch_core::{
    time::ManualClock, DecayingRiskGrid, EmaConfig, EmaForecaster, EtaConfig, EtaEstimator,
    Kalman1D, KalmanConfig, RiskGridConfig,
};

fn scalar_updates(c: &mut Criterion) {
    let mut ema = EmaForecaster::new(EmaConfig::default()).unwrap();
    c.bench_function("ema_update", |b| b.iter(|| ema.update(black_box(21.5))));

    let mut kf = Kalman1D::new(KalmanConfig::default()).unwrap();
    c.bench_function("kalman_update", |b| b.iter(|| kf.update(black_box(21.5))));
}

fn eta_estimate(c: &mut Criterion) {
    let mut eta = EtaEstimator::new(EtaConfig::default()).unwrap();
    for i in 0..30 {
        eta.update_speed(1.0 + (i % 5) as f32);
    }
    c.bench_function("eta_estimate_window_30", |b| {
        b.iter(|| eta.estimate_eta_seconds(black_box(500.0)))
    });
}

fn grid_decay_sweep(c: &mut Criterion) {
    let clock = ManualClock::new(0);
    let config = RiskGridConfig::new(64, 64).with_decay_per_sec(1e-6);
    let mut grid = DecayingRiskGrid::with_clock(config, &clock).unwrap();
    grid.reinforce((0..64).map(|i| (i, i)), 1.0);

    c.bench_function("grid_64x64_decay_and_read", |b| {
        b.iter(|| {
            clock.advance(1);
            black_box(grid.get().total())
        })
    });
}

criterion_group!(benches, scalar_updates, eta_estimate, grid_decay_sweep);
criterion_main!(benches);
