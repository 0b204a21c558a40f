//! benches/simulation.rs
//! Run with:  cargo bench --bench simulation
//! HTML:      target/criterion/report/index.html

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use prediction_market_sim::{MarketSimulator, SimulationConfig};
use std::hint::black_box;

// ────────────────────────────────────────────────────────────────────────────
//  Parameter grids
// ────────────────────────────────────────────────────────────────────────────
const TRADER_COUNTS: &[usize] = &[10, 100, 1_000];
const STEP_COUNTS: &[usize] = &[100, 1_000];

/// Build a seeded simulator so every measurement replays the same run.
fn setup_simulator(n_traders: usize, n_steps: usize) -> MarketSimulator {
    let config = SimulationConfig::new(0.7, n_traders, n_steps).unwrap();
    MarketSimulator::with_seed(config, 42)
}

pub fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("market_simulation_scaling");

    for &n_steps in STEP_COUNTS {
        for &n_traders in TRADER_COUNTS {
            // measure throughput in "elements" = individual trades processed
            group.throughput(Throughput::Elements((n_traders * n_steps) as u64));

            let id = BenchmarkId::from_parameter(format!("traders_{}_steps_{}", n_traders, n_steps));
            group.bench_function(id, |b| {
                b.iter_batched(
                    || setup_simulator(n_traders, n_steps),
                    |mut simulator| {
                        let run = simulator.simulate();
                        black_box(run);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_scaling);
criterion_main!(benches);
