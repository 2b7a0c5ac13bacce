//! Cost model benchmarks.
//!
//! Run with: `cargo bench --package unitcost-bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use unitcost_bench::scenarios;
use unitcost_lib::{CostModel, CostSession, Parameter, Sweep};

fn compute_benchmark(c: &mut Criterion) {
    let model = CostModel::global();
    let mut group = c.benchmark_group("compute");

    for scenario in scenarios() {
        group.bench_with_input(
            BenchmarkId::new("compute", scenario.name),
            &scenario.inputs,
            |b, inputs| b.iter(|| model.compute(black_box(inputs))),
        );
        group.bench_with_input(
            BenchmarkId::new("breakdown", scenario.name),
            &scenario.inputs,
            |b, inputs| b.iter(|| model.breakdown(black_box(inputs))),
        );
    }

    group.finish();
}

fn session_benchmark(c: &mut Criterion) {
    c.bench_function("session/set_raw", |b| {
        let mut session = CostSession::default();
        b.iter(|| session.set_raw(Parameter::NumUsers, black_box("250")));
    });
}

fn sweep_benchmark(c: &mut Criterion) {
    let model = CostModel::global();
    let base = scenarios()[0].inputs;
    let mut group = c.benchmark_group("sweep");

    for steps in [10_usize, 1_000] {
        let sweep = Sweep::new(Parameter::NumUsers, 1.0, 10_000.0, steps)
            .expect("valid sweep");
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &sweep, |b, sweep| {
            b.iter(|| sweep.run(model, black_box(&base)));
        });
    }

    group.finish();
}

criterion_group!(benches, compute_benchmark, session_benchmark, sweep_benchmark);
criterion_main!(benches);
