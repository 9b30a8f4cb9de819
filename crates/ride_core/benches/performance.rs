//! Performance benchmarks for ride_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ride_core::pricing::{calculate_fare, PREMIUM_RATES, STANDARD_RATES};
use ride_core::report::write_demo_report;
use ride_core::scenario::{generate_rides, ScenarioParams};
use ride_core::summary::{collect_records, FleetSummary};

fn bench_fare_calculation(c: &mut Criterion) {
    c.bench_function("standard_fare", |b| {
        b.iter(|| calculate_fare(black_box(&STANDARD_RATES), black_box(4.2)))
    });
    c.bench_function("premium_fare", |b| {
        b.iter(|| calculate_fare(black_box(&PREMIUM_RATES), black_box(12.8)))
    });
}

fn bench_demo_report(c: &mut Criterion) {
    c.bench_function("demo_report_render", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(1024);
            write_demo_report(&mut buf).expect("write to buffer");
            black_box(buf)
        })
    });
}

fn bench_scenario_generation(c: &mut Criterion) {
    let sizes = vec![("small", 10), ("medium", 100), ("large", 1000)];

    let mut group = c.benchmark_group("scenario_generation");
    for (name, num_rides) in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(name), &num_rides, |b, &n| {
            b.iter(|| {
                let params = ScenarioParams {
                    num_rides: n,
                    ..Default::default()
                }
                .with_seed(42);
                let rides = generate_rides(&params);
                let records = collect_records(&rides);
                black_box(FleetSummary::from_records(&records))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fare_calculation,
    bench_demo_report,
    bench_scenario_generation
);
criterion_main!(benches);
