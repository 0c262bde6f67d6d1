//! Trimquote Benchmarks
//!
//! - Pricing calculation for both products
//! - Rendering each quote format

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use trimquote::{
    AddOn, BaseboardRequest, ClientInfo, EstimateRequest, HouseRequest, PrepLevel, PricingEngine,
    QuoteFormat, QuoteFormatter,
};

// ============ PRICING BENCHMARKS ============

fn bench_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing");
    let engine = PricingEngine::default();

    for feet in [10i64, 100, 10_000].iter() {
        let request: EstimateRequest = BaseboardRequest::new(Decimal::from(*feet), PrepLevel::Heavy)
            .with_add_on(AddOn::Caulking)
            .with_add_on(AddOn::Sanding)
            .into();
        group.bench_with_input(BenchmarkId::new("baseboard", feet), &request, |b, request| {
            b.iter(|| engine.compute(black_box(request)))
        });
    }

    let house: EstimateRequest =
        HouseRequest::new(Decimal::from(1200), Decimal::from(400), PrepLevel::Medium)
            .with_doors(6)
            .with_frames(10)
            .into();
    group.bench_function("house", |b| b.iter(|| engine.compute(black_box(&house))));

    group.finish();
}

// ============ RENDER BENCHMARKS ============

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let engine = PricingEngine::default();
    let formatter = QuoteFormatter::default();
    let client = ClientInfo::new(
        "Jane Doe",
        "12 Elm St",
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    );
    let result = engine
        .compute(&BaseboardRequest::new(Decimal::from(250), PrepLevel::Medium).into())
        .unwrap();

    for format in QuoteFormat::ALL {
        group.bench_with_input(BenchmarkId::new("format", format), &format, |b, format| {
            b.iter(|| formatter.render(*format, black_box(&client), black_box(&result)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pricing, bench_render);
criterion_main!(benches);
