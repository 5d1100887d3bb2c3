use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_rs::{BirthMoment, CalculationConfig, SchoolPreset, compute_chart};

fn chart_bench(c: &mut Criterion) {
    let birth = BirthMoment::seoul(1988, 7, 15, 14, 30);
    let default = CalculationConfig::default();
    let chinese = SchoolPreset::TraditionalChinese.config();
    let quiet = CalculationConfig {
        record_alternatives: false,
        ..CalculationConfig::default()
    };

    let mut group = c.benchmark_group("chart");
    group.bench_function("korean_mainstream", |b| {
        b.iter(|| compute_chart(black_box(&birth), black_box(&default)))
    });
    group.bench_function("traditional_chinese", |b| {
        b.iter(|| compute_chart(black_box(&birth), black_box(&chinese)))
    });
    group.bench_function("without_alternatives", |b| {
        b.iter(|| compute_chart(black_box(&birth), black_box(&quiet)))
    });
    group.finish();
}

fn serialize_bench(c: &mut Criterion) {
    let chart = match compute_chart(
        &BirthMoment::seoul(1988, 7, 15, 14, 30),
        &CalculationConfig::default(),
    ) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Skipping serialization benchmark: {e}");
            return;
        }
    };
    c.bench_function("chart_to_json", |b| b.iter(|| black_box(&chart).to_json()));
}

criterion_group!(benches, chart_bench, serialize_bench);
criterion_main!(benches);
