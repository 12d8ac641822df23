use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use num2words_uz::*;

fn bench_cardinal(c: &mut Criterion) {
    let uz = UzbekFormatter::latin();
    c.bench_function("cardinal_small", |b| {
        b.iter(|| uz.to_cardinal(black_box(158)).unwrap())
    });
    c.bench_function("cardinal_max", |b| {
        b.iter(|| uz.to_cardinal(black_box(10i128.pow(34) - 1)).unwrap())
    });
}

fn bench_derived(c: &mut Criterion) {
    let uz = UzbekFormatter::cyrillic();
    c.bench_function("ordinal", |b| {
        b.iter(|| uz.to_ordinal(black_box(1_234_567)).unwrap())
    });
    c.bench_function("year", |b| {
        b.iter(|| uz.to_year(black_box(1984), None, true).unwrap())
    });
    c.bench_function("currency", |b| {
        b.iter(|| uz.to_currency(black_box(dec!(1250000.75)), "UZS").unwrap())
    });
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("build_tables", |b| {
        b.iter(|| UzbekFormatter::new(black_box(Script::Cyrillic)))
    });
}

criterion_group!(benches, bench_cardinal, bench_derived, bench_construction);
criterion_main!(benches);
