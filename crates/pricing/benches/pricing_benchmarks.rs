use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use doorline_catalog::{Catalog, Color, Door, Series};
use doorline_pricing::{PricingEngine, SetMultipliers};

fn build_catalog(doors: usize) -> Catalog {
    let series = Series::KNOWN;
    let catalog: Vec<Door> = (0..doors)
        .map(|i| {
            Door::priced(format!("door-{i}"), series[i % series.len()].clone(), 8_000 + i as u64)
                .with_colors([
                    Color::named("White"),
                    Color::named("Графит"),
                    Color::named("Дуб натуральный"),
                ])
        })
        .collect();
    Catalog::new(catalog).unwrap()
}

fn bench_single_door(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_door");
    let engine = PricingEngine::default();
    let door = Door::priced("innova-01", Series::Innova, 10_000);
    let color = Color::named("Графит");
    let overrides = SetMultipliers::new().with(Series::Innova, doorline_core::Multiplier::constant(1.6));

    group.bench_function("unit_price", |b| {
        b.iter(|| engine.unit_price(black_box(&door), black_box(Some(&color))))
    });

    group.bench_function("set_price_shipped_table", |b| {
        b.iter(|| engine.set_price(black_box(&door), black_box(Some(&color)), None))
    });

    group.bench_function("set_price_overrides", |b| {
        b.iter(|| engine.set_price(black_box(&door), black_box(Some(&color)), Some(&overrides)))
    });

    group.finish();
}

fn bench_catalog_quote(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_quote");
    let engine = PricingEngine::default();

    for doors in [10usize, 100, 1_000].iter() {
        let catalog = build_catalog(*doors);
        group.throughput(Throughput::Elements((*doors * 3) as u64));
        group.bench_with_input(BenchmarkId::new("quote_catalog", doors), &catalog, |b, catalog| {
            b.iter(|| engine.quote_catalog(black_box(catalog)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_door, bench_catalog_quote);
criterion_main!(benches);
