//! Benchmarks for table lookups using criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sylph_database::{Condition, DataType, Entity, FieldDef, Predicate, Table, TableConfig};

const CITIES: [&str; 8] = [
    "Oslo", "Rome", "Lima", "Pune", "Kyiv", "Doha", "Riga", "Bern",
];

fn populated(size: usize) -> Table {
    let config = TableConfig::new("users")
        .field(
            FieldDef::new("id", DataType::Number)
                .primary_key(true)
                .auto_increment(true),
        )
        .field(FieldDef::new("email", DataType::String).unique(true))
        .field(FieldDef::new("city", DataType::String).index(true))
        .field(FieldDef::new("age", DataType::Number));
    let mut table = Table::create(&config).unwrap();
    for i in 0..size {
        let entity = Entity::new()
            .with("email", format!("user{}@example.com", i))
            .with("city", CITIES[i % CITIES.len()])
            .with("age", (18 + i % 60) as i32);
        table.insert(&entity).unwrap();
    }
    table
}

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(populated(size)));
        });
    }

    group.finish();
}

fn find_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for size in [1000, 10000].iter() {
        let table = populated(*size);
        let by_email = Condition::new().eq("email", format!("user{}@example.com", size / 2));
        let by_city = Condition::new().eq("city", "Riga");
        let by_age = Condition::new().with("age", Predicate::between(30, 35).unwrap());

        group.bench_with_input(BenchmarkId::new("unique_probe", size), size, |b, _| {
            b.iter(|| black_box(table.find(&by_email).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("index_probe", size), size, |b, _| {
            b.iter(|| black_box(table.find(&by_city).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("full_scan", size), size, |b, _| {
            b.iter(|| black_box(table.find(&by_age).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, insert_benchmark, find_benchmark);
criterion_main!(benches);
