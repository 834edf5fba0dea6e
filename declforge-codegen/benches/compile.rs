//! Compilation benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use declforge_codegen::{Compiler, CompilerConfig, OutputMode};
use declforge_schema::{Field, FieldType, NativeType, SchemaEntity, TableLookup};
use std::hint::black_box;

fn build_universe(size: usize) -> (Vec<SchemaEntity>, TableLookup) {
    let mut tables = TableLookup::new();
    tables.insert("Product".to_string(), "./ts-model/table/Product".to_string());

    let schemas = (0..size)
        .map(|i| {
            let mut entity = SchemaEntity::new(format!("Entity{i}"))
                .with_field(Field::new("id", FieldType::native(NativeType::Number)).required())
                .with_field(Field::new("name", FieldType::native(NativeType::String)))
                .with_field(Field::new("flags", FieldType::native(NativeType::Boolean)).array())
                .with_field(Field::new("status", FieldType::enumeration("Status")))
                .with_field(Field::new("products", FieldType::table("Product")).array());
            if i > 0 {
                let parent = FieldType::schema(format!("Entity{}", i - 1));
                entity.add_field(Field::new("parent", parent));
            }
            entity
        })
        .collect();

    (schemas, tables)
}

fn benchmark_compile_classes(c: &mut Criterion) {
    let (schemas, tables) = build_universe(100);
    let compiler = Compiler::new(CompilerConfig::default());

    c.bench_function("compile_classes_100", |b| {
        b.iter(|| compiler.compile(black_box(&schemas), black_box(&tables)))
    });
}

fn benchmark_compile_interfaces(c: &mut Criterion) {
    let (schemas, tables) = build_universe(100);
    let compiler = Compiler::new(CompilerConfig::default().with_mode(OutputMode::Interface));

    c.bench_function("compile_interfaces_100", |b| {
        b.iter(|| compiler.compile(black_box(&schemas), black_box(&tables)))
    });
}

criterion_group!(
    benches,
    benchmark_compile_classes,
    benchmark_compile_interfaces
);
criterion_main!(benches);
