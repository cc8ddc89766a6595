use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rivian_core::{Trim, VehicleStateSource};
use rivian_entities::DemoVehicle;

fn bench_resolve_all(c: &mut Criterion) {
    let registry = rivian_entities::build_registry().unwrap();
    let fields = registry.all_fields();
    let state = DemoVehicle::new().fetch(&fields).unwrap().unwrap();

    let mut group = c.benchmark_group("resolve_all");
    for trim in Trim::ALL {
        let resolver = registry.resolver(trim);
        group.bench_function(trim.as_str(), |b| {
            b.iter(|| resolver.resolve_all(black_box(&state)))
        });
    }
    group.finish();
}

fn bench_field_sets(c: &mut Criterion) {
    let registry = rivian_entities::build_registry().unwrap();

    c.bench_function("all_fields_excluding_tire_pressure", |b| {
        b.iter(|| black_box(&registry).all_fields_excluding_tire_pressure())
    });
}

fn bench_registry_build(c: &mut Criterion) {
    c.bench_function("build_registry", |b| {
        b.iter(|| rivian_entities::build_registry().unwrap())
    });
}

criterion_group!(benches, bench_resolve_all, bench_field_sets, bench_registry_build);
criterion_main!(benches);
