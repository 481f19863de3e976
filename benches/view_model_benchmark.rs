use criterion::{criterion_group, criterion_main, Criterion};
use ecotrail_tracker::models::{LocationCategory, LocationFilter};
use ecotrail_tracker::services::view_model::{
    filter_locations, map_bounds, map_markers, map_stats, top_rated,
};
use ecotrail_tracker::services::Catalog;
use std::hint::black_box;

/// The built-in locations repeated and jittered into a large catalog.
fn large_catalog(copies: u32) -> Catalog {
    let base = Catalog::builtin();
    let mut locations = Vec::new();
    for copy in 0..copies {
        for location in base.locations() {
            let mut location = location.clone();
            let shift = f64::from(copy) * 0.001;
            location.id = copy * 100 + location.id;
            location.coordinates.latitude += shift;
            location.coordinates.longitude -= shift;
            location.rating = (location.rating - f64::from(copy % 10) * 0.1).max(0.0);
            locations.push(location);
        }
    }
    base.with_locations(locations)
        .expect("Failed to build synthetic catalog")
}

fn benchmark_map_view(c: &mut Criterion) {
    let catalog = large_catalog(1_000);
    let locations = catalog.locations();

    let mut group = c.benchmark_group("map_view");

    group.bench_function("filter_all", |b| {
        b.iter(|| filter_locations(black_box(locations), LocationFilter::All))
    });

    group.bench_function("filter_recreation", |b| {
        b.iter(|| {
            filter_locations(
                black_box(locations),
                LocationFilter::Category(LocationCategory::Recreation),
            )
        })
    });

    group.bench_function("top_rated_3", |b| {
        b.iter(|| top_rated(black_box(locations), 3))
    });

    group.bench_function("full_map_response", |b| {
        b.iter(|| {
            let filtered = filter_locations(black_box(locations), LocationFilter::All);
            let markers = map_markers(filtered.iter().copied());
            let bounds = map_bounds(filtered.iter().copied());
            let stats = map_stats(locations, &filtered);
            (markers, bounds, stats)
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_map_view);
criterion_main!(benches);
