// Criterion benchmarks for TeamConnect

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use teamconnect::core::{calculate_distance, ActivityFinder};
use teamconnect::models::{
    Activity, CategoryFilter, Category, DateRange, DistanceRange, FilterSelection, PriceRange,
    UserLocation,
};
use teamconnect::services::load_seed_catalog;

/// Seed catalog repeated and spread around the continental US
fn create_catalog(size: usize) -> Vec<Activity> {
    let seed = load_seed_catalog(None).unwrap();
    (0..size)
        .map(|i| {
            let mut activity = seed[i % seed.len()].clone();
            activity.id = format!("bench-{}", i);
            activity.coordinates.lat += (i % 17) as f64 * 0.05;
            activity.coordinates.lng -= (i % 23) as f64 * 0.05;
            activity.price = 30.0 + (i % 100) as f64;
            activity
        })
        .collect()
}

fn bench_calculate_distance(c: &mut Criterion) {
    c.bench_function("calculate_distance", |b| {
        b.iter(|| {
            calculate_distance(
                black_box(37.7749),
                black_box(-122.4194),
                black_box(40.7128),
                black_box(-74.0060),
            )
        });
    });
}

fn bench_find_activities(c: &mut Criterion) {
    let finder = ActivityFinder::default();
    let today = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
    let location = UserLocation::new("Chicago", "IL", 41.8781, -87.6298);
    let selection = FilterSelection {
        category: CategoryFilter::Only(Category::Adventure),
        price: PriceRange::From50To75,
        distance: DistanceRange::Within50,
        date: DateRange::ThisWeek,
        ..Default::default()
    };

    let mut group = c.benchmark_group("find_activities");

    for size in [12, 100, 1000, 10000].iter() {
        let catalog = create_catalog(*size);

        group.bench_with_input(BenchmarkId::new("with_location", size), size, |b, _| {
            b.iter(|| {
                finder.find_activities(
                    black_box(catalog.clone()),
                    Some(&location),
                    &selection,
                    today,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("no_filters", size), size, |b, _| {
            b.iter(|| {
                finder.find_activities(
                    black_box(catalog.clone()),
                    None,
                    &FilterSelection::default(),
                    today,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_distance, bench_find_activities);

criterion_main!(benches);
