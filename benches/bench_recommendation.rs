// benches/bench_recommendation.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use route_advisor::flow_analyzer::LogisticModel;
use route_advisor::{AdvisorConfig, AdvisorContext, HistoricalRecord, RouteCandidate, TripQuery, Weather};

const LOCATIONS: usize = 80;

/// A model with one slot per location and weather, like the production schema.
fn dummy_model() -> LogisticModel {
    let mut names = vec!["HOUR".to_string(), "VEHICLE_COUNT".to_string()];
    names.extend(Weather::ALL.iter().map(|w| format!("WEATHER_{}", w)));
    names.extend((0..LOCATIONS).map(|i| format!("LOCATION_Location_{}", i)));
    let mut rng = rand::rng();
    let coefficients = names.iter().map(|_| rng.random_range(-0.5..0.5)).collect();
    LogisticModel::new(names, coefficients, -2.0).unwrap()
}

fn dummy_records(size: usize) -> Vec<HistoricalRecord> {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| {
            let location = format!("Location_{}", rng.random_range(0..LOCATIONS));
            let time = format!("{:02}:00", rng.random_range(0..24));
            let weather = Weather::ALL[rng.random_range(0..Weather::ALL.len())];
            HistoricalRecord::new(&location, &time, weather.as_str(), rng.random_range(0..400))
        })
        .collect()
}

fn bench_recommend(c: &mut Criterion) {
    let model = dummy_model();
    let ctx = AdvisorContext::with_schema(
        dummy_records(20_000),
        model.schema().unwrap(),
        AdvisorConfig::default(),
    );
    let trip = TripQuery::new("Location_1", "Location_42", 18, Weather::Rainy).unwrap();
    let candidates = vec![
        RouteCandidate::new(1, 12.4, 38.0),
        RouteCandidate::new(2, 10.9, 41.5),
        RouteCandidate::new(3, 14.0, 36.0),
    ];

    c.bench_function("recommend_full_trip", |b| {
        b.iter(|| black_box(ctx.recommend(black_box(&trip), &model, black_box(&candidates))));
    });
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
