// Criterion benchmarks for the Nearbite ranking core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nearbite::core::{calculate_score, distance_meters, filter_places, rank_places};
use nearbite::models::{Coordinate, FilterSpec, Place, PlaceCategory};

fn create_candidate(id: usize, lat: f64, lng: f64) -> Place {
    Place {
        id: id.to_string(),
        name: format!("Place {}", id),
        address: format!("No. {}, Xinyi Rd, Taipei", id),
        location: Coordinate { lat, lng },
        rating: if id % 7 == 0 { None } else { Some(3.0 + (id % 5) as f64 * 0.5) },
        rating_count: Some(100 + (id % 900) as u32),
        price_tier: if id % 5 == 0 { None } else { Some((id % 4 + 1) as u8) },
        categories: vec![
            if id % 3 == 0 { "cafe" } else { "restaurant" }.to_string(),
            "food".to_string(),
        ],
        photo_url: None,
        is_open_now: Some(id % 2 == 0),
        distance_meters: Some((id % 1000) as f64),
        score: None,
    }
}

fn create_candidates(count: usize) -> Vec<Place> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.0001) % 0.01;
            let lng_offset = (i as f64 * 0.0001) % 0.01;
            create_candidate(i, 25.0330 + lat_offset, 121.5654 + lng_offset)
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let taipei_101 = Coordinate { lat: 25.0330, lng: 121.5654 };
    let main_station = Coordinate { lat: 25.0478, lng: 121.5170 };

    c.bench_function("distance_meters", |b| {
        b.iter(|| distance_meters(black_box(taipei_101), black_box(main_station)));
    });
}

fn bench_score(c: &mut Criterion) {
    c.bench_function("calculate_score", |b| {
        b.iter(|| {
            calculate_score(
                black_box(Some(4.5)),
                black_box(500.0),
                black_box(1000.0),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates = create_candidates(*candidate_count);

        group.bench_with_input(
            BenchmarkId::new("rank_places", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    rank_places(
                        black_box(candidates.clone()),
                        black_box(1000.0),
                        black_box(Some(5)),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_filter_and_rank_pipeline(c: &mut Criterion) {
    let candidates = create_candidates(100);
    let filters = FilterSpec {
        price_tiers: vec![1, 2],
        categories: vec![PlaceCategory::Restaurant],
        min_rating: Some(3.5),
    };

    c.bench_function("filter_rank_pipeline_100_candidates", |b| {
        b.iter(|| {
            let filtered = filter_places(black_box(candidates.clone()), black_box(&filters));
            let ranked = rank_places(filtered, black_box(1000.0), black_box(Some(5)));
            black_box(ranked)
        });
    });
}

criterion_group!(
    benches,
    bench_distance,
    bench_score,
    bench_ranking,
    bench_filter_and_rank_pipeline
);

criterion_main!(benches);
