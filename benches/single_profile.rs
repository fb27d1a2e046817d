use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tea_scorer::samples::sample_profiles;
use tea_scorer::{
    classify_mood, score_relaxation_by_method, score_relaxation_by_temperature, TeaProfile,
    TeaScorer,
};

fn bench_single_profile(c: &mut Criterion) {
    let gyokuro = TeaProfile::new("green", 6.0, 8.0, "grassy")
        .with_processing_method("shade-grown")
        .with_brewing_temp(60.0);

    c.bench_function("classify_mood", |b| b.iter(|| classify_mood(black_box(&gyokuro))));
    c.bench_function("relaxation_by_method", |b| {
        b.iter(|| score_relaxation_by_method(black_box(&gyokuro)))
    });
    c.bench_function("relaxation_by_temperature", |b| {
        b.iter(|| score_relaxation_by_temperature(black_box(&gyokuro)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let profiles: Vec<TeaProfile> = sample_profiles()
        .into_iter()
        .map(|(_, profile)| profile)
        .cycle()
        .take(10_000)
        .collect();
    let scorer = TeaScorer::new();

    c.bench_function("score_batch", |b| b.iter(|| scorer.score_batch(black_box(&profiles))));
    c.bench_function("score_batch_parallel", |b| {
        b.iter(|| scorer.score_batch_parallel(black_box(&profiles)))
    });
}

criterion_group!(benches, bench_single_profile, bench_batch);
criterion_main!(benches);
