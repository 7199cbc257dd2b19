use condensate_core::Vocabulary;
use condensate_engine::{entities, salience, Condenser};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;

const TURNS: &[&str] = &[
    "USER: Hey, I want to talk about the project roadmap.",
    "AGENT: Sure, let's look at Q3.",
    "USER: We need to focus on the migration to v2.0 of our API.",
    "BOB: The auth layer is the bottleneck right now.",
    "AGENT: Okay, I'll prioritize the auth refactoring.",
    "USER: Don't forget the meeting with the investors on Friday at 2 PM.",
    "ALICE: Latency on the backend looks fine after v2.3.1 shipped.",
    "AGENT: Sounds good.",
];

fn generate_transcript(size_kb: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(TURNS.choose(&mut rng).unwrap());
        text.push('\n');
    }
    text
}

fn bench_condense(c: &mut Criterion) {
    let condenser = Condenser::default();
    for kb in [1, 10, 100] {
        let text = generate_transcript(kb);
        c.bench_function(&format!("condense_{kb}kb"), |b| {
            b.iter(|| black_box(condenser.condense(black_box(&text))))
        });
    }
}

fn bench_stages(c: &mut Criterion) {
    let vocab = Vocabulary::builtin();
    let text = generate_transcript(10);
    c.bench_function("extract_entities_10kb", |b| {
        b.iter(|| black_box(entities::extract(black_box(&text), &vocab)))
    });
    c.bench_function("salience_filter_10kb", |b| {
        b.iter(|| black_box(salience::filter(black_box(&text), &vocab)))
    });
}

criterion_group!(benches, bench_condense, bench_stages);
criterion_main!(benches);
