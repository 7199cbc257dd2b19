use condensate_core::{CondensateConfig, Vocabulary};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

const CONFIG: &str = r#"
[engine]
scan_delay_ms = 0

[engine.vocabulary]
extra_stop_words = ["um", "uh", "like"]
extra_tech_terms = ["kafka", "grpc", "postgres"]
extra_salience_markers = ["deadline", "blocked"]

[server]
port = 9000
"#;

fn bench_config_parse(c: &mut Criterion) {
    c.bench_function("config_parse", |b| {
        b.iter(|| black_box(CondensateConfig::from_toml_str(black_box(CONFIG)).unwrap()))
    });
}

fn bench_stop_word_lookup(c: &mut Criterion) {
    let vocab = Vocabulary::builtin();
    let words = ["The", "Friday", "Hello", "Bob", "Okay", "Investors", "Sure", "Roadmap"];
    let mut rng = rand::thread_rng();
    let sample: Vec<&str> = (0..1000).map(|_| words[rng.gen_range(0..words.len())]).collect();
    c.bench_function("stop_word_lookup_1000", |b| {
        b.iter(|| sample.iter().filter(|w| vocab.is_stop_word(black_box(w))).count())
    });
}

criterion_group!(benches, bench_config_parse, bench_stop_word_lookup);
criterion_main!(benches);
