use axum::body::Body;
use axum::http::Request;
use condensate_server::app;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use tower::ServiceExt;

fn transcript(lines: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..lines)
        .map(|i| match rng.gen_range(0..3) {
            0 => format!("USER: we need to ship v1.{i} by Friday"),
            1 => format!("AGENT: meeting at {}pm", i % 12 + 1),
            _ => "BOB: sounds good".to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_condense_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let body = serde_json::json!({ "text": transcript(200) }).to_string();
    c.bench_function("post_condense_200_lines", |b| {
        b.iter(|| {
            let req = Request::builder()
                .method("POST")
                .uri("/api/v1/condense")
                .header("content-type", "application/json")
                .body(Body::from(body.clone()))
                .unwrap();
            black_box(rt.block_on(app().oneshot(req)).unwrap())
        })
    });
}

criterion_group!(benches, bench_condense_endpoint);
criterion_main!(benches);
