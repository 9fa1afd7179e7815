//! Benchmarks for the resource pipeline
//!
//! Measures parse/sanitize/validate/store directly through the service and
//! end to end through the router.

#![allow(clippy::expect_used)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use infrastructure::AppConfig;
use presentation_http::{create_router, state::AppState};
use serde_json::json;
use tokio::runtime::Runtime;

const VALID: &[u8] = br#"{"amount": 10.5, "currency": "usd", "credit_card_id": 1}"#;

/// Benchmark the resource service directly (no HTTP layer)
fn bench_resource_service(c: &mut Criterion) {
    let rt = Runtime::new().expect("Failed to create runtime");
    let state = AppState::from_config(AppConfig::default());

    let mut group = c.benchmark_group("resource_service");
    group.throughput(Throughput::Elements(1));
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("create", |b| {
        b.to_async(&rt).iter(|| async {
            state
                .resources
                .create(VALID)
                .await
                .expect("Create should succeed")
        });
    });

    group.bench_function("reject_extra_keys", |b| {
        let body = br#"{"amount": 1, "currency": "usd", "credit_card_id": 1, "x": 0}"#;
        b.to_async(&rt)
            .iter(|| async { state.resources.create(body).await.is_err() });
    });

    group.finish();
}

/// Benchmark the HTTP handler layer
fn bench_http_handler(c: &mut Criterion) {
    let rt = Runtime::new().expect("Failed to create runtime");

    let mut group = c.benchmark_group("http_handler");
    group.throughput(Throughput::Elements(1));
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("create_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(AppState::from_config(AppConfig::default()));
            let server = axum_test::TestServer::new(router).expect("Failed to create server");

            server
                .post("/v1/payments")
                .json(&json!({"amount": 10.5, "currency": "usd", "credit_card_id": 1}))
                .await
        });
    });

    // Baseline for HTTP overhead
    group.bench_function("health_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(AppState::from_config(AppConfig::default()));
            let server = axum_test::TestServer::new(router).expect("Failed to create server");

            server.get("/health").await
        });
    });

    group.finish();
}

/// Benchmark validation cost as the body grows with ignored keys
fn bench_payload_sizes(c: &mut Criterion) {
    let rt = Runtime::new().expect("Failed to create runtime");
    let mut config = AppConfig::default();
    config.faults.enabled.clear();
    let state = AppState::from_config(config);

    let mut group = c.benchmark_group("payload_sizes");
    group.measurement_time(Duration::from_secs(10));

    for extra in [0usize, 16, 256] {
        let mut payload = json!({"amount": 10.5, "currency": "usd", "credit_card_id": 1});
        for i in 0..extra {
            payload[format!("extra_{i}")] = json!(i);
        }
        let body = serde_json::to_vec(&payload).expect("Payload should serialize");

        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(extra), &body, |b, body| {
            b.to_async(&rt)
                .iter(|| async { state.resources.create(body).await.is_ok() });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resource_service,
    bench_http_handler,
    bench_payload_sizes,
);
criterion_main!(benches);
