//! Integration tests for the REST API surface.

#![cfg(feature = "api")]

mod common;

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use solarsize::api::{AppState, router};
use solarsize::vendors::VendorDirectory;

fn make_state() -> Arc<AppState> {
    Arc::new(AppState {
        config: common::example_config(),
        vendors: Mutex::new(VendorDirectory::with_starter_vendors()),
    })
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn example_entries_json() -> Value {
    json!([
        {"name": "Fridge", "power_watts": 150.0, "hours_per_day": 24.0, "quantity": 1, "priority": "high"},
        {"name": "Bulb", "power_watts": 10.0, "hours_per_day": 6.0, "quantity": 4, "priority": "medium"}
    ])
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn sizing_endpoint_matches_worked_example() {
    let app = router(make_state());
    let req = post_json(
        "/sizing",
        json!({"entries": example_entries_json(), "autonomy_days": 2}),
    );
    let resp = app.oneshot(req).await.expect("request should succeed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let kwp = body["spec"]["required_kwp"].as_f64().expect("kwp should be a number");
    assert!((kwp - 1.024).abs() < 1e-5, "got {kwp}");
    let monthly = body["profile"]["monthly_kwh"].as_f64().expect("monthly should be a number");
    assert!((monthly - 115.2).abs() < 1e-3, "got {monthly}");
}

#[tokio::test]
async fn optimize_endpoint_never_exceeds_budget() {
    for budget in [0.0, 100_000.0, 300_000.0, 10_000_000.0] {
        let app = router(make_state());
        let req = post_json(
            "/optimize",
            json!({"entries": example_entries_json(), "budget": budget}),
        );
        let resp = app.oneshot(req).await.expect("request should succeed");
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        let cost = body["achieved_cost"].as_f64().expect("cost should be a number");
        assert!(cost <= budget, "cost {cost} exceeds budget {budget}");
    }
}

#[tokio::test]
async fn invalid_config_surfaces_as_422() {
    let mut config = common::example_config();
    config.system.efficiency = 0.0;
    let state = Arc::new(AppState {
        config,
        vendors: Mutex::new(VendorDirectory::new()),
    });
    let req = post_json(
        "/sizing",
        json!({"entries": example_entries_json()}),
    );
    let resp = router(state).oneshot(req).await.expect("request should succeed");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn vendor_register_find_and_conflict_flow() {
    let state = make_state();
    let record = json!({
        "name": "API Test Solar",
        "location": "Enugu",
        "system_types": ["hybrid"],
        "contact": "0800"
    });

    let resp = router(state.clone())
        .oneshot(post_json("/vendors", record.clone()))
        .await
        .expect("request should succeed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = router(state.clone())
        .oneshot(post_json("/vendors", record))
        .await
        .expect("request should succeed");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = Request::builder()
        .uri("/vendors?location=enugu&system_type=hybrid")
        .body(Body::empty())
        .expect("request should build");
    let resp = router(state).oneshot(req).await.expect("request should succeed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let hits = body.as_array().expect("body should be an array");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "API Test Solar");
}
