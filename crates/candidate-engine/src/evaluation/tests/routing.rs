use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::common::*;
use crate::evaluation::router::evaluation_router;

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn evaluation_request(job: Value, candidate: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/evaluations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "job": job, "candidate": candidate }).to_string(),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn evaluation_endpoint_returns_full_result() {
    let router = evaluation_router(Arc::new(evaluator()));
    let job = serde_json::to_value(logistics_job()).expect("job serializes");
    let candidate = serde_json::to_value(gcc_candidate()).expect("candidate serializes");

    let response = router
        .oneshot(evaluation_request(job, candidate))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;

    assert_eq!(body["is_eligible"], json!(true));
    assert!(body["total_score"].as_u64().expect("score present") <= 100);
    assert!(body["section_scores"].is_object());
    assert!(body["confidence"]["level"].is_string());
    assert_eq!(
        body["rule_trace"]
            .as_array()
            .expect("trace present")
            .last()
            .expect("trace nonempty"),
        &json!("PASSED_ALL_HARD_RULES")
    );
}

#[tokio::test]
async fn gate_failures_are_normal_responses_not_errors() {
    let router = evaluation_router(Arc::new(evaluator()));
    let job = serde_json::to_value(logistics_job()).expect("job serializes");
    let mut candidate = gcc_candidate();
    candidate.gcc_experience_years = None;
    let candidate = serde_json::to_value(candidate).expect("candidate serializes");

    let response = router
        .oneshot(evaluation_request(job, candidate))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["decision"], json!("REJECTED"));
    assert_eq!(body["rejection_rule_code"], json!("HR-008"));
    assert_eq!(body["total_score"], json!(0));
}

#[tokio::test]
async fn malformed_payloads_are_rejected_by_extraction() {
    let router = evaluation_router(Arc::new(evaluator()));

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/evaluations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"job\": {}}"))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
