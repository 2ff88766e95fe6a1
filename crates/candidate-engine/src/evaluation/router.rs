use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::{Candidate, Job};
use super::Evaluator;

/// Request payload: one Job x Candidate pair, already validated upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    pub job: Job,
    pub candidate: Candidate,
}

/// Router builder exposing the evaluation endpoint.
pub fn evaluation_router(evaluator: Arc<Evaluator>) -> Router {
    Router::new()
        .route("/api/v1/evaluations", post(evaluate_handler))
        .with_state(evaluator)
}

pub(crate) async fn evaluate_handler(
    State(evaluator): State<Arc<Evaluator>>,
    axum::Json(request): axum::Json<EvaluationRequest>,
) -> Response {
    let today = Local::now().date_naive();

    match evaluator.evaluate(&request.job, &request.candidate, today) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
