use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::answers::AnswerSet;
use super::delivery::{ConsultationRequest, Notifier, ReportRenderer};
use super::scoring::ScoringError;
use super::service::{
    AssessmentService, AssessmentSubmission, ConsultationError, SubmissionError,
};

/// Body of the headless scoring endpoint.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: AnswerSet,
}

/// Router builder exposing the questionnaire, scoring, and consultation endpoints.
pub fn assessment_router<R, N>(service: Arc<AssessmentService<R, N>>) -> Router
where
    R: ReportRenderer + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route("/api/v1/assessment", post(submit_handler::<R, N>))
        .route("/api/v1/assessment/score", post(score_handler::<R, N>))
        .route("/api/v1/assessment/catalog", get(catalog_handler::<R, N>))
        .route("/api/v1/consultations", post(consultation_handler::<R, N>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: ReportRenderer + 'static,
    N: Notifier + 'static,
{
    match service.submit(submission) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(SubmissionError::Contact(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Scoring(error)) => scoring_error_response(error),
    }
}

pub(crate) async fn score_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    R: ReportRenderer + 'static,
    N: Notifier + 'static,
{
    match service.score(&request.answers) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => scoring_error_response(error),
    }
}

pub(crate) async fn catalog_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
) -> Response
where
    R: ReportRenderer + 'static,
    N: Notifier + 'static,
{
    (StatusCode::OK, axum::Json(service.catalog().view())).into_response()
}

pub(crate) async fn consultation_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    axum::Json(request): axum::Json<ConsultationRequest>,
) -> Response
where
    R: ReportRenderer + 'static,
    N: Notifier + 'static,
{
    match service.request_consultation(request) {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "success": true }))).into_response(),
        Err(ConsultationError::Contact(error)) => {
            let payload = json!({
                "success": false,
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error @ ConsultationError::Delivery(_)) => {
            let payload = json!({
                "success": false,
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}

fn scoring_error_response(error: ScoringError) -> Response {
    let mut payload = json!({
        "error": error.to_string(),
    });
    if let ScoringError::IncompleteInput { missing } = &error {
        payload["missing"] = json!(missing);
    }
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
