use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::router::submit_handler;
use crate::assessment::{assessment_router, AnswerSet, AssessmentService, PlainTextReportRenderer};

fn json_request(uri: &str, body: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("payload serializes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn submit_handler_returns_result_and_delivery() {
    let (service, notifier) = build_service();

    let response = submit_handler::<PlainTextReportRenderer, MemoryNotifier>(
        State(Arc::new(service)),
        axum::Json(submission(max_answers())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["total_percentage"], 100.0);
    assert_eq!(payload["delivery"]["report_delivered"], true);
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_bad_contact() {
    let (service, _) = build_service();
    let mut submission = submission(max_answers());
    submission.contact.email = "not-an-address".to_string();

    let response = submit_handler::<PlainTextReportRenderer, MemoryNotifier>(
        State(Arc::new(service)),
        axum::Json(submission),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("not-an-address")));
}

#[tokio::test]
async fn submit_route_reports_delivery_failure_without_losing_result() {
    let service = AssessmentService::new(
        Arc::new(PlainTextReportRenderer),
        Arc::new(OfflineNotifier),
        notification_config(),
    );
    let router = assessment_router(Arc::new(service));

    let body = serde_json::to_value(submission(max_answers())).expect("submission serializes");
    let response = router
        .oneshot(json_request("/api/v1/assessment", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["readiness"]["tier"], "high");
    assert_eq!(payload["delivery"]["report_rendered"], true);
    assert_eq!(payload["delivery"]["report_delivered"], false);
    assert!(payload["delivery"]["error"].is_string());
}

#[tokio::test]
async fn score_route_returns_record_without_delivery() {
    let (service, notifier) = build_service();
    let router = assessment_router(Arc::new(service));

    let answers: Value = (1..=25)
        .map(|id: u8| {
            let value = catalog().max_value(id).unwrap_or(0);
            (id.to_string(), json!(value))
        })
        .collect::<serde_json::Map<String, Value>>()
        .into();
    let response = router
        .oneshot(json_request(
            "/api/v1/assessment/score",
            &json!({ "answers": answers }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_score"], 593);
    assert_eq!(payload["max_total"], 593);
    assert_eq!(payload["readiness"]["tier"], "high");
    assert_eq!(
        payload["recommendations"][0]["source"],
        json!({ "kind": "tier_default", "key": "high" })
    );
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn score_route_lists_missing_questions() {
    let (service, _) = build_service();
    let router = assessment_router(Arc::new(service));

    let mut answers = max_answers();
    answers.clear(5);
    let body = json!({ "answers": serde_json::to_value(&answers).expect("answers serialize") });

    let response = router
        .oneshot(json_request("/api/v1/assessment/score", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["missing"], json!([5]));
}

#[tokio::test]
async fn score_route_rejects_invalid_option_values() {
    let (service, _) = build_service();
    let router = assessment_router(Arc::new(service));

    let body = json!({ "answers": max_answers().with_answer(1, 15) });

    let response = router
        .oneshot(json_request("/api/v1/assessment/score", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload.get("missing").is_none());
}

#[tokio::test]
async fn catalog_route_returns_questionnaire() {
    let (service, _) = build_service();
    let router = assessment_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/assessment/catalog")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["max_total"], 593);
    assert_eq!(payload["sections"].as_array().map(Vec::len), Some(6));
    assert_eq!(payload["sections"][5]["label"], "Communications readiness");
}

#[tokio::test]
async fn consultation_route_accepts_consenting_requests() {
    let (service, notifier) = build_service();
    let router = assessment_router(Arc::new(service));

    let body = json!({ "contact": contact(), "consent": true });
    let response = router
        .oneshot(json_request("/api/v1/consultations", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!({ "success": true }));
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn consultation_route_requires_consent() {
    let (service, _) = build_service();
    let router = assessment_router(Arc::new(service));

    let body = json!({ "contact": contact() });
    let response = router
        .oneshot(json_request("/api/v1/consultations", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["success"], false);
    assert!(payload["error"].is_string());
}

#[tokio::test]
async fn consultation_route_reports_transport_failure() {
    let service = AssessmentService::new(
        Arc::new(PlainTextReportRenderer),
        Arc::new(OfflineNotifier),
        notification_config(),
    );
    let router = assessment_router(Arc::new(service));

    let body = json!({ "contact": contact(), "consent": true });
    let response = router
        .oneshot(json_request("/api/v1/consultations", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["success"], false);
}

#[tokio::test]
async fn empty_answers_object_is_a_validation_failure() {
    let (service, _) = build_service();
    let router = assessment_router(Arc::new(service));

    let body = json!({ "answers": AnswerSet::new() });
    let response = router
        .oneshot(json_request("/api/v1/assessment/score", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["missing"].as_array().map(Vec::len), Some(25));
}
