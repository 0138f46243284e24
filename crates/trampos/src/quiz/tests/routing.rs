use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::quiz::catalog::default_careers;
use crate::quiz::domain::{QuestionId, RiasecType};
use crate::quiz::repository::SessionId;
use crate::quiz::router::{error_response, progress_handler, start_handler};
use crate::quiz::service::{QuizService, QuizServiceError};
use crate::quiz::store::MemorySnapshotStore;
use crate::quiz::validation::{IntegrityError, ValidationError};
use crate::quiz::AxisPair;

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn start_route_creates_a_session() {
    let (service, _, _) = build_service(seeded_settings(100));
    let router = quiz_router_with_service(service);

    let response = router
        .oneshot(empty_request("POST", "/api/v1/quiz/sessions"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("session_id").and_then(Value::as_str).is_some());
    assert_eq!(
        payload
            .get("questions")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(18)
    );
}

#[tokio::test]
async fn start_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(
        QuizService::new(
            Arc::new(UnavailableRepository),
            Arc::new(MemorySnapshotStore::new()),
            seeded_settings(101),
        )
        .expect("content valid"),
    );

    let response =
        start_handler::<UnavailableRepository, MemorySnapshotStore>(State(service)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn progress_handler_returns_not_found_for_unknown_sessions() {
    let (service, _, _) = build_service(seeded_settings(102));

    let response = progress_handler::<MemoryRepository, MemorySnapshotStore>(
        State(Arc::new(service)),
        Path("session-nope".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("session session-nope not found")
    );
}

#[tokio::test]
async fn answer_and_results_routes_drive_a_session() {
    let (service, _, _) = build_service(seeded_settings(103));
    let service = Arc::new(service);
    let record = service.start_session().expect("session starts");
    let router = crate::quiz::quiz_router(service.clone());

    for question in &record.questions {
        let uri = format!("/api/v1/quiz/sessions/{}/answers", record.id);
        let body = json!({ "question_id": question.id.0, "answer": "yes" });
        let response = router
            .clone()
            .oneshot(json_request("POST", &uri, &body))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .clone()
        .oneshot(empty_request(
            "GET",
            &format!("/api/v1/quiz/sessions/{}/results", record.id),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("complete"), Some(&Value::Bool(true)));
    assert_eq!(payload.get("answered").and_then(Value::as_u64), Some(18));
    assert_eq!(
        payload.pointer("/careers/shape").and_then(Value::as_str),
        Some("per_tier")
    );
    assert_eq!(
        payload
            .get("types")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(6)
    );

    let response = router
        .oneshot(empty_request(
            "GET",
            &format!("/api/v1/quiz/sessions/{}", record.id),
        ))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("complete"), Some(&Value::Bool(true)));
    assert!(payload.get("next_question").is_none());
}

#[tokio::test]
async fn answer_route_rejects_foreign_questions() {
    let (service, _, _) = build_service(seeded_settings(104));
    let service = Arc::new(service);
    let record = service.start_session().expect("session starts");
    let router = crate::quiz::quiz_router(service);

    let uri = format!("/api/v1/quiz/sessions/{}/answers", record.id);
    let response = router
        .oneshot(json_request(
            "POST",
            &uri,
            &json!({ "question_id": 987_654, "answer": "no" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn career_route_validates_the_tier() {
    let (service, _, _) = build_service(seeded_settings(105));
    let service = Arc::new(service);
    let record = service.start_session().expect("session starts");
    let router = crate::quiz::quiz_router(service);

    let response = router
        .clone()
        .oneshot(empty_request(
            "GET",
            &format!("/api/v1/quiz/sessions/{}/careers/lendario", record.id),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = router
        .oneshot(empty_request(
            "GET",
            &format!("/api/v1/quiz/sessions/{}/careers/refazer?offset=4", record.id),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("tier").and_then(Value::as_str), Some("Refazer"));
    assert_eq!(payload.get("offset").and_then(Value::as_u64), Some(4));
    assert_eq!(payload.get("total").and_then(Value::as_u64), Some(30));
}

#[tokio::test]
async fn admin_routes_validate_edits() {
    let (service, _, _) = build_service(seeded_settings(106));
    let router = quiz_router_with_service(service);

    let mut career = serde_json::to_value(&default_careers()[0]).expect("encode");
    career["related_subtypes"][0]["label"] = json!("TELEPATIA");
    let response = router
        .clone()
        .oneshot(json_request("PUT", "/api/v1/quiz/admin/careers/0", &career))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .is_some_and(|message| message.contains("unknown subtype \"TELEPATIA\"")));

    let valid = serde_json::to_value(&default_careers()[0]).expect("encode");
    let response = router
        .clone()
        .oneshot(json_request("PUT", "/api/v1/quiz/admin/careers/99", &valid))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/api/v1/quiz/admin/questions/1",
            &json!({ "text": "Você prefere investigar antes?" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("text").and_then(Value::as_str),
        Some("Você prefere investigar antes?")
    );

    let batch = serde_json::to_value(&default_careers()[..3]).expect("encode");
    let response = router
        .clone()
        .oneshot(json_request("PUT", "/api/v1/quiz/admin/careers", &batch))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("careers").and_then(Value::as_u64), Some(3));

    let response = router
        .clone()
        .oneshot(empty_request("POST", "/api/v1/quiz/admin/reset/careers"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(empty_request("POST", "/api/v1/quiz/admin/reset/everything"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_route_rejects_unknown_types() {
    let (service, _, _) = build_service(seeded_settings(107));
    let profile = service.profile(RiasecType::R).expect("R profile");
    let router = quiz_router_with_service(service);
    let body = serde_json::to_value(&profile).expect("encode");

    let response = router
        .clone()
        .oneshot(json_request("PUT", "/api/v1/quiz/admin/profiles/X", &body))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = router
        .clone()
        .oneshot(json_request("PUT", "/api/v1/quiz/admin/profiles/r", &body))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(empty_request("GET", "/api/v1/quiz/profiles"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(6));
}

#[test]
fn error_statuses_follow_the_failure_kind() {
    let cases = [
        (
            QuizServiceError::UnknownSession(SessionId("s".to_string())),
            StatusCode::NOT_FOUND,
        ),
        (
            QuizServiceError::Validation(ValidationError::UnknownQuestion(QuestionId(3))),
            StatusCode::NOT_FOUND,
        ),
        (
            QuizServiceError::Validation(ValidationError::EmptyCatalog),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            QuizServiceError::Repository(crate::quiz::RepositoryError::Conflict),
            StatusCode::CONFLICT,
        ),
        (
            QuizServiceError::Integrity(IntegrityError::InsufficientQuestions {
                pair: AxisPair::RealisticInvestigative,
                found: 0,
                required: 6,
            }),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, status) in cases {
        assert_eq!(error_response(error).status(), status);
    }
}
