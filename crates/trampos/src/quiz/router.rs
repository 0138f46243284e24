use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Answer, CareerDetail, Profile, QuestionId, RiasecType};
use super::matching::MatchTier;
use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::service::{QuizService, QuizServiceError, SessionProgress};
use super::store::SnapshotStore;
use super::validation::{QuestionPatch, ValidationError};

/// Router builder exposing the quiz and its admin endpoints.
pub fn quiz_router<R, S>(service: Arc<QuizService<R, S>>) -> Router
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    Router::new()
        .route("/api/v1/quiz/sessions", post(start_handler::<R, S>))
        .route(
            "/api/v1/quiz/sessions/:session_id",
            get(progress_handler::<R, S>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/answers",
            post(answer_handler::<R, S>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/results",
            get(results_handler::<R, S>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/careers/:tier",
            get(career_page_handler::<R, S>),
        )
        .route("/api/v1/quiz/profiles", get(profiles_handler::<R, S>))
        .route(
            "/api/v1/quiz/admin/profiles/:riasec_type",
            put(edit_profile_handler::<R, S>),
        )
        .route(
            "/api/v1/quiz/admin/questions",
            get(questions_handler::<R, S>),
        )
        .route(
            "/api/v1/quiz/admin/questions/:question_id",
            patch(edit_question_handler::<R, S>),
        )
        .route(
            "/api/v1/quiz/admin/careers",
            get(careers_handler::<R, S>).put(replace_careers_handler::<R, S>),
        )
        .route(
            "/api/v1/quiz/admin/careers/:index",
            put(edit_career_handler::<R, S>),
        )
        .route(
            "/api/v1/quiz/admin/reset/:catalog",
            post(reset_handler::<R, S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) question_id: QuestionId,
    pub(crate) answer: Answer,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    #[serde(default)]
    pub(crate) offset: usize,
}

pub(crate) async fn start_handler<R, S>(State(service): State<Arc<QuizService<R, S>>>) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    match service.start_session() {
        Ok(record) => {
            let payload = json!({
                "session_id": record.id,
                "started_at": record.started_at,
                "questions": record.questions,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn progress_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    match service.session(&SessionId(session_id)) {
        Ok(record) => {
            let progress = SessionProgress::from_record(&record);
            (StatusCode::OK, axum::Json(progress)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    match service.answer(&SessionId(session_id), request.question_id, request.answer) {
        Ok(progress) => (StatusCode::OK, axum::Json(progress)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    match service.results(&SessionId(session_id)) {
        Ok(results) => (StatusCode::OK, axum::Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn career_page_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
    Path((session_id, tier)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    let tier: MatchTier = match tier.parse() {
        Ok(tier) => tier,
        Err(error) => return bad_request(error),
    };
    match service.career_page(&SessionId(session_id), tier, query.offset) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profiles_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    (StatusCode::OK, axum::Json(service.profiles())).into_response()
}

pub(crate) async fn questions_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    (StatusCode::OK, axum::Json(service.questions())).into_response()
}

pub(crate) async fn careers_handler<R, S>(State(service): State<Arc<QuizService<R, S>>>) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    (StatusCode::OK, axum::Json(service.careers())).into_response()
}

pub(crate) async fn edit_profile_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
    Path(riasec_type): Path<String>,
    axum::Json(profile): axum::Json<Profile>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    let riasec_type: RiasecType = match riasec_type.parse() {
        Ok(riasec_type) => riasec_type,
        Err(error) => return bad_request(error),
    };
    match service.edit_profile(riasec_type, profile) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn edit_question_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
    Path(question_id): Path<u32>,
    axum::Json(changes): axum::Json<QuestionPatch>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    match service.edit_question(QuestionId(question_id), changes) {
        Ok(question) => (StatusCode::OK, axum::Json(question)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn edit_career_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
    Path(index): Path<usize>,
    axum::Json(career): axum::Json<CareerDetail>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    match service.edit_career(index, career) {
        Ok(career) => (StatusCode::OK, axum::Json(career)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn replace_careers_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
    axum::Json(careers): axum::Json<Vec<CareerDetail>>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    match service.replace_careers(careers) {
        Ok(count) => (StatusCode::OK, axum::Json(json!({ "careers": count }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<R, S>(
    State(service): State<Arc<QuizService<R, S>>>,
    Path(catalog): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    match catalog.as_str() {
        "questions" => service.reset_questions(),
        "careers" => service.reset_careers(),
        "profiles" => service.reset_profiles(),
        other => {
            let payload = json!({
                "error": format!("unknown catalog '{other}'"),
            });
            return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
        }
    }
    (StatusCode::OK, axum::Json(json!({ "reset": catalog }))).into_response()
}

fn bad_request(error: impl std::fmt::Display) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

pub(crate) fn error_response(error: QuizServiceError) -> Response {
    let status = match &error {
        QuizServiceError::UnknownSession(_)
        | QuizServiceError::Repository(RepositoryError::NotFound)
        | QuizServiceError::Validation(ValidationError::UnknownQuestion(_))
        | QuizServiceError::Validation(ValidationError::UnknownCareer { .. }) => {
            StatusCode::NOT_FOUND
        }
        QuizServiceError::Validation(_) | QuizServiceError::QuestionNotInSession { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        QuizServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        QuizServiceError::Integrity(_) | QuizServiceError::Repository(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
