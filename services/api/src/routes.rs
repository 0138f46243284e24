use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use trampos::quiz::{quiz_router, QuizService, SessionRepository, SnapshotStore};

pub(crate) fn with_quiz_routes<R, S>(service: Arc<QuizService<R, S>>) -> axum::Router
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    let policy = *service.policy();
    quiz_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/quiz/policy",
            axum::routing::get(move || async move { Json(policy) }),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemorySessionRepository;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;
    use trampos::quiz::{MemorySnapshotStore, QuizSettings, ResultShape};

    fn app(settings: QuizSettings) -> (axum::Router, Arc<AtomicBool>) {
        let readiness = Arc::new(AtomicBool::new(false));
        let state = AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let service = QuizService::new(
            Arc::new(InMemorySessionRepository::default()),
            Arc::new(MemorySnapshotStore::new()),
            settings,
        )
        .expect("default content is valid");
        let router = with_quiz_routes(Arc::new(service)).layer(Extension(state));
        (router, readiness)
    }

    async fn get(router: &axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let (router, readiness) = app(QuizSettings::default());

        let (status, payload) = get(&router, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload["status"], "initializing");

        readiness.store(true, Ordering::Release);
        let (status, payload) = get(&router, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ready");

        let (status, payload) = get(&router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn policy_endpoint_reports_the_configured_shape() {
        let settings = QuizSettings {
            seed: Some(3),
            matching: trampos::quiz::MatchPolicy {
                shape: ResultShape::Flat { limit: 5 },
                ..Default::default()
            },
            ..QuizSettings::default()
        };
        let (router, _) = app(settings);

        let (status, payload) = get(&router, "/api/v1/quiz/policy").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["shape"]["kind"], "flat");
        assert_eq!(payload["shape"]["limit"], 5);
        assert_eq!(payload["strategy"]["kind"], "top_subtypes");
    }

    #[tokio::test]
    async fn quiz_routes_are_mounted() {
        let (router, _) = app(QuizSettings::default());

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/quiz/sessions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::CREATED);

        let (status, payload) = get(&router, "/api/v1/quiz/profiles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.as_array().map(Vec::len), Some(6));
    }
}
