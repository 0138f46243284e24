//! End-to-end scenarios for a quiz session: sampling, answering, scoring, and career matching.
//!
//! Everything goes through the public service facade and HTTP router so the
//! scenarios exercise the same paths a deployed API would.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use trampos::quiz::{
        MemorySnapshotStore, QuizService, QuizSettings, RepositoryError, SessionId,
        SessionRecord, SessionRepository,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemoryRepository {
        records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
    }

    impl SessionRepository for MemoryRepository {
        fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&record.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.id.clone(), record.clone());
            Ok(record)
        }

        fn update_with<F>(
            &self,
            id: &SessionId,
            edit: F,
        ) -> Result<SessionRecord, RepositoryError>
        where
            F: FnOnce(&mut SessionRecord),
        {
            let mut guard = self.records.lock().expect("lock");
            let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
            edit(record);
            Ok(record.clone())
        }

        fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
            Ok(self.records.lock().expect("lock").get(id).cloned())
        }
    }

    pub(super) fn settings(seed: u64) -> QuizSettings {
        QuizSettings {
            seed: Some(seed),
            ..QuizSettings::default()
        }
    }

    pub(super) fn build_service(
        settings: QuizSettings,
    ) -> (
        QuizService<MemoryRepository, MemorySnapshotStore>,
        Arc<MemorySnapshotStore>,
    ) {
        let snapshots = Arc::new(MemorySnapshotStore::new());
        let service = QuizService::new(
            Arc::new(MemoryRepository::default()),
            snapshots.clone(),
            settings,
        )
        .expect("default content is valid");
        (service, snapshots)
    }
}

mod session {
    use super::common::*;
    use trampos::quiz::{Answer, MatchTier, RiasecType, ShapedResults, QUIZ_SIZE};

    #[test]
    fn realistic_player_is_matched_with_realistic_careers() {
        let (service, _) = build_service(settings(2024));
        let record = service.start_session().expect("session starts");
        assert_eq!(record.questions.len(), QUIZ_SIZE);

        for question in &record.questions {
            let answer = if question.yes_type == RiasecType::R {
                Answer::Yes
            } else if question.no_type == RiasecType::R {
                Answer::No
            } else {
                Answer::Yes
            };
            service
                .answer(&record.id, question.id, answer)
                .expect("answer recorded");
        }

        let results = service.results(&record.id).expect("results");
        assert!(results.complete);
        assert_eq!(results.dominant, RiasecType::R);
        assert_eq!(results.types[0].score, 6);

        let ShapedResults::PerTier { tiers } = results.careers else {
            panic!("default shape is per tier");
        };
        assert_eq!(
            tiers.iter().map(|bucket| bucket.tier).collect::<Vec<_>>(),
            MatchTier::ordered().to_vec()
        );
        for bucket in &tiers {
            assert!(bucket.careers.len() <= 4);
            // Dominant-type careers lead each bucket.
            let first_other = bucket
                .careers
                .iter()
                .position(|entry| !entry.matches_dominant)
                .unwrap_or(bucket.careers.len());
            assert!(bucket.careers[first_other..]
                .iter()
                .all(|entry| !entry.matches_dominant));
        }
    }

    #[test]
    fn same_seed_gives_the_same_questions() {
        let (first, _) = build_service(settings(77));
        let (second, _) = build_service(settings(77));

        let a = first.start_session().expect("first session");
        let b = second.start_session().expect("second session");
        assert_eq!(a.questions, b.questions);
    }

    #[test]
    fn unanswered_session_suggests_a_retake() {
        let (service, _) = build_service(settings(5));
        let record = service.start_session().expect("session starts");

        let results = service.results(&record.id).expect("results");
        assert_eq!(results.answered, 0);
        assert!(results.top_subtypes.is_empty());
        let ShapedResults::PerTier { tiers } = results.careers else {
            panic!("default shape is per tier");
        };
        for bucket in tiers {
            if bucket.tier.suggests_retake() {
                assert_eq!(bucket.total, service.careers().len());
            } else {
                assert_eq!(bucket.total, 0);
            }
        }
    }
}

mod admin {
    use super::common::*;
    use std::sync::Arc;
    use trampos::quiz::{
        QuestionId, QuestionPatch, QuizService, QuizServiceError, RiasecType, SnapshotKey,
        ValidationError,
    };

    #[test]
    fn pinned_subtype_is_used_by_new_sessions() {
        let (service, _) = build_service(settings(9));
        for id in 1..=300 {
            let question = service
                .questions()
                .into_iter()
                .find(|question| question.id == QuestionId(id))
                .expect("question exists");
            let profile = service.profile(question.yes_type).expect("profile");
            let patch = QuestionPatch {
                yes_sub: Some(profile.subdivisions[1].clone()),
                ..QuestionPatch::default()
            };
            service
                .edit_question(QuestionId(id), patch)
                .expect("pin accepted");
        }

        let record = service.start_session().expect("session starts");
        for question in &record.questions {
            let expected = &service
                .profile(question.yes_type)
                .expect("profile")
                .subdivisions[1];
            assert_eq!(&question.yes_sub, expected);
        }
    }

    #[test]
    fn edits_survive_a_restart_through_snapshots() {
        let (service, snapshots) = build_service(settings(10));
        let mut career = service.careers()[2].clone();
        career.weaknesses = "Sazonalidade.".to_string();
        service.edit_career(2, career).expect("career accepted");

        let mut profile = service.profile(RiasecType::S).expect("S profile");
        profile.subdivisions[9] = "Voluntariado".to_string();
        let saved = service
            .edit_profile(RiasecType::S, profile)
            .expect("profile accepted");
        assert_eq!(saved.subdivisions[9], "VOLUNTARIADO");
        assert!(snapshots.get(SnapshotKey::Profiles).is_some());

        let restarted = QuizService::new(
            Arc::new(MemoryRepository::default()),
            snapshots,
            settings(11),
        )
        .expect("snapshots restore");
        assert_eq!(
            restarted.subtype_owner("VOLUNTARIADO"),
            Some(RiasecType::S)
        );
        assert_eq!(restarted.careers()[2].weaknesses, "Sazonalidade.");
        assert_eq!(restarted.careers(), service.careers());
    }

    #[test]
    fn invalid_batch_is_rejected_as_a_whole() {
        let (service, _) = build_service(settings(12));
        let mut batch = service.careers();
        let last = batch.len() - 1;
        batch[last].name = "   ".to_string();

        match service.replace_careers(batch) {
            Err(QuizServiceError::Validation(ValidationError::Record { index, .. })) => {
                assert_eq!(index, last);
            }
            other => panic!("expected record error, got {other:?}"),
        }
        assert_eq!(service.careers().len(), last + 1);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;
    use trampos::quiz::quiz_router;

    async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router
            .clone()
            .oneshot(request)
            .await
            .expect("route executes");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let payload = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("json payload")
        };
        (status, payload)
    }

    #[tokio::test]
    async fn full_session_over_http() {
        let (service, _) = build_service(settings(31));
        let router = quiz_router(Arc::new(service));

        let (status, started) = send(
            &router,
            Request::post("/api/v1/quiz/sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let session_id = started["session_id"].as_str().expect("id").to_string();
        let questions = started["questions"].as_array().expect("questions").clone();

        for question in &questions {
            let (status, _) = send(
                &router,
                Request::post(format!("/api/v1/quiz/sessions/{session_id}/answers"))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({
                            "question_id": question["id"],
                            "answer": "no",
                        }))
                        .unwrap(),
                    ))
                    .unwrap(),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, results) = send(
            &router,
            Request::get(format!("/api/v1/quiz/sessions/{session_id}/results"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(results["answered"], json!(18));
        assert_eq!(results["complete"], json!(true));
        assert_eq!(results["types"].as_array().map(Vec::len), Some(6));
        assert!(results["dominant"].is_string());

        let (status, _) = send(
            &router,
            Request::get("/api/v1/quiz/sessions/session-unknown/results")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
