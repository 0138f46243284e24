use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::quiz::catalog::{default_questions, ProfileCatalog};
use crate::quiz::domain::{
    Answer, Answers, CareerDetail, Profile, QuestionId, RelatedSubtype, RiasecType,
    SessionQuestion,
};
use crate::quiz::repository::{RepositoryError, SessionId, SessionRecord, SessionRepository};
use crate::quiz::sampler::SessionSampler;
use crate::quiz::scoring::{compute_scores, ScoreState};
use crate::quiz::service::{QuizService, QuizSettings};
use crate::quiz::store::{MemorySnapshotStore, SnapshotError, SnapshotKey, SnapshotStore};
use crate::quiz::{quiz_router, MatchPolicy, MatchStrategy, ResultShape};

pub(super) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn sampled_session(seed: u64) -> Vec<SessionQuestion> {
    let catalog = ProfileCatalog::defaults();
    let bank = default_questions();
    let sampler = SessionSampler::new(&catalog, &bank).expect("default bank is balanced");
    sampler.sample(&mut rng(seed))
}

/// The other member of `riasec_type`'s axis pair.
pub(super) fn partner(riasec_type: RiasecType) -> RiasecType {
    let (first, second) = riasec_type.axis_pair().members();
    if first == riasec_type {
        second
    } else {
        first
    }
}

pub(super) fn first_subtype(riasec_type: RiasecType) -> String {
    ProfileCatalog::defaults().subdivisions(riasec_type)[0].clone()
}

pub(super) fn session_question(
    id: u32,
    yes: (RiasecType, &str),
    no: (RiasecType, &str),
) -> SessionQuestion {
    SessionQuestion {
        id: QuestionId(id),
        text: format!("Pergunta {id}"),
        yes_type: yes.0,
        no_type: no.0,
        yes_sub: yes.1.to_string(),
        no_sub: no.1.to_string(),
    }
}

/// A session where each `(label, type, count)` is credited `count` times by "yes" answers.
pub(super) fn credited_session(
    entries: &[(&str, RiasecType, u32)],
) -> (Vec<SessionQuestion>, Answers) {
    let mut questions = Vec::new();
    let mut answers = Answers::new();
    let mut id = 1;
    for (label, riasec_type, count) in entries {
        let other = partner(*riasec_type);
        let other_sub = first_subtype(other);
        for _ in 0..*count {
            questions.push(session_question(
                id,
                (*riasec_type, label),
                (other, other_sub.as_str()),
            ));
            answers.record(QuestionId(id), Answer::Yes);
            id += 1;
        }
    }
    (questions, answers)
}

pub(super) fn scores_for(entries: &[(&str, RiasecType, u32)]) -> ScoreState {
    let (questions, answers) = credited_session(entries);
    compute_scores(&questions, &answers)
}

pub(super) fn career(
    name: &str,
    riasec_type: RiasecType,
    related: [(&str, RiasecType); 4],
) -> CareerDetail {
    CareerDetail {
        name: name.to_string(),
        riasec_type,
        description: format!("Descrição de {name}."),
        strengths: String::new(),
        weaknesses: String::new(),
        related_subtypes: related
            .iter()
            .map(|(label, owner)| RelatedSubtype::new(label, *owner))
            .collect(),
    }
}

/// Copy of the `riasec_type` profile with subtype `from` replaced by `to`.
pub(super) fn renamed_profile(
    profiles: &ProfileCatalog,
    riasec_type: RiasecType,
    from: &str,
    to: &str,
) -> Profile {
    let mut profile = profiles.get(riasec_type).cloned().expect("profile exists");
    let slot = profile
        .subdivisions
        .iter()
        .position(|label| label == from)
        .expect("subtype exists");
    profile.subdivisions[slot] = to.to_string();
    profile
}

/// Labels named by any career, in catalog order.
pub(super) fn career_labels(careers: &[CareerDetail]) -> Vec<&str> {
    careers
        .iter()
        .flat_map(|career| career.related_subtypes.iter())
        .map(|related| related.label.as_str())
        .collect()
}

pub(super) fn policy(strategy: MatchStrategy, shape: ResultShape) -> MatchPolicy {
    MatchPolicy {
        strategy,
        dominant_boost: 0,
        shape,
    }
}

pub(super) fn seeded_settings(seed: u64) -> QuizSettings {
    QuizSettings {
        seed: Some(seed),
        ..QuizSettings::default()
    }
}

pub(super) fn build_service(
    settings: QuizSettings,
) -> (
    QuizService<MemoryRepository, MemorySnapshotStore>,
    Arc<MemoryRepository>,
    Arc<MemorySnapshotStore>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let snapshots = Arc::new(MemorySnapshotStore::new());
    let service = QuizService::new(repository.clone(), snapshots.clone(), settings)
        .expect("default content is valid");
    (service, repository, snapshots)
}

/// Answers every question of `record`, "yes" whenever `pick` says so.
pub(super) fn answer_all<F>(
    service: &QuizService<MemoryRepository, MemorySnapshotStore>,
    record: &SessionRecord,
    mut pick: F,
) where
    F: FnMut(&SessionQuestion) -> Answer,
{
    for question in &record.questions {
        service
            .answer(&record.id, question.id, pick(question))
            .expect("answer recorded");
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update_with<F>(&self, id: &SessionId, edit: F) -> Result<SessionRecord, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord),
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        edit(record);
        Ok(record.clone())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_with<F>(&self, _id: &SessionId, _edit: F) -> Result<SessionRecord, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord),
    {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Snapshot store that can read but never write.
pub(super) struct ReadOnlySnapshots;

impl SnapshotStore for ReadOnlySnapshots {
    fn load(&self, _key: SnapshotKey) -> Result<Option<Value>, SnapshotError> {
        Ok(None)
    }

    fn save(&self, _key: SnapshotKey, _value: Value) -> Result<(), SnapshotError> {
        Err(SnapshotError::Unavailable("read only".to_string()))
    }

    fn remove(&self, _key: SnapshotKey) -> Result<(), SnapshotError> {
        Err(SnapshotError::Unavailable("read only".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn quiz_router_with_service(
    service: QuizService<MemoryRepository, MemorySnapshotStore>,
) -> axum::Router {
    quiz_router(Arc::new(service))
}
