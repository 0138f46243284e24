use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::domain::{
    Answer, Answers, CareerDetail, Profile, QuestionId, QuestionTemplate, RiasecType,
    SessionQuestion,
};
use super::matching::{
    CareerMatcher, MatchPolicy, MatchStrategy, MatchTier, ResultShape, ShapedResults, TierPage,
    DEFAULT_PAGE_SIZE,
};
use super::repository::{RepositoryError, SessionId, SessionRecord, SessionRepository};
use super::sampler::SessionSampler;
use super::scoring::{
    compute_scores, ranked_types, resolve_dominant, top_subtypes, ScoreState,
    DEFAULT_TOP_SUBTYPES,
};
use super::store::{QuizStore, SnapshotError, SnapshotKey, SnapshotStore};
use super::validation::{CatalogPolicy, IntegrityError, QuestionPatch, ValidationError};

/// Runtime settings for the quiz service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizSettings {
    pub matching: MatchPolicy,
    pub catalog: CatalogPolicy,
    /// Fixed RNG seed for reproducible sessions; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Service composing the catalog store, session repository, and career matcher.
pub struct QuizService<R, S> {
    store: RwLock<QuizStore>,
    sessions: Arc<R>,
    snapshots: Arc<S>,
    matcher: CareerMatcher,
    rng: Mutex<StdRng>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<R, S> QuizService<R, S>
where
    R: SessionRepository + 'static,
    S: SnapshotStore + 'static,
{
    /// Restores persisted admin edits from `snapshots` and checks the result can run a quiz.
    pub fn new(
        sessions: Arc<R>,
        snapshots: Arc<S>,
        settings: QuizSettings,
    ) -> Result<Self, IntegrityError> {
        let store = QuizStore::load(snapshots.as_ref(), settings.catalog)?;
        Self::with_store(store, sessions, snapshots, settings)
    }

    pub fn with_store(
        store: QuizStore,
        sessions: Arc<R>,
        snapshots: Arc<S>,
        settings: QuizSettings,
    ) -> Result<Self, IntegrityError> {
        SessionSampler::new(store.profiles(), store.questions())?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            questions = store.questions().len(),
            careers = store.careers().len(),
            strategy = %settings.matching.strategy,
            shape = %settings.matching.shape,
            "quiz service ready"
        );

        Ok(Self {
            store: RwLock::new(store),
            sessions,
            snapshots,
            matcher: CareerMatcher::new(settings.matching),
            rng: Mutex::new(rng),
        })
    }

    pub fn policy(&self) -> &MatchPolicy {
        self.matcher.policy()
    }

    /// Sample a fresh session and register it with the repository.
    pub fn start_session(&self) -> Result<SessionRecord, QuizServiceError> {
        let questions = {
            let store = self.read_store();
            let sampler = SessionSampler::new(store.profiles(), store.questions())?;
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            sampler.sample(&mut *rng)
        };

        let record = SessionRecord {
            id: next_session_id(),
            started_at: Utc::now(),
            questions,
            answers: Answers::new(),
        };

        let stored = self.sessions.insert(record)?;
        info!(session_id = %stored.id, questions = stored.questions.len(), "quiz session started");
        Ok(stored)
    }

    pub fn session(&self, session_id: &SessionId) -> Result<SessionRecord, QuizServiceError> {
        self.sessions
            .fetch(session_id)?
            .ok_or_else(|| QuizServiceError::UnknownSession(session_id.clone()))
    }

    /// Record one answer. Answering the same question again replaces the earlier answer.
    pub fn answer(
        &self,
        session_id: &SessionId,
        question_id: QuestionId,
        answer: Answer,
    ) -> Result<SessionProgress, QuizServiceError> {
        let record = self.session(session_id)?;
        if record.question(question_id).is_none() {
            return Err(QuizServiceError::QuestionNotInSession {
                session: session_id.clone(),
                question: question_id,
            });
        }

        let mut previous = None;
        let record = self
            .sessions
            .update_with(session_id, |record| {
                previous = record.answers.record(question_id, answer);
            })
            .map_err(|error| match error {
                RepositoryError::NotFound => QuizServiceError::UnknownSession(session_id.clone()),
                other => QuizServiceError::Repository(other),
            })?;
        debug!(
            session_id = %session_id,
            question_id = %question_id,
            ?answer,
            replaced = previous.is_some(),
            "answer recorded"
        );

        Ok(SessionProgress::from_record(&record))
    }

    pub fn scores(&self, session_id: &SessionId) -> Result<ScoreState, QuizServiceError> {
        let record = self.session(session_id)?;
        Ok(compute_scores(&record.questions, &record.answers))
    }

    /// Scores, dominant type, and shaped career ranking for a session.
    ///
    /// Works for partially answered sessions; unanswered questions do not count.
    pub fn results(&self, session_id: &SessionId) -> Result<QuizResults, QuizServiceError> {
        let record = self.session(session_id)?;
        let scores = compute_scores(&record.questions, &record.answers);
        let dominant = resolve_dominant(&scores.type_scores);
        let policy = self.matcher.policy();

        let store = self.read_store();
        let ranking = self
            .matcher
            .rank(store.careers(), store.profiles(), &scores, dominant);

        let types = ranked_types(&scores.type_scores)
            .into_iter()
            .map(|(riasec_type, score)| {
                let profile = store.profile(riasec_type);
                let subtypes = store
                    .profiles()
                    .subdivisions(riasec_type)
                    .iter()
                    .map(|label| SubtypeScore {
                        label: label.clone(),
                        count: scores.count_for(riasec_type, label),
                    })
                    .collect();
                TypeResult {
                    riasec_type,
                    name: profile.map(|p| p.name.clone()).unwrap_or_default(),
                    color: profile.map(|p| p.color.clone()).unwrap_or_default(),
                    score,
                    yes: scores.yes_counts.get(riasec_type),
                    no: scores.no_counts.get(riasec_type),
                    capacity: scores.capacity.get(riasec_type),
                    percentage: scores.percentage(riasec_type),
                    subtypes,
                }
            })
            .collect();

        let n = match policy.strategy {
            MatchStrategy::TopSubtypes { n } => n,
            _ => DEFAULT_TOP_SUBTYPES,
        };

        info!(
            session_id = %session_id,
            dominant = %dominant,
            answered = scores.answered,
            careers = ranking.len(),
            "quiz results computed"
        );

        Ok(QuizResults {
            session_id: record.id.clone(),
            answered: scores.answered,
            total: record.questions.len(),
            complete: record.is_complete(),
            dominant,
            types,
            top_subtypes: top_subtypes(&scores.subtype_counts, &scores.recency, n),
            strategy: policy.strategy,
            careers: ranking.shape(&policy.shape),
        })
    }

    /// One page of a tier, for "show more" navigation.
    pub fn career_page(
        &self,
        session_id: &SessionId,
        tier: MatchTier,
        offset: usize,
    ) -> Result<TierPage, QuizServiceError> {
        let record = self.session(session_id)?;
        let scores = compute_scores(&record.questions, &record.answers);
        let dominant = resolve_dominant(&scores.type_scores);
        let page_size = match self.matcher.policy().shape {
            ResultShape::Paged { page_size } => page_size,
            _ => DEFAULT_PAGE_SIZE,
        };

        let store = self.read_store();
        let ranking = self
            .matcher
            .rank(store.careers(), store.profiles(), &scores, dominant);
        Ok(ranking.page(tier, offset, page_size))
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.read_store().profiles().iter().cloned().collect()
    }

    pub fn profile(&self, riasec_type: RiasecType) -> Option<Profile> {
        self.read_store().profile(riasec_type).cloned()
    }

    pub fn questions(&self) -> Vec<QuestionTemplate> {
        self.read_store().questions().to_vec()
    }

    pub fn careers(&self) -> Vec<CareerDetail> {
        self.read_store().careers().to_vec()
    }

    pub fn subtype_owner(&self, label: &str) -> Option<RiasecType> {
        self.read_store().profiles().subtype_owner(label)
    }

    pub fn edit_question(
        &self,
        question_id: QuestionId,
        patch: QuestionPatch,
    ) -> Result<QuestionTemplate, QuizServiceError> {
        let edited = self.mutate(|store| store.update_question(question_id, patch).cloned())?;
        info!(question_id = %question_id, "question updated");
        Ok(edited)
    }

    pub fn edit_career(
        &self,
        index: usize,
        career: CareerDetail,
    ) -> Result<CareerDetail, QuizServiceError> {
        let edited = self.mutate(|store| store.update_career(index, career).cloned())?;
        info!(index, career = %edited.name, "career updated");
        Ok(edited)
    }

    /// Replace one profile. Renamed subtypes are carried into careers and pinned questions.
    pub fn edit_profile(
        &self,
        riasec_type: RiasecType,
        profile: Profile,
    ) -> Result<Profile, QuizServiceError> {
        let edited = self.mutate(|store| store.set_profile(riasec_type, profile))?;
        info!(riasec_type = %riasec_type, "profile updated");
        Ok(edited)
    }

    /// Replace the career catalog, all or nothing.
    pub fn replace_careers(&self, careers: Vec<CareerDetail>) -> Result<usize, QuizServiceError> {
        let count = self.mutate(|store| store.replace_careers(careers))?;
        info!(count, "career catalog replaced");
        Ok(count)
    }

    pub fn reset_questions(&self) {
        self.reset(SnapshotKey::Questions, QuizStore::reset_questions);
    }

    pub fn reset_careers(&self) {
        self.reset(SnapshotKey::Careers, QuizStore::reset_careers);
    }

    pub fn reset_profiles(&self) {
        self.reset(SnapshotKey::Profiles, QuizStore::reset_profiles);
    }

    fn mutate<T, F>(&self, edit: F) -> Result<T, QuizServiceError>
    where
        F: FnOnce(&mut QuizStore) -> Result<T, ValidationError>,
    {
        let (edited, pending) = {
            let mut store = self.write_store();
            let edited = edit(&mut *store).map_err(|error| {
                warn!(error = %error, "admin edit rejected");
                error
            })?;
            (edited, store.take_pending())
        };

        self.persist(pending);
        Ok(edited)
    }

    fn reset(&self, key: SnapshotKey, reset: fn(&mut QuizStore)) {
        let pending = {
            let mut store = self.write_store();
            reset(&mut *store);
            store.take_pending()
        };

        match self.snapshots.remove(key) {
            Ok(()) => info!(key = %key, "snapshot reset to defaults"),
            Err(error) => warn!(key = %key, error = %error, "failed to remove snapshot"),
        }
        self.persist(pending);
    }

    fn persist(&self, pending: Vec<(SnapshotKey, Result<Value, serde_json::Error>)>) {
        for (key, snapshot) in pending {
            let saved = snapshot
                .map_err(|error| SnapshotError::Encode {
                    key,
                    message: error.to_string(),
                })
                .and_then(|value| self.snapshots.save(key, value));
            if let Err(error) = saved {
                warn!(key = %key, error = %error, "failed to persist snapshot");
            }
        }
    }

    fn read_store(&self) -> RwLockReadGuard<'_, QuizStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, QuizStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Where a session stands after an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub session_id: SessionId,
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<SessionQuestion>,
}

impl SessionProgress {
    pub fn from_record(record: &SessionRecord) -> Self {
        let answered = record
            .questions
            .iter()
            .filter(|question| record.answers.get(question.id).is_some())
            .count();
        Self {
            session_id: record.id.clone(),
            answered,
            total: record.questions.len(),
            complete: record.is_complete(),
            next_question: record.next_question().cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtypeScore {
    pub label: String,
    pub count: u32,
}

/// Result card for one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeResult {
    #[serde(rename = "type")]
    pub riasec_type: RiasecType,
    pub name: String,
    pub color: String,
    pub score: u32,
    pub yes: u32,
    pub no: u32,
    pub capacity: u32,
    pub percentage: u32,
    pub subtypes: Vec<SubtypeScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResults {
    pub session_id: SessionId,
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
    pub dominant: RiasecType,
    /// All six types, highest score first.
    pub types: Vec<TypeResult>,
    pub top_subtypes: Vec<String>,
    pub strategy: MatchStrategy,
    pub careers: ShapedResults,
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("session {0} not found")]
    UnknownSession(SessionId),
    #[error("question {question} is not part of session {session}")]
    QuestionNotInSession {
        session: SessionId,
        question: QuestionId,
    },
}
