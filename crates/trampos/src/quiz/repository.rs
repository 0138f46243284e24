use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answers, QuestionId, SessionQuestion};

/// Identifier wrapper for quiz sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository record holding the sampled questions and answers so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,
    pub started_at: DateTime<Utc>,
    pub questions: Vec<SessionQuestion>,
    pub answers: Answers,
}

impl SessionRecord {
    pub fn question(&self, id: QuestionId) -> Option<&SessionQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn is_complete(&self) -> bool {
        self.questions
            .iter()
            .all(|question| self.answers.get(question.id).is_some())
    }

    /// First question in session order still waiting for an answer.
    pub fn next_question(&self) -> Option<&SessionQuestion> {
        self.questions
            .iter()
            .find(|question| self.answers.get(question.id).is_none())
    }
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    /// Applies `edit` to the stored record under the repository's lock and returns
    /// the updated record. Fails with [`RepositoryError::NotFound`] for unknown ids.
    fn update_with<F>(&self, id: &SessionId, edit: F) -> Result<SessionRecord, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord);
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
