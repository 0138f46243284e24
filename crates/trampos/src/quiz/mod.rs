//! RIASEC vocational quiz: balanced sampling, scoring, and career matching.
//!
//! Content lives in a [`store::QuizStore`] that admin edits mutate through
//! validated operations. Sessions draw eighteen questions from it, answers
//! fold into a [`scoring::ScoreState`], and the [`matching::CareerMatcher`]
//! turns that state into a tiered career ranking.

pub mod catalog;
pub mod domain;
pub mod matching;
pub mod repository;
pub mod router;
pub mod sampler;
pub mod scoring;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::ProfileCatalog;
pub use domain::{
    Answer, Answers, AxisPair, CareerDetail, Profile, QuestionId, QuestionTemplate,
    RelatedSubtype, RiasecType, SessionQuestion,
};
pub use matching::{
    CareerMatcher, CareerRanking, MatchPolicy, MatchStrategy, MatchTier, RankedCareer,
    ResultShape, ShapedResults, TierBucket, TierPage,
};
pub use repository::{RepositoryError, SessionId, SessionRecord, SessionRepository};
pub use router::quiz_router;
pub use sampler::{SessionSampler, QUESTIONS_PER_PAIR, QUIZ_SIZE};
pub use scoring::{compute_scores, resolve_dominant, top_subtypes, ScoreState, TypeScores};
pub use service::{
    QuizResults, QuizService, QuizServiceError, QuizSettings, SessionProgress, TypeResult,
};
pub use store::{MemorySnapshotStore, QuizStore, SnapshotError, SnapshotKey, SnapshotStore};
pub use validation::{CatalogPolicy, IntegrityError, QuestionPatch, ValidationError};
