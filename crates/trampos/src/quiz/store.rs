use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::catalog::{default_careers_for, default_questions, ProfileCatalog, SubtypeRenames};
use super::domain::{CareerDetail, Profile, QuestionId, QuestionTemplate, RiasecType};
use super::sampler::{pair_counts, validate_bank, QUESTIONS_PER_PAIR};
use super::validation::{
    apply_question_patch, normalize_label, validate_career, validate_careers, validate_profile,
    validate_question, CatalogPolicy, IntegrityError, QuestionPatch, ValidationError,
};

/// Keys under which admin edits are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SnapshotKey {
    Questions,
    Careers,
    Profiles,
}

impl SnapshotKey {
    pub const fn ordered() -> [Self; 3] {
        [Self::Questions, Self::Careers, Self::Profiles]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Questions => "trampos_admin_questions",
            Self::Careers => "trampos_admin_careers",
            Self::Profiles => "trampos_admin_profiles",
        }
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence for admin snapshots.
pub trait SnapshotStore: Send + Sync {
    fn load(&self, key: SnapshotKey) -> Result<Option<Value>, SnapshotError>;
    fn save(&self, key: SnapshotKey, value: Value) -> Result<(), SnapshotError>;
    fn remove(&self, key: SnapshotKey) -> Result<(), SnapshotError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot {key} could not be decoded: {message}")]
    Decode { key: SnapshotKey, message: String },
    #[error("snapshot {key} could not be encoded: {message}")]
    Encode { key: SnapshotKey, message: String },
    #[error("snapshot {key} failed validation: {source}")]
    Invalid {
        key: SnapshotKey,
        #[source]
        source: ValidationError,
    },
    #[error("snapshot storage unavailable: {0}")]
    Unavailable(String),
}

/// Process-local snapshot store.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: Mutex<BTreeMap<SnapshotKey, Value>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(self, key: SnapshotKey, value: Value) -> Self {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
        self
    }

    pub fn get(&self, key: SnapshotKey) -> Option<Value> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, key: SnapshotKey) -> Result<Option<Value>, SnapshotError> {
        Ok(self.get(key))
    }

    fn save(&self, key: SnapshotKey, value: Value) -> Result<(), SnapshotError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value);
        Ok(())
    }

    fn remove(&self, key: SnapshotKey) -> Result<(), SnapshotError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
        Ok(())
    }
}

/// Current profiles, question bank, and career catalog.
///
/// Every mutation validates first and leaves the store untouched on error.
/// Career labels and question pins always name subtypes of the current
/// profiles: a profile edit renames them along with the profile.
#[derive(Debug, Clone)]
pub struct QuizStore {
    profiles: ProfileCatalog,
    questions: Vec<QuestionTemplate>,
    careers: Vec<CareerDetail>,
    policy: CatalogPolicy,
    /// Keys changed since the last [`QuizStore::take_pending`].
    pending: BTreeSet<SnapshotKey>,
}

impl QuizStore {
    /// Builds a store from explicit content, checking the bank and career catalog.
    pub fn new(
        profiles: ProfileCatalog,
        questions: Vec<QuestionTemplate>,
        careers: Vec<CareerDetail>,
        policy: CatalogPolicy,
    ) -> Result<Self, IntegrityError> {
        validate_bank(&questions)?;
        if careers.is_empty() {
            return Err(IntegrityError::EmptyCareerCatalog);
        }
        Ok(Self {
            profiles,
            questions,
            careers,
            policy,
            pending: BTreeSet::new(),
        })
    }

    pub fn with_defaults(policy: CatalogPolicy) -> Result<Self, IntegrityError> {
        let profiles = ProfileCatalog::defaults();
        let careers = default_careers_for(&profiles);
        Self::new(profiles, default_questions(), careers, policy)
    }

    /// Restores persisted edits, falling back to compiled-in content per key.
    ///
    /// Compiled-in careers are read through the restored profiles, so a stored
    /// profile edit still applies when the careers were never edited.
    pub fn load<S>(snapshots: &S, policy: CatalogPolicy) -> Result<Self, IntegrityError>
    where
        S: SnapshotStore + ?Sized,
    {
        let profiles = restore(snapshots, SnapshotKey::Profiles, decode_profiles)
            .map(ProfileCatalog::new)
            .unwrap_or_default();

        let questions = restore(snapshots, SnapshotKey::Questions, decode_questions)
            .unwrap_or_else(default_questions);

        let careers = restore(snapshots, SnapshotKey::Careers, |careers: Vec<CareerDetail>| {
            validate_careers(careers, &profiles, &policy)
        })
        .unwrap_or_else(|| default_careers_for(&profiles));

        Self::new(profiles, questions, careers, policy)
    }

    pub fn profiles(&self) -> &ProfileCatalog {
        &self.profiles
    }

    pub fn profile(&self, riasec_type: RiasecType) -> Option<&Profile> {
        self.profiles.get(riasec_type)
    }

    pub fn questions(&self) -> &[QuestionTemplate] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&QuestionTemplate> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn careers(&self) -> &[CareerDetail] {
        &self.careers
    }

    pub fn policy(&self) -> &CatalogPolicy {
        &self.policy
    }

    pub fn set_profile(
        &mut self,
        riasec_type: RiasecType,
        profile: Profile,
    ) -> Result<Profile, ValidationError> {
        let profile = validate_profile(riasec_type, profile, &self.profiles)?;
        let mut profiles = self.profiles.clone();
        profiles.replace(profile.clone());
        self.swap_profiles(profiles);
        self.pending.insert(SnapshotKey::Profiles);
        debug!(riasec_type = %riasec_type, "profile replaced");
        Ok(profile)
    }

    pub fn update_question(
        &mut self,
        id: QuestionId,
        patch: QuestionPatch,
    ) -> Result<&QuestionTemplate, ValidationError> {
        let position = self
            .questions
            .iter()
            .position(|question| question.id == id)
            .ok_or(ValidationError::UnknownQuestion(id))?;

        let edited = apply_question_patch(&self.questions[position], patch, &self.profiles)?;

        if edited.axis_pair() != self.questions[position].axis_pair() {
            let mut candidate = self.questions.clone();
            candidate[position] = edited.clone();
            check_balance(&candidate)?;
        }

        self.questions[position] = edited;
        self.pending.insert(SnapshotKey::Questions);
        Ok(&self.questions[position])
    }

    pub fn update_career(
        &mut self,
        index: usize,
        career: CareerDetail,
    ) -> Result<&CareerDetail, ValidationError> {
        let len = self.careers.len();
        if index >= len {
            return Err(ValidationError::UnknownCareer { index, len });
        }
        let career = validate_career(career, &self.profiles, &self.policy)?;
        self.careers[index] = career;
        self.pending.insert(SnapshotKey::Careers);
        Ok(&self.careers[index])
    }

    /// Swaps the whole career catalog after every record validates.
    pub fn replace_careers(&mut self, careers: Vec<CareerDetail>) -> Result<usize, ValidationError> {
        let careers = validate_careers(careers, &self.profiles, &self.policy)?;
        self.careers = careers;
        self.pending.insert(SnapshotKey::Careers);
        Ok(self.careers.len())
    }

    /// Restores the compiled-in bank. Compiled-in questions carry no pins.
    pub fn reset_questions(&mut self) {
        self.questions = default_questions();
        self.pending.remove(&SnapshotKey::Questions);
    }

    /// Restores the compiled-in careers, expressed in the current profile labels.
    pub fn reset_careers(&mut self) {
        self.careers = default_careers_for(&self.profiles);
        self.pending.remove(&SnapshotKey::Careers);
    }

    /// Restores the compiled-in profiles; careers and pins follow the renamed labels back.
    pub fn reset_profiles(&mut self) {
        self.swap_profiles(ProfileCatalog::defaults());
        self.pending.remove(&SnapshotKey::Profiles);
    }

    /// Keys whose content changed since the previous call, with their current snapshot.
    ///
    /// A reset removes its own key: the compiled-in content needs no snapshot.
    pub fn take_pending(&mut self) -> Vec<(SnapshotKey, Result<Value, serde_json::Error>)> {
        std::mem::take(&mut self.pending)
            .into_iter()
            .map(|key| (key, self.snapshot(key)))
            .collect()
    }

    fn swap_profiles(&mut self, profiles: ProfileCatalog) {
        let renames = SubtypeRenames::between(&self.profiles, &profiles);
        self.profiles = profiles;
        if renames.is_empty() {
            return;
        }

        let mut careers = 0;
        for career in &mut self.careers {
            if renames.apply_to_career(career) {
                careers += 1;
            }
        }
        let mut pins = 0;
        for question in &mut self.questions {
            if renames.apply_to_question(question) {
                pins += 1;
            }
        }

        if careers > 0 {
            self.pending.insert(SnapshotKey::Careers);
        }
        if pins > 0 {
            self.pending.insert(SnapshotKey::Questions);
        }
        debug!(
            renamed = renames.len(),
            careers, pins, "subtype renames carried into careers and pins"
        );
    }

    /// JSON value persisted under `key`.
    pub fn snapshot(&self, key: SnapshotKey) -> Result<Value, serde_json::Error> {
        match key {
            SnapshotKey::Questions => serde_json::to_value(&self.questions),
            SnapshotKey::Careers => serde_json::to_value(&self.careers),
            SnapshotKey::Profiles => serde_json::to_value(&self.profiles),
        }
    }
}

fn restore<S, T, D, F>(snapshots: &S, key: SnapshotKey, check: F) -> Option<T>
where
    S: SnapshotStore + ?Sized,
    D: DeserializeOwned,
    F: FnOnce(D) -> Result<T, ValidationError>,
{
    let value = match snapshots.load(key) {
        Ok(Some(value)) => value,
        Ok(None) => return None,
        Err(error) => {
            warn!(key = %key, error = %error, "snapshot unavailable; using defaults");
            return None;
        }
    };

    let decoded = match serde_json::from_value::<D>(value) {
        Ok(decoded) => decoded,
        Err(error) => {
            let error = SnapshotError::Decode {
                key,
                message: error.to_string(),
            };
            warn!(error = %error, "discarding snapshot; using defaults");
            return None;
        }
    };

    match check(decoded) {
        Ok(restored) => {
            debug!(key = %key, "snapshot restored");
            Some(restored)
        }
        Err(source) => {
            let error = SnapshotError::Invalid { key, source };
            warn!(error = %error, "discarding snapshot; using defaults");
            None
        }
    }
}

fn decode_profiles(
    mut profiles: BTreeMap<RiasecType, Profile>,
) -> Result<BTreeMap<RiasecType, Profile>, ValidationError> {
    for profile in profiles.values_mut() {
        for label in &mut profile.subdivisions {
            *label = normalize_label(label);
        }
    }
    let catalog = ProfileCatalog::new(profiles.clone());
    let mut restored = BTreeMap::new();
    for riasec_type in RiasecType::ordered() {
        let profile = profiles
            .get(&riasec_type)
            .cloned()
            .ok_or(ValidationError::EmptyField { field: "profiles" })?;
        restored.insert(riasec_type, validate_profile(riasec_type, profile, &catalog)?);
    }
    Ok(restored)
}

fn decode_questions(
    questions: Vec<QuestionTemplate>,
) -> Result<Vec<QuestionTemplate>, ValidationError> {
    let mut seen = BTreeSet::new();
    for (index, question) in questions.iter().enumerate() {
        let checked = validate_question(question).and_then(|()| {
            if seen.insert(question.id) {
                Ok(())
            } else {
                Err(ValidationError::DuplicateQuestion(question.id))
            }
        });
        checked.map_err(|source| ValidationError::Record {
            index,
            source: Box::new(source),
        })?;
    }
    check_balance(&questions)?;
    Ok(questions)
}

fn check_balance(questions: &[QuestionTemplate]) -> Result<(), ValidationError> {
    match pair_counts(questions)
        .into_iter()
        .find(|(_, found)| *found < QUESTIONS_PER_PAIR)
    {
        Some((pair, found)) => Err(ValidationError::UnbalancedBank {
            pair,
            found,
            required: QUESTIONS_PER_PAIR,
        }),
        None => Ok(()),
    }
}
