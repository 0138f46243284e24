use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::catalog::{ProfileCatalog, SUBTYPES_PER_TYPE};
use super::domain::{AxisPair, CareerDetail, Profile, QuestionId, QuestionTemplate, RiasecType};

/// Related subtypes every career must list.
pub const SUBTYPES_PER_CAREER: usize = 4;

/// Admin-input shape violations. The rejected edit leaves prior state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("profile {riasec_type} needs exactly {expected} subtypes, found {found}")]
    SubtypeCount {
        riasec_type: RiasecType,
        expected: usize,
        found: usize,
    },
    #[error("duplicate subtype \"{label}\"")]
    DuplicateSubtype { label: String },
    #[error("subtype \"{label}\" already belongs to type {owner}")]
    SubtypeOwnedElsewhere { label: String, owner: RiasecType },
    #[error("unknown subtype \"{label}\" for type {riasec_type}")]
    UnknownSubtype {
        label: String,
        riasec_type: RiasecType,
    },
    #[error("profile edit targets {target} but carries type {found}")]
    TypeMismatch {
        target: RiasecType,
        found: RiasecType,
    },
    #[error("career \"{name}\" needs exactly {expected} related subtypes, found {found}")]
    RelatedSubtypeCount {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("career \"{name}\" lists {found} subtypes of its own type, at least {required} required")]
    OwnTypeCoverage {
        name: String,
        found: usize,
        required: usize,
    },
    #[error("question {0} not found")]
    UnknownQuestion(QuestionId),
    #[error("question {0} appears more than once")]
    DuplicateQuestion(QuestionId),
    #[error("career index {index} out of range (catalog holds {len})")]
    UnknownCareer { index: usize, len: usize },
    #[error("question {id} awards {riasec_type} on both sides")]
    SameTypeOnBothSides {
        id: QuestionId,
        riasec_type: RiasecType,
    },
    #[error("question {id} pairs {yes_type} with {no_type}, which is not an axis pair")]
    NotAnAxisPair {
        id: QuestionId,
        yes_type: RiasecType,
        no_type: RiasecType,
    },
    #[error("edit would leave axis pair {pair} with {found} questions, {required} required")]
    UnbalancedBank {
        pair: AxisPair,
        found: usize,
        required: usize,
    },
    #[error("career catalog must not be empty")]
    EmptyCatalog,
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

/// Data-integrity failures that make a valid session impossible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("axis pair {pair} has {found} eligible questions, {required} required")]
    InsufficientQuestions {
        pair: AxisPair,
        found: usize,
        required: usize,
    },
    #[error("career catalog is empty")]
    EmptyCareerCatalog,
    #[error("profile {0} has no subtypes to sample from")]
    EmptySubdivisions(RiasecType),
}

const DEFAULT_MIN_OWN_TYPE_SUBTYPES: usize = 2;

/// Policy dial for career-record validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPolicy {
    pub min_own_type_subtypes: usize,
}

impl CatalogPolicy {
    pub fn new(min_own_type_subtypes: usize) -> Self {
        Self {
            min_own_type_subtypes: min_own_type_subtypes.min(SUBTYPES_PER_CAREER),
        }
    }
}

impl Default for CatalogPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_OWN_TYPE_SUBTYPES)
    }
}

/// Partial update of a bank question. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPatch {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub yes_type: Option<RiasecType>,
    #[serde(default)]
    pub no_type: Option<RiasecType>,
    #[serde(default)]
    pub yes_sub: Option<String>,
    #[serde(default)]
    pub no_sub: Option<String>,
}

pub fn normalize_label(label: &str) -> String {
    label.trim().to_uppercase()
}

/// Checks a profile edit and returns the normalized profile to store.
pub fn validate_profile(
    target: RiasecType,
    profile: Profile,
    catalog: &ProfileCatalog,
) -> Result<Profile, ValidationError> {
    if profile.riasec_type != target {
        return Err(ValidationError::TypeMismatch {
            target,
            found: profile.riasec_type,
        });
    }

    let name = profile.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField { field: "name" });
    }

    if profile.subdivisions.len() != SUBTYPES_PER_TYPE {
        return Err(ValidationError::SubtypeCount {
            riasec_type: target,
            expected: SUBTYPES_PER_TYPE,
            found: profile.subdivisions.len(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut subdivisions = Vec::with_capacity(SUBTYPES_PER_TYPE);
    for raw in &profile.subdivisions {
        let label = normalize_label(raw);
        if label.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "subdivisions",
            });
        }
        if !seen.insert(label.clone()) {
            return Err(ValidationError::DuplicateSubtype { label });
        }
        if let Some(owner) = catalog.subtype_owner(&label) {
            if owner != target {
                return Err(ValidationError::SubtypeOwnedElsewhere { label, owner });
            }
        }
        subdivisions.push(label);
    }

    Ok(Profile {
        name: name.to_string(),
        subdivisions,
        ..profile
    })
}

/// Checks one career record against the catalog and returns it with normalized labels.
pub fn validate_career(
    career: CareerDetail,
    catalog: &ProfileCatalog,
    policy: &CatalogPolicy,
) -> Result<CareerDetail, ValidationError> {
    let name = career.name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::EmptyField { field: "name" });
    }
    if career.description.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: "description",
        });
    }
    if career.related_subtypes.len() != SUBTYPES_PER_CAREER {
        return Err(ValidationError::RelatedSubtypeCount {
            name,
            expected: SUBTYPES_PER_CAREER,
            found: career.related_subtypes.len(),
        });
    }

    let mut seen = BTreeSet::new();
    let mut related_subtypes = Vec::with_capacity(SUBTYPES_PER_CAREER);
    for related in career.related_subtypes {
        let label = normalize_label(&related.label);
        if label.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "related_subtypes",
            });
        }
        if !seen.insert(label.clone()) {
            return Err(ValidationError::DuplicateSubtype { label });
        }
        if !catalog.contains_subtype(related.riasec_type, &label) {
            return Err(ValidationError::UnknownSubtype {
                label,
                riasec_type: related.riasec_type,
            });
        }
        related_subtypes.push(super::domain::RelatedSubtype {
            label,
            riasec_type: related.riasec_type,
        });
    }

    let own = related_subtypes
        .iter()
        .filter(|related| related.riasec_type == career.riasec_type)
        .count();
    if own < policy.min_own_type_subtypes {
        return Err(ValidationError::OwnTypeCoverage {
            name,
            found: own,
            required: policy.min_own_type_subtypes,
        });
    }

    Ok(CareerDetail {
        name,
        related_subtypes,
        ..career
    })
}

/// Validates a whole catalog, reporting the first failing record by index.
pub fn validate_careers(
    careers: Vec<CareerDetail>,
    catalog: &ProfileCatalog,
    policy: &CatalogPolicy,
) -> Result<Vec<CareerDetail>, ValidationError> {
    if careers.is_empty() {
        return Err(ValidationError::EmptyCatalog);
    }

    careers
        .into_iter()
        .enumerate()
        .map(|(index, career)| {
            validate_career(career, catalog, policy).map_err(|source| ValidationError::Record {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Applies `patch` to `question`, returning the edited copy.
pub fn apply_question_patch(
    question: &QuestionTemplate,
    patch: QuestionPatch,
    catalog: &ProfileCatalog,
) -> Result<QuestionTemplate, ValidationError> {
    let mut edited = question.clone();

    if let Some(text) = patch.text {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyField { field: "text" });
        }
        edited.text = text.to_string();
    }

    let types_changed = patch.yes_type.is_some() || patch.no_type.is_some();
    if let Some(yes_type) = patch.yes_type {
        edited.yes_type = yes_type;
    }
    if let Some(no_type) = patch.no_type {
        edited.no_type = no_type;
    }

    if edited.yes_type == edited.no_type {
        return Err(ValidationError::SameTypeOnBothSides {
            id: edited.id,
            riasec_type: edited.yes_type,
        });
    }
    if edited.axis_pair().is_none() {
        return Err(ValidationError::NotAnAxisPair {
            id: edited.id,
            yes_type: edited.yes_type,
            no_type: edited.no_type,
        });
    }

    // A type change invalidates pins that are not re-supplied in the same patch.
    if types_changed {
        if patch.yes_type.is_some() && patch.yes_sub.is_none() {
            edited.yes_sub = None;
        }
        if patch.no_type.is_some() && patch.no_sub.is_none() {
            edited.no_sub = None;
        }
    }

    if let Some(label) = patch.yes_sub {
        edited.yes_sub = pinned_subtype(&label, edited.yes_type, catalog)?;
    }
    if let Some(label) = patch.no_sub {
        edited.no_sub = pinned_subtype(&label, edited.no_type, catalog)?;
    }

    Ok(edited)
}

/// Checks a stored question record. Stale pins are tolerated; the sampler redraws them.
pub fn validate_question(question: &QuestionTemplate) -> Result<(), ValidationError> {
    if question.text.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "text" });
    }
    if question.yes_type == question.no_type {
        return Err(ValidationError::SameTypeOnBothSides {
            id: question.id,
            riasec_type: question.yes_type,
        });
    }
    if question.axis_pair().is_none() {
        return Err(ValidationError::NotAnAxisPair {
            id: question.id,
            yes_type: question.yes_type,
            no_type: question.no_type,
        });
    }
    Ok(())
}

fn pinned_subtype(
    raw: &str,
    riasec_type: RiasecType,
    catalog: &ProfileCatalog,
) -> Result<Option<String>, ValidationError> {
    let label = normalize_label(raw);
    if label.is_empty() {
        return Ok(None);
    }
    if !catalog.contains_subtype(riasec_type, &label) {
        return Err(ValidationError::UnknownSubtype { label, riasec_type });
    }
    Ok(Some(label))
}
