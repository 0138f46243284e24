use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Holland's six vocational-personality types.
///
/// The derived ordering is the canonical `R, I, A, S, E, C` sequence used for
/// iteration and deterministic tie-breaks; it carries no meaning beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiasecType {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl RiasecType {
    pub const fn ordered() -> [Self; 6] {
        [Self::R, Self::I, Self::A, Self::S, Self::E, Self::C]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::R => 'R',
            Self::I => 'I',
            Self::A => 'A',
            Self::S => 'S',
            Self::E => 'E',
            Self::C => 'C',
        }
    }

    pub const fn axis_pair(self) -> AxisPair {
        match self {
            Self::R | Self::I => AxisPair::RealisticInvestigative,
            Self::A | Self::C => AxisPair::ArtisticConventional,
            Self::S | Self::E => AxisPair::SocialEnterprising,
        }
    }
}

impl fmt::Display for RiasecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for RiasecType {
    type Err = UnknownRiasecType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "R" => Ok(Self::R),
            "I" => Ok(Self::I),
            "A" => Ok(Self::A),
            "S" => Ok(Self::S),
            "E" => Ok(Self::E),
            "C" => Ok(Self::C),
            _ => Err(UnknownRiasecType(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown RIASEC type '{0}'")]
pub struct UnknownRiasecType(pub String);

/// Antagonistic type pairings used to balance question sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPair {
    RealisticInvestigative,
    ArtisticConventional,
    SocialEnterprising,
}

impl AxisPair {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::RealisticInvestigative,
            Self::ArtisticConventional,
            Self::SocialEnterprising,
        ]
    }

    pub const fn members(self) -> (RiasecType, RiasecType) {
        match self {
            Self::RealisticInvestigative => (RiasecType::R, RiasecType::I),
            Self::ArtisticConventional => (RiasecType::A, RiasecType::C),
            Self::SocialEnterprising => (RiasecType::S, RiasecType::E),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RealisticInvestigative => "R×I",
            Self::ArtisticConventional => "A×C",
            Self::SocialEnterprising => "S×E",
        }
    }

    /// Pair matching `{first, second}` in either order, if they form one.
    pub fn of(first: RiasecType, second: RiasecType) -> Option<Self> {
        Self::ordered().into_iter().find(|pair| {
            let (a, b) = pair.members();
            (first == a && second == b) || (first == b && second == a)
        })
    }
}

impl fmt::Display for AxisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Binary response to a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "sim" | "s" => Ok(Self::Yes),
            "no" | "n" | "nao" | "não" => Ok(Self::No),
            other => Err(format!("expected yes or no, got '{other}'")),
        }
    }
}

/// Stable identifier of a question in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Question as stored in the bank, before a session assigns subtypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTemplate {
    pub id: QuestionId,
    pub text: String,
    pub yes_type: RiasecType,
    pub no_type: RiasecType,
    /// Subtype pinned by an administrator; sampled at random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yes_sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_sub: Option<String>,
}

impl QuestionTemplate {
    pub fn new(id: u32, text: &str, yes_type: RiasecType, no_type: RiasecType) -> Self {
        Self {
            id: QuestionId(id),
            text: text.to_string(),
            yes_type,
            no_type,
            yes_sub: None,
            no_sub: None,
        }
    }

    pub fn axis_pair(&self) -> Option<AxisPair> {
        AxisPair::of(self.yes_type, self.no_type)
    }
}

/// Per-session copy of a question with both subtypes resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionQuestion {
    pub id: QuestionId,
    pub text: String,
    pub yes_type: RiasecType,
    pub no_type: RiasecType,
    pub yes_sub: String,
    pub no_sub: String,
}

impl SessionQuestion {
    /// Type and subtype credited by `answer`.
    pub fn awarded(&self, answer: Answer) -> (RiasecType, &str) {
        match answer {
            Answer::Yes => (self.yes_type, &self.yes_sub),
            Answer::No => (self.no_type, &self.no_sub),
        }
    }

    pub fn involves(&self, riasec_type: RiasecType) -> bool {
        self.yes_type == riasec_type || self.no_type == riasec_type
    }
}

/// Answers recorded during one session, one per question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<QuestionId, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `answer`, replacing any earlier answer for the same question.
    pub fn record(&mut self, id: QuestionId, answer: Answer) -> Option<Answer> {
        self.0.insert(id, answer)
    }

    pub fn get(&self, id: QuestionId) -> Option<Answer> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Answer)> + '_ {
        self.0.iter().map(|(id, answer)| (*id, *answer))
    }
}

impl FromIterator<(QuestionId, Answer)> for Answers {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Answer)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Display and subtype data for one RIASEC type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "type")]
    pub riasec_type: RiasecType,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub color: String,
    pub subdivisions: Vec<String>,
    pub careers: Vec<String>,
}

/// Subtype reference carried by a career, tagged with its owning type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedSubtype {
    pub label: String,
    #[serde(rename = "type")]
    pub riasec_type: RiasecType,
}

impl RelatedSubtype {
    pub fn new(label: &str, riasec_type: RiasecType) -> Self {
        Self {
            label: label.to_string(),
            riasec_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub riasec_type: RiasecType,
    pub description: String,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub weaknesses: String,
    pub related_subtypes: Vec<RelatedSubtype>,
}

impl CareerDetail {
    /// Identity used for de-duplication: the same name may exist under two types.
    pub fn key(&self) -> (&str, RiasecType) {
        (self.name.as_str(), self.riasec_type)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.related_subtypes
            .iter()
            .map(|related| related.label.as_str())
    }
}
