//! Compiled-in content (profiles, question bank, careers) and the profile lookup table.

mod careers;
mod profiles;
mod questions;

pub use careers::default_careers;
pub use profiles::default_profiles;
pub use questions::default_questions;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{CareerDetail, Profile, QuestionTemplate, RiasecType};

/// Number of subtypes every profile must carry.
pub const SUBTYPES_PER_TYPE: usize = 10;

/// The six profiles keyed by type, with a reverse index from subtype label to owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<RiasecType, Profile>", into = "BTreeMap<RiasecType, Profile>")]
pub struct ProfileCatalog {
    profiles: BTreeMap<RiasecType, Profile>,
    owners: BTreeMap<String, RiasecType>,
}

impl ProfileCatalog {
    pub fn new(profiles: BTreeMap<RiasecType, Profile>) -> Self {
        let owners = index_owners(&profiles);
        Self { profiles, owners }
    }

    pub fn defaults() -> Self {
        Self::new(default_profiles())
    }

    pub const fn all_types(&self) -> [RiasecType; 6] {
        RiasecType::ordered()
    }

    pub fn get(&self, riasec_type: RiasecType) -> Option<&Profile> {
        self.profiles.get(&riasec_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> + '_ {
        self.profiles.values()
    }

    pub fn subdivisions(&self, riasec_type: RiasecType) -> &[String] {
        self.profiles
            .get(&riasec_type)
            .map(|profile| profile.subdivisions.as_slice())
            .unwrap_or(&[])
    }

    /// Type owning `label`, if any profile lists it.
    pub fn subtype_owner(&self, label: &str) -> Option<RiasecType> {
        self.owners.get(label).copied()
    }

    pub fn contains_subtype(&self, riasec_type: RiasecType, label: &str) -> bool {
        self.subtype_owner(label) == Some(riasec_type)
    }

    /// Every subtype label across the catalog, in label order.
    pub fn universe(&self) -> impl Iterator<Item = &str> + '_ {
        self.owners.keys().map(String::as_str)
    }

    pub(crate) fn replace(&mut self, profile: Profile) {
        self.profiles.insert(profile.riasec_type, profile);
        self.owners = index_owners(&self.profiles);
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::defaults()
    }
}

impl From<BTreeMap<RiasecType, Profile>> for ProfileCatalog {
    fn from(profiles: BTreeMap<RiasecType, Profile>) -> Self {
        Self::new(profiles)
    }
}

impl From<ProfileCatalog> for BTreeMap<RiasecType, Profile> {
    fn from(catalog: ProfileCatalog) -> Self {
        catalog.profiles
    }
}

/// Labels replaced between two versions of the catalog, keyed by owning type.
///
/// Within one type, labels dropped by the newer catalog pair up with the labels
/// it introduced, in list order. Careers and pinned questions follow the pairing
/// so they keep pointing at the same slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtypeRenames(BTreeMap<(RiasecType, String), String>);

impl SubtypeRenames {
    pub fn between(from: &ProfileCatalog, to: &ProfileCatalog) -> Self {
        let mut renames = BTreeMap::new();
        for riasec_type in RiasecType::ordered() {
            let before = from.subdivisions(riasec_type);
            let after = to.subdivisions(riasec_type);
            let dropped = before.iter().filter(|label| !after.contains(label));
            let introduced = after.iter().filter(|label| !before.contains(label));
            for (old, new) in dropped.zip(introduced) {
                renames.insert((riasec_type, old.clone()), new.clone());
            }
        }
        Self(renames)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// New label for `label` under `riasec_type`, if it was renamed.
    pub fn get(&self, riasec_type: RiasecType, label: &str) -> Option<&str> {
        self.0
            .get(&(riasec_type, label.to_string()))
            .map(String::as_str)
    }

    /// Rewrites the career's related subtypes. Returns whether anything changed.
    pub fn apply_to_career(&self, career: &mut CareerDetail) -> bool {
        let mut changed = false;
        for related in &mut career.related_subtypes {
            if let Some(new) = self.get(related.riasec_type, &related.label) {
                related.label = new.to_string();
                changed = true;
            }
        }
        changed
    }

    /// Rewrites pinned subtypes on either side. Returns whether anything changed.
    pub fn apply_to_question(&self, question: &mut QuestionTemplate) -> bool {
        let mut changed = false;
        for (riasec_type, pin) in [
            (question.yes_type, &mut question.yes_sub),
            (question.no_type, &mut question.no_sub),
        ] {
            let renamed = pin
                .as_deref()
                .and_then(|label| self.get(riasec_type, label))
                .map(str::to_string);
            if let Some(new) = renamed {
                *pin = Some(new);
                changed = true;
            }
        }
        changed
    }
}

/// Compiled-in careers expressed in the labels of `profiles`.
pub fn default_careers_for(profiles: &ProfileCatalog) -> Vec<CareerDetail> {
    let renames = SubtypeRenames::between(&ProfileCatalog::defaults(), profiles);
    let mut careers = default_careers();
    if !renames.is_empty() {
        for career in &mut careers {
            renames.apply_to_career(career);
        }
    }
    careers
}

fn index_owners(profiles: &BTreeMap<RiasecType, Profile>) -> BTreeMap<String, RiasecType> {
    let mut owners = BTreeMap::new();
    for profile in profiles.values() {
        for label in &profile.subdivisions {
            owners.entry(label.clone()).or_insert(profile.riasec_type);
        }
    }
    owners
}
