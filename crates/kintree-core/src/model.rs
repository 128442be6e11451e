use serde::Serialize;

use crate::records::PersonRecord;

/// Two-way normalized gender bucket, used only for spouse-pairing anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderClass {
    Male,
    Female,
}

impl GenderClass {
    /// Classifies a raw gender token.
    ///
    /// Only `"M"` and `"Male"` are male-coded; any other value (or none)
    /// is female-coded. This mirrors the production client's binary check
    /// and is intentionally not symmetric.
    pub fn classify(token: Option<&str>) -> Self {
        match token {
            Some("M") | Some("Male") => GenderClass::Male,
            _ => GenderClass::Female,
        }
    }
}

/// Relationship status attached to a spouse summary.
///
/// `Divorced` is carried for forward compatibility with the card renderer's
/// ex-spouse section; no current upstream field populates it, so every
/// summary built from live data is `Married`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Married,
    Divorced,
}

/// The partner attached to a primary display member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpouseSummary {
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub status: MaritalStatus,
}

/// One rendered card in a generation row: a primary person plus an optional
/// attached partner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayMember {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub gender: GenderClass,
    /// Coarse calendar-year age; absent without a date of birth.
    pub age: Option<i32>,
    pub spouse: Option<SpouseSummary>,
    /// Always empty from current inputs; see [`MaritalStatus::Divorced`].
    #[serde(rename = "exSpouses")]
    pub ex_spouses: Vec<SpouseSummary>,
    /// Owned copy of the originating record, for detail display only. Not
    /// serialized: it would duplicate the whole input payload inside the
    /// tree JSON.
    #[serde(skip_serializing)]
    pub source: PersonRecord,
}

/// One horizontal generation row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationBlock {
    pub level: i64,
    /// First-encounter order over that generation's raw records.
    pub members: Vec<DisplayMember>,
}

/// The layout-ready result: generation rows ascending by level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyTree {
    pub generations: Vec<GenerationBlock>,
    /// Size of the raw input collection, paired-away spouses included. This
    /// is the overview statistic ("N members"), not a count of rendered
    /// cards.
    #[serde(rename = "totalMemberCount")]
    pub total_member_count: usize,
}

impl FamilyTree {
    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }
}
