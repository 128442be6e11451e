use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::model::GenderClass;

/// Display fallback for records without a usable first name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A person record as delivered by the backend's bulk fetch.
///
/// The wire shape is a camelCase JSON object. Only the fields the tree
/// engine inspects are typed here; everything else (medical, cultural,
/// location attributes and whatever the backend adds next) rides along in
/// `extra` and round-trips untouched.
///
/// Decoding is deliberately lenient: a malformed `generation` or an
/// unparseable date degrades to "absent" instead of failing the record. The
/// backend has historically shipped both `2` and `"2"` for generations and
/// both date-only and full-timestamp strings for `dob`/`dod`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(rename = "personId")]
    pub person_id: String,
    #[serde(rename = "familyLineId")]
    #[serde(default)]
    pub family_line_id: Option<String>,
    #[serde(default)]
    #[serde(deserialize_with = "de_lenient_generation")]
    pub generation: Option<i64>,
    #[serde(rename = "firstName")]
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(rename = "motherId")]
    #[serde(default)]
    pub mother_id: Option<String>,
    #[serde(rename = "fatherId")]
    #[serde(default)]
    pub father_id: Option<String>,
    #[serde(rename = "spouseId")]
    #[serde(default)]
    pub spouse_id: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub dod: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonRecord {
    /// The generation level this record is displayed at.
    ///
    /// Absent, zero, and negative generations all coerce to `1`. No record
    /// is ever rejected for a bad generation value.
    pub fn level(&self) -> i64 {
        match self.generation {
            Some(g) if g > 0 => g,
            _ => 1,
        }
    }

    /// Two-way gender bucket used for spouse-pairing anchoring.
    ///
    /// Exactly the tokens `"M"` and `"Male"` are male-coded; every other
    /// token, including absent, classifies as female-coded. The asymmetry is
    /// load-bearing for existing data and must not be symmetrized.
    pub fn gender_class(&self) -> GenderClass {
        GenderClass::classify(self.gender.as_deref())
    }

    pub fn display_name(&self) -> &str {
        match self.first_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_NAME,
        }
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.dob.as_deref().and_then(parse_calendar_date)
    }

    pub fn death_date(&self) -> Option<NaiveDate> {
        self.dod.as_deref().and_then(parse_calendar_date)
    }
}

/// Extracts the calendar date from a wire date string.
///
/// Accepts `YYYY-MM-DD` with or without a trailing time component
/// (`2001-05-14`, `2001-05-14T00:00:00.000Z`). Anything else is treated as
/// no date at all.
pub(crate) fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    let s = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Lenient `generation` decode: JSON number, numeric string, or nothing.
///
/// `2`, `2.0` and `"2"` all decode to `Some(2)`; `null`, `"elder"`, objects
/// and the like decode to `None` (which `PersonRecord::level` later coerces
/// to generation 1).
fn de_lenient_generation<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}
