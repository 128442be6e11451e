mod pairing;

use chrono::NaiveDate;

use crate::{Engine, PersonRecord};

/// Engine pinned to a fixed "today" so age assertions are reproducible.
fn engine() -> Engine {
    Engine::new().with_fixed_today(Some(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()))
}

/// Minimal record constructor; `first_name` mirrors the id so partition
/// assertions can match spouse summaries (which carry names) back to ids.
fn person(
    id: &str,
    generation: Option<i64>,
    gender: Option<&str>,
    spouse: Option<&str>,
) -> PersonRecord {
    PersonRecord {
        person_id: id.to_string(),
        family_line_id: None,
        generation,
        first_name: Some(id.to_string()),
        gender: gender.map(str::to_string),
        mother_id: None,
        father_id: None,
        spouse_id: spouse.map(str::to_string),
        dob: None,
        dod: None,
        extra: serde_json::Map::new(),
    }
}
