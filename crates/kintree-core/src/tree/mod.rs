//! The tree-building pipeline: group records by generation, resolve spouse
//! pairs within each generation, assemble generation rows ascending by level.
//!
//! Everything here is a pure function of the input slice plus a `today`
//! date. All scan state (the id lookup, the per-generation seen sets) is
//! allocated fresh per call.

mod age;
mod group;
mod pairing;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::model::{FamilyTree, GenerationBlock};
use crate::records::PersonRecord;

/// Resolves a record collection into a generation-ordered [`FamilyTree`].
///
/// Output order is fully deterministic for a fixed input order: generations
/// ascend by level, members keep first-encounter order within their
/// generation. Hash maps are used only for id lookups, never iterated for
/// anything that reaches the output.
pub fn build_tree(records: &[PersonRecord], today: NaiveDate) -> FamilyTree {
    // Spouse lookup spans the whole input even though pairing is scoped to a
    // single generation. First-wins on duplicate ids.
    let mut lookup: FxHashMap<&str, &PersonRecord> = FxHashMap::default();
    for record in records {
        lookup.entry(record.person_id.as_str()).or_insert(record);
    }

    let grouped = group::by_generation(records);
    let mut levels: Vec<i64> = grouped.keys().copied().collect();
    levels.sort_unstable();

    let generations: Vec<GenerationBlock> = levels
        .into_iter()
        .map(|level| GenerationBlock {
            members: pairing::resolve_generation(&grouped[&level], &lookup, today),
            level,
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        generations = generations.len(),
        "resolved family tree"
    );

    FamilyTree {
        generations,
        total_member_count: records.len(),
    }
}
