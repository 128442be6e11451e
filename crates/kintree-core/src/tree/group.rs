use indexmap::IndexMap;

use crate::records::PersonRecord;

/// Partitions records by normalized generation level.
///
/// Relative order within each bucket matches the input; the map itself keeps
/// first-seen level order (the caller sorts levels before emitting). No
/// record is dropped: malformed generation values have already been coerced
/// to level 1 by [`PersonRecord::level`].
pub(super) fn by_generation(records: &[PersonRecord]) -> IndexMap<i64, Vec<&PersonRecord>> {
    let mut buckets: IndexMap<i64, Vec<&PersonRecord>> = IndexMap::new();
    for record in records {
        buckets.entry(record.level()).or_default().push(record);
    }
    buckets
}
