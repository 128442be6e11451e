use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};

use super::age;
use crate::model::{DisplayMember, GenderClass, MaritalStatus, SpouseSummary};
use crate::records::PersonRecord;

/// Resolves one generation's records into display members, merging each
/// spouse pair into a single card.
///
/// Single forward scan with a `seen` set scoped to this generation:
///
/// - already-seen records were consumed as someone's spouse and are skipped;
/// - a female-coded record whose spouse resolves male-coded is deferred
///   (skipped without being marked seen) so the male-coded partner anchors
///   the pair when the scan reaches him;
/// - everyone else becomes a primary member; a resolved spouse is attached
///   as a summary and marked seen so it is not emitted twice.
///
/// The deferral branch is intentionally asymmetric and intentionally blind
/// to reciprocity: whether a non-reciprocal link pairs, duplicates, or drops
/// a record depends on scan order, and that order-dependence is accepted
/// behavior for existing data.
///
/// A spouse link that is dangling, self-referential, or points into a
/// different generation counts as "no spouse": the member renders unpaired
/// and the target (if any) independently renders in its own generation.
pub(super) fn resolve_generation(
    generation: &[&PersonRecord],
    lookup: &FxHashMap<&str, &PersonRecord>,
    today: NaiveDate,
) -> Vec<DisplayMember> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut members: Vec<DisplayMember> = Vec::new();

    for record in generation {
        if seen.contains(record.person_id.as_str()) {
            continue;
        }

        let spouse = resolve_spouse(record, lookup);

        let defers_to_spouse = matches!(
            spouse,
            Some(s) if record.gender_class() == GenderClass::Female
                && s.gender_class() == GenderClass::Male
        );
        if defers_to_spouse {
            // Deferred, not marked seen: emitted later as the male-coded
            // partner's spouse summary.
            continue;
        }

        if let Some(spouse) = spouse {
            seen.insert(spouse.person_id.as_str());
        }

        members.push(build_member(record, spouse, today));
        seen.insert(record.person_id.as_str());
    }

    members
}

/// Looks up a record's pairable spouse: must resolve, must not be the record
/// itself, must sit in the same generation.
fn resolve_spouse<'a>(
    record: &PersonRecord,
    lookup: &FxHashMap<&str, &'a PersonRecord>,
) -> Option<&'a PersonRecord> {
    record
        .spouse_id
        .as_deref()
        .filter(|id| *id != record.person_id)
        .and_then(|id| lookup.get(id).copied())
        .filter(|spouse| spouse.level() == record.level())
}

fn build_member(
    record: &PersonRecord,
    spouse: Option<&PersonRecord>,
    today: NaiveDate,
) -> DisplayMember {
    let spouse_summary = spouse.map(|s| SpouseSummary {
        display_name: s.display_name().to_string(),
        // No upstream divorce feed; a present link always reads as married.
        status: MaritalStatus::Married,
    });

    DisplayMember {
        id: record.person_id.clone(),
        display_name: record.display_name().to_string(),
        gender: record.gender_class(),
        age: age::coarse_age(record.birth_date(), record.death_date(), today),
        spouse: spouse_summary,
        ex_spouses: Vec::new(),
        source: record.clone(),
    }
}
