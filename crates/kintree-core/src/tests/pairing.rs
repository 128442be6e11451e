use super::{engine, person};
use crate::MaritalStatus;

#[test]
fn mutual_pair_merges_into_one_card() {
    let records = vec![
        person("A", Some(1), Some("M"), Some("B")),
        person("B", Some(1), Some("F"), Some("A")),
    ];
    let tree = engine().build_tree(&records);

    assert_eq!(tree.generations.len(), 1);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "A");

    let spouse = members[0].spouse.as_ref().unwrap();
    assert_eq!(spouse.display_name, "B");
    assert_eq!(spouse.status, MaritalStatus::Married);
}

#[test]
fn female_coded_partner_defers_even_when_scanned_first() {
    let records = vec![
        person("B", Some(1), Some("F"), Some("A")),
        person("A", Some(1), Some("M"), Some("B")),
    ];
    let tree = engine().build_tree(&records);

    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    // The male-coded partner anchors the pair regardless of scan order.
    assert_eq!(members[0].id, "A");
    assert_eq!(members[0].spouse.as_ref().unwrap().display_name, "B");
}

#[test]
fn long_form_male_token_also_anchors() {
    let records = vec![
        person("B", Some(1), Some("F"), Some("A")),
        person("A", Some(1), Some("Male"), Some("B")),
    ];
    let tree = engine().build_tree(&records);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "A");
}

#[test]
fn same_class_pair_is_not_deferred_first_in_scan_anchors() {
    // Both female-coded: the deferral rule never fires; whoever is scanned
    // first becomes primary and consumes the other via the seen set.
    let records = vec![
        person("B", Some(1), Some("F"), Some("A")),
        person("A", Some(1), Some("F"), Some("B")),
    ];
    let tree = engine().build_tree(&records);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "B");
    assert_eq!(members[0].spouse.as_ref().unwrap().display_name, "A");
}

#[test]
fn both_male_pair_first_in_scan_anchors() {
    let records = vec![
        person("A", Some(1), Some("M"), Some("B")),
        person("B", Some(1), Some("M"), Some("A")),
    ];
    let tree = engine().build_tree(&records);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "A");
}

#[test]
fn unrecognized_gender_token_classifies_female_coded() {
    // "Other" is not male-coded, so the deferral rule treats this record
    // like any female-coded partner of a male-coded spouse.
    let records = vec![
        person("B", Some(1), Some("Other"), Some("A")),
        person("A", Some(1), Some("M"), Some("B")),
    ];
    let tree = engine().build_tree(&records);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "A");
}

#[test]
fn dangling_spouse_reference_renders_unpaired() {
    let records = vec![person("A", Some(1), Some("M"), Some("Z"))];
    let tree = engine().build_tree(&records);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "A");
    assert!(members[0].spouse.is_none());
}

#[test]
fn self_referential_spouse_renders_unpaired() {
    let records = vec![person("A", Some(1), Some("F"), Some("A"))];
    let tree = engine().build_tree(&records);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "A");
    assert!(members[0].spouse.is_none());
}

#[test]
fn cross_generation_spouses_render_independently_unpaired() {
    let records = vec![
        person("A", Some(1), Some("F"), Some("B")),
        person("B", Some(2), Some("M"), Some("A")),
    ];
    let tree = engine().build_tree(&records);

    assert_eq!(tree.generations.len(), 2);
    for generation in &tree.generations {
        assert_eq!(generation.members.len(), 1);
        assert!(generation.members[0].spouse.is_none());
    }
    assert_eq!(tree.generations[0].members[0].id, "A");
    assert_eq!(tree.generations[1].members[0].id, "B");
}

#[test]
fn non_reciprocal_link_pairs_when_the_linking_side_scans_first() {
    // A points at B; B points at nobody. A scans first, anchors, consumes B.
    let records = vec![
        person("A", Some(1), Some("M"), Some("B")),
        person("B", Some(1), Some("F"), None),
    ];
    let tree = engine().build_tree(&records);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "A");
    assert_eq!(members[0].spouse.as_ref().unwrap().display_name, "B");
}

#[test]
fn non_reciprocal_link_duplicates_target_when_target_scans_first() {
    // B is emitted standalone before A marks her seen, then reappears as
    // A's spouse summary. Scan-order-dependent, accepted behavior for
    // non-reciprocal data.
    let records = vec![
        person("B", Some(1), Some("F"), None),
        person("A", Some(1), Some("M"), Some("B")),
    ];
    let tree = engine().build_tree(&records);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].id, "B");
    assert_eq!(members[1].id, "A");
    assert_eq!(members[1].spouse.as_ref().unwrap().display_name, "B");
}

#[test]
fn deferred_record_without_backlink_is_dropped() {
    // A (female-coded) points at B (male-coded); B has no spouse link. A is
    // deferred without being marked seen, then B emits standalone, and the
    // scan never returns to A. Accepted behavior for non-reciprocal data.
    let records = vec![
        person("A", Some(1), Some("F"), Some("B")),
        person("B", Some(1), Some("M"), None),
    ];
    let tree = engine().build_tree(&records);
    let members = &tree.generations[0].members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, "B");
    assert!(members[0].spouse.is_none());
}

#[test]
fn ex_spouses_list_is_always_empty_from_current_inputs() {
    let records = vec![
        person("A", Some(1), Some("M"), Some("B")),
        person("B", Some(1), Some("F"), Some("A")),
    ];
    let tree = engine().build_tree(&records);
    assert!(tree.generations[0].members[0].ex_spouses.is_empty());
}
