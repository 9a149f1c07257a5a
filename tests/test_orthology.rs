use std::collections::BTreeSet;

use ppinet::orthology::{Orthogroup, OrthologyIndex};

mod util;

use util::make_test_orthology_index;

fn members(index: &OrthologyIndex, id: &str) -> Vec<String> {
    index.find_protein(id).unwrap()
        .iter()
        .map(|member| member.to_string())
        .collect()
}

#[test]
fn test_find_protein_returns_full_group() {
    let index = make_test_orthology_index(&[&["B", "Y"], &["P1", "Q1", "R1"]]);

    assert_eq!(index.group_count(), 2);

    // the queried id is part of the returned set
    assert_eq!(members(&index, "B"), vec!["B", "Y"]);
    assert_eq!(members(&index, "Y"), vec!["B", "Y"]);
    assert_eq!(members(&index, "Q1"), vec!["P1", "Q1", "R1"]);

    assert!(index.find_protein("nowhere").is_none());
}

#[test]
fn test_duplicate_membership_keeps_later_group() {
    let index = make_test_orthology_index(&[&["P1", "P2"], &["P2", "P3"]]);

    assert_eq!(members(&index, "P2"), vec!["P2", "P3"]);
    // other members of the earlier group still map to it
    assert_eq!(members(&index, "P1"), vec!["P1", "P2"]);
}

#[test]
fn test_repeated_groups_collapse() {
    let index = make_test_orthology_index(&[&["P1", "Q1"], &["Q1", "P1"]]);

    assert_eq!(index.group_count(), 1);
}

#[test]
fn test_group_equality_is_by_member_set() {
    let group_a = Orthogroup::new(BTreeSet::from(["P1".into(), "Q1".into()]));
    let group_b = Orthogroup::new(BTreeSet::from(["Q1".into(), "P1".into()]));

    assert_eq!(group_a, group_b);
}

#[test]
fn test_read_groups() {
    let content = "\
P1\tQ1
! directive row
P9\tP8
P2\tQ2\tR2
";

    let index = OrthologyIndex::read_groups(content.as_bytes()).unwrap();

    // the directive row and the physical row after it are both skipped
    assert_eq!(index.group_count(), 2);
    assert!(index.find_protein("P9").is_none());
    assert!(index.find_protein("P8").is_none());

    assert_eq!(members(&index, "P1"), vec!["P1", "Q1"]);
    assert_eq!(members(&index, "R2"), vec!["P2", "Q2", "R2"]);
}

#[test]
fn test_read_groups_trailing_directive() {
    // a directive on the last line has no following row to skip
    let content = "P1\tQ1\n! directive row\n";

    let index = OrthologyIndex::read_groups(content.as_bytes()).unwrap();

    assert_eq!(index.group_count(), 1);
}
