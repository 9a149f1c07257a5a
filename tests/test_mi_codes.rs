use std::collections::HashSet;

use ppinet::mi_codes::{descendant_closure, read_mi_tree, InteractionFilter};

const MI_OBO: &str = "\
[Term]
id: MI:0001
name: interaction detection method

[Term]
id: MI:0045
name: experimental interaction detection
is_a: MI:0001 ! interaction detection method

[Term]
id: MI:0401
name: biochemical
is_a: MI:0045 ! experimental interaction detection

[Term]
id: MI:0091
name: chromatography technology
is_a: MI:0401 ! biochemical

[Term]
id: MI:0407
name: direct interaction
is_a: MI:0915 ! physical association
";

#[test]
fn test_read_mi_tree() {
    let mi_tree = read_mi_tree(MI_OBO.as_bytes()).unwrap();

    // the root MI:0001 has no is_a line, so it's not a key
    assert_eq!(mi_tree.len(), 4);
    assert!(mi_tree["MI:0045"].contains("MI:0001"));
    assert!(mi_tree["MI:0407"].contains("MI:0915"));
}

#[test]
fn test_descendant_closure() {
    let mi_tree = read_mi_tree(MI_OBO.as_bytes()).unwrap();
    let roots = HashSet::from(["MI:0045".into()]);

    let codes = descendant_closure(&mi_tree, &roots);

    // the root, its child and its grandchild
    assert_eq!(codes.len(), 3);
    assert!(codes.contains("MI:0045"));
    assert!(codes.contains("MI:0401"));
    assert!(codes.contains("MI:0091"));
    assert!(!codes.contains("MI:0407"));
}

#[test]
fn test_interaction_filter() {
    let physical = HashSet::from(["MI:0407".into(), "MI:0915".into()]);
    let experimental = HashSet::from(["MI:0045".into(), "MI:0401".into()]);

    let filter = InteractionFilter::new(physical, experimental);

    assert!(filter.keep("MI:0407", "MI:0401"));
    // genetic interaction type
    assert!(!filter.keep("MI:0208", "MI:0401"));
    // predicted, not experimentally detected
    assert!(!filter.keep("MI:0407", "MI:0063"));
}
