//! Ordering of named items.

use std::cmp::Ordering;

use crate::helpers::vocabulary::role;
use idocit::ByName;
use idocit::base::compare_names;
use idocit::structure::ThematicGrid;
use rstest::rstest;

#[rstest]
#[case(Some("AGENT"), None, Ordering::Greater)]
#[case(None, Some("AGENT"), Ordering::Less)]
#[case(None, None, Ordering::Equal)]
#[case(Some("AGENT"), Some("AGENT"), Ordering::Equal)]
#[case(Some("ACTION"), Some("AGENT"), Ordering::Less)]
#[case(Some("SOURCE"), Some("AGENT"), Ordering::Greater)]
fn test_compare_names(#[case] a: Option<&str>, #[case] b: Option<&str>, #[case] expected: Ordering) {
    assert_eq!(compare_names(a, b), expected);
}

#[test]
fn test_sort_roles_by_name() {
    let sorted = ByName.sorted(vec![role("SOURCE"), role("AGENT"), role("OBJECT")]);
    let names: Vec<_> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["AGENT", "OBJECT", "SOURCE"]);
}

#[test]
fn test_unnamed_grid_sorts_first() {
    let sorted = ByName.sorted(vec![ThematicGrid::new("Searching"), ThematicGrid::default()]);
    assert_eq!(sorted[0].name, None);
    assert_eq!(sorted[1].name.as_deref(), Some("Searching"));
}

#[test]
fn test_compare_absent_items() {
    let agent = role("AGENT");
    assert_eq!(ByName.compare_items(Some(&agent), None), Ordering::Greater);
    assert_eq!(ByName.compare_items::<idocit::ThematicRole>(None, None), Ordering::Equal);
}
