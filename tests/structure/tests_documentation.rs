//! Looking up documentation entries by role.

use crate::helpers::vocabulary::{developer, role};
use idocit::structure::{Addressee, Documentation, find_documentation_by_role_name};
use rstest::rstest;

fn entries() -> Vec<Documentation> {
    vec![
        Documentation::new()
            .with_role(role("OBJECT"))
            .with_text(developer(), "The customer to move"),
        Documentation::new().with_role(role("DESTINATION")),
        Documentation::new().with_role(role("OBJECT")).with_text(developer(), "Second"),
        Documentation::new(),
    ]
}

#[rstest]
#[case(Some("OBJECT"), Some(0))]
#[case(Some("DESTINATION"), Some(1))]
#[case(Some("AGENT"), None)]
#[case(None, None)]
fn test_find_by_role_name(#[case] name: Option<&str>, #[case] expected: Option<usize>) {
    let docs = entries();
    let found = find_documentation_by_role_name(name, Some(docs.as_slice()));
    let index = found.and_then(|doc| docs.iter().position(|d| std::ptr::eq(d, doc)));
    assert_eq!(index, expected);
}

#[test]
fn test_find_without_entries() {
    assert!(find_documentation_by_role_name(Some("OBJECT"), None).is_none());
    assert!(find_documentation_by_role_name(Some("OBJECT"), Some(&[][..])).is_none());
}

#[test]
fn test_texts_keep_addressee_order() {
    let manager = Addressee::new("Manager");
    let doc = Documentation::new()
        .with_text(manager.clone(), "Moves a customer")
        .with_text(developer(), "Updates the address")
        .with_text(manager.clone(), "Relocates a customer");

    let texts: Vec<_> = doc.ordered_texts().map(|(a, t)| (a.name.as_str(), t)).collect();
    assert_eq!(
        texts,
        vec![("Manager", "Relocates a customer"), ("Developer", "Updates the address")]
    );
    assert_eq!(doc.text_for(&manager), Some("Relocates a customer"));
    assert!(!doc.is_empty());
    assert!(Documentation::new().with_text(manager, "  ").is_empty());
}
