//! Named items and name-based ordering.

use std::cmp::Ordering;

/// An item identified by a display name and carrying a free-text description.
///
/// Thematic roles, addressees and thematic grids all implement this so they
/// can share one ordering.
pub trait DescribedItem {
    fn name(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
}

/// Compare two optional names.
///
/// A missing name orders before any present name; two missing names are equal.
pub fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Orders [`DescribedItem`]s by name.
///
/// Passed explicitly wherever an ordering is needed:
///
/// ```
/// use idocit::base::ByName;
/// use idocit::structure::ThematicRole;
///
/// let mut roles = vec![ThematicRole::new("SOURCE"), ThematicRole::new("AGENT")];
/// ByName.sort(&mut roles);
/// assert_eq!(roles[0].name.as_str(), "AGENT");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByName;

impl ByName {
    pub fn compare<T: DescribedItem + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        compare_names(a.name(), b.name())
    }

    /// Compare possibly absent items; an absent item behaves like an unnamed one.
    pub fn compare_items<T: DescribedItem + ?Sized>(&self, a: Option<&T>, b: Option<&T>) -> Ordering {
        compare_names(a.and_then(|item| item.name()), b.and_then(|item| item.name()))
    }

    /// Stable sort by name.
    pub fn sort<T: DescribedItem>(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    pub fn sorted<T: DescribedItem>(&self, mut items: Vec<T>) -> Vec<T> {
        self.sort(&mut items);
        items
    }
}
