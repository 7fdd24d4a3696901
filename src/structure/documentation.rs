//! Role-based documentation attached to signature elements.

use indexmap::IndexMap;

use super::described::{Addressee, ThematicRole};

/// Whether an entry was written by the user or derived from context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    Explicit,
    Implicit,
}

/// One documentation entry: a thematic role plus one text per addressee.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Documentation {
    pub thematic_role: Option<ThematicRole>,
    pub documentation: IndexMap<Addressee, String>,
    /// Display order of the addressees.
    pub addressee_sequence: Vec<Addressee>,
    pub error_case: bool,
    pub scope: Scope,
    /// Parameter path of the element this entry was parsed for.
    pub signature_element_identifier: Option<String>,
}

impl Documentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: ThematicRole) -> Self {
        self.thematic_role = Some(role);
        self
    }

    pub fn with_text(mut self, addressee: Addressee, text: impl Into<String>) -> Self {
        self.set_text(addressee, text);
        self
    }

    pub fn with_error_case(mut self, error_case: bool) -> Self {
        self.error_case = error_case;
        self
    }

    pub fn with_signature_element_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.signature_element_identifier = Some(identifier.into());
        self
    }

    /// Set the text for an addressee, appending it to the display order if new.
    pub fn set_text(&mut self, addressee: Addressee, text: impl Into<String>) {
        if !self.addressee_sequence.contains(&addressee) {
            self.addressee_sequence.push(addressee.clone());
        }
        self.documentation.insert(addressee, text.into());
    }

    pub fn text_for(&self, addressee: &Addressee) -> Option<&str> {
        self.documentation.get(addressee).map(String::as_str)
    }

    pub fn role_name(&self) -> Option<&str> {
        self.thematic_role.as_ref().map(|role| role.name.as_str())
    }

    /// Texts in addressee display order; addressees without text are skipped.
    pub fn ordered_texts(&self) -> impl Iterator<Item = (&Addressee, &str)> {
        self.addressee_sequence
            .iter()
            .filter_map(|addressee| self.text_for(addressee).map(|text| (addressee, text)))
    }

    /// True if no addressee has non-blank text.
    pub fn is_empty(&self) -> bool {
        self.documentation.values().all(|text| text.trim().is_empty())
    }
}

/// First entry whose role name equals `role_name`.
///
/// Absent input on either side yields `None`.
pub fn find_documentation_by_role_name<'a>(
    role_name: Option<&str>,
    documentations: Option<&'a [Documentation]>,
) -> Option<&'a Documentation> {
    let role_name = role_name?;
    documentations?
        .iter()
        .find(|doc| doc.role_name() == Some(role_name))
}
