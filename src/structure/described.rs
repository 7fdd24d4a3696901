//! Thematic roles and addressees.

use smol_str::SmolStr;

use crate::base::DescribedItem;
use crate::base::constants::ANONYMOUS_IDENTIFIER;

/// Level at which a thematic role may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleScope {
    Operation,
    Interface,
    #[default]
    Both,
}

impl RoleScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operation => "OPERATION",
            Self::Interface => "INTERFACE",
            Self::Both => "BOTH",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "OPERATION" => Some(Self::Operation),
            "INTERFACE" => Some(Self::Interface),
            "BOTH" => Some(Self::Both),
            _ => None,
        }
    }
}

/// A semantic role a documented element plays for its operation,
/// e.g. `AGENT`, `OBJECT`, `SOURCE`.
///
/// Equality covers every field; use [`same_name`](Self::same_name) for the
/// name-only comparison recommendation logic relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThematicRole {
    pub name: SmolStr,
    pub description: Option<String>,
    pub role_scope: RoleScope,
}

impl Default for ThematicRole {
    fn default() -> Self {
        Self::new(ANONYMOUS_IDENTIFIER)
    }
}

impl ThematicRole {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            role_scope: RoleScope::Both,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_scope(mut self, role_scope: RoleScope) -> Self {
        self.role_scope = role_scope;
        self
    }

    pub fn same_name(&self, other: &ThematicRole) -> bool {
        self.name == other.name
    }
}

impl DescribedItem for ThematicRole {
    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl std::fmt::Display for ThematicRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A target audience of documentation text, e.g. `Developer` or `Manager`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Addressee {
    pub name: SmolStr,
    pub description: String,
    pub is_default: bool,
}

impl Addressee {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            is_default: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }
}

impl DescribedItem for Addressee {
    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn description(&self) -> Option<&str> {
        Some(self.description.as_str())
    }
}

impl std::fmt::Display for Addressee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
