//! Signature element nodes.
//!
//! A [`SignatureElement`] is one node of a parsed interface artifact. The
//! variant-specific state lives in [`ElementKind`]; the tree links
//! (`parent`, `children`) are ids into the owning
//! [`SignatureTree`](super::SignatureTree).

use crate::base::Numerus;
use crate::base::constants::ANONYMOUS_IDENTIFIER;

use super::documentation::Documentation;

// ============================================================================
// IDS
// ============================================================================

/// Handle of an element within one [`SignatureTree`](super::SignatureTree).
///
/// Ids are allocated per tree and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// KINDS
// ============================================================================

/// Which list of an operation a `Parameters` node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterType {
    #[default]
    None,
    Input,
    Output,
    Exception,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Input => "INPUT",
            Self::Output => "OUTPUT",
            Self::Exception => "EXCEPTION",
        }
    }
}

/// Extra state of a parameter node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ParameterState {
    pub data_type_name: Option<String>,
    pub qualified_data_type_name: Option<String>,
    /// Path from the enclosing `Parameters` node down to this parameter.
    pub signature_element_path: Option<String>,
    pub has_public_accessible_attributes: bool,
}

/// Variant of a signature element with its variant-only state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Root: the parsed file.
    InterfaceArtifact,
    /// Class, interface, port type, ...
    Interface,
    /// Method or WSDL operation.
    Operation { thematic_grid_name: Option<String> },
    /// Input, output or one thrown exception of an operation.
    Parameters { slot: ParameterType },
    Parameter(ParameterState),
}

/// Fieldless view of [`ElementKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementVariant {
    InterfaceArtifact,
    Interface,
    Operation,
    Parameters,
    Parameter,
}

impl ElementVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InterfaceArtifact => "InterfaceArtifact",
            Self::Interface => "Interface",
            Self::Operation => "Operation",
            Self::Parameters => "Parameters",
            Self::Parameter => "Parameter",
        }
    }
}

impl std::fmt::Display for ElementVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ElementKind {
    pub fn variant(&self) -> ElementVariant {
        match self {
            Self::InterfaceArtifact => ElementVariant::InterfaceArtifact,
            Self::Interface => ElementVariant::Interface,
            Self::Operation { .. } => ElementVariant::Operation,
            Self::Parameters { .. } => ElementVariant::Parameters,
            Self::Parameter(_) => ElementVariant::Parameter,
        }
    }

    /// Same variant with only its fixed fields set.
    ///
    /// The `Parameters` slot is fixed at construction; all other variant
    /// state starts empty.
    pub fn fresh(&self) -> Self {
        match self {
            Self::InterfaceArtifact => Self::InterfaceArtifact,
            Self::Interface => Self::Interface,
            Self::Operation { .. } => Self::Operation {
                thematic_grid_name: None,
            },
            Self::Parameters { slot } => Self::Parameters { slot: *slot },
            Self::Parameter(_) => Self::Parameter(ParameterState::default()),
        }
    }

    /// Copy variant-only state from `source`. Mismatched variants are ignored.
    pub fn copy_extra_state(&mut self, source: &ElementKind) {
        match (self, source) {
            (
                Self::Operation { thematic_grid_name },
                Self::Operation {
                    thematic_grid_name: from,
                },
            ) => *thematic_grid_name = from.clone(),
            (Self::Parameters { slot }, Self::Parameters { slot: from }) => *slot = *from,
            (Self::Parameter(state), Self::Parameter(from)) => *state = from.clone(),
            _ => {}
        }
    }

    /// Whether a node of `child` variant may be placed under this one.
    pub fn accepts_child(&self, child: ElementVariant) -> bool {
        use ElementVariant as V;
        matches!(
            (self.variant(), child),
            (V::InterfaceArtifact, V::Interface)
                | (V::Interface, V::Interface)
                | (V::Interface, V::Operation)
                | (V::Operation, V::Parameters)
                | (V::Parameters, V::Parameter)
                | (V::Parameter, V::Parameter)
        )
    }

    pub fn parameter_state(&self) -> Option<&ParameterState> {
        match self {
            Self::Parameter(state) => Some(state),
            _ => None,
        }
    }

    pub fn parameter_state_mut(&mut self) -> Option<&mut ParameterState> {
        match self {
            Self::Parameter(state) => Some(state),
            _ => None,
        }
    }

    pub fn slot(&self) -> Option<ParameterType> {
        match self {
            Self::Parameters { slot } => Some(*slot),
            _ => None,
        }
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// A node of a [`SignatureTree`](super::SignatureTree).
///
/// Links and category are owned by the tree; use the tree's operations to
/// change them.
#[derive(Debug, Clone)]
pub struct SignatureElement {
    pub(crate) id: ElementId,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) category: String,
    pub(crate) numerus: Numerus,
    pub(crate) documentations: Vec<Documentation>,
    pub kind: ElementKind,
    pub identifier: Option<String>,
    pub qualified_identifier: Option<String>,
    pub documentation_allowed: bool,
    pub documentation_changed: bool,
}

impl SignatureElement {
    pub(crate) fn new(id: ElementId, parent: Option<ElementId>, element: NewElement) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            category: element.category,
            numerus: element.numerus,
            documentations: Vec::new(),
            kind: element.kind,
            identifier: element.identifier,
            qualified_identifier: element.qualified_identifier,
            documentation_allowed: true,
            documentation_changed: false,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn numerus(&self) -> Numerus {
        self.numerus
    }

    pub fn documentations(&self) -> &[Documentation] {
        &self.documentations
    }

    pub fn variant(&self) -> ElementVariant {
        self.kind.variant()
    }

    /// `identifier [category]`, with the data type for parameters.
    pub fn display_name(&self) -> String {
        let mut name = self
            .identifier
            .clone()
            .unwrap_or_else(|| ANONYMOUS_IDENTIFIER.to_string());

        if let Some(ty) = self
            .kind
            .parameter_state()
            .and_then(|state| state.data_type_name.as_deref())
        {
            name.push_str(" (Type: ");
            name.push_str(ty);
            name.push(')');
        }

        if !self.category.is_empty() {
            name.push_str(" [");
            name.push_str(&self.category);
            name.push(']');
        }
        name
    }
}

/// Description of an element to create.
///
/// ```
/// use idocit::structure::{NewElement, ParameterType};
///
/// let param = NewElement::parameter("Parameter", Some("String"))
///     .with_identifier("name");
/// assert_eq!(param.identifier.as_deref(), Some("name"));
/// let inputs = NewElement::parameters("Parameters", ParameterType::Input);
/// assert_eq!(inputs.kind.slot(), Some(ParameterType::Input));
/// ```
#[derive(Debug, Clone)]
pub struct NewElement {
    pub kind: ElementKind,
    pub category: String,
    pub numerus: Numerus,
    pub identifier: Option<String>,
    pub qualified_identifier: Option<String>,
}

impl NewElement {
    pub fn new(kind: ElementKind, category: impl Into<String>) -> Self {
        Self {
            kind,
            category: category.into(),
            numerus: Numerus::Singular,
            identifier: None,
            qualified_identifier: None,
        }
    }

    pub fn artifact(category: impl Into<String>) -> Self {
        Self::new(ElementKind::InterfaceArtifact, category)
    }

    pub fn interface(category: impl Into<String>) -> Self {
        Self::new(ElementKind::Interface, category)
    }

    pub fn operation(category: impl Into<String>) -> Self {
        Self::new(
            ElementKind::Operation {
                thematic_grid_name: None,
            },
            category,
        )
    }

    pub fn parameters(category: impl Into<String>, slot: ParameterType) -> Self {
        Self::new(ElementKind::Parameters { slot }, category)
    }

    /// A parameter whose simple and qualified type names are both `data_type`.
    pub fn parameter(category: impl Into<String>, data_type: Option<&str>) -> Self {
        Self::new(
            ElementKind::Parameter(ParameterState {
                data_type_name: data_type.map(str::to_string),
                qualified_data_type_name: data_type.map(str::to_string),
                ..ParameterState::default()
            }),
            category,
        )
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_qualified_identifier(mut self, qualified_identifier: impl Into<String>) -> Self {
        self.qualified_identifier = Some(qualified_identifier.into());
        self
    }

    pub fn with_numerus(mut self, numerus: Numerus) -> Self {
        self.numerus = numerus;
        self
    }
}
