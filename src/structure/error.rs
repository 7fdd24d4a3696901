//! Error types for signature tree operations.

use thiserror::Error;

use super::element::ElementId;

/// Structural contract violations on a [`SignatureTree`](super::SignatureTree).
///
/// These are programmer errors: the operation that raised one has not
/// modified the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A required field is missing or an element is placed under the wrong parent.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The id does not belong to this tree.
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    /// The element is marked as not documentable.
    #[error("Documentation is not allowed for element {0}")]
    DocumentationNotAllowed(ElementId),

    /// Error-case documentation on an element outside a thrown exception.
    #[error("Element {0} does not describe an exception and cannot carry error-case documentation")]
    ErrorCaseNotSupported(ElementId),
}

impl StructureError {
    /// Create an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}
