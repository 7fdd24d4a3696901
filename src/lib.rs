//! # idocit-core
//!
//! Core model for documenting software interfaces with thematic roles.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! services  → Verb extraction, role recommendation, rule syntax, parser registry
//!   ↓
//! config    → Configured roles, addressees and grids; XML persistence
//!   ↓
//! structure → Signature element tree, documentation, thematic vocabulary
//!   ↓
//! base      → Primitives (Numerus, Delimiters, name ordering, text cleanup)
//! ```

// ============================================================================
// MODULES (dependency order: base → structure → config → services)
// ============================================================================

/// Foundation types: Numerus, Delimiters, name ordering
pub mod base;

/// Signature trees, documentation, roles, addressees and grids
pub mod structure;

/// Configuration state and its persistence
pub mod config;

/// Grid matching, recommendations, rules and parsers
pub mod services;

// Re-export foundation types
pub use base::{ByName, Delimiters, DescribedItem, Numerus};

// Re-export the model
pub use config::{ConfigVersion, Configuration, PersistenceError, PreferenceStore};
pub use structure::{
    Addressee, Documentation, ElementId, SignatureElement, SignatureTree, StructureError,
    ThematicGrid, ThematicRole,
};
