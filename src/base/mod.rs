//! Foundation types for the iDocIt core.
//!
//! This module provides the small value types everything else builds on:
//! - [`Numerus`] - Grammatical number of a signature element
//! - [`Delimiters`], [`ParameterPathElement`] - Qualified identifier and path syntax
//! - [`DescribedItem`], [`ByName`] - Named items and their ordering
//! - [`text`] - Camel-case splitting and whitespace cleanup
//! - [`constants`] - Preference keys and XML aliases
//!
//! This module has NO dependencies on other idocit modules.

pub mod constants;
mod delimiters;
mod naming;
mod numerus;
pub mod text;

pub use delimiters::{Delimiters, ParameterPathElement};
pub use naming::{ByName, DescribedItem, compare_names};
pub use numerus::Numerus;
