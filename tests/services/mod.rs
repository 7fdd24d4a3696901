//! Service layer tests
//!
//! Verb matching, role recommendation, rule syntax, selections and the
//! parser registry.

pub mod tests_recommendations;
pub mod tests_registry;
pub mod tests_rules;
pub mod tests_selection;
