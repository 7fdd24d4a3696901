//! Behavior over the structure model.
//!
//! - [`grids`] - Verb extraction and grid matching
//! - [`rules`] - Rule syntax checking and role recommendation
//! - [`RecommendationCache`] - Recommendations memoized per configuration version
//! - [`RecommendedRolesSelection`] - Role choices offered for one element
//! - [`parsing`] - Registry of external interface parsers

mod cache;
pub mod grids;
pub mod parsing;
pub mod rules;
mod selection;

pub use cache::RecommendationCache;
pub use grids::{
    collect_thematic_roles, contains_role, derive_thematic_grid, extract_verb, find_matching_grids,
};
pub use parsing::{InterfaceParser, ParserRegistry, ParsingError, load_interface, write_interface};
pub use rules::{
    RuleEngine, RuleError, SyntaxRuleEngine, ThematicRoleContext, derive_roles_recommendation,
    is_rule_valid, reduce_grid, unambiguous_grid,
};
pub use selection::{RecommendedGrids, RecommendedRolesSelection};
