//! Rule language support and role recommendation.
//!
//! Grids may carry rule scripts deciding whether a role applies to an
//! element. Evaluating them needs a scripting engine supplied by the host
//! through [`RuleEngine`]; this crate ships [`SyntaxRuleEngine`], which only
//! checks syntax.

mod error;
mod lexer;
mod syntax;

use tracing::debug;

use crate::base::{ByName, Numerus};
use crate::structure::{
    ElementId, ElementKind, ElementVariant, RolesRecommendations, SignatureTree, ThematicGrid, ThematicRole,
    merge_second_level,
};

use super::grids::{contains_role, extract_verb};

pub use error::RuleError;
pub use lexer::{Token, TokenKind, tokenize};
pub use syntax::check_syntax;

/// What a rule can ask about the role being decided on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThematicRoleContext {
    pub role: ThematicRole,
    pub numerus: Numerus,
    pub public_accessible_attributes: bool,
    pub interface_level: bool,
    /// Verb of the enclosing operation.
    pub predicate: Option<String>,
}

impl ThematicRoleContext {
    pub fn new(role: ThematicRole) -> Self {
        Self {
            role,
            numerus: Numerus::Singular,
            public_accessible_attributes: false,
            interface_level: false,
            predicate: None,
        }
    }

    /// Context for `role` at `element`.
    pub fn for_element(tree: &SignatureTree, element: ElementId, role: ThematicRole) -> Option<Self> {
        let el = tree.get(element)?;
        let predicate = tree
            .find_operation(element)
            .and_then(|op| tree.get(op))
            .and_then(|op| extract_verb(op.identifier.as_deref()));

        Some(Self {
            role,
            numerus: el.numerus(),
            public_accessible_attributes: el
                .kind
                .parameter_state()
                .is_some_and(|state| state.has_public_accessible_attributes),
            interface_level: el.variant() == ElementVariant::Interface,
            predicate,
        })
    }
}

/// Scripting capability for rules.
pub trait RuleEngine {
    fn is_valid(&self, rule: &str) -> bool;

    /// Whether `rule` holds in `context`.
    fn evaluate(&self, rule: &str, context: &ThematicRoleContext) -> Result<bool, RuleError>;
}

/// Engine that validates syntax but cannot evaluate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxRuleEngine;

impl RuleEngine for SyntaxRuleEngine {
    fn is_valid(&self, rule: &str) -> bool {
        match check_syntax(rule) {
            Ok(()) => true,
            Err(e) => {
                debug!(rule, error = %e, "rule rejected");
                false
            }
        }
    }

    fn evaluate(&self, _rule: &str, _context: &ThematicRoleContext) -> Result<bool, RuleError> {
        Err(RuleError::NotYetSpecified("rule evaluation"))
    }
}

/// Whether `rule` is syntactically valid.
///
/// ```
/// use idocit::services::is_rule_valid;
///
/// assert!(is_rule_valid("println('Hello World!');"));
/// assert!(!is_rule_valid("foo bar baz"));
/// ```
pub fn is_rule_valid(rule: &str) -> bool {
    SyntaxRuleEngine.is_valid(rule)
}

/// Reduce `grid` to the roles applicable at `element`.
///
/// No reduction policy is defined yet, so this always fails.
pub fn reduce_grid(
    _grid: &ThematicGrid,
    _tree: &SignatureTree,
    _element: ElementId,
) -> Result<ThematicGrid, RuleError> {
    Err(RuleError::NotYetSpecified("grid reduction"))
}

/// The grid that decides for `element`: the only matching grid, or the one
/// named by the enclosing operation's `thematic_grid_name`.
pub fn unambiguous_grid<'a>(
    grids: &[&'a ThematicGrid],
    tree: &SignatureTree,
    element: ElementId,
) -> Option<&'a ThematicGrid> {
    if let [only] = grids {
        return Some(*only);
    }

    let op = tree.find_operation(element).and_then(|op| tree.get(op))?;
    let grid_name = match &op.kind {
        ElementKind::Operation { thematic_grid_name } => thematic_grid_name.as_deref()?,
        _ => return None,
    };
    grids
        .iter()
        .copied()
        .find(|grid| grid.name.as_deref() == Some(grid_name))
}

/// Recommend roles for documenting `element`.
///
/// First level: mandatory roles of the matching grids not yet documented
/// around the element. If one grid decides (see [`unambiguous_grid`]), first
/// level roles outside it move down to the second level. Second level: roles
/// already documented around the element merged with the optional and
/// demoted roles, minus the first level. Both levels are sorted by name.
pub fn derive_roles_recommendation<'a>(
    matching_grids: impl IntoIterator<Item = &'a ThematicGrid>,
    tree: &SignatureTree,
    element: ElementId,
) -> RolesRecommendations {
    let grids: Vec<&ThematicGrid> = matching_grids.into_iter().collect();
    let documented = tree.collect_associated_thematic_roles(element);

    let mut first_level: Vec<ThematicRole> = Vec::new();
    for role in grids.iter().flat_map(|grid| grid.mandatory_roles()) {
        if !contains_role(&documented, role) && !contains_role(&first_level, role) {
            first_level.push(role.clone());
        }
    }

    let mut demoted = Vec::new();
    if let Some(reference) = unambiguous_grid(&grids, tree, element) {
        first_level.retain(|role| {
            let keep = reference.roles.keys().any(|known| known.same_name(role));
            if !keep {
                demoted.push(role.clone());
            }
            keep
        });
    }

    let optional = grids
        .iter()
        .flat_map(|grid| grid.optional_roles())
        .cloned()
        .chain(demoted);
    let second_level: Vec<ThematicRole> = merge_second_level(documented, optional)
        .into_iter()
        .filter(|role| !contains_role(&first_level, role))
        .collect();

    RolesRecommendations::new(ByName.sorted(first_level), ByName.sorted(second_level))
}
