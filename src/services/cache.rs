//! Per-element memo of role recommendations.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::{ConfigVersion, Configuration};
use crate::structure::{ElementId, RolesRecommendations, SignatureTree, TreeId};

use super::grids::{extract_verb, find_matching_grids};
use super::rules::derive_roles_recommendation;

/// Recommendations computed per element of a tree, each tagged with the
/// configuration version and tree revision it was derived at.
///
/// An entry is reused only while both are unchanged. Entries of different
/// trees never mix, even when their element ids coincide.
#[derive(Debug, Default)]
pub struct RecommendationCache {
    entries: FxHashMap<(TreeId, ElementId), Entry>,
}

#[derive(Debug)]
struct Entry {
    version: ConfigVersion,
    revision: u64,
    recommendations: RolesRecommendations,
}

impl RecommendationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recommendations for `element`, derived from the grids matching the
    /// verb of its enclosing operation.
    pub fn recommendations(
        &mut self,
        config: &Configuration,
        tree: &SignatureTree,
        element: ElementId,
    ) -> &RolesRecommendations {
        let version = config.version();
        let revision = tree.revision();
        let key = (tree.id(), element);
        let stale = self
            .entries
            .get(&key)
            .is_none_or(|entry| entry.version != version || entry.revision != revision);

        if stale {
            debug!(
                %element,
                tree = tree.id().get(),
                version = version.get(),
                revision,
                "deriving role recommendations"
            );
            let verb = tree
                .find_operation(element)
                .and_then(|op| tree.get(op))
                .and_then(|op| extract_verb(op.identifier.as_deref()));
            let grids = match &verb {
                Some(verb) => find_matching_grids(verb, config.thematic_grids()),
                None => Vec::new(),
            };
            let recommendations = derive_roles_recommendation(grids, tree, element);
            self.entries.insert(
                key,
                Entry {
                    version,
                    revision,
                    recommendations,
                },
            );
        }

        &self.entries[&key].recommendations
    }

    pub fn invalidate(&mut self, tree: &SignatureTree, element: ElementId) {
        self.entries.remove(&(tree.id(), element));
    }

    /// Drop every entry derived from `tree`.
    pub fn invalidate_tree(&mut self, tree: &SignatureTree) {
        let id = tree.id();
        self.entries.retain(|(tree_id, _), _| *tree_id != id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
