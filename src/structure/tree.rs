//! Arena holding the signature elements of one parsed artifact.
//!
//! ## Design
//!
//! ```text
//! SignatureTree
//! ├── elements: IndexMap<ElementId, SignatureElement>  (creation order)
//! ├── roots: Vec<ElementId>                            (interface artifacts)
//! ├── next_id                                          (never reused)
//! ├── id: TreeId                                       (unique per tree value)
//! └── revision                                         (bumped on every edit)
//! ```
//!
//! Children are owned through their parent's `children` list; `parent` is a
//! plain id back reference. Every mutation validates first and then applies,
//! so a failed call leaves the tree untouched.
//!
//! Element ids are only meaningful within their tree. Callers that remember
//! derived data across trees key it by [`TreeId`] and compare
//! [`revision`](SignatureTree::revision) to notice edits.

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use tracing::debug;

use crate::base::Numerus;

use super::documentation::Documentation;
use super::element::{ElementId, ElementKind, ElementVariant, NewElement, ParameterState, SignatureElement};
use super::error::StructureError;

/// Owned deep value of a subtree, used for structural equality.
///
/// Two elements are equal when identifier, category, numerus, variant and all
/// children (recursively, in order) are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementShape {
    pub variant: ElementVariant,
    pub identifier: Option<String>,
    pub category: String,
    pub numerus: Numerus,
    pub children: Vec<ElementShape>,
}

/// One node of a pending copy, in preorder.
#[derive(Debug)]
struct CopyNode {
    parent: Option<usize>,
    element: NewElement,
    documentation_allowed: bool,
}

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one [`SignatureTree`] value.
///
/// A clone is a different tree and gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeId(u64);

impl TreeId {
    fn next() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct SignatureTree {
    elements: IndexMap<ElementId, SignatureElement>,
    roots: Vec<ElementId>,
    next_id: u32,
    id: TreeId,
    revision: u64,
}

impl Default for SignatureTree {
    fn default() -> Self {
        Self {
            elements: IndexMap::new(),
            roots: Vec::new(),
            next_id: 0,
            id: TreeId::next(),
            revision: 0,
        }
    }
}

impl Clone for SignatureTree {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            roots: self.roots.clone(),
            next_id: self.next_id,
            id: TreeId::next(),
            revision: self.revision,
        }
    }
}

impl SignatureTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Number of edits applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    pub fn get(&self, id: ElementId) -> Option<&SignatureElement> {
        self.elements.get(&id)
    }

    /// Mutable element access for in-crate edits; counts as an edit.
    pub(crate) fn get_mut(&mut self, id: ElementId) -> Option<&mut SignatureElement> {
        self.touch();
        self.elements.get_mut(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignatureElement> {
        self.elements.values()
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|el| el.parent)
    }

    /// Ordered children; empty for unknown ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map_or(&[], |el| el.children.as_slice())
    }

    /// All descendants in preorder, excluding `id` itself.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Number of elements below `id` down to the leaves.
    pub fn size(&self, id: ElementId) -> usize {
        self.descendants(id).len()
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    pub fn display_name(&self, id: ElementId) -> Option<String> {
        self.get(id).map(SignatureElement::display_name)
    }

    pub(crate) fn get_checked(&self, id: ElementId) -> Result<&SignatureElement, StructureError> {
        self.get(id).ok_or(StructureError::UnknownElement(id))
    }

    /// Counts as an edit once the element is found.
    fn get_checked_mut(&mut self, id: ElementId) -> Result<&mut SignatureElement, StructureError> {
        let el = self
            .elements
            .get_mut(&id)
            .ok_or(StructureError::UnknownElement(id))?;
        self.revision += 1;
        Ok(el)
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create an element and attach it as last child of `parent`.
    ///
    /// Only an interface artifact may be created without a parent.
    pub fn create(
        &mut self,
        parent: Option<ElementId>,
        element: NewElement,
    ) -> Result<ElementId, StructureError> {
        self.check_placement(parent, &element)?;
        Ok(self.attach(parent, element))
    }

    /// Create an empty element of the same variant, category and numerus as
    /// `source`, attached to `new_parent`.
    ///
    /// Children, documentations, identifiers and variant state other than the
    /// `Parameters` slot are not taken over.
    pub fn create_signature_element(
        &mut self,
        source: ElementId,
        new_parent: Option<ElementId>,
    ) -> Result<ElementId, StructureError> {
        let element = self.blank_from(self.get_checked(source)?);
        self.create(new_parent, element)
    }

    fn blank_from(&self, source: &SignatureElement) -> NewElement {
        NewElement::new(source.kind.fresh(), source.category.clone()).with_numerus(source.numerus)
    }

    fn check_placement(
        &self,
        parent: Option<ElementId>,
        element: &NewElement,
    ) -> Result<(), StructureError> {
        let variant = element.kind.variant();
        if variant != ElementVariant::InterfaceArtifact && element.category.trim().is_empty() {
            return Err(StructureError::invalid_state(format!(
                "{variant} requires a category"
            )));
        }

        match parent {
            None if variant == ElementVariant::InterfaceArtifact => Ok(()),
            None => Err(StructureError::invalid_state(format!(
                "{variant} requires a parent"
            ))),
            Some(parent_id) => {
                let parent = self.get_checked(parent_id)?;
                if parent.kind.accepts_child(variant) {
                    Ok(())
                } else {
                    Err(StructureError::invalid_state(format!(
                        "{variant} cannot be placed under {}",
                        parent.variant()
                    )))
                }
            }
        }
    }

    fn attach(&mut self, parent: Option<ElementId>, element: NewElement) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.touch();

        match parent.and_then(|p| self.elements.get_mut(&p)) {
            Some(parent_el) => parent_el.children.push(id),
            None => self.roots.push(id),
        }
        self.elements
            .insert(id, SignatureElement::new(id, parent, element));
        id
    }

    // ========================================================================
    // COPY
    // ========================================================================

    /// Deep-copy the subtree at `source` under `new_parent` in this tree.
    ///
    /// Documentations are not copied; see [`copy_documentations`](Self::copy_documentations).
    pub fn copy(
        &mut self,
        source: ElementId,
        new_parent: Option<ElementId>,
    ) -> Result<ElementId, StructureError> {
        let plan = self.copy_plan(source)?;
        let root = self.graft(plan, new_parent)?;
        debug!(%source, copy = %root, "copied signature element");
        Ok(root)
    }

    /// Deep-copy the subtree at `source` into another tree.
    pub fn copy_into(
        &self,
        source: ElementId,
        target: &mut SignatureTree,
        new_parent: Option<ElementId>,
    ) -> Result<ElementId, StructureError> {
        let plan = self.copy_plan(source)?;
        let root = target.graft(plan, new_parent)?;
        debug!(%source, copy = %root, "copied signature element into other tree");
        Ok(root)
    }

    /// Snapshot of the subtree in preorder: per node a blank element of the
    /// same variant, then the common attributes, then the variant state.
    fn copy_plan(&self, source: ElementId) -> Result<Vec<CopyNode>, StructureError> {
        let mut plan = Vec::new();
        let mut stack = vec![(source, None)];

        while let Some((id, parent)) = stack.pop() {
            let el = self.get_checked(id)?;

            let mut element = self.blank_from(el);
            element.identifier = el.identifier.clone();
            element.qualified_identifier = el.qualified_identifier.clone();
            element.kind.copy_extra_state(&el.kind);

            let index = plan.len();
            plan.push(CopyNode {
                parent,
                element,
                documentation_allowed: el.documentation_allowed,
            });
            stack.extend(el.children.iter().rev().map(|child| (*child, Some(index))));
        }
        Ok(plan)
    }

    fn graft(
        &mut self,
        plan: Vec<CopyNode>,
        new_parent: Option<ElementId>,
    ) -> Result<ElementId, StructureError> {
        let root = plan
            .first()
            .ok_or_else(|| StructureError::invalid_state("nothing to copy"))?;
        self.check_placement(new_parent, &root.element)?;

        let mut ids: Vec<ElementId> = Vec::with_capacity(plan.len());
        for node in plan {
            let parent = match node.parent {
                Some(index) => ids.get(index).copied(),
                None => new_parent,
            };
            let id = self.attach(parent, node.element);
            if let Some(el) = self.elements.get_mut(&id) {
                el.documentation_allowed = node.documentation_allowed;
            }
            ids.push(id);
        }

        ids.first()
            .copied()
            .ok_or_else(|| StructureError::invalid_state("nothing to copy"))
    }

    /// Append clones of `from`'s documentations to `to`.
    pub fn copy_documentations(
        &mut self,
        from: ElementId,
        to: ElementId,
    ) -> Result<(), StructureError> {
        let docs = self.get_checked(from)?.documentations.clone();
        self.get_checked(to)?;
        if !docs.is_empty() {
            let target = self.get_checked_mut(to)?;
            target.documentations.extend(docs);
            target.documentation_changed = true;
        }
        Ok(())
    }

    // ========================================================================
    // EDITING
    // ========================================================================

    /// Detach and drop the subtree at `id`, returning its root element.
    pub fn remove(&mut self, id: ElementId) -> Result<SignatureElement, StructureError> {
        let parent = self.get_checked(id)?.parent;
        let descendants = self.descendants(id);

        match parent.and_then(|p| self.elements.get_mut(&p)) {
            Some(parent_el) => parent_el.children.retain(|child| *child != id),
            None => self.roots.retain(|root| *root != id),
        }
        for descendant in descendants {
            self.elements.shift_remove(&descendant);
        }
        self.touch();
        self.elements
            .shift_remove(&id)
            .ok_or(StructureError::UnknownElement(id))
    }

    /// Move the child at position `from` of `parent` to position `to`.
    pub fn move_child(
        &mut self,
        parent: ElementId,
        from: usize,
        to: usize,
    ) -> Result<(), StructureError> {
        let len = self.children(parent).len();
        self.get_checked(parent)?;
        if from >= len || to >= len {
            return Err(StructureError::invalid_state(format!(
                "cannot move child {from} to {to} of {len} children"
            )));
        }
        let el = self.get_checked_mut(parent)?;
        let child = el.children.remove(from);
        el.children.insert(to, child);
        Ok(())
    }

    // ========================================================================
    // ELEMENT STATE
    // ========================================================================

    pub fn set_identifier(
        &mut self,
        id: ElementId,
        identifier: Option<String>,
    ) -> Result<(), StructureError> {
        self.get_checked_mut(id)?.identifier = identifier;
        Ok(())
    }

    pub fn set_qualified_identifier(
        &mut self,
        id: ElementId,
        qualified_identifier: Option<String>,
    ) -> Result<(), StructureError> {
        self.get_checked_mut(id)?.qualified_identifier = qualified_identifier;
        Ok(())
    }

    pub fn set_documentation_allowed(&mut self, id: ElementId, allowed: bool) -> Result<(), StructureError> {
        self.get_checked_mut(id)?.documentation_allowed = allowed;
        Ok(())
    }

    pub fn set_documentation_changed(&mut self, id: ElementId, changed: bool) -> Result<(), StructureError> {
        self.get_checked_mut(id)?.documentation_changed = changed;
        Ok(())
    }

    /// Pin the grid an operation was classified with.
    pub fn set_thematic_grid_name(
        &mut self,
        id: ElementId,
        grid_name: Option<String>,
    ) -> Result<(), StructureError> {
        let variant = self.get_checked(id)?.variant();
        if variant != ElementVariant::Operation {
            return Err(StructureError::invalid_state(format!(
                "{variant} has no thematic grid"
            )));
        }
        if let ElementKind::Operation { thematic_grid_name } = &mut self.get_checked_mut(id)?.kind {
            *thematic_grid_name = grid_name;
        }
        Ok(())
    }

    /// Parameter state of a `Parameter` element.
    pub fn parameter_state_mut(&mut self, id: ElementId) -> Result<&mut ParameterState, StructureError> {
        let variant = self.get_checked(id)?.variant();
        self.get_checked_mut(id)?
            .kind
            .parameter_state_mut()
            .ok_or_else(|| StructureError::invalid_state(format!("{variant} has no parameter state")))
    }

    // ========================================================================
    // DOCUMENTATION
    // ========================================================================

    /// Attach a documentation entry and mark the element as changed.
    pub fn add_documentation(
        &mut self,
        id: ElementId,
        documentation: Documentation,
    ) -> Result<(), StructureError> {
        let el = self.get_checked(id)?;
        if !el.documentation_allowed {
            return Err(StructureError::DocumentationNotAllowed(id));
        }
        if documentation.error_case && !self.supports_error_documentation(id) {
            return Err(StructureError::ErrorCaseNotSupported(id));
        }

        let el = self.get_checked_mut(id)?;
        el.documentations.push(documentation);
        el.documentation_changed = true;
        Ok(())
    }

    pub fn remove_documentation(
        &mut self,
        id: ElementId,
        index: usize,
    ) -> Result<Documentation, StructureError> {
        if index >= self.get_checked(id)?.documentations.len() {
            return Err(StructureError::invalid_state(format!(
                "no documentation at index {index}"
            )));
        }
        let el = self.get_checked_mut(id)?;
        el.documentation_changed = true;
        Ok(el.documentations.remove(index))
    }

    // ========================================================================
    // EQUALITY
    // ========================================================================

    pub fn shape(&self, id: ElementId) -> Option<ElementShape> {
        let el = self.get(id)?;
        Some(ElementShape {
            variant: el.variant(),
            identifier: el.identifier.clone(),
            category: el.category.clone(),
            numerus: el.numerus,
            children: el
                .children
                .iter()
                .filter_map(|child| self.shape(*child))
                .collect(),
        })
    }

    /// Structural equality of `id` in this tree and `other_id` in `other`.
    pub fn structurally_eq(&self, id: ElementId, other: &SignatureTree, other_id: ElementId) -> bool {
        match (self.shape(id), other.shape(other_id)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
