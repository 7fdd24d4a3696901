//! Queries relating an element to its operation and parameter lists.

use crate::base::Delimiters;

use super::described::ThematicRole;
use super::documentation::Documentation;
use super::element::{ElementId, ElementVariant, ParameterType};
use super::error::StructureError;
use super::tree::SignatureTree;

impl SignatureTree {
    /// The element itself if it is an operation, otherwise the nearest
    /// operation above it.
    pub fn find_operation(&self, id: ElementId) -> Option<ElementId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|current| {
                self.get(*current)
                    .is_some_and(|el| el.variant() == ElementVariant::Operation)
            })
    }

    /// Slot of the parameter list a `Parameters` or `Parameter` element belongs to.
    ///
    /// Every other element yields [`ParameterType::None`].
    pub fn parameter_type(&self, id: ElementId) -> ParameterType {
        let Some(el) = self.get(id) else {
            return ParameterType::None;
        };
        if !matches!(el.variant(), ElementVariant::Parameter | ElementVariant::Parameters) {
            return ParameterType::None;
        }

        std::iter::once(id)
            .chain(self.ancestors(id))
            .find_map(|current| self.get(current).and_then(|el| el.kind.slot()))
            .unwrap_or_default()
    }

    /// Only elements of a thrown exception carry error-case documentation.
    pub fn supports_error_documentation(&self, id: ElementId) -> bool {
        self.parameter_type(id) == ParameterType::Exception
    }

    /// Documentations around the operation of `id`: first those above the
    /// operation up to (excluding) the interface artifact, then the operation
    /// and everything below it in preorder.
    pub fn associated_documentations(&self, id: ElementId) -> Vec<&Documentation> {
        let Some(operation) = self.find_operation(id) else {
            return Vec::new();
        };

        let upwards = self.ancestors(operation).take_while(|ancestor| {
            self.get(*ancestor)
                .is_some_and(|el| el.variant() != ElementVariant::InterfaceArtifact)
        });
        let downwards = std::iter::once(operation).chain(self.descendants(operation));

        upwards
            .chain(downwards)
            .filter_map(|current| self.get(current))
            .flat_map(|el| el.documentations.iter())
            .collect()
    }

    /// Distinct (by name) roles referenced by [`associated_documentations`](Self::associated_documentations),
    /// in first-seen order.
    pub fn collect_associated_thematic_roles(&self, id: ElementId) -> Vec<ThematicRole> {
        let mut roles: Vec<ThematicRole> = Vec::new();
        for role in self
            .associated_documentations(id)
            .into_iter()
            .filter_map(|doc| doc.thematic_role.as_ref())
        {
            if !roles.iter().any(|known| known.same_name(role)) {
                roles.push(role.clone());
            }
        }
        roles
    }

    /// True if the operation or any element below it has changed documentation.
    pub fn is_operation_doc_changed(&self, operation: ElementId) -> bool {
        std::iter::once(operation)
            .chain(self.descendants(operation))
            .filter_map(|current| self.get(current))
            .any(|el| el.documentation_changed)
    }

    /// Path segment of a single parameter: `qualifiedIdentifier<type>qualifiedType`.
    fn parameter_segment(&self, delimiters: &Delimiters, id: ElementId) -> Option<String> {
        let el = self.get(id)?;
        let state = el.kind.parameter_state()?;
        Some(delimiters.path_segment(
            el.qualified_identifier.as_deref().unwrap_or_default(),
            state.qualified_data_type_name.as_deref(),
        ))
    }

    /// Assign `signature_element_path` to `parameter` and all nested parameters.
    ///
    /// `path` is the path of the enclosing element; an empty path starts a new one.
    pub fn set_parameter_paths(
        &mut self,
        delimiters: &Delimiters,
        path: &str,
        parameter: ElementId,
    ) -> Result<(), StructureError> {
        let segment = self.parameter_segment(delimiters, parameter).ok_or_else(|| {
            StructureError::invalid_state(format!("{parameter} is not a parameter"))
        })?;
        let own_path = delimiters.join_path(path, &segment);

        let mut stack = vec![(parameter, own_path)];
        while let Some((current, current_path)) = stack.pop() {
            let children = self.children(current).to_vec();
            if let Some(state) = self
                .get_mut(current)
                .and_then(|el| el.kind.parameter_state_mut())
            {
                state.signature_element_path = Some(current_path.clone());
            }
            for child in children {
                if let Some(segment) = self.parameter_segment(delimiters, child) {
                    stack.push((child, delimiters.join_path(&current_path, &segment)));
                }
            }
        }
        Ok(())
    }

    /// Find the element below a `Parameters` node whose path equals `path`.
    ///
    /// The `Parameters` node's own path is its qualified identifier.
    pub fn find_by_parameter_path(
        &self,
        delimiters: &Delimiters,
        parameters: ElementId,
        path: &str,
    ) -> Option<ElementId> {
        let el = self.get(parameters)?;
        let base = el.qualified_identifier.clone().unwrap_or_default();
        if base == path {
            return Some(parameters);
        }

        let mut stack: Vec<(ElementId, String)> = Vec::new();
        for child in el.children.iter().rev() {
            if let Some(segment) = self.parameter_segment(delimiters, *child) {
                stack.push((*child, delimiters.join_path(&base, &segment)));
            }
        }
        while let Some((current, current_path)) = stack.pop() {
            if current_path == path {
                return Some(current);
            }
            for child in self.children(current).iter().rev() {
                if let Some(segment) = self.parameter_segment(delimiters, *child) {
                    stack.push((*child, delimiters.join_path(&current_path, &segment)));
                }
            }
        }
        None
    }

    /// Attach `documentation` to the element below `parameters` whose path equals
    /// the documentation's signature element identifier.
    ///
    /// Returns `Ok(false)` if the documentation names no element or nothing matches.
    pub fn add_matching_documentation(
        &mut self,
        delimiters: &Delimiters,
        parameters: ElementId,
        documentation: Documentation,
    ) -> Result<bool, StructureError> {
        self.get_checked(parameters)?;
        let Some(path) = documentation.signature_element_identifier.as_deref() else {
            return Ok(false);
        };

        match self.find_by_parameter_path(delimiters, parameters, path) {
            Some(target) => {
                self.add_documentation(target, documentation)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
