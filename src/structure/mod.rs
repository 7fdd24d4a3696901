//! Signature elements, their documentation and the thematic vocabulary.
//!
//! A parser turns an interface file into a [`SignatureTree`]; documentation
//! entries are attached to its elements using [`ThematicRole`]s and
//! [`Addressee`]s, guided by [`ThematicGrid`]s.

mod described;
mod documentation;
mod element;
mod error;
mod grid;
mod navigate;
mod recommendations;
mod tree;

pub use described::{Addressee, RoleScope, ThematicRole};
pub use documentation::{Documentation, Scope, find_documentation_by_role_name};
pub use element::{
    ElementId, ElementKind, ElementVariant, NewElement, ParameterState, ParameterType,
    SignatureElement,
};
pub use error::StructureError;
pub use grid::ThematicGrid;
pub use recommendations::{RolesRecommendations, merge_second_level};
pub use tree::{ElementShape, SignatureTree, TreeId};
