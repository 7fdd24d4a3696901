//! XML form of roles, addressees and grids, and their storage in a
//! [`PreferenceStore`].
//!
//! Every collection is a `<list>` of aliased items, one child element per
//! field:
//!
//! ```xml
//! <list>
//!   <thematicGrid>
//!     <name>Searching Operations</name>
//!     <verbs><string>find</string></verbs>
//!     <roles>
//!       <entry>
//!         <thematicRole><name>OBJECT</name><roleScope>BOTH</roleScope></thematicRole>
//!         <boolean>true</boolean>
//!       </entry>
//!     </roles>
//!     <gridBasedRules>
//!       <entry><string>OBJECT</string><string><![CDATA[isPlural(OBJECT)]]></string></entry>
//!     </gridBasedRules>
//!   </thematicGrid>
//! </list>
//! ```

use std::path::Path;

use tracing::{debug, warn};

use crate::base::ByName;
use crate::base::constants::{
    ADDRESSEES, THEMATIC_ROLES, VERBCLASS_ROLE_MAPPING, XML_ALIAS_ADDRESSEE,
    XML_ALIAS_THEMATIC_GRID, XML_ALIAS_THEMATIC_ROLE, XML_LIST,
};
use crate::base::text::{clean_formatting, remove_line_breaks};
use crate::structure::{Addressee, RoleScope, ThematicGrid, ThematicRole};

use super::error::PersistenceError;
use super::preferences::PreferenceStore;
use super::xml::{XmlNode, parse_document, write_document};

const NAME: &str = "name";
const DESCRIPTION: &str = "description";
const ROLE_SCOPE: &str = "roleScope";
const IS_DEFAULT: &str = "isDefault";
const VERBS: &str = "verbs";
const ROLES: &str = "roles";
const REFERENCE_VERB: &str = "referenceVerb";
const GRID_BASED_RULES: &str = "gridBasedRules";
const ENTRY: &str = "entry";
const STRING: &str = "string";
const BOOLEAN: &str = "boolean";

// ============================================================================
// ITEM CODECS
// ============================================================================

fn role_node(role: &ThematicRole) -> XmlNode {
    let mut node = XmlNode::new(XML_ALIAS_THEMATIC_ROLE).with_child(XmlNode::with_text(NAME, role.name.as_str()));
    if let Some(description) = &role.description {
        node.push(XmlNode::with_text(DESCRIPTION, description.clone()));
    }
    node.with_child(XmlNode::with_text(ROLE_SCOPE, role.role_scope.as_str()))
}

fn parse_role(node: &XmlNode) -> Result<ThematicRole, PersistenceError> {
    let name = node
        .child_text(NAME)
        .ok_or_else(|| PersistenceError::missing("element", format!("{XML_ALIAS_THEMATIC_ROLE}/{NAME}")))?;

    let role_scope = match node.child_text(ROLE_SCOPE) {
        Some(scope) => RoleScope::from_name(scope.trim()).ok_or_else(|| {
            PersistenceError::invalid(ROLE_SCOPE, format!("unknown role scope '{scope}'"))
        })?,
        None => RoleScope::default(),
    };

    Ok(ThematicRole {
        name: clean_formatting(name).into(),
        description: node.child_text(DESCRIPTION).map(clean_formatting),
        role_scope,
    })
}

fn addressee_node(addressee: &Addressee) -> XmlNode {
    XmlNode::new(XML_ALIAS_ADDRESSEE)
        .with_child(XmlNode::with_text(NAME, addressee.name.as_str()))
        .with_child(XmlNode::with_text(DESCRIPTION, addressee.description.clone()))
        .with_child(XmlNode::with_text(IS_DEFAULT, addressee.is_default.to_string()))
}

fn parse_bool(kind: &'static str, text: &str) -> Result<bool, PersistenceError> {
    text.trim()
        .parse()
        .map_err(|_| PersistenceError::invalid(kind, format!("expected true or false, got '{text}'")))
}

fn parse_addressee(node: &XmlNode) -> Result<Addressee, PersistenceError> {
    let name = node
        .child_text(NAME)
        .ok_or_else(|| PersistenceError::missing("element", format!("{XML_ALIAS_ADDRESSEE}/{NAME}")))?;
    let is_default = match node.child_text(IS_DEFAULT) {
        Some(text) => parse_bool(IS_DEFAULT, text)?,
        None => true,
    };

    Ok(Addressee::new(clean_formatting(name))
        .with_description(clean_formatting(node.child_text(DESCRIPTION).unwrap_or_default()))
        .with_default(is_default))
}

fn grid_node(grid: &ThematicGrid) -> XmlNode {
    let mut node = XmlNode::new(XML_ALIAS_THEMATIC_GRID);
    if let Some(name) = &grid.name {
        node.push(XmlNode::with_text(NAME, name.clone()));
    }
    if let Some(description) = &grid.description {
        node.push(XmlNode::with_text(DESCRIPTION, description.clone()));
    }

    let mut verbs = XmlNode::new(VERBS);
    for verb in &grid.verbs {
        verbs.push(XmlNode::with_text(STRING, verb.clone()));
    }
    node.push(verbs);

    let mut roles = XmlNode::new(ROLES);
    for (role, mandatory) in &grid.roles {
        roles.push(
            XmlNode::new(ENTRY)
                .with_child(role_node(role))
                .with_child(XmlNode::with_text(BOOLEAN, mandatory.to_string())),
        );
    }
    node.push(roles);

    if let Some(verb) = &grid.reference_verb {
        node.push(XmlNode::with_text(REFERENCE_VERB, verb.clone()));
    }

    let mut rules = XmlNode::new(GRID_BASED_RULES);
    for (role_name, rule) in &grid.grid_based_rules {
        rules.push(
            XmlNode::new(ENTRY)
                .with_child(XmlNode::with_text(STRING, role_name.clone()))
                .with_child(XmlNode::with_cdata(STRING, rule.clone())),
        );
    }
    node.with_child(rules)
}

fn parse_grid(node: &XmlNode) -> Result<ThematicGrid, PersistenceError> {
    let mut grid = ThematicGrid {
        name: node.child_text(NAME).map(clean_formatting),
        description: node.child_text(DESCRIPTION).map(clean_formatting),
        reference_verb: node.child_text(REFERENCE_VERB).map(|verb| verb.trim().to_string()),
        ..ThematicGrid::default()
    };

    if let Some(verbs) = node.child(VERBS) {
        grid.verbs = verbs
            .children_named(STRING)
            .map(|verb| verb.text.trim().to_string())
            .collect();
    }

    if let Some(roles) = node.child(ROLES) {
        for entry in roles.children_named(ENTRY) {
            let role = entry
                .child(XML_ALIAS_THEMATIC_ROLE)
                .ok_or_else(|| PersistenceError::missing("element", format!("{ROLES}/{ENTRY}/{XML_ALIAS_THEMATIC_ROLE}")))?;
            let mandatory = entry
                .child_text(BOOLEAN)
                .ok_or_else(|| PersistenceError::missing("element", format!("{ROLES}/{ENTRY}/{BOOLEAN}")))?;
            grid.roles.insert(parse_role(role)?, parse_bool(BOOLEAN, mandatory)?);
        }
    }

    if let Some(rules) = node.child(GRID_BASED_RULES) {
        for entry in rules.children_named(ENTRY) {
            let mut strings = entry.children_named(STRING);
            match (strings.next(), strings.next()) {
                (Some(role_name), Some(rule)) => {
                    grid.grid_based_rules
                        .insert(role_name.text.trim().to_string(), rule.text.clone());
                }
                _ => {
                    return Err(PersistenceError::invalid(
                        GRID_BASED_RULES,
                        "entry needs a role name and a rule",
                    ));
                }
            }
        }
    }

    Ok(grid)
}

fn list_to_xml<T>(items: &[T], encode: impl Fn(&T) -> XmlNode) -> Result<String, PersistenceError> {
    let mut list = XmlNode::new(XML_LIST);
    for item in items {
        list.push(encode(item));
    }
    write_document(&list)
}

fn list_from_xml<T>(
    input: &str,
    alias: &str,
    decode: impl Fn(&XmlNode) -> Result<T, PersistenceError>,
) -> Result<Vec<T>, PersistenceError> {
    let list = parse_document(input)?;
    if list.name != XML_LIST {
        return Err(PersistenceError::invalid(
            "list",
            format!("unexpected root element <{}>", list.name),
        ));
    }
    list.children_named(alias).map(decode).collect()
}

pub fn thematic_roles_to_xml(roles: &[ThematicRole]) -> Result<String, PersistenceError> {
    list_to_xml(roles, role_node)
}

pub fn thematic_roles_from_xml(input: &str) -> Result<Vec<ThematicRole>, PersistenceError> {
    list_from_xml(input, XML_ALIAS_THEMATIC_ROLE, parse_role)
}

pub fn addressees_to_xml(addressees: &[Addressee]) -> Result<String, PersistenceError> {
    list_to_xml(addressees, addressee_node)
}

pub fn addressees_from_xml(input: &str) -> Result<Vec<Addressee>, PersistenceError> {
    list_from_xml(input, XML_ALIAS_ADDRESSEE, parse_addressee)
}

pub fn thematic_grids_to_xml(grids: &[ThematicGrid]) -> Result<String, PersistenceError> {
    list_to_xml(grids, grid_node)
}

pub fn thematic_grids_from_xml(input: &str) -> Result<Vec<ThematicGrid>, PersistenceError> {
    list_from_xml(input, XML_ALIAS_THEMATIC_GRID, parse_grid)
}

// ============================================================================
// PREFERENCE STORE
// ============================================================================

fn is_initialized(store: &PreferenceStore, key: &str) -> bool {
    store.contains(key) && !store.get_string(key).is_empty()
}

pub fn are_addressees_initialized(store: &PreferenceStore) -> bool {
    is_initialized(store, ADDRESSEES)
}

pub fn are_thematic_roles_initialized(store: &PreferenceStore) -> bool {
    is_initialized(store, THEMATIC_ROLES)
}

pub fn are_thematic_grids_initialized(store: &PreferenceStore) -> bool {
    is_initialized(store, VERBCLASS_ROLE_MAPPING)
}

/// Decode the list stored under `key`; absent, blank or malformed values
/// yield an empty list.
fn load_list<T>(
    store: &PreferenceStore,
    key: &str,
    decode: impl Fn(&str) -> Result<Vec<T>, PersistenceError>,
) -> Vec<T> {
    let value = store.get_string(key);
    if value.trim().is_empty() {
        return Vec::new();
    }
    match decode(value) {
        Ok(items) => {
            debug!(key, count = items.len(), "loaded configuration list");
            items
        }
        Err(e) => {
            warn!(key, error = %e, "stored configuration is malformed, nothing loaded");
            Vec::new()
        }
    }
}

/// Store addressees with line breaks removed from their descriptions.
pub fn persist_addressees(
    store: &mut PreferenceStore,
    addressees: &[Addressee],
) -> Result<(), PersistenceError> {
    let cleaned: Vec<Addressee> = addressees
        .iter()
        .map(|addressee| {
            let description = remove_line_breaks(&addressee.description);
            addressee.clone().with_description(description)
        })
        .collect();
    store.put(ADDRESSEES, addressees_to_xml(&cleaned)?);
    Ok(())
}

pub fn load_addressees(store: &PreferenceStore) -> Vec<Addressee> {
    load_list(store, ADDRESSEES, addressees_from_xml)
}

/// Store roles sorted by name with line breaks removed from their descriptions.
pub fn persist_thematic_roles(
    store: &mut PreferenceStore,
    roles: &[ThematicRole],
) -> Result<(), PersistenceError> {
    let cleaned: Vec<ThematicRole> = roles
        .iter()
        .map(|role| ThematicRole {
            description: role.description.as_deref().map(remove_line_breaks),
            ..role.clone()
        })
        .collect();
    store.put(THEMATIC_ROLES, thematic_roles_to_xml(&ByName.sorted(cleaned))?);
    Ok(())
}

/// Stored roles, sorted by name.
pub fn load_thematic_roles(store: &PreferenceStore) -> Vec<ThematicRole> {
    ByName.sorted(load_list(store, THEMATIC_ROLES, thematic_roles_from_xml))
}

/// `grid` as it reads back from storage: names and descriptions on one line,
/// verbs trimmed. Rule scripts are kept verbatim.
fn flattened_grid(grid: &ThematicGrid) -> ThematicGrid {
    ThematicGrid {
        name: grid.name.as_deref().map(clean_formatting),
        description: grid.description.as_deref().map(clean_formatting),
        verbs: grid.verbs.iter().map(|verb| verb.trim().to_string()).collect(),
        roles: grid
            .roles
            .iter()
            .map(|(role, mandatory)| {
                let role = ThematicRole {
                    name: clean_formatting(&role.name).into(),
                    description: role.description.as_deref().map(clean_formatting),
                    ..role.clone()
                };
                (role, *mandatory)
            })
            .collect(),
        reference_verb: grid.reference_verb.as_deref().map(|verb| verb.trim().to_string()),
        grid_based_rules: grid
            .grid_based_rules
            .iter()
            .map(|(role_name, rule)| (role_name.trim().to_string(), rule.clone()))
            .collect(),
    }
}

fn flattened_grids(grids: &[ThematicGrid]) -> Vec<ThematicGrid> {
    grids.iter().map(flattened_grid).collect()
}

/// Store grids with names and descriptions flattened onto one line.
pub fn persist_thematic_grids(
    store: &mut PreferenceStore,
    grids: &[ThematicGrid],
) -> Result<(), PersistenceError> {
    store.put(VERBCLASS_ROLE_MAPPING, thematic_grids_to_xml(&flattened_grids(grids))?);
    Ok(())
}

pub fn load_thematic_grids(store: &PreferenceStore) -> Vec<ThematicGrid> {
    load_list(store, VERBCLASS_ROLE_MAPPING, thematic_grids_from_xml)
}

/// Write grids to a standalone XML file, flattened as on persist.
pub fn export_thematic_grids(path: &Path, grids: &[ThematicGrid]) -> Result<(), PersistenceError> {
    std::fs::write(path, thematic_grids_to_xml(&flattened_grids(grids))?)?;
    debug!(path = %path.display(), count = grids.len(), "exported thematic grids");
    Ok(())
}

/// Read grids from a file written by [`export_thematic_grids`].
pub fn import_thematic_grids(path: &Path) -> Result<Vec<ThematicGrid>, PersistenceError> {
    let grids = thematic_grids_from_xml(&std::fs::read_to_string(path)?)?;
    debug!(path = %path.display(), count = grids.len(), "imported thematic grids");
    Ok(grids)
}
