//! String key/value store backed by an XML file.
//!
//! ```xml
//! <preferences>
//!   <entry key="THEMATIC_ROLES">&lt;list&gt;...&lt;/list&gt;</entry>
//! </preferences>
//! ```
//!
//! Values are stored as element text, so leading and trailing whitespace of a
//! value is not preserved.

use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use super::error::PersistenceError;
use super::xml::{XmlNode, parse_document, write_document};

const ROOT: &str = "preferences";
const ENTRY: &str = "entry";
const KEY: &str = "key";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceStore {
    values: IndexMap<String, String>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of `key`, or the empty string if unset.
    pub fn get_string(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn from_xml(input: &str) -> Result<Self, PersistenceError> {
        let root = parse_document(input)?;
        if root.name != ROOT {
            return Err(PersistenceError::invalid(
                "preferences",
                format!("unexpected root element <{}>", root.name),
            ));
        }

        let mut store = Self::new();
        for entry in root.children_named(ENTRY) {
            let key = entry
                .attribute(KEY)
                .ok_or_else(|| PersistenceError::missing("attribute", KEY))?;
            store.put(key, entry.text.clone());
        }
        Ok(store)
    }

    pub fn to_xml(&self) -> Result<String, PersistenceError> {
        let mut root = XmlNode::new(ROOT);
        for (key, value) in &self.values {
            root.push(XmlNode::with_text(ENTRY, value.clone()).with_attribute(KEY, key.clone()));
        }
        write_document(&root)
    }

    /// Read a store from `path`; a missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        if !path.exists() {
            debug!(path = %path.display(), "no preference file, starting empty");
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_xml(&content)?;
        debug!(path = %path.display(), entries = store.len(), "loaded preferences");
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        std::fs::write(path, self.to_xml()?)?;
        debug!(path = %path.display(), entries = self.len(), "saved preferences");
        Ok(())
    }
}
