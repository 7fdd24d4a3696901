//! Pluggable interface parsers.
//!
//! Parsers for concrete source languages live outside this crate. They are
//! registered in a [`ParserRegistry`] under the file extension they handle
//! and looked up by that extension when an interface file is opened.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;
use tracing::{debug, info};

use crate::base::Delimiters;
use crate::structure::SignatureTree;

#[derive(Debug, Error)]
pub enum ParsingError {
    /// No parser is registered for the file type.
    #[error("Type not supported: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The parser rejected the file.
    #[error("Parser error: {0}")]
    Parser(String),
}

impl ParsingError {
    pub fn parser(msg: impl Into<String>) -> Self {
        Self::Parser(msg.into())
    }
}

/// A parser turning interface files of one type into signature trees.
pub trait InterfaceParser: Send + Sync {
    /// Parse the interface file at `path`.
    fn parse(&self, path: &Path) -> Result<SignatureTree, ParsingError>;

    /// Write the documentation held by `tree` back into the file at `path`.
    fn write(&self, tree: &SignatureTree, path: &Path) -> Result<(), ParsingError>;

    /// Whether this parser handles files with extension `file_type`.
    fn is_supported(&self, file_type: &str) -> bool {
        self.supported_type().eq_ignore_ascii_case(file_type)
    }

    /// File extension this parser handles, without the dot.
    fn supported_type(&self) -> &str;

    /// Delimiters used in this language's qualified identifiers.
    fn delimiters(&self) -> Delimiters {
        Delimiters::default()
    }
}

/// File extension of `path`, lower-cased.
pub fn file_type(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_lowercase)
}

/// Parsers keyed by lower-cased file extension.
///
/// Registration may happen from several threads while parsers are
/// discovered; lookups afterwards only take the read lock.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: RwLock<FxHashMap<SmolStr, Arc<dyn InterfaceParser>>>,
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("types", &self.supported_types())
            .finish()
    }
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `parser` under its supported type, replacing any parser
    /// registered for that type before.
    pub fn register(&self, parser: Arc<dyn InterfaceParser>) {
        let key = SmolStr::new(parser.supported_type().to_lowercase());
        debug!(file_type = %key, "registering interface parser");
        self.parsers.write().insert(key, parser);
    }

    pub fn with_parser(self, parser: Arc<dyn InterfaceParser>) -> Self {
        self.register(parser);
        self
    }

    pub fn parser(&self, file_type: &str) -> Option<Arc<dyn InterfaceParser>> {
        self.parsers.read().get(file_type.to_lowercase().as_str()).cloned()
    }

    pub fn is_supported(&self, file_type: &str) -> bool {
        self.parsers.read().contains_key(file_type.to_lowercase().as_str())
    }

    /// Delimiters of the parser for `file_type`.
    pub fn delimiters(&self, file_type: &str) -> Option<Delimiters> {
        self.parser(file_type).map(|parser| parser.delimiters())
    }

    /// Registered types in sorted order.
    pub fn supported_types(&self) -> Vec<SmolStr> {
        let mut types: Vec<_> = self.parsers.read().keys().cloned().collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.parsers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.read().is_empty()
    }
}

/// Parse `path` with the parser registered for its extension.
///
/// Returns `Ok(None)` when the path has no extension or no parser handles it.
pub fn load_interface(
    registry: &ParserRegistry,
    path: &Path,
) -> Result<Option<SignatureTree>, ParsingError> {
    let Some(file_type) = file_type(path) else {
        info!(path = %path.display(), "interface file has no extension, not supported");
        return Ok(None);
    };
    let Some(parser) = registry.parser(&file_type) else {
        info!(file_type, path = %path.display(), "interface type not supported");
        return Ok(None);
    };

    parser.parse(path).map(Some)
}

/// Write `tree` back to `path` with the parser registered for its extension.
pub fn write_interface(
    registry: &ParserRegistry,
    tree: &SignatureTree,
    path: &Path,
) -> Result<(), ParsingError> {
    let file_type = file_type(path).unwrap_or_default();
    match registry.parser(&file_type) {
        Some(parser) => parser.write(tree, path),
        None => {
            info!(file_type, path = %path.display(), "interface type not supported");
            Err(ParsingError::Unsupported(file_type))
        }
    }
}
