//! Shared string constants.
//!
//! Preference keys are consumed by hosts and collaborators (e.g. the tagger
//! integration); the core only reads and writes the three configuration lists.

/// Identifier used for elements and roles created without a name.
pub const ANONYMOUS_IDENTIFIER: &str = "anonymous";

// ============================================================================
// PREFERENCE KEYS
// ============================================================================

/// Configured addressees (XML list of `addressee`).
pub const ADDRESSEES: &str = "ADDRESSEES";

/// Configured thematic roles (XML list of `thematicRole`).
pub const THEMATIC_ROLES: &str = "THEMATIC_ROLES";

/// Configured thematic grids, i.e. the verb-class to role mapping
/// (XML list of `thematicGrid`).
pub const VERBCLASS_ROLE_MAPPING: &str = "VERBCLASS_ROLE_MAPPING";

/// Path of the part-of-speech tagger model.
pub const TAGGER_MODEL_FILE: &str = "TAGGER_MODEL_FILE";

/// Path of the WordNet dictionary used by the tagger integration.
pub const WORDNET_PATH: &str = "WORDNET_PATH";

// ============================================================================
// XML ALIASES
// ============================================================================

pub const XML_ALIAS_THEMATIC_GRID: &str = "thematicGrid";
pub const XML_ALIAS_THEMATIC_ROLE: &str = "thematicRole";
pub const XML_ALIAS_ADDRESSEE: &str = "addressee";

/// Root element of every persisted configuration list.
pub const XML_LIST: &str = "list";
