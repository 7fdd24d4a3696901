/// Separators a source language uses in qualified identifiers and
/// parameter paths.
///
/// A parameter path segment has the form `qualifiedName<type>qualifiedType`,
/// segments are joined with `path_delimiter`:
///
/// ```text
/// customer:de.example.Customer/address:de.example.Address
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiters {
    pub type_delimiter: String,
    pub namespace_delimiter: String,
    pub path_delimiter: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(":", ".", "/")
    }
}

impl Delimiters {
    pub fn new(
        type_delimiter: impl Into<String>,
        namespace_delimiter: impl Into<String>,
        path_delimiter: impl Into<String>,
    ) -> Self {
        Self {
            type_delimiter: type_delimiter.into(),
            namespace_delimiter: namespace_delimiter.into(),
            path_delimiter: path_delimiter.into(),
        }
    }

    /// Build one path segment for a parameter.
    pub fn path_segment(&self, qualified_identifier: &str, qualified_type: Option<&str>) -> String {
        match qualified_type {
            Some(ty) => format!("{qualified_identifier}{}{ty}", self.type_delimiter),
            None => qualified_identifier.to_string(),
        }
    }

    /// Append a segment to an existing path.
    pub fn join_path(&self, path: &str, segment: &str) -> String {
        if path.is_empty() {
            segment.to_string()
        } else {
            format!("{path}{}{segment}", self.path_delimiter)
        }
    }

    /// Split a full path into its segments.
    pub fn split_path<'a>(&self, path: &'a str) -> Vec<&'a str> {
        if path.is_empty() || self.path_delimiter.is_empty() {
            return vec![path];
        }
        path.split(self.path_delimiter.as_str()).collect()
    }

    /// Parse one path segment into its identifier and type parts.
    pub fn parse_path_element(&self, path_element: &str) -> ParameterPathElement {
        let split = if self.type_delimiter.is_empty() {
            None
        } else {
            path_element.split_once(self.type_delimiter.as_str())
        };

        match split {
            Some((name, ty)) => ParameterPathElement {
                qualified_identifier: name.to_string(),
                identifier: self.simple_name(name).to_string(),
                qualified_type_name: Some(ty.to_string()),
                type_name: Some(self.simple_name(ty).to_string()),
            },
            None => ParameterPathElement {
                qualified_identifier: path_element.to_string(),
                identifier: self.simple_name(path_element).to_string(),
                qualified_type_name: None,
                type_name: None,
            },
        }
    }

    /// The part after the last namespace delimiter.
    pub fn simple_name<'a>(&self, qualified: &'a str) -> &'a str {
        if self.namespace_delimiter.is_empty() {
            return qualified;
        }
        match qualified.rfind(self.namespace_delimiter.as_str()) {
            Some(pos) => &qualified[pos + self.namespace_delimiter.len()..],
            None => qualified,
        }
    }
}

/// One parsed segment of a parameter path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterPathElement {
    pub identifier: String,
    pub qualified_identifier: String,
    pub type_name: Option<String>,
    pub qualified_type_name: Option<String>,
}
