//! Text utilities for identifiers and persisted descriptions.

use indexmap::IndexSet;

pub const SPACE: &str = " ";

/// Insert blanks at camel-case boundaries.
///
/// Underscores become blanks. A blank is inserted before an ASCII capital that
/// follows a non-capital, so runs of capitals (acronyms) stay together.
///
/// ```
/// use idocit::base::text::add_blanks_to_camel_syntax;
///
/// assert_eq!(add_blanks_to_camel_syntax("removeName"), "remove Name");
/// assert_eq!(add_blanks_to_camel_syntax("RemoveName"), "Remove Name");
/// assert_eq!(add_blanks_to_camel_syntax("parseXMLFile"), "parse XMLFile");
/// ```
pub fn add_blanks_to_camel_syntax(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    // Acts as a lower-case predecessor so a leading capital gets a blank too.
    let mut prev = 'a';

    for c in label.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_ascii_uppercase() && !prev.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
        prev = c;
    }

    out.trim().to_string()
}

/// True for empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Collapse tabs, line breaks and repeated blanks into single blanks and trim.
pub fn clean_formatting(text: &str) -> String {
    text.split(|c: char| c == '\r' || c == '\n' || c == '\t' || c == ' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(SPACE)
}

/// Join all lines with a single blank.
pub fn remove_line_breaks(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(SPACE)
}

/// Split on `delimiter` and trim each token; duplicates collapse.
pub fn convert_into_token_set(token_sequence: &str, delimiter: &str) -> IndexSet<String> {
    token_sequence
        .split(delimiter)
        .map(|token| token.trim().to_string())
        .collect()
}

pub fn comma_separated<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(token.as_ref());
    }
    out
}
