/// Grammatical number of a signature element.
///
/// A parameter typed as a collection is `Plural`; everything else is `Singular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Numerus {
    #[default]
    Singular,
    Plural,
}

impl Numerus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singular => "SINGULAR",
            Self::Plural => "PLURAL",
        }
    }

    /// Parse the persisted name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("SINGULAR") {
            Some(Self::Singular)
        } else if name.eq_ignore_ascii_case("PLURAL") {
            Some(Self::Plural)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Numerus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
