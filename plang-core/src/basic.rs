use alloc::string::String;

/// A lowercase identifier, the only atom of the language
///
/// The lexer only ever produces text matching `[a-z]+`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ident(pub String);

impl core::fmt::Debug for Ident {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Self(String::from(s))
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Ident {
    pub fn matches(&self, s: &str) -> bool {
        self.0 == s
    }
}
