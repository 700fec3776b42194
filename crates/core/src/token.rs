//! Parsed inline token and the expansion hook trait.

use std::fmt;

/// A fully parsed `[[class:label]]((payload))` token, ready for dispatch.
///
/// The scanner accumulates the three parts verbatim; no trimming or case
/// folding is applied, so `externe` and `EXTERNE` are distinct classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineToken {
    /// Token class selecting the expansion (e.g. `don`, `news`, `slug`).
    pub class: String,
    /// Free-text caption between `:` and `]]`. May be empty.
    pub label: String,
    /// Free-text argument between `((` and `))`. Colons permitted.
    pub payload: String,
}

impl InlineToken {
    /// Re-serializes the token in its canonical source form.
    ///
    /// Used when no expansion applies: the token round-trips through the
    /// transform unchanged, so running the transform twice is a no-op.
    pub fn canonical(&self) -> String {
        format!("[[{}:{}]](({}))", self.class, self.label, self.payload)
    }
}

impl fmt::Display for InlineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Hook mapping a parsed token to its replacement text.
///
/// Implementations hold whatever collaborators they need (site
/// configuration, content lookups); the scanner itself stays free of
/// those dependencies. Returning `None` marks the class as unrecognized,
/// and the scanner emits [`InlineToken::canonical`] instead.
pub trait TokenExpander {
    /// Returns the replacement text for `token`, or `None` when the
    /// class is not recognized.
    fn expand(&self, token: &InlineToken) -> Option<String>;
}

impl<F> TokenExpander for F
where
    F: Fn(&InlineToken) -> Option<String>,
{
    fn expand(&self, token: &InlineToken) -> Option<String> {
        (self)(token)
    }
}
