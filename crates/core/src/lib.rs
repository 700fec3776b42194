#![deny(missing_docs)]
//! Assomark core: scanning and expansion of inline campaign tokens.
//!
//! Editorial text on the site may carry inline tokens of the form
//! `[[class:label]]((payload))`: donation buttons, signup widgets,
//! internal links. This crate owns the character-level scanner and the
//! [`TokenExpander`] seam through which the site layer supplies the
//! actual HTML for each token class. The scanner itself is total: any
//! input, well-formed or not, produces a string, and malformed token
//! attempts degrade to literal pass-through.

/// Character-level scanner for inline tokens.
pub mod scanner;
/// Parsed token type and the expansion hook trait.
pub mod token;

pub use scanner::expand_inline_tokens;
pub use token::{InlineToken, TokenExpander};
