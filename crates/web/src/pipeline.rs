//! Full content-rendering pipeline: escape, expand, render markdown.
//!
//! Content fields are authored as markdown with inline campaign tokens.
//! Rendering order matters: the raw text is HTML-escaped first (so no
//! user-supplied HTML survives), tokens are expanded second (the widgets
//! are the only HTML introduced), and markdown is rendered last with
//! dangerous HTML allowed so the widget markup passes through intact.

use assomark_core::expand_inline_tokens;
use thiserror::Error;

use crate::expander::SiteExpander;

/// Failure in the markdown stage of the pipeline.
///
/// Token expansion itself is total; only the downstream markdown
/// renderer can reject its input.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The markdown renderer rejected the expanded text.
    #[error("markdown rendering failed: {0}")]
    Markdown(String),
}

/// Renders one content field to HTML safe for template insertion.
pub fn render_content(input: &str, expander: &SiteExpander<'_>) -> Result<String, RenderError> {
    // Escapes & < > " '. Quotes are included so token payloads stay
    // attribute-safe inside the widget HTML.
    let escaped = html_escape::encode_quoted_attribute(input);
    let expanded = expand_inline_tokens(&escaped, expander);

    let options = markdown::Options {
        compile: markdown::CompileOptions {
            allow_dangerous_html: true,
            ..markdown::CompileOptions::default()
        },
        ..markdown::Options::default()
    };
    markdown::to_html_with_options(&expanded, &options)
        .map_err(|message| RenderError::Markdown(message.to_string()))
}
