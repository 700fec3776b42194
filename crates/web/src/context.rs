//! Rendering context passed to the expansion handlers.

/// Where the rendered output will be displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    /// A page served directly over HTTP; site-relative URLs are fine.
    Web,
    /// Content embedded in an outgoing email; every link must be
    /// absolute because the reader has no origin to resolve against.
    Email {
        /// Site origin used to absolutize routes, e.g. `https://example.org`.
        base_url: String,
    },
}

/// Per-render context owned by the caller and read-only to the
/// transformer. One context serves one `transform` call; concurrent
/// renders each carry their own.
#[derive(Clone, Debug)]
pub struct RenderContext {
    target: RenderTarget,
}

impl RenderContext {
    /// Context for direct web display.
    pub fn web() -> Self {
        Self {
            target: RenderTarget::Web,
        }
    }

    /// Context for email rendering, absolutizing against `base_url`.
    pub fn email(base_url: impl Into<String>) -> Self {
        Self {
            target: RenderTarget::Email {
                base_url: base_url.into(),
            },
        }
    }

    /// Returns the rendering target.
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Qualifies a site-relative route with the site origin when
    /// rendering for email. Absolute URLs and web renders pass through.
    pub fn absolutize(&self, route: &str) -> String {
        match &self.target {
            RenderTarget::Email { base_url } if route.starts_with('/') => {
                format!("{}{}", base_url.trim_end_matches('/'), route)
            }
            _ => route.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_renders_keep_relative_routes() {
        let ctx = RenderContext::web();
        assert_eq!(ctx.absolutize("/tb/t/my-slug/"), "/tb/t/my-slug/");
    }

    #[test]
    fn email_renders_qualify_relative_routes() {
        let ctx = RenderContext::email("https://example.org");
        assert_eq!(
            ctx.absolutize("/tb/t/my-slug/"),
            "https://example.org/tb/t/my-slug/"
        );
    }

    #[test]
    fn trailing_slash_on_origin_is_tolerated() {
        let ctx = RenderContext::email("https://example.org/");
        assert_eq!(ctx.absolutize("/p/"), "https://example.org/p/");
    }

    #[test]
    fn absolute_urls_are_left_alone() {
        let ctx = RenderContext::email("https://example.org");
        assert_eq!(ctx.absolutize("https://other.org/x"), "https://other.org/x");
    }
}
