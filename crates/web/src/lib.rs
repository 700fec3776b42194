#![deny(missing_docs)]
//! Assomark web layer: site widgets, token dispatch, and the content
//! rendering pipeline.
//!
//! [`SiteExpander`] maps parsed inline tokens onto the association's
//! widgets (donation buttons, newsletter signup, internal links, ...)
//! using injected read-only stores, and [`pipeline::render_content`]
//! runs the full escape → expand → markdown chain a page renderer needs.
//!
//! Widget builders interpolate their arguments without escaping: callers
//! must HTML-escape untrusted text before expansion, which
//! [`pipeline::render_content`] does for the whole input up front.

/// Site configuration for the widget builders.
pub mod config;
/// Rendering context: web vs. email targets.
pub mod context;
/// Token dispatch onto site widgets.
pub mod expander;
/// Escape → expand → markdown rendering pipeline.
pub mod pipeline;
/// Injected read-only lookup interfaces.
pub mod stores;
/// HTML builders for the site widgets.
pub mod widgets;

pub use config::{ConfigError, SiteConfig};
pub use context::{RenderContext, RenderTarget};
pub use expander::SiteExpander;
pub use pipeline::{RenderError, render_content};
pub use stores::{CampaignStore, ContentStore, PanelStore};
