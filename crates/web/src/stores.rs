//! Read-only lookup interfaces consumed by the expansion handlers.
//!
//! The transformer has no database dependency of its own: the page
//! renderer injects whatever backs these traits (ORM queries in
//! production, maps in tests). All lookups return `None` for unknown
//! keys; the handlers degrade to visible placeholders in that case.

/// Content items addressable by slug.
pub trait ContentStore {
    /// Site-relative route of the content item with this slug, or
    /// `None` when the slug does not resolve to a routable item.
    fn route_for_slug(&self, slug: &str) -> Option<String>;
}

/// Mailing lists and petitions, addressable by name and slug.
///
/// These live in one store because a petition is a mailing list with a
/// signature form in front of it.
pub trait CampaignStore {
    /// Signup route for the named mailing list.
    fn mailing_list_route(&self, name: &str) -> Option<String>;

    /// Signature route for the petition with this slug.
    fn petition_route(&self, slug: &str) -> Option<String>;
}

/// Pre-rendered content panels addressable by slug.
pub trait PanelStore {
    /// Rendered HTML of the panel with this slug.
    fn panel_html(&self, slug: &str) -> Option<String>;
}
