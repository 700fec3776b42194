//! Token dispatch: maps parsed inline tokens onto site widgets.

use assomark_core::{InlineToken, TokenExpander};

use crate::config::SiteConfig;
use crate::context::RenderContext;
use crate::stores::{CampaignStore, ContentStore, PanelStore};
use crate::widgets;

/// The site's token-class table.
///
/// Holds the configuration, the rendering context, and the injected
/// stores the handlers read from. Cheap to build per render; all fields
/// are borrowed.
///
/// Unresolvable references never fail the render: they degrade to a
/// visible `(((... pas trouvé ...)))` marker so editors notice the
/// broken reference on the page instead of in a log file.
pub struct SiteExpander<'a> {
    config: &'a SiteConfig,
    context: &'a RenderContext,
    content: &'a dyn ContentStore,
    campaigns: &'a dyn CampaignStore,
    panels: &'a dyn PanelStore,
}

impl<'a> SiteExpander<'a> {
    /// Builds an expander over the given collaborators.
    pub fn new(
        config: &'a SiteConfig,
        context: &'a RenderContext,
        content: &'a dyn ContentStore,
        campaigns: &'a dyn CampaignStore,
        panels: &'a dyn PanelStore,
    ) -> Self {
        Self {
            config,
            context,
            content,
            campaigns,
            panels,
        }
    }

    fn expand_donation(&self, token: &InlineToken) -> Option<String> {
        match token.label.as_str() {
            "" => Some(widgets::donation_button(self.config, &token.payload)),
            "large" => Some(widgets::donation_button_large(self.config, &token.payload)),
            "adhésion" => Some(widgets::membership_button(self.config, &token.payload)),
            other => other
                .strip_prefix("fixed|")
                .and_then(|amount| amount.parse::<u32>().ok())
                .map(|amount| {
                    widgets::fixed_amount_donation_button(self.config, amount, &token.payload)
                }),
        }
    }

    fn expand_newsletter(&self, token: &InlineToken) -> String {
        match self.campaigns.mailing_list_route(&token.label) {
            Some(route) => widgets::mailing_list_signup(
                &self.context.absolutize(&route),
                &token.label,
                &token.payload,
            ),
            None => {
                log::warn!("signup widget references unknown mailing list {:?}", token.label);
                format!("(((liste pas trouvée : {})))", token.label)
            }
        }
    }

    fn expand_panel(&self, token: &InlineToken) -> String {
        match self.panels.panel_html(&token.payload) {
            Some(html) => html,
            None => {
                log::error!("panel lookup failed for slug {:?}", token.payload);
                format!("(((panneau pas trouvé : {})))", token.payload)
            }
        }
    }

    fn expand_call_to_action(&self, token: &InlineToken) -> String {
        match self.content.route_for_slug(&token.payload) {
            Some(route) => {
                widgets::action_button(&self.context.absolutize(&route), &token.label)
            }
            None => {
                log::warn!("call to action references unknown content slug {:?}", token.payload);
                format!("(((pas trouvé : {})))", token.payload)
            }
        }
    }

    fn expand_internal_link(&self, token: &InlineToken) -> String {
        match self.content.route_for_slug(&token.payload) {
            Some(route) => {
                widgets::internal_link(&self.context.absolutize(&route), &token.label)
            }
            None => {
                log::warn!("internal link references unknown content slug {:?}", token.payload);
                format!("(((pas trouvé : {})))", token.payload)
            }
        }
    }

    fn expand_petition(&self, token: &InlineToken) -> String {
        // An unknown petition keeps the link shape; the marker becomes
        // the link target.
        let href = match self.campaigns.petition_route(&token.payload) {
            Some(route) => self.context.absolutize(&route),
            None => {
                log::warn!("petition link references unknown petition {:?}", token.payload);
                format!("(((pétition pas trouvée : {})))", token.payload)
            }
        };
        widgets::internal_link(&href, &token.label)
    }
}

impl TokenExpander for SiteExpander<'_> {
    fn expand(&self, token: &InlineToken) -> Option<String> {
        match token.class.as_str() {
            "don" => self.expand_donation(token),
            "news" => Some(self.expand_newsletter(token)),
            "panel" => Some(self.expand_panel(token)),
            // `action` is the deprecated spelling of `cta`.
            "cta" | "action" => Some(self.expand_call_to_action(token)),
            "slug" => Some(self.expand_internal_link(token)),
            "contact" => Some(widgets::contact_button(
                self.config,
                &token.label,
                &token.payload,
            )),
            "externe" => Some(widgets::external_link(&token.payload, &token.label)),
            "EXTERNE" => Some(widgets::external_link_button(&token.payload, &token.label)),
            "petition" => Some(self.expand_petition(token)),
            _ => None,
        }
    }
}
