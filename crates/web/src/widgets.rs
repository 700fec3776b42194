//! HTML builders for the site widgets.
//!
//! Each builder is a pure function from its arguments to a finished
//! HTML snippet. Arguments are interpolated verbatim: the rendering
//! pipeline escapes the whole input before token expansion, so by the
//! time a caption or URL reaches a builder it is already attribute-safe.

use std::fmt::Write as _;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::config::SiteConfig;

/// Characters that must not appear raw in a `mailto:` subject.
const MAILTO_SUBJECT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'?');

const ARROW_ICON: &str = r#"<i class="fa fa-arrow-right" aria-hidden="true"></i>"#;

/// Standard donation button.
pub fn donation_button(config: &SiteConfig, caption: &str) -> String {
    format!(
        r#"<a href="{url}" class="btn btn-primary" role="button" target="_blank">{caption}</a>"#,
        url = config.donation_form_url,
    )
}

/// Large donation button with a trailing arrow, as used on landing pages.
pub fn donation_button_large(config: &SiteConfig, caption: &str) -> String {
    format!(
        r#"<p class="pl-5"><a href="{url}" class="btn donation-button btn-lg" target="_blank">{caption} {ARROW_ICON}</a></p>"#,
        url = config.donation_form_url,
    )
}

/// Membership ("adhésion") signup button.
pub fn membership_button(config: &SiteConfig, caption: &str) -> String {
    format!(
        r#"<a href="{url}" class="btn donation-button btn-sm" role="button" target="_blank">{caption}</a>"#,
        url = config.membership_form_url,
    )
}

/// Donation button preset to a fixed amount in euros.
pub fn fixed_amount_donation_button(config: &SiteConfig, amount: u32, caption: &str) -> String {
    format!(
        r#"<a href="{url}?amount={amount}" class="btn btn-primary" role="button" target="_blank">{caption}</a>"#,
        url = config.donation_form_url,
    )
}

/// Call-to-action button linking to a content item.
pub fn action_button(url: &str, caption: &str) -> String {
    format!(r#"<p><a href="{url}" class="btn cta-button btn-lg">{caption} {ARROW_ICON}</a></p>"#)
}

/// Button opening the reader's mail client towards the contact address.
pub fn contact_button(config: &SiteConfig, caption: &str, subject: &str) -> String {
    let subject = utf8_percent_encode(subject, MAILTO_SUBJECT);
    format!(
        r#"<p class="pl-5"><a href="mailto:{email}?subject={subject}" class="btn cta-button btn-lg">{caption} {ARROW_ICON}</a></p>"#,
        email = config.contact_email,
    )
}

/// Plain external hyperlink, opened in a new tab.
pub fn external_link(url: &str, label: &str) -> String {
    format!(r#"<a href="{url}" target="_blank">{label}</a>"#)
}

/// External hyperlink styled as a button.
pub fn external_link_button(url: &str, label: &str) -> String {
    format!(
        r#"<p class="pl-5"><a href="{url}" target="_blank" class="btn btn-outline-primary btn-lg">{label} {ARROW_ICON}</a></p>"#
    )
}

/// Internal hyperlink to a site route.
pub fn internal_link(url: &str, label: &str) -> String {
    format!(r#"<a href="{url}">{label}</a>"#)
}

/// Inline mailing-list signup form.
///
/// `route` is the signup endpoint, `name` the list the subscription is
/// filed under, `description` the editorial pitch shown above the form.
pub fn mailing_list_signup(route: &str, name: &str, description: &str) -> String {
    let mut html = String::with_capacity(256);
    html.push_str(r#"<div class="newsletter-signup">"#);
    if !description.is_empty() {
        write!(html, r#"<p class="newsletter-signup__description">{description}</p>"#).ok();
    }
    write!(html, r#"<form action="{route}" method="post" class="newsletter-signup__form">"#).ok();
    write!(html, r#"<input type="hidden" name="mailinglist" value="{name}">"#).ok();
    html.push_str(r#"<input type="email" name="email" placeholder="Votre adresse mail" required>"#);
    html.push_str(r#"<button type="submit" class="btn btn-primary">S'inscrire</button>"#);
    html.push_str("</form></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donation_button_targets_the_configured_form() {
        let config = SiteConfig::default();
        assert_eq!(
            donation_button(&config, "Donnez !"),
            r#"<a href="https://dons.example.org/formulaire" class="btn btn-primary" role="button" target="_blank">Donnez !</a>"#
        );
    }

    #[test]
    fn fixed_amount_button_carries_the_amount() {
        let config = SiteConfig::default();
        let html = fixed_amount_donation_button(&config, 5, "Give");
        assert!(html.contains("https://dons.example.org/formulaire?amount=5"));
        assert!(html.ends_with(">Give</a>"));
    }

    #[test]
    fn contact_button_encodes_the_subject() {
        let config = SiteConfig::default();
        let html = contact_button(&config, "Écrivez-nous", "Devenir bénévole");
        assert!(html.contains("mailto:contact@example.org?subject=Devenir%20b%C3%A9n%C3%A9vole"));
        assert!(html.contains("Écrivez-nous"));
    }

    #[test]
    fn external_variants_share_the_target_attribute() {
        assert_eq!(
            external_link("http://x", "Label"),
            r#"<a href="http://x" target="_blank">Label</a>"#
        );
        let button = external_link_button("http://x", "Label");
        assert!(button.contains(r#"target="_blank""#));
        assert!(button.contains("btn-outline-primary"));
    }

    #[test]
    fn signup_form_posts_to_the_route() {
        let html = mailing_list_signup("/ml/quick-signup/", "velo", "La lettre vélo.");
        assert!(html.contains(r#"<form action="/ml/quick-signup/" method="post""#));
        assert!(html.contains(r#"name="mailinglist" value="velo""#));
        assert!(html.contains("La lettre vélo."));
    }

    #[test]
    fn signup_form_omits_an_empty_description() {
        let html = mailing_list_signup("/ml/quick-signup/", "velo", "");
        assert!(!html.contains("newsletter-signup__description"));
    }
}
