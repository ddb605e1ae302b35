//! Composition root - page chrome and fixed section order
//!
//! Assembles the six section renderers between the header and footer,
//! wraps them in the document shell, and fills `<head>` from the SEO
//! metadata. Section anchors come out of here exactly once each; `check`
//! verifies the navigation pairing against this composition.

use chrono::{Datelike, NaiveDate};

use crate::content::model::Content;
use crate::html::{el, Element, Node};
use crate::sections::{self, SectionState};
use crate::theme::Theme;
use crate::warn::WarningSink;

/// Relative asset locations inside the output tree
pub const SCRIPT_PATH: &str = "assets/site.js";
pub const STYLESHEET_PATH: &str = "assets/styles.css";

/// Compose the full document
///
/// Pure except for the warning sink; `today` feeds the date-derived stats
/// and the footer year.
pub fn compose(
    content: &Content,
    state: &SectionState,
    theme: Theme,
    endpoint: &str,
    today: NaiveDate,
    warnings: &mut WarningSink,
) -> Node {
    let body = el("body")
        .child(header(content, warnings))
        .child(
            el("main")
                .child(sections::hero::render(
                    &content.personal,
                    &content.social_links,
                    warnings,
                ))
                .child(sections::about::render(
                    &content.personal,
                    &content.about,
                    warnings,
                ))
                .child(sections::skills::render(
                    &content.skills,
                    state.active_skills_tab.as_deref(),
                    warnings,
                ))
                .child(sections::experience::render(
                    &content.experience,
                    today,
                    warnings,
                ))
                .child(sections::projects::render(&content.projects, warnings))
                .child(sections::contact::render(
                    &content.personal,
                    &content.social_links,
                    &content.contact,
                    state.form_phase,
                    endpoint,
                    warnings,
                )),
        )
        .child(footer(content, today, warnings))
        .child(el("script").attr("src", SCRIPT_PATH).attr("defer", "defer"));

    el("html")
        .attr("lang", "en")
        .attr("data-theme", theme.as_str())
        .child(head(content))
        .child(body)
        .into()
}

/// Render the composed document with the doctype prelude
pub fn render_document(document: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    out.push_str(&document.render());
    out.push('\n');
    out
}

fn head(content: &Content) -> Element {
    let seo = &content.seo;
    let mut head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text(&seo.title))
        .child(
            el("meta")
                .attr("name", "description")
                .attr("content", &seo.description),
        )
        .child(
            el("meta")
                .attr("name", "keywords")
                .attr("content", seo.keywords.join(", ")),
        )
        .child(
            el("meta")
                .attr("name", "author")
                .attr("content", &seo.author),
        )
        .child(
            el("meta")
                .attr("property", "og:title")
                .attr("content", &seo.title),
        )
        .child(
            el("meta")
                .attr("property", "og:description")
                .attr("content", &seo.description),
        );
    if let Some(og_image) = &seo.og_image {
        head = head.child(
            el("meta")
                .attr("property", "og:image")
                .attr("content", og_image),
        );
    }
    head.child(
        el("link")
            .attr("rel", "stylesheet")
            .attr("href", STYLESHEET_PATH),
    )
}

fn header(content: &Content, warnings: &mut WarningSink) -> Element {
    let mut desktop_nav = el("div").class("nav-desktop");
    let mut mobile_nav = el("div").class("nav-mobile").id("mobile-menu");
    for item in &content.navigation {
        let link = el("a")
            .attr("href", &item.anchor)
            .attr("data-scroll-to", &item.section)
            .text(&item.name);
        desktop_nav = desktop_nav.child(link.clone());
        mobile_nav = mobile_nav.child(link);
    }

    desktop_nav = desktop_nav
        .child(theme_toggle(warnings))
        .child(resume_button(warnings));
    mobile_nav = mobile_nav.child(resume_button(warnings));

    el("header")
        .id("site-header")
        .child(
            el("nav")
                .child(
                    el("a")
                        .class("brand")
                        .attr("href", "#hero")
                        .attr("data-scroll-to", "hero")
                        .text(&content.personal.name),
                )
                .child(desktop_nav)
                .child(
                    el("div")
                        .class("nav-mobile-controls")
                        .child(theme_toggle(warnings))
                        .child(
                            el("button")
                                .class("menu-toggle")
                                .id("menu-toggle")
                                .attr("aria-label", "Toggle menu")
                                .child_opt(sections::icon("menu", 24, "icon icon-menu", warnings))
                                .child_opt(sections::icon("x", 24, "icon icon-close", warnings)),
                        ),
                )
                .child(mobile_nav),
        )
}

fn theme_toggle(warnings: &mut WarningSink) -> Element {
    el("button")
        .class("theme-toggle")
        .attr("data-theme-toggle", "")
        .attr("aria-label", "Switch theme")
        .child_opt(sections::icon("sun", 20, "icon icon-sun", warnings))
        .child_opt(sections::icon("moon", 20, "icon icon-moon", warnings))
}

fn resume_button(warnings: &mut WarningSink) -> Element {
    el("button")
        .class("btn-primary btn-resume")
        .attr("data-resume-action", "print")
        .child_opt(sections::icon("download", 16, "icon", warnings))
        .text("Resume")
}

fn footer(content: &Content, today: NaiveDate, warnings: &mut WarningSink) -> Element {
    let personal = &content.personal;

    let mut identity = el("div")
        .class("footer-identity")
        .child(el("h3").text(&personal.name))
        .child(el("p").text(&personal.tagline))
        .child(
            el("div")
                .class("footer-row")
                .child_opt(sections::icon("map-pin", 16, "icon", warnings))
                .text(&personal.location),
        )
        .child(
            el("div")
                .class("footer-row")
                .child_opt(sections::icon("mail", 16, "icon", warnings))
                .child(
                    el("a")
                        .attr("href", format!("mailto:{}", personal.email))
                        .text(&personal.email),
                ),
        );
    if let Some(phone) = &personal.phone {
        identity = identity.child(
            el("div")
                .class("footer-row")
                .child_opt(sections::icon("phone", 16, "icon", warnings))
                .child(el("a").attr("href", format!("tel:{phone}")).text(phone)),
        );
    }

    let mut quick_links = el("div")
        .class("footer-links")
        .child(el("h3").text("Quick Links"));
    for item in content.navigation.iter().filter(|i| i.section != "hero") {
        quick_links = quick_links.child(
            el("a")
                .attr("href", &item.anchor)
                .attr("data-scroll-to", &item.section)
                .text(&item.name),
        );
    }

    let mut socials = el("div").class("social-row");
    for link in &content.social_links {
        socials = socials.child(
            sections::external_link(&link.url)
                .class("social-button")
                .attr("aria-label", format!("Visit {}", link.name))
                .child_opt(sections::icon(&link.icon, 20, "icon", warnings)),
        );
    }
    let connect = el("div")
        .class("footer-connect")
        .child(el("h3").text("Connect"))
        .child(socials)
        .child(resume_button(warnings));

    el("footer")
        .child(
            el("div")
                .class("footer-grid")
                .child(identity)
                .child(quick_links)
                .child(connect),
        )
        .child(
            el("div")
                .class("footer-bar")
                .child(el("p").text(format!(
                    "\u{00A9} {} {}. All rights reserved.",
                    today.year(),
                    personal.name
                )))
                .child(el("p").text("Built with Rust & a typed content store")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::content;

    fn compose_default() -> String {
        let mut warnings = WarningSink::new();
        let node = compose(
            content(),
            &SectionState::default(),
            Theme::Light,
            "/",
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            &mut warnings,
        );
        assert!(warnings.is_empty(), "store content must render warning-free");
        render_document(&node)
    }

    #[test]
    fn every_section_anchor_appears_exactly_once() {
        let markup = compose_default();
        for id in sections::SECTION_IDS {
            let needle = format!("<section id=\"{id}\"");
            assert_eq!(markup.matches(&needle).count(), 1, "anchor {id}");
        }
    }

    #[test]
    fn document_declares_theme_and_doctype() {
        let markup = compose_default();
        assert!(markup.starts_with("<!DOCTYPE html>"));
        assert!(markup.contains("data-theme=\"light\""));
    }

    #[test]
    fn head_carries_seo_metadata() {
        let markup = compose_default();
        assert!(markup.contains("<title>Ruth Ezeh - Senior Software Engineer</title>"));
        assert!(markup.contains("property=\"og:image\""));
    }

    #[test]
    fn footer_shows_current_year() {
        let markup = compose_default();
        assert!(markup.contains("\u{00A9} 2026 Ruth Ezeh. All rights reserved."));
    }

    #[test]
    fn assets_are_referenced_relatively() {
        let markup = compose_default();
        assert!(markup.contains("href=\"assets/styles.css\""));
        assert!(markup.contains("src=\"assets/site.js\""));
    }

    #[test]
    fn form_endpoint_flows_into_the_form() {
        let mut warnings = WarningSink::new();
        let node = compose(
            content(),
            &SectionState::default(),
            Theme::Dark,
            "/api/forms",
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            &mut warnings,
        );
        let markup = node.render();
        assert!(markup.contains("data-form-endpoint=\"/api/forms\""));
        assert!(markup.contains("data-theme=\"dark\""));
    }
}
