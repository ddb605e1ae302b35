//! Hero banner - name, title, tagline, call-to-action, social links

use crate::content::model::{PersonalInfo, SocialLink};
use crate::html::{el, Node};
use crate::stats;
use crate::warn::WarningSink;

use super::{external_link, icon};

pub fn render(
    personal: &PersonalInfo,
    social_links: &[SocialLink],
    warnings: &mut WarningSink,
) -> Node {
    let mut socials = el("div").class("hero-socials");
    for link in social_links {
        socials = socials.child(
            external_link(&link.url)
                .class("social-button")
                .attr("aria-label", format!("Visit {}", link.name))
                .child_opt(icon(&link.icon, 24, "icon", warnings)),
        );
    }

    let text_column = el("div")
        .class("hero-text")
        .child(el("span").class("hero-greeting").text("\u{1F44B} Hello, I'm"))
        .child(el("h1").text(&personal.name))
        .child(el("h2").class("hero-title").text(&personal.title))
        .child(el("p").class("hero-tagline").text(&personal.tagline))
        .child(
            el("div")
                .class("hero-actions")
                .child(
                    el("button")
                        .class("btn-primary")
                        .attr("data-scroll-to", "projects")
                        .text("View My Work")
                        .child_opt(icon("arrow-down", 18, "icon-after", warnings)),
                )
                .child(
                    el("button")
                        .class("btn-secondary")
                        .attr("data-scroll-to", "contact")
                        .text("Get In Touch")
                        .child_opt(icon("message-circle", 18, "icon-after", warnings)),
                ),
        )
        .child(socials);

    let portrait = el("div").class("hero-portrait").child(
        el("div")
            .class("portrait-frame")
            .child(
                el("img")
                    .attr("src", &personal.avatar)
                    .attr("alt", &personal.name),
            )
            .child(
                el("div")
                    .class("floating-badge badge-right")
                    .child_opt(icon("code", 16, "icon", warnings))
                    .child(el("span").text(format!("{} Years", stats::YEARS_BADGE))),
            )
            .child(
                el("div")
                    .class("floating-badge badge-left")
                    .child_opt(icon("award", 16, "icon", warnings))
                    .child(el("span").text("Senior Dev")),
            ),
    );

    el("section")
        .id("hero")
        .class("hero")
        .child(el("div").class("hero-grid").child(text_column).child(portrait))
        .child(
            el("div")
                .class("scroll-indicator")
                .attr("data-scroll-to", "about")
                .child(el("span").text("Scroll Down"))
                .child_opt(icon("chevron-down", 24, "icon", warnings)),
        )
        .into()
}
