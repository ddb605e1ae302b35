//! About section - bio, quick info, interests/values/fun facts

use crate::content::model::{AboutProfile, PersonalInfo};
use crate::html::{el, Element, Node};
use crate::stats;
use crate::warn::WarningSink;

use super::{external_link, icon, section_header};

pub fn render(personal: &PersonalInfo, about: &AboutProfile, warnings: &mut WarningSink) -> Node {
    el("section")
        .id("about")
        .class("about")
        .child(section_header(
            "About Me",
            "Get to know me better - my journey, passions, and what drives me as a developer",
        ))
        .child(
            el("div")
                .class("about-grid")
                .child(portrait_with_stats(personal, warnings))
                .child(bio_column(personal, about, warnings)),
        )
        .child(
            el("div")
                .class("about-traits")
                .child(trait_column(
                    "heart",
                    "Interests",
                    tag_list(&about.interests),
                    warnings,
                ))
                .child(trait_column(
                    "target",
                    "Values",
                    value_list(&about.values, warnings),
                    warnings,
                ))
                .child(trait_column(
                    "zap",
                    "Fun Facts",
                    fact_list(&about.fun_facts),
                    warnings,
                )),
        )
        .child(cta(warnings))
        .into()
}

fn portrait_with_stats(personal: &PersonalInfo, warnings: &mut WarningSink) -> Element {
    el("div")
        .class("about-portrait")
        .child(
            el("img")
                .attr("src", &personal.avatar)
                .attr("alt", &personal.name),
        )
        .child(
            el("div")
                .class("stat-float stat-years")
                .child_opt(icon("calendar", 18, "icon", warnings))
                .child(el("div").class("stat-value").text(stats::YEARS_BADGE))
                .child(el("div").class("stat-label").text("Years Experience")),
        )
        .child(
            el("div")
                .class("stat-float stat-projects")
                .child_opt(icon("code", 18, "icon", warnings))
                .child(el("div").class("stat-value").text(stats::PROJECTS_BADGE))
                .child(el("div").class("stat-label").text("Projects")),
        )
}

fn bio_column(personal: &PersonalInfo, about: &AboutProfile, warnings: &mut WarningSink) -> Element {
    let mut quick_info = el("div")
        .class("quick-info")
        .child(el("h4").text("Quick Info"))
        .child(
            el("div")
                .class("info-row")
                .child_opt(icon("mail", 16, "icon", warnings))
                .child(el("span").text(&personal.email)),
        )
        .child(
            el("div")
                .class("info-row")
                .child_opt(icon("map-pin", 16, "icon", warnings))
                .child(el("span").text(&personal.location)),
        );
    if let Some(website) = &personal.website {
        let display = website.trim_start_matches("https://");
        quick_info = quick_info.child(
            el("div")
                .class("info-row")
                .child_opt(icon("globe", 16, "icon", warnings))
                .child(external_link(website).text(display)),
        );
    }

    el("div")
        .class("about-bio")
        .child(el("h3").text("My Story"))
        .child(el("p").text(&about.summary))
        .child(el("p").text(&about.detailed_bio))
        .child(quick_info)
}

fn trait_column(
    icon_name: &str,
    title: &str,
    body: Element,
    warnings: &mut WarningSink,
) -> Element {
    el("div")
        .class("trait-column")
        .child(
            el("div")
                .class("trait-icon")
                .child_opt(icon(icon_name, 24, "icon", warnings)),
        )
        .child(el("h3").text(title))
        .child(body)
}

fn tag_list(items: &[String]) -> Element {
    let mut list = el("div").class("tag-list");
    for item in items {
        list = list.child(el("span").class("tag").text(item));
    }
    list
}

fn value_list(items: &[String], warnings: &mut WarningSink) -> Element {
    let mut list = el("div").class("value-list");
    for item in items {
        list = list.child(
            el("div")
                .class("value-row")
                .child_opt(icon("check", 16, "icon", warnings))
                .child(el("span").text(item)),
        );
    }
    list
}

fn fact_list(items: &[String]) -> Element {
    let mut list = el("div").class("fact-list");
    for item in items {
        list = list.child(el("div").class("fact").text(item));
    }
    list
}

fn cta(warnings: &mut WarningSink) -> Element {
    el("div")
        .class("cta-panel cta-gradient")
        .child(el("h3").text("Let's Work Together"))
        .child(el("p").text(
            "I'm always excited to take on new challenges and collaborate with amazing teams. \
             Let's create something extraordinary together!",
        ))
        .child(
            el("div")
                .class("cta-actions")
                .child(
                    el("a")
                        .attr("href", "#contact")
                        .class("btn-light")
                        .child_opt(icon("message-circle", 20, "icon", warnings))
                        .text("Get In Touch"),
                )
                .child(
                    el("button")
                        .class("btn-dark")
                        .attr("data-resume-action", "print")
                        .child_opt(icon("download", 20, "icon", warnings))
                        .text("Download Resume"),
                ),
        )
}
