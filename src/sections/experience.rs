//! Experience section - stats and the employment timeline

use chrono::NaiveDate;

use crate::content::dates;
use crate::content::model::Experience;
use crate::html::{el, Element, Node};
use crate::stats;
use crate::warn::WarningSink;

use super::{empty_state, external_link, icon, section_header, stat_card};

/// Label shown for a position with no end date; never produced by the
/// date formatter
const PRESENT: &str = "Present";

pub fn render(entries: &[Experience], today: NaiveDate, warnings: &mut WarningSink) -> Node {
    let mut section = el("section")
        .id("experience")
        .class("experience")
        .child(section_header(
            "Professional Experience",
            "A timeline of my professional journey, showcasing growth, achievements, and the \
             technologies I've worked with",
        ))
        .child(
            el("div")
                .class("stat-grid stat-grid-3")
                .child(stat_card(
                    format!("{}+", stats::experience_years(entries, today)),
                    "Years Experience",
                    "accent-primary",
                ))
                .child(stat_card(entries.len().to_string(), "Companies", "accent-purple"))
                .child(stat_card(
                    stats::achievement_count(entries).to_string(),
                    "Key Achievements",
                    "accent-green",
                )),
        );

    if entries.is_empty() {
        section = section.child(empty_state(
            "folder-open",
            "No Experience Listed",
            "Professional history will appear here once it is added.",
            warnings,
        ));
    } else {
        let mut timeline = el("div").class("timeline");
        for entry in entries {
            timeline = timeline.child(entry_card(entry, warnings));
        }
        section = section.child(timeline);
    }

    section.into()
}

fn entry_card(entry: &Experience, warnings: &mut WarningSink) -> Element {
    // "Present" is the sole signal; a missing end date never reaches the
    // formatter.
    let period_end = match &entry.end {
        None => el("span").class("period-current").text(PRESENT),
        Some(end) => el("span").text(dates::format_month(end)),
    };

    let company: Node = match &entry.company_url {
        Some(url) => external_link(url).class("company").text(&entry.company).into(),
        None => el("span").class("company").text(&entry.company).into(),
    };

    let mut achievements = el("ul").class("achievements");
    for achievement in &entry.achievements {
        achievements = achievements.child(
            el("li")
                .child_opt(icon("chevron-right", 14, "icon", warnings))
                .child(el("span").text(achievement)),
        );
    }

    let mut technologies = el("div").class("tag-list");
    for tech in &entry.technologies {
        technologies = technologies.child(el("span").class("tag").text(tech));
    }

    el("div")
        .class("timeline-entry")
        .child(el("div").class("timeline-dot"))
        .child(
            el("div")
                .class("entry-card")
                .child(
                    el("div")
                        .class("entry-head")
                        .child(
                            el("div")
                                .class("entry-identity")
                                .child_opt(entry.company_logo.as_ref().map(|logo| {
                                    el("img")
                                        .class("company-logo")
                                        .attr("src", logo)
                                        .attr("alt", format!("{} logo", entry.company))
                                }))
                                .child(el("h3").text(&entry.position))
                                .child(company),
                        )
                        .child(
                            el("div")
                                .class("entry-meta")
                                .child(
                                    el("div")
                                        .class("meta-row")
                                        .child_opt(icon("calendar", 16, "icon", warnings))
                                        .child(el("span").text(dates::format_month(&entry.start)))
                                        .child(el("span").text(" - "))
                                        .child(period_end),
                                )
                                .child(
                                    el("div")
                                        .class("meta-row")
                                        .child_opt(icon("map-pin", 16, "icon", warnings))
                                        .child(el("span").text(&entry.location)),
                                ),
                        ),
                )
                .child(el("p").class("entry-description").text(&entry.description))
                .child(
                    el("div")
                        .class("entry-block")
                        .child(
                            el("h4")
                                .child_opt(icon("trophy", 16, "icon", warnings))
                                .text("Key Achievements"),
                        )
                        .child(achievements),
                )
                .child(
                    el("div")
                        .class("entry-block")
                        .child(
                            el("h4")
                                .child_opt(icon("code", 16, "icon", warnings))
                                .text("Technologies Used"),
                        )
                        .child(technologies),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::content;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn current_position_shows_present_literal() {
        let mut warnings = WarningSink::new();
        let markup = render(&content().experience, today(), &mut warnings).render();
        assert!(markup.contains("<span class=\"period-current\">Present</span>"));
    }

    #[test]
    fn ended_positions_show_formatted_months() {
        let mut warnings = WarningSink::new();
        let markup = render(&content().experience, today(), &mut warnings).render();
        assert!(markup.contains("August 2022"));
        assert!(markup.contains("July 2024"));
    }

    #[test]
    fn present_appears_once_for_single_current_entry() {
        let mut warnings = WarningSink::new();
        let markup = render(&content().experience, today(), &mut warnings).render();
        assert_eq!(markup.matches(PRESENT).count(), 1);
    }

    #[test]
    fn empty_list_renders_empty_state_not_panic() {
        let mut warnings = WarningSink::new();
        let markup = render(&[], today(), &mut warnings).render();
        assert!(markup.contains("No Experience Listed"));
        assert!(markup.contains("Companies"));
    }

    #[test]
    fn stats_reflect_entries() {
        let mut warnings = WarningSink::new();
        let markup = render(&content().experience, today(), &mut warnings).render();
        assert!(markup.contains(">5+<"));
        assert!(markup.contains(">3<"));
        assert!(markup.contains(">7<"));
    }
}
