//! Skills section - stat cards, category tabs, skill cards, level legend

use crate::content::model::{Skill, SkillCategory};
use crate::html::{el, Element, Node};
use crate::stats;
use crate::warn::WarningSink;

use super::{empty_state, icon, section_header, stat_card};

pub fn render(
    categories: &[SkillCategory],
    active_tab: Option<&str>,
    warnings: &mut WarningSink,
) -> Node {
    let totals = stats::skill_stats(categories);

    let active = categories
        .iter()
        .find(|c| Some(c.id.as_str()) == active_tab)
        .or_else(|| categories.first());

    let mut section = el("section")
        .id("skills")
        .class("skills")
        .child(section_header(
            "Skills & Expertise",
            "A comprehensive overview of my technical skills and proficiency levels across \
             different technologies",
        ))
        .child(
            el("div")
                .class("stat-grid")
                .child(stat_card(totals.total_skills.to_string(), "Total Skills", "accent-primary"))
                .child(stat_card(totals.expert_skills.to_string(), "Expert Level", "accent-green"))
                .child(stat_card(
                    format!("{}+", totals.total_years),
                    "Years Experience",
                    "accent-blue",
                ))
                .child(stat_card(totals.categories.to_string(), "Categories", "accent-purple")),
        );

    match active {
        None => {
            section = section.child(empty_state(
                "folder-open",
                "No Skills Yet",
                "Skill categories will appear here once they are added.",
                warnings,
            ));
        }
        Some(active) => {
            section = section
                .child(tabs(categories, &active.id))
                .child(category_intro(active))
                .child(skill_grid(active, warnings));
        }
    }

    section.child(legend()).into()
}

fn tabs(categories: &[SkillCategory], active_id: &str) -> Element {
    let mut tabs = el("div").class("category-tabs");
    for category in categories {
        let class = if category.id == active_id {
            "tab tab-active"
        } else {
            "tab"
        };
        tabs = tabs.child(
            el("button")
                .class(class)
                .attr("data-skills-tab", &category.id)
                .text(&category.name),
        );
    }
    tabs
}

fn category_intro(category: &SkillCategory) -> Element {
    el("div")
        .class("category-intro")
        .child(el("h3").text(&category.name))
        .child_opt(
            category
                .description
                .as_ref()
                .map(|d| el("p").class("blurb").text(d)),
        )
}

fn skill_grid(category: &SkillCategory, warnings: &mut WarningSink) -> Element {
    if category.skills.is_empty() {
        return empty_state(
            "folder-open",
            "Nothing Here Yet",
            "Skills for this category are still being written up.",
            warnings,
        );
    }
    let mut grid = el("div").class("skill-grid");
    for skill in &category.skills {
        grid = grid.child(skill_card(skill, warnings));
    }
    grid
}

fn skill_card(skill: &Skill, warnings: &mut WarningSink) -> Element {
    let weight = stats::level_weight(skill.level);
    let level_class = format!("level-pill level-{}", skill.level.label().to_lowercase());

    let mut card = el("div")
        .class("skill-card")
        .child(
            el("div")
                .class("skill-card-head")
                .child(
                    el("div")
                        .class("skill-identity")
                        .child_opt(
                            skill
                                .icon
                                .as_deref()
                                .and_then(|name| icon(name, 16, "icon", warnings)),
                        )
                        .child(el("h4").text(&skill.name)),
                )
                .child(el("span").class(level_class).text(skill.level.label())),
        )
        .child(
            el("div").class("progress-track").child(
                el("div")
                    .class("progress-fill")
                    .attr("style", format!("width:{weight}%")),
            ),
        );

    if let Some(years) = skill.years_of_experience {
        let plural = if years > 1 { "s" } else { "" };
        card = card.child(
            el("p")
                .class("skill-years")
                .text(format!("{years} year{plural} experience")),
        );
    }
    card
}

fn legend() -> Element {
    let rows = [
        ("legend-expert", "Expert", "5+ years, leading projects"),
        ("legend-advanced", "Advanced", "3+ years, independent work"),
        ("legend-intermediate", "Intermediate", "1+ years, guided work"),
        ("legend-beginner", "Beginner", "Learning, basic projects"),
    ];
    let mut grid = el("div").class("legend-grid");
    for (class, name, blurb) in rows {
        grid = grid.child(
            el("div")
                .class("legend-row")
                .child(el("div").class(format!("legend-swatch {class}")))
                .child(
                    el("div")
                        .child(el("div").class("legend-name").text(name))
                        .child(el("div").class("legend-blurb").text(blurb)),
                ),
        );
    }
    el("div")
        .class("legend")
        .child(el("h4").text("Proficiency Levels"))
        .child(grid)
}
