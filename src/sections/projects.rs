//! Projects section - stat cards and the project card grid

use crate::content::dates;
use crate::content::model::{Project, ProjectCategory, ProjectStatus};
use crate::html::{el, Element, Node};
use crate::stats;
use crate::warn::WarningSink;

use super::{empty_state, external_link, icon, section_header, stat_card};

/// Card previews cap the technology and feature lists
const MAX_TECHNOLOGIES: usize = 4;
const MAX_FEATURES: usize = 3;

pub fn render(categories: &[ProjectCategory], warnings: &mut WarningSink) -> Node {
    let totals = stats::project_stats(categories);
    let all: Vec<&Project> = categories.iter().flat_map(|c| c.projects.iter()).collect();

    let mut section = el("section")
        .id("projects")
        .class("projects")
        .child(section_header(
            "Featured Projects",
            "A showcase of my recent work, demonstrating various technologies, problem-solving \
             approaches, and creative solutions",
        ))
        .child(
            el("div")
                .class("stat-grid")
                .child(stat_card(totals.total_projects.to_string(), "Total Projects", "accent-primary"))
                .child(stat_card(totals.completed_projects.to_string(), "Completed", "accent-green"))
                .child(stat_card(totals.technologies.to_string(), "Technologies", "accent-blue"))
                .child(stat_card(totals.featured.to_string(), "Featured", "accent-purple")),
        );

    if all.is_empty() {
        section = section.child(empty_state(
            "folder-open",
            "No Projects Found",
            "Try selecting a different category or check back later for new projects.",
            warnings,
        ));
    } else {
        let mut grid = el("div").class("project-grid");
        for project in all {
            grid = grid.child(project_card(project, warnings));
        }
        section = section.child(grid);
    }

    section.into()
}

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "status-pill status-completed",
        ProjectStatus::InProgress => "status-pill status-in-progress",
        ProjectStatus::Planned => "status-pill status-planned",
    }
}

fn project_card(project: &Project, warnings: &mut WarningSink) -> Element {
    let mut cover = el("div").class("project-cover");
    if let Some(image) = project.images.first() {
        cover = cover.child(
            el("img")
                .attr("src", image)
                .attr("alt", &project.name),
        );
    }
    if project.featured {
        cover = cover.child(
            el("div")
                .class("featured-pill")
                .child_opt(icon("star", 14, "icon", warnings))
                .text("Featured"),
        );
    }
    cover = cover.child(
        el("div")
            .class(status_class(project.status))
            .text(project.status.label()),
    );

    let mut overlay = el("div").class("cover-overlay");
    if let Some(demo) = &project.demo_url {
        overlay = overlay.child(
            external_link(demo)
                .class("overlay-link overlay-demo")
                .child_opt(icon("external-link", 16, "icon", warnings))
                .text("Live Demo"),
        );
    }
    if let Some(source) = &project.source_url {
        overlay = overlay.child(
            external_link(source)
                .class("overlay-link overlay-source")
                .child_opt(icon("github", 16, "icon", warnings))
                .text("Source"),
        );
    }
    cover = cover.child(overlay);

    let mut head = el("div").class("project-head").child(el("h3").text(&project.name));
    if let Some(team_size) = project.team_size {
        let noun = if team_size == 1 { "person" } else { "people" };
        head = head.child(
            el("div")
                .class("team-size")
                .child_opt(icon("users", 14, "icon", warnings))
                .text(format!("{team_size} {noun}")),
        );
    }

    let mut body = el("div")
        .class("project-body")
        .child(head)
        .child(el("p").class("project-blurb").text(&project.short_description))
        .child(technology_tags(&project.technologies));

    let mut meta = el("div").class("project-meta").child(
        el("div")
            .class("meta-row")
            .child_opt(icon("calendar", 14, "icon", warnings))
            .text(dates::year_of(&project.start)),
    );
    if let Some(role) = &project.role {
        meta = meta.child(
            el("div")
                .class("meta-row")
                .child_opt(icon("user", 14, "icon", warnings))
                .text(role),
        );
    }
    body = body.child(meta);

    if !project.features.is_empty() {
        body = body.child(feature_preview(&project.features, warnings));
    }

    el("div").class("project-card").child(cover).child(body)
}

fn technology_tags(technologies: &[String]) -> Element {
    let mut tags = el("div").class("tag-list");
    for tech in technologies.iter().take(MAX_TECHNOLOGIES) {
        tags = tags.child(el("span").class("tag").text(tech));
    }
    if technologies.len() > MAX_TECHNOLOGIES {
        tags = tags.child(
            el("span")
                .class("tag tag-more")
                .text(format!("+{} more", technologies.len() - MAX_TECHNOLOGIES)),
        );
    }
    tags
}

fn feature_preview(features: &[String], warnings: &mut WarningSink) -> Element {
    let mut list = el("ul").class("feature-list");
    for feature in features.iter().take(MAX_FEATURES) {
        list = list.child(
            el("li")
                .child_opt(icon("check", 12, "icon", warnings))
                .child(el("span").text(feature)),
        );
    }
    if features.len() > MAX_FEATURES {
        list = list.child(
            el("li")
                .class("feature-more")
                .text(format!("+{} more features...", features.len() - MAX_FEATURES)),
        );
    }
    el("div")
        .class("feature-preview")
        .child(el("h4").text("Key Features:"))
        .child(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::content;

    #[test]
    fn cards_render_for_every_project() {
        let mut warnings = WarningSink::new();
        let markup = render(&content().projects, &mut warnings).render();
        assert!(markup.contains("Soap Notes"));
        assert!(markup.contains("Quality Signs and Marquee"));
        assert!(markup.contains("Primed E-Health"));
    }

    #[test]
    fn technology_list_truncates_past_four() {
        let mut warnings = WarningSink::new();
        let markup = render(&content().projects, &mut warnings).render();
        // Soap Notes carries 7 technologies.
        assert!(markup.contains("+3 more"));
    }

    #[test]
    fn feature_list_truncates_past_three() {
        let mut warnings = WarningSink::new();
        let markup = render(&content().projects, &mut warnings).render();
        // Soap Notes carries 5 features.
        assert!(markup.contains("+2 more features..."));
    }

    #[test]
    fn distinct_technology_stat_reaches_markup() {
        let mut warnings = WarningSink::new();
        let markup = render(&content().projects, &mut warnings).render();
        assert!(markup.contains(">8<"));
    }

    #[test]
    fn empty_categories_render_empty_state() {
        let mut warnings = WarningSink::new();
        let markup = render(&[], &mut warnings).render();
        assert!(markup.contains("No Projects Found"));
    }

    #[test]
    fn start_year_is_shown() {
        let mut warnings = WarningSink::new();
        let markup = render(&content().projects, &mut warnings).render();
        assert!(markup.contains("2023"));
    }
}
