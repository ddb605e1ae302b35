//! Section renderers - one pure function per page section
//!
//! Each renderer maps a read-only slice of the content store (plus local UI
//! state where a section has any) to a visual tree. Renderers own nothing,
//! never fail, and degrade per-element: a missing icon renders nothing and
//! records a warning, an empty collection renders an explicit empty state.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use crate::form::Phase;
use crate::html::{el, Element, Node};
use crate::icons;
use crate::warn::WarningSink;

/// Section identifiers, in composed page order; each appears exactly once
pub const SECTION_IDS: [&str; 6] = ["hero", "about", "skills", "experience", "projects", "contact"];

/// Transient per-render UI state; resets on reload, never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionState {
    /// Selected skills tab; `None` selects the first category
    pub active_skills_tab: Option<String>,
    /// Contact form display phase
    pub form_phase: Phase,
}

/// Resolve an icon or record a warning and render nothing
pub(crate) fn icon(name: &str, size: u32, class: &str, warnings: &mut WarningSink) -> Option<Node> {
    match icons::resolve(name) {
        Some(glyph) => Some(glyph.svg(size, class).into()),
        None => {
            warnings.warn("icons", format!("icon '{name}' not found"));
            None
        }
    }
}

/// Centered section heading: title, accent divider, blurb
pub(crate) fn section_header(title: &str, blurb: &str) -> Element {
    el("div")
        .class("section-header")
        .child(el("h2").text(title))
        .child(el("div").class("divider"))
        .child(el("p").class("blurb").text(blurb))
}

/// One stat card for the stat grids
pub(crate) fn stat_card(value: impl Into<String>, label: &str, accent: &str) -> Element {
    el("div")
        .class("stat-card")
        .child(el("div").class(format!("stat-value {accent}")).text(value))
        .child(el("div").class("stat-label").text(label))
}

/// Explicit empty-state panel shown instead of an empty collection
pub(crate) fn empty_state(
    icon_name: &str,
    title: &str,
    blurb: &str,
    warnings: &mut WarningSink,
) -> Element {
    el("div")
        .class("empty-state")
        .child_opt(icon(icon_name, 48, "empty-icon", warnings))
        .child(el("h3").text(title))
        .child(el("p").text(blurb))
}

/// An external link with new-context isolation
pub(crate) fn external_link(url: &str) -> Element {
    el("a")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icon_warns_and_renders_nothing() {
        let mut warnings = WarningSink::new();
        assert!(icon("sparkle", 16, "icon", &mut warnings).is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn known_icon_renders_silently() {
        let mut warnings = WarningSink::new();
        assert!(icon("mail", 16, "icon", &mut warnings).is_some());
        assert!(warnings.is_empty());
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids = SECTION_IDS.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTION_IDS.len());
    }
}
