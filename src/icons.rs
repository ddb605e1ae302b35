//! Icon resolver - symbolic names to inline SVG glyphs
//!
//! The registry is the single source of icons for the whole page; sections
//! ask for names and get an `Option` back. An unknown name degrades to
//! nothing rendered (the caller records a warning), never an error.
//!
//! Path data is 24x24 stroke outline, sized and colored by the caller via
//! the rendered attributes (`stroke="currentColor"`).

use crate::html::{el, Element};

/// Multiple path segments are separated by '|'
const REGISTRY: &[(&str, &str)] = &[
    ("arrow-down", "M12 5v14|m19 12-7 7-7-7"),
    ("atom", "M12 12h.01|M19.4 7.2c2.4 3.8 2.9 7.6 1.1 9.4-2 2-6.5 1-10.1-2.6C6.8 10.4 5.8 5.9 7.8 3.9c1.8-1.8 5.6-1.3 9.4 1.1|M4.6 7.2C2.2 11 1.7 14.8 3.5 16.6c2 2 6.5 1 10.1-2.6 3.6-3.6 4.6-8.1 2.6-10.1-1.8-1.8-5.6-1.3-9.4 1.1"),
    ("award", "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14Z|M8.2 13.9 7 23l5-3 5 3-1.2-9.1"),
    ("calendar", "M8 2v4|M16 2v4|M3 10h18|M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z"),
    ("check", "M20 6 9 17l-5-5"),
    ("check-circle", "M22 11.1V12a10 10 0 1 1-5.9-9.1|m22 4-10 10-3-3"),
    ("chevron-down", "m6 9 6 6 6-6"),
    ("chevron-right", "m9 18 6-6-6-6"),
    ("clock", "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20Z|M12 6v6l4 2"),
    ("code", "m16 18 6-6-6-6|m8 6-6 6 6 6"),
    ("database", "M12 8c5 0 9-1.3 9-3s-4-3-9-3-9 1.3-9 3 4 3 9 3Z|M3 5v14c0 1.7 4 3 9 3s9-1.3 9-3V5|M3 12c0 1.7 4 3 9 3s9-1.3 9-3"),
    ("download", "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4|m7 10 5 5 5-5|M12 15V3"),
    ("external-link", "M15 3h6v6|M10 14 21 3|M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
    ("figma", "M5 5.5A3.5 3.5 0 0 1 8.5 2H12v7H8.5A3.5 3.5 0 0 1 5 5.5Z|M12 2h3.5a3.5 3.5 0 1 1 0 7H12V2Z|M12 12.5a3.5 3.5 0 1 1 7 0 3.5 3.5 0 1 1-7 0Z|M5 19.5A3.5 3.5 0 0 1 8.5 16H12v3.5a3.5 3.5 0 1 1-7 0Z|M5 12.5A3.5 3.5 0 0 1 8.5 9H12v7H8.5A3.5 3.5 0 0 1 5 12.5Z"),
    ("folder-open", "m6 14 1.5-2.9A2 2 0 0 1 9.2 10H20a2 2 0 0 1 1.9 2.7l-1.7 4.6A2 2 0 0 1 18.3 18H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h3.9a2 2 0 0 1 1.7.9l.8 1.2a2 2 0 0 0 1.7.9H18a2 2 0 0 1 2 2v2"),
    ("git-branch", "M6 3v12|M18 9a3 3 0 1 0 0-6 3 3 0 0 0 0 6Z|M6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6Z|M15 6a9 9 0 0 0-9 9"),
    ("github", "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4|M9 18c-4.51 2-5-2-7-2"),
    ("globe", "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20Z|M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20|M2 12h20"),
    ("heart", "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z"),
    ("loader", "M12 2v4|m16.2 7.8 2.9-2.9|M18 12h4|m16.2 16.2 2.9 2.9|M12 18v4|m4.9 19.1 2.9-2.9|M2 12h4|m4.9 4.9 2.9 2.9"),
    ("mail", "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7|M2 6a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6Z"),
    ("map-pin", "M20 10c0 4.99-5.54 10.2-7.4 11.8a1 1 0 0 1-1.2 0C9.54 20.2 4 14.99 4 10a8 8 0 0 1 16 0Z|M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6Z"),
    ("menu", "M4 12h16|M4 6h16|M4 18h16"),
    ("message-circle", "M7.9 20A9 9 0 1 0 4 16.1L2 22Z"),
    ("moon", "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"),
    ("network", "M9 2h6v6H9z|M16 16h6v6h-6z|M2 16h6v6H2z|M5 16v-3a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v3|M12 12V8"),
    ("palette", "M12 22a10 10 0 1 1 10-10c0 2.2-1.8 2.5-3 2.5h-2.8a2.2 2.2 0 0 0-1.7 3.7c.4.4.5 1 .3 1.5-.3.8-1.1 1.3-2.8 1.3Z|M13.5 6.5h.01|M17.5 10.5h.01|M8.5 7.5h.01|M6.5 12.5h.01"),
    ("phone", "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92Z"),
    ("rocket", "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09Z|m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2Z|M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0|M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"),
    ("send", "M14.5 9.5 21 3|M21 3l-6.5 18a.55.55 0 0 1-1 0L10 14l-7-3.5a.55.55 0 0 1 0-1Z"),
    ("server", "M5 2h14a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2Z|M5 14h14a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2Z|M6 6h.01|M6 18h.01"),
    ("star", "M11.5 2.6a.55.55 0 0 1 1 0l2.4 5a.55.55 0 0 0 .4.3l5.4.8a.55.55 0 0 1 .3 1l-3.9 3.8a.55.55 0 0 0-.2.5l1 5.4a.55.55 0 0 1-.8.6l-4.9-2.6a.55.55 0 0 0-.5 0l-4.9 2.6a.55.55 0 0 1-.8-.6l1-5.4a.55.55 0 0 0-.2-.5L2.9 9.7a.55.55 0 0 1 .3-1l5.4-.8a.55.55 0 0 0 .4-.3Z"),
    ("sun", "M12 16a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z|M12 2v2|M12 20v2|m4.9 4.9 1.4 1.4|m17.7 17.7 1.4 1.4|M2 12h2|M20 12h2|m6.3 17.7-1.4 1.4|m19.1 4.9-1.4 1.4"),
    ("target", "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20Z|M12 18a6 6 0 1 0 0-12 6 6 0 0 0 0 12Z|M12 14a2 2 0 1 0 0-4 2 2 0 0 0 0 4Z"),
    ("trophy", "M6 9H4.5a2.5 2.5 0 0 1 0-5H6|M18 9h1.5a2.5 2.5 0 0 0 0-5H18|M4 22h16|M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22|M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22|M18 2H6v7a6 6 0 0 0 12 0V2Z"),
    ("user", "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2|M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z"),
    ("users", "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2|M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8Z|M22 21v-2a4 4 0 0 0-3-3.87|M16 3.13a4 4 0 0 1 0 7.75"),
    ("x", "M18 6 6 18|m6 6 12 12"),
    ("x-circle", "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20Z|m15 9-6 6|m9 9 6 6"),
    ("zap", "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14Z"),
];

/// A resolved glyph, renderable at any size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    name: &'static str,
    paths: &'static str,
}

impl Glyph {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Render as an inline `<svg>` element
    pub fn svg(&self, size: u32, class: &str) -> Element {
        let mut svg = el("svg")
            .class(class)
            .attr("width", size.to_string())
            .attr("height", size.to_string())
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .attr("aria-hidden", "true");
        for segment in self.paths.split('|') {
            svg = svg.child(el("path").attr("d", segment));
        }
        svg
    }
}

/// Look up a glyph by symbolic name
///
/// Case-sensitive; `None` means the name is not in the registry and the
/// caller should degrade (render nothing, record a warning).
pub fn resolve(name: &str) -> Option<Glyph> {
    REGISTRY
        .iter()
        .copied()
        .find(|(n, _)| *n == name)
        .map(|(name, paths)| Glyph { name, paths })
}

/// Every registered name, for `check` and the tests
pub fn known_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        assert!(resolve("github").is_some());
        assert!(resolve("mail").is_some());
        assert!(resolve("map-pin").is_some());
    }

    #[test]
    fn unknown_name_is_none_not_panic() {
        assert!(resolve("sparkle").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("Github").is_none());
    }

    #[test]
    fn registry_names_are_unique_and_sorted() {
        let names: Vec<_> = known_names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted, "registry must stay sorted and deduped");
    }

    #[test]
    fn glyph_renders_sized_svg() {
        let svg = resolve("check").unwrap().svg(16, "icon").into();
        let markup = crate::html::Node::render(&svg);
        assert!(markup.starts_with("<svg class=\"icon\" width=\"16\" height=\"16\""));
        assert!(markup.contains("<path d=\"M20 6 9 17l-5-5\">"));
    }
}
