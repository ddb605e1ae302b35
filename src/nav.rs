//! Navigation controller - section lookup and smooth scrolling
//!
//! `go_to` resolves a section id through a [`ScrollSurface`] and scrolls if
//! the target exists; a miss is harmless and silent, since navigation items
//! are paired with sections statically at composition time. The open mobile
//! menu is closed on every navigation, hit or miss.

/// An opaque scroll destination produced by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget(pub usize);

/// The thing that can be scrolled - the DOM for the page script, the
/// composed document's anchor index in tests
pub trait ScrollSurface {
    /// Resolve a section id to a destination, if present
    fn lookup(&self, section_id: &str) -> Option<ScrollTarget>;

    /// Smooth-scroll to a previously resolved destination
    fn scroll_to(&mut self, target: ScrollTarget);
}

/// Mobile menu open/closed flag - explicit local UI state, never persisted
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Maps section identifiers to scroll actions
#[derive(Debug, Default)]
pub struct Navigator {
    pub menu: MenuState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a section; no-op when the id does not resolve
    ///
    /// Closes the mobile menu unconditionally.
    pub fn go_to(&mut self, section_id: &str, surface: &mut dyn ScrollSurface) {
        self.menu.close();
        if let Some(target) = surface.lookup(section_id) {
            surface.scroll_to(target);
        }
    }
}

/// Anchor index over a composed document, for exercising navigation in
/// tests the way the page script exercises the DOM
#[derive(Debug, Default)]
pub struct PageSurface {
    anchors: Vec<String>,
    pub scrolled_to: Vec<String>,
}

impl PageSurface {
    pub fn with_anchors(anchors: impl IntoIterator<Item = String>) -> Self {
        Self {
            anchors: anchors.into_iter().collect(),
            scrolled_to: Vec::new(),
        }
    }
}

impl ScrollSurface for PageSurface {
    fn lookup(&self, section_id: &str) -> Option<ScrollTarget> {
        self.anchors
            .iter()
            .position(|a| a == section_id)
            .map(ScrollTarget)
    }

    fn scroll_to(&mut self, target: ScrollTarget) {
        self.scrolled_to.push(self.anchors[target.0].clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> PageSurface {
        PageSurface::with_anchors(["hero", "about", "contact"].map(String::from))
    }

    #[test]
    fn go_to_scrolls_to_existing_section() {
        let mut surface = surface();
        let mut nav = Navigator::new();
        nav.go_to("about", &mut surface);
        assert_eq!(surface.scrolled_to, vec!["about"]);
    }

    #[test]
    fn go_to_missing_section_is_silent_noop() {
        let mut surface = surface();
        let mut nav = Navigator::new();
        nav.go_to("blog", &mut surface);
        assert!(surface.scrolled_to.is_empty());
    }

    #[test]
    fn go_to_closes_menu_even_on_miss() {
        let mut surface = surface();
        let mut nav = Navigator::new();
        nav.menu.toggle();
        assert!(nav.menu.is_open());

        nav.go_to("blog", &mut surface);
        assert!(!nav.menu.is_open());

        nav.menu.toggle();
        nav.go_to("hero", &mut surface);
        assert!(!nav.menu.is_open());
    }
}
