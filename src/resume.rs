//! Resume dispatcher - view, print, or download the resume resource
//!
//! Classification is by locator suffix alone; an unknown suffix takes the
//! HTML branch. Effects go out through a [`UserAgent`] port - the page
//! script executes them against the browser, tests record them. An empty
//! locator is a soft failure: one warning, no effect.

use std::time::Duration;

use crate::warn::WarningSink;

/// Delay before triggering print in a freshly opened context, giving the
/// document time to load
pub const PRINT_DELAY: Duration = Duration::from_millis(1000);

/// Fixed download filename stem; the suffix follows the classification
const DOWNLOAD_STEM: &str = "resume";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeAction {
    View,
    Print,
    Download,
}

/// What the locator suffix says the resource is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Html,
    Unknown,
}

/// Classify a locator by suffix, ASCII-case-insensitively
pub fn classify(locator: &str) -> FileKind {
    let lower = locator.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        FileKind::Pdf
    } else if lower.ends_with(".html") || lower.ends_with(".htm") {
        FileKind::Html
    } else {
        FileKind::Unknown
    }
}

/// Browser-side capability the dispatcher drives
///
/// `open_new` returns false when the new context was blocked (popup
/// blocker); the print path then falls back to navigating the current
/// context.
pub trait UserAgent {
    /// Open a locator in a new, no-opener/no-referrer context
    fn open_new(&mut self, locator: &str) -> bool;

    /// Navigate the current context to the locator
    fn navigate_current(&mut self, locator: &str);

    /// Trigger the print dialog in the most recently opened context after
    /// the given delay
    fn print_after(&mut self, delay: Duration);

    /// Trigger a file save of the locator under the given filename
    fn save_as(&mut self, locator: &str, filename: &str);
}

/// Perform a resume action against the user agent
///
/// Behavior table:
///
/// | action   | `.pdf`                    | other suffix                              |
/// |----------|---------------------------|-------------------------------------------|
/// | view     | open new context          | open new context                          |
/// | print    | open new context          | open new context, print after delay;      |
/// |          |                           | blocked -> navigate current context       |
/// | download | save as `resume.pdf`      | save as `resume.html`                     |
pub fn dispatch(
    locator: &str,
    action: ResumeAction,
    ua: &mut dyn UserAgent,
    warnings: &mut WarningSink,
) {
    if locator.is_empty() {
        warnings.warn("resume", "no resume locator configured, nothing dispatched");
        return;
    }

    let kind = classify(locator);
    match action {
        ResumeAction::View => {
            ua.open_new(locator);
        }
        ResumeAction::Print => match kind {
            // PDF viewers own their print UI.
            FileKind::Pdf => {
                ua.open_new(locator);
            }
            FileKind::Html | FileKind::Unknown => {
                if ua.open_new(locator) {
                    ua.print_after(PRINT_DELAY);
                } else {
                    ua.navigate_current(locator);
                }
            }
        },
        ResumeAction::Download => {
            let filename = match kind {
                FileKind::Pdf => format!("{DOWNLOAD_STEM}.pdf"),
                FileKind::Html | FileKind::Unknown => format!("{DOWNLOAD_STEM}.html"),
            };
            ua.save_as(locator, &filename);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records effects in order; `block_popups` simulates a popup blocker
    #[derive(Debug, Default)]
    struct RecordingAgent {
        block_popups: bool,
        effects: Vec<String>,
    }

    impl UserAgent for RecordingAgent {
        fn open_new(&mut self, locator: &str) -> bool {
            self.effects.push(format!("open_new {locator}"));
            !self.block_popups
        }

        fn navigate_current(&mut self, locator: &str) {
            self.effects.push(format!("navigate {locator}"));
        }

        fn print_after(&mut self, delay: Duration) {
            self.effects.push(format!("print_after {}ms", delay.as_millis()));
        }

        fn save_as(&mut self, locator: &str, filename: &str) {
            self.effects.push(format!("save {locator} as {filename}"));
        }
    }

    fn run(locator: &str, action: ResumeAction, blocked: bool) -> (Vec<String>, usize) {
        let mut ua = RecordingAgent {
            block_popups: blocked,
            ..Default::default()
        };
        let mut warnings = WarningSink::new();
        dispatch(locator, action, &mut ua, &mut warnings);
        (ua.effects, warnings.len())
    }

    #[test]
    fn classification_is_by_suffix_only() {
        assert_eq!(classify("/resume.pdf"), FileKind::Pdf);
        assert_eq!(classify("/Resume.PDF"), FileKind::Pdf);
        assert_eq!(classify("/resume.html"), FileKind::Html);
        assert_eq!(classify("/resume.htm"), FileKind::Html);
        assert_eq!(classify("/resume.docx"), FileKind::Unknown);
        assert_eq!(classify("/resume"), FileKind::Unknown);
    }

    #[test]
    fn view_opens_new_context_for_any_kind() {
        let (effects, _) = run("/resume.pdf", ResumeAction::View, false);
        assert_eq!(effects, vec!["open_new /resume.pdf"]);
        let (effects, _) = run("/resume.html", ResumeAction::View, false);
        assert_eq!(effects, vec!["open_new /resume.html"]);
    }

    #[test]
    fn print_pdf_opens_without_print_trigger() {
        let (effects, _) = run("/resume.pdf", ResumeAction::Print, false);
        assert_eq!(effects, vec!["open_new /resume.pdf"]);
    }

    #[test]
    fn print_html_opens_then_triggers_print_after_delay() {
        let (effects, _) = run("/resume.html", ResumeAction::Print, false);
        assert_eq!(
            effects,
            vec!["open_new /resume.html", "print_after 1000ms"]
        );
    }

    #[test]
    fn print_falls_back_to_current_context_when_blocked() {
        let (effects, _) = run("/resume.html", ResumeAction::Print, true);
        assert_eq!(
            effects,
            vec!["open_new /resume.html", "navigate /resume.html"]
        );
    }

    #[test]
    fn unknown_suffix_takes_the_html_branch() {
        let (effects, _) = run("/resume.docx", ResumeAction::Print, false);
        assert_eq!(
            effects,
            vec!["open_new /resume.docx", "print_after 1000ms"]
        );
    }

    #[test]
    fn download_uses_fixed_filename_per_kind() {
        let (effects, _) = run("/cv/2026.pdf", ResumeAction::Download, false);
        assert_eq!(effects, vec!["save /cv/2026.pdf as resume.pdf"]);
        let (effects, _) = run("/cv/index.htm", ResumeAction::Download, false);
        assert_eq!(effects, vec!["save /cv/index.htm as resume.html"]);
    }

    #[test]
    fn empty_locator_warns_and_does_nothing() {
        let (effects, warnings) = run("", ResumeAction::Print, false);
        assert!(effects.is_empty());
        assert_eq!(warnings, 1);
    }
}
