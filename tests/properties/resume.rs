use std::time::Duration;

use proptest::prelude::*;

use folio::resume::{classify, dispatch, FileKind, ResumeAction, UserAgent};
use folio::warn::WarningSink;

#[derive(Debug, Default)]
struct CountingAgent {
    opens: usize,
    navigations: usize,
    prints: usize,
    saves: Vec<String>,
}

impl UserAgent for CountingAgent {
    fn open_new(&mut self, _locator: &str) -> bool {
        self.opens += 1;
        true
    }

    fn navigate_current(&mut self, _locator: &str) {
        self.navigations += 1;
    }

    fn print_after(&mut self, _delay: Duration) {
        self.prints += 1;
    }

    fn save_as(&mut self, _locator: &str, filename: &str) {
        self.saves.push(filename.to_string());
    }
}

fn action_strategy() -> impl Strategy<Value = ResumeAction> {
    prop_oneof![
        Just(ResumeAction::View),
        Just(ResumeAction::Print),
        Just(ResumeAction::Download),
    ]
}

proptest! {
    #[test]
    fn classify_never_panics(locator in ".*") {
        let _ = classify(&locator);
    }

    #[test]
    fn classification_ignores_case(stem in "[a-z0-9/]{0,20}") {
        prop_assert_eq!(classify(&format!("{stem}.PDF")), FileKind::Pdf);
        prop_assert_eq!(classify(&format!("{stem}.Html")), FileKind::Html);
        prop_assert_eq!(classify(&format!("{stem}.HTM")), FileKind::Html);
    }

    #[test]
    fn dispatch_issues_at_most_one_navigation_effect(
        locator in ".{1,40}",
        action in action_strategy(),
    ) {
        let mut ua = CountingAgent::default();
        let mut warnings = WarningSink::new();
        dispatch(&locator, action, &mut ua, &mut warnings);

        prop_assert!(ua.opens + ua.navigations + ua.saves.len() <= 1);
        prop_assert!(warnings.is_empty());
    }

    #[test]
    fn pdf_print_never_triggers_print(stem in "[a-z0-9/]{0,20}") {
        let mut ua = CountingAgent::default();
        let mut warnings = WarningSink::new();
        dispatch(&format!("{stem}.pdf"), ResumeAction::Print, &mut ua, &mut warnings);
        prop_assert_eq!(ua.prints, 0);
        prop_assert_eq!(ua.opens, 1);
    }

    #[test]
    fn download_filename_is_fixed(locator in ".{1,40}") {
        let mut ua = CountingAgent::default();
        let mut warnings = WarningSink::new();
        dispatch(&locator, ResumeAction::Download, &mut ua, &mut warnings);
        prop_assert_eq!(ua.saves.len(), 1);
        prop_assert!(ua.saves[0] == "resume.pdf" || ua.saves[0] == "resume.html");
    }
}
