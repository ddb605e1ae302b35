//! Golden tests: exact markup for the small building blocks, structural
//! assertions for the composed document.

use chrono::NaiveDate;

use folio::config::SiteConfig;
use folio::content::content;
use folio::html::{el, Node};
use folio::icons;
use folio::plan;
use folio::theme::Theme;
use folio::warn::WarningSink;

#[test]
fn glyph_markup_is_stable() {
    let svg: Node = icons::resolve("check").unwrap().svg(16, "icon").into();
    insta::assert_snapshot!(svg.render(), @r#"<svg class="icon" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M20 6 9 17l-5-5"></path></svg>"#);
}

#[test]
fn element_tree_markup_is_stable() {
    let node: Node = el("div")
        .class("stat-card")
        .child(el("div").class("stat-value accent-primary").text("18"))
        .child(el("div").class("stat-label").text("Total Skills"))
        .into();
    insta::assert_snapshot!(node.render(), @r#"<div class="stat-card"><div class="stat-value accent-primary">18</div><div class="stat-label">Total Skills</div></div>"#);
}

#[test]
fn escaped_text_markup_is_stable() {
    let node: Node = el("p").text("Fish & Chips <deluxe>").into();
    insta::assert_snapshot!(node.render(), @"<p>Fish &amp; Chips &lt;deluxe&gt;</p>");
}

#[test]
fn form_payload_is_stable() {
    let payload = folio::form::encode_payload(&folio::Submission {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello there".into(),
        message: "This is a message".into(),
        honeypot: String::new(),
    });
    insta::assert_snapshot!(payload, @"form-name=contact&name=Ada&email=ada%40example.com&subject=Hello+there&message=This+is+a+message&bot-field=");
}

fn composed_index() -> String {
    let mut warnings = WarningSink::new();
    let artifacts = plan(
        content(),
        &SiteConfig::default(),
        Theme::Light,
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        &mut warnings,
    );
    assert!(warnings.is_empty());
    artifacts[0].content.clone()
}

#[test]
fn document_structure_holds() {
    let markup = composed_index();

    assert!(markup.starts_with("<!DOCTYPE html>\n<html lang=\"en\""));
    assert_eq!(markup.matches("<header").count(), 1);
    assert_eq!(markup.matches("<footer").count(), 1);
    assert_eq!(markup.matches("<main").count(), 1);
    assert_eq!(markup.matches("<section").count(), 6);

    // Every external link is isolated.
    assert_eq!(
        markup.matches("target=\"_blank\"").count(),
        markup.matches("rel=\"noopener noreferrer\"").count()
    );
}

#[test]
fn derived_numbers_land_in_the_markup() {
    let markup = composed_index();

    // Skills: 18 total, 6 expert, 6 max years, 5 categories.
    for needle in [">18<", ">6<", ">6+<", ">5<"] {
        assert!(markup.contains(needle), "missing {needle}");
    }
    // Projects: 3 total, 3 completed, 8 distinct technologies, 2 featured.
    for needle in [">3<", ">8<", ">2<"] {
        assert!(markup.contains(needle), "missing {needle}");
    }
    // Experience: "Present" literal for the current position.
    assert!(markup.contains(">Present<"));
}
