//! Content checks - validate the store before shipping it
//!
//! Everything the type system cannot promise is checked here: identifier
//! uniqueness, navigation/section pairing, date shapes, email shapes, icon
//! names. Errors fail the `check` command; warnings only inform.

use std::collections::BTreeSet;

use crate::content::dates;
use crate::content::model::Content;
use crate::form;
use crate::icons;
use crate::sections::SECTION_IDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// One check result line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    /// Group shown as a heading, e.g. "navigation"
    pub area: &'static str,
    pub status: CheckStatus,
    pub message: String,
}

/// All check results for one run
#[derive(Debug, Default, Clone)]
pub struct CheckReport {
    pub items: Vec<CheckItem>,
}

impl CheckReport {
    fn push(&mut self, area: &'static str, status: CheckStatus, message: impl Into<String>) {
        self.items.push(CheckItem {
            area,
            status,
            message: message.into(),
        });
    }

    fn pass(&mut self, area: &'static str, message: impl Into<String>) {
        self.push(area, CheckStatus::Pass, message);
    }

    fn warn(&mut self, area: &'static str, message: impl Into<String>) {
        self.push(area, CheckStatus::Warning, message);
    }

    fn error(&mut self, area: &'static str, message: impl Into<String>) {
        self.push(area, CheckStatus::Error, message);
    }

    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }
}

/// Run every check against the content store
pub fn run(content: &Content) -> CheckReport {
    let mut report = CheckReport::default();
    check_ids(content, &mut report);
    check_navigation(content, &mut report);
    check_dates(content, &mut report);
    check_emails(content, &mut report);
    check_icons(content, &mut report);
    check_resume(content, &mut report);
    report
}

fn unique<'a>(
    report: &mut CheckReport,
    list_name: &str,
    ids: impl Iterator<Item = &'a str>,
) -> bool {
    let mut seen = BTreeSet::new();
    let mut clean = true;
    for id in ids {
        if !seen.insert(id) {
            report.error("identifiers", format!("duplicate id '{id}' in {list_name}"));
            clean = false;
        }
    }
    clean
}

fn check_ids(content: &Content, report: &mut CheckReport) {
    let mut clean = true;
    clean &= unique(
        report,
        "social links",
        content.social_links.iter().map(|l| l.id.as_str()),
    );
    clean &= unique(
        report,
        "skill categories",
        content.skills.iter().map(|c| c.id.as_str()),
    );
    clean &= unique(
        report,
        "skills",
        content.all_skills().map(|s| s.id.as_str()),
    );
    clean &= unique(
        report,
        "experience",
        content.experience.iter().map(|e| e.id.as_str()),
    );
    clean &= unique(
        report,
        "projects",
        content.all_projects().map(|p| p.id.as_str()),
    );
    clean &= unique(
        report,
        "certifications",
        content.certifications.iter().map(|c| c.id.as_str()),
    );
    clean &= unique(
        report,
        "navigation",
        content.navigation.iter().map(|n| n.id.as_str()),
    );
    if clean {
        report.pass("identifiers", "all ids unique within their lists");
    }
}

fn check_navigation(content: &Content, report: &mut CheckReport) {
    let mut clean = true;
    for item in &content.navigation {
        if !SECTION_IDS.contains(&item.section.as_str()) {
            report.error(
                "navigation",
                format!(
                    "item '{}' targets section '{}' which is not composed",
                    item.id, item.section
                ),
            );
            clean = false;
        }
        if item.anchor != format!("#{}", item.section) {
            report.error(
                "navigation",
                format!(
                    "item '{}' anchor '{}' does not match its section '{}'",
                    item.id, item.anchor, item.section
                ),
            );
            clean = false;
        }
    }
    if clean {
        report.pass("navigation", "every item resolves to a composed section");
    }
}

fn check_dates(content: &Content, report: &mut CheckReport) {
    let mut clean = true;
    let mut probe = |report: &mut CheckReport, value: &str, context: String| {
        if dates::parse_month(value, &context).is_err() {
            report.error("dates", format!("invalid date '{value}' in {context}"));
            clean = false;
        }
    };

    for entry in &content.experience {
        probe(report, &entry.start, format!("experience '{}' start", entry.id));
        if let Some(end) = &entry.end {
            probe(report, end, format!("experience '{}' end", entry.id));
        }
    }
    for project in content.all_projects() {
        probe(report, &project.start, format!("project '{}' start", project.id));
        if let Some(end) = &project.end {
            probe(report, end, format!("project '{}' end", project.id));
        }
    }
    for cert in &content.certifications {
        probe(report, &cert.issue_date, format!("certification '{}' issue", cert.id));
        if let Some(expiry) = &cert.expiry_date {
            probe(report, expiry, format!("certification '{}' expiry", cert.id));
        }
    }
    if clean {
        report.pass("dates", "all dates are YYYY-MM");
    }
}

fn check_emails(content: &Content, report: &mut CheckReport) {
    let mut clean = true;
    for (context, email) in [
        ("personal info", &content.personal.email),
        ("contact info", &content.contact.email),
    ] {
        let probe = form::Submission {
            email: email.clone(),
            ..probe_submission()
        };
        if form::validate(&probe).is_err() {
            report.error("emails", format!("{context} email '{email}' is not address-shaped"));
            clean = false;
        }
    }
    if clean {
        report.pass("emails", "all email fields are address-shaped");
    }
}

/// A submission that passes everything except what the caller overrides
fn probe_submission() -> form::Submission {
    form::Submission {
        name: "probe".into(),
        email: "probe@example.com".into(),
        subject: "probe subject".into(),
        message: "probe message body".into(),
        honeypot: String::new(),
    }
}

fn check_icons(content: &Content, report: &mut CheckReport) {
    let mut clean = true;
    let mut probe = |report: &mut CheckReport, name: &str, context: String| {
        if icons::resolve(name).is_none() {
            report.warn("icons", format!("unknown icon '{name}' in {context}"));
            clean = false;
        }
    };

    for link in &content.social_links {
        probe(report, &link.icon, format!("social link '{}'", link.id));
    }
    for skill in content.all_skills() {
        if let Some(icon) = &skill.icon {
            probe(report, icon, format!("skill '{}'", skill.id));
        }
    }
    if clean {
        report.pass("icons", "every referenced icon resolves");
    }
}

fn check_resume(content: &Content, report: &mut CheckReport) {
    match content.personal.resume.as_deref() {
        None | Some("") => {
            report.warn("resume", "no resume locator; resume buttons will do nothing")
        }
        Some(_) => report.pass("resume", "resume locator configured"),
    }
}
