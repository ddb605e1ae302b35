//! Content schema - the typed shape of everything the site renders
//!
//! All entities are plain immutable data. The store owns one value of
//! [`Content`]; renderers borrow slices of it and own nothing. Dates are
//! calendar-month strings (`YYYY-MM`) parsed on demand by `content::dates`.

use serde::{Deserialize, Serialize};

/// Identity of the site owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    pub website: Option<String>,
    /// Path or URL of the avatar image
    pub avatar: String,
    /// Locator of the resume resource (PDF or HTML), if published
    pub resume: Option<String>,
}

/// One outbound profile link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub name: String,
    pub url: String,
    /// Symbolic icon name resolved through `icons::resolve`
    pub icon: String,
    pub username: Option<String>,
}

/// Proficiency level of a skill
///
/// The enumerated set is closed; labels arriving from outside the store go
/// through [`SkillLevel::from_label`], which maps anything unrecognized to
/// `Beginner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Parse a display label, falling back to `Beginner` for unknown input
    pub fn from_label(label: &str) -> Self {
        match label {
            "Expert" => SkillLevel::Expert,
            "Advanced" => SkillLevel::Advanced,
            "Intermediate" => SkillLevel::Intermediate,
            _ => SkillLevel::Beginner,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Expert => "Expert",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Beginner => "Beginner",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One competency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub level: SkillLevel,
    pub years_of_experience: Option<u32>,
    pub icon: Option<String>,
}

/// Ordered grouping of skills shown as one tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub skills: Vec<Skill>,
}

/// One employment period
///
/// An absent `end` is the sole "current position" signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    /// Calendar month, `YYYY-MM`
    pub start: String,
    /// Calendar month, `YYYY-MM`; `None` means the position is current
    pub end: Option<String>,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub company_logo: Option<String>,
    pub company_url: Option<String>,
}

impl Experience {
    /// True when the position has no end date
    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }
}

/// Delivery status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One portfolio work item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    /// Image paths, first one is the card cover
    pub images: Vec<String>,
    pub demo_url: Option<String>,
    pub source_url: Option<String>,
    pub category: String,
    pub status: ProjectStatus,
    /// Calendar month, `YYYY-MM`
    pub start: String,
    pub end: Option<String>,
    pub team_size: Option<u32>,
    pub role: Option<String>,
    pub featured: bool,
}

/// Ordered grouping of projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub projects: Vec<Project>,
}

/// One credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    /// Calendar month, `YYYY-MM`
    pub issue_date: String,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
}

/// Free-form about block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutProfile {
    pub summary: String,
    pub detailed_bio: String,
    pub interests: Vec<String>,
    pub values: Vec<String>,
    pub fun_facts: Vec<String>,
}

/// Contact-section summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
    pub location: String,
    pub availability: String,
    pub preferred_contact_method: String,
}

/// One header/menu entry
///
/// `anchor` must resolve to a section id present in the composed page; the
/// pairing is static and enforced by `check`, not at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: String,
    pub name: String,
    /// In-page link target, e.g. `#about`
    pub anchor: String,
    pub section: String,
}

/// Page `<head>` metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub og_image: Option<String>,
}

/// The whole content store value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub personal: PersonalInfo,
    pub social_links: Vec<SocialLink>,
    pub about: AboutProfile,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
    pub projects: Vec<ProjectCategory>,
    pub certifications: Vec<Certification>,
    pub contact: ContactInfo,
    pub navigation: Vec<NavigationItem>,
    pub seo: SeoMeta,
}

impl Content {
    /// All skills flattened across categories, in category order
    pub fn all_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().flat_map(|c| c.skills.iter())
    }

    /// All projects flattened across categories, in category order
    pub fn all_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().flat_map(|c| c.projects.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_label_maps_known_labels() {
        assert_eq!(SkillLevel::from_label("Expert"), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_label("Advanced"), SkillLevel::Advanced);
        assert_eq!(
            SkillLevel::from_label("Intermediate"),
            SkillLevel::Intermediate
        );
        assert_eq!(SkillLevel::from_label("Beginner"), SkillLevel::Beginner);
    }

    #[test]
    fn level_from_label_falls_back_to_beginner() {
        assert_eq!(SkillLevel::from_label("Wizard"), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_label(""), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_label("expert"), SkillLevel::Beginner);
    }

    #[test]
    fn status_labels_match_display() {
        assert_eq!(ProjectStatus::InProgress.to_string(), "In Progress");
        assert_eq!(ProjectStatus::Completed.label(), "Completed");
    }

    #[test]
    fn experience_without_end_is_current() {
        let exp = Experience {
            id: "x".into(),
            company: "Acme".into(),
            position: "Engineer".into(),
            location: "Remote".into(),
            start: "2024-08".into(),
            end: None,
            description: String::new(),
            achievements: vec![],
            technologies: vec![],
            company_logo: None,
            company_url: None,
        };
        assert!(exp.is_current());
    }
}
