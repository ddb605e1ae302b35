//! Derived display computations
//!
//! Every aggregate number shown on the page is computed here, in one place,
//! so the divergences the page carries (see DESIGN.md) stay visible.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::content::dates;
use crate::content::model::{
    Experience, Project, ProjectCategory, ProjectStatus, SkillCategory, SkillLevel,
};

/// Fixed hero/about "years experience" badge.
///
/// Display constant, deliberately not derived from the experience list; the
/// experience section computes its own total from data. Flagged in
/// DESIGN.md.
pub const YEARS_BADGE: &str = "5+";

/// Fixed about "projects" badge, same caveat as [`YEARS_BADGE`].
pub const PROJECTS_BADGE: &str = "11+";

/// Seed for the experience-years computation when the list is empty
const EXPERIENCE_EPOCH: &str = "2018-01";

/// Visual weight of a proficiency level, in percent
pub fn level_weight(level: SkillLevel) -> u8 {
    match level {
        SkillLevel::Expert => 100,
        SkillLevel::Advanced => 80,
        SkillLevel::Intermediate => 60,
        SkillLevel::Beginner => 40,
    }
}

/// Weight of a free-form level label; anything unrecognized weighs 40
pub fn label_weight(label: &str) -> u8 {
    level_weight(SkillLevel::from_label(label))
}

/// Aggregates for the skills section stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillStats {
    pub total_skills: usize,
    pub expert_skills: usize,
    /// Highest years-of-experience across all skills, 0 when there are none
    pub total_years: u32,
    pub categories: usize,
}

pub fn skill_stats(categories: &[SkillCategory]) -> SkillStats {
    let total_skills = categories.iter().map(|c| c.skills.len()).sum();
    let expert_skills = categories
        .iter()
        .flat_map(|c| c.skills.iter())
        .filter(|s| s.level == SkillLevel::Expert)
        .count();
    let total_years = categories
        .iter()
        .flat_map(|c| c.skills.iter())
        .filter_map(|s| s.years_of_experience)
        .max()
        .unwrap_or(0);

    SkillStats {
        total_skills,
        expert_skills,
        total_years,
        categories: categories.len(),
    }
}

/// Aggregates for the projects section stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub total_projects: usize,
    pub completed_projects: usize,
    /// Distinct technology names across all projects; duplicates count once
    pub technologies: usize,
    pub featured: usize,
    pub categories: usize,
}

pub fn project_stats(categories: &[ProjectCategory]) -> ProjectStats {
    let all: Vec<&Project> = categories.iter().flat_map(|c| c.projects.iter()).collect();
    let technologies: BTreeSet<&str> = all
        .iter()
        .flat_map(|p| p.technologies.iter())
        .map(String::as_str)
        .collect();

    ProjectStats {
        total_projects: all.len(),
        completed_projects: all
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count(),
        technologies: technologies.len(),
        featured: all.iter().filter(|p| p.featured).count(),
        categories: categories.len(),
    }
}

/// Whole years since the start of the chronologically last experience entry
///
/// `(today - start) / 365 days`, floored. An empty list falls back to the
/// original page's epoch (2018-01) rather than failing.
pub fn experience_years(entries: &[Experience], today: NaiveDate) -> i64 {
    let start = entries
        .last()
        .map(|e| e.start.as_str())
        .unwrap_or(EXPERIENCE_EPOCH);
    let start = match dates::parse_month(start, "experience start") {
        Ok(date) => date,
        Err(_) => return 0,
    };
    let days = (today - start).num_days();
    if days < 0 {
        0
    } else {
        days / 365
    }
}

/// Total achievements across all experience entries
pub fn achievement_count(entries: &[Experience]) -> usize {
    entries.iter().map(|e| e.achievements.len()).sum()
}
