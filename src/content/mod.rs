//! Typed content schema, the static store, and date handling

pub mod dates;
pub mod model;
pub mod store;

pub use model::{
    AboutProfile, Certification, ContactInfo, Content, Experience, NavigationItem, PersonalInfo,
    Project, ProjectCategory, ProjectStatus, SeoMeta, Skill, SkillCategory, SkillLevel, SocialLink,
};
pub use store::content;
