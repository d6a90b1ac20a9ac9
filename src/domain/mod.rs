//! Domain entities for portfolio-tui.
//!
//! This module contains the display records every page renders:
//! - Route: the path → page mapping and navigation items
//! - ExperienceEntry: one position on the work timeline
//! - ProjectEntry: one portfolio project, with category and status
//! - Content: skills, interests, education, contact methods

pub mod content;
mod experience;
mod project;
mod route;

pub use experience::{experiences, ExperienceEntry};
pub use project::{
    distinct_technology_count, projects, CategoryFilter, ProjectCategory, ProjectEntry,
    ProjectStatus,
};
pub use route::{nav_items, NavItem, Route};
