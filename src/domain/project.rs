//! Project entry entity, category filter, and the project data.

/// Category a project belongs to; drives the client-side filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Ai,
    Automation,
}

impl ProjectCategory {
    /// Filter-bar label for this category
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web Apps",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Ai => "AI/ML",
            ProjectCategory::Automation => "Automation",
        }
    }
}

/// Delivery status; drives a label chip only, no transition rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

/// The selected filter on the Projects page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Filter choices in display order
    pub const CHOICES: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(ProjectCategory::Web),
        CategoryFilter::Only(ProjectCategory::Mobile),
        CategoryFilter::Only(ProjectCategory::Ai),
        CategoryFilter::Only(ProjectCategory::Automation),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Only(cat) => cat.label(),
        }
    }

    /// True iff `project` is visible under this filter
    pub fn matches(&self, project: &ProjectEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => project.category == *cat,
        }
    }

    /// Next choice in display order, wrapping
    pub fn next(&self) -> CategoryFilter {
        let idx = self.index();
        Self::CHOICES[(idx + 1) % Self::CHOICES.len()]
    }

    /// Previous choice in display order, wrapping
    pub fn previous(&self) -> CategoryFilter {
        let idx = self.index();
        Self::CHOICES[(idx + Self::CHOICES.len() - 1) % Self::CHOICES.len()]
    }

    fn index(&self) -> usize {
        Self::CHOICES
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }
}

/// One portfolio project
#[derive(Debug, Clone)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

/// The project list. Defined once, never mutated; the filter only
/// selects a visible subset, order preserved.
pub fn projects() -> &'static [ProjectEntry] {
    const PROJECTS: [ProjectEntry; 5] = [
        ProjectEntry {
            title: "Fresh Start Cleaning - Business Suite",
            description: "Complete business automation solution including responsive website and AI-powered email generation tool",
            technologies: &["React", "Python", "Tkinter", "AI/ML", "Ollama API", "SMTP"],
            features: &[
                "Responsive business website",
                "AI email customization",
                "90% reduction in outreach time",
                "Batch email campaigns",
            ],
            category: ProjectCategory::Automation,
            status: ProjectStatus::Completed,
            live_url: Some("https://freshcleaningcolouisiana.com/"),
            github_url: Some("https://github.com/williamacostalora/fresh_start_email_generator"),
        },
        ProjectEntry {
            title: "MOMO Fit - Social Fitness App",
            description: "Real-time iOS app for tracking and sharing gym activity with friends, featuring animated mascot and social features",
            technologies: &["Swift", "SwiftUI", "Firebase", "Firestore", "Push Notifications"],
            features: &[
                "Real-time activity sharing",
                "Animated mascot",
                "Friend syncing",
                "Custom messages",
                "Pastel-themed UI",
            ],
            category: ProjectCategory::Mobile,
            status: ProjectStatus::Completed,
            live_url: None,
            github_url: Some("https://github.com/Nadizdom34/momodev"),
        },
        ProjectEntry {
            title: "WaterWise AI - Sustainability Consultant",
            description: "AI-powered water tracking tool that generates personalized usage scores and conservation insights",
            technologies: &["Next.js", "React", "Together AI API", "Vercel", "TypeScript"],
            features: &[
                "Personalized water scores",
                "AI-powered insights",
                "Conservation recommendations",
                "Usage analytics",
            ],
            category: ProjectCategory::Ai,
            status: ProjectStatus::Completed,
            live_url: Some("https://waterwise-wateruseconsultant-chat.vercel.app/"),
            github_url: None,
        },
        ProjectEntry {
            title: "Portfolio Website",
            description: "Modern, accessible portfolio built with React, featuring animations and responsive design",
            technologies: &["React", "TypeScript", "Tailwind CSS", "Framer Motion", "Vite"],
            features: &[
                "Responsive design",
                "Smooth animations",
                "Dark theme",
                "Accessibility focus",
            ],
            category: ProjectCategory::Web,
            status: ProjectStatus::Completed,
            live_url: None,
            github_url: Some("https://github.com/williamacostalora/personalWebsite"),
        },
        ProjectEntry {
            title: "Portico Health Data Analytics Platform",
            description: "R-based data visualization platform for mapping healthcare access in Twin Cities communities",
            technologies: &["R", "Data Visualization", "Statistical Modeling", "GIS Mapping"],
            features: &[
                "Community health mapping",
                "Statistical analysis",
                "Interactive visualizations",
                "Grant proposal support",
            ],
            category: ProjectCategory::Web,
            status: ProjectStatus::InProgress,
            live_url: None,
            github_url: None,
        },
    ];
    &PROJECTS
}

/// Count of distinct technologies across all projects
pub fn distinct_technology_count() -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for project in projects() {
        for tech in project.technologies {
            if !seen.contains(tech) {
                seen.push(tech);
            }
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_is_identity() {
        let visible: Vec<_> = projects()
            .iter()
            .filter(|p| CategoryFilter::All.matches(p))
            .map(|p| p.title)
            .collect();
        let all: Vec<_> = projects().iter().map(|p| p.title).collect();
        assert_eq!(visible, all);
    }

    #[test]
    fn test_filter_mobile_exact_set() {
        let filter = CategoryFilter::Only(ProjectCategory::Mobile);
        let visible: Vec<_> = projects().iter().filter(|p| filter.matches(p)).collect();
        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|p| p.category == ProjectCategory::Mobile));
        let hidden_mobile = projects()
            .iter()
            .filter(|p| p.category == ProjectCategory::Mobile && !filter.matches(p))
            .count();
        assert_eq!(hidden_mobile, 0);
    }

    #[test]
    fn test_filter_preserves_order() {
        let filter = CategoryFilter::Only(ProjectCategory::Web);
        let visible: Vec<_> = projects()
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.title)
            .collect();
        assert_eq!(
            visible,
            vec!["Portfolio Website", "Portico Health Data Analytics Platform"]
        );
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = CategoryFilter::All;
        for _ in 0..CategoryFilter::CHOICES.len() {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);
        assert_eq!(CategoryFilter::All.previous().next(), CategoryFilter::All);
    }

    #[test]
    fn test_distinct_technology_count() {
        // "React" appears in three projects but counts once
        assert_eq!(distinct_technology_count(), 22);
    }
}
