//! Experience entry entity and the work-history data.

/// One position on the experience timeline
#[derive(Debug, Clone)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    /// Still ongoing; shown with a "Current" chip
    pub current: bool,
    pub description: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub link: Option<&'static str>,
}

/// The work-history timeline, newest first. Defined once, never mutated.
pub fn experiences() -> &'static [ExperienceEntry] {
    const EXPERIENCES: [ExperienceEntry; 5] = [
        ExperienceEntry {
            company: "Fresh Start Cleaning Louisiana, LLC",
            role: "Freelance Software Developer",
            location: "Lafayette, LA",
            period: "June 2025 – Present",
            current: true,
            description: &[
                "Developed a responsive business website using React, increasing online visibility for a Louisiana-based cleaning service",
                "Built an automated email generation tool using Python/Tkinter that reduced manual outreach time by 90%",
                "Integrated AI customization (Ollama API) for personalized prospect emails across education, construction, and technology sectors",
                "Implemented CSV data processing and SMTP integration, enabling batch email campaigns to 50+ prospects",
            ],
            technologies: &["React", "Python", "Tkinter", "AI/ML", "SMTP", "CSV Processing"],
            achievements: &[
                "90% reduction in manual outreach time",
                "50+ prospect email campaigns",
            ],
            link: Some("https://freshcleaningcolouisiana.com/"),
        },
        ExperienceEntry {
            company: "Medtronic",
            role: "Software Engineering Intern",
            location: "Northridge, CA",
            period: "June 2025 – August 2025",
            current: false,
            description: &[
                "Developing an internal tool to manage the software testing lifecycle, improving visibility across development and QA stages",
                "Building full-stack features using Node.js, JavaScript, MongoDB, and RESTful APIs to streamline data access and tracking",
                "Automated the categorization and batch processing of multi-gigabyte test reports using Python, compressing and optimizing data to 130MB packages for document upload requirements, reducing manual processing time from 7 days to 5 minutes",
            ],
            technologies: &[
                "Node.js",
                "JavaScript",
                "MongoDB",
                "RESTful APIs",
                "GitLab",
                "Jira",
                "Jenkins",
            ],
            achievements: &[
                "Improved testing lifecycle visibility",
                "Automated reporting workflows",
                "Reduced processing from 7 days to 5 minutes",
            ],
            link: None,
        },
        ExperienceEntry {
            company: "Portico Healthnet",
            role: "Health Access Intern",
            location: "Minneapolis, MN",
            period: "August 2024 – Present",
            current: true,
            description: &[
                "Mapped noncitizen groups in the Greater Twin Cities using R to identify areas with higher rates of uninsured individuals",
                "Supported planning and implementation of pop-up clinics and conducted community surveys before and after coverage enrollment",
                "Created R-based data visualizations and contributed to grant proposals for future community health initiatives",
            ],
            technologies: &[
                "R",
                "Data Visualization",
                "Statistical Analysis",
                "Community Research",
            ],
            achievements: &[
                "Identified high-risk uninsured areas",
                "Contributed to grant proposals",
            ],
            link: None,
        },
        ExperienceEntry {
            company: "FiNest Home Services",
            role: "Website and E-Commerce Development Intern",
            location: "Minneapolis, MN",
            period: "January 2025 – May 2025",
            current: false,
            description: &[
                "Single-handedly developed and redesigned FiNest's website using HTML, CSS, and JavaScript",
                "Increased website traffic by 40% and session duration by 25% by improving UX and SEO",
                "Built new service pages and integrated an e-commerce scheduler, enhancing client engagement and conversion",
                "Adjusted website to ensure accessibility needs were met for older adults navigating the site",
            ],
            technologies: &[
                "HTML5",
                "CSS3",
                "JavaScript",
                "UX/UI Design",
                "SEO",
                "Accessibility",
            ],
            achievements: &[
                "40% increase in website traffic",
                "25% increase in session duration",
                "Improved accessibility for older adults",
            ],
            link: None,
        },
        ExperienceEntry {
            company: "Macalester College",
            role: "Computer Science Teaching Assistant",
            location: "St. Paul, MN",
            period: "January 2024 – Present",
            current: true,
            description: &[
                "Instructed over 60 students on Object-Oriented Programming and GUI modules in Python, boosting average grades by 15%",
                "Developed and graded assignments, providing constructive feedback and enhancing student engagement in the course",
                "Participated in professional development events to improve leadership and peer tutoring in STEM subjects",
            ],
            technologies: &[
                "Python",
                "Object-Oriented Programming",
                "GUI Development",
                "Teaching",
                "Mentoring",
            ],
            achievements: &[
                "15% improvement in average grades",
                "60+ students mentored",
                "Enhanced student engagement",
            ],
            link: None,
        },
    ];
    &EXPERIENCES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_shape() {
        let items = experiences();
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|e| !e.description.is_empty()));
        assert!(items.iter().all(|e| !e.technologies.is_empty()));
        assert_eq!(items.iter().filter(|e| e.current).count(), 3);
        assert_eq!(items.iter().filter(|e| e.link.is_some()).count(), 1);
    }
}
