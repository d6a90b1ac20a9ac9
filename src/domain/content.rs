//! Static page content: skills, interests, education, contact methods.
//!
//! Every list here is a hand-authored display literal, defined once and
//! never mutated at runtime.

/// Proficiency with a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Advanced,
    Intermediate,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
        }
    }
}

/// One entry on the technical-skills grid
#[derive(Debug, Clone, Copy)]
pub struct SkillEntry {
    pub name: &'static str,
    pub level: SkillLevel,
}

pub fn skills() -> &'static [SkillEntry] {
    const SKILLS: [SkillEntry; 8] = [
        SkillEntry {
            name: "Python",
            level: SkillLevel::Advanced,
        },
        SkillEntry {
            name: "JavaScript/TypeScript",
            level: SkillLevel::Advanced,
        },
        SkillEntry {
            name: "React/Next.js",
            level: SkillLevel::Advanced,
        },
        SkillEntry {
            name: "Node.js",
            level: SkillLevel::Intermediate,
        },
        SkillEntry {
            name: "Java",
            level: SkillLevel::Intermediate,
        },
        SkillEntry {
            name: "R",
            level: SkillLevel::Intermediate,
        },
        SkillEntry {
            name: "SQL",
            level: SkillLevel::Intermediate,
        },
        SkillEntry {
            name: "Firebase",
            level: SkillLevel::Intermediate,
        },
    ];
    &SKILLS
}

/// One entry on the "what drives me" grid
#[derive(Debug, Clone, Copy)]
pub struct Interest {
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn interests() -> &'static [Interest] {
    const INTERESTS: [Interest; 4] = [
        Interest {
            icon: "⌥",
            label: "Open Source",
            description: "Contributing to developer tools",
        },
        Interest {
            icon: "✎",
            label: "AI/ML",
            description: "Exploring computational linguistics",
        },
        Interest {
            icon: "☷",
            label: "Community",
            description: "Building inclusive tech spaces",
        },
        Interest {
            icon: "☕",
            label: "Mentoring",
            description: "Teaching & peer tutoring",
        },
    ];
    &INTERESTS
}

/// Personal story paragraphs on the About page
pub fn story() -> &'static [&'static str] {
    &[
        "Hi! I'm William, a Computer Science student at Macalester College with a passion for creating technology that makes a real difference. Growing up as a first-generation college student from Louisiana, I've learned the power of perseverance and community.",
        "My journey into tech started with curiosity about how things work, but it's evolved into something deeper—a desire to build inclusive solutions that bridge gaps and create opportunities for underrepresented communities.",
        "When I'm not coding, you'll find me mentoring fellow students, co-founding STEM organizations, or working on projects that help local businesses like my family's cleaning company thrive in the digital age.",
    ]
}

/// Education facts
#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub honors: &'static [&'static str],
}

pub fn education() -> Education {
    Education {
        school: "Macalester College",
        degree: "B.A. Computer Science • Minor: Data Science (Bioinformatics)",
        period: "2023-2026 • GPA: 4.00/4.00",
        location: "St. Paul, Minnesota",
        honors: &[
            "QuestBridge Scholar",
            "Google LSLS Alumnus",
            "Goldman Sachs ELS",
        ],
    }
}

/// One leadership role
#[derive(Debug, Clone, Copy)]
pub struct LeadershipRole {
    pub organization: &'static str,
    pub role: &'static str,
}

pub fn leadership() -> &'static [LeadershipRole] {
    const ROLES: [LeadershipRole; 3] = [
        LeadershipRole {
            organization: "Voices In STEM: Macalester SACNAS Chapter",
            role: "Co-Founder & Co-Chair",
        },
        LeadershipRole {
            organization: "Adelante",
            role: "Co-Chair",
        },
        LeadershipRole {
            organization: "Computer Science Teaching Assistant",
            role: "Mentoring 60+ students in Python & OOP",
        },
    ];
    &ROLES
}

pub fn languages() -> &'static [&'static str] {
    &[
        "English (Native)",
        "Spanish (Native)",
        "French (High-Intermediate)",
    ]
}

/// One way to reach out, shown on the Contact page
#[derive(Debug, Clone)]
pub struct ContactMethod {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    pub href: String,
    pub description: &'static str,
}

/// Contact methods built from the configured profile links
pub fn contact_methods(profile: &crate::config::ProfileConfig) -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            icon: "✉",
            label: "Email",
            value: profile.email.clone(),
            href: format!("mailto:{}", profile.email),
            description: "Best way to reach me",
        },
        ContactMethod {
            icon: "⌥",
            label: "GitHub",
            value: "williamacostalora".to_string(),
            href: profile.github_url.clone(),
            description: "Check out my code",
        },
        ContactMethod {
            icon: "in",
            label: "LinkedIn",
            value: "william-acosta-lora".to_string(),
            href: profile.linkedin_url.clone(),
            description: "Let's connect professionally",
        },
        ContactMethod {
            icon: "⎙",
            label: "Resume",
            value: "Download PDF".to_string(),
            href: profile.resume_url.clone(),
            description: "View my full experience",
        },
    ]
}

/// Conversation starters shown as chips on the Contact page
pub fn quick_topics() -> &'static [&'static str] {
    &[
        "Job Opportunities",
        "Collaboration",
        "Mentorship",
        "Coffee Chat",
        "Project Ideas",
        "STEM Outreach",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;

    #[test]
    fn test_skill_levels() {
        let advanced = skills()
            .iter()
            .filter(|s| s.level == SkillLevel::Advanced)
            .count();
        assert_eq!(advanced, 3);
        assert_eq!(skills().len(), 8);
    }

    #[test]
    fn test_contact_methods_follow_profile() {
        let profile = ProfileConfig::default();
        let methods = contact_methods(&profile);
        assert_eq!(methods.len(), 4);
        assert_eq!(methods[0].href, "mailto:wacostal@macalester.edu");
        assert_eq!(methods[1].href, profile.github_url);
    }
}
