//! About page: story, interests, education, skills, leadership, languages.

use crate::domain::content::{education, interests, languages, leadership, skills, SkillLevel};
use crate::motion;
use crate::ui::pages::{bullet, heading, push_section, section_title, subtle};
use crate::ui::widgets::chip::{chip_row, Tone};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};
use std::time::Duration;

/// Entrance sections on this page
pub const SECTION_COUNT: usize = 4;

pub struct AboutPage {
    elapsed: Duration,
    reduced_motion: bool,
    scroll: u16,
}

impl AboutPage {
    pub fn new(elapsed: Duration, reduced_motion: bool, scroll: u16) -> Self {
        Self {
            elapsed,
            reduced_motion,
            scroll,
        }
    }

    fn reveal(&self, index: usize) -> motion::Reveal {
        motion::reveal_at(self.elapsed, index, self.reduced_motion)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut out = Vec::new();

        // 0: header
        push_section(
            &mut out,
            self.reveal(0),
            vec![
                Line::default(),
                heading("About Me"),
                subtle("Student, builder, and first-generation trailblazer"),
                Line::default(),
            ],
        );

        // 1: story and interests
        let mut story_lines = vec![section_title("My Story")];
        for paragraph in crate::domain::content::story() {
            story_lines.push(Line::from(Span::raw(*paragraph)));
            story_lines.push(Line::default());
        }
        story_lines.push(section_title("What Drives Me"));
        for interest in interests() {
            story_lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} {}: ", interest.icon, interest.label),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(interest.description),
            ]));
        }
        story_lines.push(Line::default());
        push_section(&mut out, self.reveal(1), story_lines);

        // 2: education, skills, leadership
        let edu = education();
        let mut facts = vec![
            section_title("Education"),
            Line::from(Span::styled(
                edu.school,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(edu.degree),
            Line::from(Span::styled(
                format!("{} • {}", edu.period, edu.location),
                Style::default().fg(Color::DarkGray),
            )),
            chip_row(edu.honors.iter().map(|h| (*h, Tone::Purple))),
            Line::default(),
            section_title("Technical Skills"),
        ];
        for skill in skills() {
            let tone = match skill.level {
                SkillLevel::Advanced => Tone::Positive,
                SkillLevel::Intermediate => Tone::Blue,
            };
            facts.push(chip_row([(skill.name, Tone::Neutral), (skill.level.label(), tone)]));
        }
        facts.push(Line::default());
        facts.push(section_title("Leadership"));
        for role in leadership() {
            facts.push(bullet(&format!("{}: {}", role.organization, role.role)));
        }
        facts.push(Line::default());
        push_section(&mut out, self.reveal(2), facts);

        // 3: languages
        push_section(
            &mut out,
            self.reveal(3),
            vec![
                section_title("Languages"),
                chip_row(languages().iter().map(|l| (*l, Tone::Neutral))),
            ],
        );

        out
    }
}

impl Widget for AboutPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(elapsed: Duration, reduced: bool) -> String {
        AboutPage::new(elapsed, reduced, 0)
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_settled_page_has_every_section() {
        let text = rendered(Duration::from_secs(5), false);
        assert!(text.contains("My Story"));
        assert!(text.contains("Macalester College"));
        assert!(text.contains("QuestBridge Scholar"));
        assert!(text.contains("Spanish (Native)"));
    }

    #[test]
    fn test_languages_enter_last() {
        // At 100ms the header has started but the languages section has not
        let page = AboutPage::new(Duration::from_millis(100), false, 0);
        assert!(!page.reveal(0).is_hidden());
        assert!(page.reveal(3).is_hidden());
    }

    #[test]
    fn test_reduced_motion_is_complete_at_zero() {
        let text = rendered(Duration::ZERO, true);
        assert!(text.contains("Spanish (Native)"));
    }
}
