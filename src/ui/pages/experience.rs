//! Experience page: the work-history timeline.

use crate::domain::{experiences, ExperienceEntry};
use crate::motion;
use crate::ui::pages::{bullet, heading, push_section, section_title, subtle};
use crate::ui::widgets::chip::{chip, chip_row, Tone};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};
use std::time::Duration;

/// Entrance sections: header + one per entry + summary
pub fn section_count() -> usize {
    experiences().len() + 2
}

pub struct ExperiencePage {
    elapsed: Duration,
    reduced_motion: bool,
    scroll: u16,
}

impl ExperiencePage {
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

    fn card(&self, entry: &ExperienceEntry) -> Vec<Line<'static>> {
        let mut title = vec![Span::styled(
            entry.role,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
        if entry.current {
            title.push(Span::raw("  "));
            title.push(chip("Current", Tone::Positive));
        }

        let mut company = vec![Span::styled(
            entry.company,
            Style::default().fg(Color::Magenta),
        )];
        if let Some(link) = entry.link {
            company.push(Span::styled(
                format!("  {}", link),
                Style::default().fg(Color::Cyan),
            ));
        }

        let mut lines = vec![
            Line::from(title),
            Line::from(company),
            Line::from(Span::styled(
                format!("{} • {}", entry.period, entry.location),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        for item in entry.description {
            lines.push(bullet(item));
        }

        lines.push(chip_row(
            entry.achievements.iter().map(|a| (*a, Tone::Positive)),
        ));
        lines.push(chip_row(
            entry.technologies.iter().map(|t| (*t, Tone::Blue)),
        ));
        lines.push(Line::default());
        lines
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut out = Vec::new();

        // 0: header
        push_section(
            &mut out,
            self.reveal(0),
            vec![
                Line::default(),
                heading("Experience"),
                subtle("Where I've worked and what I shipped"),
                Line::default(),
            ],
        );

        // 1..: one card per entry, newest first
        for (i, entry) in experiences().iter().enumerate() {
            push_section(&mut out, self.reveal(i + 1), self.card(entry));
        }

        // summary after the timeline
        push_section(
            &mut out,
            self.reveal(experiences().len() + 1),
            vec![
                section_title("At a glance"),
                bullet("5+ companies and organizations"),
                bullet("60+ students mentored"),
                bullet("4.0 GPA while working"),
            ],
        );

        out
    }
}

impl Widget for ExperiencePage {
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

    fn rendered(elapsed: Duration) -> String {
        ExperiencePage::new(elapsed, false, 0)
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_settled_page_lists_every_position() {
        let text = rendered(Duration::from_secs(5));
        for entry in experiences() {
            assert!(text.contains(entry.company), "missing {}", entry.company);
        }
        assert!(text.contains("[Current]"));
    }

    #[test]
    fn test_cards_stagger_in_timeline_order() {
        // 300ms in: the first card has started, the last has not
        let page = ExperiencePage::new(Duration::from_millis(300), false, 0);
        assert!(!page.reveal(1).is_hidden());
        assert!(page.reveal(experiences().len()).is_hidden());
    }
}
