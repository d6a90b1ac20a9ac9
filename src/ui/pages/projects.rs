//! Projects page: category filter bar, project cards, summary stats.

use crate::domain::{distinct_technology_count, projects, CategoryFilter, ProjectEntry, ProjectStatus};
use crate::motion;
use crate::ui::pages::{bullet, heading, push_section, section_title, subtle};
use crate::ui::widgets::chip::{chip, chip_row, Tone};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};
use std::time::Duration;

/// Filter selection for the Projects page. Rebuilt on every visit, so a
/// fresh visit always starts on All.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectsState {
    pub filter: CategoryFilter,
}

impl ProjectsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_filter(&mut self) {
        self.filter = self.filter.next();
    }

    pub fn previous_filter(&mut self) {
        self.filter = self.filter.previous();
    }

    /// Projects visible under the current filter, source order preserved
    pub fn visible(&self) -> Vec<&'static ProjectEntry> {
        projects().iter().filter(|p| self.filter.matches(p)).collect()
    }

    /// Sections on the page given the current filter, for settle checks
    pub fn section_count(&self) -> usize {
        self.visible().len() + 3
    }
}

pub struct ProjectsPage<'a> {
    state: &'a ProjectsState,
    elapsed: Duration,
    reduced_motion: bool,
    scroll: u16,
}

impl<'a> ProjectsPage<'a> {
    pub fn new(state: &'a ProjectsState, elapsed: Duration, reduced_motion: bool, scroll: u16) -> Self {
        Self {
            state,
            elapsed,
            reduced_motion,
            scroll,
        }
    }

    fn reveal(&self, index: usize) -> motion::Reveal {
        motion::reveal_at(self.elapsed, index, self.reduced_motion)
    }

    fn filter_bar(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for choice in CategoryFilter::CHOICES {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            let style = if choice == self.state.filter {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", choice.label()), style));
        }
        Line::from(spans).centered()
    }

    fn card(&self, project: &ProjectEntry) -> Vec<Line<'static>> {
        let status_tone = match project.status {
            ProjectStatus::Completed => Tone::Positive,
            ProjectStatus::InProgress => Tone::Blue,
            ProjectStatus::Planned => Tone::Neutral,
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    project.title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                chip(project.status.label(), status_tone),
                Span::raw(" "),
                chip(project.category.label(), Tone::Purple),
            ]),
            Line::from(Span::styled(
                project.description,
                Style::default().fg(Color::Gray),
            )),
        ];

        for feature in project.features {
            lines.push(bullet(feature));
        }

        lines.push(chip_row(
            project.technologies.iter().map(|t| (*t, Tone::Blue)),
        ));

        let mut links = Vec::new();
        if let Some(url) = project.live_url {
            links.push(Span::styled(
                format!("Live: {}", url),
                Style::default().fg(Color::Cyan),
            ));
        }
        if let Some(url) = project.github_url {
            if !links.is_empty() {
                links.push(Span::raw("   "));
            }
            links.push(Span::styled(
                format!("Code: {}", url),
                Style::default().fg(Color::Cyan),
            ));
        }
        if !links.is_empty() {
            lines.push(Line::from(links));
        }

        lines.push(Line::default());
        lines
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let visible = self.state.visible();
        let mut out = Vec::new();

        // 0: header
        push_section(
            &mut out,
            self.reveal(0),
            vec![
                Line::default(),
                heading("Projects"),
                subtle("Things I've built, from business automation to mobile apps"),
                Line::default(),
            ],
        );

        // 1: filter bar
        push_section(
            &mut out,
            self.reveal(1),
            vec![self.filter_bar(), Line::default()],
        );

        // 2..: one card per visible project
        for (i, project) in visible.iter().enumerate() {
            push_section(&mut out, self.reveal(i + 2), self.card(project));
        }

        // summary stats after the cards
        let completed = projects()
            .iter()
            .filter(|p| p.status == ProjectStatus::Completed)
            .count();
        let live = projects().iter().filter(|p| p.live_url.is_some()).count();
        push_section(
            &mut out,
            self.reveal(visible.len() + 2),
            vec![
                section_title("By the numbers"),
                bullet(&format!("{} projects", projects().len())),
                bullet(&format!("{} completed", completed)),
                bullet(&format!("{} technologies used", distinct_technology_count())),
                bullet(&format!("{} live demos", live)),
            ],
        );

        out
    }
}

impl Widget for ProjectsPage<'_> {
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
    use crate::domain::ProjectCategory;

    fn rendered(state: &ProjectsState) -> String {
        ProjectsPage::new(state, Duration::from_secs(5), false, 0)
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_fresh_state_shows_all() {
        let state = ProjectsState::new();
        assert_eq!(state.filter, CategoryFilter::All);
        assert_eq!(state.visible().len(), projects().len());
    }

    #[test]
    fn test_filter_narrows_cards() {
        let mut state = ProjectsState::new();
        state.filter = CategoryFilter::Only(ProjectCategory::Mobile);
        let text = rendered(&state);
        assert!(text.contains("MOMO Fit"));
        assert!(!text.contains("WaterWise"));
    }

    #[test]
    fn test_cycle_returns_to_all() {
        let mut state = ProjectsState::new();
        for _ in 0..CategoryFilter::CHOICES.len() {
            state.next_filter();
        }
        assert_eq!(state.filter, CategoryFilter::All);
    }

    #[test]
    fn test_summary_stats_ignore_filter() {
        let mut state = ProjectsState::new();
        state.filter = CategoryFilter::Only(ProjectCategory::Ai);
        let text = rendered(&state);
        assert!(text.contains("5 projects"));
        assert!(text.contains("22 technologies used"));
    }
}
