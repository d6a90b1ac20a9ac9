//! Home page: avatar, name, tagline, chips, calls to action, quick links.

use crate::config::ProfileConfig;
use crate::domain::Route;
use crate::motion;
use crate::services::AvatarArt;
use crate::ui::pages::{heading, push_section, subtle};
use crate::ui::widgets::avatar::AvatarWidget;
use crate::ui::widgets::chip::{chip_row, Tone};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};
use std::time::Duration;

/// Entrance sections on this page
pub const SECTION_COUNT: usize = 7;

pub struct HomePage<'a> {
    profile: &'a ProfileConfig,
    avatar: Option<&'a AvatarArt>,
    elapsed: Duration,
    reduced_motion: bool,
    scroll: u16,
}

impl<'a> HomePage<'a> {
    pub fn new(
        profile: &'a ProfileConfig,
        avatar: Option<&'a AvatarArt>,
        elapsed: Duration,
        reduced_motion: bool,
        scroll: u16,
    ) -> Self {
        Self {
            profile,
            avatar,
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

        // 1: name heading
        push_section(
            &mut out,
            self.reveal(1),
            vec![
                Line::default(),
                heading(&self.profile.name),
                Line::default(),
            ],
        );

        // 2: tagline
        push_section(
            &mut out,
            self.reveal(2),
            vec![subtle(&self.profile.tagline), Line::default()],
        );

        // 3: chips
        push_section(
            &mut out,
            self.reveal(3),
            vec![
                chip_row([
                    ("Based in Minnesota", Tone::Neutral),
                    ("Open to work", Tone::Positive),
                    ("React • Node • Python", Tone::Neutral),
                ])
                .centered(),
                Line::default(),
            ],
        );

        // 4: calls to action
        push_section(
            &mut out,
            self.reveal(4),
            vec![
                chip_row([
                    ("View Projects →", Tone::Purple),
                    ("About Me", Tone::Neutral),
                    ("Experience", Tone::Neutral),
                    ("Contact", Tone::Neutral),
                ])
                .centered(),
                Line::default(),
            ],
        );

        // 5: quick outbound links
        push_section(
            &mut out,
            self.reveal(5),
            vec![
                Line::from(vec![
                    Span::styled("  ✉ ", Style::default().fg(Color::Blue)),
                    Span::raw(self.profile.email.clone()),
                ])
                .centered(),
                Line::from(vec![
                    Span::styled("  ⌥ ", Style::default().fg(Color::Gray)),
                    Span::raw(self.profile.github_url.clone()),
                ])
                .centered(),
                Line::from(vec![
                    Span::styled("  in ", Style::default().fg(Color::Blue)),
                    Span::raw(self.profile.linkedin_url.clone()),
                ])
                .centered(),
                Line::from(vec![
                    Span::styled("  ⎙ ", Style::default().fg(Color::Magenta)),
                    Span::raw(format!("Résumé: {}", self.profile.resume_url)),
                ])
                .centered(),
                Line::default(),
            ],
        );

        // 6: scroll cue
        push_section(
            &mut out,
            self.reveal(6),
            vec![subtle(&format!(
                "Press 4 for projects ({})",
                Route::Projects.path()
            ))],
        );

        out
    }
}

impl Widget for HomePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let avatar = AvatarWidget::new(self.avatar, &self.profile.initials);
        let avatar_height = avatar.height() + 1;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(avatar_height), Constraint::Min(0)])
            .split(area);

        // Section 0 is the avatar; it pops in once its slot starts
        if !self.reveal(0).is_hidden() {
            avatar.render(chunks[0], buf);
        }

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown_page(profile: &ProfileConfig) -> Vec<String> {
        HomePage::new(profile, None, Duration::from_secs(5), false, 0)
            .lines()
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_settled_page_shows_profile() {
        let profile = ProfileConfig::default();
        let rendered = shown_page(&profile).join("\n");
        assert!(rendered.contains("William Acosta"));
        assert!(rendered.contains("wacostal@macalester.edu"));
        assert!(rendered.contains("Open to work"));
    }

    #[test]
    fn test_fresh_page_hides_late_sections() {
        let profile = ProfileConfig::default();
        let page = HomePage::new(&profile, None, Duration::ZERO, false, 0);
        // Index 5 has a 400ms delay; at t=0 it is hidden
        assert!(page.reveal(5).is_hidden());
        let rendered: String = page
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(!rendered.contains("github.com"));
    }

    #[test]
    fn test_reduced_motion_shows_everything_immediately() {
        let profile = ProfileConfig::default();
        let page = HomePage::new(&profile, None, Duration::ZERO, true, 0);
        let rendered: String = page
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(rendered.contains("github.com"));
    }
}
