//! Contact page: info column plus the mail form.
//!
//! Submitting composes a `mailto:` URI from the form fields and hands it
//! to the app, which opens the system mail client. The form then shows a
//! sending notice for one second before clearing itself; navigating away
//! discards the state, so a pending reset on a left page is a no-op.

use crate::config::ProfileConfig;
use crate::domain::content::{contact_methods, quick_topics};
use crate::motion;
use crate::services::contact_mailto;
use crate::ui::pages::{heading, push_section, section_title, subtle};
use crate::ui::widgets::chip::{chip_row, Tone};
use crate::ui::widgets::text_input::{TextInputState, TextInputWidget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::time::{Duration, Instant};
use tui_textarea::TextArea;

/// How long the sending notice stays up before the form clears
const SUBMIT_RESET: Duration = Duration::from_millis(1000);

/// Entrance sections on this page
pub const SECTION_COUNT: usize = 5;

/// Which form field has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Send,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Name,
        FormFocus::Email,
        FormFocus::Subject,
        FormFocus::Message,
        FormFocus::Send,
    ];

    fn next(self) -> FormFocus {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> FormFocus {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// What the app should do after a form key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    None,
    /// Leave the form, back to page navigation
    Exit,
    /// Open this mailto URI in the system mail client
    Submit(String),
}

/// Contact form state. Rebuilt on every visit.
pub struct ContactState {
    pub name: TextInputState,
    pub email: TextInputState,
    pub subject: TextInputState,
    pub message: TextArea<'static>,
    pub focus: FormFocus,
    pub is_submitting: bool,
    reset_deadline: Option<Instant>,
}

impl Default for ContactState {
    fn default() -> Self {
        let mut message = TextArea::default();
        message.set_cursor_line_style(Style::default());
        Self {
            name: TextInputState::new(),
            email: TextInputState::new(),
            subject: TextInputState::new(),
            message,
            focus: FormFocus::default(),
            is_submitting: false,
            reset_deadline: None,
        }
    }
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    fn message_text(&self) -> String {
        self.message.lines().join("\n")
    }

    /// Name, email and message are required; subject falls back to a
    /// default when left empty.
    fn can_submit(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.message_text().trim().is_empty()
    }

    fn submit(&mut self, profile: &ProfileConfig, now: Instant) -> ContactAction {
        if self.is_submitting || !self.can_submit() {
            return ContactAction::None;
        }
        let uri = contact_mailto(
            &profile.email,
            self.name.value(),
            self.email.value(),
            self.subject.value(),
            &self.message_text(),
        );
        self.is_submitting = true;
        self.reset_deadline = Some(now + SUBMIT_RESET);
        ContactAction::Submit(uri)
    }

    /// Route a key event to the focused field
    pub fn handle_key(&mut self, key: KeyEvent, profile: &ProfileConfig) -> ContactAction {
        match key.code {
            KeyCode::Esc => return ContactAction::Exit,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return ContactAction::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return ContactAction::None;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.submit(profile, Instant::now());
            }
            _ => {}
        }

        match self.focus {
            FormFocus::Name => {
                if self.name.handle_key(key) == crate::ui::widgets::text_input::TextInputAction::Submit {
                    self.focus = self.focus.next();
                }
            }
            FormFocus::Email => {
                if self.email.handle_key(key) == crate::ui::widgets::text_input::TextInputAction::Submit {
                    self.focus = self.focus.next();
                }
            }
            FormFocus::Subject => {
                if self.subject.handle_key(key) == crate::ui::widgets::text_input::TextInputAction::Submit {
                    self.focus = self.focus.next();
                }
            }
            FormFocus::Message => {
                self.message.input(key);
            }
            FormFocus::Send => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    return self.submit(profile, Instant::now());
                }
            }
        }
        ContactAction::None
    }

    /// Clear the form once the sending notice has run its course
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.reset_deadline {
            if now >= deadline {
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                let mut message = TextArea::default();
                message.set_cursor_line_style(Style::default());
                self.message = message;
                self.is_submitting = false;
                self.reset_deadline = None;
                self.focus = FormFocus::Name;
            }
        }
    }
}

pub struct ContactPage<'a> {
    state: &'a ContactState,
    profile: &'a ProfileConfig,
    elapsed: Duration,
    reduced_motion: bool,
    editing: bool,
}

impl<'a> ContactPage<'a> {
    pub fn new(
        state: &'a ContactState,
        profile: &'a ProfileConfig,
        elapsed: Duration,
        reduced_motion: bool,
        editing: bool,
    ) -> Self {
        Self {
            state,
            profile,
            elapsed,
            reduced_motion,
            editing,
        }
    }

    fn reveal(&self, index: usize) -> motion::Reveal {
        motion::reveal_at(self.elapsed, index, self.reduced_motion)
    }

    fn info_lines(&self) -> Vec<Line<'static>> {
        let mut out = Vec::new();

        // 0: header
        push_section(
            &mut out,
            self.reveal(0),
            vec![
                Line::default(),
                heading("Get In Touch"),
                subtle("Always happy to talk about opportunities and ideas"),
                Line::default(),
            ],
        );

        // 1: contact methods
        let mut methods = vec![section_title("Reach me at")];
        for method in contact_methods(self.profile) {
            methods.push(Line::from(vec![
                Span::styled(
                    format!("  {} {}: ", method.icon, method.label),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(method.value.clone()),
            ]));
            methods.push(Line::from(Span::styled(
                format!("      {}", method.description),
                Style::default().fg(Color::DarkGray),
            )));
        }
        methods.push(Line::default());
        push_section(&mut out, self.reveal(1), methods);

        // 2: location and availability
        push_section(
            &mut out,
            self.reveal(2),
            vec![
                section_title("Currently"),
                Line::from("  St. Paul, Minnesota"),
                Line::from("  Open to internships and new-grad roles"),
                Line::default(),
            ],
        );

        // 3: quick topics
        push_section(
            &mut out,
            self.reveal(3),
            vec![
                section_title("Quick topics"),
                chip_row(quick_topics().iter().map(|t| (*t, Tone::Neutral))),
                Line::default(),
                Line::from(Span::styled(
                    "Whether it's an opportunity or just a hello, I'd love to hear from you.",
                    Style::default().fg(Color::Gray),
                )),
            ],
        );

        out
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Send a Message ");
        let inner = outer.inner(area);
        outer.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // name
                Constraint::Length(3), // email
                Constraint::Length(3), // subject
                Constraint::Min(4),    // message
                Constraint::Length(1), // send button
            ])
            .split(inner);

        let focus = |f: FormFocus| self.editing && self.state.focus == f;

        TextInputWidget::new(&self.state.name)
            .title("Name")
            .placeholder("Your name")
            .focused(focus(FormFocus::Name))
            .render(chunks[0], buf);
        TextInputWidget::new(&self.state.email)
            .title("Email")
            .placeholder("you@example.com")
            .focused(focus(FormFocus::Email))
            .render(chunks[1], buf);
        TextInputWidget::new(&self.state.subject)
            .title("Subject")
            .placeholder("Portfolio Contact")
            .focused(focus(FormFocus::Subject))
            .render(chunks[2], buf);

        let message_style = if focus(FormFocus::Message) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut message = self.state.message.clone();
        message.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(message_style)
                .title(" Message "),
        );
        message.render(chunks[3], buf);

        let button = if self.state.is_submitting {
            Span::styled(
                " Opening Email... ",
                Style::default().fg(Color::Black).bg(Color::Yellow),
            )
        } else if focus(FormFocus::Send) {
            Span::styled(
                " Send Message ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" Send Message ", Style::default().fg(Color::Magenta))
        };
        Paragraph::new(Line::from(button).centered()).render(chunks[4], buf);
    }
}

impl Widget for ContactPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        Paragraph::new(self.info_lines())
            .wrap(Wrap { trim: false })
            .render(columns[0], buf);

        // 4: the form enters last
        if !self.reveal(4).is_hidden() {
            self.render_form(columns[1], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(state: &mut ContactState, profile: &ProfileConfig, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)), profile);
        }
    }

    fn filled_state(profile: &ProfileConfig) -> ContactState {
        let mut state = ContactState::new();
        type_str(&mut state, profile, "Ada");
        state.handle_key(key(KeyCode::Tab), profile);
        type_str(&mut state, profile, "ada@example.com");
        state.handle_key(key(KeyCode::Tab), profile);
        state.handle_key(key(KeyCode::Tab), profile); // skip subject
        type_str(&mut state, profile, "Hello");
        state
    }

    #[test]
    fn test_submit_composes_mailto() {
        let profile = ProfileConfig::default();
        let mut state = filled_state(&profile);
        state.handle_key(key(KeyCode::Tab), &profile); // to Send
        assert_eq!(state.focus, FormFocus::Send);

        let action = state.handle_key(key(KeyCode::Enter), &profile);
        match action {
            ContactAction::Submit(uri) => {
                assert!(uri.starts_with("mailto:wacostal@macalester.edu?"));
                assert!(uri.contains("subject=Portfolio%20Contact"));
                assert!(uri.contains("Ada"));
            }
            other => panic!("expected submit, got {:?}", other),
        }
        assert!(state.is_submitting);
    }

    #[test]
    fn test_incomplete_form_does_not_submit() {
        let profile = ProfileConfig::default();
        let mut state = ContactState::new();
        type_str(&mut state, &profile, "Ada");
        let action = state.handle_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &profile,
        );
        assert_eq!(action, ContactAction::None);
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_second_submit_is_ignored_while_pending() {
        let profile = ProfileConfig::default();
        let mut state = filled_state(&profile);
        let first = state.handle_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &profile,
        );
        assert!(matches!(first, ContactAction::Submit(_)));

        let second = state.handle_key(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &profile,
        );
        assert_eq!(second, ContactAction::None);
    }

    #[test]
    fn test_form_clears_after_reset_window() {
        let profile = ProfileConfig::default();
        let mut state = filled_state(&profile);
        let now = Instant::now();
        state.submit(&profile, now);

        // Before the deadline nothing changes
        state.tick(now + Duration::from_millis(500));
        assert!(state.is_submitting);
        assert_eq!(state.name.value(), "Ada");

        state.tick(now + Duration::from_millis(1001));
        assert!(!state.is_submitting);
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.message.lines().join("").is_empty());
        assert_eq!(state.focus, FormFocus::Name);
    }

    #[test]
    fn test_esc_exits_form() {
        let profile = ProfileConfig::default();
        let mut state = ContactState::new();
        assert_eq!(
            state.handle_key(key(KeyCode::Esc), &profile),
            ContactAction::Exit
        );
    }

    #[test]
    fn test_focus_cycle_wraps() {
        let profile = ProfileConfig::default();
        let mut state = ContactState::new();
        for _ in 0..FormFocus::ORDER.len() {
            state.handle_key(key(KeyCode::Tab), &profile);
        }
        assert_eq!(state.focus, FormFocus::Name);
    }
}
