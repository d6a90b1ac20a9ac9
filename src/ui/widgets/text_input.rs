//! Single-line text input used by the contact form fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

/// Bordered single-line input field
pub struct TextInputWidget<'a> {
    /// Current input value
    value: &'a str,
    /// Cursor position (character index)
    cursor: usize,
    /// Placeholder text when empty
    placeholder: &'a str,
    /// Field label shown as the border title
    title: &'a str,
    /// Whether this field currently has focus
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(state: &'a TextInputState) -> Self {
        Self {
            value: &state.value,
            cursor: state.cursor,
            placeholder: "",
            title: "",
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.value.is_empty() {
            if self.focused {
                buf.set_string(
                    inner.x,
                    inner.y,
                    " ",
                    Style::default().fg(Color::Black).bg(Color::White),
                );
            }
            if !self.placeholder.is_empty() {
                let x = if self.focused { inner.x + 1 } else { inner.x };
                buf.set_string(x, inner.y, self.placeholder, Style::default().fg(Color::DarkGray));
            }
            return;
        }

        if !self.focused {
            buf.set_string(inner.x, inner.y, self.value, Style::default());
            return;
        }

        // Focused: render value with a block cursor at the cursor index
        let before: String = self.value.chars().take(self.cursor).collect();
        let at: String = self.value.chars().skip(self.cursor).take(1).collect();
        let after: String = self.value.chars().skip(self.cursor + 1).collect();

        let mut x = inner.x;
        buf.set_string(x, inner.y, &before, Style::default());
        x += before.chars().count() as u16;

        let cursor_char = if at.is_empty() { " " } else { at.as_str() };
        buf.set_string(
            x,
            inner.y,
            cursor_char,
            Style::default().fg(Color::Black).bg(Color::White),
        );
        x += 1;

        buf.set_string(x, inner.y, &after, Style::default());
    }
}

/// State for a single-line text input
#[derive(Debug, Default, Clone)]
pub struct TextInputState {
    /// Current value
    pub value: String,
    /// Cursor position (character index)
    pub cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> TextInputAction {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return TextInputAction::None;
                }
                let byte_idx = self
                    .value
                    .char_indices()
                    .nth(self.cursor)
                    .map_or(self.value.len(), |(i, _)| i);
                self.value.insert(byte_idx, c);
                self.cursor += 1;
                TextInputAction::Changed
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    if let Some((i, _)) = self.value.char_indices().nth(self.cursor) {
                        self.value.remove(i);
                    }
                    TextInputAction::Changed
                } else {
                    TextInputAction::None
                }
            }
            KeyCode::Delete => {
                if let Some((i, _)) = self.value.char_indices().nth(self.cursor) {
                    self.value.remove(i);
                    TextInputAction::Changed
                } else {
                    TextInputAction::None
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TextInputAction::None
            }
            KeyCode::Right => {
                if self.cursor < self.value.chars().count() {
                    self.cursor += 1;
                }
                TextInputAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                TextInputAction::None
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                TextInputAction::None
            }
            KeyCode::Enter => TextInputAction::Submit,
            KeyCode::Esc => TextInputAction::Cancel,
            _ => TextInputAction::None,
        }
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Actions that can result from text input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputAction {
    None,
    Changed,
    Submit,
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut state = TextInputState::new();
        assert!(state.is_empty());

        state.handle_key(key(KeyCode::Char('h')));
        state.handle_key(key(KeyCode::Char('i')));
        assert_eq!(state.value(), "hi");
        assert_eq!(state.cursor, 2);

        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.value(), "h");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = TextInputState::new();
        for c in "hello".chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }

        state.handle_key(key(KeyCode::Home));
        assert_eq!(state.cursor, 0);

        state.handle_key(key(KeyCode::End));
        assert_eq!(state.cursor, 5);

        state.handle_key(key(KeyCode::Left));
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = TextInputState::new();
        state.handle_key(key(KeyCode::Char('é')));
        state.handle_key(key(KeyCode::Char('x')));
        assert_eq!(state.value(), "éx");

        state.handle_key(key(KeyCode::Home));
        state.handle_key(key(KeyCode::Delete));
        assert_eq!(state.value(), "x");
    }

    #[test]
    fn test_submit_and_cancel() {
        let mut state = TextInputState::new();
        assert_eq!(state.handle_key(key(KeyCode::Enter)), TextInputAction::Submit);
        assert_eq!(state.handle_key(key(KeyCode::Esc)), TextInputAction::Cancel);
    }
}
