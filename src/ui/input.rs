//! Keyboard input handling with vim-style navigation support.

use crate::domain::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Standard navigation mode
    #[default]
    Normal,
    /// Editing the contact form
    Insert,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    NextPage,
    PreviousPage,
    GoTo(Route),

    // Selection
    Select,
    Back,

    // Misc
    ToggleMenu,
    Quit,
}

/// Keyboard bindings configuration
pub struct KeyBindings {
    pub vim_navigation: bool,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            vim_navigation: true,
        }
    }
}

/// Input handler for processing keyboard events
pub struct InputHandler {
    bindings: KeyBindings,
}

impl InputHandler {
    /// Create a new input handler
    pub fn new(vim_navigation: bool) -> Self {
        Self {
            bindings: KeyBindings { vim_navigation },
        }
    }

    /// Handle a key event and return the corresponding action
    pub fn handle_key(&self, key: KeyEvent, mode: InputMode) -> Option<Action> {
        match mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Insert => self.handle_insert_key(key),
        }
    }

    /// Handle key in normal mode
    fn handle_normal_key(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Navigation - arrow keys always work
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Left => Some(Action::MoveLeft),
            KeyCode::Right => Some(Action::MoveRight),
            KeyCode::Tab => Some(Action::NextPage),
            KeyCode::BackTab => Some(Action::PreviousPage),

            // Vim-style navigation (j/k/h/l)
            KeyCode::Char('j') if self.bindings.vim_navigation => Some(Action::MoveDown),
            KeyCode::Char('k') if self.bindings.vim_navigation => Some(Action::MoveUp),
            KeyCode::Char('h') if self.bindings.vim_navigation => Some(Action::MoveLeft),
            KeyCode::Char('l') if self.bindings.vim_navigation => Some(Action::MoveRight),

            // Direct route jumps
            KeyCode::Char('1') => Some(Action::GoTo(Route::Home)),
            KeyCode::Char('2') => Some(Action::GoTo(Route::About)),
            KeyCode::Char('3') => Some(Action::GoTo(Route::Experience)),
            KeyCode::Char('4') => Some(Action::GoTo(Route::Projects)),
            KeyCode::Char('5') => Some(Action::GoTo(Route::Contact)),

            // Selection
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Char(' ') => Some(Action::Select),

            // Back/Quit
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),

            // Menu
            KeyCode::Char('m') => Some(Action::ToggleMenu),

            _ => None,
        }
    }

    /// Handle key in insert mode. Esc leaves the form; everything else is
    /// consumed by the form widgets.
    fn handle_insert_key(&self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Esc {
            return Some(Action::Back);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_navigation() {
        let handler = InputHandler::new(true);

        let key_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_j, InputMode::Normal),
            Some(Action::MoveDown)
        );

        let key_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_k, InputMode::Normal),
            Some(Action::MoveUp)
        );
    }

    #[test]
    fn test_vim_disabled_leaves_letters_unbound() {
        let handler = InputHandler::new(false);

        let key_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_j, InputMode::Normal), None);

        let key_down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_down, InputMode::Normal),
            Some(Action::MoveDown)
        );
    }

    #[test]
    fn test_route_jumps() {
        let handler = InputHandler::new(true);

        let key_1 = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_1, InputMode::Normal),
            Some(Action::GoTo(Route::Home))
        );

        let key_5 = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_5, InputMode::Normal),
            Some(Action::GoTo(Route::Contact))
        );
    }

    #[test]
    fn test_insert_mode_passes_text_keys_through() {
        let handler = InputHandler::new(true);

        let key_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key(key_q, InputMode::Insert), None);

        let key_esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key(key_esc, InputMode::Insert),
            Some(Action::Back)
        );
    }
}
