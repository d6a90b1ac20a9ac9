//! Navigation bar and its collapsible menu overlay.

use crate::domain::{nav_items, Route};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Collapsible-menu state. `menu_open` starts closed; toggling twice
/// restores the original value.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub menu_open: bool,
    /// Cursor inside the open menu
    pub menu_selected: usize,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu. No side effects beyond the UI.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_selected = 0;
        }
    }

    /// Close without navigating (the click-outside analog)
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn select_previous(&mut self) {
        if self.menu_selected > 0 {
            self.menu_selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.menu_selected < nav_items().len().saturating_sub(1) {
            self.menu_selected += 1;
        }
    }

    /// Route under the menu cursor
    pub fn selected_route(&self) -> Route {
        nav_items()
            .get(self.menu_selected)
            .map(|item| item.route)
            .unwrap_or_default()
    }
}

/// The persistent top bar: brand on the left, route links with the
/// active-route highlight on the right.
pub struct NavBarWidget<'a> {
    brand: &'a str,
    current_path: &'a str,
}

impl<'a> NavBarWidget<'a> {
    pub fn new(brand: &'a str, current_path: &'a str) -> Self {
        Self {
            brand,
            current_path,
        }
    }
}

impl Widget for NavBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let mut spans: Vec<Span> = vec![
            Span::styled(
                format!(" {} ", self.brand),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        for item in nav_items() {
            let active = item.is_active(self.current_path);
            let style = if active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Indexed(104))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(
                format!(" {} {} ", item.icon, item.label),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

/// The collapsible menu overlay, drawn above the page when open
pub struct MenuOverlay<'a> {
    state: &'a NavState,
    current_path: &'a str,
}

impl<'a> MenuOverlay<'a> {
    pub fn new(state: &'a NavState, current_path: &'a str) -> Self {
        Self {
            state,
            current_path,
        }
    }
}

impl Widget for MenuOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let items: Vec<ListItem> = nav_items()
            .iter()
            .map(|item| {
                let active = item.is_active(self.current_path);
                let marker = if active { "●" } else { " " };
                let style = if active {
                    Style::default()
                        .fg(Color::Indexed(104))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(format!(" {} {} {} ", marker, item.icon, item.label)).style(style)
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(self.state.menu_selected));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Menu "),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_pair_is_idempotent() {
        let mut state = NavState::new();
        assert!(!state.menu_open);
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_menu_cursor_bounds() {
        let mut state = NavState::new();
        state.select_previous();
        assert_eq!(state.menu_selected, 0);
        for _ in 0..20 {
            state.select_next();
        }
        assert_eq!(state.menu_selected, nav_items().len() - 1);
    }

    #[test]
    fn test_selected_route_follows_cursor() {
        let mut state = NavState::new();
        assert_eq!(state.selected_route(), Route::Home);
        state.select_next();
        assert_eq!(state.selected_route(), Route::About);
    }

    #[test]
    fn test_navbar_renders_active_highlight() {
        let widget = NavBarWidget::new("William Acosta", "/projects");
        let area = Rect::new(0, 0, 80, 2);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().chars().next().unwrap_or(' '))
            .collect();
        assert!(row.contains("Projects"));
        assert!(row.contains("William Acosta"));
    }
}
