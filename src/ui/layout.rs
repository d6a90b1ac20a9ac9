//! Main layout rendering for the TUI.

use crate::app::App;
use crate::domain::Route;
use crate::ui::input::InputMode;
use crate::ui::pages::about::AboutPage;
use crate::ui::pages::contact::ContactPage;
use crate::ui::pages::experience::ExperiencePage;
use crate::ui::pages::home::HomePage;
use crate::ui::pages::projects::ProjectsPage;
use crate::ui::widgets::backdrop::BackdropWidget;
use crate::ui::widgets::navbar::{MenuOverlay, NavBarWidget};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Draw the main application UI
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Create layout: nav bar, page body, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Nav bar
            Constraint::Min(0),    // Page body
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let navbar = NavBarWidget::new(&app.config.profile.name, app.route.path());
    frame.render_widget(navbar, chunks[0]);

    // Ambient backdrop under the page content
    frame.render_widget(
        BackdropWidget::new(app.uptime(), app.config.ui.reduced_motion),
        chunks[1],
    );

    draw_page(frame, app, chunks[1]);

    // Footer with keybindings
    let footer_text = footer_hint(app);
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    // Draw the collapsible menu above everything when open
    if app.nav.menu_open {
        let popup_area = centered_rect(30, 40, area);
        let overlay = MenuOverlay::new(&app.nav, app.route.path());
        frame.render_widget(overlay, popup_area);
    }
}

/// Draw the page for the active route
fn draw_page(frame: &mut Frame, app: &App, area: Rect) {
    let elapsed = app.elapsed();
    let reduced = app.config.ui.reduced_motion;

    match app.route {
        Route::Home => frame.render_widget(
            HomePage::new(
                &app.config.profile,
                app.avatar.as_ref(),
                elapsed,
                reduced,
                app.scroll,
            ),
            area,
        ),
        Route::About => frame.render_widget(AboutPage::new(elapsed, reduced, app.scroll), area),
        Route::Experience => {
            frame.render_widget(ExperiencePage::new(elapsed, reduced, app.scroll), area)
        }
        Route::Projects => frame.render_widget(
            ProjectsPage::new(&app.projects, elapsed, reduced, app.scroll),
            area,
        ),
        Route::Contact => frame.render_widget(
            ContactPage::new(
                &app.contact,
                &app.config.profile,
                elapsed,
                reduced,
                app.input_mode == InputMode::Insert,
            ),
            area,
        ),
    }
}

/// Context-sensitive footer hint
fn footer_hint(app: &App) -> &'static str {
    if app.nav.menu_open {
        return " j/k: Navigate | Enter: Go | m/Esc: Close ";
    }
    match app.input_mode {
        InputMode::Insert => " Tab: Next field | Ctrl+S: Send | Esc: Done ",
        InputMode::Normal => match app.route {
            Route::Projects => {
                " h/l: Filter | j/k: Scroll | Tab: Next page | 1-5: Jump | m: Menu | q: Quit "
            }
            Route::Contact => {
                " Enter: Edit form | Tab: Next page | 1-5: Jump | m: Menu | q: Quit "
            }
            _ => " j/k: Scroll | Tab: Next page | 1-5: Jump | m: Menu | q: Quit ",
        },
    }
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert!(inner.x > 0);
        assert!(inner.right() <= outer.right());
        assert!(inner.bottom() <= outer.bottom());
    }
}
