//! Avatar widget: half-block image art, or the initials badge when the
//! image could not be loaded.

use crate::services::AvatarArt;
use ratatui::prelude::*;

pub struct AvatarWidget<'a> {
    art: Option<&'a AvatarArt>,
    initials: &'a str,
}

impl<'a> AvatarWidget<'a> {
    pub fn new(art: Option<&'a AvatarArt>, initials: &'a str) -> Self {
        Self { art, initials }
    }

    /// Rendered height in rows
    pub fn height(&self) -> u16 {
        match self.art {
            Some(art) => art.height(),
            None => 3,
        }
    }
}

impl Widget for AvatarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.art {
            Some(art) => render_art(art, area, buf),
            None => render_initials(self.initials, area, buf),
        }
    }
}

fn render_art(art: &AvatarArt, area: Rect, buf: &mut Buffer) {
    let x0 = area.x + area.width.saturating_sub(art.width()) / 2;
    for (dy, row) in art.rows.iter().enumerate() {
        let y = area.y + dy as u16;
        if y >= area.bottom() {
            break;
        }
        for (dx, (top, bottom)) in row.iter().enumerate() {
            let x = x0 + dx as u16;
            if x >= area.right() {
                break;
            }
            // Upper half block: fg = top pixel, bg = bottom pixel
            buf[(x, y)]
                .set_symbol("▀")
                .set_style(Style::default().fg(*top).bg(*bottom));
        }
    }
}

/// The fallback: a small bordered two-letter badge
fn render_initials(initials: &str, area: Rect, buf: &mut Buffer) {
    let badge = format!("( {} )", initials);
    let x0 = area.x + area.width.saturating_sub(badge.chars().count() as u16) / 2;
    let y = area.y + area.height / 2;
    if y < area.bottom() {
        buf.set_string(
            x0,
            y,
            &badge,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_badge_when_art_missing() {
        let widget = AvatarWidget::new(None, "WA");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let row: String = (0..20)
            .map(|x| buf[(x, 1u16)].symbol().chars().next().unwrap_or(' '))
            .collect();
        assert!(row.contains("( WA )"));
    }

    #[test]
    fn test_art_rendered_as_half_blocks() {
        let art = AvatarArt {
            rows: vec![vec![
                (Color::Rgb(10, 10, 10), Color::Rgb(20, 20, 20));
                4
            ]],
        };
        let widget = AvatarWidget::new(Some(&art), "WA");
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert_eq!(buf[(0u16, 0u16)].symbol(), "▀");
    }
}
