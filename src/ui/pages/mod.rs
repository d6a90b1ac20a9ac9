//! Page views: one module per route.
//!
//! Pages build their content as styled lines and apply the entrance
//! reveal per section: a hidden section keeps its space (blank lines), an
//! entering section slides up through its reserved space while dimmed, a
//! shown section renders as-is. Flow never shifts while sections enter.

pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;

pub use contact::{ContactAction, ContactState};
pub use projects::ProjectsState;

use crate::motion::Reveal;
use ratatui::prelude::*;

/// Append one section's lines under the given reveal state
pub(crate) fn push_section(
    out: &mut Vec<Line<'static>>,
    reveal: Reveal,
    lines: Vec<Line<'static>>,
) {
    let len = lines.len();
    if reveal.is_hidden() {
        out.extend(std::iter::repeat_with(Line::default).take(len));
        return;
    }

    let rise = (reveal.rise as usize).min(len);
    out.extend(std::iter::repeat_with(Line::default).take(rise));

    let entering = !reveal.is_shown();
    for line in lines.into_iter().take(len - rise) {
        if entering {
            out.push(dim_line(line));
        } else {
            out.push(line);
        }
    }
}

/// Dim every span of a line (the fade half of fade + rise)
pub(crate) fn dim_line(line: Line<'static>) -> Line<'static> {
    let spans = line
        .spans
        .into_iter()
        .map(|span| {
            let style = span.style.add_modifier(Modifier::DIM);
            Span::styled(span.content, style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Page title line
pub(crate) fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
    .centered()
}

/// Muted supporting line
pub(crate) fn subtle(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Gray),
    ))
    .centered()
}

/// Section sub-heading
pub(crate) fn section_title(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Bulleted body line
pub(crate) fn bullet(text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(Color::DarkGray)),
        Span::raw(text.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Reveal;

    fn three_lines() -> Vec<Line<'static>> {
        vec![
            Line::from("a"),
            Line::from("b"),
            Line::from("c"),
        ]
    }

    #[test]
    fn test_hidden_section_reserves_space() {
        let mut out = Vec::new();
        push_section(&mut out, Reveal::HIDDEN, three_lines());
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|l| l.spans.is_empty()));
    }

    #[test]
    fn test_shown_section_is_verbatim() {
        let mut out = Vec::new();
        push_section(&mut out, Reveal::SHOWN, three_lines());
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].spans[0].content, "a");
    }

    #[test]
    fn test_entering_section_keeps_flow_height() {
        let mut out = Vec::new();
        let entering = Reveal {
            opacity: 0.5,
            rise: 1,
        };
        push_section(&mut out, entering, three_lines());
        // 1 blank + 2 dimmed lines: flow height unchanged
        assert_eq!(out.len(), 3);
        assert!(out[0].spans.is_empty());
        assert!(out[1].spans[0].style.add_modifier.contains(Modifier::DIM));
    }
}
