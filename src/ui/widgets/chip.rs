//! Chip spans: small labelled pills used across every page.

use ratatui::prelude::*;

/// Visual tone of a chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Blue,
    Purple,
}

impl Tone {
    fn color(&self) -> Color {
        match self {
            Tone::Neutral => Color::Gray,
            Tone::Positive => Color::Green,
            Tone::Blue => Color::Blue,
            Tone::Purple => Color::Magenta,
        }
    }
}

/// Build a chip span: `[ label ]` in the tone's color
pub fn chip(label: &str, tone: Tone) -> Span<'static> {
    Span::styled(format!("[{}]", label), Style::default().fg(tone.color()))
}

/// Join labels into a chip row with single-space separators
pub fn chip_row<'a>(labels: impl IntoIterator<Item = (&'a str, Tone)>) -> Line<'static> {
    let mut spans = Vec::new();
    for (label, tone) in labels {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(chip(label, tone));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_format() {
        let span = chip("Current", Tone::Positive);
        assert_eq!(span.content, "[Current]");
        assert_eq!(span.style.fg, Some(Color::Green));
    }

    #[test]
    fn test_chip_row_separators() {
        let line = chip_row([("a", Tone::Neutral), ("b", Tone::Blue)]);
        // chip, space, chip
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, " ");
    }
}
