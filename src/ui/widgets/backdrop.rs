//! Decorative dot-grid backdrop with slowly drifting accent phase.
//!
//! The drift is ambient looping motion: under reduced motion the grid
//! stays, the drift stops.

use ratatui::prelude::*;
use std::time::Duration;

/// Length of one drift cycle
const DRIFT_PERIOD: Duration = Duration::from_secs(18);

pub struct BackdropWidget {
    elapsed: Duration,
    reduced_motion: bool,
}

impl BackdropWidget {
    pub fn new(elapsed: Duration, reduced_motion: bool) -> Self {
        Self {
            elapsed,
            reduced_motion,
        }
    }

    /// Current phase offset in columns
    fn phase(&self) -> u16 {
        if self.reduced_motion {
            return 0;
        }
        let cycle = self.elapsed.as_secs_f32() / DRIFT_PERIOD.as_secs_f32();
        // Triangle wave, 0..=3, reversing each half cycle
        let t = (cycle.fract() * 2.0 - 1.0).abs();
        (t * 4.0) as u16 % 4
    }
}

impl Widget for BackdropWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phase = self.phase();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                // Dots every 4th column, offset every other row
                let offset = if (y - area.top()) % 4 < 2 { 0 } else { 2 };
                if (x - area.left() + phase + offset) % 4 == 0 && (y - area.top()) % 2 == 0 {
                    buf[(x, y)]
                        .set_symbol("·")
                        .set_style(Style::default().fg(Color::Indexed(237)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_freezes_phase() {
        let early = BackdropWidget::new(Duration::from_secs(1), true);
        let late = BackdropWidget::new(Duration::from_secs(13), true);
        assert_eq!(early.phase(), 0);
        assert_eq!(late.phase(), 0);
    }

    #[test]
    fn test_drift_moves_phase() {
        let a = BackdropWidget::new(Duration::ZERO, false);
        let b = BackdropWidget::new(Duration::from_secs(5), false);
        assert_ne!(a.phase(), b.phase());
    }

    #[test]
    fn test_renders_dots() {
        let widget = BackdropWidget::new(Duration::ZERO, true);
        let area = Rect::new(0, 0, 16, 4);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let dots = (0..16)
            .filter(|&x| buf[(x, 0u16)].symbol() == "·")
            .count();
        assert!(dots > 0);
    }
}
