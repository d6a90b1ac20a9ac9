//! Entrance animation sequencing.
//!
//! Pages reveal their sections with a per-index stagger over a common
//! fade + rise transition. Everything here is a pure function of the
//! element index, the elapsed time since page mount, and the
//! reduced-motion flag; there is no animation state to manage. When
//! reduced motion is requested every delay collapses to zero and ambient
//! backdrop drift is suppressed, so the page degrades to instant-show.

use std::time::Duration;

/// Per-index entrance offset
pub const STAGGER_STEP: Duration = Duration::from_millis(80);

/// Base transition length (fade + vertical rise)
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(350);

/// Rows an element rises through while entering
pub const RISE_ROWS: u16 = 2;

/// Two-state animation descriptor for one element: hidden until `delay`
/// has elapsed, then shown over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    pub delay: Duration,
    pub duration: Duration,
}

/// Entrance descriptor for the element at `index`.
///
/// Monotonic stagger: `delay_for(i + 1) >= delay_for(i)`. Under reduced
/// motion the delay is zero for every index.
pub fn delay_for(index: usize, reduced_motion: bool) -> Entrance {
    let delay = if reduced_motion {
        Duration::ZERO
    } else {
        STAGGER_STEP.saturating_mul(index as u32)
    };
    Entrance {
        delay,
        duration: ENTRANCE_DURATION,
    }
}

/// Instantaneous render state of an entering element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    /// 0.0 = hidden, 1.0 = fully shown
    pub opacity: f32,
    /// Rows the element still sits below its final position
    pub rise: u16,
}

impl Reveal {
    pub const HIDDEN: Reveal = Reveal {
        opacity: 0.0,
        rise: RISE_ROWS,
    };
    pub const SHOWN: Reveal = Reveal {
        opacity: 1.0,
        rise: 0,
    };

    pub fn is_hidden(&self) -> bool {
        self.opacity <= f32::EPSILON
    }

    pub fn is_shown(&self) -> bool {
        self.opacity >= 1.0
    }
}

/// Ease-out curve: fast start, settled finish
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Render state of element `index` after `elapsed` time on the page.
///
/// Under reduced motion every element is fully shown immediately.
pub fn reveal_at(elapsed: Duration, index: usize, reduced_motion: bool) -> Reveal {
    if reduced_motion {
        return Reveal::SHOWN;
    }
    let entrance = delay_for(index, reduced_motion);
    if elapsed < entrance.delay {
        return Reveal::HIDDEN;
    }
    let into = elapsed - entrance.delay;
    if into >= entrance.duration {
        return Reveal::SHOWN;
    }
    let t = into.as_secs_f32() / entrance.duration.as_secs_f32();
    let eased = ease_out(t);
    Reveal {
        opacity: eased,
        rise: ((1.0 - eased) * RISE_ROWS as f32).round() as u16,
    }
}

/// True once every one of `count` elements has finished entering. Lets the
/// event loop drop back to its idle tick rate after a page settles.
pub fn settled(elapsed: Duration, count: usize, reduced_motion: bool) -> bool {
    if reduced_motion || count == 0 {
        return true;
    }
    let last = delay_for(count - 1, reduced_motion);
    elapsed >= last.delay + last.duration
}
