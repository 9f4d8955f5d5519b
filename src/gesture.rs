//! Double-click / chord gesture tracking.
//!
//! The wire protocol only carries instantaneous button state, so gesture
//! semantics have to be reconstructed here: a press is *armed* and held back
//! until either the 300 ms window expires (single click), the same button
//! arrives again (double click), or the opposite button arrives (chord, the
//! exit gesture).
//!
//! [`GestureTracker`] is the only stateful, time-sensitive piece of the crate.
//! It never reads the clock itself: every operation takes `now` explicitly,
//! which keeps the host loop in charge of time and the tests deterministic.
//!
//! ## Call contract (per poll cycle)
//! - [`on_button`](GestureTracker::on_button) once per frame that classifies
//!   as a pure left/right press.
//! - [`on_middle`](GestureTracker::on_middle) / [`on_wheel`](GestureTracker::on_wheel)
//!   for the other frame classes.
//! - [`tick`](GestureTracker::tick) once per poll cycle, data or not — the
//!   timeout resolves on ticks, never on reads.

use crate::event::{Button, Gesture};
use std::time::{Duration, Instant};

/// How long an armed press waits for its second half before it resolves to a
/// single click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Single-instance press tracker.
///
/// Owns one pending-gesture slot: the armed button and the instant it was
/// armed. Created empty; cleared every time a gesture resolves. Pass it by
/// `&mut` into the polling loop — there is no global instance.
#[derive(Debug, Default)]
pub struct GestureTracker {
    armed: Option<(Button, Instant)>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A left or right press observed at `now`.
    ///
    /// First press arms and emits nothing. A second press within the window
    /// resolves: same button → double click, opposite button → [`Gesture::Chord`]
    /// (terminal — the caller must stop polling and exit successfully).
    pub fn on_button(&mut self, button: Button, now: Instant) -> Option<Gesture> {
        match self.armed.take() {
            None => {
                self.armed = Some((button, now));
                None
            }
            Some((pending, _)) if pending != button => Some(Gesture::Chord),
            Some(_) => Some(Gesture::DoubleClick(button)),
        }
    }

    /// A middle press observed. Stateless: emits on every qualifying frame
    /// and never touches the armed slot.
    pub fn on_middle(&mut self) -> Gesture {
        Gesture::MiddleClick
    }

    /// A nonzero wheel delta observed. Positive spins scroll down, negative
    /// scroll up; zero is not an event.
    pub fn on_wheel(&mut self, delta: i8) -> Option<Gesture> {
        match delta {
            d if d > 0 => Some(Gesture::ScrollDown),
            d if d < 0 => Some(Gesture::ScrollUp),
            _ => None,
        }
    }

    /// Time tick, called every poll cycle whether or not data arrived.
    ///
    /// Resolves an armed press to a single click once the window has elapsed
    /// since arming (not since the last tick). No-op when idle, any number of
    /// times.
    pub fn tick(&mut self, now: Instant) -> Option<Gesture> {
        match self.armed {
            Some((button, armed_at)) if now.duration_since(armed_at) >= DOUBLE_CLICK_WINDOW => {
                self.armed = None;
                Some(Gesture::Click(button))
            }
            _ => None,
        }
    }

    /// Whether a press is currently awaiting resolution.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn lone_press_resolves_to_single_click_at_window() {
        for button in [Button::Left, Button::Right] {
            let mut tracker = GestureTracker::new();
            let t0 = Instant::now();
            assert_eq!(tracker.on_button(button, t0), None);
            assert_eq!(tracker.tick(t0 + ms(300)), Some(Gesture::Click(button)));
            assert!(!tracker.is_armed());
        }
    }

    #[test]
    fn second_press_within_window_is_a_double_click() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        assert_eq!(tracker.on_button(Button::Left, t0), None);
        assert_eq!(
            tracker.on_button(Button::Left, t0 + ms(120)),
            Some(Gesture::DoubleClick(Button::Left))
        );
        // Resolved: a later tick must not also produce a single click.
        assert_eq!(tracker.tick(t0 + ms(400)), None);
    }

    #[test]
    fn opposite_press_within_window_is_the_chord() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        assert_eq!(tracker.on_button(Button::Left, t0), None);
        let out = tracker.on_button(Button::Right, t0 + ms(50)).unwrap();
        assert_eq!(out, Gesture::Chord);
        assert!(out.is_terminal());
        assert!(!tracker.is_armed());
        assert_eq!(tracker.tick(t0 + ms(400)), None);
    }

    #[test]
    fn timeout_is_measured_from_arming_not_from_last_tick() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        tracker.on_button(Button::Left, t0);
        assert_eq!(tracker.tick(t0 + ms(150)), None);
        assert_eq!(tracker.tick(t0 + ms(350)), Some(Gesture::Click(Button::Left)));
    }

    #[test]
    fn idle_ticks_are_a_no_op_forever() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        for i in 0..50 {
            assert_eq!(tracker.tick(t0 + ms(i * 20)), None);
        }
    }

    #[test]
    fn press_after_timeout_starts_a_fresh_window() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        tracker.on_button(Button::Right, t0);
        assert_eq!(tracker.tick(t0 + ms(300)), Some(Gesture::Click(Button::Right)));
        // The next press arms again rather than double-clicking.
        assert_eq!(tracker.on_button(Button::Right, t0 + ms(320)), None);
        assert!(tracker.is_armed());
    }

    #[test]
    fn wheel_sign_picks_the_scroll_direction() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.on_wheel(5), Some(Gesture::ScrollDown));
        assert_eq!(tracker.on_wheel(-3), Some(Gesture::ScrollUp));
        assert_eq!(tracker.on_wheel(0), None);
    }

    #[test]
    fn wheel_and_middle_leave_an_armed_press_alone() {
        let mut tracker = GestureTracker::new();
        let t0 = Instant::now();
        tracker.on_button(Button::Left, t0);
        assert_eq!(tracker.on_wheel(1), Some(Gesture::ScrollDown));
        assert_eq!(tracker.on_middle(), Gesture::MiddleClick);
        assert!(tracker.is_armed());
        assert_eq!(tracker.tick(t0 + ms(300)), Some(Gesture::Click(Button::Left)));
    }
}
