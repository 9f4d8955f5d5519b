//! Semantic gestures and their output tokens.
//!
//! micetap represents resolved input as small, device-agnostic gestures
//! ([`Gesture`]) and prints each one as a single-character token, one per
//! line, flushed immediately.
//!
//! ## Token table
//! | Token | Meaning |
//! |-------|---------|
//! | `z`   | double-click left |
//! | `x`   | double-click right |
//! | `<`   | single click left (after timeout) |
//! | `>`   | single click right (after timeout) |
//! | `p`   | middle click |
//! | `9`   | scroll down |
//! | `0`   | scroll up |
//! | `q`   | left/right chord — consumer should treat the stream as ended |

use std::fmt;

/// A chord-capable mouse button.
///
/// The middle button never participates in arming or chords, so it is not
/// represented here; see [`Gesture::MiddleClick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}

/// A resolved gesture, ready to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Two same-button presses within the double-click window.
    DoubleClick(Button),
    /// One press left unresolved past the double-click window.
    Click(Button),
    /// Middle button pressed (emitted on every qualifying frame).
    MiddleClick,
    /// Wheel turned toward the user.
    ScrollDown,
    /// Wheel turned away from the user.
    ScrollUp,
    /// Opposite buttons pressed within the window: the exit gesture.
    Chord,
}

impl Gesture {
    /// The single-character token written to the output stream.
    pub fn token(&self) -> char {
        match self {
            Gesture::DoubleClick(Button::Left) => 'z',
            Gesture::DoubleClick(Button::Right) => 'x',
            Gesture::Click(Button::Left) => '<',
            Gesture::Click(Button::Right) => '>',
            Gesture::MiddleClick => 'p',
            Gesture::ScrollDown => '9',
            Gesture::ScrollUp => '0',
            Gesture::Chord => 'q',
        }
    }

    /// `true` only for [`Gesture::Chord`]: the caller must stop polling and
    /// exit with success after printing the token.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Gesture::Chord)
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
