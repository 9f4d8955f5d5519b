//! ImPS/2 wire format parsing.
//!
//! This module is intentionally "dumb": it only turns fixed-width packets read
//! from `/dev/input/mice` into small structs. Higher-level gesture tracking
//! (double-click timing, chord detection) lives in [`gesture`](crate::gesture).
//!
//! ## Packet layout (4 bytes, after the ImPS/2 knock)
//! ```text
//! Byte 0: bit 0 = left button      bit 4 = x sign
//!         bit 1 = right button     bit 5 = y sign
//!         bit 2 = middle button    bit 6 = x overflow
//!         bit 3 = always 1         bit 7 = y overflow
//! Byte 1: X displacement (signed)
//! Byte 2: Y displacement (signed)
//! Byte 3: wheel delta    (signed)
//! ```
//!
//! ## Conventions
//! - Deltas are reported in **raw device counts**, never normalized.
//! - Sign and overflow bits are decoded but not applied: the signed delta
//!   bytes already carry the direction, and overflowed values are passed
//!   through uncorrected (mousedev behavior, kept as-is).

use crate::event::Button;

/// Size of one extended (wheel-capable) packet.
pub const FRAME_LEN: usize = 4;

/// Sample-rate knock (`0xF3 200, 0xF3 100, 0xF3 80`) that switches the device
/// into the 4-byte ImPS/2 format. Written once at open; treated as opaque.
pub const IMPS2_INIT_SEQ: [u8; 6] = [0xF3, 200, 0xF3, 100, 0xF3, 80];

const BTN_LEFT: u8 = 1 << 0;
const BTN_RIGHT: u8 = 1 << 1;
const BTN_MIDDLE: u8 = 1 << 2;
const X_SIGN: u8 = 1 << 4;
const Y_SIGN: u8 = 1 << 5;
const X_OVERFLOW: u8 = 1 << 6;
const Y_OVERFLOW: u8 = 1 << 7;

/// One decoded ImPS/2 packet.
///
/// A plain value struct extracted by mask/shift; no reliance on bit-field
/// struct packing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// Left button currently held.
    pub left: bool,
    /// Right button currently held.
    pub right: bool,
    /// Middle button currently held.
    pub middle: bool,
    /// X delta sign bit as reported (informational, see module docs).
    pub x_sign: bool,
    /// Y delta sign bit as reported (informational).
    pub y_sign: bool,
    /// X delta overflowed the 8-bit counter (value kept uncorrected).
    pub x_overflow: bool,
    /// Y delta overflowed the 8-bit counter (value kept uncorrected).
    pub y_overflow: bool,
    /// Relative X movement (raw counts).
    pub x: i8,
    /// Relative Y movement (raw counts).
    pub y: i8,
    /// Wheel delta (positive = toward the user).
    pub z: i8,
}

/// What a single frame means for gesture tracking.
///
/// Exactly one class is derived per frame. Any motion/wheel activity takes
/// precedence over button bits: the wire format cannot distinguish "button
/// held while moving" from a pure press, so moving frames never count as
/// presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameClass {
    /// Left or right held, no motion, no wheel.
    Button(Button),
    /// Middle held alone, no motion, no wheel.
    Middle,
    /// Nonzero wheel delta (motion-only frames with `z == 0` classify as
    /// [`FrameClass::Ignore`]).
    Wheel(i8),
    /// Nothing of interest: idle frame or pure x/y motion.
    Ignore,
}

impl Frame {
    /// Decode a buffer into a frame.
    ///
    /// Returns `None` unless the buffer is exactly [`FRAME_LEN`] bytes: a
    /// shorter read is a partial packet or a command ACK, never a valid frame.
    pub fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() != FRAME_LEN {
            return None;
        }
        let flags = buf[0];
        Some(Self {
            left: flags & BTN_LEFT != 0,
            right: flags & BTN_RIGHT != 0,
            middle: flags & BTN_MIDDLE != 0,
            x_sign: flags & X_SIGN != 0,
            y_sign: flags & Y_SIGN != 0,
            x_overflow: flags & X_OVERFLOW != 0,
            y_overflow: flags & Y_OVERFLOW != 0,
            x: buf[1] as i8,
            y: buf[2] as i8,
            z: buf[3] as i8,
        })
    }

    /// Classify this frame for the gesture tracker.
    ///
    /// Button bits only count when x, y and z are all zero; among pure-button
    /// frames left wins over right wins over middle.
    pub fn classify(&self) -> FrameClass {
        if self.x == 0 && self.y == 0 && self.z == 0 {
            if self.left {
                FrameClass::Button(Button::Left)
            } else if self.right {
                FrameClass::Button(Button::Right)
            } else if self.middle {
                FrameClass::Middle
            } else {
                FrameClass::Ignore
            }
        } else if self.z != 0 {
            FrameClass::Wheel(self.z)
        } else {
            FrameClass::Ignore
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_anything_but_four_bytes() {
        assert_eq!(Frame::parse(&[]), None);
        assert_eq!(Frame::parse(&[0xFA]), None); // command ACK
        assert_eq!(Frame::parse(&[0x08, 0x00]), None);
        assert_eq!(Frame::parse(&[0x08, 0, 0, 0, 0]), None);
        assert!(Frame::parse(&[0x08, 0, 0, 0]).is_some());
    }

    #[test]
    fn decodes_button_bits() {
        let f = Frame::parse(&[0b0000_1011, 0, 0, 0]).unwrap();
        assert!(f.left && f.right && !f.middle);
        let f = Frame::parse(&[0b0000_1100, 0, 0, 0]).unwrap();
        assert!(!f.left && !f.right && f.middle);
    }

    #[test]
    fn decodes_sign_and_overflow_bits_without_touching_deltas() {
        let f = Frame::parse(&[0b1111_1000, 0xFF, 0x05, 0xFE]).unwrap();
        assert!(f.x_sign && f.y_sign && f.x_overflow && f.y_overflow);
        // Deltas come straight from the signed bytes, uncorrected.
        assert_eq!((f.x, f.y, f.z), (-1, 5, -2));
    }

    #[test]
    fn classify_pure_button_frames() {
        let left = Frame::parse(&[0x09, 0, 0, 0]).unwrap();
        assert_eq!(left.classify(), FrameClass::Button(Button::Left));
        let right = Frame::parse(&[0x0A, 0, 0, 0]).unwrap();
        assert_eq!(right.classify(), FrameClass::Button(Button::Right));
        let middle = Frame::parse(&[0x0C, 0, 0, 0]).unwrap();
        assert_eq!(middle.classify(), FrameClass::Middle);
        let idle = Frame::parse(&[0x08, 0, 0, 0]).unwrap();
        assert_eq!(idle.classify(), FrameClass::Ignore);
    }

    #[test]
    fn left_wins_over_right_in_one_frame() {
        let both = Frame::parse(&[0x0B, 0, 0, 0]).unwrap();
        assert_eq!(both.classify(), FrameClass::Button(Button::Left));
    }

    #[test]
    fn motion_or_wheel_overrides_button_bits() {
        // Left held while the wheel turns: wheel wins for this frame.
        let f = Frame::parse(&[0x09, 0, 0, 0x05]).unwrap();
        assert_eq!(f.classify(), FrameClass::Wheel(5));
        // Left held while moving: neither a press nor a wheel event.
        let f = Frame::parse(&[0x09, 0x02, 0x00, 0x00]).unwrap();
        assert_eq!(f.classify(), FrameClass::Ignore);
    }

    #[test]
    fn negative_wheel_delta() {
        let f = Frame::parse(&[0x08, 0, 0, 0xFD]).unwrap();
        assert_eq!(f.classify(), FrameClass::Wheel(-3));
    }
}
