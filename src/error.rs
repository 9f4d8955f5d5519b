//! Error type for the device boundary.
//!
//! Decoding and gesture tracking are total over well-formed input and never
//! fail; everything that can go wrong lives at the `/dev/input/mice` edge,
//! and all of it is fatal to the polling loop. Short reads are *not* errors:
//! the drain path discards them silently (command ACKs arrive as 1-byte
//! reads).

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MiceError {
    /// Could not open the device node (missing, or no read/write permission).
    #[error("failed to open {path}: {source}")]
    Open { path: String, source: io::Error },

    /// Writing the ImPS/2 sample-rate knock failed; without it the device
    /// stays in the 3-byte format and wheel events never arrive.
    #[error("failed to send ImPS/2 init sequence: {0}")]
    Init(#[source] io::Error),

    /// `poll(2)` on the device fd failed.
    #[error("wait on device failed: {0}")]
    Wait(#[source] io::Error),

    /// A read returned an error other than `EWOULDBLOCK`.
    #[error("device read failed: {0}")]
    Read(#[source] io::Error),

    /// The device stream reported end-of-file.
    #[error("device stream ended")]
    StreamEnded,
}
