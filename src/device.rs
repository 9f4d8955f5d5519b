//! `/dev/input/mice` device wrapper.
//!
//! [`MiceDevice`] owns the character-device handle and is responsible for:
//! - opening it read/write in non-blocking mode
//! - sending the ImPS/2 sample-rate knock once, so packets widen to 4 bytes
//! - waiting for readability with a bounded timeout (`poll(2)`)
//! - draining a bounded number of frames per poll cycle
//!
//! This module does **not**:
//! - track gesture state (that is [`GestureTracker`](crate::gesture::GestureTracker)'s job)
//! - interpret frames beyond fixed-width parsing
//! - discover devices or manage permissions
//!
//! The host loop owns the cadence: `wait_readable(POLL_TIMEOUT)`, drain if
//! readable, then tick the tracker either way.

#![cfg(unix)]

use crate::error::MiceError;
use crate::protocol::{Frame, FRAME_LEN, IMPS2_INIT_SEQ};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;
use std::time::Duration;

/// Default mousedev multiplexer node.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/input/mice";

/// Multiplexing timeout for one poll cycle. Short enough that the 300 ms
/// double-click window resolves promptly even when the device is silent.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(20);

/// Safety valve: maximum number of frames drained per `drain()` call.
///
/// Prevents a device producing data faster than the host polls from starving
/// the tick path that resolves pending gestures.
const MAX_FRAMES_PER_DRAIN: usize = 64;

/// Non-blocking handle on the mouse byte stream.
pub struct MiceDevice {
    file: File,
    path: String,
}

impl MiceDevice {
    /// Open the device node and switch it into the extended packet format.
    ///
    /// The knock's effect is not verified; the device is assumed to deliver
    /// 4-byte frames from here on (its ACK bytes surface later as short reads
    /// and are discarded by [`drain`](Self::drain)).
    pub fn open(path: &str) -> Result<Self, MiceError> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|source| MiceError::Open {
                path: path.to_string(),
                source,
            })?;

        file.write_all(&IMPS2_INIT_SEQ).map_err(MiceError::Init)?;

        Ok(Self {
            file,
            path: path.to_string(),
        })
    }

    /// Path this device was opened from.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Block until the fd is readable or `timeout` elapses.
    ///
    /// Returns `Ok(true)` when there is data to drain. A timeout is the
    /// normal quiet-mouse case, not an error.
    pub fn wait_readable(&self, timeout: Duration) -> Result<bool, MiceError> {
        let mut pfd = libc::pollfd {
            fd: self.file.as_raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        };
        let timeout_ms = timeout.as_millis().min(i32::MAX as u128) as libc::c_int;
        let rc = unsafe { libc::poll(&mut pfd, 1, timeout_ms) };
        if rc < 0 {
            return Err(MiceError::Wait(io::Error::last_os_error()));
        }
        Ok(rc > 0 && pfd.revents & libc::POLLIN != 0)
    }

    /// Drain whatever the device has buffered, one fixed-width read at a time.
    ///
    /// Stops on `EWOULDBLOCK` (buffer empty) or at [`MAX_FRAMES_PER_DRAIN`].
    /// Reads of any length other than [`FRAME_LEN`] — partial packets and the
    /// 1-byte command ACKs — are discarded without producing a frame.
    /// End-of-file is fatal: the multiplexer never closes a live stream.
    pub fn drain(&mut self) -> Result<Vec<Frame>, MiceError> {
        let mut frames = Vec::new();
        let mut buf = [0u8; FRAME_LEN];

        while frames.len() < MAX_FRAMES_PER_DRAIN {
            match self.file.read(&mut buf) {
                Ok(0) => return Err(MiceError::StreamEnded),
                Ok(n) => {
                    #[cfg(feature = "debug-log")]
                    eprintln!("[MICE/READ] {} byte(s): {:02x?}", n, &buf[..n]);

                    if let Some(frame) = Frame::parse(&buf[..n]) {
                        frames.push(frame);
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(MiceError::Read(e)),
            }
        }

        Ok(frames)
    }
}
