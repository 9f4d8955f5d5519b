//! Polling loop: reads `/dev/input/mice`, routes frames through the gesture
//! tracker, prints one token per gesture.
//!
//! Exit status: 0 after the chord gesture (`q`), 1 on any device error.

use micetap::device::{MiceDevice, DEFAULT_DEVICE_PATH, POLL_TIMEOUT};
use micetap::error::MiceError;
use micetap::event::Gesture;
use micetap::gesture::GestureTracker;
use micetap::protocol::FrameClass;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DEVICE_PATH.to_string());

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("micetap: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), MiceError> {
    let mut device = MiceDevice::open(path)?;
    let mut tracker = GestureTracker::new();
    let mut out = io::stdout();

    loop {
        if device.wait_readable(POLL_TIMEOUT)? {
            for frame in device.drain()? {
                let now = Instant::now();
                let gesture = match frame.classify() {
                    FrameClass::Button(button) => tracker.on_button(button, now),
                    FrameClass::Middle => Some(tracker.on_middle()),
                    FrameClass::Wheel(delta) => tracker.on_wheel(delta),
                    FrameClass::Ignore => None,
                };
                if let Some(g) = gesture {
                    emit(&mut out, g);
                    if g.is_terminal() {
                        return Ok(());
                    }
                }
            }
        }

        // Tick on every cycle, data or not: this is what turns a lone armed
        // press into a single click once the 300 ms window elapses.
        if let Some(g) = tracker.tick(Instant::now()) {
            emit(&mut out, g);
        }
    }
}

/// One token per line, flushed immediately so the consumer sees it now.
fn emit(out: &mut io::Stdout, gesture: Gesture) {
    // A broken stdout means the consumer is gone; nothing useful left to do.
    let _ = writeln!(out, "{gesture}");
    let _ = out.flush();
}
