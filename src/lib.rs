//! micetap — mouse gesture tokenizer for `/dev/input/mice`.
//!
//! Decodes the raw ImPS/2 byte stream into discrete gestures (click,
//! double-click, scroll, left/right chord) and prints each as a
//! single-character token for a downstream consumer.

pub mod device;
pub mod error;
pub mod event;
pub mod gesture;
pub mod protocol;

pub use error::*;
pub use event::*;
pub use gesture::*;
pub use protocol::*;
