//! One-shot diagnostic latches.

use std::sync::atomic::{AtomicBool, Ordering};

/// A latch that fires exactly once for the lifetime of the parser value that
/// owns it.
///
/// The latch is embedded in the constructed parser rather than kept in any
/// global table, so two structurally identical parsers warn independently
/// while clones of one parser share a single latch. It is not tied to any
/// [`Context`](crate::Context) and is never reset between parse calls.
#[derive(Debug, Default)]
pub(crate) struct WarnOnce(AtomicBool);

impl WarnOnce {
    pub(crate) fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// True on the first call, false on every later one.
    pub(crate) fn first(&self) -> bool {
        !self.0.swap(true, Ordering::Relaxed)
    }
}
