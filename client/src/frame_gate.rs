//! Coalesces frame requests into at most one pending animation frame.
//!
//! The controller raises [`FrameGate::request`] from inside its calls; the
//! host then asks [`FrameGate::try_schedule`] whether to call
//! `requestAnimationFrame`. While a frame is pending, further requests ride
//! on it: the pending frame advances every run, and the runs still active
//! request again from inside that frame.

#[cfg(test)]
#[path = "frame_gate_test.rs"]
mod frame_gate_test;

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct FrameGate {
    requested: Cell<bool>,
    pending: Cell<bool>,
}

impl FrameGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the controller wants another frame.
    pub fn request(&self) {
        self.requested.set(true);
    }

    /// Claim the right to schedule a frame.
    ///
    /// Returns `true` when a request is outstanding and no frame is pending;
    /// the caller must then schedule exactly one frame, or call
    /// [`FrameGate::delivered`] if scheduling fails.
    pub fn try_schedule(&self) -> bool {
        if self.pending.get() || !self.requested.get() {
            return false;
        }
        self.requested.set(false);
        self.pending.set(true);
        true
    }

    /// The pending frame is running now (or was never scheduled).
    ///
    /// Requests made before this point are served by the frame that follows.
    pub fn delivered(&self) {
        self.pending.set(false);
        self.requested.set(false);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
