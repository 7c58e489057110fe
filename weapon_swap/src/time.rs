//! Frame clock abstraction.
//!
//! Everything in this crate is polled once per frame; the only notion of
//! time is the delta since the previous frame, supplied by the host.

/// Source of per-frame elapsed time.
pub trait FrameClock {
    /// Seconds elapsed since the previous frame.
    fn delta_seconds(&self) -> f32;
}

/// Clock whose delta is set by hand. Used by tests and the demo.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    delta: f32,
}

impl ManualClock {
    pub fn new(delta: f32) -> Self {
        Self { delta }
    }

    pub fn set_delta(&mut self, delta: f32) {
        self.delta = delta;
    }
}

impl Default for ManualClock {
    /// 60 Hz frame.
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl FrameClock for ManualClock {
    fn delta_seconds(&self) -> f32 {
        self.delta
    }
}
