//! Repeated-state detection over a sliding window of grid fingerprints.

use std::collections::VecDeque;

/// Remembers the fingerprints of the last `window` generations.
///
/// [`observe`](CycleDetector::observe) reports whether a fingerprint has
/// already been seen inside the window, which catches still lifes
/// (period 1) and oscillators with period up to `window`. A window of 0
/// disables detection.
#[derive(Clone, Debug)]
pub struct CycleDetector {
    window: usize,
    seen: VecDeque<u64>,
}

impl CycleDetector {
    /// Create a detector holding at most `window` fingerprints.
    pub fn new(window: usize) -> Self {
        Self {
            window,
            seen: VecDeque::with_capacity(window),
        }
    }

    /// Record `fingerprint`; returns `true` if it repeats one in the window.
    pub fn observe(&mut self, fingerprint: u64) -> bool {
        if self.window == 0 {
            return false;
        }
        let repeated = self.seen.contains(&fingerprint);
        if self.seen.len() == self.window {
            self.seen.pop_front();
        }
        self.seen.push_back(fingerprint);
        repeated
    }

    /// Forget all history.
    pub fn clear(&mut self) {
        self.seen.clear();
    }

    /// Configured window length.
    pub fn window(&self) -> usize {
        self.window
    }
}
