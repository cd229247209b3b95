//! Session lifecycle - over/paused flags and elapsed-time bookkeeping
//!
//! Time is advanced explicitly with [`Session::tick`], the same fixed-timestep style the
//! caller's frame loop uses. Elapsed time only accumulates while the session is running
//! (neither paused nor over). None of this affects grid correctness.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    is_over: bool,
    is_paused: bool,
    elapsed_ms: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// True while time accumulates
    pub fn is_running(&self) -> bool {
        !self.is_over && !self.is_paused
    }

    pub fn set_over(&mut self, over: bool) {
        self.is_over = over;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    /// Toggle pause; returns the new paused flag
    pub fn toggle_pause(&mut self) -> bool {
        self.is_paused = !self.is_paused;
        self.is_paused
    }

    /// Advance the clock by `elapsed_ms`
    ///
    /// Returns false (and records nothing) when paused or over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);
        true
    }

    /// Accumulated running time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
