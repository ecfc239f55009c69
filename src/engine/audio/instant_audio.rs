use crate::prelude::*;
use std::time::Instant;

/// silent audio backed by the system clock, for headless runs
pub struct InstantAudio {
    created: Instant,
    scheduled: Mutex<Option<f64>>,
    stopped: Mutex<bool>,
}
impl InstantAudio {
    pub fn new() -> Self {
        Self {
            created: Instant::now(),
            scheduled: Mutex::new(None),
            stopped: Mutex::new(false),
        }
    }
}
impl Default for InstantAudio {
    fn default() -> Self { Self::new() }
}
impl AudioInstance for InstantAudio {
    fn play_at(&self, position: f64) {
        *self.scheduled.lock() = Some(position);
    }
    fn stop(&self) {
        *self.stopped.lock() = true;
    }

    fn is_playing(&self) -> bool {
        if *self.stopped.lock() { return false }
        self.scheduled.lock().map(|s| self.get_position() >= s).unwrap_or_default()
    }
    fn is_stopped(&self) -> bool { *self.stopped.lock() }

    fn get_position(&self) -> f64 {
        self.created.elapsed().as_secs_f64()
    }
}
