use crate::prelude::*;

/// audio whose clock is moved by hand.
///
/// used when something else owns the real clock (tests, frame-stepped hosts)
#[derive(Default)]
pub struct ManualAudio {
    position: Mutex<f64>,
    scheduled: Mutex<Option<f64>>,
    stopped: Mutex<bool>,
    samples: Mutex<Vec<String>>,
}
impl ManualAudio {
    pub fn new() -> Self { Self::default() }

    pub fn set_position(&self, position: f64) {
        let mut pos = self.position.lock();
        // engine clocks dont go backwards
        *pos = pos.max(position);
    }
    pub fn advance(&self, seconds: f64) {
        *self.position.lock() += seconds.max(0.0);
    }

    /// where the song was scheduled to start, if it was
    pub fn scheduled_start(&self) -> Option<f64> { *self.scheduled.lock() }

    /// every sample played so far
    pub fn played_samples(&self) -> Vec<String> { self.samples.lock().clone() }
}
impl AudioInstance for ManualAudio {
    fn play_at(&self, position: f64) {
        *self.scheduled.lock() = Some(position);
    }
    fn stop(&self) {
        *self.stopped.lock() = true;
    }

    fn is_playing(&self) -> bool {
        if *self.stopped.lock() { return false }
        self.scheduled.lock().map(|s| *self.position.lock() >= s).unwrap_or_default()
    }
    fn is_stopped(&self) -> bool { *self.stopped.lock() }

    fn get_position(&self) -> f64 { *self.position.lock() }

    fn play_sample(&self, name: &str) {
        self.samples.lock().push(name.to_owned());
    }
}


#[test]
fn manual_audio_is_monotonic() {
    let audio = ManualAudio::new();
    audio.set_position(2.0);
    audio.set_position(1.0);
    assert_eq!(audio.get_position(), 2.0);

    audio.play_at(3.0);
    assert!(!audio.is_playing());
    audio.advance(1.5);
    assert!(audio.is_playing());

    audio.stop();
    assert!(audio.is_stopped());
    assert!(!audio.is_playing());
}
