use crate::prelude::*;

/// how long after scheduling does the song actually start (seconds)
pub const LEAD_IN_TIME:f64 = 1.0;
/// calibrated audio engine scheduling latency (ms)
pub const LATENCY_OFFSET:f32 = 20.0;

/// the one authoritative gameplay time source.
///
/// map time is derived from the audio engine's playback position, never from the wall clock.
/// scheduling puts the song start `LEAD_IN_TIME` into the future, so time starts negative
/// and the frame loop gets a grace period before the first object can matter
pub struct GameClock {
    audio: Arc<dyn AudioInstance>,
    /// engine position at which map time 0 happens
    session_start: f64,
}
impl GameClock {
    /// schedule the song and fix the session epoch. a stopped song cant be scheduled again
    pub fn schedule(audio: Arc<dyn AudioInstance>) -> TatakuResult<Self> {
        if audio.is_stopped() { return Err(AudioError::Stopped.into()) }

        let session_start = audio.get_position() + LEAD_IN_TIME;
        audio.play_at(session_start);
        debug!("song scheduled for engine time {session_start:.3}s");

        Ok(Self { audio, session_start })
    }

    /// map time in ms
    pub fn now(&self) -> f32 {
        ((self.audio.get_position() - self.session_start) * 1000.0) as f32 - LATENCY_OFFSET
    }

    pub fn session_start(&self) -> f64 { self.session_start }

    /// engine position that corresponds to `time` (ms of map time)
    pub fn position_for(&self, time: f32) -> f64 {
        self.session_start + (time + LATENCY_OFFSET) as f64 / 1000.0
    }
}


#[test]
fn clock_starts_in_the_future() {
    let audio = Arc::new(ManualAudio::new());
    audio.set_position(5.0);

    let clock = GameClock::schedule(audio.clone()).unwrap();
    assert_eq!(audio.scheduled_start(), Some(5.0 + LEAD_IN_TIME));

    // still in the lead-in
    let lead = clock.now();
    assert!(lead < 0.0);
    assert!((lead + 1000.0 + LATENCY_OFFSET).abs() < 0.01);

    audio.set_position(clock.position_for(1000.0));
    assert!((clock.now() - 1000.0).abs() < 0.01);
}

#[test]
fn stopped_audio_cant_be_scheduled() {
    let audio = Arc::new(ManualAudio::new());
    audio.stop();
    assert!(matches!(GameClock::schedule(audio), Err(TatakuError::Audio(AudioError::Stopped))));
}
