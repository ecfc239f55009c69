use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    pub time: f32,
    /// for uninherited points, ms per beat.
    /// for inherited points, a negative inverse slider velocity percentage (-50 is 2x)
    pub beat_length: f32,
}
impl TimingPoint {
    pub fn new(time: f32, beat_length: f32) -> Self {
        Self { time, beat_length }
    }

    pub fn is_inherited(&self) -> bool {
        self.beat_length < 0.0
    }

    /// slider velocity multiplier, 1.0 for uninherited points
    pub fn sv_multiplier(&self) -> f32 {
        if !self.is_inherited() { 1.0 }
        else { 100.0 / self.beat_length.abs().clamp(10.0, 1000.0) }
    }

    pub fn bpm(&self) -> f32 {
        60_000.0 / self.beat_length
    }
}

impl Default for TimingPoint {
    fn default() -> Self {
        // 120bpm
        Self::new(0.0, 500.0)
    }
}


#[test]
fn inherited_points() {
    assert!(!TimingPoint::new(0.0, 500.0).is_inherited());
    assert_eq!(TimingPoint::new(0.0, 500.0).bpm(), 120.0);
    assert_eq!(TimingPoint::new(0.0, -50.0).sv_multiplier(), 2.0);
    assert_eq!(TimingPoint::new(0.0, -200.0).sv_multiplier(), 0.5);
}
