use crate::prelude::*;

/// spins are measured around the middle of the playfield
pub const SPINNER_CENTER: Vector2 = Vector2::new(256.0, 192.0);
/// accumulated radians needed to clear a spinner (4 full turns)
pub const SPIN_COMPLETE_ROTATION: f32 = 8.0 * PI;
/// per frame rate decay while not spinning. display only
pub const RPM_DECAY: f32 = 0.95;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpinAccumulator {
    /// absolute radians spun so far
    pub total_rotation: f32,
    pub last_angle: Option<f32>,
    /// radians per ms
    pub rate: f32,
}
impl SpinAccumulator {
    /// `pointer` is `None` when nothing is held
    pub fn update(&mut self, pointer: Option<Vector2>, frame_delta: f32) {
        let Some(pos) = pointer else {
            self.last_angle = None;
            self.rate *= RPM_DECAY;
            return;
        };

        let angle = (pos - SPINNER_CENTER).atan2();
        if let Some(last) = self.last_angle {
            let diff = angle_diff(last, angle).abs();
            self.total_rotation += diff;
            if frame_delta > 0.0 {
                self.rate = diff / frame_delta;
            }
        }
        self.last_angle = Some(angle);
    }

    pub fn rpm(&self) -> f32 {
        self.rate * 60_000.0 / (2.0 * PI)
    }

    pub fn is_complete(&self) -> bool {
        self.total_rotation > SPIN_COMPLETE_ROTATION
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpinnerInfo {
    pub index: usize,
    pub rotation: f32,
    pub rpm: f32,
}


#[cfg(test)]
pub fn spin_point(angle: f32) -> Vector2 {
    SPINNER_CENTER + Vector2::new(angle.cos(), angle.sin()) * 100.0
}

#[test]
fn rotation_wraps() {
    let mut spin = SpinAccumulator::default();

    // crossing the -PI/PI seam counts as a small step, not a full turn
    spin.update(Some(spin_point(PI - 0.1)), 16.0);
    spin.update(Some(spin_point(-PI + 0.1)), 16.0);
    assert!((spin.total_rotation - 0.2).abs() < 0.001);
    assert!(spin.rate > 0.0);

    // either direction counts
    spin.update(Some(spin_point(PI - 0.1)), 16.0);
    assert!((spin.total_rotation - 0.4).abs() < 0.001);
}

#[test]
fn completes_after_four_turns() {
    let mut spin = SpinAccumulator::default();
    for i in 0..16 {
        spin.update(Some(spin_point(i as f32 * PI / 2.0)), 16.0);
    }
    // 15 quarter turns
    assert!(!spin.is_complete());

    for i in 16..20 {
        spin.update(Some(spin_point(i as f32 * PI / 2.0)), 16.0);
    }
    assert!(spin.is_complete());

    // letting go decays the rate, but keeps the rotation
    let (rotation, rate) = (spin.total_rotation, spin.rate);
    spin.update(None, 16.0);
    assert_eq!(spin.total_rotation, rotation);
    assert!(spin.rate < rate);
    assert_eq!(spin.last_angle, None);
}
