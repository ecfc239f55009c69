use crate::prelude::*;

/// catcher width at cs 5 (chart px)
pub const CATCHER_BASE_WIDTH:f32 = 106.75;
/// px per ms
pub const WALK_SPEED:f32 = 1.0;
pub const DASH_MULTIPLIER:f32 = 2.0;
pub const PLAYFIELD_WIDTH:f32 = 512.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Catcher {
    /// center x
    pub x: f32,
    pub width: f32,
    pub dashing: bool,
    /// -1 left, 0 still, 1 right
    pub direction: f32,
}
impl Catcher {
    pub fn new(cs: f32) -> Self {
        Self {
            x: PLAYFIELD_WIDTH / 2.0,
            width: CATCHER_BASE_WIDTH * (1.0 - 0.7 * (cs - 5.0) / 5.0),
            dashing: false,
            direction: 0.0,
        }
    }

    pub fn half_width(&self) -> f32 { self.width / 2.0 }

    pub fn speed(&self) -> f32 {
        if self.dashing { WALK_SPEED * DASH_MULTIPLIER } else { WALK_SPEED }
    }

    /// move for one frame. holding both directions cancels out
    pub fn update(&mut self, left: bool, right: bool, dash: bool, frame_delta: f32) {
        self.direction = match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        self.dashing = dash;
        self.x = (self.x + self.direction * self.speed() * frame_delta).clamp(0.0, PLAYFIELD_WIDTH);
    }

    /// is something landing at `x` on the plate
    pub fn catches(&self, x: f32, tolerance: f32) -> bool {
        (x - self.x).abs() <= self.half_width() + tolerance
    }
}


#[test]
fn catcher_movement() {
    let mut catcher = Catcher::new(5.0);
    assert_eq!(catcher.width, CATCHER_BASE_WIDTH);

    catcher.update(true, false, false, 100.0);
    assert_eq!(catcher.x, 156.0);
    catcher.update(false, true, true, 50.0);
    assert_eq!(catcher.x, 256.0);
    assert!(catcher.dashing);

    // both held goes nowhere
    catcher.update(true, true, false, 100.0);
    assert_eq!(catcher.x, 256.0);

    // cant leave the playfield
    catcher.update(false, true, true, 10_000.0);
    assert_eq!(catcher.x, PLAYFIELD_WIDTH);
    catcher.update(true, false, false, 10_000.0);
    assert_eq!(catcher.x, 0.0);
}

#[test]
fn catcher_width_scales() {
    assert!(Catcher::new(7.0).width < Catcher::new(5.0).width);
    assert!(Catcher::new(2.0).width > Catcher::new(5.0).width);

    let catcher = Catcher::new(5.0);
    assert!(catcher.catches(256.0 + catcher.half_width() + 5.0, 5.0));
    assert!(!catcher.catches(256.0 + catcher.half_width() + 5.1, 5.0));
}
