use crate::prelude::*;

/// how long a resolved or missed object stays around after it ends, before the cursor moves past it (ms)
pub const LINGER_TIME:f32 = 200.0;
/// how many objects past the cursor a press may look at
pub const LOOKAHEAD:usize = 10;


/// timing windows, in ms either side of an object's time
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitWindows {
    pub x300: f32,
    pub x100: f32,
    pub x50: f32,
}
impl HitWindows {
    /// the window bounding every scan
    pub fn widest(&self) -> f32 {
        self.x50
    }

    /// which tier does a hit `diff` ms off land in
    pub fn tier_for(&self, diff: f32) -> Option<HitTier> {
        let diff = diff.abs();
        if diff <= self.x300 { Some(HitTier::X300) }
        else if diff <= self.x100 { Some(HitTier::X100) }
        else if diff <= self.x50 { Some(HitTier::X50) }
        else { None }
    }
}
impl Default for HitWindows {
    fn default() -> Self {
        Self {
            x300: 50.0,
            x100: 100.0,
            x50: 150.0,
        }
    }
}


#[test]
fn tier_edges() {
    let windows = HitWindows::default();
    assert_eq!(windows.tier_for(0.0), Some(HitTier::X300));
    assert_eq!(windows.tier_for(-50.0), Some(HitTier::X300));
    assert_eq!(windows.tier_for(50.5), Some(HitTier::X100));
    assert_eq!(windows.tier_for(100.0), Some(HitTier::X100));
    assert_eq!(windows.tier_for(120.0), Some(HitTier::X50));
    assert_eq!(windows.tier_for(-150.0), Some(HitTier::X50));
    assert_eq!(windows.tier_for(150.1), None);
}
