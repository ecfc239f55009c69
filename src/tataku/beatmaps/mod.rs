mod chart;
mod replay;
mod hit_object;
mod timing_point;

pub use chart::*;
pub use replay::*;
pub use hit_object::*;
pub use timing_point::*;


// stolen from peppy, /shrug
pub fn map_difficulty(diff:f32, min:f32, mid:f32, max:f32) -> f32 {
    if diff > 5.0 {
        mid + (max - mid) * (diff - 5.0) / 5.0
    } else if diff < 5.0 {
        mid - (mid - min) * (5.0 - diff) / 5.0
    } else {
        mid
    }
}


#[test]
fn map_difficulty_curve() {
    assert_eq!(map_difficulty(5.0, 1800.0, 1200.0, 450.0), 1200.0);
    assert_eq!(map_difficulty(0.0, 1800.0, 1200.0, 450.0), 1800.0);
    assert_eq!(map_difficulty(10.0, 1800.0, 1200.0, 450.0), 450.0);
    assert_eq!(map_difficulty(7.5, 1800.0, 1200.0, 450.0), 825.0);
}
