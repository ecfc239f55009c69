use std::f32::consts::PI;

pub trait Interpolation {
    fn lerp(current: Self, target: Self, amount: f32) -> Self;
}
impl<T> Interpolation for T where T: Copy + std::ops::Add<Output=T> + std::ops::Sub<Output=T> + std::ops::Mul<f32, Output=T> {
    fn lerp(current:T, target:T, amount:f32) -> T {
        current + (target - current) * amount
    }
}

/// shortest signed difference from `from` to `to`, in (-PI, PI]
///
/// raw subtraction jumps by a full turn whenever the angle wraps around
pub fn angle_diff(from: f32, to: f32) -> f32 {
    let mut diff = (to - from) % (2.0 * PI);
    if diff > PI { diff -= 2.0 * PI }
    else if diff <= -PI { diff += 2.0 * PI }
    diff
}

#[test]
fn angle_diff_wraps() {
    // just past +PI to just past -PI is a small positive step, not almost a full turn backwards
    let d = angle_diff(PI - 0.1, -PI + 0.1);
    assert!((d - 0.2).abs() < 1e-5, "{d}");

    let d = angle_diff(-PI + 0.1, PI - 0.1);
    assert!((d + 0.2).abs() < 1e-5, "{d}");

    assert_eq!(<f32 as Interpolation>::lerp(0.0, 10.0, 0.25), 2.5);
}
