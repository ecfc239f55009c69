use crate::prelude::*;

/// one mode's judgement engine.
///
/// the manager owns the chart, cursor, and score, and is lent to the engine for each call.
/// engines only keep their own transient state (smoothed cursor, catcher, spin accumulators)
pub trait GameMode: Send + Sync {
    /// a press edge. resolves at most one object
    fn discrete_input(&mut self, manager: &mut IngameManager, key: KeyPress, time: f32);

    /// runs every frame before miss detection, with whatever is currently held
    fn continuous_input(&mut self, _manager: &mut IngameManager, _time: f32, _frame_delta: f32) {}

    /// mark everything that can no longer be hit as missed
    fn tick_miss_detection(&mut self, manager: &mut IngameManager, time: f32);

    /// what the renderer needs that isnt on the chart
    fn render_info(&self) -> GameModeRenderInfo;

    /// clear transient state, for a restart
    fn reset(&mut self);
}
impl Default for Box<dyn GameMode> {
    fn default() -> Self {
        Box::new(NoMode::default())
    }
}


/// placeholder while the real mode is taken out of the manager
#[derive(Default)]
pub struct NoMode;
impl GameMode for NoMode {
    fn discrete_input(&mut self, _manager: &mut IngameManager, _key: KeyPress, _time: f32) {}
    fn tick_miss_detection(&mut self, _manager: &mut IngameManager, _time: f32) {}
    fn render_info(&self) -> GameModeRenderInfo { GameModeRenderInfo::None }
    fn reset(&mut self) {}
}


/// read-only snapshot of a mode's transient state
#[derive(Clone, Debug, PartialEq)]
pub enum GameModeRenderInfo {
    None,
    Osu {
        /// the smoothed cursor, which is also what gets hit tested
        cursor: Vector2,
        held: bool,
        /// (note index, progress) of the slider being followed
        slider: Option<(usize, SliderProgress)>,
        spinner: Option<SpinnerInfo>,
    },
    Taiko {
        /// px per ms
        scroll_speed: f32,
        hit_x: f32,
        inner_pressed: bool,
        outer_pressed: bool,
    },
    Mania {
        lane_count: u8,
        pressed: Vec<bool>,
    },
    Catch {
        catcher_x: f32,
        catcher_width: f32,
        dashing: bool,
        pickups: Vec<BananaPickup>,
    },
}
