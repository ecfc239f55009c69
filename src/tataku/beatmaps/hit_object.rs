use crate::prelude::*;

// hitsound bits
pub const HITSOUND_NORMAL:u8 = 1;
pub const HITSOUND_WHISTLE:u8 = 2;
pub const HITSOUND_FINISH:u8 = 4;
pub const HITSOUND_CLAP:u8 = 8;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    /// a single press (circle, don/kat, mania note, fruit)
    Tap,
    /// a sustained target (slider, drumroll, hold note, juice stream)
    Hold,
    /// spinner, or banana shower in catch
    Spin,
}

/// one scored target.
///
/// everything below `hitsound` is mutable play state, owned by the session's copy of the chart
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HitObject {
    /// index into the chart, set when the chart is built
    #[serde(default)]
    pub id: usize,
    pub kind: NoteType,
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub time: f32,
    /// for taps this is the same as `time`. holds without one get it derived from the timing points
    #[serde(default)]
    pub end_time: f32,
    #[serde(default)]
    pub hitsound: u8,

    /// control points after the head, in chart space
    #[serde(default)]
    pub path: Vec<Vector2>,
    /// how many times the hold travels its path
    #[serde(default = "one")]
    pub repeat_count: u16,
    /// path length in chart px, used to derive `end_time` when none was given
    #[serde(default)]
    pub length: f32,

    #[serde(skip)]
    pub resolved: bool,
    #[serde(skip)]
    pub missed: bool,

    // catch holds
    #[serde(skip)]
    pub caught_droplets: BTreeSet<usize>,
    #[serde(skip)]
    pub head_judged: bool,
    #[serde(skip)]
    pub tail_judged: bool,
    #[serde(skip)]
    pub tail_caught: bool,

    // spins
    #[serde(skip)]
    pub fully_rotated: bool,
}
fn one() -> u16 { 1 }

impl HitObject {
    pub fn new(kind: NoteType, x: f32, y: f32, time: f32, end_time: f32) -> Self {
        Self {
            id: 0,
            kind,
            x,
            y,
            time,
            end_time: if kind == NoteType::Tap { time } else { end_time },
            hitsound: 0,
            path: Vec::new(),
            repeat_count: 1,
            length: 0.0,

            resolved: false,
            missed: false,
            caught_droplets: BTreeSet::new(),
            head_judged: false,
            tail_judged: false,
            tail_caught: false,
            fully_rotated: false,
        }
    }
    pub fn tap(x: f32, y: f32, time: f32) -> Self {
        Self::new(NoteType::Tap, x, y, time, time)
    }
    pub fn hold(x: f32, y: f32, time: f32, end_time: f32, path: Vec<Vector2>) -> Self {
        Self { path, ..Self::new(NoteType::Hold, x, y, time, end_time) }
    }
    pub fn spin(time: f32, end_time: f32) -> Self {
        Self::new(NoteType::Spin, 256.0, 192.0, time, end_time)
    }
    pub fn with_hitsound(mut self, hitsound: u8) -> Self {
        self.hitsound = hitsound;
        self
    }
    pub fn with_repeats(mut self, repeat_count: u16) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    pub fn pos(&self) -> Vector2 { Vector2::new(self.x, self.y) }
    pub fn duration(&self) -> f32 { self.end_time - self.time }

    /// has this object been judged either way
    pub fn is_done(&self) -> bool { self.resolved || self.missed }

    /// where the path ends, the head if there is no path
    pub fn tail_pos(&self) -> Vector2 {
        self.path.last().copied().unwrap_or_else(|| self.pos())
    }

    /// clear all play state, for a restart
    pub fn reset(&mut self) {
        self.resolved = false;
        self.missed = false;
        self.caught_droplets.clear();
        self.head_judged = false;
        self.tail_judged = false;
        self.tail_caught = false;
        self.fully_rotated = false;
    }
}
