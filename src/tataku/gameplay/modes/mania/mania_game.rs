use crate::prelude::*;

/// which lane an object sits in. chart x is spread evenly over the lanes
pub fn lane_of(note: &HitObject, lane_count: u8) -> u8 {
    let lane = (note.x * lane_count as f32 / 512.0).floor();
    lane.clamp(0.0, (lane_count.max(1) - 1) as f32) as u8
}

/// head-only judgement: a hold is graded on its press, releasing early or late isnt scored.
/// spins have no meaning here, so they get a lane and play like holds
pub struct ManiaGame {
    lane_count: u8,
    /// lane of each note, by index
    lanes: Vec<u8>,
    pressed: Vec<bool>,
}
impl ManiaGame {
    pub fn new(chart: &Chart) -> Self {
        let lane_count = chart.metadata.lane_count;
        Self {
            lane_count,
            lanes: chart.notes.iter().map(|n| lane_of(n, lane_count)).collect(),
            pressed: vec![false; lane_count as usize],
        }
    }

    pub fn lane_count(&self) -> u8 { self.lane_count }
    pub fn lane(&self, index: usize) -> Option<u8> { self.lanes.get(index).copied() }
}

impl GameMode for ManiaGame {
    fn discrete_input(&mut self, manager: &mut IngameManager, key: KeyPress, time: f32) {
        let Some(lane) = key.lane() else { return };
        if lane >= self.lane_count { return }
        self.pressed[lane as usize] = true;

        // other lanes dont exist as far as this press is concerned
        let widest = manager.hit_windows.widest();
        let lanes = &self.lanes;
        let Some(index) = manager.cursor.find_hittable(&manager.chart.notes, time, widest, |n| lanes.get(n.id) == Some(&lane)) else {
            trace!("lane {lane} pressed at {time} with nothing to hit");
            return
        };

        manager.check_judgment::<ManiaHitJudgments>(index, time);
    }

    fn continuous_input(&mut self, manager: &mut IngameManager, _time: f32, _frame_delta: f32) {
        for (lane, pressed) in self.pressed.iter_mut().enumerate() {
            *pressed = KeyPress::from_lane(lane as u8).map(|k| manager.input.is_held(k)).unwrap_or_default();
        }
    }

    fn tick_miss_detection(&mut self, manager: &mut IngameManager, time: f32) {
        let widest = manager.hit_windows.widest();

        for index in manager.cursor.due(&manager.chart.notes, time) {
            let note = &manager.chart.notes[index];

            // holds included, only the head is judged
            if !note.is_done() && time - note.time > widest {
                manager.miss_note(index, &ManiaHitJudgments::Miss);
            }
        }
    }

    fn render_info(&self) -> GameModeRenderInfo {
        GameModeRenderInfo::Mania {
            lane_count: self.lane_count,
            pressed: self.pressed.clone(),
        }
    }

    fn reset(&mut self) {
        self.pressed.iter_mut().for_each(|p| *p = false);
    }
}


#[cfg(test)]
fn session_with(lane_count: u8, notes: Vec<HitObject>) -> TestSession {
    let metadata = ChartMetadata { lane_count, ..Default::default() };
    let mut session = TestSession::new(PlayMode::Mania, Chart::new(metadata, notes, Vec::new()).unwrap());
    session.tick(0.0);
    session
}

#[test]
fn lanes_from_x() {
    let note = |x| HitObject::tap(x, 0.0, 0.0);
    assert_eq!(lane_of(&note(400.0), 4), 3);
    assert_eq!(lane_of(&note(0.0), 4), 0);
    assert_eq!(lane_of(&note(127.9), 4), 0);
    assert_eq!(lane_of(&note(128.0), 4), 1);
    // out of bounds gets clamped
    assert_eq!(lane_of(&note(512.0), 4), 3);
    assert_eq!(lane_of(&note(-10.0), 7), 0);
}

#[test]
fn only_matching_lane_resolves() {
    let mut session = session_with(4, vec![HitObject::tap(400.0, 0.0, 1000.0)]);

    session.tap(KeyPress::Mania1, 1000.0);
    assert!(!session.note(0).resolved);

    session.tap(KeyPress::Mania4, 1000.0);
    assert!(session.note(0).resolved);
    assert_eq!(session.score().x300, 1);
}

#[test]
fn lanes_are_independent() {
    let mut session = session_with(4, vec![
        HitObject::tap(0.0, 0.0, 1000.0),
        HitObject::tap(200.0, 0.0, 1000.0),
        HitObject::tap(0.0, 0.0, 1100.0),
    ]);

    session.tap(KeyPress::Mania2, 1060.0);
    assert!(session.note(1).resolved);
    assert!(!session.note(0).resolved);

    // lane 0 gets its oldest note first
    session.tap(KeyPress::Mania1, 1100.0);
    assert!(session.note(0).resolved);
    assert!(!session.note(2).resolved);

    // keys past the lane count do nothing
    session.tap(KeyPress::Mania5, 1100.0);
    assert!(!session.note(2).resolved);
}

#[test]
fn hold_is_head_only() {
    let mut session = session_with(4, vec![HitObject::hold(0.0, 0.0, 1000.0, 3000.0, Vec::new())]);

    session.press(KeyPress::Mania1, 1030.0);
    assert!(session.note(0).resolved);
    // letting go early changes nothing
    session.release(KeyPress::Mania1, 1100.0);
    session.run_until(3500.0, 16.0);
    assert_eq!(session.score().total_judged(), 1);
    assert_eq!(session.score().x300, 1);

    // and an unpressed head misses right after its window, not at the tail
    let mut session = session_with(4, vec![HitObject::hold(0.0, 0.0, 1000.0, 3000.0, Vec::new())]);
    session.tick(1200.0);
    assert!(session.note(0).missed);
}

#[test]
fn pressed_lanes_for_renderer() {
    let mut session = session_with(7, vec![HitObject::tap(0.0, 0.0, 5000.0)]);
    session.press(KeyPress::Mania3, 100.0);
    session.tick(100.0);

    assert_eq!(session.manager.render_info(), GameModeRenderInfo::Mania {
        lane_count: 7,
        pressed: vec![false, false, true, false, false, false, false],
    });
}
