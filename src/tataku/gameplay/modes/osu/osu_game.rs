use crate::prelude::*;

/// how much bigger than the drawn circle the tap hitbox is
pub const TAP_RADIUS_MULTIPLIER:f32 = 1.5;
/// how far from the ball the cursor can be while following a slider
pub const FOLLOW_RADIUS_MULTIPLIER:f32 = 2.0;

const OSU_KEYS:[KeyPress; 4] = [
    KeyPress::Left,
    KeyPress::Right,
    KeyPress::LeftMouse,
    KeyPress::RightMouse,
];

pub struct OsuGame {
    /// object radius in chart px
    radius: f32,
    /// how far toward the real cursor the tested cursor moves each frame
    smoothing: f32,

    /// the smoothed cursor. this is what gets hit tested, and what should be drawn
    cursor: Vector2,
    held: bool,

    sliders: HashMap<usize, SliderPath>,
    active_slider: Option<(usize, SliderProgress)>,
    spinner: Option<(usize, SpinAccumulator)>,
}
impl OsuGame {
    pub fn new(chart: &Chart, settings: &StandardSettings) -> Self {
        let sliders = chart.notes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind == NoteType::Hold)
            .map(|(i, n)| (i, SliderPath::new(n)))
            .collect();

        Self {
            radius: chart.radius(),
            smoothing: settings.cursor_smoothing.clamp(0.01, 1.0),
            cursor: SPINNER_CENTER,
            held: false,

            sliders,
            active_slider: None,
            spinner: None,
        }
    }

    pub fn cursor_pos(&self) -> Vector2 { self.cursor }
    pub fn slider_path(&self, index: usize) -> Option<&SliderPath> { self.sliders.get(&index) }

    fn update_slider(&mut self, manager: &mut IngameManager, index: usize, time: f32) {
        let Some(path) = self.sliders.get(&index) else { return };
        let progress = path.progress_at(time);
        self.active_slider = Some((index, progress));

        #[cfg(feature="debug_sliders")]
        trace!("slider {index}: {progress:?}, cursor at {:?}", self.cursor);

        if manager.chart.notes[index].is_done() || !self.held { return }
        if self.cursor.distance(progress.position) <= self.radius * FOLLOW_RADIUS_MULTIPLIER {
            manager.resolve_note(index, &OsuHitJudgments::X300);
        }
    }

    fn update_spinner(&mut self, manager: &mut IngameManager, index: usize, frame_delta: f32) {
        // new spinner, start counting from 0
        if !matches!(self.spinner, Some((i, _)) if i == index) {
            self.spinner = Some((index, SpinAccumulator::default()));
        }
        let Some((_, spin)) = &mut self.spinner else { return };
        spin.update(self.held.then_some(self.cursor), frame_delta);

        let note = &mut manager.chart.notes[index];
        if spin.is_complete() && !note.fully_rotated {
            note.fully_rotated = true;
            debug!("spinner {index} cleared");
            manager.resolve_note(index, &OsuHitJudgments::X300);
        }
    }
}

impl GameMode for OsuGame {
    fn discrete_input(&mut self, manager: &mut IngameManager, key: KeyPress, time: f32) {
        if !OSU_KEYS.contains(&key) { return }

        let widest = manager.hit_windows.widest();
        let Some(index) = manager.cursor.find_hittable(&manager.chart.notes, time, widest, |n| n.kind != NoteType::Spin) else { return };

        let note = &manager.chart.notes[index];
        if note.pos().distance(self.cursor) > self.radius * TAP_RADIUS_MULTIPLIER {
            trace!("press at {time} missed note {index} by {:.1}px", note.pos().distance(self.cursor));
            return;
        }

        manager.check_judgment::<OsuHitJudgments>(index, time);
    }

    fn continuous_input(&mut self, manager: &mut IngameManager, time: f32, frame_delta: f32) {
        self.cursor = Vector2::lerp(self.cursor, manager.input.pointer(), self.smoothing);
        self.held = manager.input.any_held(&OSU_KEYS);
        self.active_slider = None;

        for index in manager.cursor.due(&manager.chart.notes, time) {
            let note = &manager.chart.notes[index];
            if time > note.end_time { continue }

            let kind = note.kind;
            match kind {
                NoteType::Hold => self.update_slider(manager, index, time),
                NoteType::Spin => self.update_spinner(manager, index, frame_delta),
                NoteType::Tap => {}
            }
        }
    }

    fn tick_miss_detection(&mut self, manager: &mut IngameManager, time: f32) {
        let widest = manager.hit_windows.widest();

        for index in manager.cursor.due(&manager.chart.notes, time) {
            let note = &manager.chart.notes[index];

            // holds and spins can still be cleared up to their end
            if !note.is_done() && time > note.end_time + widest {
                manager.miss_note(index, &OsuHitJudgments::Miss);
            }
        }
    }

    fn render_info(&self) -> GameModeRenderInfo {
        GameModeRenderInfo::Osu {
            cursor: self.cursor,
            held: self.held,
            slider: self.active_slider,
            spinner: self.spinner.map(|(index, spin)| SpinnerInfo {
                index,
                rotation: spin.total_rotation,
                rpm: spin.rpm(),
            }),
        }
    }

    fn reset(&mut self) {
        self.cursor = SPINNER_CENTER;
        self.held = false;
        self.active_slider = None;
        self.spinner = None;
    }
}


#[cfg(test)]
fn session_with(notes: Vec<HitObject>) -> TestSession {
    let mut session = TestSession::new(PlayMode::Osu, Chart::new(ChartMetadata::default(), notes, Vec::new()).unwrap());
    session.mouse(256.0, 192.0, 0.0);
    session.tick(0.0);
    session
}

#[test]
fn tap_timing_tiers() {
    let mut session = session_with(vec![HitObject::tap(256.0, 192.0, 1000.0)]);
    session.tap(KeyPress::Left, 1000.0);
    assert_eq!((session.score().x300, session.score().combo, session.score().score), (1, 1, 300));

    let mut session = session_with(vec![HitObject::tap(256.0, 192.0, 1000.0)]);
    session.tap(KeyPress::Left, 1120.0);
    assert_eq!((session.score().x50, session.score().score), (1, 50));
    assert_eq!(session.score().hit_timings, vec![120.0]);
}

#[test]
fn unpressed_tap_misses() {
    let mut session = session_with(vec![HitObject::tap(256.0, 192.0, 1000.0), HitObject::tap(256.0, 192.0, 2000.0)]);
    session.tap(KeyPress::Left, 1000.0);
    assert_eq!(session.score().combo, 1);

    session.tick(2140.0);
    assert!(!session.note(1).missed);
    session.tick(2151.0);
    assert!(session.note(1).missed);
    assert_eq!((session.score().combo, session.score().xmiss), (0, 1));

    // pressing a missed note does nothing
    let before = session.score().clone();
    session.tap(KeyPress::Left, 2100.0);
    assert_eq!(session.score(), &before);
}

#[test]
fn aim_matters() {
    let mut session = session_with(vec![HitObject::tap(100.0, 100.0, 1000.0)]);
    // cursor is in the middle, way off the note
    session.tap(KeyPress::Left, 1000.0);
    assert!(!session.note(0).resolved);

    // just inside the loosened hitbox (radius 32 at cs 5)
    session.mouse(100.0 + 32.0 * TAP_RADIUS_MULTIPLIER - 1.0, 100.0, 1000.0);
    for t in [1001.0, 1002.0, 1003.0, 1004.0, 1005.0, 1006.0, 1007.0, 1008.0, 1009.0, 1010.0] {
        session.tick(t);
    }
    session.tap(KeyPress::Right, 1010.0);
    assert!(session.note(0).resolved);
    assert_eq!(session.score().x300, 1);
}

#[test]
fn one_press_one_note() {
    let mut session = session_with(vec![
        HitObject::tap(256.0, 192.0, 1000.0),
        HitObject::tap(256.0, 192.0, 1010.0),
        HitObject::tap(256.0, 192.0, 1020.0),
    ]);
    session.tap(KeyPress::Left, 1010.0);
    assert_eq!(session.manager.notes().iter().filter(|n| n.resolved).count(), 1);
    // the oldest one goes first
    assert!(session.note(0).resolved);

    // mouse buttons are bound too
    session.tap(KeyPress::LeftMouse, 1010.0);
    assert!(session.note(1).resolved);

    // unrelated keys do nothing
    session.tap(KeyPress::Dash, 1020.0);
    assert!(!session.note(2).resolved);
}

#[test]
fn slider_follow() {
    let slider = HitObject::hold(256.0, 192.0, 1000.0, 2000.0, vec![Vector2::new(456.0, 192.0)]);
    let mut session = session_with(vec![slider]);

    // holding but nowhere near the ball, or the head
    session.mouse(256.0, 50.0, 0.0);
    session.run_until(1000.0, 10.0);
    session.press(KeyPress::Left, 1000.0);
    session.run_until(1400.0, 10.0);
    assert!(!session.note(0).resolved);

    // ball is at x = 356 at the halfway point
    session.mouse(356.0, 192.0, 1400.0);
    session.run_until(1500.0, 10.0);
    assert!(session.note(0).resolved);
    assert_eq!(session.score().x300, 1);

    match session.manager.render_info() {
        GameModeRenderInfo::Osu { slider: Some((0, progress)), held, .. } => {
            assert!(held);
            assert!(progress.position.distance(Vector2::new(356.0, 192.0)) < 0.1);
        }
        other => panic!("wrong render info {other:?}"),
    }

    // only ever judged once
    session.run_until(1900.0, 10.0);
    assert_eq!(session.score().total_judged(), 1);
}

#[test]
fn slider_not_followed_misses_at_end() {
    let slider = HitObject::hold(256.0, 192.0, 1000.0, 2000.0, vec![Vector2::new(456.0, 192.0)]);
    let mut session = session_with(vec![slider]);

    session.run_until(2140.0, 10.0);
    assert!(!session.note(0).missed);
    session.tick(2160.0);
    assert!(session.note(0).missed);
}

#[test]
fn spinner_needs_rotation() {
    let mut session = session_with(vec![HitObject::spin(1000.0, 3000.0)]);
    session.tick(1000.0);

    // spinning without holding anything doesnt count
    for i in 0..40 {
        let p = spin_point(i as f32 * PI / 4.0);
        let t = 1000.0 + i as f32 * 10.0;
        session.mouse(p.x, p.y, t);
        session.tick(t);
    }
    assert!(!session.note(0).resolved);

    session.press(KeyPress::Left, 1400.0);
    let mut t = 1400.0;
    for i in 0..80 {
        let p = spin_point(i as f32 * PI / 4.0);
        session.mouse(p.x, p.y, t);
        session.tick(t);
        t += 10.0;
    }

    assert!(session.note(0).resolved);
    assert!(session.note(0).fully_rotated);
    assert_eq!(session.score().x300, 1);

    match session.manager.render_info() {
        GameModeRenderInfo::Osu { spinner: Some(info), .. } => assert!(info.rotation > SPIN_COMPLETE_ROTATION && info.rpm > 0.0),
        other => panic!("wrong render info {other:?}"),
    }
}

#[test]
fn unfinished_spinner_misses() {
    let mut session = session_with(vec![HitObject::spin(1000.0, 2000.0)]);
    session.run_until(2200.0, 16.0);
    assert!(session.note(0).missed);
    assert!(!session.note(0).fully_rotated);
}
