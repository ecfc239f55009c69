use crate::prelude::*;

/// scroll speed before the map's slider multiplier and the sv setting (px/ms)
pub const BASE_SCROLL_SPEED:f32 = 0.35;
/// x of the judgement line
pub const HIT_POSITION_X:f32 = 200.0;

const INNER_KEYS:[KeyPress; 2] = [KeyPress::LeftDon, KeyPress::RightDon];
const OUTER_KEYS:[KeyPress; 2] = [KeyPress::LeftKat, KeyPress::RightKat];


#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HitType {
    /// red, hit with the inner part of the drum
    Don,
    /// blue, hit on the rim
    Kat,
}
impl HitType {
    /// whistle or clap makes a kat
    pub fn of(note: &HitObject) -> Self {
        if note.hitsound & (HITSOUND_WHISTLE | HITSOUND_CLAP) > 0 { Self::Kat } else { Self::Don }
    }

    pub fn from_key(key: KeyPress) -> Option<Self> {
        if INNER_KEYS.contains(&key) { Some(Self::Don) }
        else if OUTER_KEYS.contains(&key) { Some(Self::Kat) }
        else { None }
    }
}

/// big notes are drawn bigger
pub fn is_finisher(note: &HitObject) -> bool {
    note.hitsound & HITSOUND_FINISH > 0
}


pub struct TaikoGame {
    /// px per ms
    scroll_speed: f32,
    inner_pressed: bool,
    outer_pressed: bool,
}
impl TaikoGame {
    pub fn new(chart: &Chart, settings: &TaikoSettings) -> Self {
        // a stopped playfield would never let anything scroll past the line
        let scroll_speed = (BASE_SCROLL_SPEED * chart.metadata.slider_multiplier * settings.sv_multiplier).max(0.01);

        Self {
            scroll_speed,
            inner_pressed: false,
            outer_pressed: false,
        }
    }

    pub fn scroll_speed(&self) -> f32 { self.scroll_speed }

    /// where on screen a note's head is at `time`
    pub fn note_x(&self, note: &HitObject, time: f32) -> f32 {
        HIT_POSITION_X + (note.time - time) * self.scroll_speed
    }
    /// where on screen a note's tail is at `time`
    pub fn note_end_x(&self, note: &HitObject, time: f32) -> f32 {
        HIT_POSITION_X + (note.end_time - time) * self.scroll_speed
    }
}

impl GameMode for TaikoGame {
    fn discrete_input(&mut self, manager: &mut IngameManager, key: KeyPress, time: f32) {
        let Some(hit_type) = HitType::from_key(key) else { return };
        match hit_type {
            HitType::Don => self.inner_pressed = true,
            HitType::Kat => self.outer_pressed = true,
        }

        // spinners take any hit while theyre going
        let active_spin = manager.cursor
            .due(&manager.chart.notes, time)
            .take(LOOKAHEAD)
            .find(|i| {
                let note = &manager.chart.notes[*i];
                note.kind == NoteType::Spin && !note.is_done() && time <= note.end_time
            });
        if let Some(index) = active_spin {
            manager.resolve_note(index, &TaikoHitJudgments::X300);
            return;
        }

        let widest = manager.hit_windows.widest();
        let Some(index) = manager.cursor.find_hittable(&manager.chart.notes, time, widest, |n| n.kind != NoteType::Spin) else { return };

        // wrong color doesnt use up the note
        if HitType::of(&manager.chart.notes[index]) != hit_type {
            trace!("{hit_type:?} at {time} on a {:?}", HitType::of(&manager.chart.notes[index]));
            return;
        }

        manager.check_judgment::<TaikoHitJudgments>(index, time);
    }

    fn continuous_input(&mut self, manager: &mut IngameManager, _time: f32, _frame_delta: f32) {
        self.inner_pressed = manager.input.any_held(&INNER_KEYS);
        self.outer_pressed = manager.input.any_held(&OUTER_KEYS);
    }

    fn tick_miss_detection(&mut self, manager: &mut IngameManager, time: f32) {
        // scrolling past the line by the widest window is the same as being that late
        let miss_x = HIT_POSITION_X - manager.hit_windows.widest() * self.scroll_speed;

        for index in manager.cursor.due(&manager.chart.notes, time) {
            let note = &manager.chart.notes[index];
            if note.is_done() { continue }

            let passed = match note.kind {
                NoteType::Tap | NoteType::Hold => self.note_x(note, time) < miss_x,
                NoteType::Spin => self.note_end_x(note, time) < miss_x,
            };
            if passed {
                manager.miss_note(index, &TaikoHitJudgments::Miss);
            }
        }
    }

    fn render_info(&self) -> GameModeRenderInfo {
        GameModeRenderInfo::Taiko {
            scroll_speed: self.scroll_speed,
            hit_x: HIT_POSITION_X,
            inner_pressed: self.inner_pressed,
            outer_pressed: self.outer_pressed,
        }
    }

    fn reset(&mut self) {
        self.inner_pressed = false;
        self.outer_pressed = false;
    }
}


#[cfg(test)]
fn session_with(notes: Vec<HitObject>) -> TestSession {
    let mut session = TestSession::new(PlayMode::Taiko, Chart::new(ChartMetadata::default(), notes, Vec::new()).unwrap());
    session.tick(0.0);
    session
}

#[test]
fn color_must_match() {
    let mut session = session_with(vec![
        HitObject::tap(0.0, 0.0, 1000.0),
        HitObject::tap(0.0, 0.0, 1100.0).with_hitsound(HITSOUND_CLAP),
    ]);

    // kat on a don does nothing, and leaves the don alone
    session.tap(KeyPress::LeftKat, 1000.0);
    assert!(!session.note(0).is_done());
    assert!(!session.note(1).is_done());
    assert_eq!(session.score().total_judged(), 0);

    session.tap(KeyPress::RightDon, 1000.0);
    assert!(session.note(0).resolved);

    session.tap(KeyPress::RightKat, 1170.0);
    assert!(session.note(1).resolved);
    assert_eq!((session.score().x300, session.score().x100), (1, 1));
}

#[test]
fn classes_and_finishers() {
    let don = HitObject::tap(0.0, 0.0, 0.0);
    let whistle = HitObject::tap(0.0, 0.0, 0.0).with_hitsound(HITSOUND_WHISTLE);
    let big_don = HitObject::tap(0.0, 0.0, 0.0).with_hitsound(HITSOUND_FINISH);
    assert_eq!(HitType::of(&don), HitType::Don);
    assert_eq!(HitType::of(&whistle), HitType::Kat);
    assert_eq!(HitType::of(&big_don), HitType::Don);
    assert!(is_finisher(&big_don) && !is_finisher(&whistle));
    assert_eq!(HitType::from_key(KeyPress::Left), None);
}

#[test]
fn scroll_position_misses() {
    let mut session = session_with(vec![HitObject::tap(0.0, 0.0, 1000.0)]);

    session.tick(1140.0);
    assert!(!session.note(0).missed);
    session.tick(1160.0);
    assert!(session.note(0).missed);
    assert_eq!(session.score().xmiss, 1);

    // the scroll proxy agrees with the timing windows
    let game = TaikoGame::new(&session.manager.chart, &TaikoSettings::default());
    let note = session.note(0);
    let miss_x = HIT_POSITION_X - 150.0 * game.scroll_speed();
    assert!(game.note_x(note, 1149.0) > miss_x);
    assert!(game.note_x(note, 1151.0) < miss_x);
    assert_eq!(game.note_x(note, 1000.0), HIT_POSITION_X);
}

#[test]
fn spinner_takes_any_hit() {
    let mut session = session_with(vec![HitObject::spin(1000.0, 2000.0), HitObject::tap(0.0, 0.0, 3000.0)]);

    // too early
    session.tap(KeyPress::LeftKat, 900.0);
    assert!(!session.note(0).resolved);

    session.tick(1500.0);
    session.tap(KeyPress::LeftKat, 1500.0);
    assert!(session.note(0).resolved);
    assert_eq!(session.score().x300, 1);
}

#[test]
fn unhit_spinner_misses_after_its_end() {
    let mut session = session_with(vec![HitObject::spin(1000.0, 2000.0)]);
    session.tick(2100.0);
    assert!(!session.note(0).missed);
    session.tick(2200.0);
    assert!(session.note(0).missed);
}

#[test]
fn drum_state_for_renderer() {
    let mut session = session_with(vec![HitObject::tap(0.0, 0.0, 1000.0)]);
    session.press(KeyPress::LeftDon, 500.0);
    session.tick(500.0);

    match session.manager.render_info() {
        GameModeRenderInfo::Taiko { inner_pressed, outer_pressed, scroll_speed, .. } => {
            assert!(inner_pressed && !outer_pressed);
            assert!((scroll_speed - BASE_SCROLL_SPEED * 1.4).abs() < 0.0001);
        }
        other => panic!("wrong render info {other:?}"),
    }
}
