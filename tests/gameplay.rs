//! Whole sessions played through the public api, on a hand-driven audio clock.

use tataku_runtime::prelude::*;

struct Session {
    manager: IngameManager,
    audio: Arc<ManualAudio>,
}
impl Session {
    fn new(playmode: PlayMode, chart: Chart) -> Self {
        let audio = Arc::new(ManualAudio::new());
        let mut manager = manager_from_playmode(playmode, chart, &Settings::default(), audio.clone()).unwrap();
        manager.start().unwrap();
        Self { manager, audio }
    }

    /// move the song to `time` and run a frame
    fn tick(&mut self, time: f32) {
        let pos = self.manager.clock().unwrap().position_for(time);
        self.audio.set_position(pos);
        self.manager.update();
    }

    /// a raw key event, at whatever time the song is at
    fn key(&mut self, name: &str) {
        self.manager.handle_input(&InputEvent::KeyDown(name.to_owned()));
        self.manager.handle_input(&InputEvent::KeyUp(name.to_owned()));
    }

    fn mouse(&mut self, x: f32, y: f32) {
        self.manager.handle_input(&InputEvent::MouseMove(Vector2::new(x, y)));
    }
}

fn chart(notes: Vec<HitObject>) -> Chart {
    Chart::new(ChartMetadata::default(), notes, Vec::new()).unwrap()
}

#[test]
fn exact_press_is_a_300() {
    let mut session = Session::new(PlayMode::Osu, chart(vec![HitObject::tap(256.0, 192.0, 1000.0)]));
    assert_eq!(session.manager.chart.approach_time(), 1200.0);
    assert_eq!(session.manager.score().accuracy, 100.0);

    session.mouse(256.0, 192.0);
    session.tick(0.0);
    session.tick(1000.0);
    session.key("z");

    let score = session.manager.score();
    assert_eq!((score.x300, score.combo, score.score), (1, 1, 300));
    assert_eq!(score.accuracy, 100.0);
}

#[test]
fn late_press_is_a_50() {
    let mut session = Session::new(PlayMode::Osu, chart(vec![HitObject::tap(256.0, 192.0, 1000.0)]));

    session.mouse(256.0, 192.0);
    session.tick(0.0);
    session.tick(1120.0);
    session.key("x");

    let score = session.manager.score();
    assert_eq!((score.x50, score.score), (1, 50));
    assert!(score.accuracy < 100.0 && score.accuracy > 0.0);
    assert_eq!(score.hit_timings.len(), 1);
}

#[test]
fn unpressed_note_misses() {
    let mut session = Session::new(PlayMode::Osu, chart(vec![
        HitObject::tap(256.0, 192.0, 500.0),
        HitObject::tap(256.0, 192.0, 1000.0),
    ]));

    session.mouse(256.0, 192.0);
    session.tick(0.0);
    session.tick(500.0);
    session.key("z");
    assert_eq!(session.manager.score().combo, 1);

    session.tick(1140.0);
    assert_eq!(session.manager.score().xmiss, 0);

    session.tick(1160.0);
    let score = session.manager.score();
    assert_eq!(score.xmiss, 1);
    assert_eq!(score.combo, 0);
    assert_eq!(score.max_combo, 1);
    assert!(session.manager.notes()[1].missed);
}

#[test]
fn lane_from_x() {
    let metadata = ChartMetadata { lane_count: 4, mode: "mania".to_owned(), ..Default::default() };
    let chart = Chart::new(metadata, vec![HitObject::tap(400.0, 192.0, 1000.0)], Vec::new()).unwrap();
    let mut session = Session::new(PlayMode::Mania, chart);

    session.tick(1000.0);
    // lane 0 does nothing
    session.key("d");
    assert!(!session.manager.notes()[0].is_done());
    assert_eq!(session.manager.score().total_judged(), 0);

    // lane 3 hits it
    session.key("k");
    assert!(session.manager.notes()[0].resolved);
    assert_eq!(session.manager.score().x300, 1);
}

#[test]
fn one_press_resolves_one_note() {
    let mut session = Session::new(PlayMode::Taiko, chart(vec![
        HitObject::tap(0.0, 0.0, 1000.0),
        HitObject::tap(0.0, 0.0, 1000.0),
        HitObject::tap(0.0, 0.0, 1020.0),
    ]));

    session.tick(1000.0);
    session.key("f");
    assert_eq!(session.manager.score().total_judged(), 1);
    session.key("j");
    assert_eq!(session.manager.score().total_judged(), 2);

    // another frame at the same time changes nothing
    let before = session.manager.score().clone();
    session.tick(1000.0);
    assert_eq!(session.manager.score(), &before);
}

#[test]
fn cursor_and_score_only_move_forward() {
    let notes = (0..20).map(|i| HitObject::tap(256.0, 192.0, 500.0 + i as f32 * 400.0)).collect();
    let mut session = Session::new(PlayMode::Osu, chart(notes));
    session.mouse(256.0, 192.0);
    session.tick(0.0);

    let mut cursor = session.manager.cursor();
    let mut total = session.manager.score().score;
    let mut time = 0.0;
    while session.manager.is_active() {
        time += 16.0;
        session.tick(time);

        // hit every other note
        let due = session.manager.notes().iter().position(|n| !n.is_done() && (n.time - time).abs() <= 8.0);
        if let Some(i) = due.filter(|i| i % 2 == 0) {
            session.key("z");
            assert!(session.manager.notes()[i].resolved);
        }

        let score = session.manager.score();
        assert!(session.manager.cursor() >= cursor);
        assert!(score.score >= total);
        assert!(score.accuracy >= 0.0 && score.accuracy <= 100.0);
        cursor = session.manager.cursor();
        total = score.score;
    }

    assert_eq!(session.manager.state(), SessionState::Finished);
    assert_eq!(session.manager.cursor(), 20);
    let score = session.manager.score();
    assert_eq!(score.total_judged(), 20);
    assert_eq!(score.xmiss, 10);
}

#[test]
fn whole_juice_stream() {
    let metadata = ChartMetadata { cs: 0.0, mode: "catch".to_owned(), ..Default::default() };
    let stream = HitObject::hold(100.0, 192.0, 1000.0, 2000.0, vec![Vector2::new(300.0, 192.0)]);
    let chart = Chart::new(metadata, vec![stream], Vec::new()).unwrap();
    let mut session = Session::new(PlayMode::Catch, chart);

    // walk left to x=200
    session.tick(0.0);
    session.manager.handle_input(&InputEvent::KeyDown("ArrowLeft".to_owned()));
    session.tick(56.0);
    session.manager.handle_input(&InputEvent::KeyUp("ArrowLeft".to_owned()));

    let mut time = 56.0;
    while time < 2200.0 {
        time += 10.0;
        session.tick(time);
    }

    let note = &session.manager.notes()[0];
    assert_eq!(note.caught_droplets.len(), 20);
    assert_eq!(session.manager.score().judgments.get("droplet"), Some(&20));
}
