use crate::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// built, song not scheduled yet
    Loaded,
    /// song scheduled, still in the lead-in
    Scheduled,
    Running,
    /// every object is done and the map is over. the final score has been sent
    Finished,
    /// quit early. no final score
    Stopped,
}


/// one play session.
///
/// owns its own copy of the chart (play state is written onto the objects), the cursor,
/// the score, and the mode's engine. the renderer gets read access through the accessors,
/// every write goes through the engine
pub struct IngameManager {
    pub chart: Chart,
    pub playmode: PlayMode,
    pub gamemode: Box<dyn GameMode>,

    pub score: Score,
    pub cursor: NoteCursor,
    pub hit_windows: HitWindows,

    pub input: InputManager,
    pub key_counter: KeyCounter,

    pub replay: Replay,
    pub replaying: bool,
    /// if in replay mode, what replay frame are we at?
    replay_frame: usize,

    pub logging: LoggingSettings,

    song: Arc<dyn AudioInstance>,
    clock: Option<GameClock>,
    state: SessionState,
    /// map time of the last tick
    last_time: f32,

    score_senders: Vec<AsyncUnboundedSender<ScoreUpdate>>,
}
impl IngameManager {
    pub fn new(chart: Chart, playmode: PlayMode, gamemode: Box<dyn GameMode>, bindings: KeyBindings, song: Arc<dyn AudioInstance>) -> Self {
        let key_counter = KeyCounter::new(bindings.bound_keys());

        Self {
            chart,
            playmode,
            gamemode,

            score: Score::new(playmode),
            cursor: NoteCursor::new(),
            hit_windows: HitWindows::default(),

            input: InputManager::new(bindings),
            key_counter,

            replay: Replay::new(playmode),
            replaying: false,
            replay_frame: 0,

            logging: LoggingSettings::default(),

            song,
            clock: None,
            state: SessionState::Loaded,
            last_time: 0.0,

            score_senders: Vec::new(),
        }
    }

    /// schedule the song. the session starts in the lead-in
    pub fn start(&mut self) -> TatakuResult {
        if self.state != SessionState::Loaded {
            warn!("tried to start a session that was already {:?}", self.state);
            return Ok(());
        }

        let clock = GameClock::schedule(self.song.clone())?;
        self.last_time = clock.now();
        self.clock = Some(clock);
        self.state = SessionState::Scheduled;
        info!("starting {} session with {} notes", self.playmode.display_name(), self.chart.notes.len());
        Ok(())
    }

    /// one frame: read the clock, then continuous input, miss detection, cursor, finish check
    pub fn update(&mut self) {
        if !self.is_active() { return }
        let time = self.time();

        // replay frames due by now go in first
        if self.replaying {
            self.feed_replay(time);
        }

        let frame_delta = (time - self.last_time).max(0.0);
        self.last_time = self.last_time.max(time);

        let mut gamemode = std::mem::take(&mut self.gamemode);
        gamemode.continuous_input(self, time, frame_delta);
        gamemode.tick_miss_detection(self, time);
        self.gamemode = gamemode;

        self.advance_cursor();

        if self.state == SessionState::Scheduled && time >= 0.0 {
            debug!("lead-in over");
            self.state = SessionState::Running;
        }

        if self.cursor.finished(&self.chart.notes) && time > self.chart.duration() {
            self.finish();
        }
    }

    /// move the cursor past anything done and expired. safe to call from the render side too
    pub fn advance_cursor(&mut self) {
        self.cursor.advance(&self.chart.notes, self.last_time);
    }

    fn finish(&mut self) {
        self.score.time = chrono::Utc::now().timestamp();
        self.state = SessionState::Finished;
        self.replay.score_data = Some(self.score.clone());

        info!("session finished: {} points, {:.2}% accuracy, {}x max combo", self.score.score, self.score.accuracy, self.score.max_combo);
        self.send_score(ScoreUpdate::Final(self.score.clone()));
    }

    /// quit. stops the song, no final score is sent
    pub fn stop(&mut self) {
        if matches!(self.state, SessionState::Finished | SessionState::Stopped) { return }

        info!("session stopped at {:.2}", self.last_time);
        self.state = SessionState::Stopped;
        self.song.stop();
    }

    /// back to the state right after `new`, keeping subscribers and any replay being watched.
    /// the song is stopped, so a restart needs a new one from `set_song`
    pub fn reset(&mut self) {
        if self.clock.is_some() { self.song.stop() }

        self.chart.reset();
        self.cursor.reset();
        self.score = Score::new(self.playmode);
        self.input.reset();
        self.key_counter.reset();
        self.gamemode.reset();

        if !self.replaying {
            self.replay = Replay::new(self.playmode);
        }
        self.replay_frame = 0;

        self.clock = None;
        self.state = SessionState::Loaded;
        self.last_time = 0.0;
    }

    pub fn set_song(&mut self, song: Arc<dyn AudioInstance>) {
        if self.is_active() {
            warn!("cant swap the song of a running session");
            return;
        }
        self.song = song;
    }
}

// Input Handlers
impl IngameManager {
    /// a raw host event. ignored while replaying
    pub fn handle_input(&mut self, event: &InputEvent) {
        if !self.is_active() || self.replaying { return }

        let Some(frame) = self.input.handle(event) else { return };
        let time = self.time();
        self.handle_frame(frame, time);
    }

    /// an already classified input. press edges get judged right away, everything else waits for the next tick
    pub fn handle_frame(&mut self, frame: ReplayFrame, time: f32) {
        if !self.is_active() { return }
        if self.logging.input_logging { debug!("input {frame:?} at {time:.2}") }

        self.input.track(frame);
        match frame {
            ReplayFrame::Press(k) => self.key_counter.key_down(k),
            ReplayFrame::Release(k) => self.key_counter.key_up(k),
            _ => {}
        }

        if !self.replaying {
            self.replay.add(time, frame);
        }

        if let ReplayFrame::Press(key) = frame {
            let mut gamemode = std::mem::take(&mut self.gamemode);
            gamemode.discrete_input(self, key, time);
            self.gamemode = gamemode;
        }
    }

    /// play `replay` instead of listening to live input
    pub fn set_replay(&mut self, replay: Replay) {
        self.replay = replay;
        self.replaying = true;
        self.replay_frame = 0;
    }

    /// apply every replay frame due by `time`, each at its own time
    pub fn feed_replay(&mut self, time: f32) {
        while let Some(&(frame_time, frame)) = self.replay.frames.get(self.replay_frame) {
            if frame_time > time { break }

            self.replay_frame += 1;
            self.handle_frame(frame, frame_time);
        }
    }
}

// Judgments
impl IngameManager {
    pub fn add_judgment(&mut self, judgment: &dyn HitJudgments) {
        self.score.apply(judgment);

        if self.logging.judgment_logging {
            debug!("{} ({}x combo, {} points)", judgment.as_str_display(), self.score.combo, self.score.score);
        }
        self.send_score(ScoreUpdate::Live(self.score.clone()));
    }

    /// grade a hit on a note by its timing. resolves it if its within the windows
    pub fn check_judgment<HJ: HitJudgments + From<HitTier>>(&mut self, index: usize, time: f32) -> Option<HJ> {
        let note = self.chart.notes.get(index)?;
        if note.is_done() { return None }

        let diff = time - note.time;
        let judgment = HJ::from(self.hit_windows.tier_for(diff)?);

        trace!("note {index} hit {diff:.2}ms off: {judgment:?}");
        self.resolve_note(index, &judgment);
        self.score.add_hit_timing(diff);
        Some(judgment)
    }

    /// resolve a note with a judgment that doesnt depend on timing (slider follow, spinner, catch)
    pub fn resolve_note(&mut self, index: usize, judgment: &dyn HitJudgments) {
        let Some(note) = self.chart.notes.get_mut(index) else { return };
        if note.is_done() { return }
        note.resolved = true;
        let hitsound = note.hitsound;

        self.play_hitsound(hitsound);
        self.add_judgment(judgment);
    }

    pub fn miss_note(&mut self, index: usize, judgment: &dyn HitJudgments) {
        let Some(note) = self.chart.notes.get_mut(index) else { return };
        if note.is_done() { return }
        note.missed = true;

        trace!("note {index} missed");
        self.add_judgment(judgment);
    }

    pub fn play_hitsound(&self, hitsound: u8) {
        self.song.play_sample("normal");
        for (bit, name) in [(HITSOUND_WHISTLE, "whistle"), (HITSOUND_FINISH, "finish"), (HITSOUND_CLAP, "clap")] {
            if hitsound & bit > 0 {
                self.song.play_sample(name);
            }
        }
    }

    /// live score updates after every judgment, then the final score
    pub fn subscribe(&mut self) -> AsyncUnboundedReceiver<ScoreUpdate> {
        let (sender, receiver) = async_unbounded_channel();
        self.score_senders.push(sender);
        receiver
    }

    fn send_score(&mut self, update: ScoreUpdate) {
        // drop anyone who stopped listening
        self.score_senders.retain(|s| s.send(update.clone()).is_ok());
    }
}

// Getters
impl IngameManager {
    /// current map time in ms
    pub fn time(&self) -> f32 {
        self.clock.as_ref().map(|c| c.now()).unwrap_or(self.last_time)
    }

    pub fn clock(&self) -> Option<&GameClock> { self.clock.as_ref() }
    pub fn song(&self) -> &Arc<dyn AudioInstance> { &self.song }
    pub fn state(&self) -> SessionState { self.state }
    pub fn notes(&self) -> &[HitObject] { &self.chart.notes }
    pub fn cursor(&self) -> usize { self.cursor.index() }
    pub fn score(&self) -> &Score { &self.score }
    pub fn render_info(&self) -> GameModeRenderInfo { self.gamemode.render_info() }

    /// is the session taking input and ticking
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Scheduled | SessionState::Running)
    }
}


/// a session on a hand-driven clock
#[cfg(test)]
pub struct TestSession {
    pub manager: IngameManager,
    pub audio: Arc<ManualAudio>,
}
#[cfg(test)]
impl TestSession {
    pub fn new(playmode: PlayMode, chart: Chart) -> Self {
        let audio = Arc::new(ManualAudio::new());
        let mut manager = manager_from_playmode(playmode, chart, &Settings::default(), audio.clone()).unwrap();
        manager.start().unwrap();
        Self { manager, audio }
    }

    /// move the song to `time` and run a frame
    pub fn tick(&mut self, time: f32) {
        if let Some(pos) = self.manager.clock().map(|c| c.position_for(time)) {
            self.audio.set_position(pos);
        }
        self.manager.update();
    }
    /// run frames from the current time up to `time`
    pub fn run_until(&mut self, time: f32, step: f32) {
        let mut t = self.manager.time() + step;
        while t < time {
            self.tick(t);
            t += step;
        }
        self.tick(time);
    }

    pub fn press(&mut self, key: KeyPress, time: f32) {
        self.manager.handle_frame(ReplayFrame::Press(key), time);
    }
    pub fn release(&mut self, key: KeyPress, time: f32) {
        self.manager.handle_frame(ReplayFrame::Release(key), time);
    }
    pub fn tap(&mut self, key: KeyPress, time: f32) {
        self.press(key, time);
        self.release(key, time);
    }
    pub fn mouse(&mut self, x: f32, y: f32, time: f32) {
        self.manager.handle_frame(ReplayFrame::MousePos(x, y), time);
    }

    pub fn score(&self) -> &Score { self.manager.score() }
    pub fn note(&self, index: usize) -> &HitObject { &self.manager.notes()[index] }
}

#[cfg(test)]
pub fn single_note_chart(note: HitObject) -> Chart {
    Chart::new(ChartMetadata::default(), vec![note], Vec::new()).unwrap()
}

#[test]
fn session_lifecycle() {
    let mut session = TestSession::new(PlayMode::Osu, single_note_chart(HitObject::tap(256.0, 192.0, 1000.0)));
    let mut updates = session.manager.subscribe();
    assert_eq!(session.manager.state(), SessionState::Scheduled);
    assert!(session.manager.time() < 0.0);
    session.mouse(256.0, 192.0, -500.0);

    session.tick(0.5);
    assert_eq!(session.manager.state(), SessionState::Running);

    session.tap(KeyPress::Left, 1000.0);
    assert_eq!(session.score().score, 300);
    assert_eq!(updates.try_recv().ok().map(|u| matches!(u, ScoreUpdate::Live(_))), Some(true));

    // cursor passes after the linger, the map ends a second after the last note
    session.tick(1000.0 + LINGER_TIME + 1.0);
    assert_eq!(session.manager.cursor(), 1);
    assert_eq!(session.manager.state(), SessionState::Running);

    session.tick(session.manager.chart.duration() + 1.0);
    assert_eq!(session.manager.state(), SessionState::Finished);
    match updates.try_recv() {
        Ok(ScoreUpdate::Final(score)) => {
            assert_eq!(score.score, 300);
            assert!(score.time > 0);
        }
        other => panic!("expected final score, got {other:?}"),
    }

    // nothing happens after the end
    session.tap(KeyPress::Left, 5000.0);
    assert_eq!(session.manager.key_counter.count(KeyPress::Left), 1);
}

#[test]
fn stop_sends_nothing() {
    let mut session = TestSession::new(PlayMode::Osu, single_note_chart(HitObject::tap(256.0, 192.0, 1000.0)));
    let mut updates = session.manager.subscribe();

    session.tick(100.0);
    session.manager.stop();
    assert_eq!(session.manager.state(), SessionState::Stopped);
    assert!(session.audio.is_stopped());

    session.tick(5000.0);
    assert_eq!(session.score().xmiss, 0);
    assert!(updates.try_recv().is_err());
}

#[test]
fn replay_is_recorded_and_plays_back() {
    let chart = Chart::new(ChartMetadata::default(), vec![
        HitObject::tap(256.0, 192.0, 1000.0),
        HitObject::tap(256.0, 192.0, 1500.0),
    ], Vec::new()).unwrap();

    let mut session = TestSession::new(PlayMode::Osu, chart.clone());
    session.mouse(256.0, 192.0, 0.0);
    session.tick(900.0);
    session.tap(KeyPress::Left, 1000.0);
    session.tap(KeyPress::Right, 1560.0);
    session.run_until(chart.duration() + 10.0, 50.0);
    assert_eq!(session.manager.state(), SessionState::Finished);

    let recorded = session.manager.replay.clone();
    assert_eq!(recorded.frames.len(), 5);
    let expected = session.score().clone();
    assert_eq!((expected.x300, expected.x100), (1, 1));

    // play it back on a fresh session
    let mut playback = TestSession::new(PlayMode::Osu, chart.clone());
    playback.manager.set_replay(recorded);
    // live input is ignored while replaying
    playback.manager.handle_input(&InputEvent::KeyDown("z".to_owned()));
    playback.run_until(chart.duration() + 10.0, 50.0);

    assert_eq!(playback.score().score, expected.score);
    assert_eq!(playback.score().x100, 1);
    assert_eq!(playback.manager.replay.frames.len(), 5);
}

#[test]
fn reset_clears_play_state() {
    let mut session = TestSession::new(PlayMode::Osu, single_note_chart(HitObject::tap(256.0, 192.0, 1000.0)));
    session.tick(1200.0);
    assert!(session.note(0).missed);

    session.manager.reset();
    assert_eq!(session.manager.state(), SessionState::Loaded);
    assert!(!session.note(0).missed);
    assert_eq!(session.score().xmiss, 0);
    assert_eq!(session.manager.cursor(), 0);

    // the old song was stopped, a restart needs a new one
    assert!(session.manager.start().is_err());
    assert_eq!(session.manager.state(), SessionState::Loaded);

    let audio = Arc::new(ManualAudio::new());
    session.manager.set_song(audio.clone());
    session.audio = audio;
    session.manager.start().unwrap();
    session.mouse(256.0, 192.0, 0.0);
    session.tick(900.0);
    session.tap(KeyPress::Left, 1000.0);
    assert_eq!(session.score().x300, 1);
}

#[test]
fn hitsounds_follow_the_note() {
    let note = HitObject::tap(0.0, 0.0, 1000.0).with_hitsound(HITSOUND_FINISH);
    let chart = Chart::new(ChartMetadata::default(), vec![
        note,
        HitObject::tap(0.0, 0.0, 1500.0).with_hitsound(HITSOUND_WHISTLE | HITSOUND_CLAP),
        HitObject::tap(0.0, 0.0, 2000.0),
    ], Vec::new()).unwrap();
    let mut session = TestSession::new(PlayMode::Taiko, chart);

    session.tick(1000.0);
    session.tap(KeyPress::LeftDon, 1000.0);
    assert_eq!(session.audio.played_samples(), vec!["normal", "finish"]);

    session.tick(1500.0);
    session.tap(KeyPress::LeftKat, 1500.0);
    assert_eq!(session.audio.played_samples(), vec!["normal", "finish", "normal", "whistle", "clap"]);

    // misses are silent
    session.tick(2200.0);
    assert!(session.note(2).missed);
    assert_eq!(session.audio.played_samples().len(), 5);
}
