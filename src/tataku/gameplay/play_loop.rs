use crate::prelude::*;
use tokio::sync::watch;

/// drives a session: one tick per display frame until it finishes or gets cancelled
pub struct PlayLoop {
    manager: IngameManager,
    frame_time: Duration,
    cancel: watch::Receiver<bool>,
    inputs: AsyncUnboundedReceiver<InputEvent>,
}

/// the outside's way into a running `PlayLoop`
#[derive(Clone)]
pub struct PlayLoopHandle {
    cancel: Arc<watch::Sender<bool>>,
    inputs: AsyncUnboundedSender<InputEvent>,
}
impl PlayLoopHandle {
    /// stop the session at the start of the next frame
    pub fn stop(&self) {
        self.cancel.send_replace(true);
    }

    /// send a raw input event. presses are judged as soon as the loop receives them, not on the next frame
    pub fn input(&self, event: InputEvent) {
        if self.inputs.send(event).is_err() {
            debug!("input sent after the play loop ended");
        }
    }
}

impl PlayLoop {
    pub fn new(manager: IngameManager, fps: f32) -> (Self, PlayLoopHandle) {
        let (cancel_sender, cancel) = watch::channel(false);
        let (input_sender, inputs) = async_unbounded_channel();

        let frame_time = Duration::from_secs_f32(1.0 / fps.max(1.0));
        let play_loop = Self { manager, frame_time, cancel, inputs };
        let handle = PlayLoopHandle {
            cancel: Arc::new(cancel_sender),
            inputs: input_sender,
        };

        (play_loop, handle)
    }

    pub fn manager(&self) -> &IngameManager { &self.manager }
    pub fn manager_mut(&mut self) -> &mut IngameManager { &mut self.manager }

    /// run until finished or stopped, then hand the session back
    pub async fn run(mut self) -> TatakuResult<IngameManager> {
        if self.manager.state() == SessionState::Loaded {
            self.manager.start()?;
        }

        let mut interval = tokio::time::interval(self.frame_time);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if *self.cancel.borrow() {
                        self.manager.stop();
                        break;
                    }

                    self.manager.update();
                    if !self.manager.is_active() { break }
                }

                // between frames, at the clock time it arrives
                Some(event) = self.inputs.recv() => {
                    if *self.cancel.borrow() { continue }
                    self.manager.handle_input(&event);
                }
            }
        }

        debug!("play loop exited ({:?})", self.manager.state());
        Ok(self.manager)
    }
}


#[tokio::test(start_paused = true)]
async fn play_loop_runs_to_the_end() {
    let chart = Chart::new(ChartMetadata::default(), vec![
        HitObject::tap(256.0, 192.0, 1000.0),
        HitObject::tap(256.0, 192.0, 1500.0),
    ], Vec::new()).unwrap();
    let duration = chart.duration();

    let audio = Arc::new(ManualAudio::new());
    let mut manager = manager_from_playmode(PlayMode::Osu, chart, &Settings::default(), audio.clone()).unwrap();
    let mut updates = manager.subscribe();
    manager.start().unwrap();

    // the song is already over by the first frame
    let end = manager.clock().map(|c| c.position_for(duration + 10.0)).unwrap();
    audio.set_position(end);

    let (play_loop, _handle) = PlayLoop::new(manager, 240.0);
    let manager = play_loop.run().await.unwrap();
    assert_eq!(manager.state(), SessionState::Finished);

    let mut last = None;
    while let Ok(update) = updates.try_recv() { last = Some(update) }
    match last {
        Some(ScoreUpdate::Final(score)) => {
            assert_eq!(score.xmiss, 2);
            assert_eq!(score.score, 0);
        }
        other => panic!("expected final score, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn play_loop_can_be_stopped() {
    let audio = Arc::new(ManualAudio::new());
    let manager = manager_from_playmode(PlayMode::Taiko, single_note_chart(HitObject::tap(0.0, 0.0, 1000.0)), &Settings::default(), audio.clone()).unwrap();

    let (play_loop, handle) = PlayLoop::new(manager, 60.0);
    let task = tokio::spawn(play_loop.run());

    // the clock never moves, so this would run forever
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.stop();

    let manager = task.await.unwrap().unwrap();
    assert_eq!(manager.state(), SessionState::Stopped);
    assert!(audio.is_stopped());

    // nothing is listening anymore
    handle.input(InputEvent::KeyDown("f".to_owned()));
}

#[tokio::test(start_paused = true)]
async fn presses_are_judged_when_they_arrive() {
    let audio = Arc::new(ManualAudio::new());
    let mut manager = manager_from_playmode(PlayMode::Taiko, single_note_chart(HitObject::tap(0.0, 0.0, 1000.0)), &Settings::default(), audio.clone()).unwrap();
    manager.start().unwrap();
    let clock_at = |time: f32| manager.clock().map(|c| c.position_for(time)).unwrap();
    let (at_990, at_1000, at_1090) = (clock_at(990.0), clock_at(1000.0), clock_at(1090.0));
    audio.set_position(at_990);

    // 10 fps, so a frame is 100ms
    let (play_loop, handle) = PlayLoop::new(manager, 10.0);
    let task = tokio::spawn(play_loop.run());
    tokio::time::sleep(Duration::from_millis(10)).await;

    // press exactly on the note, then the song moves on before the next frame
    audio.set_position(at_1000);
    handle.input(InputEvent::KeyDown("f".to_owned()));
    tokio::time::sleep(Duration::from_millis(10)).await;
    audio.set_position(at_1090);
    tokio::time::sleep(Duration::from_millis(200)).await;

    handle.stop();
    let manager = task.await.unwrap().unwrap();
    let score = manager.score();
    assert_eq!((score.x300, score.x100), (1, 0));
    assert!(score.hit_timings[0].abs() < 1.0);
}
