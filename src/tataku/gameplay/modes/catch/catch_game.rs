use crate::prelude::*;
use rand::{ Rng, SeedableRng, rngs::StdRng };

/// how long after landing something can still be caught (ms)
pub const CATCH_GRACE:f32 = 50.0;
/// ms between bananas during a shower
pub const BANANA_INTERVAL:f32 = 100.0;

/// one droplet of a juice stream
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Droplet {
    pub index: usize,
    pub time: f32,
    pub x: f32,
}

/// the droplets a juice stream drops, evenly spaced in time between its head and tail
pub fn droplets(note: &HitObject, interval: f32) -> Vec<Droplet> {
    let duration = note.duration();
    if note.kind != NoteType::Hold || interval <= 0.0 || duration <= 0.0 { return Vec::new() }

    let count = (duration / interval).floor() as usize;
    let tail_x = note.tail_pos().x;

    (0..count).map(|index| {
        let time = note.time + (index as f32 + 0.5) * interval;
        let x = <f32 as Interpolation>::lerp(note.x, tail_x, (time - note.time) / duration);
        Droplet { index, time, x }
    }).collect()
}


/// a falling banana. not part of the chart
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BananaPickup {
    /// index of the shower that dropped it
    pub shower: usize,
    pub x: f32,
    pub spawn_time: f32,
    /// when it reaches the catcher
    pub arrival_time: f32,
}
impl BananaPickup {
    /// 0 at spawn, 1 at the catcher
    pub fn fall_progress(&self, time: f32) -> f32 {
        let fall = self.arrival_time - self.spawn_time;
        if fall <= 0.0 { return 1.0 }
        ((time - self.spawn_time) / fall).clamp(0.0, 1.0)
    }
}

/// did something arriving at `arrival` reach the catcher during the frame `(prev, time]`,
/// with its grace not already over before the frame started
pub fn lands(arrival: f32, prev: f32, time: f32) -> bool {
    time >= arrival && prev < arrival + CATCH_GRACE
}

struct BananaShower {
    index: usize,
    next_spawn: f32,
    rng: StdRng,
}


pub struct CatchGame {
    catcher: Catcher,
    cs: f32,
    /// extra reach from the fruit's own size
    fruit_tolerance: f32,
    /// how long things take to fall
    fall_time: f32,

    droplets: HashMap<usize, Vec<Droplet>>,
    pickups: Vec<BananaPickup>,
    shower: Option<BananaShower>,
}
impl CatchGame {
    pub fn new(chart: &Chart, settings: &CatchSettings) -> Self {
        let droplets = chart.notes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.kind == NoteType::Hold)
            .map(|(i, n)| (i, droplets(n, settings.droplet_interval)))
            .collect();

        Self {
            catcher: Catcher::new(chart.metadata.cs),
            cs: chart.metadata.cs,
            fruit_tolerance: chart.radius() / 2.0,
            fall_time: chart.approach_time(),

            droplets,
            pickups: Vec::new(),
            shower: None,
        }
    }

    pub fn catcher(&self) -> &Catcher { &self.catcher }
    pub fn droplets_for(&self, index: usize) -> &[Droplet] {
        self.droplets.get(&index).map(|d| d.as_slice()).unwrap_or_default()
    }

    fn catches(&self, x: f32) -> bool {
        self.catcher.catches(x, self.fruit_tolerance)
    }

    fn catch_fruit(&self, manager: &mut IngameManager, index: usize, prev: f32, time: f32) {
        let note = &manager.chart.notes[index];
        if lands(note.time, prev, time) && self.catches(note.x) {
            manager.resolve_note(index, &CatchHitJudgments::Fruit);
        }
    }

    fn catch_juice_stream(&self, manager: &mut IngameManager, index: usize, prev: f32, time: f32) {
        let note = &manager.chart.notes[index];
        let (head_time, head_x, end_time, tail_x) = (note.time, note.x, note.end_time, note.tail_pos().x);
        let hitsound = note.hitsound;

        // head
        if !note.head_judged && lands(head_time, prev, time) && self.catches(head_x) {
            manager.chart.notes[index].head_judged = true;
            manager.play_hitsound(hitsound);
            manager.add_judgment(&CatchHitJudgments::Fruit);
        }

        // droplets, each one only on the frame its landing
        for droplet in self.droplets_for(index).iter().take_while(|d| d.time <= time) {
            if !lands(droplet.time, prev, time) || !self.catches(droplet.x) { continue }

            // already caught
            if !manager.chart.notes[index].caught_droplets.insert(droplet.index) { continue }
            manager.add_judgment(&CatchHitJudgments::Droplet);
        }

        // tail
        let note = &mut manager.chart.notes[index];
        if !note.tail_judged && lands(end_time, prev, time) && self.catches(tail_x) {
            note.tail_judged = true;
            note.tail_caught = true;
            note.resolved = true;
            manager.play_hitsound(hitsound);
            manager.add_judgment(&CatchHitJudgments::Fruit);
        }
    }

    fn spawn_bananas(&mut self, index: usize, note_time: f32, end_time: f32, time: f32) {
        if !matches!(&self.shower, Some(s) if s.index == index) {
            // same chart, same bananas
            let seed = note_time.to_bits() as u64 ^ index as u64;
            self.shower = Some(BananaShower {
                index,
                next_spawn: note_time,
                rng: StdRng::seed_from_u64(seed),
            });
        }
        let Some(shower) = &mut self.shower else { return };

        while shower.next_spawn <= time.min(end_time) {
            self.pickups.push(BananaPickup {
                shower: index,
                x: shower.rng.gen_range(0.0..PLAYFIELD_WIDTH),
                spawn_time: shower.next_spawn,
                arrival_time: shower.next_spawn + self.fall_time,
            });
            shower.next_spawn += BANANA_INTERVAL;
        }
    }

    fn update_pickups(&mut self, manager: &mut IngameManager, time: f32) {
        let mut caught = 0;
        let catcher = self.catcher;
        let tolerance = self.fruit_tolerance;

        self.pickups.retain(|banana| {
            if time < banana.arrival_time { return true }

            if catcher.catches(banana.x, tolerance) {
                caught += 1;
                return false
            }
            // missed bananas just fall off the screen
            time - banana.arrival_time <= CATCH_GRACE
        });

        for _ in 0..caught {
            manager.add_judgment(&CatchHitJudgments::Banana);
        }
    }
}

impl GameMode for CatchGame {
    // catching is positional, keys only move the catcher
    fn discrete_input(&mut self, _manager: &mut IngameManager, _key: KeyPress, _time: f32) {}

    fn continuous_input(&mut self, manager: &mut IngameManager, time: f32, frame_delta: f32) {
        let input = &manager.input;
        self.catcher.update(
            input.is_held(KeyPress::CatchLeft),
            input.is_held(KeyPress::CatchRight),
            input.is_held(KeyPress::Dash),
            frame_delta,
        );

        // where the last frame left off
        let prev = time - frame_delta;

        for index in manager.cursor.due(&manager.chart.notes, time) {
            let note = &manager.chart.notes[index];
            if note.is_done() { continue }

            let (kind, note_time, end_time) = (note.kind, note.time, note.end_time);
            match kind {
                NoteType::Tap => self.catch_fruit(manager, index, prev, time),
                NoteType::Hold => self.catch_juice_stream(manager, index, prev, time),
                NoteType::Spin => self.spawn_bananas(index, note_time, end_time, time),
            }
        }

        self.update_pickups(manager, time);
    }

    fn tick_miss_detection(&mut self, manager: &mut IngameManager, time: f32) {
        for index in manager.cursor.due(&manager.chart.notes, time) {
            let note = &mut manager.chart.notes[index];
            if note.is_done() { continue }

            let kind = note.kind;
            match kind {
                NoteType::Tap => if time - note.time > CATCH_GRACE {
                    manager.miss_note(index, &CatchHitJudgments::Miss);
                }

                NoteType::Hold => {
                    let mut misses = 0;
                    if !note.head_judged && time - note.time > CATCH_GRACE {
                        note.head_judged = true;
                        misses += 1;
                    }
                    if !note.tail_judged && time - note.end_time > CATCH_GRACE {
                        note.tail_judged = true;
                        note.missed = true;
                        misses += 1;
                    }

                    for _ in 0..misses {
                        manager.add_judgment(&CatchHitJudgments::Miss);
                    }
                }

                // bananas never miss. the shower is over once its last banana is gone
                NoteType::Spin => if time > note.end_time && !self.pickups.iter().any(|p| p.shower == index) {
                    note.resolved = true;
                }
            }
        }
    }

    fn render_info(&self) -> GameModeRenderInfo {
        GameModeRenderInfo::Catch {
            catcher_x: self.catcher.x,
            catcher_width: self.catcher.width,
            dashing: self.catcher.dashing,
            pickups: self.pickups.clone(),
        }
    }

    fn reset(&mut self) {
        self.catcher = Catcher::new(self.cs);
        self.pickups.clear();
        self.shower = None;
    }
}


#[cfg(test)]
fn catch_chart(cs: f32, notes: Vec<HitObject>) -> Chart {
    let metadata = ChartMetadata { cs, mode: "catch".to_owned(), ..Default::default() };
    Chart::new(metadata, notes, Vec::new()).unwrap()
}

#[test]
fn droplet_count() {
    let stream = HitObject::hold(100.0, 192.0, 1000.0, 2000.0, vec![Vector2::new(300.0, 192.0)]);
    let list = droplets(&stream, 50.0);

    assert_eq!(list.len(), 20);
    let indices: HashSet<usize> = list.iter().map(|d| d.index).collect();
    assert_eq!(indices.len(), 20);

    // between the head and the tail, in order
    assert!(list.windows(2).all(|w| w[0].time < w[1].time && w[0].x < w[1].x));
    assert!(list.iter().all(|d| d.time > 1000.0 && d.time < 2000.0));
    assert!(list.iter().all(|d| d.x > 100.0 && d.x < 300.0));

    assert!(droplets(&HitObject::tap(0.0, 0.0, 0.0), 50.0).is_empty());
    assert!(droplets(&stream, 0.0).is_empty());
}

#[test]
fn juice_stream_fully_caught() {
    let stream = HitObject::hold(100.0, 192.0, 1000.0, 2000.0, vec![Vector2::new(300.0, 192.0)]);
    let mut session = TestSession::new(PlayMode::Catch, catch_chart(0.0, vec![stream]));

    // walk to the middle of the stream
    session.tick(0.0);
    session.press(KeyPress::CatchLeft, 0.0);
    session.tick(56.0);
    session.release(KeyPress::CatchLeft, 56.0);
    match session.manager.render_info() {
        GameModeRenderInfo::Catch { catcher_x, .. } => assert!((catcher_x - 200.0).abs() < 0.1),
        other => panic!("wrong render info {other:?}"),
    }

    session.run_until(2200.0, 10.0);
    let note = session.note(0);
    assert_eq!(note.caught_droplets.len(), 20);
    assert!(note.tail_caught);
    assert!(note.resolved);

    let score = session.score();
    assert_eq!(score.judgments.get("droplet"), Some(&20));
    assert_eq!(score.judgments.get("fruit"), Some(&2));
    assert_eq!(score.x300, 22);
    assert_eq!(score.xmiss, 0);
    assert_eq!(score.max_combo, 22);
}

#[test]
fn missed_stream_parts() {
    // the catcher never moves from the middle, so only the tail end is reachable
    let stream = HitObject::hold(0.0, 192.0, 1000.0, 2000.0, vec![Vector2::new(256.0, 192.0)]);
    let mut session = TestSession::new(PlayMode::Catch, catch_chart(5.0, vec![stream]));
    session.run_until(2200.0, 10.0);

    let note = session.note(0);
    assert!(note.head_judged);
    assert!(note.tail_caught);
    assert!(!note.caught_droplets.is_empty() && note.caught_droplets.len() < 20);

    // the head is a miss, droplets that fell past arent
    let score = session.score();
    assert_eq!(score.xmiss, 1);
    assert_eq!(score.judgments.get("fruit"), Some(&1));
}

#[test]
fn fruit_caught_or_missed() {
    let chart = catch_chart(5.0, vec![
        HitObject::tap(256.0, 192.0, 1000.0),
        HitObject::tap(0.0, 192.0, 1500.0),
    ]);
    let mut session = TestSession::new(PlayMode::Catch, chart);

    session.run_until(1040.0, 10.0);
    assert!(session.note(0).resolved);
    assert_eq!(session.score().x300, 1);

    // still inside the grace
    session.run_until(1540.0, 10.0);
    assert!(!session.note(1).is_done());

    session.run_until(1560.0, 10.0);
    assert!(session.note(1).missed);
    assert_eq!(session.score().xmiss, 1);
    assert_eq!(session.score().combo, 0);
}

#[test]
fn landing_frames() {
    assert!(lands(1000.0, 990.0, 1000.0));
    // a long frame over the arrival still counts
    assert!(lands(1000.0, 990.0, 1060.0));
    assert!(lands(1000.0, 1049.0, 1200.0));
    // not there yet, or already gone by the last frame
    assert!(!lands(1000.0, 980.0, 999.0));
    assert!(!lands(1000.0, 1050.0, 1070.0));
}

#[test]
fn long_frame_still_catches() {
    let chart = catch_chart(5.0, vec![
        HitObject::tap(256.0, 192.0, 1000.0),
        HitObject::hold(256.0, 192.0, 2000.0, 2400.0, vec![Vector2::new(260.0, 192.0)]),
    ]);
    let mut session = TestSession::new(PlayMode::Catch, chart);

    // one frame jumps right over the fruit's grace window
    session.tick(990.0);
    session.tick(1060.0);
    assert!(session.note(0).resolved);
    assert!(!session.note(0).missed);
    assert_eq!((session.score().x300, session.score().xmiss), (1, 0));

    // same for a whole juice stream in a couple of big steps
    session.tick(1990.0);
    session.tick(2200.0);
    session.tick(2500.0);
    let stream = session.note(1);
    assert!(stream.head_judged && stream.tail_caught);
    assert_eq!(stream.caught_droplets.len(), 8);
    assert_eq!(session.score().xmiss, 0);
}

#[test]
fn banana_shower() {
    let mut session = TestSession::new(PlayMode::Catch, catch_chart(5.0, vec![HitObject::spin(1000.0, 1500.0)]));

    session.run_until(1600.0, 10.0);
    let pickups = match session.manager.render_info() {
        GameModeRenderInfo::Catch { pickups, .. } => pickups,
        other => panic!("wrong render info {other:?}"),
    };
    assert_eq!(pickups.len(), 6);
    assert!(pickups.iter().all(|p| p.x >= 0.0 && p.x < PLAYFIELD_WIDTH));
    assert!(pickups.iter().all(|p| p.arrival_time > 1600.0));
    assert!(!session.note(0).is_done());

    session.run_until(4000.0, 10.0);
    assert!(session.note(0).resolved);
    assert_eq!(session.manager.state(), SessionState::Finished);

    // bananas are pure bonus
    let score = session.score();
    let bananas = score.judgments.get("banana").copied().unwrap_or_default();
    assert!(bananas <= 6);
    assert_eq!(score.score, 100 * bananas as u64);
    assert_eq!(score.xmiss, 0);
    assert_eq!(score.combo, 0);

    match session.manager.render_info() {
        GameModeRenderInfo::Catch { pickups, .. } => assert!(pickups.is_empty()),
        other => panic!("wrong render info {other:?}"),
    }
}

#[test]
fn same_chart_same_bananas() {
    let chart = catch_chart(5.0, vec![HitObject::spin(1000.0, 1500.0)]);
    let positions = |chart: Chart| {
        let mut session = TestSession::new(PlayMode::Catch, chart);
        session.run_until(1600.0, 10.0);
        match session.manager.render_info() {
            GameModeRenderInfo::Catch { pickups, .. } => pickups.iter().map(|p| p.x).collect::<Vec<_>>(),
            _ => Vec::new(),
        }
    };

    assert_eq!(positions(chart.clone()), positions(chart));
}
