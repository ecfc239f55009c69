use crate::prelude::*;

/// how long after the last object ends before the map counts as over (ms)
pub const CHART_END_PADDING:f32 = 1000.0;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartMetadata {
    pub title: String,
    pub artist: String,
    pub version: String,
    /// the mode this chart was made for
    pub mode: String,

    /// approach rate
    pub ar: f32,
    /// circle size. lane count for mania charts lives in `lane_count`
    pub cs: f32,
    pub od: f32,

    pub slider_multiplier: f32,
    pub lane_count: u8,
}
impl Default for ChartMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            version: String::new(),
            mode: "osu".to_owned(),
            ar: 5.0,
            cs: 5.0,
            od: 5.0,
            slider_multiplier: 1.4,
            lane_count: 4,
        }
    }
}


/// a sorted, validated list of hit objects plus what's needed to play them.
///
/// play state lives on the objects themselves, so a session must own its own copy
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub metadata: ChartMetadata,
    pub notes: Vec<HitObject>,
    #[serde(default)]
    pub timing_points: Vec<TimingPoint>,
}
impl Chart {
    pub fn new(metadata: ChartMetadata, mut notes: Vec<HitObject>, mut timing_points: Vec<TimingPoint>) -> TatakuResult<Self> {
        if notes.is_empty() { return Err(BeatmapError::NoNotes.into()) }
        if let Some(i) = notes.windows(2).position(|w| w[1].time < w[0].time) {
            return Err(BeatmapError::Unsorted(i + 1).into())
        }
        if !(1..=9).contains(&metadata.lane_count) {
            return Err(BeatmapError::InvalidLaneCount(metadata.lane_count).into())
        }
        if metadata.mode.parse::<PlayMode>().is_err() {
            return Err(BeatmapError::UnsupportedMode.into())
        }

        timing_points.sort_by(|a, b| a.time.total_cmp(&b.time));
        if timing_points.is_empty() {
            timing_points.push(TimingPoint::default());
        }

        let mut chart = Self { metadata, notes: Vec::new(), timing_points };
        for (id, note) in notes.iter_mut().enumerate() {
            note.id = id;
            note.repeat_count = note.repeat_count.max(1);
            note.end_time = match note.kind {
                NoteType::Tap => note.time,
                NoteType::Hold if note.end_time <= note.time && note.length > 0.0 => note.time + chart.hold_duration(note),
                _ => note.end_time.max(note.time),
            };
            note.reset();
        }
        chart.notes = notes;

        trace!("chart built with {} notes, {} timing points", chart.notes.len(), chart.timing_points.len());
        Ok(chart)
    }

    /// parse a chart from json, then validate it
    pub fn from_json(json: &str) -> TatakuResult<Self> {
        let chart: Chart = serde_json::from_str(json)?;
        Self::new(chart.metadata, chart.notes, chart.timing_points)
    }
    pub fn load(path: impl AsRef<Path>) -> TatakuResult<Self> {
        let path = path.as_ref();
        debug!("loading chart from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// the uninherited point in effect at `time`
    pub fn control_point_at(&self, time: f32) -> TimingPoint {
        self.timing_points
            .iter()
            .filter(|tp| !tp.is_inherited())
            .take_while(|tp| tp.time <= time)
            .last()
            .or_else(|| self.timing_points.iter().find(|tp| !tp.is_inherited()))
            .copied()
            .unwrap_or_default()
    }

    /// the sv multiplier in effect at `time`. an uninherited point resets it to 1
    pub fn sv_multiplier_at(&self, time: f32) -> f32 {
        self.timing_points
            .iter()
            .take_while(|tp| tp.time <= time)
            .last()
            .map(|tp| tp.sv_multiplier())
            .unwrap_or(1.0)
    }

    /// how long a hold takes to travel its whole path, all repeats included
    pub fn hold_duration(&self, note: &HitObject) -> f32 {
        let beat_length = self.control_point_at(note.time).beat_length;
        let velocity = self.metadata.slider_multiplier * 100.0 * self.sv_multiplier_at(note.time);
        if velocity <= 0.0 { return 0.0 }

        note.length * note.repeat_count as f32 / velocity * beat_length
    }

    /// when is the map over (ms)
    pub fn duration(&self) -> f32 {
        self.notes.iter().map(|n| n.end_time).fold(0.0, f32::max) + CHART_END_PADDING
    }

    /// how long before its time an object appears
    pub fn approach_time(&self) -> f32 {
        map_difficulty(self.metadata.ar, 1800.0, 1200.0, 450.0)
    }

    /// object radius in chart px
    pub fn radius(&self) -> f32 {
        54.4 - 4.48 * self.metadata.cs
    }

    /// should this object be drawn at `time`
    pub fn is_visible(&self, note: &HitObject, time: f32) -> bool {
        time >= note.time - self.approach_time() && time <= note.end_time + LINGER_TIME
    }

    /// clear all play state
    pub fn reset(&mut self) {
        self.notes.iter_mut().for_each(HitObject::reset);
    }
}


#[cfg(test)]
fn notes(times: &[f32]) -> Vec<HitObject> {
    times.iter().map(|t| HitObject::tap(100.0, 100.0, *t)).collect()
}

#[test]
fn chart_validation() {
    let meta = ChartMetadata::default();

    assert!(matches!(Chart::new(meta.clone(), Vec::new(), Vec::new()), Err(TatakuError::Beatmap(BeatmapError::NoNotes))));
    assert!(matches!(Chart::new(meta.clone(), notes(&[0.0, 500.0, 200.0]), Vec::new()), Err(TatakuError::Beatmap(BeatmapError::Unsorted(2)))));

    let bad_lanes = ChartMetadata { lane_count: 0, ..meta.clone() };
    assert!(matches!(Chart::new(bad_lanes, notes(&[0.0]), Vec::new()), Err(TatakuError::Beatmap(BeatmapError::InvalidLaneCount(0)))));

    let bad_mode = ChartMetadata { mode: "typing".to_owned(), ..meta.clone() };
    assert!(matches!(Chart::new(bad_mode, notes(&[0.0]), Vec::new()), Err(TatakuError::Beatmap(BeatmapError::UnsupportedMode))));

    // equal times are fine
    let chart = Chart::new(meta, notes(&[0.0, 100.0, 100.0]), Vec::new()).unwrap();
    assert_eq!(chart.notes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(chart.duration(), 100.0 + CHART_END_PADDING);
}

#[test]
fn hold_end_time_is_derived() {
    // 1.0 multiplier, 500ms beats, 100px path = one beat
    let meta = ChartMetadata { slider_multiplier: 1.0, ..Default::default() };
    let mut hold = HitObject::hold(0.0, 0.0, 1000.0, 0.0, vec![Vector2::new(100.0, 0.0)]).with_repeats(2);
    hold.length = 100.0;
    let spin = HitObject::spin(3000.0, 2000.0);

    let chart = Chart::new(meta, vec![hold.clone(), spin], vec![TimingPoint::new(0.0, 500.0)]).unwrap();
    assert_eq!(chart.notes[0].end_time, 2000.0);
    // broken end times get clamped
    assert_eq!(chart.notes[1].end_time, 3000.0);

    // doubled sv halves the duration
    let meta = ChartMetadata { slider_multiplier: 1.0, ..Default::default() };
    let chart = Chart::new(meta, vec![hold], vec![TimingPoint::new(0.0, 500.0), TimingPoint::new(500.0, -50.0)]).unwrap();
    assert_eq!(chart.notes[0].end_time, 1500.0);
}

#[test]
fn chart_from_json() {
    let json = r#"{
        "metadata": { "ar": 5.0, "cs": 4.0 },
        "notes": [
            { "kind": "Tap", "x": 256.0, "y": 192.0, "time": 1000.0 },
            { "kind": "Hold", "x": 100.0, "time": 2000.0, "end_time": 2500.0, "path": [[300.0, 0.0]] }
        ]
    }"#;
    let chart = Chart::from_json(json).unwrap();
    assert_eq!(chart.notes.len(), 2);
    assert_eq!(chart.notes[0].end_time, 1000.0);
    assert_eq!(chart.notes[1].tail_pos(), Vector2::new(300.0, 0.0));
    assert_eq!(chart.approach_time(), 1200.0);
    assert!(chart.is_visible(&chart.notes[0], 0.0));
    assert!(!chart.is_visible(&chart.notes[0], -300.0));
}
