use crate::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line {
    pub p1: Vector2,
    pub p2: Vector2,
}

/// where a slider's ball is at some time
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderProgress {
    pub position: Vector2,
    /// which pass along the path (0 is head to tail, 1 is back, ...)
    pub segment: u16,
    /// travelling tail to head
    pub reversed: bool,
    /// how far through the current pass, 0..=1. drives the repeat arrow pulse
    pub pulse: f32,
}

/// a slider's path as a polyline, walked back and forth once per repeat
#[derive(Clone, Debug)]
pub struct SliderPath {
    head: Vector2,
    time: f32,
    end_time: f32,
    slides: u16,

    curve_lines: Vec<Line>,
    /// cumulative length at the end of each line
    lengths: Vec<f32>,
}
impl SliderPath {
    pub fn new(note: &HitObject) -> Self {
        let head = note.pos();
        let mut curve_lines = Vec::new();
        let mut lengths = Vec::new();

        let mut total = 0.0;
        let mut p1 = head;
        for &p2 in note.path.iter() {
            // zero length lines dont go anywhere
            if p1 == p2 { continue }

            total += p1.distance(p2);
            curve_lines.push(Line { p1, p2 });
            lengths.push(total);
            p1 = p2;
        }

        Self {
            head,
            time: note.time,
            end_time: note.end_time,
            slides: note.repeat_count.max(1),
            curve_lines,
            lengths,
        }
    }

    /// total length of one pass
    pub fn length(&self) -> f32 {
        self.lengths.last().copied().unwrap_or_default()
    }

    pub fn position_at_length(&self, length: f32) -> Vector2 {
        if self.curve_lines.is_empty() { return self.head }
        if length <= 0.0 { return self.curve_lines[0].p1 }
        if length >= self.length() { return self.curve_lines[self.curve_lines.len() - 1].p2 }

        let i = self.lengths.partition_point(|l| *l < length).min(self.lengths.len() - 1);
        let length_next = self.lengths[i];
        let length_previous = if i == 0 { 0.0 } else { self.lengths[i - 1] };

        let line = self.curve_lines[i];
        if length_next == length_previous { return line.p1 }
        Vector2::lerp(line.p1, line.p2, (length - length_previous) / (length_next - length_previous))
    }

    /// where the ball is at `time`. clamped to the slider's span
    pub fn progress_at(&self, time: f32) -> SliderProgress {
        let duration = self.end_time - self.time;
        if duration <= 0.0 {
            return SliderProgress { position: self.head, segment: 0, reversed: false, pulse: 0.0 }
        }

        let elapsed = (time - self.time).clamp(0.0, duration);
        let span = duration / self.slides as f32;
        let segment = ((elapsed / span) as u16).min(self.slides - 1);
        let pulse = ((elapsed - segment as f32 * span) / span).clamp(0.0, 1.0);
        let reversed = segment % 2 == 1;

        let along = if reversed { 1.0 - pulse } else { pulse };
        SliderProgress {
            position: self.position_at_length(along * self.length()),
            segment,
            reversed,
            pulse,
        }
    }
}


#[test]
fn ping_pong() {
    let note = HitObject::hold(0.0, 0.0, 0.0, 1000.0, vec![Vector2::new(100.0, 0.0)]).with_repeats(2);
    let path = SliderPath::new(&note);

    assert_eq!(path.progress_at(-100.0).position, Vector2::ZERO);
    assert_eq!(path.progress_at(250.0).position, Vector2::new(50.0, 0.0));

    let turn = path.progress_at(500.0);
    assert_eq!(turn.position, Vector2::new(100.0, 0.0));
    assert_eq!((turn.segment, turn.reversed), (1, true));

    assert_eq!(path.progress_at(750.0).position, Vector2::new(50.0, 0.0));
    assert_eq!(path.progress_at(1000.0).position, Vector2::ZERO);
    assert_eq!(path.progress_at(2000.0).segment, 1);
}

#[test]
fn multi_line_path() {
    let note = HitObject::hold(0.0, 0.0, 0.0, 1000.0, vec![Vector2::new(100.0, 0.0), Vector2::new(100.0, 0.0), Vector2::new(100.0, 100.0)]);
    let path = SliderPath::new(&note);

    assert_eq!(path.length(), 200.0);
    assert_eq!(path.progress_at(500.0).position, Vector2::new(100.0, 0.0));
    assert_eq!(path.progress_at(750.0).position, Vector2::new(100.0, 50.0));
    assert_eq!(path.progress_at(1000.0).position, Vector2::new(100.0, 100.0));
}

#[test]
fn degenerate_path() {
    let note = HitObject::hold(30.0, 40.0, 0.0, 1000.0, Vec::new());
    let path = SliderPath::new(&note);
    assert_eq!(path.progress_at(600.0).position, Vector2::new(30.0, 40.0));

    // no duration either
    let note = HitObject::hold(30.0, 40.0, 500.0, 500.0, vec![Vector2::new(0.0, 0.0)]);
    assert_eq!(SliderPath::new(&note).progress_at(500.0).position, Vector2::new(30.0, 40.0));
}
