use crate::prelude::*;

/// first chart index that isnt both done and expired.
///
/// never goes backwards, and only the object sitting exactly at the cursor can move it,
/// so it never skips an object that still needs judging
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteCursor {
    index: usize,
}
impl NoteCursor {
    pub fn new() -> Self { Self::default() }
    pub fn index(&self) -> usize { self.index }

    /// step past every object at the cursor that is judged and has been gone long enough
    pub fn advance(&mut self, notes: &[HitObject], time: f32) {
        while let Some(note) = notes.get(self.index) {
            if !note.is_done() || time <= note.end_time + LINGER_TIME { break }

            trace!("cursor passing note {} at {time}", note.id);
            self.index += 1;
        }
    }

    /// has the cursor passed every object
    pub fn finished(&self, notes: &[HitObject]) -> bool {
        self.index >= notes.len()
    }

    /// indices from the cursor up to the last object whose time has come
    pub fn due(&self, notes: &[HitObject], time: f32) -> Range<usize> {
        let start = self.index.min(notes.len());
        let count = notes[start..].partition_point(|n| n.time <= time);
        start..start + count
    }

    /// the object a press at `time` should be tested against.
    ///
    /// looks at most `LOOKAHEAD` objects past the cursor, skipping judged ones and ones `matches` rejects.
    /// the first object whose head is within `widest` of `time` is the candidate
    pub fn find_hittable(&self, notes: &[HitObject], time: f32, widest: f32, mut matches: impl FnMut(&HitObject) -> bool) -> Option<usize> {
        for (i, note) in notes.iter().enumerate().skip(self.index).take(LOOKAHEAD) {
            if note.is_done() || !matches(note) { continue }

            // sorted, so everything after this is even further away
            if note.time - time > widest { break }
            // too late for this one, miss detection will get it
            if time - note.time > widest { continue }

            return Some(i)
        }

        None
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}


#[cfg(test)]
fn taps(times: &[f32]) -> Vec<HitObject> {
    times.iter().enumerate().map(|(i, t)| HitObject { id: i, ..HitObject::tap(0.0, 0.0, *t) }).collect()
}

#[test]
fn cursor_waits_for_linger() {
    let mut notes = taps(&[100.0, 200.0, 300.0]);
    let mut cursor = NoteCursor::new();

    cursor.advance(&notes, 1000.0);
    assert_eq!(cursor.index(), 0, "nothing judged yet");

    notes[0].resolved = true;
    notes[2].missed = true;
    cursor.advance(&notes, 100.0 + LINGER_TIME);
    assert_eq!(cursor.index(), 0, "still lingering");

    cursor.advance(&notes, 100.0 + LINGER_TIME + 1.0);
    assert_eq!(cursor.index(), 1);

    // note 2 is done but note 1 isnt, so the cursor stays
    cursor.advance(&notes, 5000.0);
    assert_eq!(cursor.index(), 1);

    notes[1].resolved = true;
    cursor.advance(&notes, 5000.0);
    assert_eq!(cursor.index(), 3);
    assert!(cursor.finished(&notes));
}

#[test]
fn due_range() {
    let notes = taps(&[100.0, 200.0, 200.0, 300.0]);
    let cursor = NoteCursor::new();
    assert_eq!(cursor.due(&notes, 50.0), 0..0);
    assert_eq!(cursor.due(&notes, 200.0), 0..3);
    assert_eq!(cursor.due(&notes, 1000.0), 0..4);
}

#[test]
fn find_hittable_bounds() {
    let mut notes = taps(&[1000.0, 1100.0, 1400.0]);
    let cursor = NoteCursor::new();

    // too early for anything
    assert_eq!(cursor.find_hittable(&notes, 800.0, 150.0, |_| true), None);
    assert_eq!(cursor.find_hittable(&notes, 1000.0, 150.0, |_| true), Some(0));

    // the first one is too late, the second is fine
    assert_eq!(cursor.find_hittable(&notes, 1200.0, 150.0, |_| true), Some(1));

    notes[0].resolved = true;
    assert_eq!(cursor.find_hittable(&notes, 1000.0, 150.0, |_| true), Some(1));
    assert_eq!(cursor.find_hittable(&notes, 1000.0, 150.0, |n| n.time > 1200.0), None);

    // only LOOKAHEAD objects are ever looked at
    let mut many = taps(&(0..20).map(|i| 1000.0 + i as f32).collect::<Vec<_>>());
    many.iter_mut().take(LOOKAHEAD).for_each(|n| n.resolved = true);
    assert_eq!(cursor.find_hittable(&many, 1000.0, 150.0, |_| true), None);
}
