use crate::prelude::*;

/// what gets sent out of a session
pub type ScoreData = Score;

/// pushed to subscribers after every judgment, and once more when the session finishes
#[derive(Clone, Debug, PartialEq)]
pub enum ScoreUpdate {
    Live(Score),
    Final(Score),
}


#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Score {
    pub playmode: String,
    /// unix timestamp of when the session finished
    pub time: i64,

    pub score: u64,
    pub combo: u16,
    pub max_combo: u16,

    pub x300: u32,
    pub x100: u32,
    pub x50: u32,
    pub xmiss: u32,

    /// 0..=100
    pub accuracy: f64,

    /// count per judgment, keyed by the judgment's internal name
    pub judgments: HashMap<String, u32>,
    /// signed offset (hit time - object time) of every graded hit
    pub hit_timings: Vec<f32>,
}
impl Score {
    pub fn new(playmode: PlayMode) -> Self {
        Self {
            playmode: playmode.as_str().to_owned(),
            accuracy: 100.0,
            ..Self::default()
        }
    }

    /// fold one judgment in
    pub fn apply(&mut self, judgment: &dyn HitJudgments) {
        *self.judgments.entry(judgment.as_str_internal().to_owned()).or_default() += 1;

        // do combo
        match judgment.affects_combo() {
            AffectsCombo::Increment => {
                self.combo = self.combo.saturating_add(1);
                self.max_combo = self.max_combo.max(self.combo);
            }
            AffectsCombo::Reset => self.combo = 0,
            AffectsCombo::Ignore => {}
        }

        // do score
        self.score += judgment.points() as u64 * self.combo.max(1) as u64;

        match judgment.tier() {
            Some(HitTier::X300) => self.x300 += 1,
            Some(HitTier::X100) => self.x100 += 1,
            Some(HitTier::X50) => self.x50 += 1,
            Some(HitTier::Miss) => self.xmiss += 1,
            None => {}
        }

        self.accuracy = self.calc_accuracy();
    }

    pub fn add_hit_timing(&mut self, diff: f32) {
        self.hit_timings.push(diff);
    }

    pub fn total_judged(&self) -> u32 {
        self.x300 + self.x100 + self.x50 + self.xmiss
    }

    fn calc_accuracy(&self) -> f64 {
        let total = self.total_judged();
        if total == 0 { return 100.0 }

        let weighted = self.x300 as f64 * 300.0 + self.x100 as f64 * 100.0 + self.x50 as f64 * 50.0;
        weighted / (total as f64 * 300.0) * 100.0
    }

    /// average signed hit offset, 0 with no hits
    pub fn mean_error(&self) -> f32 {
        if self.hit_timings.is_empty() { return 0.0 }
        self.hit_timings.iter().sum::<f32>() / self.hit_timings.len() as f32
    }
}


#[cfg(test)]
#[derive(Debug)]
struct TestJudgment(Option<HitTier>, u32, AffectsCombo);
#[cfg(test)]
impl HitJudgments for TestJudgment {
    fn tier(&self) -> Option<HitTier> { self.0 }
    fn points(&self) -> u32 { self.1 }
    fn affects_combo(&self) -> AffectsCombo { self.2 }
    fn as_str_internal(&self) -> &'static str { "test" }
    fn as_str_display(&self) -> &'static str { "test" }
}

#[test]
fn score_combo_multiplier() {
    let hit300 = TestJudgment(Some(HitTier::X300), 300, AffectsCombo::Increment);
    let hit100 = TestJudgment(Some(HitTier::X100), 100, AffectsCombo::Increment);
    let miss = TestJudgment(Some(HitTier::Miss), 0, AffectsCombo::Reset);
    let bonus = TestJudgment(None, 100, AffectsCombo::Ignore);

    let mut score = Score::new(PlayMode::Osu);
    assert_eq!(score.accuracy, 100.0);

    score.apply(&hit300);
    assert_eq!((score.score, score.combo), (300, 1));
    score.apply(&hit100);
    assert_eq!((score.score, score.combo), (500, 2));

    // bonus uses the current combo without touching it, and doesnt count for accuracy
    score.apply(&bonus);
    assert_eq!((score.score, score.combo), (700, 2));
    assert_eq!(score.total_judged(), 2);

    score.apply(&miss);
    assert_eq!((score.score, score.combo, score.max_combo, score.xmiss), (700, 0, 2, 1));

    // (300 + 100) / (3 * 300)
    assert!((score.accuracy - 44.444).abs() < 0.01);
    assert_eq!(score.judgments.get("test"), Some(&4));
}

#[test]
fn accuracy_bounds() {
    let mut score = Score::new(PlayMode::Mania);
    for i in 0..50 {
        let tier = [HitTier::X300, HitTier::X50, HitTier::Miss, HitTier::X100][i % 4];
        let combo = if tier == HitTier::Miss { AffectsCombo::Reset } else { AffectsCombo::Increment };
        let before = score.score;
        score.apply(&TestJudgment(Some(tier), tier.weight(), combo));

        assert!(score.score >= before);
        assert!((0.0..=100.0).contains(&score.accuracy));
    }
}

#[test]
fn mean_error() {
    let mut score = Score::default();
    assert_eq!(score.mean_error(), 0.0);
    score.add_hit_timing(-10.0);
    score.add_hit_timing(30.0);
    assert_eq!(score.mean_error(), 10.0);
}
