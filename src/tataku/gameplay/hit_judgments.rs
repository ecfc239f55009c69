use crate::prelude::*;

/// the graded tiers every mode scores into
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum HitTier {
    X300,
    X100,
    X50,
    Miss,
}
impl HitTier {
    /// accuracy weight
    pub fn weight(&self) -> u32 {
        match self {
            Self::X300 => 300,
            Self::X100 => 100,
            Self::X50 => 50,
            Self::Miss => 0,
        }
    }
}


pub trait HitJudgments: Send + Sync + std::fmt::Debug {
    /// which tier counter does this judgment count toward, if any
    fn tier(&self) -> Option<HitTier>;

    /// how much score is this judgment worth (before the combo multiplier)
    fn points(&self) -> u32;

    /// how does this judgment affect the combo
    fn affects_combo(&self) -> AffectsCombo;

    /// internal str for this judgment
    fn as_str_internal(&self) -> &'static str;

    /// what does this judgment look like when displayed?
    fn as_str_display(&self) -> &'static str;
}


#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AffectsCombo {
    /// add one to the combo
    Increment,
    /// do nothing to the combo
    Ignore,
    /// reset the combo to 0
    Reset
}
