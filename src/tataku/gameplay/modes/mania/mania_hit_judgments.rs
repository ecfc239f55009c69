use crate::prelude::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ManiaHitJudgments {
    X300,
    X100,
    X50,
    Miss,
}

use ManiaHitJudgments::*;
impl HitJudgments for ManiaHitJudgments {
    fn tier(&self) -> Option<HitTier> {
        Some(match self {
            X300 => HitTier::X300,
            X100 => HitTier::X100,
            X50  => HitTier::X50,
            Miss => HitTier::Miss,
        })
    }

    fn points(&self) -> u32 {
        match self {
            X300 => 300,
            X100 => 100,
            X50  => 50,
            Miss => 0,
        }
    }

    fn affects_combo(&self) -> AffectsCombo {
        match self {
            Miss => AffectsCombo::Reset,
            _ => AffectsCombo::Increment,
        }
    }

    fn as_str_internal(&self) -> &'static str {
        match self {
            X300 => "x300",
            X100 => "x100",
            X50  => "x50",
            Miss => "xmiss",
        }
    }

    fn as_str_display(&self) -> &'static str {
        match self {
            X300 => "Perfect",
            X100 => "Good",
            X50  => "Okay",
            Miss => "Miss",
        }
    }
}
impl From<HitTier> for ManiaHitJudgments {
    fn from(tier: HitTier) -> Self {
        match tier {
            HitTier::X300 => X300,
            HitTier::X100 => X100,
            HitTier::X50  => X50,
            HitTier::Miss => Miss,
        }
    }
}
