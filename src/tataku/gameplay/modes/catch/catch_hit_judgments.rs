use crate::prelude::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CatchHitJudgments {
    /// fruit, and the head and tail of a juice stream
    Fruit,
    /// a juice stream droplet
    Droplet,
    /// banana shower bonus
    Banana,
    Miss,
}

use CatchHitJudgments::*;
impl HitJudgments for CatchHitJudgments {
    fn tier(&self) -> Option<HitTier> {
        match self {
            Fruit | Droplet => Some(HitTier::X300),
            Banana => None,
            Miss => Some(HitTier::Miss),
        }
    }

    fn points(&self) -> u32 {
        match self {
            Fruit => 300,
            // droplets are worth a tenth of a fruit
            Droplet => 30,
            Banana => 100,
            Miss => 0,
        }
    }

    fn affects_combo(&self) -> AffectsCombo {
        match self {
            Miss => AffectsCombo::Reset,
            Banana => AffectsCombo::Ignore,
            _ => AffectsCombo::Increment,
        }
    }

    fn as_str_internal(&self) -> &'static str {
        match self {
            Fruit => "fruit",
            Droplet => "droplet",
            Banana => "banana",
            Miss => "xmiss",
        }
    }

    fn as_str_display(&self) -> &'static str {
        match self {
            Fruit => "300",
            Droplet => "Droplet",
            Banana => "Banana",
            Miss => "Miss",
        }
    }
}
