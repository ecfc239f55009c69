use crate::prelude::*;

/// a gameplay action, after the raw key has been run through the bindings
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum KeyPress {
    // osu
    Left,
    Right,
    LeftMouse,
    RightMouse,

    // taiko
    LeftKat,
    LeftDon,
    RightDon,
    RightKat,

    // mania, one per lane
    Mania1,
    Mania2,
    Mania3,
    Mania4,
    Mania5,
    Mania6,
    Mania7,
    Mania8,
    Mania9,

    // catch
    CatchLeft,
    CatchRight,
    Dash,
}
impl KeyPress {
    const MANIA_KEYS: [KeyPress; 9] = [
        KeyPress::Mania1,
        KeyPress::Mania2,
        KeyPress::Mania3,
        KeyPress::Mania4,
        KeyPress::Mania5,
        KeyPress::Mania6,
        KeyPress::Mania7,
        KeyPress::Mania8,
        KeyPress::Mania9,
    ];

    /// the mania action for a zero-based lane
    pub fn from_lane(lane: u8) -> Option<Self> {
        Self::MANIA_KEYS.get(lane as usize).copied()
    }

    /// the zero-based lane this action presses, if its a mania action
    pub fn lane(&self) -> Option<u8> {
        Self::MANIA_KEYS.iter().position(|k| k == self).map(|i| i as u8)
    }
}


#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}


#[test]
fn mania_lanes() {
    assert_eq!(KeyPress::from_lane(0), Some(KeyPress::Mania1));
    assert_eq!(KeyPress::from_lane(3).and_then(|k| k.lane()), Some(3));
    assert_eq!(KeyPress::from_lane(9), None);
    assert_eq!(KeyPress::Dash.lane(), None);
}
