
#[derive(Clone, Debug, PartialEq)]
pub enum BeatmapError {
    /// the chart has no hit objects
    NoNotes,
    /// object at this index starts before the one preceding it
    Unsorted(usize),
    /// lane count must be between 1 and 9
    InvalidLaneCount(u8),
    UnsupportedMode,
}
impl std::fmt::Display for BeatmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoNotes => write!(f, "chart has no notes"),
            Self::Unsorted(i) => write!(f, "note {i} is out of order"),
            Self::InvalidLaneCount(c) => write!(f, "invalid lane count: {c}"),
            Self::UnsupportedMode => write!(f, "unsupported mode"),
        }
    }
}
