
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioError {
    /// the song was stopped and cannot be restarted
    Stopped,
}
