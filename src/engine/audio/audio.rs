
/// the playback side of the song.
///
/// positions are in seconds on the audio engine's own clock, which keeps running
/// whether or not the song itself has started yet
pub trait AudioInstance: Send + Sync {
    /// start the song once the engine clock reaches `position`
    fn play_at(&self, position: f64);
    fn stop(&self);

    fn is_playing(&self) -> bool;
    fn is_stopped(&self) -> bool;

    /// current engine clock position in seconds. monotonic while playing
    fn get_position(&self) -> f64;

    /// fire-and-forget sample playback (hitsounds)
    fn play_sample(&self, _name: &str) {}
}
