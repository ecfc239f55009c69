use crate::prelude::*;

/// every input a session accepted, with the map time it happened at
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Replay {
    pub playmode: String,
    pub frames: Vec<(f32, ReplayFrame)>,
    /// the score this replay produced, once the session finished
    pub score_data: Option<Score>,
}
impl Replay {
    pub fn new(playmode: PlayMode) -> Self {
        Self {
            playmode: playmode.as_str().to_owned(),
            ..Self::default()
        }
    }

    pub fn add(&mut self, time: f32, frame: ReplayFrame) {
        self.frames.push((time, frame));
    }

    pub fn load(path: impl AsRef<Path>) -> TatakuResult<Self> {
        let mut replay: Replay = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        // frames get fed in order
        replay.frames.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(replay)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> TatakuResult {
        std::fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }
}


#[test]
fn replay_file() {
    let dir = std::env::temp_dir().join(format!("tataku-replay-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("replay.json");

    let mut replay = Replay::new(PlayMode::Taiko);
    replay.add(1000.0, ReplayFrame::Press(KeyPress::LeftDon));
    replay.add(1010.0, ReplayFrame::Release(KeyPress::LeftDon));
    replay.add(900.0, ReplayFrame::MousePos(12.0, 34.0));
    replay.save(&path).unwrap();

    let loaded = Replay::load(&path).unwrap();
    assert_eq!(loaded.playmode, "taiko");
    assert_eq!(loaded.frames.first(), Some(&(900.0, ReplayFrame::MousePos(12.0, 34.0))));
    assert_eq!(loaded.frames.len(), 3);

    std::fs::remove_dir_all(&dir).unwrap();
}
