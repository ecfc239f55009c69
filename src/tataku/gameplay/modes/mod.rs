pub mod osu;
pub mod taiko;
pub mod mania;
pub mod catch;

pub use osu::*;
pub use taiko::*;
pub use mania::*;
pub use catch::*;

use crate::prelude::*;

pub const AVAILABLE_PLAYMODES: &[PlayMode] = &[
    PlayMode::Osu,
    PlayMode::Taiko,
    PlayMode::Mania,
    PlayMode::Catch,
];

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    Osu,
    Taiko,
    Mania,
    Catch,
}
impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Osu => "osu",
            Self::Taiko => "taiko",
            Self::Mania => "mania",
            Self::Catch => "catch",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Osu => "osu!",
            Self::Taiko => "Taiko",
            Self::Mania => "Mania",
            Self::Catch => "Catch the Beat",
        }
    }
}
impl std::str::FromStr for PlayMode {
    type Err = TatakuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &*s.to_lowercase() {
            "osu" | "standard" => Ok(Self::Osu),
            "taiko" => Ok(Self::Taiko),
            "mania" => Ok(Self::Mania),
            "catch" | "ctb" | "fruits" => Ok(Self::Catch),
            _ => Err(GameModeError::UnknownGameMode.into()),
        }
    }
}
impl Display for PlayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}


/// build a session for `playmode`, with the mode's engine and key bindings picked once here
pub fn manager_from_playmode(playmode: PlayMode, chart: Chart, settings: &Settings, song: Arc<dyn AudioInstance>) -> TatakuResult<IngameManager> {
    let (gamemode, bindings): (Box<dyn GameMode>, KeyBindings) = match playmode {
        PlayMode::Osu => (
            Box::new(OsuGame::new(&chart, &settings.standard_settings)),
            settings.standard_settings.key_bindings()
        ),
        PlayMode::Taiko => (
            Box::new(TaikoGame::new(&chart, &settings.taiko_settings)),
            settings.taiko_settings.key_bindings()
        ),
        PlayMode::Mania => {
            let lanes = chart.metadata.lane_count;
            // every lane needs a key
            if settings.mania_settings.keys.get(&lanes).map(|k| k.len()).unwrap_or_default() < lanes as usize {
                warn!("not enough mania keys bound for {lanes} lanes");
                return Err(BeatmapError::InvalidLaneCount(lanes).into())
            }
            (
                Box::new(ManiaGame::new(&chart)),
                settings.mania_settings.key_bindings(lanes)
            )
        }
        PlayMode::Catch => (
            Box::new(CatchGame::new(&chart, &settings.catch_settings)),
            settings.catch_settings.key_bindings()
        ),
    };

    let mut manager = IngameManager::new(chart, playmode, gamemode, bindings, song);
    manager.logging = settings.logging_settings;
    Ok(manager)
}


#[test]
fn playmode_names() {
    for mode in AVAILABLE_PLAYMODES {
        assert_eq!(mode.as_str().parse::<PlayMode>().unwrap(), *mode);
    }
    assert_eq!("CTB".parse::<PlayMode>().unwrap(), PlayMode::Catch);
    assert!(matches!("adofai".parse::<PlayMode>(), Err(TatakuError::GameMode(GameModeError::UnknownGameMode))));
    assert_eq!(serde_json::to_string(&PlayMode::Taiko).unwrap(), "\"taiko\"");
}
