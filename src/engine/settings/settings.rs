use crate::prelude::*;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    // game settings
    pub standard_settings: StandardSettings,
    pub taiko_settings: TaikoSettings,
    pub mania_settings: ManiaSettings,
    pub catch_settings: CatchSettings,

    pub logging_settings: LoggingSettings,
    pub last_played_mode: String,
}
impl Settings {
    /// load settings from `path`, falling back to defaults if the file is missing or broken
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        match std::fs::read_to_string(path).map_err(TatakuError::from).and_then(|s| Ok(serde_json::from_str(&s)?)) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Error reading {}, loading defaults: {e}", path.display());
                if let Some(saved_as) = Self::backup_settings(path) {
                    info!("Old settings saved to {saved_as}");
                }
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> TatakuResult {
        debug!("Saving settings");
        let str = serde_json::to_string_pretty(self)?;
        std::fs::write(path, str)?;
        trace!("settings saved successfully");
        Ok(())
    }

    // make a backup of the settings before they're overwritten (when the file fails to load)
    fn backup_settings(path: &Path) -> Option<String> {
        if !path.exists() { return None }

        let mut counter = 0;
        let mut file = format!("{}.bak_{counter}", path.display());
        while Path::new(&file).exists() {
            counter += 1;
            file = format!("{}.bak_{counter}", path.display());
        }

        std::fs::copy(path, &file).log_error_message("error backing up settings").ok()?;
        Some(file)
    }
}


#[test]
fn partial_settings_fill_defaults() {
    let settings: Settings = serde_json::from_str(r#"{"taiko_settings": {"left_kat": "a"}}"#).unwrap();
    assert_eq!(settings.taiko_settings.left_kat, "a");
    assert_eq!(settings.taiko_settings.left_don, TaikoSettings::default().left_don);
    assert_eq!(settings.catch_settings, CatchSettings::default());
}

#[test]
fn settings_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("tataku-settings-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(SETTINGS_FILE);

    let mut settings = Settings::default();
    settings.catch_settings.dash_key = "Space".to_owned();
    settings.save(&path).unwrap();
    assert_eq!(Settings::load(&path), settings);

    // broken file loads defaults and keeps a backup
    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(Settings::load(&path), Settings::default());
    assert!(Path::new(&format!("{}.bak_0", path.display())).exists());

    std::fs::remove_dir_all(&dir).unwrap();
}
