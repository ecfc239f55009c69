use crate::prelude::*;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManiaSettings {
    /// lane count -> key name for each lane
    pub keys: HashMap<u8, Vec<String>>,
}
impl ManiaSettings {
    pub fn key_bindings(&self, lanes: u8) -> KeyBindings {
        let mut bindings = KeyBindings::new();

        let Some(keys) = self.keys.get(&lanes) else {
            warn!("no mania keys set for {lanes} lanes");
            return bindings
        };

        for (lane, name) in keys.iter().enumerate() {
            if let Some(action) = KeyPress::from_lane(lane as u8) {
                bindings.bind(name, action);
            }
        }
        bindings
    }
}
impl Default for ManiaSettings {
    fn default() -> Self {
        let layouts: [&[&str]; 9] = [
            &["space"],
            &["f", "j"],
            &["f", "space", "j"],
            &["d", "f", "j", "k"],
            &["d", "f", "space", "j", "k"],
            &["s", "d", "f", "j", "k", "l"],
            &["s", "d", "f", "space", "j", "k", "l"],
            &["a", "s", "d", "f", "j", "k", "l", ";"],
            &["a", "s", "d", "f", "space", "j", "k", "l", ";"],
        ];

        let keys = layouts.iter()
            .enumerate()
            .map(|(i, keys)| (i as u8 + 1, keys.iter().map(|k| k.to_string()).collect()))
            .collect();

        Self { keys }
    }
}


#[test]
fn default_layouts_bind_every_lane() {
    let settings = ManiaSettings::default();
    for lanes in 1..=9u8 {
        let bindings = settings.key_bindings(lanes);
        assert_eq!(bindings.bound_keys().len(), lanes as usize, "{lanes}k");
    }

    let four = settings.key_bindings(4);
    assert_eq!(four.key("d"), Some(KeyPress::Mania1));
    assert_eq!(four.key("k"), Some(KeyPress::Mania4));
}
