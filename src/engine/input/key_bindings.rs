use crate::prelude::*;

/// turns host key names into gameplay actions.
///
/// key names are opaque strings. matching ignores case, and the usual spellings of
/// modifier and arrow keys collapse onto one name
#[derive(Clone, Debug, Default)]
pub struct KeyBindings {
    keys: HashMap<String, KeyPress>,
    mouse: HashMap<MouseButton, KeyPress>,
}
impl KeyBindings {
    pub fn new() -> Self { Self::default() }

    pub fn bind(&mut self, key_name: impl AsRef<str>, action: KeyPress) {
        self.keys.insert(normalize_key_name(key_name.as_ref()), action);
    }
    pub fn with(mut self, key_name: impl AsRef<str>, action: KeyPress) -> Self {
        self.bind(key_name, action);
        self
    }

    pub fn bind_mouse(&mut self, button: MouseButton, action: KeyPress) {
        self.mouse.insert(button, action);
    }

    pub fn key(&self, key_name: &str) -> Option<KeyPress> {
        self.keys.get(&normalize_key_name(key_name)).copied()
    }
    pub fn mouse(&self, button: MouseButton) -> Option<KeyPress> {
        self.mouse.get(&button).copied()
    }

    /// (action, key name) pairs, sorted by name
    pub fn bound_keys(&self) -> Vec<(KeyPress, String)> {
        let mut list = self.keys.iter().map(|(k, a)| (*a, k.clone())).collect::<Vec<_>>();
        list.sort_by(|a, b| a.1.cmp(&b.1));
        list
    }
}

/// lowercase, with aliases folded together
pub fn normalize_key_name(name: &str) -> String {
    if name == " " { return "space".to_owned() }

    let lower = name.trim().to_lowercase();
    match &*lower {
        "shift" | "lshift" | "rshift" | "leftshift" | "rightshift" => "shift",
        "ctrl" | "control" | "lctrl" | "rctrl" | "leftcontrol" | "rightcontrol" => "ctrl",
        "alt" | "lalt" | "ralt" | "leftalt" | "rightalt" | "option" => "alt",
        "left" | "arrowleft" | "leftarrow" => "arrowleft",
        "right" | "arrowright" | "rightarrow" => "arrowright",
        "up" | "arrowup" | "uparrow" => "arrowup",
        "down" | "arrowdown" | "downarrow" => "arrowdown",
        "space" | "spacebar" => "space",
        _ => return lower,
    }.to_owned()
}


#[test]
fn key_names_fold() {
    let bindings = KeyBindings::new()
        .with("LShift", KeyPress::Dash)
        .with("Left", KeyPress::CatchLeft)
        .with("d", KeyPress::LeftKat);

    assert_eq!(bindings.key("shift"), Some(KeyPress::Dash));
    assert_eq!(bindings.key("RightShift"), Some(KeyPress::Dash));
    assert_eq!(bindings.key("ArrowLeft"), Some(KeyPress::CatchLeft));
    assert_eq!(bindings.key("D"), Some(KeyPress::LeftKat));
    assert_eq!(bindings.key("F"), None);
}
