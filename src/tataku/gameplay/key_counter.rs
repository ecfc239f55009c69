use crate::prelude::*;

#[derive(Default, Clone, Debug)]
pub struct KeyCounter {
    pub keys: HashMap<KeyPress, KeyInfo>,
    pub key_order: Vec<KeyPress>,
}
impl KeyCounter {
    pub fn new(key_defs:Vec<(KeyPress, String)>) -> Self {
        let mut key_order = Vec::new();
        let mut keys = HashMap::new();

        for (key, label) in key_defs {
            if keys.contains_key(&key) { continue }
            key_order.push(key);
            keys.insert(key, KeyInfo::new(label));
        }

        Self {
            keys,
            key_order
        }
    }

    pub fn key_down(&mut self, key: KeyPress) {
        if let Some(info) = self.keys.get_mut(&key) {
            info.count += 1;
            info.held = true;
        }
    }
    pub fn key_up(&mut self, key: KeyPress) {
        if let Some(info) = self.keys.get_mut(&key) {
            info.held = false;
        }
    }

    pub fn count(&self, key: KeyPress) -> u16 {
        self.keys.get(&key).map(|i| i.count).unwrap_or_default()
    }

    pub fn reset(&mut self) {
        for i in self.keys.values_mut() {
            i.count = 0;
            i.held = false;
        }
    }
}


#[derive(Clone, Debug)]
pub struct KeyInfo {
    pub label: String,
    pub held: bool,
    pub count: u16,
}
impl KeyInfo {
    fn new(label: String) -> Self {
        Self {
            label,
            held: false,
            count: 0
        }
    }
}


#[test]
fn counts_presses() {
    let mut counter = KeyCounter::new(vec![(KeyPress::Left, "z".to_owned()), (KeyPress::Right, "x".to_owned())]);
    counter.key_down(KeyPress::Left);
    counter.key_up(KeyPress::Left);
    counter.key_down(KeyPress::Left);
    // not counted
    counter.key_down(KeyPress::Dash);

    assert_eq!(counter.count(KeyPress::Left), 2);
    assert!(counter.keys[&KeyPress::Left].held);
    assert_eq!(counter.count(KeyPress::Right), 0);
    assert_eq!(counter.count(KeyPress::Dash), 0);

    counter.reset();
    assert_eq!(counter.count(KeyPress::Left), 0);
}
