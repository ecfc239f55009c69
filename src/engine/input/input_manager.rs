use crate::prelude::*;

/// raw input, as the host delivers it
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    /// pointer position in chart space
    MouseMove(Vector2),
}

/// tracks held actions and the pointer.
///
/// hosts usually repeat key-down events while a key is held, those are swallowed here
/// so only the first press of a key ever reaches the gameplay
#[derive(Clone, Debug, Default)]
pub struct InputManager {
    bindings: KeyBindings,
    held: HashSet<KeyPress>,
    pointer: Vector2,
}
impl InputManager {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            pointer: Vector2::ZERO,
        }
    }

    /// classify a raw event. returns `None` for unbound keys and repeats
    pub fn handle(&mut self, event: &InputEvent) -> Option<ReplayFrame> {
        match event {
            InputEvent::KeyDown(name) => {
                let Some(key) = self.bindings.key(name) else {
                    debug!("unbound key: {name}");
                    return None
                };
                self.press(key)
            }
            InputEvent::KeyUp(name) => self.bindings.key(name).and_then(|key| self.release(key)),
            InputEvent::MouseDown(btn) => self.bindings.mouse(*btn).and_then(|key| self.press(key)),
            InputEvent::MouseUp(btn) => self.bindings.mouse(*btn).and_then(|key| self.release(key)),
            InputEvent::MouseMove(pos) => {
                self.pointer = *pos;
                Some(ReplayFrame::MousePos(pos.x, pos.y))
            }
        }
    }

    /// track a frame that didnt come through `handle` (ie, from a replay)
    pub fn track(&mut self, frame: ReplayFrame) {
        match frame {
            ReplayFrame::Press(key) => { self.held.insert(key); }
            ReplayFrame::Release(key) => { self.held.remove(&key); }
            ReplayFrame::MousePos(x, y) => self.pointer = Vector2::new(x, y),
        }
    }

    fn press(&mut self, key: KeyPress) -> Option<ReplayFrame> {
        // already held, this is a repeat
        if !self.held.insert(key) { return None }
        Some(ReplayFrame::Press(key))
    }
    fn release(&mut self, key: KeyPress) -> Option<ReplayFrame> {
        if !self.held.remove(&key) { return None }
        Some(ReplayFrame::Release(key))
    }

    pub fn is_held(&self, key: KeyPress) -> bool { self.held.contains(&key) }
    pub fn any_held(&self, keys: &[KeyPress]) -> bool { keys.iter().any(|k| self.held.contains(k)) }
    pub fn held(&self) -> &HashSet<KeyPress> { &self.held }
    pub fn pointer(&self) -> Vector2 { self.pointer }
    pub fn bindings(&self) -> &KeyBindings { &self.bindings }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}


#[test]
fn repeats_are_suppressed() {
    let mut input = InputManager::new(KeyBindings::new().with("z", KeyPress::Left));

    let down = InputEvent::KeyDown("z".to_owned());
    assert_eq!(input.handle(&down), Some(ReplayFrame::Press(KeyPress::Left)));
    // held key repeating
    assert_eq!(input.handle(&down), None);
    assert_eq!(input.handle(&down), None);
    assert!(input.is_held(KeyPress::Left));

    assert_eq!(input.handle(&InputEvent::KeyUp("Z".to_owned())), Some(ReplayFrame::Release(KeyPress::Left)));
    assert!(!input.is_held(KeyPress::Left));
    // a release without a press goes nowhere
    assert_eq!(input.handle(&InputEvent::KeyUp("z".to_owned())), None);

    assert_eq!(input.handle(&down), Some(ReplayFrame::Press(KeyPress::Left)));
    assert_eq!(input.handle(&InputEvent::KeyDown("q".to_owned())), None);
}
