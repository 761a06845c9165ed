use lander_sim_core::{HeldDirectionSource, HeldDirections, ThrustDirection};
use tracing::trace;

/// Maps physical keys of any input backend to thrust directions.
#[derive(Debug, Clone)]
pub struct KeyBindings<K> {
    entries: Vec<(K, ThrustDirection)>,
}

impl<K> Default for KeyBindings<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> KeyBindings<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, key: K, direction: ThrustDirection) -> Self {
        self.entries.retain(|(bound, _)| *bound != key);
        self.entries.push((key, direction));
        self
    }

    pub fn direction_for(&self, key: &K) -> Option<ThrustDirection> {
        self.entries
            .iter()
            .find(|(bound, _)| bound == key)
            .map(|(_, direction)| *direction)
    }
}

/// Turns discrete key events into level-triggered direction flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTranslator {
    held: HeldDirections,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key_down(&mut self, direction: ThrustDirection) {
        self.held.set(direction, true);
    }

    pub fn on_key_up(&mut self, direction: ThrustDirection) {
        self.held.set(direction, false);
    }

    /// Presses whatever `key` is bound to. Unbound keys are ignored.
    pub fn key_down<K: PartialEq>(&mut self, bindings: &KeyBindings<K>, key: &K) {
        if let Some(direction) = bindings.direction_for(key) {
            trace!(?direction, "direction pressed");
            self.on_key_down(direction);
        }
    }

    /// Releases whatever `key` is bound to. Unbound keys are ignored.
    pub fn key_up<K: PartialEq>(&mut self, bindings: &KeyBindings<K>, key: &K) {
        if let Some(direction) = bindings.direction_for(key) {
            trace!(?direction, "direction released");
            self.on_key_up(direction);
        }
    }

    pub fn release_all(&mut self) {
        self.held = HeldDirections::default();
    }

    pub fn held(&self) -> HeldDirections {
        self.held
    }
}

impl HeldDirectionSource for InputTranslator {
    fn held_directions(&self) -> HeldDirections {
        self.held
    }
}
