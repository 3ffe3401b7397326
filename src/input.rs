//! Raw key state to per-tick intent
//!
//! The embedding application forwards key-down/key-up events here and asks
//! for an [`Intent`] right before each tick. Intent is level-triggered: a key
//! contributes for every tick it is held, so nothing is lost when a frame
//! runs zero or several simulation steps.

use std::collections::HashSet;

use crate::sim::Intent;

/// Keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Thrust,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop every held key (window blur, focus loss)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Snapshot of held keys as the intent for the next tick
    pub fn intent(&self) -> Intent {
        Intent {
            move_left: self.is_held(Key::Left),
            move_right: self.is_held(Key::Right),
            thrust: self.is_held(Key::Thrust),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_map_to_intent() {
        let mut input = InputState::new();
        assert_eq!(input.intent(), Intent::default());

        input.key_down(Key::Left);
        input.key_down(Key::Thrust);
        let intent = input.intent();
        assert!(intent.move_left);
        assert!(!intent.move_right);
        assert!(intent.thrust);

        input.key_up(Key::Left);
        assert!(!input.intent().move_left);
        assert!(input.intent().thrust);
    }

    #[test]
    fn test_repeated_key_down_is_idempotent() {
        let mut input = InputState::new();
        input.key_down(Key::Right);
        input.key_down(Key::Right);
        input.key_up(Key::Right);
        assert!(!input.is_held(Key::Right));
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Right);
        input.release_all();
        assert_eq!(input.intent(), Intent::default());
    }
}
