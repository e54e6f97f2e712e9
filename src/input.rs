//! Held-key input state
//!
//! Key events overwrite a boolean map; the simulation reads it once per tick.

use std::collections::HashMap;

/// Key identifiers the game cares about, plus a catch-all
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Other(String),
}

impl Key {
    /// Parse a DOM-style key string (`"ArrowLeft"`, `" "`, ...)
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            " " | "Space" => Key::Space,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Live mapping from key to held/not-held
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<Key, bool>,
}

impl InputState {
    /// Record a key transition; the latest write wins
    pub fn set(&mut self, key: Key, held: bool) {
        self.keys.insert(key, held);
    }

    pub fn key_down(&mut self, code: &str) {
        self.set(Key::from_code(code), true);
    }

    pub fn key_up(&mut self, code: &str) {
        self.set(Key::from_code(code), false);
    }

    pub fn is_held(&self, key: &Key) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn left(&self) -> bool {
        self.is_held(&Key::ArrowLeft)
    }

    pub fn right(&self) -> bool {
        self.is_held(&Key::ArrowRight)
    }

    pub fn shoot(&self) -> bool {
        self.is_held(&Key::Space)
    }
}
