//! Alien Rush - A falling-alien arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, spawning, game state)
//! - `session`: Frame loop tying simulation, rendering and audio together
//! - `renderer`: Render surface abstraction and scene drawing
//! - `audio`: Sound effect dispatch with failure isolation
//! - `input`: Held-key state
//! - `settings` / `tuning`: Data-driven configuration and game balance

pub mod audio;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use session::{LoopControl, Session};
pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default play-area dimensions
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Horizontal units per tick while a direction key is held
    pub const PLAYER_SPEED: f32 = 3.0;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const BULLET_SPEED: f32 = 8.0;
    /// Minimum time between two successful shots
    pub const SHOOT_COOLDOWN_MS: f64 = 300.0;

    /// Alien defaults
    pub const ALIEN_WIDTH: f32 = 40.0;
    pub const ALIEN_HEIGHT: f32 = 40.0;
    pub const ALIEN_START_SPEED: f32 = 1.0;

    /// Difficulty escalation
    pub const DIFFICULTY_PERIOD_TICKS: u64 = 6000;
    pub const ALIEN_SPEED_STEP: f32 = 0.2;
    pub const SPAWN_INTERVAL_MS: f64 = 2000.0;
    pub const SPAWN_INTERVAL_STEP_MS: f64 = 20.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f64 = 800.0;

    /// Points awarded per alien shot down
    pub const SCORE_PER_ALIEN: u32 = 10;

    /// Display frame period for the native driver (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
