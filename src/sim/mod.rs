//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is passed in by the caller
//! - Seeded RNG only (spawn positions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::intersects;
pub use difficulty::{Difficulty, Escalation};
pub use entity::{Color, Entity, EntityKind, Rect, colors};
pub use spawn::{SpawnScheduler, TimerHandle};
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::tick;
