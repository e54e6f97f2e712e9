//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`], so a
//! settings file only needs to name the values it overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player horizontal speed (units per tick)
    pub player_speed: f32,
    /// Bullet vertical speed (units per tick, upward)
    pub bullet_speed: f32,
    /// Alien speed at the start of a run
    pub alien_start_speed: f32,
    /// Alien speed added per escalation
    pub alien_speed_step: f32,
    /// Spawn period at the start of a run (ms)
    pub spawn_interval_ms: f64,
    /// Spawn period removed per escalation (ms)
    pub spawn_interval_step_ms: f64,
    /// Spawn period never drops below this (ms)
    pub spawn_interval_floor_ms: f64,
    /// Ticks between escalations
    pub difficulty_period_ticks: u64,
    /// Minimum time between shots (ms)
    pub shoot_cooldown_ms: f64,
    /// Score per alien shot down
    pub score_per_alien: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            bullet_speed: BULLET_SPEED,
            alien_start_speed: ALIEN_START_SPEED,
            alien_speed_step: ALIEN_SPEED_STEP,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            difficulty_period_ticks: DIFFICULTY_PERIOD_TICKS,
            shoot_cooldown_ms: SHOOT_COOLDOWN_MS,
            score_per_alien: SCORE_PER_ALIEN,
        }
    }
}

impl Tuning {
    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), String> {
        if self.difficulty_period_ticks == 0 {
            return Err("difficulty_period_ticks must be positive".into());
        }
        if self.spawn_interval_floor_ms <= 0.0 {
            return Err("spawn_interval_floor_ms must be positive".into());
        }
        if self.spawn_interval_ms < self.spawn_interval_floor_ms {
            return Err(format!(
                "spawn_interval_ms ({}) is below the floor ({})",
                self.spawn_interval_ms, self.spawn_interval_floor_ms
            ));
        }
        if self.alien_speed_step < 0.0 || self.spawn_interval_step_ms < 0.0 {
            return Err("difficulty steps must not be negative".into());
        }
        Ok(())
    }
}
