//! Tick-counted difficulty escalation

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Result of an escalation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Escalation {
    pub alien_speed: f32,
    pub spawn_interval_ms: f64,
    /// Whether the spawn interval moved (the spawn timer must be re-armed)
    pub interval_changed: bool,
}

/// Raises alien speed and shortens the spawn interval every N ticks.
///
/// Monotonic within a run: speed never falls, interval never rises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Ticks counted since the run started
    pub ticks: u64,
    /// Speed given to newly spawned aliens
    pub alien_speed: f32,
    /// Current spawn period (ms)
    pub spawn_interval_ms: f64,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            ticks: 0,
            alien_speed: tuning.alien_start_speed,
            spawn_interval_ms: tuning.spawn_interval_ms,
        }
    }

    /// Count one tick, escalating on every multiple of the period
    pub fn step(&mut self, tuning: &Tuning) -> Option<Escalation> {
        self.ticks += 1;
        if self.ticks % tuning.difficulty_period_ticks.max(1) != 0 {
            return None;
        }

        self.alien_speed += tuning.alien_speed_step;
        let previous = self.spawn_interval_ms;
        self.spawn_interval_ms = (self.spawn_interval_ms - tuning.spawn_interval_step_ms)
            .max(tuning.spawn_interval_floor_ms);

        log::debug!(
            "Difficulty up at tick {}: alien speed {:.2}, spawn every {} ms",
            self.ticks,
            self.alien_speed,
            self.spawn_interval_ms
        );

        Some(Escalation {
            alien_speed: self.alien_speed,
            spawn_interval_ms: self.spawn_interval_ms,
            interval_changed: self.spawn_interval_ms != previous,
        })
    }
}
