//! Game state and the Playing/GameOver state machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::entity::Entity;
use super::spawn::SpawnScheduler;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for an explicit restart
    GameOver,
}

/// Something the outer layers (audio, UI) should react to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// A bullet was fired
    Shot,
    /// An alien was shot down
    AlienDestroyed { score: u32 },
    /// Difficulty escalated
    DifficultyUp { alien_speed: f32, spawn_interval_ms: f64 },
    /// The run ended
    GameOver { score: u32 },
    /// A new run began after a game over
    Restarted,
}

/// Serializable view of a run
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub player: Entity,
    pub bullets: Vec<Entity>,
    pub aliens: Vec<Entity>,
    pub difficulty: Difficulty,
    pub last_shot_ms: Option<f64>,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Play-area width/height, fixed for the session
    pub bounds: Vec2,
    /// Balance values
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Score (only ever grows within a run)
    pub score: u32,
    /// Player ship
    pub player: Entity,
    /// Live bullets
    pub bullets: Vec<Entity>,
    /// Live aliens
    pub aliens: Vec<Entity>,
    /// Escalation counters
    pub difficulty: Difficulty,
    /// Time of the last successful shot
    pub last_shot_ms: Option<f64>,
    /// Periodic alien generator
    pub spawner: SpawnScheduler,
    /// Events raised since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a running game and arm its spawn timer at `now_ms`
    pub fn new(bounds: Vec2, tuning: Tuning, seed: u64, now_ms: f64) -> Self {
        let difficulty = Difficulty::new(&tuning);
        let mut spawner = SpawnScheduler::new(seed);
        spawner.arm(now_ms, difficulty.spawn_interval_ms);

        Self {
            bounds,
            tuning,
            phase: GamePhase::Playing,
            score: 0,
            player: Entity::player(bounds),
            bullets: Vec::new(),
            aliens: Vec::new(),
            difficulty,
            last_shot_ms: None,
            spawner,
            events: Vec::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Fire a bullet if the cooldown has elapsed. Returns whether one was fired.
    pub fn shoot(&mut self, now_ms: f64) -> bool {
        if !self.is_playing() {
            return false;
        }
        if let Some(last) = self.last_shot_ms {
            if now_ms - last < self.tuning.shoot_cooldown_ms {
                return false;
            }
        }

        self.bullets
            .push(Entity::bullet_from(&self.player, self.tuning.bullet_speed));
        self.last_shot_ms = Some(now_ms);
        self.events.push(GameEvent::Shot);
        true
    }

    /// Move aliens whose timer came due into play. Returns how many arrived.
    pub fn poll_spawner(&mut self, now_ms: f64) -> usize {
        if !self.is_playing() {
            return 0;
        }
        let arrivals = self
            .spawner
            .poll(now_ms, self.bounds.x, self.difficulty.alien_speed);
        let count = arrivals.len();
        self.aliens.extend(arrivals);
        count
    }

    /// Credit one alien kill
    pub(crate) fn award_kill(&mut self) {
        self.score += self.tuning.score_per_alien;
        self.events.push(GameEvent::AlienDestroyed { score: self.score });
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Playing -> GameOver. No-op when already over.
    pub fn trigger_game_over(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.spawner.cancel();
        log::info!("Game over with score {}", self.score);
        self.events.push(GameEvent::GameOver { score: self.score });
    }

    /// GameOver -> Playing. Returns false (and changes nothing) while playing.
    pub fn restart(&mut self, now_ms: f64) -> bool {
        if !self.is_game_over() {
            return false;
        }

        self.bullets.clear();
        self.aliens.clear();
        self.score = 0;
        self.difficulty = Difficulty::new(&self.tuning);
        self.last_shot_ms = None;
        self.player = Entity::player(self.bounds);
        self.spawner.arm(now_ms, self.difficulty.spawn_interval_ms);
        self.phase = GamePhase::Playing;

        log::info!("Restarted");
        self.events.push(GameEvent::Restarted);
        true
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            player: self.player.clone(),
            bullets: self.bullets.clone(),
            aliens: self.aliens.clone(),
            difficulty: self.difficulty.clone(),
            last_shot_ms: self.last_shot_ms,
        }
    }
}
