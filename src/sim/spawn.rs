//! Timed alien spawning
//!
//! The scheduler holds at most one timer. Re-arming always cancels the
//! previous timer first, so escalations and restarts never stack spawners.
//! Spawned aliens are handed back to the caller, which appends them after it
//! has finished iterating the alien collection.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use crate::consts::ALIEN_WIDTH;

/// A live periodic timer
#[derive(Debug, Clone, PartialEq)]
pub struct TimerHandle {
    /// Unique per arm() call
    pub id: u64,
    pub interval_ms: f64,
    pub next_due_ms: f64,
}

/// Periodic alien generator with a single cancellable timer
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    rng: Pcg32,
    timer: Option<TimerHandle>,
    next_id: u64,
}

impl SpawnScheduler {
    /// Create a disarmed scheduler with a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            timer: None,
            next_id: 1,
        }
    }

    /// Cancel any live timer and start a new one firing every `interval_ms`
    pub fn arm(&mut self, now_ms: f64, interval_ms: f64) -> u64 {
        if let Some(old) = self.cancel() {
            log::debug!(
                "Re-arming spawn timer #{} ({} ms -> {} ms)",
                old.id,
                old.interval_ms,
                interval_ms
            );
        }
        let id = self.next_id;
        self.next_id += 1;
        self.timer = Some(TimerHandle {
            id,
            interval_ms,
            next_due_ms: now_ms + interval_ms,
        });
        id
    }

    /// Stop the live timer, returning it if there was one
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.timer.take()
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Number of live timers (0 or 1)
    pub fn active_timers(&self) -> usize {
        usize::from(self.timer.is_some())
    }

    pub fn timer(&self) -> Option<&TimerHandle> {
        self.timer.as_ref()
    }

    /// Release every alien whose spawn time has come by `now_ms`.
    ///
    /// Aliens appear at y = 0 with a uniform random x in
    /// `[0, bounds_width - ALIEN_WIDTH]`, moving at `alien_speed`.
    pub fn poll(&mut self, now_ms: f64, bounds_width: f32, alien_speed: f32) -> Vec<Entity> {
        let mut spawned = Vec::new();
        let Some(timer) = self.timer.as_mut() else {
            return spawned;
        };
        if timer.interval_ms <= 0.0 {
            return spawned;
        }

        let max_x = (bounds_width - ALIEN_WIDTH).max(0.0);
        while timer.next_due_ms <= now_ms {
            let x = self.rng.random_range(0.0..=max_x);
            log::trace!("Spawning alien at x={:.1} speed={:.2}", x, alien_speed);
            spawned.push(Entity::alien(x, alien_speed));
            timer.next_due_ms += timer.interval_ms;
        }
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityKind;

    #[test]
    fn test_disarmed_never_spawns() {
        let mut spawner = SpawnScheduler::new(1);
        assert!(spawner.poll(1_000_000.0, 800.0, 1.0).is_empty());
    }

    #[test]
    fn test_spawns_once_per_interval() {
        let mut spawner = SpawnScheduler::new(1);
        spawner.arm(0.0, 2000.0);
        assert!(spawner.poll(1999.0, 800.0, 1.0).is_empty());

        let aliens = spawner.poll(2000.0, 800.0, 1.5);
        assert_eq!(aliens.len(), 1);
        let alien = &aliens[0];
        assert_eq!(alien.kind, EntityKind::Alien);
        assert_eq!(alien.rect.pos.y, 0.0);
        assert_eq!(alien.speed, 1.5);
        assert!((0.0..=760.0).contains(&alien.rect.pos.x));

        assert!(spawner.poll(3999.0, 800.0, 1.0).is_empty());
        assert_eq!(spawner.poll(6000.0, 800.0, 1.0).len(), 2);
    }

    #[test]
    fn test_rearm_replaces_timer() {
        let mut spawner = SpawnScheduler::new(1);
        let first = spawner.arm(0.0, 2000.0);
        let second = spawner.arm(500.0, 1980.0);
        assert_ne!(first, second);
        assert_eq!(spawner.active_timers(), 1);

        let timer = spawner.timer().unwrap();
        assert_eq!(timer.id, second);
        assert_eq!(timer.next_due_ms, 2480.0);

        // Only the new timer's cadence applies
        assert!(spawner.poll(2000.0, 800.0, 1.0).is_empty());
        assert_eq!(spawner.poll(2480.0, 800.0, 1.0).len(), 1);
    }

    #[test]
    fn test_cancel_stops_spawning() {
        let mut spawner = SpawnScheduler::new(1);
        spawner.arm(0.0, 100.0);
        assert!(spawner.cancel().is_some());
        assert!(!spawner.is_armed());
        assert!(spawner.poll(10_000.0, 800.0, 1.0).is_empty());
    }

    #[test]
    fn test_backlog_released_in_full() {
        let mut spawner = SpawnScheduler::new(1);
        spawner.arm(0.0, 800.0);
        // Due at 800, 1600, ..., 9600
        assert_eq!(spawner.poll(10_000.0, 800.0, 1.0).len(), 12);
        assert!(spawner.poll(10_000.0, 800.0, 1.0).is_empty());
        assert_eq!(spawner.timer().unwrap().next_due_ms, 10_400.0);
    }

    #[test]
    fn test_same_seed_same_positions() {
        let mut a = SpawnScheduler::new(42);
        let mut b = SpawnScheduler::new(42);
        a.arm(0.0, 10.0);
        b.arm(0.0, 10.0);
        let xa: Vec<f32> = a.poll(50.0, 800.0, 1.0).iter().map(|e| e.rect.pos.x).collect();
        let xb: Vec<f32> = b.poll(50.0, 800.0, 1.0).iter().map(|e| e.rect.pos.x).collect();
        assert_eq!(xa, xb);
    }

    #[test]
    fn test_narrow_arena_spawns_at_zero() {
        let mut spawner = SpawnScheduler::new(3);
        spawner.arm(0.0, 10.0);
        let aliens = spawner.poll(10.0, 40.0, 1.0);
        assert_eq!(aliens[0].rect.pos.x, 0.0);
    }
}
