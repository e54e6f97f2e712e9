//! Per-frame simulation update
//!
//! One call advances the game by a single tick. Removals are decided from the
//! post-motion positions and applied in one pass per collection.

use super::collision::intersects;
use super::state::{GameEvent, GameState};
use crate::input::InputState;

/// Advance the game state by one tick at wall-clock time `now_ms`
pub fn tick(state: &mut GameState, input: &InputState, now_ms: f64) {
    // Frozen once the run is over
    if state.is_game_over() {
        return;
    }

    let bounds = state.bounds;
    state
        .player
        .move_player(input, bounds.x, state.tuning.player_speed);

    if input.shoot() {
        state.shoot(now_ms);
    }

    for bullet in &mut state.bullets {
        bullet.advance();
    }
    for alien in &mut state.aliens {
        alien.advance();
    }

    if let Some(escalation) = state.difficulty.step(&state.tuning) {
        if escalation.interval_changed {
            state.spawner.arm(now_ms, escalation.spawn_interval_ms);
        }
        state.push_event(GameEvent::DifficultyUp {
            alien_speed: escalation.alien_speed,
            spawn_interval_ms: escalation.spawn_interval_ms,
        });
    }

    state.bullets.retain(|b| !b.left_top());

    // Lethal aliens: bottom boundary or touching the player
    let player_rect = state.player.rect;
    let lethal: Vec<bool> = state
        .aliens
        .iter()
        .map(|a| a.reached_bottom(bounds.y) || intersects(&a.rect, &player_rect))
        .collect();

    // Projectile hits: each bullet can take down at most one alien
    let mut alien_shot = vec![false; state.aliens.len()];
    let mut bullet_spent = vec![false; state.bullets.len()];
    for (ai, alien) in state.aliens.iter().enumerate() {
        if lethal[ai] {
            continue;
        }
        for (bi, bullet) in state.bullets.iter().enumerate() {
            if !bullet_spent[bi] && intersects(&bullet.rect, &alien.rect) {
                bullet_spent[bi] = true;
                alien_shot[ai] = true;
            }
        }
    }

    let any_lethal = lethal.iter().any(|&hit| hit);
    let kills = alien_shot.iter().filter(|&&shot| shot).count();

    let mut index = 0;
    state.aliens.retain(|_| {
        let keep = !lethal[index] && !alien_shot[index];
        index += 1;
        keep
    });
    let mut index = 0;
    state.bullets.retain(|_| {
        let keep = !bullet_spent[index];
        index += 1;
        keep
    });

    for _ in 0..kills {
        state.award_kill();
    }
    if any_lethal {
        state.trigger_game_over();
    }
}
