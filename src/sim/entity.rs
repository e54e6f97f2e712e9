//! Entity records for the player, bullets and aliens
//!
//! Every entity shares one positional record; per-kind behavior (size,
//! color, motion direction, expiry) is selected by matching on [`EntityKind`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::InputState;

/// Axis-aligned rectangle, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Display color (RGBA). Irrelevant to gameplay.
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = [0.0, 1.0, 0.0, 1.0]; // lime
    pub const BULLET: Color = [1.0, 1.0, 1.0, 1.0];
    pub const ALIEN: Color = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Entity variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Bullet,
    Alien,
}

impl EntityKind {
    /// Fixed sprite size
    pub fn size(self) -> Vec2 {
        match self {
            EntityKind::Player => Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            EntityKind::Bullet => Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            EntityKind::Alien => Vec2::new(ALIEN_WIDTH, ALIEN_HEIGHT),
        }
    }

    pub fn color(self) -> Color {
        match self {
            EntityKind::Player => colors::PLAYER,
            EntityKind::Bullet => colors::BULLET,
            EntityKind::Alien => colors::ALIEN,
        }
    }

    /// Vertical direction of travel (+1 down, -1 up, 0 for input-driven)
    fn heading(self) -> f32 {
        match self {
            EntityKind::Player => 0.0,
            EntityKind::Bullet => -1.0,
            EntityKind::Alien => 1.0,
        }
    }
}

/// A simulated object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub rect: Rect,
    /// Vertical speed in units per tick (unused for the player)
    pub speed: f32,
}

impl Entity {
    fn new(kind: EntityKind, x: f32, y: f32, speed: f32) -> Self {
        let size = kind.size();
        Self {
            kind,
            rect: Rect::new(x, y, size.x, size.y),
            speed,
        }
    }

    /// Player centered horizontally, resting on the bottom edge
    pub fn player(bounds: Vec2) -> Self {
        Self::new(
            EntityKind::Player,
            bounds.x / 2.0 - PLAYER_WIDTH / 2.0,
            bounds.y - PLAYER_HEIGHT,
            0.0,
        )
    }

    /// Bullet leaving the player's nose
    pub fn bullet_from(player: &Entity, speed: f32) -> Self {
        let x = player.rect.pos.x + player.rect.size.x / 2.0 - BULLET_WIDTH / 2.0;
        Self::new(EntityKind::Bullet, x, player.rect.pos.y, speed)
    }

    pub fn alien(x: f32, speed: f32) -> Self {
        Self::new(EntityKind::Alien, x, 0.0, speed)
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Apply held-key movement and clamp to `[0, bounds_width - width]`
    pub fn move_player(&mut self, input: &InputState, bounds_width: f32, speed: f32) {
        if input.left() {
            self.rect.pos.x -= speed;
        }
        if input.right() {
            self.rect.pos.x += speed;
        }
        let max_x = (bounds_width - self.rect.size.x).max(0.0);
        self.rect.pos.x = self.rect.pos.x.clamp(0.0, max_x);
    }

    /// Advance one tick along the kind's vertical heading
    pub fn advance(&mut self) {
        self.rect.pos.y += self.kind.heading() * self.speed;
    }

    /// True once a bullet is fully above the play area
    pub fn left_top(&self) -> bool {
        self.rect.bottom() <= 0.0
    }

    /// True once an alien's bottom edge touches the bottom boundary
    pub fn reached_bottom(&self, bounds_height: f32) -> bool {
        self.rect.bottom() >= bounds_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::default();
        for key in keys {
            input.set(key.clone(), true);
        }
        input
    }

    #[test]
    fn test_player_starts_centered_at_bottom() {
        let player = Entity::player(Vec2::new(800.0, 600.0));
        assert_eq!(player.rect, Rect::new(380.0, 560.0, 40.0, 40.0));
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let mut player = Entity::player(Vec2::new(800.0, 600.0));
        player.move_player(&held(&[Key::ArrowLeft]), 800.0, PLAYER_SPEED);
        assert_eq!(player.rect.pos.x, 377.0);

        player.rect.pos.x = 1.0;
        player.move_player(&held(&[Key::ArrowLeft]), 800.0, PLAYER_SPEED);
        assert_eq!(player.rect.pos.x, 0.0);

        player.rect.pos.x = 759.0;
        player.move_player(&held(&[Key::ArrowRight]), 800.0, PLAYER_SPEED);
        assert_eq!(player.rect.pos.x, 760.0);
    }

    #[test]
    fn test_both_keys_cancel_out() {
        let mut player = Entity::player(Vec2::new(800.0, 600.0));
        player.move_player(&held(&[Key::ArrowLeft, Key::ArrowRight]), 800.0, PLAYER_SPEED);
        assert_eq!(player.rect.pos.x, 380.0);
    }

    #[test]
    fn test_bullet_spawns_at_player_nose_and_rises() {
        let player = Entity::player(Vec2::new(800.0, 600.0));
        let mut bullet = Entity::bullet_from(&player, BULLET_SPEED);
        assert_eq!(bullet.rect, Rect::new(397.5, 560.0, 5.0, 10.0));
        bullet.advance();
        assert_eq!(bullet.rect.pos.y, 552.0);
    }

    #[test]
    fn test_alien_falls_at_own_speed() {
        let mut alien = Entity::alien(100.0, 1.4);
        alien.advance();
        alien.advance();
        assert!((alien.rect.pos.y - 2.8).abs() < 1e-5);
    }

    #[test]
    fn test_expiry_rules() {
        let mut bullet = Entity::bullet_from(&Entity::player(Vec2::new(800.0, 600.0)), 8.0);
        bullet.rect.pos.y = -9.0;
        assert!(!bullet.left_top());
        bullet.rect.pos.y = -10.0;
        assert!(bullet.left_top());

        let mut alien = Entity::alien(0.0, 1.0);
        alien.rect.pos.y = 559.0;
        assert!(!alien.reached_bottom(600.0));
        alien.rect.pos.y = 560.0;
        assert!(alien.reached_bottom(600.0));
    }
}
