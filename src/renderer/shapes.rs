//! Shape generation for 2D primitives

use glam::Vec2;

use crate::sim::Rect;

/// Ship-shaped triangle for an entity: apex at top-center, base along the bottom edge
pub fn entity_triangle(rect: &Rect) -> [Vec2; 3] {
    [
        Vec2::new(rect.pos.x + rect.size.x / 2.0, rect.top()),
        Vec2::new(rect.left(), rect.bottom()),
        Vec2::new(rect.right(), rect.bottom()),
    ]
}
