//! Axis-aligned bounding-box collision detection
//!
//! Shared by every pairwise check in the tick: bullet vs alien, alien vs player.

use super::entity::Rect;

/// True iff the two rectangles overlap on both axes.
///
/// Touching edges do not count as overlap. Symmetric, and reflexive for any
/// rectangle with positive size.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bullet_inside_alien() {
        let bullet = Rect::new(10.0, 5.0, 5.0, 10.0);
        let alien = Rect::new(8.0, 0.0, 40.0, 40.0);
        assert!(intersects(&bullet, &alien));
    }

    #[test]
    fn test_touching_edges_miss() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let right = Rect::new(40.0, 0.0, 40.0, 40.0);
        let below = Rect::new(0.0, 40.0, 40.0, 40.0);
        assert!(!intersects(&a, &right));
        assert!(!intersects(&a, &below));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(10.0, 100.0, 40.0, 40.0);
        assert!(!intersects(&a, &b));
    }

    fn rect() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..100.0, 0.5f32..100.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in rect(), b in rect()) {
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn prop_reflexive(a in rect()) {
            prop_assert!(intersects(&a, &a));
        }
    }
}
