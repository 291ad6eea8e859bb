use glam::Vec2;

use super::EntityId;
use crate::consts::CONTACT_EPSILON;

/// Directional contact flags. Transient: cleared at the start of every
/// entity update and set again by the collision passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    /// Set whenever this entity touched something, including when another
    /// entity ran into it during the current step.
    pub collided: bool,
}

impl CollisionFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn mark(&mut self, side: CollisionSide) {
        match side {
            CollisionSide::Top => self.top = true,
            CollisionSide::Bottom => self.bottom = true,
            CollisionSide::Left => self.left = true,
            CollisionSide::Right => self.right = true,
        }
        self.collided = true;
    }
}

/// Side of the moving entity that made contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Contact produced while resolving an update against one collidable.
/// `target` is the entity that was hit; the game marks it as collided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionEvent {
    pub target: EntityId,
    pub side: CollisionSide,
}

/// Axis-aligned bounding box in the XY plane: centre plus half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    /// Full 2D overlap test. Boxes that only touch, or interpenetrate by less
    /// than `CONTACT_EPSILON` on either axis, do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let reach = self.half_extents + other.half_extents;
        let distance = (self.center - other.center).abs();
        let penetration = reach - distance;
        penetration.x > CONTACT_EPSILON && penetration.y > CONTACT_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::splat(0.5))
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        let a = unit_box(0.0, 0.0);
        assert!(a.overlaps(&unit_box(0.5, 0.5)));
        // Overlapping in x only
        assert!(!a.overlaps(&unit_box(0.2, 3.0)));
        // Overlapping in y only
        assert!(!a.overlaps(&unit_box(3.0, 0.2)));
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = unit_box(0.0, 0.0);
        assert!(!a.overlaps(&unit_box(1.0, 0.0)));
        assert!(!a.overlaps(&unit_box(0.0, -1.0)));
    }

    #[test]
    fn test_edges() {
        let b = Aabb::new(Vec2::new(-1.0, -3.5), Vec2::new(0.5, 0.5));
        assert_eq!(b.top(), -3.0);
        assert_eq!(b.bottom(), -4.0);
        assert_eq!(b.left(), -1.5);
        assert_eq!(b.right(), -0.5);
    }

    #[test]
    fn test_mark_sets_aggregate() {
        let mut flags = CollisionFlags::default();
        flags.mark(CollisionSide::Bottom);
        assert!(flags.bottom && flags.collided);
        assert!(!flags.top && !flags.left && !flags.right);
        flags.clear();
        assert_eq!(flags, CollisionFlags::default());
    }
}
