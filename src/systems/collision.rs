use crate::components::{CollisionEvent, CollisionSide, Entity, EntityId};

/// Read-only view over the entity arena with one slot (the entity being
/// updated) cut out. Yields only active, collidable entities, in arena order.
#[derive(Clone, Copy)]
pub struct Collidables<'a> {
    before: &'a [Entity],
    after: &'a [Entity],
}

impl<'a> Collidables<'a> {
    /// Every entity in `entities`, ids numbered from 0.
    pub fn from_slice(entities: &'a [Entity]) -> Self {
        Self {
            before: entities,
            after: &[],
        }
    }

    /// Nothing to collide with.
    pub fn empty() -> Self {
        Self::from_slice(&[])
    }

    /// Split `entities` around `id`: the entity at `id` is returned mutably and
    /// the rest of the arena becomes the collidable view.
    pub fn split(entities: &'a mut [Entity], id: EntityId) -> Option<(&'a mut Entity, Self)> {
        if id.0 >= entities.len() {
            return None;
        }
        let (before, rest) = entities.split_at_mut(id.0);
        let (entity, after) = rest.split_first_mut()?;
        Some((entity, Self { before, after }))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &'a Entity)> + 'a {
        let (before, after) = (self.before, self.after);
        let after_offset = before.len() + 1;
        before
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i), e))
            .chain(
                after
                    .iter()
                    .enumerate()
                    .map(move |(i, e)| (EntityId(after_offset + i), e)),
            )
            .filter(|(_, e)| e.is_active() && e.kind.is_collidable())
    }
}

// ---------------------------------------------------------------------------
// Axis-separated resolution
// ---------------------------------------------------------------------------
//
// Both passes test every candidate against the box as it stood when the pass
// began and resolve each overlap in arena order, so when two collidables
// overlap the mover at once the later one decides the final position.
// Platforms are expected not to overlap each other.

impl Entity {
    /// Resolve vertical overlaps after the Y integration step. Moving down
    /// lands on top of the other box, moving up bumps its underside. With no
    /// vertical velocity nothing is resolved.
    pub fn check_collision_y(&mut self, collidables: Collidables<'_>, events: &mut Vec<CollisionEvent>) {
        let start = self.aabb();
        let half_height = start.half_extents.y;
        let descending = self.velocity.y < 0.0;
        let ascending = self.velocity.y > 0.0;

        for (id, other) in collidables.iter() {
            let other_box = other.aabb();
            if !start.overlaps(&other_box) {
                continue;
            }
            let side = if descending {
                self.position.y = other_box.top() + half_height;
                CollisionSide::Bottom
            } else if ascending {
                self.position.y = other_box.bottom() - half_height;
                CollisionSide::Top
            } else {
                continue;
            };
            self.velocity.y = 0.0;
            self.collisions.mark(side);
            events.push(CollisionEvent { target: id, side });
        }
    }

    /// Resolve horizontal overlaps after the X movement step by pushing out
    /// through the nearer vertical edge of the other box.
    pub fn check_collision_x(&mut self, collidables: Collidables<'_>, events: &mut Vec<CollisionEvent>) {
        let start = self.aabb();
        let half_width = start.half_extents.x;

        for (id, other) in collidables.iter() {
            let other_box = other.aabb();
            if !start.overlaps(&other_box) {
                continue;
            }
            let side = if start.center.x < other_box.center.x {
                self.position.x = other_box.left() - half_width;
                CollisionSide::Right
            } else {
                self.position.x = other_box.right() + half_width;
                CollisionSide::Left
            };
            self.velocity.x = 0.0;
            self.collisions.mark(side);
            events.push(CollisionEvent { target: id, side });
        }
    }
}
