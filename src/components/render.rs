use std::collections::HashMap;

/// Index into the renderer's texture store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub usize);

/// Which way a sprite faces. Selects the animation sequence to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
    Up,
    Down,
}

/// Normalised sub-rectangle of a texture. `(u, v)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtlasCell {
    pub u: f32,
    pub v: f32,
    pub width: f32,
    pub height: f32,
}

impl AtlasCell {
    /// The whole texture.
    pub const FULL: Self = Self {
        u: 0.0,
        v: 0.0,
        width: 1.0,
        height: 1.0,
    };
}

/// A texture cut into `cols × rows` equally sized cells, indexed row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSheet {
    pub texture: TextureHandle,
    pub cols: u32,
    pub rows: u32,
}

impl SpriteSheet {
    pub fn new(texture: TextureHandle, cols: u32, rows: u32) -> Self {
        debug_assert!(cols > 0 && rows > 0, "sprite sheet needs at least one cell");
        Self {
            texture,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// A sheet holding one sprite that covers the whole texture.
    pub fn single(texture: TextureHandle) -> Self {
        Self::new(texture, 1, 1)
    }

    pub fn cell(&self, index: usize) -> AtlasCell {
        let cols = self.cols as usize;
        let width = 1.0 / self.cols as f32;
        let height = 1.0 / self.rows as f32;
        AtlasCell {
            u: (index % cols) as f32 * width,
            v: (index / cols) as f32 * height,
            width,
            height,
        }
    }
}

/// Facing → ordered atlas cell indices, supplied when an entity is built.
#[derive(Clone, Debug, Default)]
pub struct AnimationSet {
    sequences: HashMap<Facing, Vec<usize>>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, facing: Facing, cells: impl Into<Vec<usize>>) -> Self {
        self.sequences.insert(facing, cells.into());
        self
    }

    /// Cells for `facing`; empty when the set has no sequence for it.
    pub fn sequence(&self, facing: Facing) -> &[usize] {
        self.sequences.get(&facing).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Playback state for an entity's sprite animation.
///
/// Advanced by the animation system in fixed steps; see
/// [`Animation::advance`](crate::components::Animation::advance).
#[derive(Clone, Debug)]
pub struct Animation {
    pub set: AnimationSet,
    pub facing: Facing,
    /// Position within the current facing's sequence.
    pub frame: usize,
    /// Seconds accumulated towards the next frame.
    pub elapsed: f32,
}

impl Animation {
    pub fn new(set: AnimationSet, facing: Facing) -> Self {
        Self {
            set,
            facing,
            frame: 0,
            elapsed: 0.0,
        }
    }

    /// No sequences: the entity always draws atlas cell 0.
    pub fn still() -> Self {
        Self::new(AnimationSet::new(), Facing::Down)
    }

    pub fn face(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub fn frame_count(&self) -> usize {
        self.set.sequence(self.facing).len()
    }

    /// Atlas cell index of the frame to draw.
    pub fn current_cell(&self) -> usize {
        let sequence = self.set.sequence(self.facing);
        if sequence.is_empty() {
            return 0;
        }
        sequence[self.frame % sequence.len()]
    }
}
