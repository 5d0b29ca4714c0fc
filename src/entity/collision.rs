use glam::Vec2;

use crate::entity::Body;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn of(body: &Body) -> Self {
        Self::new(body.position, body.size)
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x < other.min.x + other.size.x
            && self.min.x + self.size.x > other.min.x
            && self.min.y < other.min.y + other.size.y
            && self.min.y + self.size.y > other.min.y
    }
}

/// Trait for entities that can participate in collision detection.
pub trait Collidable {
    /// Returns the current bounding box of this entity.
    fn bounds(&self) -> Bounds;

    /// Checks if this entity is colliding with another entity.
    fn is_colliding_with(&self, other: &dyn Collidable) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}

impl Collidable for Body {
    fn bounds(&self) -> Bounds {
        Bounds::of(self)
    }
}
