use glam::Vec2;

use crate::constants::mechanics::ARROW_SPEED;
use crate::entity::{Body, EntityId};
use crate::field::PlayField;

/// A projectile flying straight to the right until it leaves the field or hits something.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub body: Body,
    pub velocity_x: f32,
}

impl Arrow {
    pub fn new(id: EntityId, position: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(id, position, size),
            velocity_x: ARROW_SPEED,
        }
    }

    pub fn update(&mut self, field: &PlayField) {
        self.body.position.x += self.velocity_x;

        if self.body.position.x > field.width() {
            self.body.active = false;
        }
    }
}
