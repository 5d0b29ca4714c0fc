//! The player character.
//!
//! Horizontal velocity is set directly from the held keys rather than accumulated, decays under friction
//! when nothing is held, and the character can only jump while standing on the floor.

use glam::Vec2;

use crate::constants::mechanics::{
    GRAVITY, PLAYER_FRICTION, PLAYER_JUMP_FORCE, PLAYER_REST_THRESHOLD, PLAYER_SPEED,
};
use crate::entity::{Body, EntityId};
use crate::field::PlayField;
use crate::input::HeldKeys;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub velocity: Vec2,
    pub speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub jumping: bool,
    pub grounded: bool,
}

impl Player {
    pub fn new(id: EntityId, position: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(id, position, size),
            velocity: Vec2::ZERO,
            speed: PLAYER_SPEED,
            jump_force: PLAYER_JUMP_FORCE,
            gravity: GRAVITY,
            jumping: false,
            grounded: false,
        }
    }

    /// Advances the player by one tick using the currently held keys.
    pub fn update(&mut self, held: HeldKeys, field: &PlayField) {
        self.velocity.y += self.gravity;

        if held.contains(HeldKeys::LEFT) {
            self.velocity.x = -self.speed;
        } else if held.contains(HeldKeys::RIGHT) {
            self.velocity.x = self.speed;
        } else {
            self.velocity.x *= PLAYER_FRICTION;
            if self.velocity.x.abs() < PLAYER_REST_THRESHOLD {
                self.velocity.x = 0.0;
            }
        }

        if held.contains(HeldKeys::UP) && self.grounded {
            self.velocity.y = -self.jump_force;
            self.grounded = false;
            self.jumping = true;
        }

        self.body.position += self.velocity;

        if self.body.land_on(field.floor()) {
            self.velocity.y = 0.0;
            self.grounded = true;
            self.jumping = false;
        }

        if self.body.keep_within(field.width()).is_some() {
            self.velocity.x = 0.0;
        }
    }

    /// Where an arrow fired right now would be released.
    pub fn arrow_origin(&self, offset: Vec2) -> Vec2 {
        self.body.position + offset
    }
}
