//! Simulated actors: the player, arrows, and the three enemy archetypes.
//!
//! Every actor is one variant of the closed [`Entity`] enum. Per-kind behavior is dispatched with a
//! `match`, so adding a kind is a compile error everywhere it needs handling.

pub mod arrow;
pub mod collision;
pub mod enemy;
pub mod manager;
pub mod player;

use std::fmt;

use glam::Vec2;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr};

use crate::constants::mechanics::{ARROW_SIZE, PLAYER_SIZE};
use crate::entity::arrow::Arrow;
use crate::entity::collision::{Bounds, Collidable};
use crate::entity::enemy::{Enemy, EnemyKind};
use crate::entity::player::Player;

/// Stable identifier handed out by the [`manager::EntityManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The type tag of an entity. The string form doubles as the sprite name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr, AsRefStr, Display)]
#[strum(serialize_all = "camelCase")]
pub enum EntityKind {
    Player,
    Arrow,
    JiraMonster,
    ZombieManager,
    Meeting,
}

impl EntityKind {
    pub fn is_enemy(self) -> bool {
        self.enemy().is_some()
    }

    /// The enemy archetype for this tag, if it is one.
    pub fn enemy(self) -> Option<EnemyKind> {
        match self {
            EntityKind::JiraMonster => Some(EnemyKind::JiraMonster),
            EntityKind::ZombieManager => Some(EnemyKind::ZombieManager),
            EntityKind::Meeting => Some(EnemyKind::Meeting),
            EntityKind::Player | EntityKind::Arrow => None,
        }
    }

    /// Size used when no real sprite is available.
    pub fn default_size(self) -> Vec2 {
        match self.enemy() {
            Some(enemy) => enemy.behavior().size,
            None if self == EntityKind::Player => PLAYER_SIZE,
            None => ARROW_SIZE,
        }
    }

    /// Real sprites larger than this on either edge are scaled down to fit.
    pub fn max_sprite_edge(self) -> f32 {
        let size = self.default_size();
        size.x.max(size.y)
    }
}

/// Position, size and liveness shared by every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: EntityId,
    /// Top-left corner, in canvas pixels.
    pub position: Vec2,
    pub size: Vec2,
    /// Inactive bodies are dropped at the next prune.
    pub active: bool,
}

impl Body {
    pub fn new(id: EntityId, position: Vec2, size: Vec2) -> Self {
        Self {
            id,
            position,
            size,
            active: true,
        }
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Rests the body on the floor line if its bottom edge reached it.
    ///
    /// Returns true when the body was clamped.
    pub fn land_on(&mut self, floor: f32) -> bool {
        if self.bottom() >= floor {
            self.position.y = floor - self.size.y;
            true
        } else {
            false
        }
    }

    /// Which wall, if any, the body was pushed back from while being kept inside `[0, width]`.
    pub fn keep_within(&mut self, width: f32) -> Option<Wall> {
        if self.position.x < 0.0 {
            self.position.x = 0.0;
            Some(Wall::Left)
        } else if self.right() > width {
            self.position.x = width - self.size.x;
            Some(Wall::Right)
        } else {
            None
        }
    }
}

/// A side wall of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

/// Any simulated actor.
#[derive(Debug, Clone)]
pub enum Entity {
    Player(Player),
    Arrow(Arrow),
    Enemy(Enemy),
}

impl Entity {
    pub fn body(&self) -> &Body {
        match self {
            Entity::Player(player) => &player.body,
            Entity::Arrow(arrow) => &arrow.body,
            Entity::Enemy(enemy) => &enemy.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Entity::Player(player) => &mut player.body,
            Entity::Arrow(arrow) => &mut arrow.body,
            Entity::Enemy(enemy) => &mut enemy.body,
        }
    }

    pub fn id(&self) -> EntityId {
        self.body().id
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Arrow(_) => EntityKind::Arrow,
            Entity::Enemy(enemy) => enemy.kind.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.body().active
    }

    pub fn as_enemy(&self) -> Option<&Enemy> {
        match self {
            Entity::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn as_enemy_mut(&mut self) -> Option<&mut Enemy> {
        match self {
            Entity::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Entity::Player(player) => Some(player),
            _ => None,
        }
    }
}

impl Collidable for Entity {
    fn bounds(&self) -> Bounds {
        Bounds::of(self.body())
    }
}
