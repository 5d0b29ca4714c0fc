//! Enemy archetypes.
//!
//! All three kinds share one movement model: they fall under gravity, land on the floor, bounce off the
//! side walls and occasionally turn around at random. What differs is how fast they walk, how often they
//! turn, and whether they hop or float. The tuning lives in [`EnemyKind::behavior`].

use glam::Vec2;
use rand::Rng;
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};
use tracing::{debug, trace};

use crate::constants::mechanics::{GRAVITY, MEETING_SPLIT_INTERVAL_MS};
use crate::entity::{Body, EntityId, EntityKind, Wall};
use crate::field::PlayField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr, Display)]
#[strum(serialize_all = "camelCase")]
pub enum EnemyKind {
    JiraMonster,
    ZombieManager,
    Meeting,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::JiraMonster, EnemyKind::ZombieManager, EnemyKind::Meeting];

    /// Movement and durability tuning for this archetype.
    pub const fn behavior(self) -> Behavior {
        match self {
            EnemyKind::JiraMonster => Behavior {
                speed: 2.0,
                health: 1,
                size: Vec2::new(64.0, 64.0),
                turn_chance: 0.01,
                hop: None,
                float: None,
            },
            EnemyKind::ZombieManager => Behavior {
                speed: 1.5,
                health: 1,
                size: Vec2::new(50.0, 70.0),
                turn_chance: 0.03,
                hop: Some(Impulse {
                    chance: 0.01,
                    velocity: -10.0,
                }),
                float: None,
            },
            EnemyKind::Meeting => Behavior {
                speed: 1.0,
                health: 1,
                size: Vec2::new(60.0, 60.0),
                turn_chance: 0.005,
                hop: None,
                float: Some(Impulse {
                    chance: 0.02,
                    velocity: -2.0,
                }),
            },
        }
    }
}

impl From<EnemyKind> for EntityKind {
    fn from(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::JiraMonster => EntityKind::JiraMonster,
            EnemyKind::ZombieManager => EntityKind::ZombieManager,
            EnemyKind::Meeting => EntityKind::Meeting,
        }
    }
}

/// Per-archetype tuning. Speeds and velocities are in pixels per tick, chances are per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Behavior {
    pub speed: f32,
    pub health: u32,
    pub size: Vec2,
    pub turn_chance: f64,
    /// Upward kick taken only while grounded.
    pub hop: Option<Impulse>,
    /// Upward drift taken regardless of footing.
    pub float: Option<Impulse>,
}

/// A random vertical velocity override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub chance: f64,
    pub velocity: f32,
}

/// The result of landing a hit on an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Health dropped but the enemy is still standing.
    Wounded { remaining: u32 },
    /// This hit took the enemy down.
    Defeated,
    /// The enemy was already down; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub kind: EnemyKind,
    pub velocity: Vec2,
    pub grounded: bool,
    health: u32,
    dead: bool,
    /// Milliseconds since the last split attempt. Only meetings split.
    split_elapsed: Option<f32>,
}

impl Enemy {
    /// Creates an enemy walking in a random horizontal direction.
    pub fn new(id: EntityId, kind: EnemyKind, position: Vec2, size: Vec2, rng: &mut impl Rng) -> Self {
        let behavior = kind.behavior();
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        Self {
            body: Body::new(id, position, size),
            kind,
            velocity: Vec2::new(behavior.speed * direction, 0.0),
            grounded: false,
            health: behavior.health,
            dead: false,
            split_elapsed: (kind == EnemyKind::Meeting).then_some(0.0),
        }
    }

    /// Overrides the starting health. Zero is raised to one so an enemy never starts out dead.
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.max(1);
        self
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Advances the enemy by one tick.
    ///
    /// `_player` is the player's position at the start of the tick. The wandering model ignores it, but
    /// it is part of the update contract so a seeking behavior can be slotted in per kind.
    pub fn update(&mut self, dt: f32, _player: Vec2, field: &PlayField, rng: &mut impl Rng) {
        if self.dead {
            return;
        }

        let behavior = self.kind.behavior();

        self.velocity.y += GRAVITY;
        self.body.position += self.velocity;

        if self.body.land_on(field.floor()) {
            self.velocity.y = 0.0;
            self.grounded = true;
        }

        match self.body.keep_within(field.width()) {
            Some(Wall::Left) => self.velocity.x = self.velocity.x.abs(),
            Some(Wall::Right) => self.velocity.x = -self.velocity.x.abs(),
            None => {}
        }

        if rng.random_bool(behavior.turn_chance) {
            self.velocity.x = -self.velocity.x;
        }

        if let Some(hop) = behavior.hop {
            if self.grounded && rng.random_bool(hop.chance) {
                trace!(id = %self.body.id, kind = %self.kind, "Enemy hopped");
                self.velocity.y = hop.velocity;
                self.grounded = false;
            }
        }

        if let Some(float) = behavior.float {
            if rng.random_bool(float.chance) {
                self.velocity.y = float.velocity;
            }
        }

        self.tick_split_timer(dt);
    }

    // The split itself is undecided gameplay, so the timer only reports that it elapsed.
    fn tick_split_timer(&mut self, dt: f32) {
        let Some(elapsed) = self.split_elapsed.as_mut() else {
            return;
        };

        *elapsed += dt;
        if *elapsed >= MEETING_SPLIT_INTERVAL_MS {
            *elapsed = 0.0;
            debug!(id = %self.body.id, "Meeting split timer elapsed");
        }
    }

    /// Milliseconds accumulated towards the next split, for enemies that split.
    pub fn split_elapsed(&self) -> Option<f32> {
        self.split_elapsed
    }

    /// Takes one point of damage, dying when health runs out.
    pub fn hit(&mut self) -> HitOutcome {
        if self.dead {
            return HitOutcome::Ignored;
        }

        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.die();
            HitOutcome::Defeated
        } else {
            HitOutcome::Wounded { remaining: self.health }
        }
    }

    /// Marks the enemy dead and inactive. Returns false if it was already dead.
    pub fn die(&mut self) -> bool {
        if self.dead {
            return false;
        }

        self.dead = true;
        self.body.active = false;
        debug!(id = %self.body.id, kind = %self.kind, "Enemy defeated");
        true
    }
}
