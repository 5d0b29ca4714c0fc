//! Ownership of the entity collection and the per-tick simulation pass.

use std::ops::Range;

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, trace};

use crate::asset::SpriteProvider;
use crate::constants::mechanics::PLAYER_SPAWN;
use crate::constants::BASE_ENEMY_COUNT;
use crate::entity::arrow::Arrow;
use crate::entity::collision::Collidable;
use crate::entity::enemy::{Enemy, EnemyKind, HitOutcome};
use crate::entity::player::Player;
use crate::entity::{Entity, EntityId, EntityKind};
use crate::field::PlayField;
use crate::input::HeldKeys;

/// What a single collision pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Arrow-on-enemy contacts, including the ones that did not kill.
    pub hits: u32,
    /// Enemies whose health reached zero during this pass, in the order they fell.
    pub defeated: SmallVec<[EnemyKind; 4]>,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        self.hits == 0 && self.defeated.is_empty()
    }
}

/// Owns every simulated actor and the play field they live in.
#[derive(Debug, Clone)]
pub struct EntityManager {
    field: PlayField,
    entities: Vec<Entity>,
    next_id: u32,
    sizes: [Vec2; EntityKind::COUNT],
}

impl EntityManager {
    pub fn new(field: PlayField) -> Self {
        let mut sizes = [Vec2::ZERO; EntityKind::COUNT];
        for kind in EntityKind::iter() {
            sizes[kind as usize] = kind.default_size();
        }

        Self {
            field,
            entities: Vec::new(),
            next_id: 0,
            sizes,
        }
    }

    pub fn field(&self) -> &PlayField {
        &self.field
    }

    /// Moves every entity into a new play field.
    ///
    /// Bodies left past a side wall or below the floor are pulled back inside. Arrows beyond the new right
    /// edge expire instead, matching how they leave the field in flight. Returns how many entities were moved.
    pub fn set_field(&mut self, field: PlayField) -> usize {
        self.field = field;
        let mut moved = 0;

        for entity in &mut self.entities {
            if let Entity::Arrow(arrow) = entity {
                if arrow.body.position.x > field.width() {
                    arrow.body.active = false;
                    moved += 1;
                }
                continue;
            }

            let body = entity.body_mut();
            let walled = body.keep_within(field.width()).is_some();
            let floored = body.bottom() > field.floor() && body.land_on(field.floor());
            if walled || floored {
                trace!(id = %body.id, x = body.position.x, y = body.position.y, "Entity pulled into resized field");
                moved += 1;
            }
        }

        self.prune();
        debug!(width = field.width(), height = field.height(), moved, "Play field resized");
        moved
    }

    /// Resolves the size of every kind from the provider. Entities created afterwards use the new sizes.
    pub fn apply_sprites(&mut self, provider: &dyn SpriteProvider) {
        for kind in EntityKind::iter() {
            let sprite = provider.sprite(kind.as_ref());
            let size = sprite.fit(kind.default_size(), kind.max_sprite_edge());
            trace!(%kind, placeholder = sprite.placeholder, width = size.x, height = size.y, "Resolved entity size");
            self.sizes[kind as usize] = size;
        }
    }

    pub fn size_of(&self, kind: EntityKind) -> Vec2 {
        self.sizes[kind as usize]
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds the player at `position`, replacing any existing one.
    pub fn create_player(&mut self, position: Vec2) -> EntityId {
        self.entities.retain(|entity| entity.kind() != EntityKind::Player);

        let id = self.allocate_id();
        let player = Player::new(id, position, self.size_of(EntityKind::Player));
        self.entities.push(Entity::Player(player));
        debug!(%id, x = position.x, y = position.y, "Player created");
        id
    }

    pub fn create_arrow(&mut self, position: Vec2) -> EntityId {
        let id = self.allocate_id();
        let arrow = Arrow::new(id, position, self.size_of(EntityKind::Arrow));
        self.entities.push(Entity::Arrow(arrow));
        debug!(%id, x = position.x, y = position.y, "Arrow created");
        id
    }

    /// Adds a single enemy at a fixed position. Spawning for a level goes through [`Self::spawn_enemies`].
    pub fn create_enemy(&mut self, kind: EnemyKind, position: Vec2, rng: &mut impl Rng) -> EntityId {
        let id = self.allocate_id();
        let enemy = Enemy::new(id, kind, position, self.size_of(kind.into()), rng);
        self.entities.push(Entity::Enemy(enemy));
        id
    }

    /// Replaces the current enemies with a fresh wave of `3 + level` randomly placed ones.
    ///
    /// The player and any arrows in flight survive. If the player is missing it is put back at its spawn point.
    pub fn spawn_enemies(&mut self, level: u32, rng: &mut impl Rng) -> usize {
        self.entities
            .retain(|entity| matches!(entity.kind(), EntityKind::Player | EntityKind::Arrow));

        if self.player().is_none() {
            self.create_player(PLAYER_SPAWN);
        }

        let count = (BASE_ENEMY_COUNT + level) as usize;
        let xs = self.field.spawn_x_range();
        let ys = self.field.spawn_y_range();

        for _ in 0..count {
            let kind = EnemyKind::ALL[rng.random_range(0..EnemyKind::ALL.len())];
            let position = Vec2::new(sample_or_start(&xs, rng), sample_or_start(&ys, rng));
            self.create_enemy(kind, position, rng);
        }

        debug!(level, count, "Enemies spawned");
        count
    }

    /// Advances every entity by one tick.
    pub fn update(&mut self, dt: f32, held: HeldKeys, rng: &mut impl Rng) {
        let player_position = self
            .player()
            .map(|player| player.body.position)
            .unwrap_or(PLAYER_SPAWN);
        let field = self.field;

        for entity in &mut self.entities {
            match entity {
                Entity::Player(player) => player.update(held, &field),
                Entity::Arrow(arrow) => arrow.update(&field),
                Entity::Enemy(enemy) => enemy.update(dt, player_position, &field, rng),
            }
        }
    }

    /// Applies arrow hits to enemies, then drops everything that is no longer active.
    ///
    /// Each arrow hits at most one enemy per pass.
    pub fn resolve_collisions(&mut self) -> CollisionReport {
        let mut report = CollisionReport::default();

        let arrows: SmallVec<[usize; 8]> = self
            .entities
            .iter()
            .enumerate()
            .filter(|(_, entity)| entity.kind() == EntityKind::Arrow && entity.is_active())
            .map(|(index, _)| index)
            .collect();

        for arrow_index in arrows {
            let arrow_bounds = self.entities[arrow_index].bounds();

            let target = self.entities.iter().position(|entity| {
                entity.as_enemy().is_some_and(|enemy| !enemy.is_dead())
                    && entity.is_active()
                    && entity.bounds().overlaps(&arrow_bounds)
            });

            let Some(target) = target else {
                continue;
            };

            self.entities[arrow_index].body_mut().active = false;
            report.hits += 1;

            if let Some(enemy) = self.entities[target].as_enemy_mut() {
                match enemy.hit() {
                    HitOutcome::Defeated => report.defeated.push(enemy.kind),
                    HitOutcome::Wounded { remaining } => {
                        trace!(id = %enemy.body.id, remaining, "Enemy wounded");
                    }
                    HitOutcome::Ignored => {}
                }
            }
        }

        self.prune();
        report
    }

    /// Drops inactive entities. Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entities.len();
        self.entities.retain(Entity::is_active);
        before - self.entities.len()
    }

    pub fn remaining_enemies(&self) -> usize {
        self.entities
            .iter()
            .filter(|entity| entity.is_active() && entity.kind().is_enemy())
            .count()
    }

    pub fn player(&self) -> Option<&Player> {
        self.entities.iter().find_map(Entity::as_player)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.entities.iter().filter_map(Entity::as_enemy)
    }

    pub fn enemies_mut(&mut self) -> impl Iterator<Item = &mut Enemy> {
        self.entities.iter_mut().filter_map(Entity::as_enemy_mut)
    }
}

/// Samples uniformly from `range`, or returns its start when it is empty.
fn sample_or_start(range: &Range<f32>, rng: &mut impl Rng) -> f32 {
    if range.is_empty() {
        return range.start;
    }

    let t: f32 = rng.random();
    let value = range.start + (range.end - range.start) * t;
    // Rounding can land exactly on the excluded end.
    if value < range.end {
        value
    } else {
        range.start
    }
}
