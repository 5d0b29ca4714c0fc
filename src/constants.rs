//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The default size of the play field, in pixels.
pub const DEFAULT_FIELD_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

/// Height of the ground strip at the bottom of the play field. The floor line sits this far above the bottom edge.
pub const GROUND_HEIGHT: f32 = 50.0;

/// The play field must be strictly wider than this for enemy spawning to have a non-empty range.
pub const MIN_FIELD_WIDTH: f32 = 100.0;
/// The play field must be strictly taller than this for enemy spawning to have a non-empty range.
pub const MIN_FIELD_HEIGHT: f32 = 200.0;

/// Number of levels in a campaign. Clearing the last one opens the closing dialog.
pub const LEVEL_CAP: u32 = 3;

/// Enemies spawned on level 0. Each level adds one more.
pub const BASE_ENEMY_COUNT: u32 = 3;

/// Horizontal margin kept clear on both sides when spawning enemies.
pub const SPAWN_MARGIN_X: f32 = 50.0;
/// Top of the vertical spawn band.
pub const SPAWN_TOP: f32 = 100.0;
/// Distance from the bottom of the field to the bottom of the vertical spawn band.
pub const SPAWN_BOTTOM_MARGIN: f32 = 200.0;

/// Size used for any sprite that could not be loaded.
pub const PLACEHOLDER_SPRITE_SIZE: Vec2 = Vec2::new(32.0, 48.0);

/// Physics and movement tuning. All velocities are in pixels per tick.
pub mod mechanics {
    use glam::Vec2;

    /// Downward acceleration applied to the player and every enemy each tick.
    pub const GRAVITY: f32 = 0.5;

    /// Where the player appears when a session starts.
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 200.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 60.0);
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_JUMP_FORCE: f32 = 12.0;
    /// Horizontal velocity multiplier applied each tick when no direction is held.
    pub const PLAYER_FRICTION: f32 = 0.8;
    /// Below this magnitude the decaying horizontal velocity snaps to zero.
    pub const PLAYER_REST_THRESHOLD: f32 = 0.1;

    pub const ARROW_SIZE: Vec2 = Vec2::new(30.0, 10.0);
    pub const ARROW_SPEED: f32 = 10.0;
    /// Offset from the player's top-left corner at which arrows are released.
    pub const ARROW_SPAWN_OFFSET: Vec2 = Vec2::new(20.0, 0.0);

    /// Milliseconds between meeting split attempts.
    pub const MEETING_SPLIT_INTERVAL_MS: f32 = 10_000.0;
}
