use career_quest::constants::mechanics::{PLAYER_SIZE, PLAYER_SPAWN};
use career_quest::entity::player::Player;
use career_quest::entity::EntityId;
use career_quest::input::HeldKeys;
use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn player_at(position: Vec2) -> Player {
    Player::new(EntityId(0), position, PLAYER_SIZE)
}

fn grounded_player(x: f32) -> Player {
    let mut player = player_at(Vec2::new(x, common::floor() - PLAYER_SIZE.y));
    player.grounded = true;
    player
}

#[test]
fn test_gravity_accumulates_while_airborne() {
    let field = common::field();
    let mut player = player_at(PLAYER_SPAWN);

    player.update(HeldKeys::empty(), &field);
    assert_eq!(player.velocity.y, 0.5);
    assert_eq!(player.body.position.y, 200.5);

    player.update(HeldKeys::empty(), &field);
    assert_eq!(player.velocity.y, 1.0);
    assert_eq!(player.body.position.y, 201.5);
    assert_that(&player.grounded).is_false();
}

#[test]
fn test_horizontal_velocity_is_set_not_accumulated() {
    let field = common::field();
    let mut player = grounded_player(300.0);

    player.update(HeldKeys::RIGHT, &field);
    player.update(HeldKeys::RIGHT, &field);
    assert_eq!(player.velocity.x, 5.0);
    assert_eq!(player.body.position.x, 310.0);

    player.update(HeldKeys::LEFT, &field);
    assert_eq!(player.velocity.x, -5.0);
    assert_eq!(player.body.position.x, 305.0);
}

#[test]
fn test_left_wins_when_both_held() {
    let field = common::field();
    let mut player = grounded_player(300.0);

    player.update(HeldKeys::LEFT | HeldKeys::RIGHT, &field);
    assert_eq!(player.velocity.x, -5.0);
}

#[test]
fn test_friction_decays_and_snaps_to_rest() {
    let field = common::field();
    let mut player = grounded_player(300.0);

    player.velocity.x = 1.0;
    player.update(HeldKeys::empty(), &field);
    assert_that(&player.velocity.x).is_close_to(0.8, 1e-6);

    player.velocity.x = 0.11;
    player.update(HeldKeys::empty(), &field);
    assert_eq!(player.velocity.x, 0.0);
}

#[test]
fn test_jump_requires_ground() {
    let field = common::field();

    let mut player = grounded_player(300.0);
    let start_y = player.body.position.y;
    player.update(HeldKeys::UP, &field);
    assert_eq!(player.velocity.y, -12.0);
    assert_eq!(player.body.position.y, start_y - 12.0);
    assert_that(&player.jumping).is_true();
    assert_that(&player.grounded).is_false();

    // Still rising: holding up again does nothing but gravity.
    player.update(HeldKeys::UP, &field);
    assert_eq!(player.velocity.y, -11.5);
}

#[test]
fn test_landing_clamps_to_floor() {
    let field = common::field();
    let mut player = player_at(Vec2::new(300.0, common::floor() - PLAYER_SIZE.y - 0.2));
    player.velocity.y = 5.0;
    player.jumping = true;

    player.update(HeldKeys::empty(), &field);

    assert_eq!(player.body.position.y, common::floor() - PLAYER_SIZE.y);
    assert_eq!(player.velocity.y, 0.0);
    assert_that(&player.grounded).is_true();
    assert_that(&player.jumping).is_false();
}

#[test]
fn test_walls_stop_the_player() {
    let field = common::field();

    let mut player = grounded_player(2.0);
    player.update(HeldKeys::LEFT, &field);
    assert_eq!(player.body.position.x, 0.0);
    assert_eq!(player.velocity.x, 0.0);

    let mut player = grounded_player(common::FIELD_WIDTH - PLAYER_SIZE.x - 1.0);
    player.update(HeldKeys::RIGHT, &field);
    assert_eq!(player.body.position.x, common::FIELD_WIDTH - PLAYER_SIZE.x);
    assert_eq!(player.velocity.x, 0.0);
}

#[test]
fn test_arrow_origin_offsets_from_top_left() {
    let player = player_at(Vec2::new(10.0, 20.0));
    assert_eq!(player.arrow_origin(Vec2::new(20.0, 0.0)), Vec2::new(30.0, 20.0));
}
