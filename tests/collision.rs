use career_quest::entity::collision::{Bounds, Collidable};
use career_quest::entity::{Body, EntityId};
use glam::Vec2;
use speculoos::prelude::*;

fn body(x: f32, y: f32, w: f32, h: f32) -> Body {
    Body::new(EntityId(0), Vec2::new(x, y), Vec2::new(w, h))
}

#[test]
fn test_overlapping_boxes_collide() {
    let a = body(0.0, 0.0, 30.0, 10.0);
    let b = body(20.0, 5.0, 64.0, 64.0);

    assert_that(&a.is_colliding_with(&b)).is_true();
    assert_that(&b.is_colliding_with(&a)).is_true();
}

#[test]
fn test_touching_edges_do_not_collide() {
    let a = body(0.0, 0.0, 30.0, 10.0);
    let right = body(30.0, 0.0, 10.0, 10.0);
    let below = body(0.0, 10.0, 10.0, 10.0);

    assert_that(&a.is_colliding_with(&right)).is_false();
    assert_that(&a.is_colliding_with(&below)).is_false();
}

#[test]
fn test_contained_box_collides() {
    let outer = Bounds::new(Vec2::ZERO, Vec2::splat(100.0));
    let inner = Bounds::new(Vec2::splat(40.0), Vec2::splat(10.0));

    assert_that(&outer.overlaps(&inner)).is_true();
    assert_that(&inner.overlaps(&outer)).is_true();
}

#[test]
fn test_bounds_max_corner() {
    let bounds = Bounds::of(&body(10.0, 20.0, 30.0, 40.0));
    assert_that(&bounds.max()).is_equal_to(Vec2::new(40.0, 60.0));
}
