#![allow(dead_code)]

use career_quest::asset::Placeholders;
use career_quest::field::PlayField;
use career_quest::game::Game;
use career_quest::input::{Key, KeyPress};
use glam::Vec2;
use rand::RngCore;

pub const FIELD_WIDTH: f32 = 800.0;
pub const FIELD_HEIGHT: f32 = 600.0;

/// An RNG whose every draw is the maximum value.
///
/// `random_bool(p)` is false for any `p < 1`, so enemies start walking left and never turn, hop or float.
#[derive(Debug, Default, Clone)]
pub struct NeverRng;

impl RngCore for NeverRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0xFF);
    }
}

/// An RNG whose every draw is zero.
///
/// `random_bool(p)` is true for any `p > 0`, so every random behavior fires on every tick.
#[derive(Debug, Default, Clone)]
pub struct AlwaysRng;

impl RngCore for AlwaysRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

pub fn field() -> PlayField {
    PlayField::new(FIELD_WIDTH, FIELD_HEIGHT).unwrap()
}

pub fn floor() -> f32 {
    field().floor()
}

/// A game past loading, sitting on the title screen.
pub fn titled_game() -> Game<NeverRng> {
    let mut game = Game::with_rng(field(), 3, NeverRng);
    game.finish_loading(&Placeholders).unwrap();
    game.drain_events().for_each(drop);
    game
}

/// A game in the playing stage with the first wave spawned.
pub fn playing_game() -> Game<NeverRng> {
    let mut game = titled_game();
    press(&mut game, Key::Enter);
    game.drain_events().for_each(drop);
    game
}

pub fn press<R: rand::Rng>(game: &mut Game<R>, key: Key) {
    game.on_key_down(KeyPress::new(key));
}

pub fn type_text<R: rand::Rng>(game: &mut Game<R>, text: &str) {
    for c in text.chars() {
        let key = if c == ' ' { Key::Space } else { Key::Char(c) };
        press(game, key);
    }
}

pub fn submit<R: rand::Rng>(game: &mut Game<R>) {
    game.on_key_down(KeyPress::with_ctrl(Key::Enter));
}

/// Lines the current enemies up on the floor, well apart, and drops an arrow onto each one.
///
/// The next tick resolves every arrow against exactly one enemy.
pub fn arm_arrows_on_every_enemy<R: rand::Rng>(game: &mut Game<R>) -> usize {
    let floor = floor();
    let mut targets = Vec::new();

    for (index, enemy) in game.manager_mut().enemies_mut().enumerate() {
        enemy.body.position = Vec2::new(100.0 + 120.0 * index as f32, floor - enemy.body.size.y);
        enemy.grounded = true;
        enemy.velocity.y = 0.0;
        targets.push(enemy.body.position + Vec2::new(0.0, 10.0));
    }

    for target in &targets {
        game.manager_mut().create_arrow(*target);
    }

    targets.len()
}

/// Kills the whole wave and runs the tick that notices the field is clear.
pub fn clear_wave<R: rand::Rng>(game: &mut Game<R>) -> usize {
    let count = arm_arrows_on_every_enemy(game);
    game.on_tick(16.0);
    count
}
