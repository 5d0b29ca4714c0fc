use career_quest::asset::Placeholders;
use career_quest::autopilot::{Action, Autopilot, SOLUTION};
use career_quest::game::{Game, GameStage};
use career_quest::input::{Key, KeyPress};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use speculoos::prelude::*;

mod common;

#[test]
fn test_title_is_confirmed() {
    let game = common::titled_game();
    let mut autopilot = Autopilot::default();

    let actions = autopilot.plan(&game.snapshot());
    assert_eq!(actions.as_slice(), &[Action::Press(KeyPress::new(Key::Enter))]);
}

#[test]
fn test_types_solution_then_submits() {
    let mut game = common::playing_game();
    common::press(&mut game, Key::Space);
    let mut autopilot = Autopilot::default();

    for _ in 0..=SOLUTION.len() {
        for action in autopilot.plan(&game.snapshot()) {
            if let Action::Press(press) = action {
                game.on_key_down(press);
            }
        }
    }

    assert_eq!(game.stage(), GameStage::Playing);
    assert_eq!(game.snapshot().count(career_quest::entity::EntityKind::Arrow), 1);
}

#[test]
fn test_autopilot_finishes_campaign() {
    let mut game = Game::with_rng(common::field(), 3, SmallRng::seed_from_u64(5));
    game.finish_loading(&Placeholders).unwrap();
    let mut autopilot = Autopilot::default();

    let mut frames = 0;
    while !autopilot.is_done(&game.snapshot()) && frames < 100_000 {
        for action in autopilot.plan(&game.snapshot()) {
            match action {
                Action::Press(press) => game.on_key_down(press),
                Action::Release(key) => game.on_key_up(key),
            }
        }
        game.on_tick(1000.0 / 60.0);
        frames += 1;
    }

    assert_eq!(game.stage(), GameStage::Dialog);
    assert_that(&game.enemies_defeated()).is_equal_to(3 + 4 + 5);
}
