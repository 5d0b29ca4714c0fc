//! A scripted player for headless runs.
//!
//! Walks to the left wall so every enemy is ahead of it, opens the coding challenge whenever no arrow is in
//! flight, types a passing answer one key per frame and submits it.

use smallvec::SmallVec;

use crate::entity::EntityKind;
use crate::game::GameStage;
use crate::input::{Key, KeyPress};
use crate::render::Snapshot;

pub const SOLUTION: &str = "return a + b;";

/// A key event to feed to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Press(KeyPress),
    Release(Key),
}

#[derive(Debug, Default)]
pub struct Autopilot {
    typed: usize,
    holding_left: bool,
}

impl Autopilot {
    /// The key events to send before the next tick.
    pub fn plan(&mut self, snapshot: &Snapshot) -> SmallVec<[Action; 2]> {
        let mut actions = SmallVec::new();

        match snapshot.stage {
            GameStage::Loading => {}
            GameStage::Title => actions.push(Action::Press(KeyPress::new(Key::Enter))),
            GameStage::Playing => {
                if !self.holding_left {
                    self.holding_left = true;
                    actions.push(Action::Press(KeyPress::new(Key::ArrowLeft)));
                }

                let at_wall = snapshot
                    .entities
                    .iter()
                    .find(|view| view.kind == EntityKind::Player)
                    .is_some_and(|player| player.position.x <= 0.0);

                if at_wall && snapshot.count(EntityKind::Arrow) == 0 {
                    self.typed = 0;
                    actions.push(Action::Press(KeyPress::new(Key::Space)));
                }
            }
            GameStage::Coding => match SOLUTION.chars().nth(self.typed) {
                Some(c) => {
                    self.typed += 1;
                    let key = if c == ' ' { Key::Space } else { Key::Char(c) };
                    actions.push(Action::Press(KeyPress::new(key)));
                }
                None => {
                    self.typed = 0;
                    actions.push(Action::Press(KeyPress::with_ctrl(Key::Enter)));
                }
            },
            GameStage::Dialog => {
                if self.holding_left {
                    self.holding_left = false;
                    actions.push(Action::Release(Key::ArrowLeft));
                }
            }
        }

        actions
    }

    /// The run is over once the closing dialog is up.
    pub fn is_done(&self, snapshot: &Snapshot) -> bool {
        snapshot.stage == GameStage::Dialog
    }
}
