use career_quest::game::GameStage;
use career_quest::input::commands::GameCommand;
use career_quest::input::{Bindings, HeldKeys, Key, KeyPress};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_key_names() {
    assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
    assert_eq!(Key::from_name("ArrowRight"), Key::ArrowRight);
    assert_eq!(Key::from_name("ArrowUp"), Key::ArrowUp);
    assert_eq!(Key::from_name("Enter"), Key::Enter);
    assert_eq!(Key::from_name(" "), Key::Space);
    assert_eq!(Key::from_name("Backspace"), Key::Backspace);
    assert_eq!(Key::from_name("Escape"), Key::Escape);
    assert_eq!(Key::from_name("F9"), Key::F9);
    assert_eq!(Key::from_name("+"), Key::Char('+'));
    assert_eq!(Key::from_name("é"), Key::Char('é'));
    assert_eq!(Key::from_name("Shift"), Key::Unidentified);
    assert_eq!(Key::from_name(""), Key::Unidentified);
}

#[test]
fn test_movement_keys_hold_flags() {
    assert_eq!(Key::ArrowLeft.held_flag(), Some(HeldKeys::LEFT));
    assert_eq!(Key::ArrowRight.held_flag(), Some(HeldKeys::RIGHT));
    assert_eq!(Key::ArrowUp.held_flag(), Some(HeldKeys::UP));
    assert_eq!(Key::ArrowDown.held_flag(), None);
    assert_eq!(Key::Space.held_flag(), None);
}

#[test]
fn test_bindings_outside_coding() {
    let bindings = Bindings::default();

    for stage in [GameStage::Title, GameStage::Playing, GameStage::Dialog] {
        assert_eq!(bindings.resolve(stage, Key::Enter.into()), Some(GameCommand::Confirm));
        assert_eq!(bindings.resolve(stage, Key::Space.into()), Some(GameCommand::Fire));
        assert_eq!(bindings.resolve(stage, Key::Char('M').into()), Some(GameCommand::ToggleMute));
        assert_eq!(bindings.resolve(stage, Key::Char('d').into()), Some(GameCommand::ToggleDebug));
        assert_eq!(bindings.resolve(stage, Key::F9.into()), Some(GameCommand::ToggleDebug));
        assert_eq!(bindings.resolve(stage, Key::Char('x').into()), None);
        assert_eq!(bindings.resolve(stage, Key::ArrowLeft.into()), None);
    }
}

#[test]
fn test_ctrl_chords_ignored_outside_coding() {
    let bindings = Bindings::default();
    assert_that(&bindings.resolve(GameStage::Title, KeyPress::with_ctrl(Key::Enter))).is_none();
}

#[test]
fn test_bindings_while_coding() {
    let bindings = Bindings::default();
    let coding = GameStage::Coding;

    assert_eq!(bindings.resolve(coding, KeyPress::with_ctrl(Key::Enter)), Some(GameCommand::Submit));
    assert_eq!(bindings.resolve(coding, Key::Enter.into()), None);
    assert_eq!(bindings.resolve(coding, Key::Backspace.into()), Some(GameCommand::Backspace));
    assert_eq!(bindings.resolve(coding, Key::Escape.into()), Some(GameCommand::Cancel));
    assert_eq!(bindings.resolve(coding, Key::Space.into()), Some(GameCommand::Type(' ')));
    assert_eq!(bindings.resolve(coding, Key::Char('m').into()), Some(GameCommand::Type('m')));
    assert_eq!(bindings.resolve(coding, Key::F9.into()), None);
    assert_eq!(bindings.resolve(coding, Key::ArrowUp.into()), None);
}
