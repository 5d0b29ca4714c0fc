use std::collections::HashMap;

use bitflags::bitflags;

use crate::game::GameStage;
use crate::input::commands::GameCommand;

pub mod commands;

/// A key, identified the way browsers name them in `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Space,
    Backspace,
    Escape,
    F9,
    /// Any other key that produces a single character.
    Char(char),
    /// Modifiers, function keys and anything else without a binding.
    Unidentified,
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Backspace" => Key::Backspace,
            "Escape" | "Esc" => Key::Escape,
            "F9" => Key::F9,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unidentified,
                }
            }
        }
    }

    /// The character this key types into a text buffer, if any.
    pub fn printable(self) -> Option<char> {
        match self {
            Key::Space => Some(' '),
            Key::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// The movement flag this key holds down, if any.
    pub fn held_flag(self) -> Option<HeldKeys> {
        match self {
            Key::ArrowLeft => Some(HeldKeys::LEFT),
            Key::ArrowRight => Some(HeldKeys::RIGHT),
            Key::ArrowUp => Some(HeldKeys::UP),
            _ => None,
        }
    }
}

/// A key going down, with the modifier state that matters to bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

bitflags! {
    /// Movement keys currently held down. Sampled once at the start of each tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HeldKeys: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
    }
}

/// Maps key presses to commands.
///
/// Outside the coding challenge a fixed table applies. While coding, the keyboard belongs to the text buffer,
/// so only the editing keys are interpreted and everything printable is typed.
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Key, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(Key::Enter, GameCommand::Confirm);
        key_bindings.insert(Key::Space, GameCommand::Fire);

        key_bindings.insert(Key::Char('m'), GameCommand::ToggleMute);
        key_bindings.insert(Key::Char('M'), GameCommand::ToggleMute);
        key_bindings.insert(Key::Char('d'), GameCommand::ToggleDebug);
        key_bindings.insert(Key::Char('D'), GameCommand::ToggleDebug);
        key_bindings.insert(Key::F9, GameCommand::ToggleDebug);

        Self { key_bindings }
    }
}

impl Bindings {
    /// Resolves a key press to a command for the given stage.
    ///
    /// Returns `None` for keys that mean nothing in that stage. Stage filtering of `Confirm` and `Fire` is left
    /// to the state machine, which ignores commands it does not expect.
    pub fn resolve(&self, stage: GameStage, press: KeyPress) -> Option<GameCommand> {
        if stage == GameStage::Coding {
            return match press.key {
                Key::Enter if press.ctrl => Some(GameCommand::Submit),
                Key::Backspace => Some(GameCommand::Backspace),
                Key::Escape => Some(GameCommand::Cancel),
                key => key.printable().map(GameCommand::Type),
            };
        }

        // Ctrl chords are browser shortcuts outside the editor.
        if press.ctrl {
            return None;
        }

        self.key_bindings.get(&press.key).copied()
    }
}
