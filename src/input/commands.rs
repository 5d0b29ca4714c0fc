/// A discrete action requested by a key press, already resolved against the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Enter on the title screen or the closing dialog.
    Confirm,
    /// Open the coding challenge to earn an arrow.
    Fire,
    /// Submit the coding buffer for validation.
    Submit,
    /// Leave the coding challenge without submitting.
    Cancel,
    Backspace,
    Type(char),
    ToggleMute,
    ToggleDebug,
}
