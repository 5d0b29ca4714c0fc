use crate::entity::enemy::EnemyKind;
use crate::entity::EntityId;
use crate::game::GameStage;

/// Something the host may want to react to, such as playing a sound or updating a HUD.
///
/// Events are queued by the [`Game`](crate::game::Game) and drained by the host after each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    StageChanged { from: GameStage, to: GameStage },
    /// The field was cleared and a new wave spawned for `level`.
    LevelAdvanced { level: u32 },
    /// The last level was cleared.
    CampaignCompleted { level: u32 },
    EnemyDefeated(EnemyKind),
    ProjectileFired(EntityId),
    SubmissionRejected,
    /// Emitted when play first starts from the title screen.
    SoundtrackStarted,
    MuteToggled { muted: bool },
    DebugToggled { enabled: bool },
}
