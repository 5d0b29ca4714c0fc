//! The read-only view handed to whatever draws the game.

use glam::Vec2;
use tracing::{debug, trace};

use crate::entity::{Entity, EntityId, EntityKind};
use crate::game::challenge::CodingChallenge;
use crate::game::GameStage;

/// One entity as seen by a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Vec2,
    pub size: Vec2,
    pub active: bool,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        let body = entity.body();
        Self {
            id: body.id,
            kind: entity.kind(),
            position: body.position,
            size: body.size,
            active: body.active,
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub stage: GameStage,
    pub entities: Vec<EntityView>,
    pub level: u32,
    pub enemies_defeated: u32,
    /// Present only while coding.
    pub challenge: Option<CodingChallenge>,
    /// Retry prompt from the last rejected submission.
    pub feedback: Option<&'static str>,
    /// Closing message, present only in the dialog stage.
    pub dialog: Option<&'static str>,
    pub muted: bool,
    pub debug: bool,
}

impl Snapshot {
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|view| view.kind == kind).count()
    }
}

pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Writes frames to the log instead of a screen.
///
/// Stage changes are logged at debug level and every frame at trace level.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    last_stage: Option<GameStage>,
    frames: u64,
}

impl Renderer for TraceRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames += 1;

        if self.last_stage != Some(snapshot.stage) {
            debug!(stage = %snapshot.stage, level = snapshot.level, "Rendering new stage");
            if let Some(dialog) = snapshot.dialog {
                debug!(dialog, "Dialog shown");
            }
            self.last_stage = Some(snapshot.stage);
        }

        trace!(
            frame = self.frames,
            stage = %snapshot.stage,
            entities = snapshot.entities.len(),
            level = snapshot.level,
            defeated = snapshot.enemies_defeated,
            code = snapshot.challenge.as_ref().map(|c| c.user_code.as_str()),
            debug = snapshot.debug,
            "Frame"
        );
    }
}
