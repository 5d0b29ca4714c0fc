use strum_macros::{Display, IntoStaticStr};

/// The top-level mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum GameStage {
    /// Waiting on sprites. Nothing has been spawned yet.
    #[default]
    Loading,
    Title,
    /// The only stage in which the simulation advances.
    Playing,
    /// The coding challenge is open and the keyboard types into it.
    Coding,
    /// The closing message after the last level.
    Dialog,
}

impl GameStage {
    pub fn is_simulating(self) -> bool {
        self == GameStage::Playing
    }
}

/// What clearing the field leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// Spawn a new wave for this level.
    Advance(u32),
    /// The cap was reached at this level.
    CampaignComplete(u32),
}

/// Level and defeat counters for one session. Neither ever decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    level: u32,
    defeated: u32,
    level_cap: u32,
}

impl Progress {
    pub fn new(level_cap: u32) -> Self {
        Self {
            level: 0,
            defeated: 0,
            level_cap,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn defeated(&self) -> u32 {
        self.defeated
    }

    pub fn record_defeats(&mut self, count: u32) {
        self.defeated = self.defeated.saturating_add(count);
    }

    /// Bumps the level after a clear and reports whether the campaign is over.
    pub fn complete_level(&mut self) -> LevelOutcome {
        self.level = self.level.saturating_add(1);
        if self.level >= self.level_cap {
            LevelOutcome::CampaignComplete(self.level)
        } else {
            LevelOutcome::Advance(self.level)
        }
    }
}
