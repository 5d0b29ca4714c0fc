//! This module contains the main game logic and state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::asset::SpriteProvider;
use crate::config::GameConfig;
use crate::constants::mechanics::{ARROW_SPAWN_OFFSET, PLAYER_SPAWN};
use crate::entity::manager::EntityManager;
use crate::error::{GameError, GameResult};
use crate::field::PlayField;
use crate::input::commands::GameCommand;
use crate::input::{Bindings, HeldKeys, Key, KeyPress};
use crate::render::{EntityView, Snapshot};

use self::challenge::{CodingChallenge, REJECTION_FEEDBACK};
use self::events::GameEvent;
use self::state::{LevelOutcome, Progress};

pub use self::state::GameStage;

pub mod challenge;
pub mod events;
pub mod state;

pub const DIALOG_TEXT: &str = "Congratulations! You defeated all the corporate challenges!";

/// The `Game` struct is the main entry point for the game.
///
/// It owns one session: the stage, the level and defeat counters, the entity collection and the open coding
/// challenge. Hosts feed it key events and frame ticks, then read back a [`Snapshot`] and drain [`GameEvent`]s.
///
/// Randomness comes from `R`, so tests can supply a generator that never rolls a random behavior.
pub struct Game<R = SmallRng> {
    stage: GameStage,
    progress: Progress,
    manager: EntityManager,
    challenge: Option<CodingChallenge>,
    feedback: Option<&'static str>,
    bindings: Bindings,
    held: HeldKeys,
    muted: bool,
    debug: bool,
    soundtrack_started: bool,
    events: Vec<GameEvent>,
    rng: R,
}

impl Game<SmallRng> {
    /// Creates a session from a validated configuration, seeding the RNG from it when a seed is set.
    pub fn new(config: &GameConfig) -> GameResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };

        let mut game = Self::with_rng(config.field()?, config.level_cap, rng);
        game.muted = config.muted;
        Ok(game)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(field: PlayField, level_cap: u32, rng: R) -> Self {
        Self {
            stage: GameStage::Loading,
            progress: Progress::new(level_cap),
            manager: EntityManager::new(field),
            challenge: None,
            feedback: None,
            bindings: Bindings::default(),
            held: HeldKeys::empty(),
            muted: false,
            debug: false,
            soundtrack_started: false,
            events: Vec::new(),
            rng,
        }
    }

    /// Sizes entities from the loaded sprites, places the player and the first wave, and shows the title.
    pub fn finish_loading(&mut self, sprites: &dyn SpriteProvider) -> GameResult<()> {
        if self.stage != GameStage::Loading {
            return Err(GameError::InvalidState(format!(
                "loading already finished, currently in {}",
                self.stage
            )));
        }

        self.manager.apply_sprites(sprites);
        self.manager.create_player(PLAYER_SPAWN);
        self.manager.spawn_enemies(self.progress.level(), &mut self.rng);
        self.set_stage(GameStage::Title);
        Ok(())
    }

    /// Changes the play field size mid-session, for hosts whose canvas follows the window.
    ///
    /// The floor, the walls and the arrow expiry edge move with it, and the next wave spawns inside the new
    /// bounds. On error the field is left unchanged.
    pub fn resize(&mut self, width: f32, height: f32) -> GameResult<()> {
        let field = PlayField::new(width, height)?;
        if field != *self.manager.field() {
            info!(width, height, "Resizing play field");
            self.manager.set_field(field);
        }
        Ok(())
    }

    pub fn on_key_down(&mut self, press: KeyPress) {
        if let Some(flag) = press.key.held_flag() {
            self.held.insert(flag);
        }

        if let Some(command) = self.bindings.resolve(self.stage, press) {
            self.apply(command);
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        if let Some(flag) = key.held_flag() {
            self.held.remove(flag);
        }
    }

    /// Runs a command against the current stage. Returns false if the stage ignored it.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match (self.stage, command) {
            (GameStage::Title, GameCommand::Confirm) => {
                if !self.soundtrack_started {
                    self.soundtrack_started = true;
                    self.events.push(GameEvent::SoundtrackStarted);
                }
                self.set_stage(GameStage::Playing);
            }
            (GameStage::Dialog, GameCommand::Confirm) => self.set_stage(GameStage::Playing),
            (GameStage::Playing, GameCommand::Fire) => {
                self.challenge = Some(CodingChallenge::default());
                self.feedback = None;
                self.set_stage(GameStage::Coding);
            }
            (GameStage::Coding, GameCommand::Type(c)) => {
                if let Some(challenge) = self.challenge.as_mut() {
                    challenge.push(c);
                }
            }
            (GameStage::Coding, GameCommand::Backspace) => {
                if let Some(challenge) = self.challenge.as_mut() {
                    challenge.backspace();
                }
            }
            (GameStage::Coding, GameCommand::Submit) => self.submit(),
            (GameStage::Coding, GameCommand::Cancel) => self.close_challenge(),
            (stage, GameCommand::ToggleMute) if stage != GameStage::Coding => {
                self.muted = !self.muted;
                self.events.push(GameEvent::MuteToggled { muted: self.muted });
            }
            (stage, GameCommand::ToggleDebug) if stage != GameStage::Coding => {
                self.debug = !self.debug;
                self.events.push(GameEvent::DebugToggled { enabled: self.debug });
            }
            (stage, command) => {
                trace!(%stage, ?command, "Command ignored");
                return false;
            }
        }

        true
    }

    fn submit(&mut self) {
        let solved = self.challenge.as_ref().is_some_and(CodingChallenge::is_solved);
        if !solved {
            debug!("Submission rejected");
            self.feedback = Some(REJECTION_FEEDBACK);
            self.events.push(GameEvent::SubmissionRejected);
            return;
        }

        let origin = self
            .manager
            .player()
            .map(|player| player.arrow_origin(ARROW_SPAWN_OFFSET))
            .unwrap_or(PLAYER_SPAWN + ARROW_SPAWN_OFFSET);
        let id = self.manager.create_arrow(origin);
        self.events.push(GameEvent::ProjectileFired(id));
        self.close_challenge();
    }

    fn close_challenge(&mut self) {
        self.challenge = None;
        self.feedback = None;
        self.set_stage(GameStage::Playing);
    }

    fn set_stage(&mut self, to: GameStage) {
        let from = self.stage;
        if from == to {
            return;
        }

        debug!(%from, %to, "Stage changed");
        self.stage = to;
        self.events.push(GameEvent::StageChanged { from, to });
    }

    /// Advances the simulation by one tick. Does nothing outside the playing stage.
    ///
    /// Returns true if the simulation ran.
    pub fn on_tick(&mut self, dt: f32) -> bool {
        if !self.stage.is_simulating() {
            return false;
        }

        self.manager.update(dt, self.held, &mut self.rng);

        let report = self.manager.resolve_collisions();
        self.progress.record_defeats(report.defeated.len() as u32);
        self.events
            .extend(report.defeated.iter().copied().map(GameEvent::EnemyDefeated));

        self.check_level_complete();
        true
    }

    fn check_level_complete(&mut self) {
        if self.manager.remaining_enemies() > 0 {
            return;
        }

        match self.progress.complete_level() {
            LevelOutcome::Advance(level) => {
                let count = self.manager.spawn_enemies(level, &mut self.rng);
                info!(level, enemies = count, "Level cleared");
                self.events.push(GameEvent::LevelAdvanced { level });
            }
            LevelOutcome::CampaignComplete(level) => {
                info!(level, defeated = self.progress.defeated(), "Campaign complete");
                self.events.push(GameEvent::CampaignCompleted { level });
                self.set_stage(GameStage::Dialog);
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            stage: self.stage,
            entities: self.manager.entities().iter().map(EntityView::from).collect(),
            level: self.progress.level(),
            enemies_defeated: self.progress.defeated(),
            challenge: self.challenge.clone(),
            feedback: self.feedback,
            dialog: (self.stage == GameStage::Dialog).then_some(DIALOG_TEXT),
            muted: self.muted,
            debug: self.debug,
        }
    }

    /// Takes every event queued since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn stage(&self) -> GameStage {
        self.stage
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn enemies_defeated(&self) -> u32 {
        self.progress.defeated()
    }

    pub fn challenge(&self) -> Option<&CodingChallenge> {
        self.challenge.as_ref()
    }

    pub fn feedback(&self) -> Option<&'static str> {
        self.feedback
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn manager(&self) -> &EntityManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut EntityManager {
        &mut self.manager
    }
}
