use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::asset::SpriteLibrary;
use crate::autopilot::{Action, Autopilot};
use crate::config::GameConfig;
use crate::constants::LOOP_TIME;
use crate::error::GameResult;
use crate::formatter;
use crate::game::events::GameEvent;
use crate::game::Game;
use crate::render::{Renderer, TraceRenderer};

/// Runs a whole session headlessly at a fixed frame rate, with the [`Autopilot`] at the keyboard.
pub struct App {
    game: Game,
    autopilot: Autopilot,
    renderer: TraceRenderer,
    max_ticks: u64,
    frames: u64,
    last_tick: Instant,
}

/// How a headless run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub frames: u64,
    pub level: u32,
    pub enemies_defeated: u32,
    pub completed: bool,
}

impl App {
    pub fn new(config: &GameConfig) -> GameResult<Self> {
        let mut game = Game::new(config)?;

        let sprites = SpriteLibrary::load(&config.asset_root);
        info!(
            root = %config.asset_root.display(),
            loaded = sprites.loaded_count(),
            "Sprites loaded"
        );
        game.finish_loading(&sprites)?;

        Ok(Self {
            game,
            autopilot: Autopilot::default(),
            renderer: TraceRenderer::default(),
            max_ticks: config.max_ticks,
            frames: 0,
            last_tick: Instant::now(),
        })
    }

    /// Runs one frame. Returns false once the session is over.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let snapshot = self.game.snapshot();
        if self.autopilot.is_done(&snapshot) {
            return false;
        }
        if self.frames >= self.max_ticks {
            warn!(frames = self.frames, "Frame limit reached before the campaign ended");
            return false;
        }

        for action in self.autopilot.plan(&snapshot) {
            match action {
                Action::Press(press) => self.game.on_key_down(press),
                Action::Release(key) => self.game.on_key_up(key),
            }
        }

        let dt = self.last_tick.elapsed().as_secs_f32() * 1000.0;
        self.last_tick = Instant::now();

        self.game.on_tick(dt);
        self.frames += 1;
        formatter::increment_tick();

        for event in self.game.drain_events() {
            log_event(event);
        }

        self.renderer.render(&self.game.snapshot());

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }

    pub fn summary(&self) -> Summary {
        Summary {
            frames: self.frames,
            level: self.game.level(),
            enemies_defeated: self.game.enemies_defeated(),
            completed: self.autopilot.is_done(&self.game.snapshot()),
        }
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::SubmissionRejected => info!("Submission rejected"),
        GameEvent::SoundtrackStarted => info!("Soundtrack started"),
        other => debug!(event = ?other, "Game event"),
    }
}
