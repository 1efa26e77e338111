//! The game engine: owns the session and drives update-then-render ticks
//! for whatever host schedules them.

use crate::render::{render, Surface2d};
use crate::session::{end_game, GameOverPanel, Phase};
use crate::systems::{
    handle_key_down, handle_key_up, handle_touch_end, handle_touch_start, is_restart_key,
};
use crate::{step, Config, ConfigError, Events, GameRng, InputState, World};

/// Host hook that arranges for [`GameEngine::tick`] to run on the next display refresh
pub trait FrameScheduler {
    /// Returns false if the host could not queue the frame
    fn request_frame(&mut self) -> bool;
}

/// What happened in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// A follow-up tick is queued
    pub reschedule: bool,
    /// Final score, set only on the tick the session ended
    pub game_over: Option<u32>,
}

pub struct GameEngine {
    config: Config,
    world: World,
    input: InputState,
    rng: GameRng,
    events: Events,
    frame_pending: bool,
}

impl GameEngine {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::info!(
            width = config.field_width,
            height = config.field_height,
            seed,
            "game engine created"
        );
        Ok(Self {
            world: World::new(&config),
            config,
            input: InputState::new(),
            rng: GameRng::new(seed),
            events: Events::new(),
            frame_pending: false,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Events of the most recent update
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn phase(&self) -> Phase {
        self.world.phase
    }

    pub fn is_running(&self) -> bool {
        self.world.is_running()
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        handle_key_down(&mut self.input, key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        handle_key_up(&mut self.input, key)
    }

    pub fn touch_start(&mut self, touch_x: f32) {
        handle_touch_start(&mut self.input, touch_x, self.config.field_width);
    }

    pub fn touch_end(&mut self) {
        handle_touch_end(&mut self.input);
    }

    /// Restart keys only act once the session has ended
    pub fn wants_restart(&self, key: &str) -> bool {
        !self.is_running() && is_restart_key(key)
    }

    /// Advance the simulation one tick. No-op once the session has ended.
    pub fn update(&mut self) -> &Events {
        step(
            &mut self.world,
            &self.input,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );
        &self.events
    }

    pub fn render(&self, surface: &mut impl Surface2d) {
        render(&self.world, &self.config, surface);
    }

    /// One display refresh: update, publish a game over if it just happened,
    /// render, and ask for the next frame while still running.
    pub fn tick(
        &mut self,
        surface: &mut impl Surface2d,
        panel: &mut impl GameOverPanel,
        scheduler: &mut impl FrameScheduler,
    ) -> TickOutcome {
        self.frame_pending = false;

        let collided = self.update().collided;
        let game_over = if collided {
            end_game(&self.world, &self.config, panel);
            Some(self.world.score.points)
        } else {
            None
        };

        self.render(surface);

        let reschedule = self.is_running() && self.schedule(scheduler);
        TickOutcome {
            reschedule,
            game_over,
        }
    }

    /// Request the very first frame
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.is_running() {
            self.schedule(scheduler);
        }
    }

    /// Reinitialize the session, hide the overlay and restart the loop
    pub fn reset(&mut self, panel: &mut impl GameOverPanel, scheduler: &mut impl FrameScheduler) {
        self.world.reset(&self.config);
        self.input.clear();
        self.events.clear();
        panel.hide();
        tracing::info!("game reset");
        self.schedule(scheduler);
    }

    /// At most one frame request may be outstanding, so a reset during a
    /// live loop does not start a second one. A refused request leaves no
    /// frame pending, so the next start or reset asks again.
    fn schedule(&mut self, scheduler: &mut impl FrameScheduler) -> bool {
        if !self.frame_pending {
            self.frame_pending = scheduler.request_frame();
            if !self.frame_pending {
                tracing::warn!("host refused frame request");
            }
        }
        self.frame_pending
    }
}
