//! Screen state machine and session driver
//!
//! Level select -> playing -> won/lost -> level select. The end screens go
//! back to level select on their own after a delay; quitting ends the whole
//! session from any screen.

use anyhow::{Result, bail};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::FrameClock;
use crate::settings::Settings;
use crate::sim::{Direction, GameState, Level, Outcome, TickInput, tick};

/// What the player asked for this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Close the game
    pub quit: bool,
    /// Paddle movement intent
    pub direction: Direction,
    /// Level picked on the level select screen
    pub select: Option<Level>,
}

/// The screen currently shown
#[derive(Debug, Clone)]
pub enum Screen {
    /// Waiting for the player to pick a level
    LevelSelect,
    /// A level in progress
    Playing(Box<GameState>),
    /// Out of lives; seconds left before returning to level select
    Lost { remaining: f32 },
    /// Every block destroyed; seconds left before returning to level select
    Won { remaining: f32 },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::LevelSelect => "LevelSelect",
            Screen::Playing(_) => "Playing",
            Screen::Lost { .. } => "Lost",
            Screen::Won { .. } => "Won",
        }
    }

    /// The level in progress, if any
    pub fn game(&self) -> Option<&GameState> {
        match self {
            Screen::Playing(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Screen::Playing(_))
    }

    pub fn is_end_screen(&self) -> bool {
        matches!(self, Screen::Lost { .. } | Screen::Won { .. })
    }

    /// End screen reached when a level finishes
    fn ended(outcome: Outcome, delay: f32) -> Self {
        match outcome {
            Outcome::Won => Screen::Won { remaining: delay },
            Outcome::Lost => Screen::Lost { remaining: delay },
        }
    }
}

/// Whether the host loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One play session: owns the current screen, the level RNG and the clock
pub struct Session {
    screen: Screen,
    settings: Settings,
    seed: u64,
    rng: Pcg32,
    clock: FrameClock,
}

impl Session {
    /// Start at level select. Uses the settings seed, or a random one.
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("Session starting with seed: {}", seed);
        Self {
            screen: Screen::LevelSelect,
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock: FrameClock::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Build a fresh level and start playing it. Only valid on level select.
    pub fn select_level(&mut self, level: Level) -> Result<()> {
        if !matches!(self.screen, Screen::LevelSelect) {
            bail!("cannot select a level from the {} screen", self.screen.name());
        }
        let state = GameState::new(
            level,
            self.settings.window_width,
            self.settings.window_height,
            &mut self.rng,
        )?;
        log::info!("Starting level {}", level.number());
        self.screen = Screen::Playing(Box::new(state));
        Ok(())
    }

    /// One loop iteration driven by the host's millisecond clock
    pub fn frame(&mut self, now_ms: u64, input: &FrameInput) -> Flow {
        let dt = self.clock.tick(now_ms);
        self.update(input, dt)
    }

    /// One loop iteration with an explicit frame delta in seconds
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Flow {
        if input.quit {
            log::info!("Quit requested on the {} screen", self.screen.name());
            return Flow::Quit;
        }

        if matches!(self.screen, Screen::LevelSelect) {
            if let Some(level) = input.select {
                if let Err(e) = self.select_level(level) {
                    log::error!("Could not start level {}: {:#}", level.number(), e);
                }
            }
            return Flow::Continue;
        }

        let next = match &mut self.screen {
            Screen::LevelSelect => None,
            Screen::Playing(state) => {
                let tick_input = TickInput {
                    direction: input.direction,
                };
                tick(state, &tick_input, dt).map(|outcome| {
                    log::info!(
                        "Level {} {:?} after {} frames",
                        state.level.number(),
                        outcome,
                        state.frames
                    );
                    Screen::ended(outcome, self.settings.end_screen_delay_secs)
                })
            }
            Screen::Lost { remaining } | Screen::Won { remaining } => {
                *remaining -= dt;
                (*remaining <= 0.0).then_some(Screen::LevelSelect)
            }
        };

        if let Some(next) = next {
            log::info!("Screen {} -> {}", self.screen.name(), next.name());
            self.screen = next;
        }
        Flow::Continue
    }
}
