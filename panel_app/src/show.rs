// show.rs - The panel's endless Game of Life show
//
// One `tick` does one step of work and says how long to wait before the
// next one. A game runs until it stops changing, then one of the end
// effects plays, the panel rests, and a new game is seeded.

use std::time::Duration;

use conway::patterns::{BLINKER, GLIDER};
use conway::{CellView, FinishReason, GameOfLife, GameStatus};
use led_panel::{Diagnostic, Effect, EffectKind, LedPanel, MatrixDriver};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{AppConfig, TimingConfig};
use crate::error::ShowError;

/// Text handed to the scrolling display instead of seeding a board.
pub const LIFE_MESSAGE: &str = "Life!";

/// How a new game is set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
    Random,
    Pulsar,
    GliderGun,
    Message,
    Scatter,
}

impl Seeding {
    /// Map a roll in `0..100` onto the seeding odds: 40% random, 10% pulsar,
    /// 10% glider gun, 10% message, 30% scattered gliders and blinkers.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..40 => Seeding::Random,
            40..50 => Seeding::Pulsar,
            50..60 => Seeding::GliderGun,
            60..70 => Seeding::Message,
            _ => Seeding::Scatter,
        }
    }
}

enum Phase {
    Life,
    Effect(Box<dyn Effect>),
    Restart,
    Diagnostic(Option<Box<dyn Effect>>),
}

pub struct Show {
    life: GameOfLife,
    panel: LedPanel,
    phase: Phase,
    timing: TimingConfig,
    effects: Vec<EffectKind>,
    rng: SmallRng,
    pending_message: Option<String>,
    games_played: u64,
    last_finish: Option<FinishReason>,
}

impl Show {
    pub fn new(config: &AppConfig) -> Result<Self, ShowError> {
        config.validate()?;
        let panel = LedPanel::new(config.panel.devices_wide, config.panel.devices_high)?;
        let (width, height) = (panel.width() as usize, panel.height() as usize);
        let life = match config.seed {
            Some(seed) => GameOfLife::with_seed(width, height, config.life.wrap, config.life.max_generations, seed),
            None => GameOfLife::try_new(width, height, config.life.wrap, config.life.max_generations)?,
        };
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.rotate_left(32)),
            None => SmallRng::from_entropy(),
        };

        let mut show = Self {
            life,
            panel,
            phase: Phase::Life,
            timing: config.timing.clone(),
            effects: config.effects.clone(),
            rng,
            pending_message: None,
            games_played: 0,
            last_finish: None,
        };
        show.start_next_game();
        info!(
            width = panel.width(),
            height = panel.height(),
            tiles = panel.device_count(),
            "panel show ready"
        );
        Ok(show)
    }

    pub fn panel(&self) -> &LedPanel {
        &self.panel
    }

    pub fn life(&self) -> &GameOfLife {
        &self.life
    }

    pub fn life_mut(&mut self) -> &mut GameOfLife {
        &mut self.life
    }

    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    pub fn last_finish(&self) -> Option<FinishReason> {
        self.last_finish
    }

    pub fn phase_name(&self) -> &'static str {
        match &self.phase {
            Phase::Life => "life",
            Phase::Effect(effect) => effect.name(),
            Phase::Restart => "resting",
            Phase::Diagnostic(_) => "diagnostic",
        }
    }

    /// Message waiting for the text scroller, if the last seeding asked for one.
    pub fn take_message(&mut self) -> Option<String> {
        self.pending_message.take()
    }

    pub fn tick(&mut self, driver: &mut dyn MatrixDriver) -> Duration {
        match self.phase {
            Phase::Life => {
                draw_board(&self.panel, &self.life, driver);
                match self.life.evaluate() {
                    GameStatus::Running => {
                        self.life.compute_next_generation();
                        self.timing.life_tick()
                    }
                    GameStatus::Finished(reason) => {
                        let kind = self.effects[self.rng.gen_range(0..self.effects.len())];
                        info!(
                            ?reason,
                            generation = self.life.get_generation_count(),
                            effect = %kind,
                            "game over"
                        );
                        self.last_finish = Some(reason);
                        self.phase = Phase::Effect(kind.build(&self.panel));
                        self.tick(driver)
                    }
                }
            }
            Phase::Effect(ref mut effect) => match effect.next_frame(&self.panel, driver) {
                Some(hold) => hold,
                None => {
                    self.phase = Phase::Restart;
                    self.timing.end_pause()
                }
            },
            Phase::Restart => {
                self.start_next_game();
                self.phase = Phase::Life;
                self.timing.life_tick()
            }
            Phase::Diagnostic(ref mut animation) => {
                if let Some(effect) = animation {
                    if let Some(hold) = effect.next_frame(&self.panel, driver) {
                        return hold;
                    }
                    *animation = None;
                }
                self.timing.life_tick()
            }
        }
    }

    /// End the current game with `kind`; a new game follows it.
    pub fn play_effect(&mut self, kind: EffectKind) {
        debug!(effect = %kind, "effect requested");
        self.phase = Phase::Effect(kind.build(&self.panel));
    }

    /// Replace the show with a diagnostic image until [`Show::resume`].
    pub fn diagnostic(&mut self, diagnostic: Diagnostic, driver: &mut dyn MatrixDriver) {
        debug!(?diagnostic, "diagnostic requested");
        self.phase = Phase::Diagnostic(diagnostic.show(&self.panel, driver));
    }

    pub fn resume(&mut self) {
        self.phase = Phase::Life;
    }

    pub fn next_game(&mut self) {
        self.start_next_game();
        self.phase = Phase::Life;
    }

    fn start_next_game(&mut self) {
        let seeding = Seeding::from_roll(self.rng.gen_range(0..100));
        self.seed_game(seeding);
    }

    /// Set up the board for a new game. Pulsar and glider gun are laid over
    /// whatever the previous game left behind.
    pub fn seed_game(&mut self, seeding: Seeding) {
        self.games_played += 1;
        self.life.reset_generations();
        debug!(?seeding, game = self.games_played, "starting game");

        match seeding {
            Seeding::Random => self.life.randomize(),
            Seeding::Pulsar => self.life.create_pulsar(2, 0),
            Seeding::GliderGun => self.life.create_glider_gun(0, 0),
            Seeding::Message => self.pending_message = Some(LIFE_MESSAGE.to_owned()),
            Seeding::Scatter => self.scatter(),
        }
    }

    fn scatter(&mut self) {
        let width = self.life.get_width() as i32;
        let height = self.life.get_height() as i32;
        self.life.clear();

        let (glider_w, glider_h) = GLIDER.bounds();
        for _ in 0..self.rng.gen_range(1..4) {
            let x = self.rng.gen_range(0..(width - glider_w).max(1));
            let y = self.rng.gen_range(0..(height - glider_h).max(1));
            self.life.create_glider(x, y);
        }
        let (blinker_w, blinker_h) = BLINKER.bounds();
        for _ in 0..self.rng.gen_range(1..5) {
            let x = self.rng.gen_range(0..(width - blinker_w).max(1));
            let y = self.rng.gen_range(0..(height - blinker_h).max(1));
            self.life.create_blinker(x, y);
        }
    }
}

/// Clear the display and draw every cell of `board`.
pub fn draw_board<B: CellView + ?Sized>(panel: &LedPanel, board: &B, driver: &mut dyn MatrixDriver) {
    driver.clear();
    for y in 0..board.height() as i32 {
        for x in 0..board.width() as i32 {
            panel.draw_point(driver, x, y, board.cell(x, y));
        }
    }
}
