//! Run state and the top-level game container.

use super::world::World;
use crate::config::GameConfig;
use crate::constants::{WIN_BANNER_SECONDS, WIN_CREDITS_SECONDS};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Debug switches, toggled from the keyboard and kept across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugFlags {
    /// Fast-forward with collisions off.
    pub fly_through: bool,
    /// Collisions and bounds checks off at normal speed.
    pub invulnerable: bool,
}

/// Which half of the scripted win sequence is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinStage {
    Banner,
    Credits,
}

/// Everything about the current run that is not an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    /// Derived from the player's x every frame.
    pub score: u32,
    /// Best score across runs in this session.
    pub best: u32,
    pub dead: bool,
    pub paused: bool,
    /// Set once per run when the last pipe pair is cleared.
    pub won: bool,
    /// Seconds since `won` was set.
    pub win_timer: f32,
    /// Seconds of unpaused play in this run.
    pub elapsed: f32,
    /// Drives the bird's idle flap while waiting on the start prompt.
    pub idle_clock: f32,
    pub debug: DebugFlags,
}

impl RunState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            best: 0,
            dead: false,
            paused: true,
            won: false,
            win_timer: 0.0,
            elapsed: 0.0,
            idle_clock: 0.0,
            debug: DebugFlags {
                fly_through: config.fly_through,
                invulnerable: config.invulnerable,
            },
        }
    }

    /// Fresh run: best score and debug flags carry over.
    pub fn reset_for_new_run(&mut self) {
        *self = Self {
            best: self.best,
            debug: self.debug,
            ..Self::new(&GameConfig::default())
        };
    }

    /// True before the first jump of a run.
    pub fn awaiting_start(&self) -> bool {
        self.paused && self.elapsed == 0.0
    }

    /// Current win stage, or None once the script has finished or never ran.
    pub fn win_stage(&self) -> Option<WinStage> {
        if !self.won {
            None
        } else if self.win_timer < WIN_BANNER_SECONDS {
            Some(WinStage::Banner)
        } else if self.win_timer < WIN_BANNER_SECONDS + WIN_CREDITS_SECONDS {
            Some(WinStage::Credits)
        } else {
            None
        }
    }

    /// Whether pipe hits and leaving the screen are ignored this frame.
    pub fn deathless(&self) -> bool {
        self.won || self.debug.fly_through || self.debug.invulnerable
    }
}

/// The whole game: entities, run state, settings and the pipe RNG.
pub struct Game {
    pub world: World,
    pub run: RunState,
    pub config: GameConfig,
    seed: u64,
    pub(crate) rng: StdRng,
}

impl Game {
    /// Build a game with its first run started (and paused on the prompt).
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut world = World::new();
        world.start(&config, &mut rng);
        log::info!(
            "new game: seed {}, {} pipe pairs",
            seed,
            config.pipe_pairs
        );
        Self {
            world,
            run: RunState::new(&config),
            config,
            seed,
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// End the current run and start the next one.
    pub fn restart(&mut self) {
        self.run.best = self.run.best.max(self.run.score);
        self.world.end();
        self.world.start(&self.config, &mut self.rng);
        self.run.reset_for_new_run();
        log::info!("run restarted, best {}", self.run.best);
    }
}
