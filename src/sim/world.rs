//! The world: sole owner of all simulation state

use super::camera::Camera;
use super::pool::Pool;
use super::rng::SimRng;
use super::snapshot::Snapshot;
use super::spawn::{self, Layout};
use super::state::{GameEvent, Hazard, Pickup, Platform, Player};
use super::tick::{self, Intent};
use crate::config::WorldConfig;
use crate::error::ConfigError;

/// Complete simulation state (deterministic given config, seed and intents)
///
/// Entities are public so embedders and tests can inspect or stage them;
/// pools cannot change size through this access.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) config: WorldConfig,
    seed: u64,
    pub(crate) rng: SimRng,
    pub player: Player,
    pub platforms: Pool<Platform>,
    pub hazards: Pool<Hazard>,
    pub pickups: Pool<Pickup>,
    pub(crate) camera: Camera,
    pub(crate) time_ticks: u64,
    pub(crate) game_over: bool,
    pub(crate) events: Vec<GameEvent>,
}

impl World {
    /// Create a world, rejecting configs the simulation cannot run
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SimRng::new(seed);
        let player = Player::spawn(&config);
        let Layout {
            platforms,
            hazards,
            pickups,
        } = spawn::initial_layout(&config, &player, &mut rng);
        let camera = Camera::new(&config);

        log::info!(
            "World created: {}x{} field, seed {}, {} platforms / {} hazards / {} pickups",
            config.field_width,
            config.field_height,
            seed,
            platforms.len(),
            hazards.len(),
            pickups.len()
        );

        Ok(Self {
            config,
            seed,
            rng,
            player,
            platforms,
            hazards,
            pickups,
            camera,
            time_ticks: 0,
            game_over: false,
            events: Vec::new(),
        })
    }

    /// Start a fresh session from `seed`, keeping the config
    pub fn reset(&mut self, seed: u64) {
        let mut rng = SimRng::new(seed);
        let player = Player::spawn(&self.config);
        let layout = spawn::initial_layout(&self.config, &player, &mut rng);

        self.seed = seed;
        self.rng = rng;
        self.player = player;
        self.platforms = layout.platforms;
        self.hazards = layout.hazards;
        self.pickups = layout.pickups;
        self.camera = Camera::new(&self.config);
        self.time_ticks = 0;
        self.game_over = false;
        self.events.clear();
        log::info!("World reset with seed {}", seed);
    }

    /// Advance one step; a no-op once the game is over
    pub fn tick(&mut self, dt: f32, intent: &Intent) {
        tick::tick(self, intent, dt);
    }

    /// Read-only copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            player: self.player.clone(),
            platforms: self.platforms.to_vec(),
            hazards: self.hazards.to_vec(),
            pickups: self.pickups.to_vec(),
            camera_offset: self.camera.offset,
            score: self.score(),
            scroll_speed: self.camera.scroll_speed,
            game_over: self.game_over,
            events: self.events.clone(),
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn score(&self) -> u64 {
        self.camera.score(&self.config)
    }

    pub fn camera_offset(&self) -> f32 {
        self.camera.offset
    }

    pub fn scroll_speed(&self) -> f32 {
        self.camera.scroll_speed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
