//! Input recording and deterministic replay
//!
//! A run is fully described by its config, seed, step length and the intent
//! for every tick. Replaying that log on a fresh world must reproduce the
//! final snapshot exactly.

use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;
use super::tick::Intent;
use super::world::World;
use crate::config::WorldConfig;
use crate::consts::SIM_DT;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayLog {
    pub seed: u64,
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default)]
    pub config: WorldConfig,
    pub intents: Vec<Intent>,
}

impl ReplayLog {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let log: Self = serde_json::from_str(json)?;
        log.config.validate()?;
        Ok(log)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Collects intents as a session is played
#[derive(Debug, Clone)]
pub struct ReplayRecorder {
    log: ReplayLog,
}

impl ReplayRecorder {
    pub fn new(config: WorldConfig, seed: u64, dt: f32) -> Self {
        Self {
            log: ReplayLog {
                seed,
                dt,
                config,
                intents: Vec::new(),
            },
        }
    }

    /// Record the intent passed to one tick
    pub fn record(&mut self, intent: &Intent) {
        self.log.intents.push(*intent);
    }

    pub fn len(&self) -> usize {
        self.log.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.intents.is_empty()
    }

    pub fn finish(self) -> ReplayLog {
        self.log
    }
}

/// Re-run a log on a fresh world and return its final snapshot
pub fn replay(log: &ReplayLog) -> Result<Snapshot, ConfigError> {
    let mut world = World::new(log.config.clone(), log.seed)?;
    for intent in &log.intents {
        world.tick(log.dt, intent);
    }
    log::info!(
        "Replayed {} ticks: score {}, game over {}",
        log.intents.len(),
        world.score(),
        world.is_game_over()
    );
    Ok(world.snapshot())
}

const fn default_dt() -> f32 {
    SIM_DT
}
