//! Per-frame view of the world for renderers
//!
//! A snapshot is an owned copy, so nothing that reads it can reach back
//! into the simulation.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Hazard, Pickup, PickupKind, Platform, Player};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Ticks simulated since the last reset
    pub tick: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub hazards: Vec<Hazard>,
    pub pickups: Vec<Pickup>,
    pub camera_offset: f32,
    pub score: u64,
    pub scroll_speed: f32,
    pub game_over: bool,
    /// What happened during the tick that produced this snapshot
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn active_power_up(&self) -> Option<PickupKind> {
        self.player.active_power_up()
    }

    /// Pickups that can still be collected
    pub fn live_pickups(&self) -> impl Iterator<Item = &Pickup> {
        self.pickups.iter().filter(|p| !p.collected)
    }
}
