//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick tuning tied to a fixed reference step
//! - Seeded RNG only, owned by the world
//! - Stable iteration order (pool order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod physics;
pub mod pool;
pub mod powerup;
pub mod replay;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use aabb::Aabb;
pub use autopilot::autopilot_intent;
pub use camera::Camera;
pub use pool::{Body, Pool};
pub use powerup::{PowerUpSlot, PowerUps};
pub use replay::{ReplayLog, ReplayRecorder, replay};
pub use rng::SimRng;
pub use snapshot::Snapshot;
pub use state::{Facing, GameEvent, Hazard, Pickup, PickupKind, Platform, PlatformKind, Player};
pub use tick::{Intent, tick};
pub use world::World;
