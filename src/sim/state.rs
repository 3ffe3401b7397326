//! Entities and per-tick events
//!
//! Plain data only. Behavior lives in the stage modules that own each
//! mutation (physics, collision, powerup, spawn, camera).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::pool::Body;
use super::powerup::PowerUps;
use crate::config::WorldConfig;

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    /// True only on the tick the player bounced off a platform
    pub grounded: bool,
    pub powerups: PowerUps,
}

impl Player {
    /// Spawn centered horizontally with feet at three quarters of the field
    pub fn spawn(config: &WorldConfig) -> Self {
        let size = Vec2::new(config.player_width, config.player_height);
        Self {
            pos: Vec2::new(
                (config.field_width - size.x) / 2.0,
                config.field_height * 0.75 - size.y,
            ),
            vel: Vec2::ZERO,
            size,
            facing: Facing::default(),
            grounded: false,
            powerups: PowerUps::default(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn active_power_up(&self) -> Option<PickupKind> {
        self.powerups.primary()
    }
}

/// Platform behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Static,
    /// Patrols horizontally, reversing at the field edges
    Moving { direction: f32, speed: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
}

/// A moving obstacle; touching it ends the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub size: Vec2,
    /// -1.0 (left) or 1.0 (right)
    pub direction: f32,
    pub speed: f32,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Propulsion,
    BounceBoost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PickupKind,
    /// Collected pickups are inert until recycled
    pub collected: bool,
}

macro_rules! impl_body {
    ($($ty:ty),*) => {
        $(
            impl Body for $ty {
                fn pos(&self) -> Vec2 {
                    self.pos
                }
                fn pos_mut(&mut self) -> &mut Vec2 {
                    &mut self.pos
                }
                fn size(&self) -> Vec2 {
                    self.size
                }
            }
        )*
    };
}

impl_body!(Platform, Hazard, Pickup);

/// Something that happened during the last tick, for sound and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bounced off the platform at this pool index
    Landed { platform: usize, boosted: bool },
    PickupCollected { kind: PickupKind },
    PowerUpExpired { kind: PickupKind },
    /// Touched the hazard at this pool index
    HazardHit { hazard: usize },
    /// Dropped below the bottom of the field
    FellOut,
    DifficultyRaised { scroll_speed: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawn_inside_field() {
        let config = WorldConfig::default();
        let player = Player::spawn(&config);
        let bounds = player.aabb();
        assert!(bounds.left() >= 0.0 && bounds.right() <= config.field_width);
        assert_eq!(bounds.bottom(), config.field_height * 0.75);
        assert_eq!(player.active_power_up(), None);
        assert!(!player.grounded);
    }

    #[test]
    fn test_facing_sign() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
    }

    #[test]
    fn test_body_aabb_matches_fields() {
        let hazard = Hazard {
            pos: Vec2::new(5.0, 6.0),
            size: Vec2::new(7.0, 8.0),
            direction: 1.0,
            speed: 2.0,
        };
        assert_eq!(hazard.aabb(), Aabb::new(Vec2::new(5.0, 6.0), Vec2::new(7.0, 8.0)));
    }
}
