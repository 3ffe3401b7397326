//! Camera, scoring and difficulty ramp

use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::config::WorldConfig;

/// Height tracking for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Cumulative height climbed
    pub offset: f32,
    /// Current upward drift of pooled entities (px/tick)
    pub scroll_speed: f32,
    /// Offset at which the next difficulty increase happens
    pub next_ramp_at: f32,
}

impl Camera {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            offset: 0.0,
            scroll_speed: config.initial_scroll_speed,
            next_ramp_at: config.ramp_start,
        }
    }

    /// Keep the player out of the upper half of the field.
    ///
    /// Returns the height gained this tick (0 if the player is at or below
    /// the midpoint). The caller shifts the world down by the same amount.
    pub fn follow(&mut self, player: &mut Player, config: &WorldConfig) -> f32 {
        let midpoint = config.midpoint();
        if player.pos.y >= midpoint {
            return 0.0;
        }
        let gained = midpoint - player.pos.y;
        self.offset += gained;
        player.pos.y = midpoint;
        gained
    }

    /// Raise scroll speed for every threshold crossed since the last call.
    ///
    /// Returns the new speed if it changed.
    pub fn ramp(&mut self, config: &WorldConfig) -> Option<f32> {
        if self.offset < self.next_ramp_at {
            return None;
        }
        let before = self.scroll_speed;
        let crossed = ((self.offset - self.next_ramp_at) / config.ramp_interval).floor() + 1.0;
        self.next_ramp_at += crossed * config.ramp_interval;
        self.scroll_speed = (self.scroll_speed + crossed * config.ramp_step).min(config.max_scroll_speed);
        (self.scroll_speed > before).then_some(self.scroll_speed)
    }

    /// Score for the height climbed so far
    pub fn score(&self, config: &WorldConfig) -> u64 {
        (self.offset * config.score_per_height).floor() as u64
    }
}
