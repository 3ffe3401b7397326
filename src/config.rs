//! World tuning
//!
//! All gameplay constants live here so they can be tweaked or loaded from
//! JSON without touching simulation code. Per-tick values assume the 60 Hz
//! reference step ([`crate::consts::SIM_DT`]).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest size any single entity pool may have
pub const MAX_POOL_CAPACITY: usize = 4096;

/// Inclusive range for the vertical gap between a recycled entity and the
/// bottom-most member of its pool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapRange {
    pub min: f32,
    pub max: f32,
}

impl GapRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn validate(&self, pool: &'static str) -> Result<(), ConfigError> {
        let ok = self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidGapRange {
                pool,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Complete world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal speed while a direction is held (px/tick)
    pub move_speed: f32,
    /// Multiplicative horizontal damping per tick with no direction held
    pub friction: f32,
    /// Downward acceleration (px/tick²)
    pub gravity: f32,

    // === Landing ===
    /// Upward speed after a normal platform bounce (px/tick)
    pub bounce_speed: f32,
    /// Upward speed after a bounce with BounceBoost active (px/tick)
    pub boosted_bounce_speed: f32,
    /// How far past a platform top the feet may have started the tick and
    /// still land
    pub landing_tolerance: f32,

    // === Power-ups ===
    /// Upward speed while thrusting with Propulsion (px/tick)
    pub thrust_speed: f32,
    /// Fuel granted by a Propulsion pickup (ticks of thrust)
    pub propulsion_fuel: u32,
    /// Duration granted by a BounceBoost pickup (ticks)
    pub bounce_boost_ticks: u32,

    // === Platforms ===
    pub platform_capacity: usize,
    pub platform_width: f32,
    pub platform_height: f32,
    /// Probability a spawned platform moves horizontally
    pub moving_platform_chance: f32,
    pub moving_platform_min_speed: f32,
    pub moving_platform_max_speed: f32,
    pub platform_gap: GapRange,

    // === Hazards ===
    pub hazard_capacity: usize,
    pub hazard_width: f32,
    pub hazard_height: f32,
    pub hazard_min_speed: f32,
    pub hazard_max_speed: f32,
    pub hazard_gap: GapRange,

    // === Pickups ===
    /// Pickups of each kind (the pool holds twice this many)
    pub pickups_per_kind: usize,
    pub pickup_width: f32,
    pub pickup_height: f32,
    pub pickup_gap: GapRange,

    // === Scrolling & difficulty ===
    /// Upward drift of every pooled entity at session start (px/tick)
    pub initial_scroll_speed: f32,
    pub max_scroll_speed: f32,
    /// Scroll speed added at each difficulty threshold
    pub ramp_step: f32,
    /// Height climbed before the first difficulty increase
    pub ramp_start: f32,
    /// Height climbed between later difficulty increases
    pub ramp_interval: f32,
    /// Score awarded per unit of height climbed
    pub score_per_height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            field_width: 400.0,
            field_height: 600.0,

            player_width: 40.0,
            player_height: 40.0,
            move_speed: 5.0,
            friction: 0.8,
            gravity: 0.4,

            // Apex of a normal bounce is ~151 px, boosted ~320 px
            bounce_speed: 11.0,
            boosted_bounce_speed: 16.0,
            landing_tolerance: 12.0,

            thrust_speed: 8.0,
            propulsion_fuel: 120,
            bounce_boost_ticks: 300,

            platform_capacity: 12,
            platform_width: 70.0,
            platform_height: 15.0,
            moving_platform_chance: 0.3,
            moving_platform_min_speed: 1.0,
            moving_platform_max_speed: 2.0,
            // Max gap stays well under a normal bounce apex so every next
            // platform is reachable
            platform_gap: GapRange::new(55.0, 100.0),

            hazard_capacity: 3,
            hazard_width: 40.0,
            hazard_height: 40.0,
            hazard_min_speed: 1.0,
            hazard_max_speed: 2.5,
            hazard_gap: GapRange::new(450.0, 800.0),

            pickups_per_kind: 2,
            pickup_width: 25.0,
            pickup_height: 25.0,
            pickup_gap: GapRange::new(500.0, 1100.0),

            initial_scroll_speed: 0.5,
            max_scroll_speed: 3.0,
            ramp_step: 0.25,
            ramp_start: 1000.0,
            ramp_interval: 500.0,
            score_per_height: 2.0,
        }
    }
}

impl WorldConfig {
    /// Check every value the simulation relies on.
    ///
    /// A world is only ever built from a config that passes this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.field_width) || !positive(self.field_height) {
            return Err(ConfigError::InvalidFieldSize {
                width: self.field_width,
                height: self.field_height,
            });
        }

        let sizes = [
            ("player", self.player_width, self.player_height),
            ("platform", self.platform_width, self.platform_height),
            ("hazard", self.hazard_width, self.hazard_height),
            ("pickup", self.pickup_width, self.pickup_height),
        ];
        for (entity, width, height) in sizes {
            if !positive(width) || !positive(height) {
                return Err(ConfigError::InvalidEntitySize {
                    entity,
                    width,
                    height,
                });
            }
            if width > self.field_width {
                return Err(ConfigError::EntityWiderThanField {
                    entity,
                    width,
                    field_width: self.field_width,
                });
            }
        }

        if self.platform_capacity == 0 {
            return Err(ConfigError::EmptyPool { pool: "platform" });
        }
        let pools = [
            ("platform", self.platform_capacity),
            ("hazard", self.hazard_capacity),
            ("pickup", self.pickup_capacity()),
        ];
        for (pool, capacity) in pools {
            if capacity > MAX_POOL_CAPACITY {
                return Err(ConfigError::PoolTooLarge {
                    pool,
                    capacity,
                    max: MAX_POOL_CAPACITY,
                });
            }
        }

        self.platform_gap.validate("platform")?;
        self.hazard_gap.validate("hazard")?;
        self.pickup_gap.validate("pickup")?;

        let non_negative = [
            ("move_speed", self.move_speed),
            ("gravity", self.gravity),
            ("bounce_speed", self.bounce_speed),
            ("boosted_bounce_speed", self.boosted_bounce_speed),
            ("landing_tolerance", self.landing_tolerance),
            ("thrust_speed", self.thrust_speed),
            ("moving_platform_min_speed", self.moving_platform_min_speed),
            ("moving_platform_max_speed", self.moving_platform_max_speed),
            ("hazard_min_speed", self.hazard_min_speed),
            ("hazard_max_speed", self.hazard_max_speed),
            ("initial_scroll_speed", self.initial_scroll_speed),
            ("max_scroll_speed", self.max_scroll_speed),
            ("ramp_step", self.ramp_step),
            ("ramp_start", self.ramp_start),
            ("score_per_height", self.score_per_height),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }

        let unit = [
            ("friction", self.friction),
            ("moving_platform_chance", self.moving_platform_chance),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }

        if !positive(self.ramp_interval) {
            return Err(ConfigError::InvalidParameter {
                name: "ramp_interval",
                value: self.ramp_interval,
            });
        }
        if self.moving_platform_min_speed > self.moving_platform_max_speed {
            return Err(ConfigError::InvalidParameter {
                name: "moving_platform_min_speed",
                value: self.moving_platform_min_speed,
            });
        }
        if self.hazard_min_speed > self.hazard_max_speed {
            return Err(ConfigError::InvalidParameter {
                name: "hazard_min_speed",
                value: self.hazard_min_speed,
            });
        }
        if self.max_scroll_speed < self.initial_scroll_speed {
            return Err(ConfigError::InvalidParameter {
                name: "max_scroll_speed",
                value: self.max_scroll_speed,
            });
        }

        Ok(())
    }

    /// Parse and validate a config from JSON. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total pickup pool size (both kinds), saturating on overflow
    pub fn pickup_capacity(&self) -> usize {
        self.pickups_per_kind.saturating_mul(2)
    }

    /// Vertical midpoint of the visible field
    pub fn midpoint(&self) -> f32 {
        self.field_height / 2.0
    }
}
