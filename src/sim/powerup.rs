//! Power-up state machine
//!
//! Each slot is `Inactive -> Active(remaining) -> Inactive`. Propulsion is
//! spent by thrusting (see [`super::physics`]); BounceBoost ticks down once
//! per tick here. The two slots never affect each other.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, PickupKind};
use crate::config::WorldConfig;

/// One power-up's countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerUpSlot {
    #[default]
    Inactive,
    Active { remaining: u32 },
}

impl PowerUpSlot {
    pub fn is_active(&self) -> bool {
        matches!(self, PowerUpSlot::Active { .. })
    }

    pub fn remaining(&self) -> u32 {
        match self {
            PowerUpSlot::Active { remaining } => *remaining,
            PowerUpSlot::Inactive => 0,
        }
    }

    /// Replace the current charge (no stacking)
    pub fn activate(&mut self, amount: u32) {
        *self = if amount == 0 {
            PowerUpSlot::Inactive
        } else {
            PowerUpSlot::Active { remaining: amount }
        };
    }

    /// Spend one unit. Returns true if this drained the slot.
    pub fn consume(&mut self) -> bool {
        match self {
            PowerUpSlot::Active { remaining } => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    *self = PowerUpSlot::Inactive;
                    true
                } else {
                    false
                }
            }
            PowerUpSlot::Inactive => false,
        }
    }
}

/// The player's power-up slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerUps {
    /// Remaining fuel, in ticks of thrust
    pub propulsion: PowerUpSlot,
    /// Remaining boosted-bounce ticks
    pub bounce_boost: PowerUpSlot,
}

impl PowerUps {
    pub fn slot_mut(&mut self, kind: PickupKind) -> &mut PowerUpSlot {
        match kind {
            PickupKind::Propulsion => &mut self.propulsion,
            PickupKind::BounceBoost => &mut self.bounce_boost,
        }
    }

    /// Activate `kind` with its full grant from `config`
    pub fn grant(&mut self, kind: PickupKind, config: &WorldConfig) {
        let amount = match kind {
            PickupKind::Propulsion => config.propulsion_fuel,
            PickupKind::BounceBoost => config.bounce_boost_ticks,
        };
        self.slot_mut(kind).activate(amount);
    }

    /// Propulsion first when both are held
    pub fn primary(&self) -> Option<PickupKind> {
        if self.propulsion.is_active() {
            Some(PickupKind::Propulsion)
        } else if self.bounce_boost.is_active() {
            Some(PickupKind::BounceBoost)
        } else {
            None
        }
    }
}

/// Per-tick decay stage: BounceBoost loses one tick while active
pub fn decay(powerups: &mut PowerUps, events: &mut Vec<GameEvent>) {
    if powerups.bounce_boost.consume() {
        log::debug!("BounceBoost expired");
        events.push(GameEvent::PowerUpExpired {
            kind: PickupKind::BounceBoost,
        });
    }
}
