//! Player integration
//!
//! Advances the player by one step from intent and gravity. `scale` is the
//! step length relative to the 60 Hz reference (1.0 for a normal tick).

use super::state::{Facing, GameEvent, PickupKind, Player};
use super::tick::Intent;
use crate::config::WorldConfig;

/// Advance the player by one step
pub fn integrate(
    player: &mut Player,
    intent: &Intent,
    config: &WorldConfig,
    scale: f32,
    events: &mut Vec<GameEvent>,
) {
    // Horizontal: held direction sets speed, otherwise damp toward zero
    match intent.horizontal() {
        Some(facing) => {
            player.vel.x = facing.sign() * config.move_speed;
            player.facing = facing;
        }
        None => player.vel.x *= config.friction.powf(scale),
    }

    // Vertical: thrust overrides gravity while fuel lasts
    if intent.thrust && player.powerups.propulsion.is_active() {
        player.vel.y = -config.thrust_speed;
        if player.powerups.propulsion.consume() {
            log::debug!("Propulsion fuel exhausted");
            events.push(GameEvent::PowerUpExpired {
                kind: PickupKind::Propulsion,
            });
        }
    } else {
        player.vel.y += config.gravity * scale;
    }

    player.pos += player.vel * scale;
    wrap_horizontal(&mut player.pos.x, player.size.x, config.field_width);
}

/// Toroidal wrap: leaving one side re-enters from the other.
///
/// Keeps `x` within `[-width, field_width]`.
#[inline]
pub fn wrap_horizontal(x: &mut f32, width: f32, field_width: f32) {
    if *x + width < 0.0 {
        *x = field_width;
    } else if *x > field_width {
        *x = -width;
    }
}
