//! Demo/idle mode controller
//!
//! Picks an intent from a snapshot alone, so it can stand in for a human at
//! the input boundary. Deterministic: same snapshot, same intent.

use super::pool::Body;
use super::snapshot::Snapshot;
use super::tick::Intent;
use crate::config::WorldConfig;

/// Horizontal distance under which the player counts as lined up
const DEADZONE: f32 = 6.0;
/// How far below the feet a platform may be and still be chosen
const LOOKAHEAD: f32 = 260.0;
/// Hazards closer than this (center to center) are steered away from
const HAZARD_RADIUS: f32 = 110.0;

/// Choose an intent for the next tick
pub fn autopilot_intent(snapshot: &Snapshot, config: &WorldConfig) -> Intent {
    let player = snapshot.player.aabb();
    let center = player.center();

    // Steer away from the closest threatening hazard first
    let threat = snapshot
        .hazards
        .iter()
        .map(|h| h.aabb().center())
        .filter(|c| c.distance(center) < HAZARD_RADIUS)
        .min_by(|a, b| a.distance(center).total_cmp(&b.distance(center)));

    let target_x = if let Some(hazard) = threat {
        // Run to the far side of the hazard
        if hazard.x >= center.x { f32::NEG_INFINITY } else { f32::INFINITY }
    } else {
        // Closest platform top at or below the feet within reach
        let feet = player.bottom();
        snapshot
            .platforms
            .iter()
            .map(|p| p.aabb())
            .filter(|p| p.top() >= feet - 4.0 && p.top() - feet < LOOKAHEAD)
            .min_by(|a, b| a.top().total_cmp(&b.top()))
            .map_or(config.field_width / 2.0, |p| p.center().x)
    };

    // Fall back to a nearby live pickup when already lined up with a platform
    let target_x = match snapshot.live_pickups().next() {
        Some(pickup) if threat.is_none() && (target_x - center.x).abs() < DEADZONE => {
            let c = pickup.aabb().center();
            if (c.y - center.y).abs() < 80.0 { c.x } else { target_x }
        }
        _ => target_x,
    };

    let dx = target_x - center.x;
    Intent {
        move_left: dx < -DEADZONE,
        move_right: dx > DEADZONE,
        thrust: snapshot.player.powerups.propulsion.is_active(),
    }
}
