//! Collision detection and response
//!
//! Three checks run in order every tick: platform landings, hazard contact,
//! pickup contact. Platforms are one-way: they only catch a descending
//! player whose feet crossed the top edge this tick.

use super::aabb::Aabb;
use super::pool::Body;
use super::state::{GameEvent, Hazard, Pickup, Platform, Player};
use crate::config::WorldConfig;

/// Player motion from before this tick's integration
#[derive(Debug, Clone, Copy)]
pub struct PreStep {
    /// Bottom edge of the player before integration
    pub bottom: f32,
    /// Vertical velocity before integration
    pub vel_y: f32,
}

impl PreStep {
    pub fn of(player: &Player) -> Self {
        Self {
            bottom: player.aabb().bottom(),
            vel_y: player.vel.y,
        }
    }
}

/// Whether feet moving from `prev_bottom` to `player.bottom()` land on
/// `platform` this tick
pub fn crosses_top(player: &Aabb, prev_bottom: f32, platform: &Aabb, tolerance: f32) -> bool {
    let top = platform.top();
    player.overlaps_horizontally(platform) && prev_bottom <= top + tolerance && player.bottom() >= top
}

/// Bounce off the first platform (in pool order) the player lands on.
///
/// Returns the platform's index. Sets `grounded` for this tick only; the
/// caller clears it at the start of each tick.
pub fn land_on_platforms(
    player: &mut Player,
    platforms: &[Platform],
    pre: PreStep,
    config: &WorldConfig,
) -> Option<usize> {
    // Rising (or momentarily still) players pass through platforms
    if pre.vel_y <= 0.0 || player.vel.y <= 0.0 {
        return None;
    }

    let bounds = player.aabb();
    let index = platforms
        .iter()
        .position(|p| crosses_top(&bounds, pre.bottom, &p.aabb(), config.landing_tolerance))?;

    player.pos.y = platforms[index].pos.y - player.size.y;
    player.vel.y = if player.powerups.bounce_boost.is_active() {
        -config.boosted_bounce_speed
    } else {
        -config.bounce_speed
    };
    player.grounded = true;
    Some(index)
}

/// First hazard the player touches, if any
pub fn hazard_contact(player: &Player, hazards: &[Hazard]) -> Option<usize> {
    let bounds = player.aabb();
    hazards.iter().position(|h| bounds.overlaps(&h.aabb()))
}

/// Collect every uncollected pickup the player touches
pub fn collect_pickups(
    player: &mut Player,
    pickups: &mut [Pickup],
    config: &WorldConfig,
    events: &mut Vec<GameEvent>,
) {
    let bounds = player.aabb();
    for pickup in pickups.iter_mut() {
        if pickup.collected || !bounds.overlaps(&pickup.aabb()) {
            continue;
        }
        pickup.collected = true;
        player.powerups.grant(pickup.kind, config);
        log::debug!("Collected {:?}", pickup.kind);
        events.push(GameEvent::PickupCollected { kind: pickup.kind });
    }
}
