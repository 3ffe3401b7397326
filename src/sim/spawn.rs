//! Initial layout, scrolling and recycling of pooled entities
//!
//! The world is conceptually endless, but every pool keeps a fixed size. Each
//! tick every member drifts up by the scroll speed. A member that leaves the
//! top of the field is moved below the bottom-most member of its pool with a
//! fresh random position and, for platforms and hazards, fresh motion.

use glam::Vec2;

use super::pool::{Body, Pool};
use super::rng::SimRng;
use super::state::{Hazard, Pickup, PickupKind, Platform, PlatformKind, Player};
use crate::config::{GapRange, WorldConfig};

/// Freshly laid out pools for a new session
#[derive(Debug, Clone)]
pub struct Layout {
    pub platforms: Pool<Platform>,
    pub hazards: Pool<Hazard>,
    pub pickups: Pool<Pickup>,
}

/// Lay out all pools for a new session.
///
/// One static platform sits right under the player's feet. The rest fill the
/// field above it, then continue below it. Hazards and pickups start below
/// the bottom edge so nothing touches the player at spawn.
pub fn initial_layout(config: &WorldConfig, player: &Player, rng: &mut SimRng) -> Layout {
    let platform_size = Vec2::new(config.platform_width, config.platform_height);
    let start_y = player.aabb().bottom();
    let start_x = (player.aabb().center().x - platform_size.x / 2.0)
        .clamp(0.0, config.field_width - platform_size.x);

    let mut platforms = Vec::with_capacity(config.platform_capacity);
    platforms.push(Platform {
        pos: Vec2::new(start_x, start_y),
        size: platform_size,
        kind: PlatformKind::Static,
    });

    let mut above = start_y;
    let mut below = start_y;
    for _ in 1..config.platform_capacity {
        let gap = rng.range(config.platform_gap.min, config.platform_gap.max);
        let y = if above - gap >= 0.0 {
            above -= gap;
            above
        } else {
            below += gap;
            below
        };
        let x = random_x(platform_size.x, config, rng);
        platforms.push(Platform {
            pos: Vec2::new(x, y),
            size: platform_size,
            kind: roll_platform_kind(config, rng),
        });
    }

    let hazard_size = Vec2::new(config.hazard_width, config.hazard_height);
    let mut cursor = config.field_height;
    let mut hazards = Vec::with_capacity(config.hazard_capacity);
    for _ in 0..config.hazard_capacity {
        cursor += rng.range(config.hazard_gap.min, config.hazard_gap.max);
        let x = random_x(hazard_size.x, config, rng);
        let (direction, speed) = roll_hazard_motion(config, rng);
        hazards.push(Hazard {
            pos: Vec2::new(x, cursor),
            size: hazard_size,
            direction,
            speed,
        });
    }

    let pickup_size = Vec2::new(config.pickup_width, config.pickup_height);
    let mut cursor = config.field_height;
    let mut pickups = Vec::with_capacity(config.pickup_capacity());
    for i in 0..config.pickup_capacity() {
        cursor += rng.range(config.pickup_gap.min, config.pickup_gap.max);
        let x = random_x(pickup_size.x, config, rng);
        // Alternate kinds so both show up early
        let kind = if i % 2 == 0 {
            PickupKind::Propulsion
        } else {
            PickupKind::BounceBoost
        };
        pickups.push(Pickup {
            pos: Vec2::new(x, cursor),
            size: pickup_size,
            kind,
            collected: false,
        });
    }

    Layout {
        platforms: Pool::from_vec(platforms),
        hazards: Pool::from_vec(hazards),
        pickups: Pool::from_vec(pickups),
    }
}

/// Scroll every member up by `rise` and patrol the moving ones sideways
pub fn advance(
    platforms: &mut Pool<Platform>,
    hazards: &mut Pool<Hazard>,
    pickups: &mut Pool<Pickup>,
    rise: f32,
    scale: f32,
    field_width: f32,
) {
    platforms.shift_y(-rise);
    hazards.shift_y(-rise);
    pickups.shift_y(-rise);

    for platform in platforms.iter_mut() {
        if let PlatformKind::Moving { direction, speed } = &mut platform.kind {
            patrol(&mut platform.pos.x, direction, *speed * scale, platform.size.x, field_width);
        }
    }
    for hazard in hazards.iter_mut() {
        patrol(
            &mut hazard.pos.x,
            &mut hazard.direction,
            hazard.speed * scale,
            hazard.size.x,
            field_width,
        );
    }
}

/// Move horizontally, clamping to the field and flipping at either edge
pub fn patrol(x: &mut f32, direction: &mut f32, step: f32, width: f32, field_width: f32) {
    let max_x = field_width - width;
    *x += *direction * step;
    if *x <= 0.0 {
        *x = 0.0;
        *direction = 1.0;
    } else if *x >= max_x {
        *x = max_x;
        *direction = -1.0;
    }
}

/// Recycle every member of every pool that has left the top of the field.
///
/// Returns how many members were recycled.
pub fn recycle_all(
    platforms: &mut Pool<Platform>,
    hazards: &mut Pool<Hazard>,
    pickups: &mut Pool<Pickup>,
    config: &WorldConfig,
    rng: &mut SimRng,
) -> usize {
    let mut count = recycle(platforms, config.platform_gap, config, rng, |platform, rng| {
        platform.kind = roll_platform_kind(config, rng);
    });
    count += recycle(hazards, config.hazard_gap, config, rng, |hazard, rng| {
        let (direction, speed) = roll_hazard_motion(config, rng);
        hazard.direction = direction;
        hazard.speed = speed;
    });
    count += recycle(pickups, config.pickup_gap, config, rng, |pickup, _| {
        pickup.collected = false;
    });
    count
}

fn recycle<T: Body>(
    pool: &mut Pool<T>,
    gap: GapRange,
    config: &WorldConfig,
    rng: &mut SimRng,
    mut reroll: impl FnMut(&mut T, &mut SimRng),
) -> usize {
    let mut count = 0;
    for i in 0..pool.len() {
        let (pos, size) = (pool[i].pos(), pool[i].size());
        if pos.y >= -size.y {
            continue;
        }

        let floor = pool
            .bottom_most_y_excluding(i)
            .map_or(config.field_height, |y| y.max(config.field_height));
        let x = random_x(size.x, config, rng);
        let y = floor + rng.range(gap.min, gap.max);

        let member = &mut pool[i];
        *member.pos_mut() = Vec2::new(x, y);
        reroll(member, rng);
        log::trace!("Recycled pool member {} to ({:.1}, {:.1})", i, x, y);
        count += 1;
    }
    count
}

fn random_x(width: f32, config: &WorldConfig, rng: &mut SimRng) -> f32 {
    rng.range(0.0, config.field_width - width)
}

fn roll_platform_kind(config: &WorldConfig, rng: &mut SimRng) -> PlatformKind {
    if rng.chance(config.moving_platform_chance) {
        PlatformKind::Moving {
            direction: rng.direction(),
            speed: rng.range(config.moving_platform_min_speed, config.moving_platform_max_speed),
        }
    } else {
        PlatformKind::Static
    }
}

fn roll_hazard_motion(config: &WorldConfig, rng: &mut SimRng) -> (f32, f32) {
    let direction = rng.direction();
    let speed = rng.range(config.hazard_min_speed, config.hazard_max_speed);
    (direction, speed)
}
