//! Fixed timestep simulation tick
//!
//! Stage order is fixed: physics, collision, power-up decay, recycling,
//! camera & scoring, fall-out check. Nothing in here can fail.

use serde::{Deserialize, Serialize};

use super::collision::{self, PreStep};
use super::state::{Facing, GameEvent};
use super::world::World;
use super::{physics, powerup, spawn};
use crate::step_scale;

/// Player intent for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    pub move_left: bool,
    pub move_right: bool,
    /// Burn Propulsion fuel if any
    pub thrust: bool,
}

impl Intent {
    /// Held direction; none when neither or both are held
    pub fn horizontal(&self) -> Option<Facing> {
        match (self.move_left, self.move_right) {
            (true, false) => Some(Facing::Left),
            (false, true) => Some(Facing::Right),
            _ => None,
        }
    }
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, intent: &Intent, dt: f32) {
    world.events.clear();
    if world.game_over {
        return;
    }

    let scale = step_scale(dt);
    world.time_ticks += 1;
    let config = &world.config;
    let events = &mut world.events;
    let player = &mut world.player;

    // Physics
    let pre = PreStep::of(player);
    physics::integrate(player, intent, config, scale, events);

    // Collision
    player.grounded = false;
    if let Some(platform) = collision::land_on_platforms(player, &world.platforms, pre, config) {
        let boosted = player.powerups.bounce_boost.is_active();
        events.push(GameEvent::Landed { platform, boosted });
    }
    if let Some(hazard) = collision::hazard_contact(player, &world.hazards) {
        log::debug!("Hit hazard {} at tick {}", hazard, world.time_ticks);
        events.push(GameEvent::HazardHit { hazard });
        world.game_over = true;
        return;
    }
    collision::collect_pickups(player, &mut world.pickups, config, events);

    // Power-up decay
    powerup::decay(&mut player.powerups, events);

    // Recycling
    let rise = world.camera.scroll_speed * scale;
    spawn::advance(
        &mut world.platforms,
        &mut world.hazards,
        &mut world.pickups,
        rise,
        scale,
        config.field_width,
    );
    spawn::recycle_all(
        &mut world.platforms,
        &mut world.hazards,
        &mut world.pickups,
        config,
        &mut world.rng,
    );

    // Camera & scoring
    let gained = world.camera.follow(player, config);
    if gained > 0.0 {
        world.platforms.shift_y(gained);
        world.hazards.shift_y(gained);
        world.pickups.shift_y(gained);
    }
    if let Some(scroll_speed) = world.camera.ramp(config) {
        log::debug!(
            "Difficulty raised at height {:.0}: scroll speed {:.2}",
            world.camera.offset,
            scroll_speed
        );
        events.push(GameEvent::DifficultyRaised { scroll_speed });
    }

    // Fell below the field
    if player.pos.y > config.field_height {
        log::debug!("Fell out at tick {}", world.time_ticks);
        events.push(GameEvent::FellOut);
        world.game_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::consts::SIM_DT;
    use crate::sim::powerup::PowerUpSlot;
    use crate::sim::state::PickupKind;
    use glam::Vec2;

    fn world(seed: u64) -> World {
        World::new(WorldConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_intent_horizontal() {
        let mut intent = Intent::default();
        assert_eq!(intent.horizontal(), None);
        intent.move_left = true;
        assert_eq!(intent.horizontal(), Some(Facing::Left));
        intent.move_right = true;
        assert_eq!(intent.horizontal(), None);
        intent.move_left = false;
        assert_eq!(intent.horizontal(), Some(Facing::Right));
    }

    #[test]
    fn test_first_ticks_land_on_start_platform() {
        let mut world = world(12345);
        let mut landed = false;
        for _ in 0..10 {
            tick(&mut world, &Intent::default(), SIM_DT);
            if world
                .events()
                .iter()
                .any(|e| matches!(e, GameEvent::Landed { platform: 0, .. }))
            {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert!(world.player.grounded);
        assert_eq!(world.player.vel.y, -world.config().bounce_speed);
    }

    #[test]
    fn test_grounded_is_a_pulse() {
        let mut world = world(12345);
        while !world.player.grounded {
            tick(&mut world, &Intent::default(), SIM_DT);
        }
        tick(&mut world, &Intent::default(), SIM_DT);
        assert!(!world.player.grounded);
        assert!(world.player.vel.y < 0.0);
    }

    #[test]
    fn test_hazard_overlap_ends_game_and_freezes() {
        let mut world = world(7);
        world.hazards[0].pos = world.player.pos;
        world.hazards[0].size = world.player.size;

        tick(&mut world, &Intent::default(), SIM_DT);
        assert!(world.is_game_over());
        assert!(matches!(world.events()[0], GameEvent::HazardHit { hazard: 0 }));

        let frozen = world.snapshot();
        for _ in 0..5 {
            tick(
                &mut world,
                &Intent {
                    move_left: true,
                    thrust: true,
                    ..Default::default()
                },
                SIM_DT,
            );
        }
        let after = world.snapshot();
        assert_eq!(after.player, frozen.player);
        assert_eq!(after.platforms, frozen.platforms);
        assert_eq!(after.tick, frozen.tick);
        assert!(after.events.is_empty());
    }

    #[test]
    fn test_falling_out_ends_game() {
        let mut world = world(3);
        // Rising, so no platform can catch it on the way
        world.player.pos.y = world.config().field_height + 50.0;
        world.player.vel.y = -1.0;
        tick(&mut world, &Intent::default(), SIM_DT);
        assert!(world.is_game_over());
        assert!(world.events().contains(&GameEvent::FellOut));
    }

    #[test]
    fn test_thrust_climbs_and_scores() {
        let mut world = world(11);
        world.player.powerups.propulsion = PowerUpSlot::Active { remaining: 60 };
        let thrust = Intent {
            thrust: true,
            ..Default::default()
        };
        let mut last_score = 0;
        for _ in 0..60 {
            tick(&mut world, &thrust, SIM_DT);
            assert!(world.score() >= last_score);
            last_score = world.score();
        }
        assert!(!world.player.powerups.propulsion.is_active());
        assert!(world.score() > 0);
        assert!(world.player.pos.y >= world.config().midpoint() - 1e-3);
    }

    #[test]
    fn test_collecting_propulsion_twice_resets_fuel() {
        let mut world = world(5);
        world.player.powerups.propulsion = PowerUpSlot::Active { remaining: 3 };
        world.pickups[0].pos = world.player.pos + Vec2::new(5.0, 5.0);
        assert_eq!(world.pickups[0].kind, PickupKind::Propulsion);

        tick(&mut world, &Intent::default(), SIM_DT);
        assert_eq!(
            world.player.powerups.propulsion.remaining(),
            world.config().propulsion_fuel
        );
        assert!(world.pickups[0].collected);
    }

    #[test]
    fn test_bounce_boost_ticks_down() {
        let mut world = world(9);
        world.player.powerups.bounce_boost = PowerUpSlot::Active { remaining: 2 };
        tick(&mut world, &Intent::default(), SIM_DT);
        assert_eq!(world.player.powerups.bounce_boost.remaining(), 1);
        tick(&mut world, &Intent::default(), SIM_DT);
        assert!(!world.player.powerups.bounce_boost.is_active());
        assert!(world.events().contains(&GameEvent::PowerUpExpired {
            kind: PickupKind::BounceBoost
        }));
    }

    #[test]
    fn test_determinism() {
        // Two worlds with same seed should produce identical results
        let mut a = world(99999);
        let mut b = world(99999);
        let inputs = [
            Intent {
                move_left: true,
                ..Default::default()
            },
            Intent::default(),
            Intent {
                move_right: true,
                thrust: true,
                ..Default::default()
            },
        ];
        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input, SIM_DT);
            tick(&mut b, input, SIM_DT);
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn test_bad_dt_still_advances() {
        let mut world = world(1);
        let y = world.player.pos.y;
        tick(&mut world, &Intent::default(), f32::NAN);
        assert!(world.player.pos.y.is_finite());
        assert!(world.player.pos.y > y);
        assert_eq!(world.time_ticks(), 1);
    }
}
