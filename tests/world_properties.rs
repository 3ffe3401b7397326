//! Property tests for the world simulation.
//!
//! These tests use `proptest` to generate random seeds and intent sequences
//! and verify that world invariants hold after every tick.

use proptest::prelude::*;
use sky_hop::consts::SIM_DT;
use sky_hop::sim::{GameEvent, PickupKind, World};
use sky_hop::{Intent, WorldConfig};

fn intent_strategy() -> impl Strategy<Value = Intent> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(move_left, move_right, thrust)| Intent {
        move_left,
        move_right,
        thrust,
    })
}

/// Mostly the reference step, sometimes a jittery or stalled frame
fn dt_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![
        4 => Just(SIM_DT),
        1 => (1u32..120u32).prop_map(|ms| ms as f32 / 1000.0),
    ]
}

/// Runs of intents held for a few ticks each, closer to how people play
fn input_strategy() -> impl Strategy<Value = Vec<(Intent, f32, usize)>> {
    prop::collection::vec((intent_strategy(), dt_strategy(), 1usize..30), 1..40)
}

fn world(seed: u64) -> World {
    World::new(WorldConfig::default(), seed).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tick_preserves_invariants(seed in any::<u64>(), runs in input_strategy()) {
        let mut world = world(seed);
        let config = world.config().clone();
        let counts = (world.platforms.len(), world.hazards.len(), world.pickups.len());

        for (intent, dt, hold) in runs {
            for _ in 0..hold {
                let was_over = world.is_game_over();
                let score = world.score();
                let scroll = world.scroll_speed();
                let pre_vy = world.player.vel.y;
                let pre_fuel = world.player.powerups.propulsion;

                world.tick(dt, &intent);

                if was_over {
                    prop_assert!(world.events().is_empty());
                    continue;
                }

                // Horizontal wrap bounds
                let x = world.player.pos.x;
                prop_assert!(x >= -config.player_width && x <= config.field_width, "x = {}", x);

                // Falling past the bottom ends the game on that same tick
                prop_assert!(world.is_game_over() || world.player.pos.y <= config.field_height);

                // Monotonic progress
                prop_assert!(world.score() >= score);
                prop_assert!(world.scroll_speed() >= scroll);
                prop_assert!(world.scroll_speed() <= config.max_scroll_speed);

                // Pools never change size
                prop_assert_eq!(
                    (world.platforms.len(), world.hazards.len(), world.pickups.len()),
                    counts
                );

                // Moving platforms and hazards stay inside the field
                for p in world.platforms.iter() {
                    prop_assert!(p.pos.x >= 0.0 && p.pos.x + p.size.x <= config.field_width);
                }
                for h in world.hazards.iter() {
                    prop_assert!(h.pos.x >= 0.0 && h.pos.x + h.size.x <= config.field_width);
                }

                let events = world.events();
                let refuelled = events
                    .iter()
                    .any(|e| *e == GameEvent::PickupCollected { kind: PickupKind::Propulsion });

                // Landing only ever happens while descending
                if let Some(GameEvent::Landed { boosted, .. }) =
                    events.iter().find(|e| matches!(e, GameEvent::Landed { .. }))
                {
                    prop_assert!(pre_vy > 0.0);
                    let expected = if *boosted {
                        -config.boosted_bounce_speed
                    } else {
                        -config.bounce_speed
                    };
                    prop_assert_eq!(world.player.vel.y, expected);
                }

                // Thrust always burns fuel
                if intent.thrust && pre_fuel.is_active() && !refuelled {
                    prop_assert!(world.player.powerups.propulsion.remaining() < pre_fuel.remaining());
                }

                // At most one landing per tick
                let landed_count = events.iter().filter(|e| matches!(e, GameEvent::Landed { .. })).count();
                prop_assert!(landed_count <= 1);
            }
        }
    }

    #[test]
    fn same_seed_same_inputs_same_world(seed in any::<u64>(), runs in input_strategy()) {
        let mut a = world(seed);
        let mut b = world(seed);
        for (intent, dt, hold) in runs {
            for _ in 0..hold {
                a.tick(dt, &intent);
                b.tick(dt, &intent);
            }
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn reset_restores_pool_sizes_and_score(seed in any::<u64>(), runs in input_strategy()) {
        let mut world = world(seed);
        let fresh = world.snapshot();
        for (intent, dt, hold) in runs {
            for _ in 0..hold {
                world.tick(dt, &intent);
            }
        }
        world.reset(seed);
        prop_assert_eq!(world.snapshot(), fresh);
    }

    #[test]
    fn any_dt_keeps_state_finite(seed in any::<u64>(), dt in any::<f32>()) {
        let mut world = world(seed);
        for _ in 0..30 {
            world.tick(dt, &Intent { move_right: true, ..Default::default() });
        }
        let snap = world.snapshot();
        prop_assert!(snap.player.pos.is_finite());
        prop_assert!(snap.player.vel.is_finite());
        prop_assert!(snap.camera_offset.is_finite());
    }
}
