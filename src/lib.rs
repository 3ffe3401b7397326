//! Sky Hop - an endless vertical platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, recycling, scoring)
//! - `config`: Data-driven world tuning
//! - `input`: Raw key state to per-tick intent
//! - `error`: Configuration errors
//!
//! Rendering, audio and frame scheduling belong to the embedding application.
//! It calls [`sim::World::tick`] once per frame and draws the
//! [`sim::Snapshot`] it gets back from [`sim::World::snapshot`].

pub mod config;
pub mod error;
pub mod input;
pub mod sim;

pub use config::{GapRange, WorldConfig};
pub use error::ConfigError;
pub use input::{InputState, Key};
pub use sim::{Intent, Snapshot, World};

/// Simulation timing constants
pub mod consts {
    /// Reference timestep (60 Hz). Per-tick tuning values assume this rate.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Upper bound on how many reference steps a single `tick` may cover
    pub const MAX_STEP_SCALE: f32 = 4.0;
}

/// Ratio of `dt` to the reference step, clamped to `[0, MAX_STEP_SCALE]`.
///
/// Non-finite or non-positive durations fall back to a single reference step
/// so every `dt` produces a valid next state.
#[inline]
pub fn step_scale(dt: f32) -> f32 {
    use consts::{MAX_STEP_SCALE, SIM_DT};
    if !dt.is_finite() || dt <= 0.0 {
        return 1.0;
    }
    (dt / SIM_DT).min(MAX_STEP_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_scale_reference_is_exactly_one() {
        assert_eq!(step_scale(consts::SIM_DT), 1.0);
    }

    #[test]
    fn test_step_scale_rejects_bad_dt() {
        assert_eq!(step_scale(f32::NAN), 1.0);
        assert_eq!(step_scale(-1.0), 1.0);
        assert_eq!(step_scale(0.0), 1.0);
        assert_eq!(step_scale(10.0), consts::MAX_STEP_SCALE);
    }

    #[test]
    fn test_step_scale_half_step() {
        assert!((step_scale(consts::SIM_DT * 0.5) - 0.5).abs() < 1e-6);
    }
}
