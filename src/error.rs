//! Error types
//!
//! The simulation itself cannot fail once a [`crate::sim::World`] exists.
//! Only building a world from a bad configuration, or parsing JSON, can.

/// Errors produced while validating or loading a world configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The play field has no area (or a non-finite dimension).
    #[error("play field must have positive finite size, got {width} x {height}")]
    InvalidFieldSize { width: f32, height: f32 },

    /// An entity size is zero, negative or non-finite.
    #[error("{entity} size must be positive and finite, got {width} x {height}")]
    InvalidEntitySize {
        entity: &'static str,
        width: f32,
        height: f32,
    },

    /// An entity is wider than the play field it must fit inside.
    #[error("{entity} width {width} does not fit in a field of width {field_width}")]
    EntityWiderThanField {
        entity: &'static str,
        width: f32,
        field_width: f32,
    },

    /// A pool that the game cannot run without has zero capacity.
    #[error("{pool} pool must hold at least one entity")]
    EmptyPool { pool: &'static str },

    /// A pool is larger than the simulation supports.
    #[error("{pool} pool holds {capacity} entities, at most {max} allowed")]
    PoolTooLarge {
        pool: &'static str,
        capacity: usize,
        max: usize,
    },

    /// A spawn gap range is inverted, negative or non-finite.
    #[error("{pool} gap range is invalid: min {min}, max {max}")]
    InvalidGapRange { pool: &'static str, min: f32, max: f32 },

    /// A tuning value is out of its allowed range.
    #[error("tuning value '{name}' is out of range: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// JSON for a config or replay log could not be parsed.
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
