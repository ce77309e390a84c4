use serde::{Deserialize, Serialize};

/// Number of output units — one per digit class. Fixed for every engine
/// and never persisted in snapshots.
pub const OUTPUT_UNITS: usize = 10;

/// Immutable per-engine shape and hyperparameters.
///
/// Fields:
/// - `input_units`   — units in the input stage, each holding a full 28×28 mask
/// - `hidden_units`  — units in the hidden stage
/// - `epochs`        — full passes over the training set; always run to completion
/// - `learning_rate` — scale of each per-sample weight delta
/// - `momentum`      — fraction of the previous delta carried into the next one
/// - `init_low` / `init_high` — uniform weight initialization range
///
/// Loading a snapshot with different unit counts builds a new engine rather
/// than reshaping an existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub input_units: usize,
    pub hidden_units: usize,
    pub epochs: usize,
    pub learning_rate: f32,
    pub momentum: f32,
    pub init_low: f32,
    pub init_high: f32,
}

impl EngineConfig {
    /// Default hyperparameters at a caller-chosen shape.
    pub fn with_shape(input_units: usize, hidden_units: usize) -> EngineConfig {
        EngineConfig {
            input_units,
            hidden_units,
            ..EngineConfig::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            input_units: 64,
            hidden_units: 32,
            epochs: 60,
            learning_rate: 0.017,
            momentum: 0.9,
            init_low: -0.1,
            init_high: 0.1,
        }
    }
}
