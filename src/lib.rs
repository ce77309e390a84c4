pub mod data;
pub mod error;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use data::dataset::Dataset;
pub use error::{DigitnetError, Result};
pub use math::grid::Grid;
pub use network::config::EngineConfig;
pub use network::engine::NetworkEngine;
pub use train::stats::{EpochStats, TestReport};
pub use train::trainer::{evaluate, train};
