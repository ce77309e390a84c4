pub mod config;
pub mod engine;
pub mod layer;
pub mod snapshot;

pub use config::{EngineConfig, OUTPUT_UNITS};
pub use engine::NetworkEngine;
