pub mod stats;
pub mod trainer;

pub use stats::{EpochStats, TestReport};
pub use trainer::{evaluate, train};
