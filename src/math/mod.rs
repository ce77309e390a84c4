pub mod grid;
pub mod logistic;

pub use grid::Grid;
pub use logistic::sigmoid;
