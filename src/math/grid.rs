use rand::prelude::*;

/// A shape-checked 2D f32 tensor with flat row-major storage.
///
/// Used for normalized images, per-unit weight masks and layer weight
/// matrices. The shape is fixed at construction and every constructor
/// asserts that the backing storage matches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    data: Vec<f32>,
}

impl Grid {
    pub fn zeros(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Fills a grid with values drawn uniformly from `[low, high)`.
    pub fn random(rows: usize, cols: usize, low: f32, high: f32) -> Grid {
        let mut rng = rand::thread_rng();
        let mut res = Grid::zeros(rows, cols);
        for value in &mut res.data {
            *value = low + (high - low) * rng.gen::<f32>();
        }
        res
    }

    pub fn from_data(rows: usize, cols: usize, data: Vec<f32>) -> Grid {
        assert_eq!(
            data.len(),
            rows * cols,
            "grid storage does not match its declared {rows}x{cols} shape"
        );
        Grid { rows, cols, data }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_declared_shape() {
        let grid = Grid::zeros(3, 5);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.cols, 5);
        assert_eq!(grid.as_slice().len(), 15);
        assert!(grid.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn random_respects_the_init_range() {
        let grid = Grid::random(10, 10, -0.1, 0.1);
        for &v in grid.as_slice() {
            assert!((-0.1..0.1).contains(&v), "value {v} escaped the init range");
        }
    }

    #[test]
    fn get_and_set_are_row_major() {
        let mut grid = Grid::zeros(2, 3);
        grid.set(1, 2, 7.0);
        assert_eq!(grid.get(1, 2), 7.0);
        assert_eq!(grid.as_slice()[5], 7.0);
    }

    #[test]
    #[should_panic]
    fn from_data_rejects_mismatched_storage() {
        Grid::from_data(2, 2, vec![1.0, 2.0, 3.0]);
    }
}
