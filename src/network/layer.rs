use crate::data::image::IMAGE_SIZE;
use crate::math::grid::Grid;

/// Input stage of the network.
///
/// Every unit holds a full 28×28 weight mask over the image (there is no
/// receptive-field restriction — each unit independently learns its own
/// mask) plus a same-shaped delta grid that carries the momentum term
/// across samples. The per-unit vectors hold the activation, the
/// back-propagated error and the derivative-weighted error signal.
#[derive(Debug)]
pub struct InputLayer {
    pub units: usize,
    pub masks: Vec<Grid>,
    pub deltas: Vec<Grid>,
    pub output: Vec<f32>,
    pub out_error: Vec<f32>,
    pub gradient: Vec<f32>,
}

impl InputLayer {
    pub fn new(units: usize, init_low: f32, init_high: f32) -> InputLayer {
        InputLayer {
            units,
            masks: (0..units)
                .map(|_| Grid::random(IMAGE_SIZE, IMAGE_SIZE, init_low, init_high))
                .collect(),
            deltas: (0..units).map(|_| Grid::zeros(IMAGE_SIZE, IMAGE_SIZE)).collect(),
            output: vec![0.0; units],
            out_error: vec![0.0; units],
            gradient: vec![0.0; units],
        }
    }
}

/// Fully-connected stage: a `units × fan_in` weight matrix, the matching
/// momentum-carrying delta matrix, and the per-unit scratch vectors.
#[derive(Debug)]
pub struct DenseLayer {
    pub units: usize,
    pub fan_in: usize,
    pub weights: Grid,
    pub deltas: Grid,
    pub output: Vec<f32>,
    pub out_error: Vec<f32>,
    pub gradient: Vec<f32>,
}

impl DenseLayer {
    pub fn new(units: usize, fan_in: usize, init_low: f32, init_high: f32) -> DenseLayer {
        DenseLayer {
            units,
            fan_in,
            weights: Grid::random(units, fan_in, init_low, init_high),
            deltas: Grid::zeros(units, fan_in),
            output: vec![0.0; units],
            out_error: vec![0.0; units],
            gradient: vec![0.0; units],
        }
    }
}

/// Admits a weight update only when the candidate lands strictly inside
/// (-1, 1). Out-of-band candidates leave the weight untouched — the update
/// is dropped, not clipped to the boundary.
#[inline]
pub fn admit(weight: f32, delta: f32) -> f32 {
    let candidate = weight + delta;
    if candidate < 1.0 && candidate > -1.0 {
        candidate
    } else {
        weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_band_candidates_are_applied() {
        assert_eq!(admit(0.5, 0.25), 0.75);
        assert_eq!(admit(-0.5, -0.25), -0.75);
    }

    #[test]
    fn candidates_on_the_boundary_are_dropped() {
        // 0.75 + 0.25 is exactly 1.0 in f32; the band is strict.
        assert_eq!(admit(0.75, 0.25), 0.75);
        assert_eq!(admit(-0.75, -0.25), -0.75);
    }

    #[test]
    fn candidates_beyond_the_band_are_dropped() {
        assert_eq!(admit(0.5, 0.6), 0.5);
        assert_eq!(admit(-0.5, -0.6), -0.5);
    }

    #[test]
    fn layers_start_with_zero_deltas_and_in_range_weights() {
        let layer = DenseLayer::new(3, 4, -0.1, 0.1);
        assert!(layer.deltas.as_slice().iter().all(|&d| d == 0.0));
        assert!(layer.weights.as_slice().iter().all(|&w| (-0.1..0.1).contains(&w)));

        let input = InputLayer::new(2, -0.1, 0.1);
        assert_eq!(input.masks.len(), 2);
        assert_eq!(input.masks[0].rows, IMAGE_SIZE);
        assert!(input.deltas.iter().all(|d| d.as_slice().iter().all(|&v| v == 0.0)));
    }
}
