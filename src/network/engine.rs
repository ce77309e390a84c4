//! The three-stage classifier: forward activation, error backpropagation
//! and the momentum weight-update rule, all hand-rolled over `Grid`s.

use crate::data::image::IMAGE_SIZE;
use crate::math::grid::Grid;
use crate::math::logistic::sigmoid;
use crate::network::config::{EngineConfig, OUTPUT_UNITS};
use crate::network::layer::{admit, DenseLayer, InputLayer};

/// A fully-connected digit classifier with an input stage of per-unit
/// image masks, one hidden stage and a ten-unit output stage.
///
/// The engine owns all of its tensors exclusively; shapes are fixed at
/// construction and weights are mutated in place by every training sample.
/// Delta tensors persist across samples and epochs — they are the momentum
/// accumulator and are never reset.
#[derive(Debug)]
pub struct NetworkEngine {
    pub config: EngineConfig,
    pub input: InputLayer,
    pub hidden: DenseLayer,
    pub output: DenseLayer,
}

impl NetworkEngine {
    pub fn new(config: EngineConfig) -> NetworkEngine {
        let input = InputLayer::new(config.input_units, config.init_low, config.init_high);
        let hidden = DenseLayer::new(
            config.hidden_units,
            config.input_units,
            config.init_low,
            config.init_high,
        );
        let output = DenseLayer::new(
            OUTPUT_UNITS,
            config.hidden_units,
            config.init_low,
            config.init_high,
        );
        NetworkEngine {
            config,
            input,
            hidden,
            output,
        }
    }

    /// Runs the forward pass for one normalized image, leaving per-unit
    /// activations in every layer.
    ///
    /// The image is broadcast to every input unit: each unit computes the
    /// elementwise product sum of its own mask with the full image, then
    /// the sigmoid. Hidden and output stages are fully connected over the
    /// previous stage's activation vector.
    pub fn forward(&mut self, image: &Grid) {
        debug_assert_eq!((image.rows, image.cols), (IMAGE_SIZE, IMAGE_SIZE));

        for i in 0..self.input.units {
            let mut sum = 0.0f32;
            for (w, x) in self.input.masks[i].as_slice().iter().zip(image.as_slice()) {
                sum += w * x;
            }
            self.input.output[i] = sigmoid(sum);
        }

        for i in 0..self.hidden.units {
            let mut sum = 0.0f32;
            for j in 0..self.hidden.fan_in {
                sum += self.hidden.weights.get(i, j) * self.input.output[j];
            }
            self.hidden.output[i] = sigmoid(sum);
        }

        for i in 0..self.output.units {
            let mut sum = 0.0f32;
            for j in 0..self.output.fan_in {
                sum += self.output.weights.get(i, j) * self.hidden.output[j];
            }
            self.output.output[i] = sigmoid(sum);
        }
    }

    /// Predicted digit for the activations left by the last forward pass.
    ///
    /// The running maximum starts at 0.0 and the comparison is strict, so
    /// ties keep the earliest index and an activation of exactly zero can
    /// never be selected.
    pub fn classify(&self) -> u8 {
        argmax(&self.output.output) as u8
    }

    /// Forward pass plus classification; never touches the weights.
    pub fn classify_sample(&mut self, image: &Grid) -> u8 {
        self.forward(image);
        self.classify()
    }

    /// One full online training step: forward pass, backpropagation and
    /// weight update. Returns the prediction made before any weight changed.
    pub fn train_sample(&mut self, image: &Grid, label: u8) -> u8 {
        self.forward(image);
        let predicted = self.classify();
        self.backward(image, label);
        predicted
    }

    /// Backpropagation for one sample against a one-hot target.
    ///
    /// Error, gradient and delta tensors are computed for all three layers
    /// in output → hidden → input order before any weight is applied:
    /// propagating error upstream reads the downstream layer's weights,
    /// which must still hold their pre-update values at that point.
    fn backward(&mut self, image: &Grid, label: u8) {
        let lr = self.config.learning_rate;
        let momentum = self.config.momentum;

        // Output stage: signed error against the one-hot target, then the
        // derivative-weighted gradient and the momentum delta.
        for i in 0..self.output.units {
            let target = if i == usize::from(label) { 1.0 } else { 0.0 };
            let out = self.output.output[i];
            self.output.out_error[i] = target - out;
            self.output.gradient[i] = out * (1.0 - out) * self.output.out_error[i];
        }
        for i in 0..self.output.units {
            for j in 0..self.output.fan_in {
                let delta = self.output.gradient[i] * self.hidden.output[j] * lr
                    + momentum * self.output.deltas.get(i, j);
                self.output.deltas.set(i, j, delta);
            }
        }

        // Hidden stage: error folded back through the output weights.
        for i in 0..self.hidden.units {
            let mut err = 0.0f32;
            for j in 0..self.output.units {
                err += self.output.gradient[j] * self.output.weights.get(j, i);
            }
            let out = self.hidden.output[i];
            self.hidden.out_error[i] = err;
            self.hidden.gradient[i] = out * (1.0 - out) * err;
        }
        for i in 0..self.hidden.units {
            for j in 0..self.hidden.fan_in {
                let delta = self.hidden.gradient[i] * self.input.output[j] * lr
                    + momentum * self.hidden.deltas.get(i, j);
                self.hidden.deltas.set(i, j, delta);
            }
        }

        // Input stage: error folded back through the hidden weights; the
        // deltas read the broadcast image pixels.
        for i in 0..self.input.units {
            let mut err = 0.0f32;
            for j in 0..self.hidden.units {
                err += self.hidden.gradient[j] * self.hidden.weights.get(j, i);
            }
            let out = self.input.output[i];
            self.input.out_error[i] = err;
            self.input.gradient[i] = out * (1.0 - out) * err;
        }
        for i in 0..self.input.units {
            let gradient = self.input.gradient[i];
            for row in 0..IMAGE_SIZE {
                for col in 0..IMAGE_SIZE {
                    let delta = gradient * image.get(row, col) * lr
                        + momentum * self.input.deltas[i].get(row, col);
                    self.input.deltas[i].set(row, col, delta);
                }
            }
        }

        self.apply_updates();
    }

    /// Applies the accumulated deltas to every weight, dropping any
    /// candidate that falls outside the strict (-1, 1) admission band.
    fn apply_updates(&mut self) {
        for i in 0..self.input.units {
            let deltas = &self.input.deltas[i];
            let mask = &mut self.input.masks[i];
            for row in 0..IMAGE_SIZE {
                for col in 0..IMAGE_SIZE {
                    let updated = admit(mask.get(row, col), deltas.get(row, col));
                    mask.set(row, col, updated);
                }
            }
        }
        for i in 0..self.hidden.units {
            for j in 0..self.hidden.fan_in {
                let updated = admit(self.hidden.weights.get(i, j), self.hidden.deltas.get(i, j));
                self.hidden.weights.set(i, j, updated);
            }
        }
        for i in 0..self.output.units {
            for j in 0..self.output.fan_in {
                let updated = admit(self.output.weights.get(i, j), self.output.deltas.get(i, j));
                self.output.weights.set(i, j, updated);
            }
        }
    }
}

/// Index of the strictly largest value against a 0.0 sentinel.
fn argmax(values: &[f32]) -> usize {
    let mut best = 0.0f32;
    let mut index = 0;
    for (i, &value) in values.iter().enumerate() {
        if value > best {
            best = value;
            index = i;
        }
    }
    index
}
