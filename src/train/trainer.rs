//! The online training and evaluation loops that drive a `NetworkEngine`.

use std::time::Instant;

use log::info;

use crate::data::dataset::Dataset;
use crate::network::engine::NetworkEngine;
use crate::train::stats::{EpochStats, TestReport};

/// Trains `engine` for its configured number of epochs.
///
/// Every epoch runs one full online pass over `training` (forward,
/// backward and weight update per sample, in dataset order), then a full
/// evaluation pass over `held_out`. All epochs always run — there is no
/// early stopping. Returns one `EpochStats` per epoch.
///
/// # Arguments
/// - `engine`   — mutable reference to the engine; weights updated in place
/// - `training` — samples driven through the forward+backward pipeline
/// - `held_out` — evaluation-only set, never trained on
pub fn train(engine: &mut NetworkEngine, training: &Dataset, held_out: &Dataset) -> Vec<EpochStats> {
    let total_epochs = engine.config.epochs;
    let mut history = Vec::with_capacity(total_epochs);

    for epoch in 1..=total_epochs {
        let t_start = Instant::now();

        let mut hits = 0usize;
        for (image, label) in training.iter() {
            // The hit counter sees the prediction made before this sample's
            // weight update.
            let predicted = engine.train_sample(image, label);
            if predicted == label {
                hits += 1;
            }
        }
        let train_error_rate = error_rate(hits, training.len());

        let report = evaluate(engine, held_out);
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        info!(
            "epoch {epoch}/{total_epochs}: {hits} hits, train error {:.2}%, test error {:.2}%",
            train_error_rate * 100.0,
            report.error_rate * 100.0
        );

        history.push(EpochStats {
            epoch,
            total_epochs,
            train_hits: hits,
            train_error_rate,
            test_hits: report.hits,
            test_error_rate: report.error_rate,
            elapsed_ms,
        });
    }

    history
}

/// Forward-only pass over `set`: classifies every sample, counts hits and
/// accumulates the predicted digits. Never mutates weights.
pub fn evaluate(engine: &mut NetworkEngine, set: &Dataset) -> TestReport {
    let mut hits = 0usize;
    let mut predictions = String::with_capacity(set.len());

    for (image, label) in set.iter() {
        let predicted = engine.classify_sample(image);
        if predicted == label {
            hits += 1;
        }
        predictions.push(char::from(b'0' + predicted));
    }

    TestReport {
        hits,
        total: set.len(),
        error_rate: error_rate(hits, set.len()),
        predictions,
    }
}

/// `1 - hits/total`. An empty set reports 0.0 rather than dividing by zero.
fn error_rate(hits: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    1.0 - hits as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::image::IMAGE_SIZE;
    use crate::math::grid::Grid;
    use crate::network::config::EngineConfig;

    fn flat_image(value: f32) -> Grid {
        Grid::from_data(IMAGE_SIZE, IMAGE_SIZE, vec![value; IMAGE_SIZE * IMAGE_SIZE])
    }

    #[test]
    fn error_rate_of_an_empty_set_is_defined_as_zero() {
        assert_eq!(error_rate(0, 0), 0.0);
        assert_eq!(error_rate(3, 4), 0.25);
        assert_eq!(error_rate(4, 4), 0.0);
    }

    #[test]
    fn evaluate_handles_an_empty_dataset() {
        let mut engine = NetworkEngine::new(EngineConfig::with_shape(2, 2));
        let empty = Dataset::new(Vec::new(), Vec::new()).unwrap();

        let report = evaluate(&mut engine, &empty);
        assert_eq!(report.hits, 0);
        assert_eq!(report.total, 0);
        assert_eq!(report.error_rate, 0.0);
        assert!(report.predictions.is_empty());
    }

    #[test]
    fn evaluate_emits_one_predicted_digit_per_sample() {
        let mut engine = NetworkEngine::new(EngineConfig::with_shape(2, 2));
        let set = Dataset::new(vec![flat_image(0.0), flat_image(1.0)], vec![0, 1]).unwrap();

        let report = evaluate(&mut engine, &set);
        assert_eq!(report.total, 2);
        assert_eq!(report.predictions.len(), 2);
        assert!(report.predictions.chars().all(|c| c.is_ascii_digit()));
        assert!((0.0..=1.0).contains(&report.error_rate));
    }

    #[test]
    fn train_returns_one_stats_entry_per_epoch() {
        let config = EngineConfig {
            epochs: 3,
            ..EngineConfig::with_shape(2, 2)
        };
        let mut engine = NetworkEngine::new(config);
        let set = Dataset::new(vec![flat_image(1.0)], vec![5]).unwrap();

        let history = train(&mut engine, &set, &set);
        assert_eq!(history.len(), 3);
        for (i, stats) in history.iter().enumerate() {
            assert_eq!(stats.epoch, i + 1);
            assert_eq!(stats.total_epochs, 3);
            assert!((0.0..=1.0).contains(&stats.train_error_rate));
            assert!((0.0..=1.0).contains(&stats.test_error_rate));
        }
    }
}
