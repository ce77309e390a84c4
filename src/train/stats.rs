use serde::{Deserialize, Serialize};

/// Per-epoch training statistics returned by `train`.
///
/// One value per completed epoch; the training hit counter reflects the
/// prediction made before each sample's weight update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs configured for this run.
    pub total_epochs: usize,
    /// Training samples classified correctly during the pass.
    pub train_hits: usize,
    /// `1 - hits/count` over the training set.
    pub train_error_rate: f32,
    /// Correct classifications on the held-out set after this epoch.
    pub test_hits: usize,
    /// `1 - hits/count` over the held-out set.
    pub test_error_rate: f32,
    /// Wall-clock duration of this epoch (training plus evaluation) in ms.
    pub elapsed_ms: u64,
}

/// Outcome of one evaluation pass over a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    pub hits: usize,
    pub total: usize,
    /// `1 - hits/total`; an empty set reports 0.0.
    pub error_rate: f32,
    /// Predicted digits in sample order, one character per sample.
    pub predictions: String,
}
