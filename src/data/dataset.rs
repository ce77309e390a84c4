use std::path::Path;

use crate::data::idx;
use crate::data::image::normalize;
use crate::error::{DigitnetError, Result};
use crate::math::grid::Grid;

/// Normalized images paired with their ground-truth labels.
///
/// Construction enforces the equal-length invariant, so the engine and the
/// training loop never have to re-check it.
#[derive(Debug)]
pub struct Dataset {
    images: Vec<Grid>,
    labels: Vec<u8>,
}

impl Dataset {
    pub fn new(images: Vec<Grid>, labels: Vec<u8>) -> Result<Dataset> {
        if images.len() != labels.len() {
            return Err(DigitnetError::ShapeMismatch {
                images: images.len(),
                labels: labels.len(),
            });
        }
        Ok(Dataset { images, labels })
    }

    /// Reads an IDX image/label file pair and normalizes every image.
    pub fn from_idx_files(images_path: &Path, labels_path: &Path) -> Result<Dataset> {
        let raw = idx::read_images_file(images_path)?;
        let labels = idx::read_labels_file(labels_path)?;
        let images = raw.iter().map(normalize).collect();
        Dataset::new(images, labels)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Iterates over `(normalized image, label)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&Grid, u8)> {
        self.images.iter().zip(self.labels.iter().copied())
    }

    pub fn images(&self) -> &[Grid] {
        &self.images
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_counts_are_rejected() {
        let images = vec![Grid::zeros(2, 2), Grid::zeros(2, 2)];
        let err = Dataset::new(images, vec![1]).unwrap_err();
        assert!(matches!(
            err,
            DigitnetError::ShapeMismatch {
                images: 2,
                labels: 1,
            }
        ));
    }

    #[test]
    fn iteration_pairs_images_with_their_labels() {
        let images = vec![Grid::zeros(1, 1), Grid::zeros(1, 1)];
        let set = Dataset::new(images, vec![7, 3]).unwrap();
        let labels: Vec<u8> = set.iter().map(|(_, label)| label).collect();
        assert_eq!(labels, vec![7, 3]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_dataset_is_valid() {
        let set = Dataset::new(Vec::new(), Vec::new()).unwrap();
        assert!(set.is_empty());
    }
}
