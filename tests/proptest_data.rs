//! Property-based tests for IDX decoding, normalization and the sigmoid.

use digitnet::data::idx::{read_images, read_labels, IMAGE_MAGIC, LABEL_MAGIC};
use digitnet::data::image::{normalize, RawImage, IMAGE_SIZE};
use digitnet::math::logistic::sigmoid;
use proptest::prelude::*;

fn image_container(count: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = IMAGE_MAGIC.to_be_bytes().to_vec();
    bytes.extend(count.to_be_bytes());
    bytes.extend(rows.to_be_bytes());
    bytes.extend(cols.to_be_bytes());
    bytes.extend(pixels);
    bytes
}

fn label_container(labels: &[u8]) -> Vec<u8> {
    let mut bytes = LABEL_MAGIC.to_be_bytes().to_vec();
    bytes.extend((labels.len() as u32).to_be_bytes());
    bytes.extend(labels);
    bytes
}

proptest! {
    #[test]
    fn labels_decode_to_exactly_the_encoded_bytes(
        labels in proptest::collection::vec(any::<u8>(), 0..200)
    ) {
        let decoded = read_labels(label_container(&labels).as_slice()).unwrap();
        prop_assert_eq!(decoded, labels);
    }

    #[test]
    fn image_dimensions_match_the_header(
        count in 0..6u32,
        rows in 1..10u32,
        cols in 1..10u32,
        fill in any::<u8>(),
    ) {
        let pixels = vec![fill; (count * rows * cols) as usize];
        let images = read_images(image_container(count, rows, cols, &pixels).as_slice()).unwrap();

        prop_assert_eq!(images.len(), count as usize);
        for image in &images {
            prop_assert_eq!(image.rows, rows as usize);
            prop_assert_eq!(image.cols, cols as usize);
            prop_assert!(image.pixels().iter().all(|&p| p == fill));
        }
    }

    #[test]
    fn any_wrong_image_magic_is_rejected(magic in any::<u32>()) {
        prop_assume!(magic != IMAGE_MAGIC);
        let bytes = magic.to_be_bytes().to_vec();
        prop_assert!(read_images(bytes.as_slice()).is_err());
    }

    #[test]
    fn any_wrong_label_magic_is_rejected(magic in any::<u32>()) {
        prop_assume!(magic != LABEL_MAGIC);
        let bytes = magic.to_be_bytes().to_vec();
        prop_assert!(read_labels(bytes.as_slice()).is_err());
    }

    #[test]
    fn normalize_stays_in_the_unit_interval(
        pixels in proptest::collection::vec(any::<u8>(), IMAGE_SIZE * IMAGE_SIZE)
    ) {
        let image = RawImage::new(IMAGE_SIZE, IMAGE_SIZE, pixels);
        let grid = normalize(&image);

        prop_assert_eq!(grid.rows, IMAGE_SIZE);
        prop_assert_eq!(grid.cols, IMAGE_SIZE);
        for &v in grid.as_slice() {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    // Bounded to the range where f32 has not yet saturated the sigmoid.
    #[test]
    fn sigmoid_stays_strictly_inside_the_unit_interval(x in -10.0f32..10.0) {
        let y = sigmoid(x);
        prop_assert!(y > 0.0 && y < 1.0);
    }
}
