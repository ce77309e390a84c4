use crate::math::grid::Grid;

/// Side length of every dataset image. The engine's input weight masks
/// share this shape.
pub const IMAGE_SIZE: usize = 28;

/// Raw image as decoded from an IDX container: unsigned byte intensity
/// samples in row-major order, immutable once constructed.
#[derive(Debug, Clone)]
pub struct RawImage {
    pub rows: usize,
    pub cols: usize,
    pixels: Vec<u8>,
}

impl RawImage {
    pub fn new(rows: usize, cols: usize, pixels: Vec<u8>) -> RawImage {
        assert_eq!(
            pixels.len(),
            rows * cols,
            "pixel storage does not match the declared {rows}x{cols} shape"
        );
        RawImage { rows, cols, pixels }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.cols + col]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Renders the image as shaded ASCII art for console inspection.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(match self.get(row, col) {
                    0..=50 => ' ',
                    51..=101 => '░',
                    102..=152 => '▒',
                    153..=203 => '▓',
                    _ => '█',
                });
            }
            out.push('\n');
        }
        out
    }
}

/// Rescales a raw image into `[0, 1]` by elementwise division by 255.
///
/// Pure and shape-preserving; the raw image is left untouched.
pub fn normalize(image: &RawImage) -> Grid {
    let data = image.pixels.iter().map(|&p| f32::from(p) / 255.0).collect();
    Grid::from_data(image.rows, image.cols, data)
}
