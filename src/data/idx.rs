//! Decoding of the IDX tensor containers the dataset ships in.
//!
//! The format is four big-endian 32-bit header words (one magic word plus
//! the dimensions) followed by a flat unsigned-byte stream. Reads are
//! all-or-nothing: any failure before the final byte propagates as an
//! error and no partial result is ever returned.

use byteorder::{BigEndian, ReadBytesExt};
use flate2::read::GzDecoder;
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::image::RawImage;
use crate::error::{DigitnetError, Result};

/// Magic word tagging a multi-image 2D unsigned-byte container.
pub const IMAGE_MAGIC: u32 = 2051;
/// Magic word tagging a 1D unsigned-byte label vector.
pub const LABEL_MAGIC: u32 = 2049;

/// Decodes an image container: magic word, count, rows, columns, then
/// `count * rows * cols` intensity bytes in row-major, image-major order.
pub fn read_images<R: Read>(mut source: R) -> Result<Vec<RawImage>> {
    let magic = source.read_u32::<BigEndian>()?;
    if magic != IMAGE_MAGIC {
        return Err(DigitnetError::BadMagic {
            expected: IMAGE_MAGIC,
            found: magic,
        });
    }

    let count = source.read_u32::<BigEndian>()? as usize;
    let rows = source.read_u32::<BigEndian>()? as usize;
    let cols = source.read_u32::<BigEndian>()? as usize;
    info!("reading {count} {rows}x{cols} images");

    let mut images = Vec::with_capacity(count);
    let mut pixels = vec![0u8; rows * cols];
    for _ in 0..count {
        source.read_exact(&mut pixels)?;
        images.push(RawImage::new(rows, cols, pixels.clone()));
    }
    Ok(images)
}

/// Decodes a label container: magic word, count, then `count` label bytes.
pub fn read_labels<R: Read>(mut source: R) -> Result<Vec<u8>> {
    let magic = source.read_u32::<BigEndian>()?;
    if magic != LABEL_MAGIC {
        return Err(DigitnetError::BadMagic {
            expected: LABEL_MAGIC,
            found: magic,
        });
    }

    let count = source.read_u32::<BigEndian>()? as usize;
    info!("reading {count} labels");

    let mut labels = vec![0u8; count];
    source.read_exact(&mut labels)?;
    Ok(labels)
}

/// Opens an IDX file, transparently decompressing when the path ends in
/// `.gz` (the form the dataset archives are distributed in).
pub fn open(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

pub fn read_images_file(path: &Path) -> Result<Vec<RawImage>> {
    let images = read_images(open(path)?)?;
    info!("images read from {}", path.display());
    Ok(images)
}

pub fn read_labels_file(path: &Path) -> Result<Vec<u8>> {
    let labels = read_labels(open(path)?)?;
    info!("labels read from {}", path.display());
    Ok(labels)
}
