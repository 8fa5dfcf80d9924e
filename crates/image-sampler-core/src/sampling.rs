use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::{Error, Result};
use crate::types::ImageFile;

/// Draw a uniform random sample without replacement from the image list.
///
/// Fails with `InsufficientData` when the population is smaller than the
/// requested count; nothing is clamped. Sampling happens before any file is
/// touched, so this failure path is all-or-nothing.
pub fn sample_images(images: &[ImageFile], count: usize) -> Result<Vec<ImageFile>> {
    if images.len() < count {
        return Err(Error::InsufficientData {
            requested: count,
            available: images.len(),
        });
    }

    let mut rng = thread_rng();
    Ok(images.choose_multiple(&mut rng, count).cloned().collect())
}
