//! Batch data structure and the batch-source seam

use ndarray::Array2;

use crate::error::{Result, TrainError};

/// One batch of images with aligned labels
#[derive(Debug, Clone)]
pub struct Batch {
    /// Row-per-sample image matrix, shape `(batch, pixels)`
    pub images: Array2<f32>,
    /// Class index per sample, same leading dimension as `images`
    pub labels: Vec<usize>,
}

impl Batch {
    /// Create a batch, checking that images and labels agree in length
    pub fn new(images: Array2<f32>, labels: Vec<usize>) -> Result<Self> {
        if images.nrows() != labels.len() {
            return Err(TrainError::BatchMismatch {
                images: images.nrows(),
                labels: labels.len(),
            });
        }
        Ok(Self { images, labels })
    }

    /// Number of samples in the batch
    #[must_use]
    pub fn size(&self) -> usize {
        self.images.nrows()
    }
}

/// External batch source
///
/// The epoch loops never count batches themselves; they run until
/// `epochs_completed` advances, which the source increments on wraparound.
pub trait Dataflow {
    /// Fetch the next batch, wrapping around at the end of the data.
    fn next_batch(&mut self) -> Result<Batch>;

    /// Number of full passes completed so far.
    fn epochs_completed(&self) -> usize;

    /// Batch size this source yields.
    fn batch_size(&self) -> usize;

    /// Reposition the source: `epoch_val` completed epochs, fresh cursor,
    /// given batch size. Validation passes use `setup(0, batch_size())`
    /// before and after a single-pass read.
    fn setup(&mut self, epoch_val: usize, batch_size: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_batch_creation() {
        let images = Array2::zeros((4, 16));
        let batch = Batch::new(images, vec![0, 1, 2, 3]).unwrap();
        assert_eq!(batch.size(), 4);
    }

    #[test]
    fn test_batch_mismatch_rejected() {
        let images = Array2::zeros((4, 16));
        let err = Batch::new(images, vec![0, 1]).unwrap_err();
        assert!(matches!(
            err,
            crate::TrainError::BatchMismatch {
                images: 4,
                labels: 2
            }
        ));
    }
}
