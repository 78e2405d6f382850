//! Crate-wide error types

use thiserror::Error;

/// Errors surfaced by the training loops
///
/// There is no retry logic anywhere: any failure from a collaborator
/// aborts the current epoch loop and propagates to the caller.
#[derive(Debug, Error)]
pub enum TrainError {
    /// An epoch method was invoked on a model that does not expose the
    /// required op group.
    #[error("model does not provide {0} ops")]
    MissingCapability(&'static str),

    /// The execution engine failed while running an op.
    #[error("graph execution failed: {0}")]
    Execution(String),

    /// The batch source failed or was of the wrong shape for the loop.
    #[error("data source error: {0}")]
    Data(String),

    /// A batch's image and label leading dimensions disagree.
    #[error("batch has {images} images but {labels} labels")]
    BatchMismatch { images: usize, labels: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result alias for training operations
pub type Result<T> = std::result::Result<T, TrainError>;
