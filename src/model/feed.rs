//! Feed-point bundle passed to every model op

use ndarray::Array2;

/// Opaque pre-serialized summary blob produced by the model
///
/// Forwarded verbatim to the [`SummaryWriter`](crate::summary::SummaryWriter);
/// the trainer never inspects its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary(pub Vec<u8>);

/// One call's worth of feed values
///
/// Mirrors the model's mutable feed points. Not every op reads every
/// field; implementations ignore what they do not need. Defaults are
/// learning rate 0.0 (eval ops) and dropout-keep 1.0.
#[derive(Debug, Clone, Copy)]
pub struct StepFeed<'a> {
    /// Image batch, shape `(batch, pixels)`
    pub images: &'a Array2<f32>,
    /// True class labels, when the op is conditioned on them
    pub labels: Option<&'a [usize]>,
    /// Learning rate for this update
    pub lr: f32,
    /// Dropout keep probability
    pub keep_prob: f32,
    /// Continuous prior sample fed as the "real distribution" target
    pub real_z: Option<&'a Array2<f32>>,
    /// Categorical prior sample fed as the "real category" target
    pub real_y: Option<&'a [usize]>,
}

impl<'a> StepFeed<'a> {
    /// Feed containing only the image batch
    #[must_use]
    pub fn new(images: &'a Array2<f32>) -> Self {
        Self {
            images,
            labels: None,
            lr: 0.0,
            keep_prob: 1.0,
            real_z: None,
            real_y: None,
        }
    }

    /// Attach true labels
    #[must_use]
    pub fn labels(mut self, labels: &'a [usize]) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set the learning rate
    #[must_use]
    pub fn lr(mut self, lr: f32) -> Self {
        self.lr = lr;
        self
    }

    /// Set the dropout keep probability
    #[must_use]
    pub fn keep_prob(mut self, keep_prob: f32) -> Self {
        self.keep_prob = keep_prob;
        self
    }

    /// Attach a continuous prior sample
    #[must_use]
    pub fn real_z(mut self, real_z: &'a Array2<f32>) -> Self {
        self.real_z = Some(real_z);
        self
    }

    /// Attach a categorical prior sample
    #[must_use]
    pub fn real_y(mut self, real_y: &'a [usize]) -> Self {
        self.real_y = Some(real_y);
        self
    }
}
