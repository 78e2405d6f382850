//! Model collaborator traits and capability flags

use ndarray::Array3;

use super::feed::{StepFeed, Summary};
use crate::error::{Result, TrainError};

/// Op groups a training model exposes beyond reconstruction
///
/// Snapshotted by the trainer at construction. Invoking an epoch method
/// whose group is absent fails at first use with
/// [`TrainError::MissingCapability`], never silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Continuous-latent discriminator/generator pair
    pub latent_adversarial: bool,
    /// Categorical discriminator/generator pair
    pub categorical_adversarial: bool,
    /// Classification train/loss/accuracy ops
    pub classifier: bool,
}

impl Capabilities {
    /// All op groups available (semi-supervised training)
    #[must_use]
    pub fn full() -> Self {
        Self {
            latent_adversarial: true,
            categorical_adversarial: true,
            classifier: true,
        }
    }
}

/// Output of a reconstruction op
#[derive(Debug, Clone)]
pub struct ReconStep {
    /// Reconstruction loss for the batch
    pub loss: f32,
    /// Summary blob refreshed by this run, if the model emits one
    pub summary: Option<Summary>,
}

/// Output of a classification op
#[derive(Debug, Clone, Copy)]
pub struct ClsStep {
    pub loss: f32,
    pub accuracy: f32,
}

/// The training model's operation set
///
/// Reconstruction is always present; the adversarial and classification
/// groups are optional and declared through [`Capabilities`]. Default
/// implementations of the optional ops report the missing group, so a
/// reconstruction-only model implements just the two required ops.
pub trait TrainModel {
    /// Dimensionality of the continuous latent code
    fn n_code(&self) -> usize;

    /// Number of classes for the categorical code
    fn n_class(&self) -> usize;

    /// Which optional op groups this model provides
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// Toggle the training-vs-inference feed
    fn set_is_training(&mut self, _training: bool) {}

    /// Run the reconstruction train op: parameter update + loss + train summary
    fn reconstruction_train(&mut self, feed: &StepFeed) -> Result<ReconStep>;

    /// Reconstruction loss + valid summary without any parameter update
    fn reconstruction_eval(&mut self, feed: &StepFeed) -> Result<ReconStep>;

    /// Continuous-latent discriminator update, returns its loss
    fn latent_discriminator_train(&mut self, _feed: &StepFeed) -> Result<f32> {
        Err(TrainError::MissingCapability("latent adversarial"))
    }

    /// Continuous-latent generator (encoder) update, returns its loss
    fn latent_generator_train(&mut self, _feed: &StepFeed) -> Result<f32> {
        Err(TrainError::MissingCapability("latent adversarial"))
    }

    /// Categorical discriminator update, returns its loss
    fn categorical_discriminator_train(&mut self, _feed: &StepFeed) -> Result<f32> {
        Err(TrainError::MissingCapability("categorical adversarial"))
    }

    /// Categorical generator update, returns its loss
    fn categorical_generator_train(&mut self, _feed: &StepFeed) -> Result<f32> {
        Err(TrainError::MissingCapability("categorical adversarial"))
    }

    /// Classification update, returns loss and accuracy
    fn classifier_train(&mut self, _feed: &StepFeed) -> Result<ClsStep> {
        Err(TrainError::MissingCapability("classification"))
    }
}

/// Sample-generation collaborator
pub trait GenerateModel {
    /// Run the generation op once, yielding `(n, h, w)` images in `[0, 1]`
    fn generate(&mut self) -> Result<Array3<f32>>;

    /// Summary blob for the latest generation run
    fn generate_summary(&mut self) -> Result<Summary>;
}

/// Evaluation-only classifier used by the validation pass
pub trait ClassifierModel {
    /// Classification loss and accuracy for a batch, no parameter update
    fn classify_eval(&mut self, images: &ndarray::Array2<f32>, labels: &[usize]) -> Result<ClsStep>;
}
