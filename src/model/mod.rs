//! Collaborator seam for the external execution engine
//!
//! The trainer never computes gradients or losses itself; every op runs
//! through these traits and blocks until the engine returns. Feed points
//! (image, label, learning rate, dropout-keep, prior samples) travel as a
//! single [`StepFeed`] per call.

mod feed;
mod traits;

pub use feed::{StepFeed, Summary};
pub use traits::{
    Capabilities, ClassifierModel, ClsStep, GenerateModel, ReconStep, TrainModel,
};
