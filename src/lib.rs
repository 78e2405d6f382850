//! Training orchestration for adversarial autoencoders
//!
//! This crate drives training and evaluation epochs for an
//! adversarial-autoencoder generative model, with optional semi-supervised
//! classification. It owns the epoch loops, the per-batch sub-step
//! sequencing (reconstruction, latent-distribution matching, categorical
//! matching, classification), running metric sums, learning-rate schedules,
//! and periodic reporting.
//!
//! The differentiable model itself, the batch source, and the image-grid
//! renderer are collaborators behind traits:
//!
//! - [`model::TrainModel`] / [`model::GenerateModel`] /
//!   [`model::ClassifierModel`]: the execution-engine seam
//! - [`data::Dataflow`]: the batch source with its epoch counter
//! - [`summary::SummaryWriter`]: scalar events and opaque summary blobs
//! - [`viz::GridRenderer`]: generation-sample grids for visual monitoring
//!
//! # Example
//!
//! ```no_run
//! use adversario::{Trainer, TrainData, TrainerConfig};
//! # let model: Box<dyn adversario::model::TrainModel> = todo!();
//! # let flow: Box<dyn adversario::data::Dataflow> = todo!();
//!
//! let config = TrainerConfig { init_lr: 1e-3, ..TrainerConfig::default() };
//! let mut trainer = Trainer::new(model, TrainData::Single(flow), config);
//!
//! for _ in 0..100 {
//!     trainer.train_epoch(None).unwrap();
//! }
//! ```

pub mod data;
pub mod distribution;
pub mod error;
pub mod model;
pub mod summary;
pub mod train;
pub mod viz;

pub use error::{Result, TrainError};
pub use train::{PriorKind, TrainData, Trainer, TrainerConfig};
