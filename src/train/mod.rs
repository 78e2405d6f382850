//! Epoch orchestration
//!
//! This module owns the training glue: the [`Trainer`] with its epoch
//! loops and learning-rate schedules, the [`TrainerConfig`], and the
//! averaged-metric [`reporter`].

mod config;
pub mod reporter;
mod trainer;

pub use config::{PriorKind, TrainerConfig};
pub use trainer::{TrainData, Trainer};
