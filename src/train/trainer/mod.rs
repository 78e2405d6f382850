//! The Trainer: construction, training epochs, validation passes

mod core;
mod epoch;
mod valid;

pub use core::{TrainData, Trainer};
