//! Scalar-event and summary-blob logging
//!
//! The epoch loops report averaged metrics through a [`SummaryWriter`]:
//! named scalars tagged `{collection}/{name}` and keyed by global step,
//! plus opaque pre-serialized [`Summary`] blobs produced by the model.
//! Backends are pluggable; the crate ships an in-memory recorder and a
//! JSON-lines file writer.

mod storage;

pub use storage::{InMemoryWriter, JsonlWriter};

use serde::{Deserialize, Serialize};

use crate::model::Summary;

/// A single averaged-metric data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarEvent {
    /// `{collection}/{name}`, e.g. `train/loss`
    pub tag: String,
    pub value: f32,
    /// Global step the value was reported at
    pub step: usize,
}

/// Sink for averaged training metrics and model summary blobs
pub trait SummaryWriter {
    /// Record one averaged scalar at a global step.
    fn add_scalar(&mut self, tag: &str, value: f32, step: usize);

    /// Record an opaque model-produced summary blob at a global step.
    fn add_summary(&mut self, summary: &Summary, step: usize);
}
