//! Summary writer backends

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::{ScalarEvent, SummaryWriter};
use crate::error::Result;
use crate::model::Summary;

/// In-memory writer, mainly for tests and programmatic inspection
#[derive(Debug, Default)]
pub struct InMemoryWriter {
    /// Every scalar event in arrival order
    pub scalars: Vec<ScalarEvent>,
    /// Every summary blob in arrival order, with its step
    pub summaries: Vec<(usize, Summary)>,
}

impl InMemoryWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded values for one tag, in arrival order
    #[must_use]
    pub fn values_for(&self, tag: &str) -> Vec<(usize, f32)> {
        self.scalars
            .iter()
            .filter(|e| e.tag == tag)
            .map(|e| (e.step, e.value))
            .collect()
    }
}

impl SummaryWriter for InMemoryWriter {
    fn add_scalar(&mut self, tag: &str, value: f32, step: usize) {
        self.scalars.push(ScalarEvent {
            tag: tag.to_string(),
            value,
            step,
        });
    }

    fn add_summary(&mut self, summary: &Summary, step: usize) {
        self.summaries.push((step, summary.clone()));
    }
}

/// One JSONL record: a scalar event or a raw summary blob
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EventRecord<'a> {
    Scalar { tag: &'a str, value: f32, step: usize },
    Summary { bytes: &'a [u8], step: usize },
}

/// JSON-lines file writer
///
/// Appends one JSON object per event. Writes are buffered; the writer
/// trait is infallible by contract, so the first I/O failure is stashed
/// and surfaced by [`JsonlWriter::finish`].
pub struct JsonlWriter {
    out: BufWriter<File>,
    error: Option<std::io::Error>,
}

impl JsonlWriter {
    /// Create or truncate the event file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self {
            out: BufWriter::new(File::create(path)?),
            error: None,
        })
    }

    fn write_record(&mut self, record: &EventRecord) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, record)
            .map_err(std::io::Error::other)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = result {
            self.error = Some(e);
        }
    }

    /// Flush and report the first write error, if any
    pub fn finish(mut self) -> Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e.into());
        }
        self.out.flush()?;
        Ok(())
    }
}

impl SummaryWriter for JsonlWriter {
    fn add_scalar(&mut self, tag: &str, value: f32, step: usize) {
        self.write_record(&EventRecord::Scalar { tag, value, step });
    }

    fn add_summary(&mut self, summary: &Summary, step: usize) {
        self.write_record(&EventRecord::Summary {
            bytes: &summary.0,
            step,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_scalars() {
        let mut writer = InMemoryWriter::new();
        writer.add_scalar("train/loss", 0.5, 100);
        writer.add_scalar("train/loss", 0.4, 200);
        writer.add_scalar("valid/loss", 0.6, 200);

        assert_eq!(writer.scalars.len(), 3);
        assert_eq!(writer.values_for("train/loss"), vec![(100, 0.5), (200, 0.4)]);
        assert_eq!(writer.values_for("valid/loss"), vec![(200, 0.6)]);
    }

    #[test]
    fn test_in_memory_summaries() {
        let mut writer = InMemoryWriter::new();
        writer.add_summary(&Summary(vec![1, 2, 3]), 42);
        assert_eq!(writer.summaries, vec![(42, Summary(vec![1, 2, 3]))]);
    }

    #[test]
    fn test_jsonl_writer_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        let mut writer = JsonlWriter::create(&path).unwrap();
        writer.add_scalar("train/loss", 0.25, 300);
        writer.add_summary(&Summary(vec![7, 8]), 300);
        writer.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let scalar: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(scalar["kind"], "scalar");
        assert_eq!(scalar["tag"], "train/loss");
        assert_eq!(scalar["step"], 300);

        let blob: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(blob["kind"], "summary");
        assert_eq!(blob["bytes"], serde_json::json!([7, 8]));
    }
}
