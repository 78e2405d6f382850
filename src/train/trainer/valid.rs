//! Validation passes: single-epoch evaluation without parameter updates

use super::core::Trainer;
use crate::data::Dataflow;
use crate::error::{Result, TrainError};
use crate::model::{ClsStep, StepFeed};
use crate::summary::SummaryWriter;
use crate::train::reporter::display;

/// Generation-sample grid layout, no gaps
const GENERATE_GRID: (usize, usize) = (10, 10);

impl Trainer {
    /// Classification validation pass
    ///
    /// Resets `flow` to a fresh single-pass epoch and consumes it exactly
    /// once through the validation classifier, accumulating loss and
    /// accuracy. Reports once at the end under the `valid` collection.
    /// Returns the averaged metrics.
    pub fn valid_semisupervised_epoch(
        &mut self,
        flow: &mut dyn Dataflow,
        writer: Option<&mut dyn SummaryWriter>,
    ) -> Result<ClsStep> {
        let model = self
            .cls_valid_model
            .as_deref_mut()
            .ok_or(TrainError::MissingCapability("validation classifier"))?;

        flow.setup(0, flow.batch_size());

        let mut step = 0usize;
        let mut cls_loss_sum = 0.0f32;
        let mut cls_accuracy_sum = 0.0f32;

        while flow.epochs_completed() < 1 {
            step += 1;
            let batch = flow.next_batch()?;
            let out = model.classify_eval(&batch.images, &batch.labels)?;
            cls_loss_sum += out.loss;
            cls_accuracy_sum += out.accuracy;
        }

        print!("[Valid]: ");
        display(
            self.global_step,
            step,
            &[("cls_loss", cls_loss_sum), ("cls_accuracy", cls_accuracy_sum)],
            "valid",
            None,
            writer,
        );

        Ok(ClsStep {
            loss: cls_loss_sum / step as f32,
            accuracy: cls_accuracy_sum / step as f32,
        })
    }

    /// Reconstruction validation pass with sample generation
    ///
    /// Consumes one fresh epoch of `flow` through the reconstruction
    /// eval op only, reports the mean loss under `valid`, and resets the
    /// source again so a full re-read is immediately possible. Then runs
    /// the generation op once; with `monitor_generation` set and a
    /// `save_path` configured, renders a 10x10 grid named by the current
    /// global step. A writer additionally receives the generation summary
    /// and the last validation summary blob.
    pub fn valid_epoch(
        &mut self,
        flow: &mut dyn Dataflow,
        monitor_generation: bool,
        mut writer: Option<&mut dyn SummaryWriter>,
    ) -> Result<f32> {
        flow.setup(0, flow.batch_size());

        let mut step = 0usize;
        let mut loss_sum = 0.0f32;
        let mut valid_summary = None;

        while flow.epochs_completed() == 0 {
            step += 1;
            let batch = flow.next_batch()?;
            let out = self
                .model
                .reconstruction_eval(&StepFeed::new(&batch.images).labels(&batch.labels))?;
            loss_sum += out.loss;
            valid_summary = out.summary;
        }

        print!("[Valid]: ");
        display(
            self.global_step,
            step,
            &[("loss", loss_sum)],
            "valid",
            None,
            writer.as_deref_mut(),
        );
        flow.setup(0, flow.batch_size());

        let generate_model = self
            .generate_model
            .as_deref_mut()
            .ok_or(TrainError::MissingCapability("generation"))?;
        let images = generate_model.generate()?;

        if monitor_generation {
            if let Some(dir) = &self.config.save_path {
                let path = dir.join(format!("generate_step_{}.png", self.global_step));
                self.renderer.render(&images, GENERATE_GRID, &path)?;
            }
        }

        if let Some(w) = writer {
            let generate_summary = generate_model.generate_summary()?;
            w.add_summary(&generate_summary, self.global_step);
            if let Some(s) = &valid_summary {
                w.add_summary(s, self.global_step);
            }
        }

        Ok(loss_sum / step as f32)
    }
}
