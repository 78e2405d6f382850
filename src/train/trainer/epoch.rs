//! Training epoch loops
//!
//! Each loop runs until the primary data source's epoch counter advances,
//! consuming one batch per iteration and accumulating per-metric running
//! sums that reset on every invocation. Reports fire every
//! [`REPORT_EVERY`] steps and once more at epoch end.

use super::core::{TrainData, Trainer};
use crate::distribution;
use crate::error::{Result, TrainError};
use crate::model::StepFeed;
use crate::summary::SummaryWriter;
use crate::train::reporter::display;
use crate::train::PriorKind;

/// Steps between periodic metric reports
const REPORT_EVERY: usize = 100;
/// Global-step cadence of the semi-supervised classification update
const CLS_EVERY: usize = 10;
/// Dropout keep probability for the plain reconstruction epoch
const RECON_KEEP_PROB: f32 = 0.9;
/// Ring-mixture prior shape
const MIXTURE_COMPONENTS: usize = 10;
const MIXTURE_X_VAR: f32 = 0.5;
const MIXTURE_Y_VAR: f32 = 0.1;

impl Trainer {
    /// Plain reconstruction epoch
    ///
    /// One reconstruction update per batch at dropout-keep 0.9. No
    /// learning-rate schedule. Reports the single metric `loss`. Returns
    /// the epoch's mean reconstruction loss.
    pub fn train_epoch(&mut self, mut writer: Option<&mut dyn SummaryWriter>) -> Result<f32> {
        self.model.set_is_training(true);
        self.epoch_id += 1;

        let flow = match &mut self.data {
            TrainData::Single(flow) => flow.as_mut(),
            TrainData::SemiSupervised { .. } => {
                return Err(TrainError::Data(
                    "reconstruction epoch needs a single data source".to_string(),
                ))
            }
        };
        let cur_epoch = flow.epochs_completed();

        let mut step = 0usize;
        let mut loss_sum = 0.0f32;
        let mut cur_summary = None;

        while cur_epoch == flow.epochs_completed() {
            self.global_step += 1;
            step += 1;

            let batch = flow.next_batch()?;
            let out = self.model.reconstruction_train(
                &StepFeed::new(&batch.images)
                    .labels(&batch.labels)
                    .lr(self.lr)
                    .keep_prob(RECON_KEEP_PROB),
            )?;
            loss_sum += out.loss;
            cur_summary = out.summary;

            if step % REPORT_EVERY == 0 {
                display(
                    self.global_step,
                    step,
                    &[("loss", loss_sum)],
                    "train",
                    cur_summary.as_ref(),
                    writer.as_deref_mut(),
                );
            }
        }

        println!("==== epoch: {}, lr: {} ====", cur_epoch, self.lr);
        display(
            self.global_step,
            step,
            &[("loss", loss_sum)],
            "train",
            cur_summary.as_ref(),
            writer,
        );
        Ok(loss_sum / step as f32)
    }

    /// Continuous-latent adversarial epoch
    ///
    /// Per batch, in strict order: draw a prior sample, reconstruction
    /// update with the prior as the real-distribution target,
    /// discriminator update against the same prior, then the generator
    /// update against the just-updated discriminator. Learning rate
    /// divides by 10 when `epoch_id` reaches 100 and again at 300,
    /// checked before this call's increment. Metrics: `loss`, `d_loss`,
    /// `g_loss`.
    pub fn train_z_gan_epoch(
        &mut self,
        ae_dropout: f32,
        mut writer: Option<&mut dyn SummaryWriter>,
    ) -> Result<f32> {
        self.require_latent()?;
        self.model.set_is_training(true);

        if self.epoch_id == 100 {
            self.lr /= 10.0;
        }
        if self.epoch_id == 300 {
            self.lr /= 10.0;
        }

        let flow = match &mut self.data {
            TrainData::Single(flow) => flow.as_mut(),
            TrainData::SemiSupervised { .. } => {
                return Err(TrainError::Data(
                    "z-GAN epoch needs a single data source".to_string(),
                ))
            }
        };
        let cur_epoch = flow.epochs_completed();

        let mut step = 0usize;
        let mut loss_sum = 0.0f32;
        let mut d_loss_sum = 0.0f32;
        let mut g_loss_sum = 0.0f32;
        let mut cur_summary = None;
        self.epoch_id += 1;

        while cur_epoch == flow.epochs_completed() {
            self.global_step += 1;
            step += 1;

            let batch = flow.next_batch()?;
            let n = batch.size();

            let real_z = match self.config.prior {
                PriorKind::Gmm => distribution::gaussian_mixture(
                    &mut self.rng,
                    n,
                    self.model.n_code(),
                    MIXTURE_COMPONENTS,
                    MIXTURE_X_VAR,
                    MIXTURE_Y_VAR,
                    self.config.use_label.then_some(batch.labels.as_slice()),
                ),
                PriorKind::Gaussian => {
                    distribution::diagonal_gaussian(&mut self.rng, n, self.model.n_code(), 0.0, 1.0)
                }
            };

            let out = self.model.reconstruction_train(
                &StepFeed::new(&batch.images)
                    .labels(&batch.labels)
                    .lr(self.lr)
                    .keep_prob(ae_dropout)
                    .real_z(&real_z),
            )?;
            loss_sum += out.loss;
            cur_summary = out.summary;

            d_loss_sum += self.model.latent_discriminator_train(
                &StepFeed::new(&batch.images)
                    .labels(&batch.labels)
                    .lr(self.lr)
                    .real_z(&real_z),
            )?;

            // Generator only needs the images; it chases the
            // discriminator state left by the previous update.
            g_loss_sum += self.model.latent_generator_train(
                &StepFeed::new(&batch.images)
                    .labels(&batch.labels)
                    .lr(self.lr),
            )?;

            if step % REPORT_EVERY == 0 {
                display(
                    self.global_step,
                    step,
                    &[
                        ("loss", loss_sum),
                        ("d_loss", d_loss_sum),
                        ("g_loss", g_loss_sum),
                    ],
                    "train",
                    cur_summary.as_ref(),
                    writer.as_deref_mut(),
                );
            }
        }

        println!("==== epoch: {}, lr: {} ====", cur_epoch, self.lr);
        display(
            self.global_step,
            step,
            &[
                ("loss", loss_sum),
                ("d_loss", d_loss_sum),
                ("g_loss", g_loss_sum),
            ],
            "train",
            cur_summary.as_ref(),
            writer,
        );
        Ok(loss_sum / step as f32)
    }

    /// Semi-supervised epoch: joint z/y adversarial matching plus a
    /// 1-in-10 classification update from the labeled source
    ///
    /// Per unlabeled batch, five sequential updates: reconstruction
    /// (conditioned on both priors and true labels), z-discriminator,
    /// z-generator, y-discriminator, y-generator. Every 10th global step
    /// additionally pulls one labeled batch through the classification
    /// update. Learning rate divides by 10 at `epoch_id` 150 and 200.
    ///
    /// Periodic reports scale the classification sums by 10 to
    /// approximate a per-step mean given the 1-in-10 cadence; the
    /// end-of-epoch report omits the classification metrics entirely.
    pub fn train_semisupervised_epoch(
        &mut self,
        ae_dropout: f32,
        mut writer: Option<&mut dyn SummaryWriter>,
    ) -> Result<f32> {
        self.require_latent()?;
        self.require_categorical()?;
        self.require_classifier()?;

        self.epoch_id += 1;
        if self.epoch_id == 150 {
            self.lr /= 10.0;
        }
        if self.epoch_id == 200 {
            self.lr /= 10.0;
        }

        let (labeled, unlabeled) = match &mut self.data {
            TrainData::SemiSupervised { labeled, unlabeled } => {
                (labeled.as_mut(), unlabeled.as_mut())
            }
            TrainData::Single(_) => {
                return Err(TrainError::Data(
                    "semi-supervised epoch needs labeled and unlabeled sources".to_string(),
                ))
            }
        };
        let cur_epoch = unlabeled.epochs_completed();

        let mut step = 0usize;
        let mut loss_sum = 0.0f32;
        let mut z_d_loss_sum = 0.0f32;
        let mut z_g_loss_sum = 0.0f32;
        let mut y_d_loss_sum = 0.0f32;
        let mut y_g_loss_sum = 0.0f32;
        let mut cls_loss_sum = 0.0f32;
        let mut cls_accuracy_sum = 0.0f32;
        let mut cur_summary = None;

        while cur_epoch == unlabeled.epochs_completed() {
            self.global_step += 1;
            step += 1;

            let batch = unlabeled.next_batch()?;
            let n = batch.size();

            let real_z =
                distribution::diagonal_gaussian(&mut self.rng, n, self.model.n_code(), 0.0, 1.0);
            let real_y = distribution::uniform_categorical(&mut self.rng, n, self.model.n_class());

            let out = self.model.reconstruction_train(
                &StepFeed::new(&batch.images)
                    .labels(&batch.labels)
                    .lr(self.lr)
                    .keep_prob(ae_dropout)
                    .real_z(&real_z)
                    .real_y(&real_y),
            )?;
            loss_sum += out.loss;
            cur_summary = out.summary;

            z_d_loss_sum += self.model.latent_discriminator_train(
                &StepFeed::new(&batch.images).lr(self.lr).real_z(&real_z),
            )?;
            z_g_loss_sum += self
                .model
                .latent_generator_train(&StepFeed::new(&batch.images).lr(self.lr))?;

            y_d_loss_sum += self.model.categorical_discriminator_train(
                &StepFeed::new(&batch.images).lr(self.lr).real_y(&real_y),
            )?;
            y_g_loss_sum += self
                .model
                .categorical_generator_train(&StepFeed::new(&batch.images).lr(self.lr))?;

            if self.global_step % CLS_EVERY == 0 {
                let labeled_batch = labeled.next_batch()?;
                let cls = self.model.classifier_train(
                    &StepFeed::new(&labeled_batch.images)
                        .labels(&labeled_batch.labels)
                        .lr(self.lr),
                )?;
                cls_loss_sum += cls.loss;
                cls_accuracy_sum += cls.accuracy;
            }

            if step % REPORT_EVERY == 0 {
                // The x10 compensates for the 1-in-10 sampling rate; a
                // display approximation, not an exact mean.
                display(
                    self.global_step,
                    step,
                    &[
                        ("loss", loss_sum),
                        ("z_d_loss", z_d_loss_sum),
                        ("z_g_loss", z_g_loss_sum),
                        ("y_d_loss", y_d_loss_sum),
                        ("y_g_loss", y_g_loss_sum),
                        ("cls_loss", cls_loss_sum * 10.0),
                        ("cls_accuracy", cls_accuracy_sum * 10.0),
                    ],
                    "train",
                    cur_summary.as_ref(),
                    writer.as_deref_mut(),
                );
            }
        }

        println!("==== epoch: {}, lr: {} ====", cur_epoch, self.lr);
        display(
            self.global_step,
            step,
            &[
                ("loss", loss_sum),
                ("z_d_loss", z_d_loss_sum),
                ("z_g_loss", z_g_loss_sum),
                ("y_d_loss", y_d_loss_sum),
                ("y_g_loss", y_g_loss_sum),
            ],
            "train",
            cur_summary.as_ref(),
            writer,
        );
        Ok(loss_sum / step as f32)
    }
}
