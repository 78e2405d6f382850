//! Trainer construction and shared state

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::Dataflow;
use crate::error::{Result, TrainError};
use crate::model::{Capabilities, ClassifierModel, GenerateModel, TrainModel};
use crate::train::TrainerConfig;
use crate::viz::{GridRenderer, PngGridRenderer};

/// Batch sources for a training run
pub enum TrainData {
    /// One source feeding every objective
    Single(Box<dyn Dataflow>),
    /// Separate labeled and unlabeled sources for semi-supervised runs
    SemiSupervised {
        labeled: Box<dyn Dataflow>,
        unlabeled: Box<dyn Dataflow>,
    },
}

/// Orchestrates training and evaluation epochs over an external
/// execution engine
///
/// The trainer owns the run's counters (`global_step`, `epoch_id`), the
/// current learning rate, and the prior-sampling RNG. It is constructed
/// once per run and lives for the whole of it; counters are single-writer
/// and only ever increase, and the learning rate only ever decreases.
///
/// # Example
///
/// ```no_run
/// use adversario::{Trainer, TrainData, TrainerConfig, PriorKind};
/// # let model: Box<dyn adversario::model::TrainModel> = todo!();
/// # let flow: Box<dyn adversario::data::Dataflow> = todo!();
///
/// let config = TrainerConfig {
///     prior: PriorKind::Gmm,
///     use_label: true,
///     ..TrainerConfig::default()
/// };
/// let mut trainer = Trainer::new(model, TrainData::Single(flow), config).with_seed(42);
///
/// for _ in 0..400 {
///     trainer.train_z_gan_epoch(1.0, None).unwrap();
/// }
/// ```
pub struct Trainer {
    pub(crate) model: Box<dyn TrainModel>,
    pub(crate) generate_model: Option<Box<dyn GenerateModel>>,
    pub(crate) cls_valid_model: Option<Box<dyn ClassifierModel>>,
    pub(crate) data: TrainData,
    pub(crate) renderer: Box<dyn GridRenderer>,
    pub(crate) config: TrainerConfig,
    /// Op groups snapshotted from the model at construction
    pub(crate) caps: Capabilities,
    /// Current learning rate; only the epoch schedules mutate it
    pub(crate) lr: f32,
    pub(crate) rng: StdRng,
    pub(crate) global_step: usize,
    pub(crate) epoch_id: usize,
}

impl Trainer {
    /// Create a trainer for a run
    ///
    /// Snapshots the model's [`Capabilities`]; epoch methods that need an
    /// absent op group fail at first use.
    pub fn new(model: Box<dyn TrainModel>, data: TrainData, config: TrainerConfig) -> Self {
        let caps = model.capabilities();
        let lr = config.init_lr;
        Self {
            model,
            generate_model: None,
            cls_valid_model: None,
            data,
            renderer: Box::new(PngGridRenderer),
            config,
            caps,
            lr,
            rng: StdRng::from_os_rng(),
            global_step: 0,
            epoch_id: 0,
        }
    }

    /// Seed the prior-sampling RNG for reproducibility
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Attach the sample-generation collaborator
    #[must_use]
    pub fn with_generate_model(mut self, model: Box<dyn GenerateModel>) -> Self {
        self.generate_model = Some(model);
        self
    }

    /// Attach the evaluation-only classifier used by the validation pass
    #[must_use]
    pub fn with_valid_classifier(mut self, model: Box<dyn ClassifierModel>) -> Self {
        self.cls_valid_model = Some(model);
        self
    }

    /// Replace the default PNG grid renderer
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn GridRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Batches consumed across the whole run
    #[must_use]
    pub fn global_step(&self) -> usize {
        self.global_step
    }

    /// Training-epoch invocations so far
    #[must_use]
    pub fn epoch_id(&self) -> usize {
        self.epoch_id
    }

    /// Learning rate the next update will use
    #[must_use]
    pub fn lr(&self) -> f32 {
        self.lr
    }

    /// Op groups available on the training model
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Reposition the counters when resuming a run from a checkpoint
    ///
    /// The learning-rate schedules key off `epoch_id`, so a resumed run
    /// must restore it to keep the divisor thresholds aligned.
    pub fn resume_from(&mut self, epoch_id: usize, global_step: usize) {
        self.epoch_id = epoch_id;
        self.global_step = global_step;
    }

    pub(crate) fn require_latent(&self) -> Result<()> {
        if self.caps.latent_adversarial {
            Ok(())
        } else {
            Err(TrainError::MissingCapability("latent adversarial"))
        }
    }

    pub(crate) fn require_categorical(&self) -> Result<()> {
        if self.caps.categorical_adversarial {
            Ok(())
        } else {
            Err(TrainError::MissingCapability("categorical adversarial"))
        }
    }

    pub(crate) fn require_classifier(&self) -> Result<()> {
        if self.caps.classifier {
            Ok(())
        } else {
            Err(TrainError::MissingCapability("classification"))
        }
    }
}
