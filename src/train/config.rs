//! Trainer configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Prior family for continuous-latent matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorKind {
    /// Isotropic Gaussian, mean 0, variance 1
    #[default]
    Gaussian,
    /// 10-component ring mixture, x-variance 0.5, y-variance 0.1
    Gmm,
}

/// Run-level trainer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Learning rate before any schedule divisor applies
    #[serde(default = "default_init_lr")]
    pub init_lr: f32,
    /// Prior used by the continuous-latent adversarial epoch
    #[serde(default)]
    pub prior: PriorKind,
    /// Condition the mixture prior on true batch labels
    #[serde(default)]
    pub use_label: bool,
    /// Directory for generation-sample grids; `None` disables rendering
    #[serde(default)]
    pub save_path: Option<PathBuf>,
}

fn default_init_lr() -> f32 {
    1e-3
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            init_lr: default_init_lr(),
            prior: PriorKind::default(),
            use_label: false,
            save_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.init_lr, 1e-3);
        assert_eq!(config.prior, PriorKind::Gaussian);
        assert!(!config.use_label);
        assert!(config.save_path.is_none());
    }

    #[test]
    fn test_config_serde_defaults_apply() {
        let config: TrainerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.init_lr, 1e-3);
        assert_eq!(config.prior, PriorKind::Gaussian);
    }

    #[test]
    fn test_prior_kind_lowercase_names() {
        let config: TrainerConfig =
            serde_json::from_str(r#"{"prior": "gmm", "use_label": true}"#).unwrap();
        assert_eq!(config.prior, PriorKind::Gmm);
        assert!(config.use_label);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = TrainerConfig {
            init_lr: 2e-4,
            prior: PriorKind::Gmm,
            use_label: true,
            save_path: Some(PathBuf::from("/tmp/samples")),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: TrainerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.init_lr, config.init_lr);
        assert_eq!(parsed.prior, config.prior);
        assert_eq!(parsed.save_path, config.save_path);
    }
}
