use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_MAX_CUTOFF: f64 = 15.0;
pub const DEFAULT_MIN_CUTOFF: f64 = 9.0;
pub const DEFAULT_MIN_ATOMS_PER_BASE: usize = 3;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("cutoff distances must be positive (got {0})")]
    NonPositiveCutoff(f64),

    #[error("distance band is inverted: min_cutoff {min} must lie below max_cutoff {max}")]
    InvertedDistanceBand { min: f64, max: f64 },

    #[error("min_atoms_per_base must be at least 1")]
    ZeroMinAtomsPerBase,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid configuration in '{path}': {source}")]
    Invalid { path: String, source: ConfigError },
}

/// Parameters of the base-pair search.
///
/// The distance band `(min_cutoff, max_cutoff]` is measured between sugar
/// anchor atoms; `min_atoms_per_base` is the smallest number of matched
/// template atoms from which an incomplete base may still be emulated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PairSearchConfig {
    pub max_cutoff: f64,
    pub min_cutoff: f64,
    pub min_atoms_per_base: usize,
}

impl Default for PairSearchConfig {
    fn default() -> Self {
        Self {
            max_cutoff: DEFAULT_MAX_CUTOFF,
            min_cutoff: DEFAULT_MIN_CUTOFF,
            min_atoms_per_base: DEFAULT_MIN_ATOMS_PER_BASE,
        }
    }
}

impl PairSearchConfig {
    pub fn builder() -> PairSearchConfigBuilder {
        PairSearchConfigBuilder::default()
    }

    /// Loads and validates a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: PairSearchConfig =
            toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        config.validate().map_err(|e| ConfigLoadError::Invalid {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cutoff <= 0.0 {
            return Err(ConfigError::NonPositiveCutoff(self.max_cutoff));
        }
        if self.min_cutoff < 0.0 {
            return Err(ConfigError::NonPositiveCutoff(self.min_cutoff));
        }
        if self.min_cutoff >= self.max_cutoff {
            return Err(ConfigError::InvertedDistanceBand {
                min: self.min_cutoff,
                max: self.max_cutoff,
            });
        }
        if self.min_atoms_per_base == 0 {
            return Err(ConfigError::ZeroMinAtomsPerBase);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct PairSearchConfigBuilder {
    max_cutoff: Option<f64>,
    min_cutoff: Option<f64>,
    min_atoms_per_base: Option<usize>,
}

impl PairSearchConfigBuilder {
    pub fn max_cutoff(mut self, cutoff: f64) -> Self {
        self.max_cutoff = Some(cutoff);
        self
    }

    pub fn min_cutoff(mut self, cutoff: f64) -> Self {
        self.min_cutoff = Some(cutoff);
        self
    }

    pub fn min_atoms_per_base(mut self, count: usize) -> Self {
        self.min_atoms_per_base = Some(count);
        self
    }

    pub fn build(self) -> Result<PairSearchConfig, ConfigError> {
        let defaults = PairSearchConfig::default();
        let config = PairSearchConfig {
            max_cutoff: self.max_cutoff.unwrap_or(defaults.max_cutoff),
            min_cutoff: self.min_cutoff.unwrap_or(defaults.min_cutoff),
            min_atoms_per_base: self
                .min_atoms_per_base
                .unwrap_or(defaults.min_atoms_per_base),
        };
        config.validate()?;
        Ok(config)
    }
}
