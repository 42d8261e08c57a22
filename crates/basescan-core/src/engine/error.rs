use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid search configuration: {source}")]
    Configuration {
        #[from]
        source: ConfigError,
    },
}
