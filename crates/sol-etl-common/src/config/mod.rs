//! Configuration types for the block normalizer

use {
    serde::{Deserialize, Serialize},
    std::{fs, path::Path},
};

use crate::{
    errors::{Error, Result},
    utils::init_tracing,
};

/// What to do with a record whose numeric fields cannot be converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorPolicy {
    /// Fail the whole block; no records are returned.
    #[default]
    Abort,
    /// Drop the offending record, keep the rest and report it.
    SkipRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub parse_error_policy: ParseErrorPolicy,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Worker threads for multi-block normalization. `None` uses the global pool.
    #[serde(default)]
    pub threads: Option<usize>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            parse_error_policy: ParseErrorPolicy::default(),
            log_level: default_log_level(),
            threads: None,
        }
    }
}

impl NormalizerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config = serde_json::from_str::<Self>(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Installs the global tracing subscriber at `log_level`, unless `RUST_LOG`
    /// overrides it. Returns `false` if a subscriber was already installed.
    pub fn init_logging(&self) -> bool {
        init_tracing(&self.log_level)
    }

    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(Error::Config("threads must be greater than zero".to_string()));
        }
        if self.log_level.trim().is_empty() {
            return Err(Error::Config("log_level must not be empty".to_string()));
        }
        Ok(())
    }
}
