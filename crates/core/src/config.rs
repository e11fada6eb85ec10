use serde::{Deserialize, Serialize};

use crate::line::is_nucleotide;

/// Forward primer tail used when no prefix is configured.
pub const DEFAULT_PREFIX: &str = "GCGGCG";

/// Universal stem-loop RT primer backbone used when no suffix is configured.
pub const DEFAULT_SUFFIX: &str = "GTCGTATCCAGTGCAGGGTCCGAGGTATTCGCACTGGATACGAC";

pub const DEFAULT_RT_OVERLAP: usize = 6;
pub const DEFAULT_MIN_LENGTH: usize = 16;
pub const DEFAULT_MAX_LENGTH: usize = 30;
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config file: {0}")]
    Parse(String),

    #[error("min_length ({min}) is greater than max_length ({max})")]
    LengthBounds { min: usize, max: usize },

    #[error("rt_overlap ({overlap}) must be at least 1 and below min_length ({min})")]
    Overlap { overlap: usize, min: usize },

    #[error("The {field} literal contains '{character}', which is not a nucleotide")]
    Literal { field: &'static str, character: char },

    #[error("max_input_bytes must be greater than zero")]
    InputBound,
}

/// Settings for one primer design session.
///
/// `prefix` and `suffix` are passed unchanged into every transformer call of a
/// submission. Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimerConfig {
    pub prefix: String,
    pub suffix: String,
    pub rt_overlap: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub max_input_bytes: usize,
}

impl Default for PrimerConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            rt_overlap: DEFAULT_RT_OVERLAP,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl PrimerConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PrimerConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, prefix: Option<String>, suffix: Option<String>) -> Self {
        if let Some(prefix) = prefix {
            self.prefix = prefix;
        }
        if let Some(suffix) = suffix {
            self.suffix = suffix;
        }
        self
    }

    /// Reject settings the bundled strategies cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length > self.max_length {
            return Err(ConfigError::LengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }

        if self.rt_overlap == 0 || self.rt_overlap >= self.min_length {
            return Err(ConfigError::Overlap {
                overlap: self.rt_overlap,
                min: self.min_length,
            });
        }

        if self.max_input_bytes == 0 {
            return Err(ConfigError::InputBound);
        }

        check_literal("prefix", &self.prefix)?;
        check_literal("suffix", &self.suffix)
    }
}

fn check_literal(field: &'static str, literal: &str) -> Result<(), ConfigError> {
    match literal.chars().find(|c| !is_nucleotide(*c)) {
        Some(character) => Err(ConfigError::Literal { field, character }),
        None => Ok(()),
    }
}
