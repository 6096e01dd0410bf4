use std::{io, path::PathBuf};

#[derive(Debug)]
pub enum AprioriError {
    InputUnavailable { path: PathBuf, source: io::Error }, // The transaction file could not be read
    InvalidConfiguration(ConfigError), // A threshold was rejected before mining
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    MinSupport(f32),    // Outside (0, 1]
    MinConfidence(f32), // Outside [0, 1]
    MaxLen,             // A length cap of zero
}

impl std::fmt::Display for AprioriError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputUnavailable { path, source } => {
                write!(f, "Unable to read transactions from {path:?}: {source}")
            }
            Self::InvalidConfiguration(err) => write!(f, "Invalid configuration: {err}"),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinSupport(value) => {
                write!(f, "minimum support must be in (0, 1], got {value}")
            }
            Self::MinConfidence(value) => {
                write!(f, "minimum confidence must be in [0, 1], got {value}")
            }
            Self::MaxLen => write!(f, "maximum itemset length must be at least 1"),
        }
    }
}

impl std::error::Error for AprioriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputUnavailable { source, .. } => Some(source),
            Self::InvalidConfiguration(err) => Some(err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for AprioriError {
    fn from(value: ConfigError) -> Self {
        AprioriError::InvalidConfiguration(value)
    }
}
