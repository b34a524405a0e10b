//! Error types for rewriting and profile configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while transforming a sentence.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A pronoun with several role-dependent targets had a dependency label
    /// that marks it as neither subject nor object.
    #[error("cannot resolve the role of {text:?} (token {index}): dependency label {dep:?} is neither subject nor object")]
    AmbiguousRole {
        text: String,
        index: usize,
        dep: String,
    },

    /// The parser failed to produce tokens.
    #[error("failed to parse input: {0}")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransformError {
    pub fn is_ambiguous_role(&self) -> bool {
        matches!(self, TransformError::AmbiguousRole { .. })
    }
}

/// Errors raised when building or loading a transformation profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile {profile:?}: {which} vocabulary has {found} slots, expected {expected}")]
    SlotCount {
        profile: String,
        which: &'static str,
        found: usize,
        expected: usize,
    },

    #[error("profile {profile:?}: vocabulary entry {position} is empty")]
    EmptySlot { profile: String, position: usize },

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("invalid profile configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for rewriting operations.
pub type TransformResult<T> = Result<T, TransformError>;
