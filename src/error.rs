//! Error types for Pipewright
//!
//! Uses `thiserror` for library errors. Every failure in the compiler core is
//! a deterministic input-validation failure reported synchronously; there are
//! no transient errors and nothing is retried.

use thiserror::Error;

/// Result type alias for Pipewright operations
pub type PipewrightResult<T> = Result<T, PipewrightError>;

/// Main error type for Pipewright operations
#[derive(Error, Debug)]
pub enum PipewrightError {
    /// Duplicate environment variable name in a build configuration
    #[error("duplicate environment variable '{name}' in build configuration")]
    DuplicateEnvVar { name: String },

    /// Duplicate additional-artifact logical name
    #[error("duplicate additional artifact '{name}' in build configuration")]
    DuplicateArtifact { name: String },

    /// Additional artifact clashes with the reserved synthesis-output name
    #[error("additional artifact name '{name}' is reserved for the primary synthesis output")]
    ReservedArtifactName { name: String },

    /// Output directory must name the synth output location
    #[error("output directory must not be empty")]
    EmptyOutputDirectory,

    /// Canonical serialization failed while fingerprinting
    ///
    /// Indicates a programming error upstream, not bad user input.
    #[error("canonical serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Build definition file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Build definition file is not valid TOML
    #[error("invalid build definition: {0}")]
    Definition(#[from] toml::de::Error),
}
