//! Pipewright - build-specification compiler and fingerprint engine
//!
//! Pipewright compiles a declarative description of a build (install, build,
//! test, and synth commands, environment variables, directory layout,
//! privilege and sizing requirements) into two artifacts: a versioned
//! build-specification document for a remote build executor, and a short
//! deterministic fingerprint of the build-relevant configuration used to
//! detect when a running pipeline's build definition has drifted.

pub mod artifacts;
pub mod cli;
pub mod compiler;
pub mod definition;
pub mod dirs;
pub mod document;
pub mod error;
pub mod fingerprint;
pub mod model;
pub mod phases;
pub mod preset;

// Re-exports for convenience
pub use artifacts::{ArtifactEntry, ArtifactsSection, SYNTH_OUTPUT_NAME};
pub use compiler::{compile, CompiledBuild};
pub use definition::BuildDefinition;
pub use document::{BuildSpec, EnvironmentEntry, PROJECT_CONFIG_HASH_VAR, SPEC_VERSION};
pub use error::{PipewrightError, PipewrightResult};
pub use fingerprint::Fingerprint;
pub use model::{ArtifactSpec, BuildConfig, BuildConfigBuilder, ComputeProfile, EnvVar};
pub use preset::StandardPreset;
