//! Build compilation entry point
//!
//! Wires the directory resolver, phase compiler, artifact builder,
//! fingerprint engine, and document assembler into one call. Compilation is
//! a pure, synchronous transformation: it reads the caller-owned
//! `BuildConfig` and allocates fresh outputs, so independent compilations
//! can run fully in parallel.

use crate::document::{self, BuildSpec, EnvironmentEntry};
use crate::error::PipewrightResult;
use crate::fingerprint::Fingerprint;
use crate::model::BuildConfig;
use crate::{artifacts, dirs, phases};

/// Result of compiling one build configuration
///
/// The document and fingerprint are separate outputs on purpose: the
/// document goes to the remote executor, the fingerprint to the
/// orchestrating action's environment for drift detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledBuild {
    /// The build-specification document for the remote executor
    pub spec: BuildSpec,
    /// Drift-detection fingerprint of the build-relevant configuration
    pub fingerprint: Fingerprint,
    /// Executor environment variables, rendered in insertion order
    pub environment: Vec<EnvironmentEntry>,
}

impl CompiledBuild {
    /// Environment list for the orchestrating pipeline action: the single
    /// `_PROJECT_CONFIG_HASH` entry
    pub fn action_environment(&self) -> Vec<EnvironmentEntry> {
        document::action_environment(&self.fingerprint)
    }
}

/// Compile a configuration into its document and fingerprint
pub fn compile(config: &BuildConfig) -> PipewrightResult<CompiledBuild> {
    let resolved = dirs::resolve(config.subdirectory(), config.output_directory());

    let phases = phases::compile(config, resolved.working_prefix.as_deref());
    let artifacts = artifacts::build(&resolved.artifact_base, config.additional_artifacts());
    let fingerprint = Fingerprint::of(config)?;

    Ok(CompiledBuild {
        spec: document::assemble(phases, artifacts),
        fingerprint,
        environment: document::render_environment(config.environment()),
    })
}
