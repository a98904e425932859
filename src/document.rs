//! Build-specification document assembly
//!
//! Composes compiled phases and the artifacts section into the versioned
//! document handed to the remote build executor, and renders environment
//! variable lists for the executor and for the orchestrating pipeline
//! action.
//!
//! The fingerprint is deliberately not embedded in the document: the
//! document describes what runs, while the fingerprint is metadata the
//! orchestrator uses to decide whether redeployment is needed first. It
//! travels as a single `_PROJECT_CONFIG_HASH` entry in the pipeline
//! action's own environment list.

use serde::Serialize;

use crate::artifacts::ArtifactsSection;
use crate::error::PipewrightResult;
use crate::fingerprint::Fingerprint;
use crate::model::EnvVar;
use crate::phases::Phases;

/// Schema version marker of the build-specification document
pub const SPEC_VERSION: &str = "0.2";

/// Name of the environment entry carrying the configuration fingerprint on
/// the orchestrating pipeline action
pub const PROJECT_CONFIG_HASH_VAR: &str = "_PROJECT_CONFIG_HASH";

/// One named phase of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseSection {
    pub commands: Vec<String>,
}

/// The `phases` mapping; absent phases are omitted rather than emitted empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhasesSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install: Option<PhaseSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<PhaseSection>,
}

/// Compiled build-specification document
///
/// Plain data with no identity beyond its content: compiling equal
/// configurations yields structurally equal documents, and `to_json` emits
/// byte-identical text for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSpec {
    pub version: String,
    pub phases: PhasesSection,
    pub artifacts: ArtifactsSection,
}

impl BuildSpec {
    /// Serialize to the compact structured-text encoding consumed by the
    /// remote build executor
    pub fn to_json(&self) -> PipewrightResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize for human inspection
    pub fn to_json_pretty(&self) -> PipewrightResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compose phases and artifacts into the versioned document
pub fn assemble(phases: Phases, artifacts: ArtifactsSection) -> BuildSpec {
    BuildSpec {
        version: SPEC_VERSION.to_string(),
        phases: PhasesSection {
            install: phases.install.map(|commands| PhaseSection { commands }),
            build: phases.build.map(|commands| PhaseSection { commands }),
        },
        artifacts,
    }
}

/// Type tag of a rendered environment entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvEntryType {
    Plaintext,
}

/// One rendered (name, type, value) environment triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EnvEntryType,
    pub value: String,
}

impl EnvironmentEntry {
    pub fn plaintext(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry_type: EnvEntryType::Plaintext,
            value: value.into(),
        }
    }
}

/// Render configuration environment variables in insertion order
///
/// These belong to the executor's environment. Engine-injected entries (the
/// fingerprint) live in the orchestrating action's list instead and are
/// never merged into this one.
pub fn render_environment(vars: &[EnvVar]) -> Vec<EnvironmentEntry> {
    vars.iter()
        .map(|v| EnvironmentEntry::plaintext(v.name.clone(), v.value.clone()))
        .collect()
}

/// Render the orchestrating action's environment list: the single
/// fingerprint entry
pub fn action_environment(fingerprint: &Fingerprint) -> Vec<EnvironmentEntry> {
    vec![EnvironmentEntry::plaintext(
        PROJECT_CONFIG_HASH_VAR,
        fingerprint.as_str(),
    )]
}
