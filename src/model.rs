//! Core data model for Pipewright
//!
//! Defines the validated, normalized description of "how to build":
//! - `BuildConfig`: the immutable configuration value object
//! - `BuildConfigBuilder`: its only constructor, enforcing uniqueness invariants
//! - Supporting types: `ComputeProfile`, `EnvVar`, `ArtifactSpec`
//!
//! A `BuildConfig` is constructed once per compilation request and never
//! mutated by the compiler. Higher-level presets (see `preset`) produce fully
//! resolved configurations before they reach this model.

use serde::{Deserialize, Serialize};

use crate::artifacts::SYNTH_OUTPUT_NAME;
use crate::error::{PipewrightError, PipewrightResult};

/// Executor sizing tier for the remote build
///
/// Consumed by an external provisioner; the compiler itself only folds it
/// into the configuration fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComputeProfile {
    /// Smallest executor tier
    Small,
    /// Default executor tier
    #[default]
    Medium,
    /// Largest executor tier
    Large,
}

impl ComputeProfile {
    /// Fixed literal token used in canonical serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            ComputeProfile::Small => "small",
            ComputeProfile::Medium => "medium",
            ComputeProfile::Large => "large",
        }
    }
}

/// A single environment variable declaration
///
/// Environment variables form an ordered association list: insertion order is
/// meaningful for rendering, while name uniqueness is enforced at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An additional named build output besides the primary one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Logical name, unique within a configuration
    pub name: String,
    /// Directory the artifact is collected from, relative to the source root
    pub directory: String,
}

impl ArtifactSpec {
    pub fn new(name: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
        }
    }
}

/// Default execution image when a definition does not name one
pub const DEFAULT_IMAGE: &str = "standard:4.0";

/// Validated, immutable description of a build
///
/// Owned by the caller; compilation reads it and allocates fresh outputs.
/// Construct through [`BuildConfig::builder`].
#[derive(Debug, Clone)]
pub struct BuildConfig {
    install_commands: Vec<String>,
    build_commands: Vec<String>,
    test_commands: Vec<String>,
    synth_commands: Vec<String>,
    environment: Vec<EnvVar>,
    compute_profile: ComputeProfile,
    privileged: bool,
    subdirectory: Option<String>,
    output_directory: String,
    additional_artifacts: Vec<ArtifactSpec>,
    image: String,
}

impl BuildConfig {
    /// Start building a configuration with the given output directory
    pub fn builder(output_directory: impl Into<String>) -> BuildConfigBuilder {
        BuildConfigBuilder::new(output_directory)
    }

    pub fn install_commands(&self) -> &[String] {
        &self.install_commands
    }

    pub fn build_commands(&self) -> &[String] {
        &self.build_commands
    }

    pub fn test_commands(&self) -> &[String] {
        &self.test_commands
    }

    pub fn synth_commands(&self) -> &[String] {
        &self.synth_commands
    }

    /// Environment variables in their original insertion order
    pub fn environment(&self) -> &[EnvVar] {
        &self.environment
    }

    pub fn compute_profile(&self) -> ComputeProfile {
        self.compute_profile
    }

    /// Whether the build needs elevated (e.g. container-in-container) privileges
    pub fn privileged(&self) -> bool {
        self.privileged
    }

    pub fn subdirectory(&self) -> Option<&str> {
        self.subdirectory.as_deref()
    }

    pub fn output_directory(&self) -> &str {
        &self.output_directory
    }

    pub fn additional_artifacts(&self) -> &[ArtifactSpec] {
        &self.additional_artifacts
    }

    /// Opaque execution-image reference
    ///
    /// Participates in the fingerprint but not in phase or artifact
    /// compilation; an external provisioner reads it.
    pub fn image(&self) -> &str {
        &self.image
    }

    fn environment_sorted(&self) -> Vec<&EnvVar> {
        let mut vars: Vec<&EnvVar> = self.environment.iter().collect();
        vars.sort_by(|a, b| a.name.cmp(&b.name));
        vars
    }
}

// Environment insertion order is meaningful for rendering but not for
// equality: two configurations declaring the same variables in a different
// order describe the same build.
impl PartialEq for BuildConfig {
    fn eq(&self, other: &Self) -> bool {
        self.install_commands == other.install_commands
            && self.build_commands == other.build_commands
            && self.test_commands == other.test_commands
            && self.synth_commands == other.synth_commands
            && self.environment_sorted() == other.environment_sorted()
            && self.compute_profile == other.compute_profile
            && self.privileged == other.privileged
            && self.subdirectory == other.subdirectory
            && self.output_directory == other.output_directory
            && self.additional_artifacts == other.additional_artifacts
            && self.image == other.image
    }
}

impl Eq for BuildConfig {}

/// Builder for [`BuildConfig`]
///
/// `build()` enforces the construction invariants: unique environment
/// variable names, unique additional-artifact names, non-empty output
/// directory. Duplicates are a hard error, never last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct BuildConfigBuilder {
    install_commands: Vec<String>,
    build_commands: Vec<String>,
    test_commands: Vec<String>,
    synth_commands: Vec<String>,
    environment: Vec<EnvVar>,
    compute_profile: ComputeProfile,
    privileged: bool,
    subdirectory: Option<String>,
    output_directory: String,
    additional_artifacts: Vec<ArtifactSpec>,
    image: Option<String>,
}

impl BuildConfigBuilder {
    pub fn new(output_directory: impl Into<String>) -> Self {
        Self {
            output_directory: output_directory.into(),
            ..Self::default()
        }
    }

    pub fn install_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.install_commands = commands.into_iter().map(Into::into).collect();
        self
    }

    pub fn build_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_commands = commands.into_iter().map(Into::into).collect();
        self
    }

    pub fn test_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_commands = commands.into_iter().map(Into::into).collect();
        self
    }

    pub fn synth_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synth_commands = commands.into_iter().map(Into::into).collect();
        self
    }

    /// Append one environment variable, preserving insertion order
    pub fn env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.push(EnvVar::new(name, value));
        self
    }

    pub fn environment<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = EnvVar>,
    {
        self.environment = vars.into_iter().collect();
        self
    }

    pub fn compute_profile(mut self, profile: ComputeProfile) -> Self {
        self.compute_profile = profile;
        self
    }

    pub fn privileged(mut self, privileged: bool) -> Self {
        self.privileged = privileged;
        self
    }

    pub fn subdirectory(mut self, subdirectory: impl Into<String>) -> Self {
        self.subdirectory = Some(subdirectory.into());
        self
    }

    pub fn additional_artifact(
        mut self,
        name: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        self.additional_artifacts
            .push(ArtifactSpec::new(name, directory));
        self
    }

    pub fn additional_artifacts<I>(mut self, artifacts: I) -> Self
    where
        I: IntoIterator<Item = ArtifactSpec>,
    {
        self.additional_artifacts = artifacts.into_iter().collect();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Validate and produce the immutable configuration
    pub fn build(self) -> PipewrightResult<BuildConfig> {
        if self.output_directory.is_empty() {
            return Err(PipewrightError::EmptyOutputDirectory);
        }

        for (i, var) in self.environment.iter().enumerate() {
            if self.environment[..i].iter().any(|v| v.name == var.name) {
                return Err(PipewrightError::DuplicateEnvVar {
                    name: var.name.clone(),
                });
            }
        }

        for (i, artifact) in self.additional_artifacts.iter().enumerate() {
            if artifact.name == SYNTH_OUTPUT_NAME {
                return Err(PipewrightError::ReservedArtifactName {
                    name: artifact.name.clone(),
                });
            }
            if self.additional_artifacts[..i]
                .iter()
                .any(|a| a.name == artifact.name)
            {
                return Err(PipewrightError::DuplicateArtifact {
                    name: artifact.name.clone(),
                });
            }
        }

        Ok(BuildConfig {
            install_commands: self.install_commands,
            build_commands: self.build_commands,
            test_commands: self.test_commands,
            synth_commands: self.synth_commands,
            environment: self.environment,
            compute_profile: self.compute_profile,
            privileged: self.privileged,
            // An empty subdirectory is the same as no subdirectory; it must
            // not produce a bare `cd ` command or an absolute artifact base.
            subdirectory: self.subdirectory.filter(|s| !s.is_empty()),
            output_directory: self.output_directory,
            additional_artifacts: self.additional_artifacts,
            image: self.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
        })
    }
}
