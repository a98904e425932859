//! Build definition files
//!
//! The on-disk TOML format the CLI consumes (`buildspec.toml` by
//! convention). A definition either names a preset, in which case
//! package-manager defaults fill the gaps, or spells out every command list
//! itself. Environment variables are an array of tables so the file's order
//! is preserved into the configuration's association list.
//!
//! ```toml
//! preset = "npm"
//! output-directory = "cdk.out"
//! subdirectory = "packages/infra"
//!
//! [[env]]
//! name = "SOME_ENV_VAR"
//! value = "SomeValue"
//!
//! [[artifacts]]
//! name = "IntegTest"
//! directory = "test"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PipewrightResult;
use crate::model::{ArtifactSpec, BuildConfig, ComputeProfile, EnvVar};
use crate::preset::StandardPreset;

/// Preset selector in a definition file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKind {
    Npm,
    Yarn,
}

/// Deserialized build definition
///
/// Mirrors the `BuildConfig` fields with everything optional except the
/// output directory; validation happens when the definition resolves into a
/// configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BuildDefinition {
    #[serde(default)]
    pub preset: Option<PresetKind>,

    pub output_directory: String,

    #[serde(default)]
    pub subdirectory: Option<String>,

    #[serde(default)]
    pub install_commands: Option<Vec<String>>,

    #[serde(default)]
    pub build_commands: Vec<String>,

    #[serde(default)]
    pub test_commands: Vec<String>,

    #[serde(default)]
    pub synth_commands: Option<Vec<String>>,

    #[serde(default)]
    pub compute_profile: ComputeProfile,

    #[serde(default)]
    pub privileged: bool,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub env: Vec<EnvVar>,

    #[serde(default)]
    pub artifacts: Vec<ArtifactSpec>,
}

impl BuildDefinition {
    /// Load a definition from a TOML file
    pub fn load(path: &Path) -> PipewrightResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a definition from TOML text
    pub fn parse(content: &str) -> PipewrightResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve into a validated configuration
    ///
    /// With a preset, unspecified install/synth commands fall back to the
    /// package-manager defaults; without one, they default to empty.
    pub fn into_config(self) -> PipewrightResult<BuildConfig> {
        match self.preset {
            Some(kind) => {
                let mut preset = match kind {
                    PresetKind::Npm => StandardPreset::npm(self.output_directory),
                    PresetKind::Yarn => StandardPreset::yarn(self.output_directory),
                };
                if let Some(install) = self.install_commands {
                    preset = preset.install_commands(install);
                }
                if let Some(synth) = self.synth_commands {
                    preset = preset.synth_commands(synth);
                }
                preset = preset
                    .build_commands(self.build_commands)
                    .test_commands(self.test_commands)
                    .compute_profile(self.compute_profile)
                    .privileged(self.privileged);
                for var in self.env {
                    preset = preset.env(var.name, var.value);
                }
                for artifact in self.artifacts {
                    preset = preset.additional_artifact(artifact.name, artifact.directory);
                }
                if let Some(subdirectory) = self.subdirectory {
                    preset = preset.subdirectory(subdirectory);
                }
                if let Some(image) = self.image {
                    preset = preset.image(image);
                }
                preset.resolve()
            }
            None => {
                let mut builder = BuildConfig::builder(self.output_directory)
                    .install_commands(self.install_commands.unwrap_or_default())
                    .build_commands(self.build_commands)
                    .test_commands(self.test_commands)
                    .synth_commands(self.synth_commands.unwrap_or_default())
                    .environment(self.env)
                    .compute_profile(self.compute_profile)
                    .privileged(self.privileged)
                    .additional_artifacts(self.artifacts);
                if let Some(subdirectory) = self.subdirectory {
                    builder = builder.subdirectory(subdirectory);
                }
                if let Some(image) = self.image {
                    builder = builder.image(image);
                }
                builder.build()
            }
        }
    }
}
