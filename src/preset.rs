//! Convenience presets
//!
//! The "standard package-manager" shorthand: fills in the default install
//! and synth commands for a package manager, then produces a fully resolved
//! [`BuildConfig`]. The compiler core never special-cases a preset; by the
//! time a configuration reaches it, every default has been resolved here.

use crate::error::PipewrightResult;
use crate::model::{ArtifactSpec, BuildConfig, BuildConfigBuilder, ComputeProfile, EnvVar};

/// Package manager a standard preset targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    fn default_install(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm ci",
            PackageManager::Yarn => "yarn install --frozen-lockfile",
        }
    }

    fn default_synth(&self) -> &'static str {
        "npx cdk synth"
    }
}

/// Standard preset: package-manager defaults plus per-build overrides
///
/// There is no build step by default; the build phase holds only the synth
/// command unless explicit build or test commands are supplied.
#[derive(Debug, Clone)]
pub struct StandardPreset {
    manager: PackageManager,
    output_directory: String,
    install_commands: Option<Vec<String>>,
    build_commands: Vec<String>,
    test_commands: Vec<String>,
    synth_commands: Option<Vec<String>>,
    environment: Vec<EnvVar>,
    compute_profile: ComputeProfile,
    privileged: bool,
    subdirectory: Option<String>,
    additional_artifacts: Vec<ArtifactSpec>,
    image: Option<String>,
}

impl StandardPreset {
    pub fn npm(output_directory: impl Into<String>) -> Self {
        Self::new(PackageManager::Npm, output_directory)
    }

    pub fn yarn(output_directory: impl Into<String>) -> Self {
        Self::new(PackageManager::Yarn, output_directory)
    }

    fn new(manager: PackageManager, output_directory: impl Into<String>) -> Self {
        Self {
            manager,
            output_directory: output_directory.into(),
            install_commands: None,
            build_commands: Vec::new(),
            test_commands: Vec::new(),
            synth_commands: None,
            environment: Vec::new(),
            compute_profile: ComputeProfile::default(),
            privileged: false,
            subdirectory: None,
            additional_artifacts: Vec::new(),
            image: None,
        }
    }

    /// Replace the default install command
    pub fn install_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.install_commands = Some(commands.into_iter().map(Into::into).collect());
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

    /// Replace the default synth command
    pub fn synth_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synth_commands = Some(commands.into_iter().map(Into::into).collect());
        self
    }

    pub fn env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.push(EnvVar::new(name, value));
        self
    }

    pub fn compute_profile(mut self, profile: ComputeProfile) -> Self {
        self.compute_profile = profile;
        self
    }

    /// Mark the synth step as needing elevated container privileges
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

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Resolve defaults and produce the configuration
    pub fn resolve(self) -> PipewrightResult<BuildConfig> {
        let install = self
            .install_commands
            .unwrap_or_else(|| vec![self.manager.default_install().to_string()]);
        let synth = self
            .synth_commands
            .unwrap_or_else(|| vec![self.manager.default_synth().to_string()]);

        let mut builder = BuildConfigBuilder::new(self.output_directory)
            .install_commands(install)
            .build_commands(self.build_commands)
            .test_commands(self.test_commands)
            .synth_commands(synth)
            .environment(self.environment)
            .compute_profile(self.compute_profile)
            .privileged(self.privileged)
            .additional_artifacts(self.additional_artifacts);

        if let Some(subdirectory) = self.subdirectory {
            builder = builder.subdirectory(subdirectory);
        }
        if let Some(image) = self.image {
            builder = builder.image(image);
        }

        builder.build()
    }
}
