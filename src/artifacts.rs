//! Artifact section compilation
//!
//! Emits the `artifacts` section of the build-specification document:
//! the primary synth output, plus a `secondary-artifacts` map when the
//! configuration declares additional named outputs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::ArtifactSpec;

/// Well-known name the primary synthesis output is addressable under inside
/// `secondary-artifacts`
pub const SYNTH_OUTPUT_NAME: &str = "CloudAsm";

/// Glob selecting every file under an artifact's base directory
pub const ALL_FILES: &str = "**/*";

/// One named artifact entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactEntry {
    #[serde(rename = "base-directory")]
    pub base_directory: String,
    pub files: String,
}

impl ArtifactEntry {
    fn new(base_directory: impl Into<String>) -> Self {
        Self {
            base_directory: base_directory.into(),
            files: ALL_FILES.to_string(),
        }
    }
}

/// The `artifacts` section of the compiled document
///
/// With no additional artifacts this is the flat primary-only shape; the
/// `secondary-artifacts` key does not appear at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactsSection {
    #[serde(rename = "base-directory")]
    pub base_directory: String,
    pub files: String,
    #[serde(rename = "secondary-artifacts", skip_serializing_if = "Option::is_none")]
    pub secondary_artifacts: Option<BTreeMap<String, ArtifactEntry>>,
}

/// Build the artifacts section
///
/// When additional artifacts exist, the primary output also appears inside
/// `secondary-artifacts` under [`SYNTH_OUTPUT_NAME`] so consumers address
/// every output uniformly. Additional-artifact directories are declared
/// relative to the source root and are deliberately not prefixed by the
/// working subdirectory, unlike the primary base directory.
pub fn build(artifact_base: &str, additional: &[ArtifactSpec]) -> ArtifactsSection {
    let secondary_artifacts = if additional.is_empty() {
        None
    } else {
        let mut map = BTreeMap::new();
        map.insert(
            SYNTH_OUTPUT_NAME.to_string(),
            ArtifactEntry::new(artifact_base),
        );
        for artifact in additional {
            map.insert(
                artifact.name.clone(),
                ArtifactEntry::new(artifact.directory.clone()),
            );
        }
        Some(map)
    };

    ArtifactsSection {
        base_directory: artifact_base.to_string(),
        files: ALL_FILES.to_string(),
        secondary_artifacts,
    }
}
