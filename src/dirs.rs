//! Directory resolution
//!
//! Determines the working subdirectory prefix command and the artifact base
//! directory for a build. Paths are forward-slash-separated relative paths;
//! joining is textual concatenation that avoids duplicate separators.

/// Resolved directory layout for one compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirs {
    /// `cd <subdirectory>` command, present only when a subdirectory is set.
    /// Must run before anything else in the install phase.
    pub working_prefix: Option<String>,
    /// Base directory the primary artifact is collected from
    pub artifact_base: String,
}

/// Resolve the directory layout from the optional subdirectory and the
/// synth output directory. Pure; no failure modes.
pub fn resolve(subdirectory: Option<&str>, output_directory: &str) -> ResolvedDirs {
    match subdirectory {
        None => ResolvedDirs {
            working_prefix: None,
            artifact_base: output_directory.to_string(),
        },
        Some(subdir) => ResolvedDirs {
            working_prefix: Some(format!("cd {}", subdir)),
            artifact_base: join(subdir, output_directory),
        },
    }
}

/// Join two relative paths with a single `/`
fn join(left: &str, right: &str) -> String {
    format!(
        "{}/{}",
        left.trim_end_matches('/'),
        right.trim_start_matches('/')
    )
}
