//! Phase compilation
//!
//! Turns the ordered command lists of a `BuildConfig` into the phase
//! structure of the build-specification document. Commands are opaque
//! strings: never reordered, deduplicated, or rewritten.

use crate::model::BuildConfig;

/// Compiled phase structure
///
/// A `None` phase is omitted from the document entirely; a present-but-empty
/// command list never occurs (it compiles to `None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phases {
    pub install: Option<Vec<String>>,
    pub build: Option<Vec<String>>,
}

/// Compile the install and build phases
///
/// - `install` = `[working_prefix?] ++ install_commands`
/// - `build` = `build_commands ++ test_commands ++ synth_commands`,
///   concatenated in that fixed order regardless of which are empty
pub fn compile(config: &BuildConfig, working_prefix: Option<&str>) -> Phases {
    let mut install: Vec<String> = Vec::new();
    if let Some(prefix) = working_prefix {
        install.push(prefix.to_string());
    }
    install.extend(config.install_commands().iter().cloned());

    let mut build: Vec<String> = Vec::new();
    build.extend(config.build_commands().iter().cloned());
    build.extend(config.test_commands().iter().cloned());
    build.extend(config.synth_commands().iter().cloned());

    Phases {
        install: non_empty(install),
        build: non_empty(build),
    }
}

fn non_empty(commands: Vec<String>) -> Option<Vec<String>> {
    if commands.is_empty() {
        None
    } else {
        Some(commands)
    }
}
