//! Configuration fingerprinting
//!
//! Canonicalizes the build-relevant subset of a `BuildConfig` and derives a
//! short stable hash from it. The orchestrating system compares the
//! fingerprint against the one baked into a running pipeline to decide
//! whether the build project has drifted and must be redeployed first.
//!
//! The canonical form covers exactly: the four command lists, the
//! environment (sorted by name, so insertion order never leaks into the
//! hash), the compute profile, the privileged flag, and the image reference.
//! Fields that do not change the remote executor's observable behavior stay
//! out; adding one would force every deployed pipeline to redeploy for no
//! reason.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::PipewrightResult;
use crate::model::BuildConfig;

/// Number of hex characters kept from the digest
///
/// The consumer embeds the fingerprint in a single environment entry; 128
/// bits is far beyond collision concerns at tens of thousands of
/// configurations.
pub const FINGERPRINT_LEN: usize = 32;

/// Configuration fingerprint value object
///
/// A fixed-length lowercase hex string. Recomputed on every compilation;
/// never stored by the compiler itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of a configuration
    pub fn of(config: &BuildConfig) -> PipewrightResult<Self> {
        let canonical = canonical_form(config)?;
        let digest = Sha256::digest(canonical.as_bytes());
        let hex = format!("{:x}", digest);
        Ok(Self(hex[..FINGERPRINT_LEN].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonical serialization input
///
/// Field order is fixed by declaration order; enums and booleans serialize
/// to fixed literal tokens. Equal configurations serialize byte-identically
/// across processes.
#[derive(Serialize)]
struct CanonicalConfig<'a> {
    install: &'a [String],
    build: &'a [String],
    test: &'a [String],
    synth: &'a [String],
    environment: Vec<(&'a str, &'a str)>,
    compute_profile: &'static str,
    privileged: bool,
    image: &'a str,
}

fn canonical_form(config: &BuildConfig) -> PipewrightResult<String> {
    let mut environment: Vec<(&str, &str)> = config
        .environment()
        .iter()
        .map(|v| (v.name.as_str(), v.value.as_str()))
        .collect();
    environment.sort_by(|a, b| a.0.cmp(b.0));

    let canonical = CanonicalConfig {
        install: config.install_commands(),
        build: config.build_commands(),
        test: config.test_commands(),
        synth: config.synth_commands(),
        environment,
        compute_profile: config.compute_profile().as_str(),
        privileged: config.privileged(),
        image: config.image(),
    };

    Ok(serde_json::to_string(&canonical)?)
}
