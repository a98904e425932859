//! Drift-detection scenarios.
//!
//! The orchestrating pipeline bakes the fingerprint into the triggering
//! action's environment; a changed fingerprint means the build project must
//! be redeployed before the pipeline can safely run. Mirrors the observed
//! behavior: stable across reruns, distinct across any build-relevant change.

use pipewright::{compile, ComputeProfile, Fingerprint, StandardPreset, PROJECT_CONFIG_HASH_VAR};

fn fingerprint_of(preset: StandardPreset) -> Fingerprint {
    let config = preset.resolve().unwrap();
    compile(&config).unwrap().fingerprint
}

#[test]
fn action_hash_changes_as_the_configuration_changes() {
    let hash1 = fingerprint_of(StandardPreset::npm("testcdk.out"));

    // To make sure the hash is not just random :)
    let hash1prime = fingerprint_of(StandardPreset::npm("testcdk.out"));

    let hash2 = fingerprint_of(StandardPreset::npm("testcdk.out").install_commands(["do install"]));
    let hash3 =
        fingerprint_of(StandardPreset::npm("testcdk.out").compute_profile(ComputeProfile::Large));
    let hash4 = fingerprint_of(StandardPreset::npm("testcdk.out").env("xyz", "SOME-VALUE"));

    assert_eq!(hash1, hash1prime);

    assert_ne!(hash1, hash2);
    assert_ne!(hash1, hash3);
    assert_ne!(hash1, hash4);
    assert_ne!(hash2, hash3);
    assert_ne!(hash2, hash4);
    assert_ne!(hash3, hash4);
}

#[test]
fn action_environment_embeds_the_hash() {
    let config = StandardPreset::npm("testcdk.out").resolve().unwrap();
    let compiled = compile(&config).unwrap();

    let env = compiled.action_environment();
    let json = serde_json::to_string(&env).unwrap();

    assert_eq!(
        json,
        format!(
            "[{{\"name\":\"{}\",\"type\":\"PLAINTEXT\",\"value\":\"{}\"}}]",
            PROJECT_CONFIG_HASH_VAR,
            compiled.fingerprint.as_str()
        )
    );
}

#[test]
fn placement_only_changes_do_not_drift() {
    // Subdirectory and artifact layout shape the document, not the
    // executor's configuration; they must not force a redeploy.
    let base = fingerprint_of(StandardPreset::npm("testcdk.out"));
    let moved = fingerprint_of(
        StandardPreset::npm("elsewhere.out")
            .subdirectory("subdir")
            .additional_artifact("IntegTest", "test"),
    );

    assert_eq!(base, moved);
}

#[test]
fn privileged_execution_drifts() {
    let base = fingerprint_of(StandardPreset::npm("testcdk.out"));
    let privileged = fingerprint_of(StandardPreset::npm("testcdk.out").privileged(true));

    assert_ne!(base, privileged);
}

#[test]
fn image_reference_drifts() {
    let base = fingerprint_of(StandardPreset::npm("testcdk.out"));
    let custom = fingerprint_of(StandardPreset::npm("testcdk.out").image("custom:1.0"));

    assert_ne!(base, custom);
}
