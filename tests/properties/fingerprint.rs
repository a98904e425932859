//! Property tests for the configuration fingerprint.

use proptest::prelude::*;

use pipewright::{compile, BuildConfig, Fingerprint};

fn command() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9 ./_-]{1,24}").unwrap()
}

fn commands() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(command(), 0..=4)
}

/// Unique-by-name environment variables (map keys guarantee uniqueness)
fn env_vars() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::btree_map("[A-Z][A-Z0-9_]{0,7}", "[a-zA-Z0-9]{0,12}", 0..=4)
        .prop_map(|m| m.into_iter().collect())
}

fn config_with(
    install: &[String],
    build: &[String],
    env: &[(String, String)],
) -> BuildConfig {
    let mut builder = BuildConfig::builder("out")
        .install_commands(install.to_vec())
        .build_commands(build.to_vec());
    for (name, value) in env {
        builder = builder.env(name.clone(), value.clone());
    }
    builder.build().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Compilation is deterministic - equal configurations always
    /// yield identical documents and fingerprints.
    #[test]
    fn property_compile_is_deterministic(
        install in commands(),
        build in commands(),
        env in env_vars(),
    ) {
        let config = config_with(&install, &build, &env);

        let a = compile(&config).unwrap();
        let b = compile(&config).unwrap();

        prop_assert_eq!(&a.fingerprint, &b.fingerprint);
        prop_assert_eq!(a.spec.to_json().unwrap(), b.spec.to_json().unwrap());
    }

    /// PROPERTY: Environment insertion order never leaks into the fingerprint.
    #[test]
    fn property_env_order_insensitive(
        install in commands(),
        env in env_vars(),
    ) {
        let forward = config_with(&install, &[], &env);
        let mut reversed_env = env.clone();
        reversed_env.reverse();
        let reversed = config_with(&install, &[], &reversed_env);

        prop_assert_eq!(
            Fingerprint::of(&forward).unwrap(),
            Fingerprint::of(&reversed).unwrap()
        );
    }

    /// PROPERTY: Adding an install command changes the fingerprint.
    #[test]
    fn property_install_commands_are_sensitive(
        install in commands(),
        extra in command(),
    ) {
        let base = config_with(&install, &[], &[]);

        let mut grown = install.clone();
        grown.push(extra);
        let changed = config_with(&grown, &[], &[]);

        prop_assert_ne!(
            Fingerprint::of(&base).unwrap(),
            Fingerprint::of(&changed).unwrap()
        );
    }

    /// PROPERTY: Execution-placement fields outside the declared hash set
    /// never change the fingerprint.
    #[test]
    fn property_placement_fields_are_insensitive(
        install in commands(),
        subdir in "[a-z]{1,8}",
        outdir in "[a-z]{1,8}",
        artifact_dir in "[a-z]{1,8}",
    ) {
        let base = config_with(&install, &[], &[]);

        let moved = BuildConfig::builder(outdir)
            .install_commands(install.clone())
            .subdirectory(subdir)
            .additional_artifact("Extra", artifact_dir)
            .build()
            .unwrap();

        prop_assert_eq!(
            Fingerprint::of(&base).unwrap(),
            Fingerprint::of(&moved).unwrap()
        );
    }

    /// PROPERTY: The fingerprint is always exactly 32 lowercase hex chars.
    #[test]
    fn property_fingerprint_shape_is_fixed(
        install in commands(),
        build in commands(),
        env in env_vars(),
    ) {
        let config = config_with(&install, &build, &env);
        let fp = Fingerprint::of(&config).unwrap();

        prop_assert_eq!(fp.as_str().len(), 32);
        prop_assert!(fp
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
