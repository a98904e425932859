//! Property tests for phase compilation and document assembly.

use proptest::prelude::*;

use pipewright::{compile, BuildConfig};

fn command() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9 ./_-]{1,24}").unwrap()
}

fn commands() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(command(), 0..=4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The build phase is exactly build ++ test ++ synth, with
    /// every list's internal order preserved and nothing rewritten.
    #[test]
    fn property_build_phase_preserves_concatenation_order(
        build in commands(),
        test in commands(),
        synth in commands(),
    ) {
        let config = BuildConfig::builder("out")
            .build_commands(build.clone())
            .test_commands(test.clone())
            .synth_commands(synth.clone())
            .build()
            .unwrap();

        let compiled = compile(&config).unwrap();

        let mut expected = Vec::new();
        expected.extend(build);
        expected.extend(test);
        expected.extend(synth);

        match compiled.spec.phases.build {
            None => prop_assert!(expected.is_empty()),
            Some(phase) => prop_assert_eq!(phase.commands, expected),
        }
    }

    /// PROPERTY: Without a subdirectory, empty install commands never
    /// produce an install phase.
    #[test]
    fn property_empty_install_is_omitted(
        synth in commands(),
    ) {
        let config = BuildConfig::builder("out")
            .synth_commands(synth)
            .build()
            .unwrap();

        let compiled = compile(&config).unwrap();

        prop_assert!(compiled.spec.phases.install.is_none());
    }

    /// PROPERTY: With a subdirectory, the install phase always exists and
    /// starts with the working-prefix command.
    #[test]
    fn property_subdirectory_prefixes_install(
        install in commands(),
        subdir in "[a-z][a-z0-9]{0,7}",
    ) {
        let config = BuildConfig::builder("out")
            .install_commands(install.clone())
            .subdirectory(subdir.clone())
            .build()
            .unwrap();

        let compiled = compile(&config).unwrap();

        let phase = compiled.spec.phases.install.unwrap();
        prop_assert_eq!(phase.commands[0].clone(), format!("cd {}", subdir));
        prop_assert_eq!(&phase.commands[1..], install.as_slice());
        prop_assert_eq!(
            compiled.spec.artifacts.base_directory,
            format!("{}/out", subdir)
        );
    }
}
