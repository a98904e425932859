#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Definition -> config -> compiled document should never panic,
        // only return validation errors.
        if let Ok(definition) = pipewright::BuildDefinition::parse(content) {
            if let Ok(config) = definition.into_config() {
                let _ = pipewright::compile(&config);
            }
        }
    }
});
