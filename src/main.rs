//! Pipewright CLI - build-specification compiler for deployment pipelines
//!
//! Usage: pipewright <COMMAND>
//!
//! Commands:
//!   compile      Compile the build definition to a build-specification document
//!   fingerprint  Print the configuration fingerprint
//!   env          Print the orchestrating action's environment list

use anyhow::Result;

fn main() -> Result<()> {
    pipewright::cli::run()
}
