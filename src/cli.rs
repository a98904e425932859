//! Pipewright CLI
//!
//! Compiles a TOML build definition into the build-specification document
//! and its configuration fingerprint.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::compiler;
use crate::definition::BuildDefinition;

/// Pipewright - build-specification compiler for deployment pipelines
#[derive(Parser, Debug)]
#[command(name = "pipewright")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile the build definition to a build-specification document
    Compile {
        /// Path to the build definition
        #[arg(short, long, default_value = "buildspec.toml")]
        definition: PathBuf,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print the configuration fingerprint
    Fingerprint {
        /// Path to the build definition
        #[arg(short, long, default_value = "buildspec.toml")]
        definition: PathBuf,
    },

    /// Print the orchestrating action's environment list (JSON)
    Env {
        /// Path to the build definition
        #[arg(short, long, default_value = "buildspec.toml")]
        definition: PathBuf,
    },
}

/// Parse arguments and run the selected command
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            definition,
            compact,
        } => cmd_compile(&definition, compact),
        Commands::Fingerprint { definition } => cmd_fingerprint(&definition),
        Commands::Env { definition } => cmd_env(&definition),
    }
}

fn compile_definition(path: &Path) -> Result<compiler::CompiledBuild> {
    let config = BuildDefinition::load(path)
        .with_context(|| format!("failed to load build definition {}", path.display()))?
        .into_config()
        .context("invalid build configuration")?;
    compiler::compile(&config).context("compilation failed")
}

fn cmd_compile(path: &Path, compact: bool) -> Result<()> {
    let compiled = compile_definition(path)?;
    let json = if compact {
        compiled.spec.to_json()?
    } else {
        compiled.spec.to_json_pretty()?
    };
    println!("{}", json);
    Ok(())
}

fn cmd_fingerprint(path: &Path) -> Result<()> {
    let compiled = compile_definition(path)?;
    println!("{}", compiled.fingerprint);
    Ok(())
}

fn cmd_env(path: &Path) -> Result<()> {
    let compiled = compile_definition(path)?;
    println!("{}", serde_json::to_string(&compiled.action_environment())?);
    Ok(())
}
