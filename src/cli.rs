//! Minimal CLI: settings accessor | custom-type tree regeneration
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::batch;
use crate::merge::TypeFileGenerator;
use crate::registry::SourceRegistry;
use crate::settings::{self, SettingsTypeStrategy};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// regenerate typed declarations for sample-value modules and settings files
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// regenerate the settings accessor file from a settings document
    Settings(SettingsOut),
    /// regenerate every *_custom_type.py file under a directory tree
    Types(TypesOut),
}

#[derive(Args, Debug, Clone)]
struct SettingsOut {
    /// JSON document holding the process-wide settings key/value pairs
    #[arg(long, short)]
    input: PathBuf,

    /// output .py file
    #[arg(long, short, default_value = settings::SETTINGS_FILE_PATH)]
    out: PathBuf,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(Args, Debug, Clone)]
struct TypesOut {
    /// subtree to start from, relative to the current directory (whole tree if omitted)
    #[arg(long)]
    path: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self, registry: &SourceRegistry) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Settings(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let source = std::fs::read_to_string(&target.input).with_context(|| {
                    format!("failed to read settings document {}", target.input.display())
                })?;
                let strategy = SettingsTypeStrategy::from_json_str(&source)?;

                if let Some(parent) = target.out.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                TypeFileGenerator::new(&target.out, vec![Box::new(strategy)])
                    .generate()
                    .with_context(|| format!("failed to regenerate {}", target.out.display()))?;
                Ok(())
            }
            Command::Types(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let base = std::env::current_dir()?;
                let processed = batch::regenerate_tree(&base, target.path.as_deref(), registry)?;
                tracing::info!(files = processed.len(), "regeneration pass finished");
                Ok(())
            }
        }
    }
}
