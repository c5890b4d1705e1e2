//! Config commands (show or initialize the config file).

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::{config_path, Config};
use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Show or initialize the config file.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the loaded config and where it lives.
    Show,

    /// Write a config file with default values.
    Init,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    allow_coordination_numbers: bool,
    allow_interim_numbers: bool,
    format: Option<String>,
}

impl ConfigCommand {
    pub fn is_init(&self) -> bool {
        matches!(self.command, ConfigSubcommand::Init)
    }

    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Init => init(ctx),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        path: config_path()?.display().to_string(),
        allow_coordination_numbers: ctx.config.allow_coordination_numbers,
        allow_interim_numbers: ctx.config.allow_interim_numbers,
        format: ctx.config.format.clone(),
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!(
                "allow_coordination_numbers: {}",
                view.allow_coordination_numbers
            );
            println!("allow_interim_numbers: {}", view.allow_interim_numbers);
            println!("format: {}", view.format.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}

fn init(ctx: CommandContext) -> Result<()> {
    let path = Config::default().save()?;

    match ctx.format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true, "path": path })),
        OutputFormat::Table => print_success(&format!("Wrote {}", path.display())),
    }

    Ok(())
}
