//! Format command.

use anyhow::Result;
use clap::Args;
use personnummer::Personnummer;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Print a number in canonical form.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// Number to format.
    input: String,

    /// Include the century (YYYYMMDD instead of YYMMDD).
    #[arg(long)]
    century: bool,

    /// Leave out the `-`/`+` separator.
    #[arg(long)]
    no_separator: bool,
}

impl FormatCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let pnr = Personnummer::parse(self.input.as_str(), &ctx.options).map_err(CliError::from)?;
        let formatted = pnr.format(self.century, self.no_separator);

        match ctx.format {
            OutputFormat::Json => print_single(&serde_json::json!({
                "input": self.input,
                "formatted": formatted,
            })),
            OutputFormat::Table => println!("{}", formatted),
        }

        Ok(())
    }
}
