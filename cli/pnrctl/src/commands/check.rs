//! Check command (validate a batch of numbers).

use anyhow::Result;
use clap::Args;
use personnummer::{Options, Personnummer};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Validate one or more numbers.
///
/// Exits non-zero if any input is invalid.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Numbers to validate.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct CheckRow {
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    reason: String,
}

fn check_row(input: &str, options: &Options) -> CheckRow {
    match Personnummer::parse(input, options) {
        Ok(_) => CheckRow {
            input: input.to_string(),
            valid: true,
            reason: String::new(),
        },
        Err(e) => CheckRow {
            input: input.to_string(),
            valid: false,
            reason: e.to_string(),
        },
    }
}

impl CheckCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows: Vec<CheckRow> = self
            .inputs
            .iter()
            .map(|input| check_row(input, &ctx.options))
            .collect();

        print_output(&rows, ctx.format);

        let invalid = rows.iter().filter(|r| !r.valid).count();
        if invalid > 0 {
            return Err(CliError::Invalid {
                invalid,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}
