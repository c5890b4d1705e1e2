//! Error handling and display for the CLI.

use colored::Colorize;
use personnummer::PersonnummerError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{invalid} of {total} inputs are not valid")]
    Invalid { invalid: usize, total: usize },

    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    BadDate { value: String },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("{0}")]
    Parse(#[from] PersonnummerError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Parse(PersonnummerError::InterimNotAllowed) => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass --allow-interim to accept interim numbers.".yellow()
                );
            }
            CliError::Parse(PersonnummerError::CoordinationNotAllowed) => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass --allow-coordination to accept coordination numbers."
                        .yellow()
                );
            }
            CliError::Parse(e) if e.is_length_error() => {
                eprintln!(
                    "\n{}",
                    "Hint: Expected YYMMDD-XXXX, YYYYMMDD-XXXX or the same without separator."
                        .yellow()
                );
            }
            CliError::Invalid { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `pnr show <NUMBER>` for details on a single number.".yellow()
                );
            }
            CliError::Config(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `pnr config init` to rewrite the config with defaults.".yellow()
                );
            }
            _ => {}
        }
    }
}
