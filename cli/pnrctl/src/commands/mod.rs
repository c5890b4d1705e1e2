//! CLI commands.

mod check;
mod config;
mod format;
mod show;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use personnummer::{FixedClock, Options};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// pnr - Validate and format Swedish personal identity numbers.
#[derive(Debug, Parser)]
#[command(name = "pnr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true)]
    format: Option<String>,

    /// Accept interim numbers (a letter in the first serial position).
    #[arg(
        long,
        global = true,
        env = "PNR_ALLOW_INTERIM",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    allow_interim: Option<bool>,

    /// Reject interim numbers. Same as `--allow-interim=false`.
    #[arg(long, global = true)]
    no_interim: bool,

    /// Accept coordination numbers (day of birth + 60).
    #[arg(
        long,
        global = true,
        env = "PNR_ALLOW_COORDINATION",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    allow_coordination: Option<bool>,

    /// Reject coordination numbers. Same as `--allow-coordination=false`.
    #[arg(long, global = true, env = "PNR_NO_COORDINATION")]
    no_coordination: bool,

    /// Evaluate age and century as of this date (YYYY-MM-DD).
    #[arg(long, global = true, env = "PNR_TODAY")]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate one or more numbers.
    Check(check::CheckCommand),

    /// Show the fields and derived properties of a number.
    Show(show::ShowCommand),

    /// Print a number in canonical form.
    Format(format::FormatCommand),

    /// Show or initialize the config file.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Commands {
    fn rewrites_config(&self) -> bool {
        matches!(self, Commands::Config(cmd) if cmd.is_init())
    }
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = match Config::load() {
            Ok(config) => config,
            // `config init` must be able to replace an unreadable file.
            Err(e) if self.command.rewrites_config() => {
                tracing::warn!(error = %e, "ignoring unreadable config");
                Config::default()
            }
            Err(e) => return Err(e),
        };

        let format = self
            .format
            .as_deref()
            .or(config.format.as_deref())
            .map(OutputFormat::from_name)
            .unwrap_or_default();

        let options = self.resolve_options(&config)?;
        tracing::debug!(
            coordination = options.allow_coordination_number(),
            interim = options.allow_interim_number(),
            today = %options.today(),
            "options resolved"
        );

        let ctx = CommandContext {
            config,
            format,
            options,
        };

        match self.command {
            Commands::Check(cmd) => cmd.run(ctx),
            Commands::Show(cmd) => cmd.run(ctx),
            Commands::Format(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("pnr {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }

    /// Merge flags and environment over the config file.
    fn resolve_options(&self, config: &Config) -> Result<Options, CliError> {
        let coordination = policy(
            self.allow_coordination,
            self.no_coordination,
            config.allow_coordination_numbers,
        );
        let interim = policy(
            self.allow_interim,
            self.no_interim,
            config.allow_interim_numbers,
        );

        let mut options = Options::default()
            .with_coordination_numbers(coordination)
            .with_interim_numbers(interim);
        if let Some(today) = self.today.as_deref() {
            options = options.with_clock(FixedClock::new(parse_today(today)?));
        }
        Ok(options)
    }
}

/// A `--no-*` switch wins over `--allow-*`, which wins over the config file.
fn policy(allow: Option<bool>, deny: bool, configured: bool) -> bool {
    if deny {
        false
    } else {
        allow.unwrap_or(configured)
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub options: Options,
}

fn parse_today(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| CliError::BadDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_today() {
        assert_eq!(
            parse_today("2025-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert!(matches!(
            parse_today("2025-02-30"),
            Err(CliError::BadDate { .. })
        ));
        assert!(parse_today("01/01/2025").is_err());
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "pnr",
            "--allow-interim",
            "--today",
            "2025-01-01",
            "check",
            "19900101-0017",
        ])
        .unwrap();
        assert_eq!(cli.allow_interim, Some(true));
        assert_eq!(cli.allow_coordination, None);
        assert!(!cli.no_coordination);
        assert_eq!(cli.today.as_deref(), Some("2025-01-01"));
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    fn permissive_config() -> Config {
        Config {
            allow_coordination_numbers: false,
            allow_interim_numbers: true,
            format: None,
        }
    }

    fn resolved(args: &[&str], config: &Config) -> Options {
        let argv = ["pnr"]
            .into_iter()
            .chain(args.iter().copied())
            .chain(["check", "000101-T105"]);
        Cli::try_parse_from(argv)
            .unwrap()
            .resolve_options(config)
            .unwrap()
    }

    #[test]
    fn test_config_applies_without_flags() {
        let options = resolved(&[], &permissive_config());
        assert!(!options.allow_coordination_number());
        assert!(options.allow_interim_number());

        let options = resolved(&[], &Config::default());
        assert!(options.allow_coordination_number());
        assert!(!options.allow_interim_number());
    }

    #[test]
    fn test_flags_override_config_in_both_directions() {
        let config = permissive_config();

        let options = resolved(&["--allow-coordination", "--allow-interim=false"], &config);
        assert!(options.allow_coordination_number());
        assert!(!options.allow_interim_number());

        let options = resolved(&["--no-interim"], &config);
        assert!(!options.allow_interim_number());

        let config = Config::default();
        let options = resolved(&["--allow-coordination=false", "--allow-interim"], &config);
        assert!(!options.allow_coordination_number());
        assert!(options.allow_interim_number());

        let options = resolved(&["--no-coordination"], &config);
        assert!(!options.allow_coordination_number());
    }

    #[test]
    fn test_deny_switch_wins_over_allow() {
        assert!(!policy(Some(true), true, true));
        assert!(policy(Some(true), false, false));
        assert!(!policy(Some(false), false, true));
        assert!(policy(None, false, true));
        assert!(!policy(None, false, false));
    }

    #[test]
    fn test_resolve_options_pins_clock() {
        let options = resolved(&["--today", "2025-01-01"], &Config::default());
        assert_eq!(options.today(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let cli = Cli::try_parse_from(["pnr", "--today", "2025-13-01", "version"]).unwrap();
        assert!(matches!(
            cli.resolve_options(&Config::default()),
            Err(CliError::BadDate { .. })
        ));
    }

    #[test]
    fn test_only_config_init_rewrites_config() {
        let cli = Cli::try_parse_from(["pnr", "config", "init"]).unwrap();
        assert!(cli.command.rewrites_config());

        let cli = Cli::try_parse_from(["pnr", "config", "show"]).unwrap();
        assert!(!cli.command.rewrites_config());

        let cli = Cli::try_parse_from(["pnr", "show", "19900101-0017"]).unwrap();
        assert!(!cli.command.rewrites_config());
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
