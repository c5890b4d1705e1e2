//! Show command (fields and derived properties of one number).

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use personnummer::Personnummer;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Show the fields and derived properties of a number.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Number to inspect.
    input: String,
}

#[derive(Debug, Serialize)]
struct PersonnummerView {
    century: String,
    date: NaiveDate,
    age: i32,
    gender: &'static str,
    coordination: bool,
    interim: bool,
    separator: String,
    short: String,
    short_plain: String,
    long: String,
    long_separated: String,
}

impl From<&Personnummer> for PersonnummerView {
    fn from(pnr: &Personnummer) -> Self {
        Self {
            century: pnr.century().to_string(),
            date: pnr.date(),
            age: pnr.age(),
            gender: if pnr.is_male() { "male" } else { "female" },
            coordination: pnr.is_coordination_number(),
            interim: pnr.is_interim_number(),
            separator: pnr.separator().to_string(),
            short: pnr.format(false, false),
            short_plain: pnr.format(false, true),
            long: pnr.format(true, true),
            long_separated: pnr.format(true, false),
        }
    }
}

impl ShowCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let pnr = Personnummer::parse(self.input.as_str(), &ctx.options).map_err(CliError::from)?;
        let view = PersonnummerView::from(&pnr);

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => {
                println!("century: {}", view.century);
                println!("date: {}", view.date);
                println!("age: {}", view.age);
                println!("gender: {}", view.gender);
                println!("coordination: {}", view.coordination);
                println!("interim: {}", view.interim);
                println!("separator: {}", view.separator);
                println!("short: {}", view.short);
                println!("short_plain: {}", view.short_plain);
                println!("long: {}", view.long);
                println!("long_separated: {}", view.long_separated);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use personnummer::{FixedClock, Options};

    #[test]
    fn test_view_of_coordination_number() {
        let opts = Options::default().with_clock(FixedClock::from_ymd(2025, 1, 1).unwrap());
        let pnr = Personnummer::parse("701063-2391", &opts).unwrap();
        let view = PersonnummerView::from(&pnr);

        assert_eq!(view.century, "19");
        assert_eq!(view.date, NaiveDate::from_ymd_opt(1970, 10, 3).unwrap());
        assert_eq!(view.age, 54);
        assert_eq!(view.gender, "male");
        assert!(view.coordination);
        assert!(!view.interim);
        assert_eq!(view.short, "701063-2391");
        assert_eq!(view.long, "197010632391");
    }

    #[test]
    fn test_view_json_shape() {
        let opts = Options::default().with_clock(FixedClock::from_ymd(2025, 1, 1).unwrap());
        let pnr = Personnummer::parse("19130401+2931", &opts).unwrap();
        let json = serde_json::to_value(PersonnummerView::from(&pnr)).unwrap();

        assert_eq!(json["date"], "1913-04-01");
        assert_eq!(json["separator"], "+");
        assert_eq!(json["age"], 111);
    }
}
