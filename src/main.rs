use std::process::ExitCode;

use chrono::{Datelike, Local, NaiveDate};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use tracing::debug;

use usholiday::configuration::{Configuration, FEDERAL_PROFILE};
use usholiday::holiday::holidays::Holidays;
use usholiday::holiday::holidayprofile::HolidayProfile;
use usholiday::logging::init_logging;

/// U.S. federal holidays with weekend observance.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the holidays of a year in date order.
    List {
        /// Calendar year, defaults to the current year.
        #[arg(short, long)]
        year: Option<i32>,

        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Tell whether a date is a holiday.
    Check {
        /// Date as YYYY-MM-DD.
        date: NaiveDate,

        #[command(flatten)]
        profile: ProfileArgs,
    },
}

#[derive(Debug, Args)]
struct ProfileArgs {
    /// Holiday profile: federal, frb, corp or one defined in --config.
    #[arg(short, long, default_value = FEDERAL_PROFILE)]
    profile: String,

    /// JSON file with additional holiday profiles.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<String>,
}

impl ProfileArgs {
    fn resolve(&self) -> Result<HolidayProfile, Box<dyn std::error::Error>> {
        let configuration = Configuration::new();
        if let Some(config_path) = &self.config {
            configuration.from_reader(config_path)?;
        }
        Ok(configuration.holiday_profile(&self.profile)?)
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::List { year, profile } => {
            let year = year.unwrap_or_else(|| Local::now().year());
            let holidays = profile.resolve()?.holidays(year);
            for line in holidays.list_holidays()? {
                println!("{line}");
            }
        }
        Command::Check { date, profile } => {
            let holidays = profile.resolve()?.holidays(date.year());
            match holidays.which_holiday(date)? {
                Some(holiday) => println!("{holiday}"),
                None => println!("{date} is not a holiday"),
            }
        }
    }
    Ok(())
}

/// The single stderr line reported for a failed command.
fn error_line(err: &dyn std::error::Error) -> String {
    let message = err.to_string();
    format!("error: {}", message.lines().next().unwrap_or_default())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("logging disabled: {err}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(?err, "command failed");
            eprintln!("{}", error_line(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use usholiday::manager::managererror::ManagerError;

    use super::*;

    #[test]
    fn unknown_profile_is_one_line() {
        let err = Configuration::new().holiday_profile("nasa").unwrap_err();
        assert_eq!(error_line(&err), "error: key 'nasa' not found");
    }

    #[test]
    fn unreadable_config_names_the_file() {
        let profile = ProfileArgs {
            profile: FEDERAL_PROFILE.to_owned(),
            config: Some("/nope/usholiday.json".to_owned()),
        };
        let err = profile.resolve().unwrap_err();
        let line = error_line(err.as_ref());
        assert!(line.starts_with("error: /nope/usholiday.json: "));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn multi_line_messages_keep_the_first_line() {
        let err = ManagerError::map_elem_not_found("a\nb");
        assert_eq!(error_line(&err), "error: key 'a");
    }

    #[test]
    fn parses_check_command() {
        let cli = Cli::try_parse_from(["usholiday", "check", "2022-12-26", "--profile", "frb"]).unwrap();
        match cli.command {
            Command::Check { date, profile } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2022, 12, 26).unwrap());
                assert_eq!(profile.profile, "frb");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unparsable_date() {
        assert!(Cli::try_parse_from(["usholiday", "check", "12/26/2022"]).is_err());
    }
}
