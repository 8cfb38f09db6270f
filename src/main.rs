use chrono::{Datelike, Utc};
use clap::Parser;

use japaneseholidays::{get_holidays_of_month_number, get_holidays_of_year, Holiday, JST};

/// Prints Japanese national holidays, one `YYYY-MM-DD:<name>` per line.
#[derive(Debug, Parser)]
struct Cli {
    /// Print the holidays as a JSON array
    #[arg(long)]
    json: bool,
    /// Year to list, defaults to the current year in JST
    year: Option<i32>,
    /// Month (1-12) to restrict the listing to
    month: Option<u32>,
}

impl Cli {
    fn holidays(&self) -> anyhow::Result<Vec<Holiday>> {
        let year = self
            .year
            .unwrap_or_else(|| Utc::now().with_timezone(&JST).year());
        let holidays = match self.month {
            Some(month) => get_holidays_of_month_number(year, month)?,
            None => get_holidays_of_year(year)?,
        };
        Ok(holidays)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("{:?}", cli);

    let holidays = cli.holidays()?;
    log::info!("{} holiday(s)", holidays.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
    } else {
        for holiday in holidays.iter() {
            println!("{}", holiday);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use japaneseholidays::HolidayError;

    #[test]
    fn test_parse_year_and_month() {
        let cli = Cli::try_parse_from(["japaneseholidays", "--json", "2013", "11"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.year, Some(2013));
        assert_eq!(cli.month, Some(11));

        let rendered: Vec<String> = cli.holidays().unwrap().iter().map(|h| h.to_string()).collect();
        assert_eq!(rendered, ["2013-11-03:文化の日", "2013-11-04:振替休日", "2013-11-23:勤労感謝の日"]);
    }

    #[test]
    fn test_parse_year_only() {
        let cli = Cli::try_parse_from(["japaneseholidays", "2013"]).unwrap();
        assert!(!cli.json);
        assert_eq!(cli.month, None);
        assert_eq!(cli.holidays().unwrap().len(), 17);
    }

    #[rstest]
    #[case(&["japaneseholidays", "2013", "-1"])]
    #[case(&["japaneseholidays", "2013", "eleven"])]
    #[case(&["japaneseholidays", "2013", "11", "3"])]
    fn test_parse_err(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_help() {
        let err = Cli::try_parse_from(["japaneseholidays", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_invalid_month() {
        let cli = Cli::try_parse_from(["japaneseholidays", "2013", "13"]).unwrap();
        let err = cli.holidays().unwrap_err();
        assert_eq!(err.downcast_ref::<HolidayError>(), Some(&HolidayError::InvalidMonth(13)));
    }
}
