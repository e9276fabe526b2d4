use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::calendar::SelectedDate;

#[derive(Debug, Parser)]
#[command(name = "dayview")]
#[command(about = "Browse one day of calendar events at a time", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Day to open on, as YYYY-MM-DD (defaults to today)
    #[arg(long, global = true, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the day's events to stdout and exit
    Print,
}

impl Cli {
    pub fn selected_date(&self) -> Option<SelectedDate> {
        self.date.map(SelectedDate::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_starts_the_menu_bar() {
        let cli = Cli::try_parse_from(["dayview"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.selected_date(), None);
    }

    #[test]
    fn print_with_date_and_config() {
        let cli = Cli::try_parse_from([
            "dayview",
            "print",
            "--date",
            "2018-06-02",
            "--config",
            "/tmp/dayview.toml",
        ])
        .unwrap();

        assert_eq!(cli.command, Some(Command::Print));
        assert_eq!(
            cli.selected_date(),
            Some(SelectedDate::new(NaiveDate::from_ymd_opt(2018, 6, 2).unwrap()))
        );
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/dayview.toml")));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(Cli::try_parse_from(["dayview", "--date", "June 2"]).is_err());
    }
}
