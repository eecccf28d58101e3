//! Command line options.
//! `scatterfit [FILE] [--headless] [--format text|json] [--log-dir DIR]`

use std::{ffi::OsString, path::PathBuf};

use clap::{value_parser, Arg, ArgAction, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, PartialEq)]
pub struct Options {
    /// CSV file to open at start up.
    pub file: Option<PathBuf>,
    /// Print the fit instead of opening a window. Needs `file`.
    pub headless: bool,
    pub format: OutputFormat,
    pub log_dir: Option<PathBuf>,
}

fn make_options_parser() -> Command {
    Command::new("scatterfit")
        .about("Least squares line through two column CSV data")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("CSV file with an `x,y` label header and one `x,y` pair per line")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("headless")
                .long("headless")
                .help("Print the regression instead of plotting it")
                .action(ArgAction::SetTrue)
                .requires("file"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format in headless mode")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("log-dir")
                .long("log-dir")
                .value_name("DIR")
                .help("Directory to write a log file to")
                .value_parser(value_parser!(PathBuf)),
        )
}

impl Options {
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
        Ok(Self {
            file: matches.get_one::<PathBuf>("file").cloned(),
            headless: matches.get_flag("headless"),
            format,
            log_dir: matches.get_one::<PathBuf>("log-dir").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let options = Options::parse_from(["scatterfit"]).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn headless_json() {
        let options =
            Options::parse_from(["scatterfit", "data.csv", "--headless", "-f", "json"]).unwrap();
        assert_eq!(options.file, Some(PathBuf::from("data.csv")));
        assert!(options.headless);
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.log_dir, None);
    }

    #[test]
    fn headless_needs_a_file() {
        assert!(Options::parse_from(["scatterfit", "--headless"]).is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Options::parse_from(["scatterfit", "a.csv", "--format", "xml"]).is_err());
    }

    #[test]
    fn log_dir() {
        let options = Options::parse_from(["scatterfit", "--log-dir", "/tmp/logs"]).unwrap();
        assert_eq!(options.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert_eq!(options.file, None);
    }
}
