use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::calendar::date::DEFAULT_DATE_FORMAT;
use crate::calendar::formatting::{DEFAULT_ALL_DAY_LABEL, DEFAULT_TIME_FORMAT};
use crate::calendar::EventFormatter;
use crate::error::{AppError, AppResult};
use crate::view::ViewOptions;

pub const APP_DIR: &str = "dayview";
pub const CONFIG_FILE: &str = "config.toml";

/// Longest line the menu shows before truncating.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    pub display: DisplayConfig,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub time_format: String,
    pub date_format: String,
    pub all_day_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            all_day_label: DEFAULT_ALL_DAY_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub max_line_length: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl Config {
    /// `~/.config/dayview/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads `path`, or the default location when `None`. A missing file at
    /// the default location yields the defaults; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.menu.max_line_length < 2 {
            return Err(AppError::Config(
                "menu.max_line_length must be at least 2".to_string(),
            ));
        }
        check_format("display.time_format", &self.display.time_format, |format, out| {
            write!(out, "{}", DateTime::<FixedOffset>::default().format(format))
        })?;
        check_format("display.date_format", &self.display.date_format, |format, out| {
            write!(out, "{}", NaiveDate::default().format(format))
        })?;
        Ok(())
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            formatter: EventFormatter::new(
                self.display.time_format.clone(),
                self.display.all_day_label.clone(),
            ),
            date_format: self.display.date_format.clone(),
        }
    }
}

/// Rejects formats chrono cannot render, so rendering never fails later.
fn check_format<F>(key: &str, format: &str, sample: F) -> AppResult<()>
where
    F: FnOnce(&str, &mut String) -> std::fmt::Result,
{
    if format.trim().is_empty() {
        return Err(AppError::Config(format!("{key} is empty")));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::Config(format!("{key} `{format}` is not a valid format")));
    }
    let mut out = String::new();
    sample(format, &mut out).map_err(|_| {
        AppError::Config(format!("{key} `{format}` cannot be rendered for this value"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.time_format, "%-I:%M %p");
        assert_eq!(config.display.date_format, "%B %-d, %Y");
        assert_eq!(config.menu.max_line_length, DEFAULT_MAX_LINE_LENGTH);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
log_filter = "dayview=debug"

[display]
time_format = "%H:%M"
"#,
        )
        .unwrap();

        assert_eq!(config.log_filter.as_deref(), Some("dayview=debug"));
        assert_eq!(config.display.time_format, "%H:%M");
        assert_eq!(config.display.all_day_label, "All Day");
    }

    #[test]
    fn rejects_unusable_values() {
        let err = Config::parse("[menu]\nmax_line_length = 1\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = Config::parse("[display]\ntime_format = \" \"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = Config::parse("[display]\ntime_format = \"%Q\"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        // Clock fields have nothing to show on a bare date.
        let err = Config::parse("[display]\ndate_format = \"%B %-d %H:%M\"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn accepts_formats_that_render() {
        let config = Config::parse(
            "[display]\ntime_format = \"%H:%M %:z\"\ndate_format = \"%A, %d.%m.%Y\"\n",
        )
        .unwrap();
        assert_eq!(config.display.date_format, "%A, %d.%m.%Y");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse("[display\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn loads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nall_day_label = \"Whole day\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.display.all_day_label, "Whole day");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }
}
