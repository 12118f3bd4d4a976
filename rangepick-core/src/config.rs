//! User configuration at ~/.config/rangepick/config.toml

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RangePickError, RangePickResult};
use crate::preset::PresetArithmetic;
use crate::selector::{SelectorDefaults, SelectorOptions, TriggerVariant};

fn default_close_on_select() -> bool {
    true
}

fn default_number_of_months() -> u8 {
    SelectorDefaults::NUMBER_OF_MONTHS
}

fn default_year_range() -> [i32; 2] {
    [
        *SelectorDefaults::YEAR_RANGE.start(),
        *SelectorDefaults::YEAR_RANGE.end(),
    ]
}

/// Selector defaults read from the config file. Every key is optional.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RangePickConfig {
    #[serde(default = "default_close_on_select")]
    pub close_on_select: bool,

    #[serde(default)]
    pub month_year_dropdowns: bool,

    #[serde(default = "default_number_of_months")]
    pub number_of_months: u8,

    #[serde(default)]
    pub variant: TriggerVariant,

    #[serde(default)]
    pub calendar_arithmetic: PresetArithmetic,

    #[serde(default = "default_year_range")]
    pub year_range: [i32; 2],
}

impl Default for RangePickConfig {
    fn default() -> Self {
        Self {
            close_on_select: default_close_on_select(),
            month_year_dropdowns: false,
            number_of_months: default_number_of_months(),
            variant: TriggerVariant::default(),
            calendar_arithmetic: PresetArithmetic::default(),
            year_range: default_year_range(),
        }
    }
}

impl RangePickConfig {
    pub fn config_path() -> RangePickResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RangePickError::Config("Could not determine config directory".into()))?
            .join("rangepick");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented-out default file first if none
    /// exists yet.
    pub fn load() -> RangePickResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> RangePickResult<Self> {
        debug!(path = %path.display(), "loading config");

        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| RangePickError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RangePickError::Config(e.to_string()))
    }

    /// Save the current config to ~/.config/rangepick/config.toml
    pub fn save(&self) -> RangePickResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> RangePickResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RangePickError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| RangePickError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RangePickResult<()> {
        let defaults = Self::default();
        let contents = format!(
            "\
# rangepick configuration

# Close the panel after clicking a preset:
# close_on_select = {}

# Show month/year dropdowns. Picking from them selects the whole month:
# month_year_dropdowns = {}

# Months shown side by side:
# number_of_months = {}

# Trigger style (default, outline, ghost, link):
# variant = \"outline\"

# How \"Last Month\"/\"Last Year\" step back (day-count, calendar):
# calendar_arithmetic = \"day-count\"

# Years offered by the year dropdown:
# year_range = [{}, {}]
",
            defaults.close_on_select,
            defaults.month_year_dropdowns,
            defaults.number_of_months,
            defaults.year_range[0],
            defaults.year_range[1],
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RangePickError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RangePickError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.year_range[0]..=self.year_range[1]
    }

    pub fn selector_options(&self) -> SelectorOptions {
        SelectorOptions {
            close_on_select: self.close_on_select,
            variant: self.variant,
            month_year_dropdowns: self.month_year_dropdowns,
            number_of_months: self.number_of_months,
            arithmetic: self.calendar_arithmetic,
            year_range: self.year_range(),
        }
    }
}
