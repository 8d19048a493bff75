use chrono_tz::Tz;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::dsmr::{TelegramParser, DEFAULT_TIME_ZONE};

const CONFIG_PATHS: [&str; 2] = ["config/dsmr2json.yaml", "dsmr2json.yaml"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse config file: {0}")]
    Yaml(#[from] serde_yml::Error),
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    Text,
}

fn time_zone_default() -> Tz { DEFAULT_TIME_ZONE }
fn output_default() -> OutputFormat { OutputFormat::Json }
fn pretty_default() -> bool { true }

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /* Civil time zone of the meter, the timestamp carries no offset */
    #[serde(default="time_zone_default")]
    pub time_zone: Tz,
    #[serde(default="output_default")]
    pub output: OutputFormat,
    #[serde(default="pretty_default")]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_zone: time_zone_default(),
            output: output_default(),
            pretty: pretty_default(),
        }
    }
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(contents)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&contents)?;
        info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Looks for config/dsmr2json.yaml and dsmr2json.yaml in the working
    /// directory, falling back to the defaults when neither exists.
    pub fn discover() -> Result<Self, ConfigError> {
        for path in CONFIG_PATHS {
            if Path::new(path).is_file() {
                return Self::load(path);
            }
        }
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn parser(&self) -> TelegramParser {
        TelegramParser::with_time_zone(self.time_zone)
    }
}
