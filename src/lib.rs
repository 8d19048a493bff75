//! DSMR P1 telegram parser
//!
//! This library turns the ASCII telegrams pushed by Dutch smart meters on
//! their P1 port into structured data that can be queried by OBIS code or by
//! the name of the metered quantity.

pub mod config;
pub mod dsmr;
pub mod obis_utils;
pub mod output;

// Re-export common types for easier access
pub use config::{Config, ConfigError, OutputFormat};
pub use dsmr::{parse_data_object, parse_telegram, DataObject, ParseError, Telegram, TelegramParser};
pub use output::{render, OutputError};
