//! DSMR P1 telegram parsing.
//!
//! A telegram is parsed in two stages: [`obis_parser::parse_data_object`]
//! turns a single `OBIS(value*unit)` line into a [`DataObject`], and
//! [`telegram::parse_telegram`] walks all lines of a telegram, picks out the
//! header, version and timestamp, and collects everything else by OBIS code.

use thiserror::Error;

pub mod obis_parser;
pub mod quantities;
pub mod structs;
pub mod telegram;
pub mod utils;

pub use obis_parser::parse_data_object;
pub use quantities::{quantity_obis, QUANTITIES};
pub use structs::{CapturedReading, DataObject, DeviceIdentification, Telegram};
pub use telegram::{parse_telegram, TelegramParser, DEFAULT_TIME_ZONE};

/// OBIS code carrying the P1 protocol version.
pub const OBIS_VERSION: &str = "1-3:0.2.8";
/// OBIS code carrying the date-time stamp of the telegram.
pub const OBIS_DATE_TIME: &str = "0-0:1.0.0";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No valid DSMR object found in line '{0}'")]
    NotADataObject(String),
    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("Value '{0}' is not a captured reading")]
    NotACapturedReading(String),
    #[error("Invalid identification line '{0}'")]
    InvalidIdentification(String),
}
