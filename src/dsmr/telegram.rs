use chrono_tz::Tz;
use log::{debug, warn};

use super::{obis_parser, structs::{DataObject, Telegram}, utils, ParseError, OBIS_DATE_TIME, OBIS_VERSION};

/// Civil time zone of Dutch meters, used for the telegram timestamp unless
/// a parser is built with another one.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Europe::Amsterdam;

/// Classified line of a telegram.
#[derive(Debug)]
enum TelegramLine<'a> {
    Header(&'a str),
    Footer,
    Object(DataObject),
}

/// Telegram parser with a configurable time zone for the timestamp.
#[derive(Debug, Clone, Copy)]
pub struct TelegramParser {
    time_zone: Tz,
}

impl Default for TelegramParser {
    fn default() -> Self {
        Self { time_zone: DEFAULT_TIME_ZONE }
    }
}

impl TelegramParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_zone(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Parses a complete telegram.
    ///
    /// Lines that are not valid data objects are skipped, as is a timestamp
    /// that cannot be decoded. A garbled telegram therefore yields a partial
    /// result instead of an error.
    pub fn parse(&self, telegram: &str) -> Result<Telegram, ParseError> {
        let result = telegram
            .split('\n')
            .map(str::trim)
            .filter_map(classify_line)
            .fold(Telegram::default(), |mut t, line| {
                self.apply(&mut t, line);
                t
            });

        debug!("Parsed telegram '{}' with {} data objects", result.header, result.data_objects.len());
        Ok(result)
    }

    fn apply(&self, t: &mut Telegram, line: TelegramLine<'_>) {
        match line {
            TelegramLine::Header(header) => {
                t.header = header.to_string();
            }
            // The checksum is not verified
            TelegramLine::Footer => {
                debug!("End of telegram found");
            }
            TelegramLine::Object(object) => match object.obis.as_str() {
                OBIS_VERSION => {
                    t.version = object.value;
                }
                OBIS_DATE_TIME => match utils::parse_timestamp(&object.value, self.time_zone) {
                    Ok(date_time) => t.date_time = Some(date_time),
                    Err(e) => warn!("Skipping telegram timestamp: {}", e),
                },
                _ => {
                    t.data_objects.insert(object.obis.clone(), object);
                }
            },
        }
    }
}

fn classify_line(line: &str) -> Option<TelegramLine<'_>> {
    if line.is_empty() {
        return None;
    }
    if line.starts_with('!') {
        return Some(TelegramLine::Footer);
    }
    if line.starts_with('/') {
        return Some(TelegramLine::Header(line));
    }

    match obis_parser::parse_data_object(line) {
        Ok(object) => Some(TelegramLine::Object(object)),
        Err(e) => {
            warn!("Skipping telegram line: {}", e);
            None
        }
    }
}

/// Parses a telegram with the default time zone (Europe/Amsterdam).
pub fn parse_telegram(telegram: &str) -> Result<Telegram, ParseError> {
    TelegramParser::default().parse(telegram)
}
