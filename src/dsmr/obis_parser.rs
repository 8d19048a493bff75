use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::{structs::DataObject, utils, ParseError};

lazy_static! {
    // OBIS reduced ID-code followed by everything up to the last ')' of the line
    static ref OBJECT_REGEX: Regex =
        Regex::new(r"^([0-9]+-[0-9]+:[0-9]+\.[0-9]+\.[0-9]+)\((.*)\)$").expect("valid data object pattern");
}

/// Parses a single telegram line into a [`DataObject`].
///
/// Example formats:
/// `1-0:1.8.1(000123.456*kWh)`, `0-0:96.14.0(0001)`,
/// `0-1:24.2.1(191118114002W)(00417.143*m3)`
pub fn parse_data_object(line: &str) -> Result<DataObject, ParseError> {
    let line = line.trim();

    let captures = OBJECT_REGEX
        .captures(line)
        .ok_or_else(|| ParseError::NotADataObject(line.to_string()))?;

    let obis = &captures[1];
    let payload = &captures[2];

    // The unit is optional, "(0001)" has none
    let (value, unit) = utils::split_value_unit(payload);

    trace!("Parsed OBIS line - Code: {}, Value: {}, Unit: {}", obis, value, unit);

    Ok(DataObject {
        obis: obis.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
    })
}
