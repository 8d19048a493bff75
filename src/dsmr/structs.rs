use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{quantities, telegram::DEFAULT_TIME_ZONE, utils, ParseError};
use crate::obis_utils;

/// One `OBIS(value*unit)` line of a telegram.
///
/// The value is kept exactly as the meter sent it, leading zeros and fixed
/// decimal point included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataObject {
    pub obis: String,
    pub value: String,
    pub unit: String,
}

impl DataObject {
    /// The value parsed as a number, if it is one.
    pub fn numeric_value(&self) -> Option<f64> {
        utils::extract_numeric_value(&self.value)
    }

    pub fn description(&self) -> Option<&'static str> {
        obis_utils::get_obis_description(&self.obis)
    }

    /// Splits a multi group payload like `(191118114002W)(00417.143*m3)` into
    /// its raw groups. The unit stays attached to the last group.
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = self.value.split(")(").map(str::to_string).collect();
        if !self.unit.is_empty() {
            if let Some(last) = groups.last_mut() {
                last.push('*');
                last.push_str(&self.unit);
            }
        }
        groups
    }

    /// Decodes the `(timestamp)(reading*unit)` form used by M-Bus channel
    /// objects, interpreting the timestamp in the default time zone.
    pub fn capture(&self) -> Result<CapturedReading, ParseError> {
        self.capture_in(DEFAULT_TIME_ZONE)
    }

    pub fn capture_in(&self, tz: Tz) -> Result<CapturedReading, ParseError> {
        let groups = self.groups();
        let [timestamp, reading] = groups.as_slice() else {
            return Err(ParseError::NotACapturedReading(self.value.clone()));
        };

        let captured_at = utils::parse_timestamp(timestamp, tz)?;
        let (value, unit) = utils::split_value_unit(reading);

        Ok(CapturedReading {
            captured_at,
            value: value.to_string(),
            unit: unit.to_string(),
        })
    }
}

/// A reading together with the moment the meter captured it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapturedReading {
    pub captured_at: DateTime<Tz>,
    pub value: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceIdentification {
    pub manufacturer: String,
    pub baud_rate_id: char,
    pub identification: String,
    pub full_id: String,
}

/// One parsed P1 telegram. Built by [`super::parse_telegram`] and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Telegram {
    pub(crate) header: String,
    pub(crate) version: String,
    pub(crate) date_time: Option<DateTime<Tz>>,
    pub(crate) data_objects: HashMap<String, DataObject>,
}

impl Telegram {
    /// The raw identification line including the leading `/`, empty if the
    /// telegram had none.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn date_time(&self) -> Option<&DateTime<Tz>> {
        self.date_time.as_ref()
    }

    /// All data objects except version and timestamp, keyed by OBIS code.
    pub fn data_objects(&self) -> &HashMap<String, DataObject> {
        &self.data_objects
    }

    pub fn get(&self, obis: &str) -> Option<&DataObject> {
        self.data_objects.get(obis)
    }

    /// Looks up a named quantity, e.g. `actual_electricity_power_delivered`.
    /// Returns `None` for unknown names as well as for missing objects.
    pub fn quantity(&self, name: &str) -> Option<&str> {
        self.quantity_object(name).map(|o| o.value.as_str())
    }

    pub fn quantity_with_unit(&self, name: &str) -> Option<(&str, &str)> {
        self.quantity_object(name).map(|o| (o.value.as_str(), o.unit.as_str()))
    }

    fn quantity_object(&self, name: &str) -> Option<&DataObject> {
        quantities::quantity_obis(name).and_then(|obis| self.get(obis))
    }

    /// All data objects of one channel (the B group of the OBIS code).
    pub fn channel_objects(&self, channel: u8) -> HashMap<&str, &DataObject> {
        self.data_objects
            .iter()
            .filter(|(obis, _)| obis_utils::obis_channel(obis) == Some(channel))
            .map(|(obis, object)| (obis.as_str(), object))
            .collect()
    }

    pub fn identification(&self) -> Result<DeviceIdentification, ParseError> {
        utils::parse_identification_line(&self.header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn object(obis: &str, value: &str, unit: &str) -> DataObject {
        DataObject {
            obis: obis.to_string(),
            value: value.to_string(),
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(object("1-0:1.7.0", "00.056", "kW").numeric_value(), Some(0.056));
        assert_eq!(object("0-0:96.14.0", "0001", "").numeric_value(), Some(1.0));
        assert_eq!(object("0-0:96.1.1", "", "").numeric_value(), None);
    }

    #[test]
    fn test_description() {
        assert_eq!(object("1-0:1.7.0", "00.056", "kW").description(), Some("Actual electricity power delivered (+P)"));
        assert_eq!(object("9-9:9.9.9", "1", "").description(), None);
    }

    #[test]
    fn test_groups_single() {
        let o = object("1-0:1.8.1", "000123.456", "kWh");
        assert_eq!(o.groups(), vec!["000123.456*kWh".to_string()]);
    }

    #[test]
    fn test_groups_multi() {
        let o = object("0-2:24.2.1", "191118114002W)(00417.143", "m3");
        assert_eq!(o.groups(), vec!["191118114002W".to_string(), "00417.143*m3".to_string()]);
    }

    #[test]
    fn test_capture() {
        let o = object("0-2:24.2.1", "191118114002W)(00417.143", "m3");
        let reading = o.capture().unwrap();
        assert_eq!(reading.value, "00417.143");
        assert_eq!(reading.unit, "m3");
        assert_eq!(reading.captured_at.year(), 2019);
        assert_eq!(reading.captured_at.month(), 11);
        assert_eq!(reading.captured_at.day(), 18);
        assert_eq!(reading.captured_at.hour(), 11);
        assert_eq!(reading.captured_at.minute(), 40);
        assert_eq!(reading.captured_at.second(), 2);
    }

    #[test]
    fn test_capture_single_group_fails() {
        let o = object("1-0:1.8.1", "000123.456", "kWh");
        assert!(o.capture().is_err());
    }

    #[test]
    fn test_default_telegram_is_empty() {
        let t = Telegram::default();
        assert_eq!(t.header(), "");
        assert_eq!(t.version(), "");
        assert!(t.date_time().is_none());
        assert!(t.data_objects().is_empty());
    }
}
