use chrono::{DateTime, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use log::debug;

use super::{structs::DeviceIdentification, ParseError};

/// Date-time layout of a telegram timestamp without the trailing DST flag:
/// YYMMDDhhmmss.
pub const DATE_TIME_FORMAT: &str = "%y%m%d%H%M%S";

/// Parses a `YYMMDDhhmmssX` timestamp in the given civil time zone.
///
/// `X` is the DST flag (`S` summer, `W` winter). It is dropped without
/// looking at it. Local times around a clock change resolve with the offset
/// in effect at `local - offset(local as UTC)`: a repeated autumn hour maps to
/// standard time, a skipped spring hour is moved forward.
pub fn parse_timestamp(raw: &str, tz: Tz) -> Result<DateTime<Tz>, ParseError> {
    if raw.chars().count() <= 2 {
        return Err(ParseError::InvalidTimestamp(raw.to_string()));
    }

    let without_flag = match raw.char_indices().last() {
        Some((idx, _)) => &raw[..idx],
        None => return Err(ParseError::InvalidTimestamp(raw.to_string())),
    };

    // chrono accepts single digit fields, the telegram always has two
    if without_flag.len() != 12 || !without_flag.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidTimestamp(raw.to_string()));
    }

    let naive = NaiveDateTime::parse_from_str(without_flag, DATE_TIME_FORMAT)
        .map_err(|_| ParseError::InvalidTimestamp(raw.to_string()))?;

    Ok(resolve_local(&naive, tz))
}

fn resolve_local(local: &NaiveDateTime, tz: Tz) -> DateTime<Tz> {
    let guess = offset_at(local, tz);
    let offset = offset_at(&(*local - guess), tz);
    tz.from_utc_datetime(&(*local - offset))
}

fn offset_at(utc: &NaiveDateTime, tz: Tz) -> TimeDelta {
    let seconds = tz.offset_from_utc_datetime(utc).fix().local_minus_utc();
    TimeDelta::seconds(i64::from(seconds))
}

/// Splits a payload into value and unit. The value is the first run of
/// non-`*` characters, the unit everything after the `*` that ends it.
/// Without such a run the whole payload is the value.
pub fn split_value_unit(payload: &str) -> (&str, &str) {
    let Some(start) = payload.find(|c| c != '*') else {
        return (payload, "");
    };
    let rest = &payload[start..];
    rest.split_once('*').unwrap_or((rest, ""))
}

pub fn parse_identification_line(line: &str) -> Result<DeviceIdentification, ParseError> {
    // Example formats:
    // /ISK5\2M550T-1012
    // /KFM5KAIFA-METER
    // /XMX5LGBBFG1012650850

    let Some(content) = line.strip_prefix('/') else {
        return Err(ParseError::InvalidIdentification(line.to_string()));
    };

    let mut chars = content.chars();
    let manufacturer: String = chars.by_ref().take(3).collect();
    let baud_rate_id = chars.next();

    let (manufacturer, baud_rate_id) = match baud_rate_id {
        Some(id) if manufacturer.chars().count() == 3 => (manufacturer, id),
        _ => return Err(ParseError::InvalidIdentification(line.to_string())),
    };

    // An optional "\W" marker announces enhanced capabilities, it is not part
    // of the identification itself.
    let rest = chars.as_str();
    let identification = match rest.strip_prefix('\\') {
        Some(marked) => {
            let mut marked = marked.chars();
            marked.next();
            marked.as_str().to_string()
        }
        None => rest.to_string(),
    };

    debug!("Parsed identification - Manufacturer: {}, ID: {}, Baud rate id: {}",
           manufacturer, identification, baud_rate_id);

    Ok(DeviceIdentification {
        manufacturer,
        baud_rate_id,
        identification,
        full_id: content.to_string(),
    })
}

pub fn extract_numeric_value(value_str: &str) -> Option<f64> {
    // Extract numeric value from strings like "000123.456" or "00.056"
    let cleaned = value_str
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-' || *c == '+')
        .collect::<String>();

    cleaned.parse::<f64>().ok()
}
