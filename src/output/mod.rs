use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use thiserror::Error;

use crate::config::OutputFormat;
use crate::dsmr::{DataObject, Telegram};

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("Formatting failed: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Telegram view with the data objects sorted by OBIS code, so the output is
/// stable between runs.
#[derive(Serialize)]
struct TelegramReport<'a> {
    header: &'a str,
    version: &'a str,
    date_time: Option<&'a DateTime<Tz>>,
    data_objects: BTreeMap<&'a str, &'a DataObject>,
}

impl<'a> From<&'a Telegram> for TelegramReport<'a> {
    fn from(t: &'a Telegram) -> Self {
        TelegramReport {
            header: t.header(),
            version: t.version(),
            date_time: t.date_time(),
            data_objects: t.data_objects().iter().map(|(k, v)| (k.as_str(), v)).collect(),
        }
    }
}

pub fn render(telegram: &Telegram, format: OutputFormat, pretty: bool) -> Result<String, OutputError> {
    let report = TelegramReport::from(telegram);
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Json => Ok(serde_json::to_string(&report)?),
        OutputFormat::Yaml => Ok(serde_yml::to_string(&report)?),
        OutputFormat::Text => render_text(&report),
    }
}

fn render_text(report: &TelegramReport<'_>) -> Result<String, OutputError> {
    let mut out = String::new();
    writeln!(out, "Header:    {}", report.header)?;
    writeln!(out, "Version:   {}", report.version)?;
    match report.date_time {
        Some(dt) => writeln!(out, "Date/time: {}", dt.to_rfc3339())?,
        None => writeln!(out, "Date/time: -")?,
    }

    for (obis, object) in &report.data_objects {
        let description = object.description().unwrap_or("");
        if object.unit.is_empty() {
            writeln!(out, "{:<12} {:<24} {}", obis, object.value, description)?;
        } else {
            let value = format!("{} {}", object.value, object.unit);
            writeln!(out, "{:<12} {:<24} {}", obis, value, description)?;
        }
    }
    Ok(out)
}
