use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref DSMR_OBIS_DESCRIPTIONS: HashMap<&'static str, &'static str> = get_dsmr_obis_descriptions();
}

pub fn get_obis_description(obis_code: &str) -> Option<&'static str> {
    DSMR_OBIS_DESCRIPTIONS.get(obis_code).copied()
}

pub fn get_dsmr_obis_descriptions() -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();

    // Telegram meta data
    map.insert("1-3:0.2.8", "Version information for P1 output");
    map.insert("0-0:1.0.0", "Date-time stamp of the P1 message");
    map.insert("0-0:96.1.1", "Equipment identifier");
    map.insert("0-0:96.14.0", "Tariff indicator electricity");
    map.insert("0-0:96.13.0", "Text message");

    // Energy values
    map.insert("1-0:1.8.1", "Electricity delivered to client (tariff 1)");
    map.insert("1-0:1.8.2", "Electricity delivered to client (tariff 2)");
    map.insert("1-0:2.8.1", "Electricity delivered by client (tariff 1)");
    map.insert("1-0:2.8.2", "Electricity delivered by client (tariff 2)");

    // Power values
    map.insert("1-0:1.7.0", "Actual electricity power delivered (+P)");
    map.insert("1-0:2.7.0", "Actual electricity power received (-P)");
    map.insert("1-0:21.7.0", "Instantaneous active power (+P) (L1)");
    map.insert("1-0:41.7.0", "Instantaneous active power (+P) (L2)");
    map.insert("1-0:61.7.0", "Instantaneous active power (+P) (L3)");
    map.insert("1-0:22.7.0", "Instantaneous active power (-P) (L1)");
    map.insert("1-0:42.7.0", "Instantaneous active power (-P) (L2)");
    map.insert("1-0:62.7.0", "Instantaneous active power (-P) (L3)");

    // Power quality
    map.insert("0-0:96.7.21", "Number of power failures in any phase");
    map.insert("0-0:96.7.9", "Number of long power failures in any phase");
    map.insert("1-0:99.97.0", "Power failure event log");
    map.insert("1-0:32.32.0", "Number of voltage sags (L1)");
    map.insert("1-0:52.32.0", "Number of voltage sags (L2)");
    map.insert("1-0:72.32.0", "Number of voltage sags (L3)");
    map.insert("1-0:32.36.0", "Number of voltage swells (L1)");
    map.insert("1-0:52.36.0", "Number of voltage swells (L2)");
    map.insert("1-0:72.36.0", "Number of voltage swells (L3)");

    // Voltage values
    map.insert("1-0:32.7.0", "Instantaneous voltage (L1)");
    map.insert("1-0:52.7.0", "Instantaneous voltage (L2)");
    map.insert("1-0:72.7.0", "Instantaneous voltage (L3)");

    // Current values
    map.insert("1-0:31.7.0", "Instantaneous current (L1)");
    map.insert("1-0:51.7.0", "Instantaneous current (L2)");
    map.insert("1-0:71.7.0", "Instantaneous current (L3)");

    // M-Bus channel 1 (gas meter in most installations)
    map.insert("0-1:24.1.0", "Device type (channel 1)");
    map.insert("0-1:96.1.0", "Equipment identifier (channel 1)");
    map.insert("0-1:24.2.1", "Last 5-minute meter reading (channel 1)");

    map
}

pub fn validate_obis_code(code: &str) -> bool {
    // Reduced ID-code format as used in P1 telegrams: A-B:C.D.E
    // Only the structure is checked, not whether the groups are assigned.
    let Some((ab_part, cde_part)) = code.split_once(':') else {
        return false;
    };

    let ab_parts: Vec<&str> = ab_part.split('-').collect();
    if ab_parts.len() != 2 {
        return false;
    }

    let cde_parts: Vec<&str> = cde_part.split('.').collect();
    if cde_parts.len() != 3 {
        return false;
    }

    ab_parts
        .iter()
        .chain(cde_parts.iter())
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Returns the B group of an OBIS code, i.e. the channel the object belongs to.
/// `0-1:24.2.1` is M-Bus channel 1, electricity objects live on channel 0.
pub fn obis_channel(code: &str) -> Option<u8> {
    if !validate_obis_code(code) {
        return None;
    }
    let (ab_part, _) = code.split_once(':')?;
    let (_, channel) = ab_part.split_once('-')?;
    channel.parse::<u8>().ok()
}
