//! Named electricity quantities of a DSMR 5 telegram.
//!
//! Only channel 0 (the electricity meter itself) has names; objects of the
//! M-Bus channels are reachable through [`super::Telegram::channel_objects`].

use lazy_static::lazy_static;
use std::collections::HashMap;

pub const QUANTITIES: &[(&str, &str)] = &[
    ("equipment_identifier", "0-0:96.1.1"),
    ("meter_reading_electricity_delivered_to_client_tariff_1", "1-0:1.8.1"),
    ("meter_reading_electricity_delivered_to_client_tariff_2", "1-0:1.8.2"),
    ("meter_reading_electricity_delivered_by_client_tariff_1", "1-0:2.8.1"),
    ("meter_reading_electricity_delivered_by_client_tariff_2", "1-0:2.8.2"),
    ("tariff_indicator_electricity", "0-0:96.14.0"),
    ("actual_electricity_power_delivered", "1-0:1.7.0"),
    ("actual_electricity_power_received", "1-0:2.7.0"),
    ("number_of_power_failures_in_any_phase", "0-0:96.7.21"),
    ("number_of_long_power_failures_in_any_phase", "0-0:96.7.9"),
    ("power_failure_event_log", "1-0:99.97.0"),
    ("number_of_voltage_sags_in_phase_l1", "1-0:32.32.0"),
    ("number_of_voltage_sags_in_phase_l2", "1-0:52.32.0"),
    ("number_of_voltage_sags_in_phase_l3", "1-0:72.32.0"),
    ("number_of_voltage_swells_in_phase_l1", "1-0:32.36.0"),
    ("number_of_voltage_swells_in_phase_l2", "1-0:52.36.0"),
    ("number_of_voltage_swells_in_phase_l3", "1-0:72.36.0"),
    ("text_message", "0-0:96.13.0"),
    ("instantaneous_voltage_l1", "1-0:32.7.0"),
    ("instantaneous_voltage_l2", "1-0:52.7.0"),
    ("instantaneous_voltage_l3", "1-0:72.7.0"),
    ("instantaneous_current_l1", "1-0:31.7.0"),
    ("instantaneous_current_l2", "1-0:51.7.0"),
    ("instantaneous_current_l3", "1-0:71.7.0"),
    ("instantaneous_active_power_l1_plus", "1-0:21.7.0"),
    ("instantaneous_active_power_l2_plus", "1-0:41.7.0"),
    ("instantaneous_active_power_l3_plus", "1-0:61.7.0"),
    ("instantaneous_active_power_l1_minus", "1-0:22.7.0"),
    ("instantaneous_active_power_l2_minus", "1-0:42.7.0"),
    ("instantaneous_active_power_l3_minus", "1-0:62.7.0"),
];

lazy_static! {
    static ref QUANTITY_MAP: HashMap<&'static str, &'static str> = QUANTITIES.iter().copied().collect();
}

pub fn quantity_obis(name: &str) -> Option<&'static str> {
    QUANTITY_MAP.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsmr::parse_telegram;
    use crate::obis_utils;
    use std::collections::HashSet;

    const KAIFA_TELEGRAM: &str = r"/KFM5KAIFA-METER

1-3:0.2.8(42)
0-0:1.0.0(161113205757W)
0-0:96.1.1(3960221976967177082151037881335713)
1-0:1.8.1(001581.123*kWh)
1-0:1.8.2(001435.706*kWh)
1-0:2.8.1(000000.000*kWh)
1-0:2.8.2(000000.000*kWh)
0-0:96.14.0(0002)
1-0:1.7.0(02.027*kW)
1-0:2.7.0(00.000*kW)
0-0:96.7.21(00015)
0-0:96.7.9(00007)
1-0:99.97.0(3)(0-0:96.7.19)(000104180320W)(0000237126*s)(000101000001W)(2147583646*s)(000102000003W)(2317482647*s)
1-0:32.32.0(00000)
1-0:52.32.0(00000)
1-0:72.32.0(00000)
1-0:32.36.0(00000)
1-0:52.36.0(00000)
1-0:72.36.0(00000)
0-0:96.13.1()
0-0:96.13.0()
1-0:31.7.0(000*A)
1-0:51.7.0(006*A)
1-0:71.7.0(002*A)
1-0:21.7.0(00.170*kW)
1-0:22.7.0(00.000*kW)
1-0:41.7.0(01.247*kW)
1-0:42.7.0(00.000*kW)
1-0:61.7.0(00.209*kW)
1-0:62.7.0(00.000*kW)
0-1:24.1.0(003)
0-1:96.1.0(4819243993373755377509728609491464)
0-1:24.2.1(161129200000W)(00981.443*m3)
!6796";

    #[test]
    fn test_quantity_table_is_consistent() {
        let names: HashSet<&str> = QUANTITIES.iter().map(|(name, _)| *name).collect();
        let codes: HashSet<&str> = QUANTITIES.iter().map(|(_, obis)| *obis).collect();
        assert_eq!(names.len(), QUANTITIES.len());
        assert_eq!(codes.len(), QUANTITIES.len());

        for (_, obis) in QUANTITIES {
            assert!(obis_utils::validate_obis_code(obis), "{} is not an OBIS code", obis);
            assert_eq!(obis_utils::obis_channel(obis), Some(0));
        }
    }

    #[test]
    fn test_quantity_obis() {
        assert_eq!(quantity_obis("actual_electricity_power_delivered"), Some("1-0:1.7.0"));
        assert_eq!(quantity_obis("tariff_indicator_electricity"), Some("0-0:96.14.0"));
        assert_eq!(quantity_obis("unknown"), None);
    }

    #[test]
    fn test_quantities_of_kaifa_telegram() {
        let telegram = parse_telegram(KAIFA_TELEGRAM).unwrap();
        assert_eq!(telegram.version(), "42");
        assert_eq!(telegram.quantity("actual_electricity_power_delivered"), Some("02.027"));
        assert_eq!(
            telegram.quantity_with_unit("meter_reading_electricity_delivered_to_client_tariff_1"),
            Some(("001581.123", "kWh"))
        );
        assert_eq!(telegram.quantity("tariff_indicator_electricity"), Some("0002"));
        assert_eq!(telegram.quantity("number_of_power_failures_in_any_phase"), Some("00015"));
        assert_eq!(telegram.quantity_with_unit("instantaneous_current_l2"), Some(("006", "A")));
        assert_eq!(telegram.quantity("text_message"), Some(""));
        assert_eq!(telegram.quantity("instantaneous_voltage_l1"), None);
        assert_eq!(telegram.quantity("no_such_quantity"), None);
    }

    #[test]
    fn test_channel_objects_of_kaifa_telegram() {
        let telegram = parse_telegram(KAIFA_TELEGRAM).unwrap();
        let gas = telegram.channel_objects(1);
        assert_eq!(gas.len(), 3);
        assert_eq!(gas["0-1:24.1.0"].value, "003");

        let reading = gas["0-1:24.2.1"].capture().unwrap();
        assert_eq!(reading.value, "00981.443");
        assert_eq!(reading.unit, "m3");

        assert!(telegram.channel_objects(2).is_empty());
        assert!(telegram.channel_objects(0).contains_key("1-0:1.7.0"));
    }

    #[test]
    fn test_identification_of_kaifa_telegram() {
        let telegram = parse_telegram(KAIFA_TELEGRAM).unwrap();
        let identification = telegram.identification().unwrap();
        assert_eq!(identification.manufacturer, "KFM");
        assert_eq!(identification.identification, "KAIFA-METER");
    }
}
