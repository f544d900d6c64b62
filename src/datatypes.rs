/// Snapshot of the bulb state taken once per run
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DeviceInfo {
    pub nickname: String,
    pub device_on: bool,
    #[serde(default)]
    pub brightness: Option<u8>,
    pub model: String,
}

impl DeviceInfo {
    pub fn power(&self) -> &'static str {
        if self.device_on {
            "ON"
        } else {
            "OFF"
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct UsageByPeriod {
    #[serde(default)]
    pub today: Option<u64>,
    #[serde(default)]
    pub past7: Option<u64>,
    #[serde(default)]
    pub past30: Option<u64>,
}

/// On-time of the bulb in minutes
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct DeviceUsage {
    #[serde(default)]
    pub time_usage: UsageByPeriod,
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub const L530_JSON_ON: &'static str = r#"{
      "device_id": "0000000000000000000000000000000000000000",
      "fw_ver": "1.1.9 Build 230515 Rel.161016",
      "hw_ver": "3.0",
      "type": "SMART.TAPOBULB",
      "model": "L530",
      "mac": "00-00-00-00-00-00",
      "hw_id": "00000000000000000000000000000000",
      "fw_id": "00000000000000000000000000000000",
      "oem_id": "00000000000000000000000000000000",
      "ip": "192.168.1.18",
      "time_diff": 0,
      "ssid": "",
      "rssi": -48,
      "signal_level": 3,
      "latitude": 0,
      "longitude": 0,
      "lang": "en_US",
      "avatar": "bulb",
      "region": "Europe/London",
      "specs": "",
      "nickname": "Desk Lamp",
      "has_set_location_info": true,
      "device_on": true,
      "brightness": 75,
      "hue": 240,
      "saturation": 100,
      "color_temp": 0,
      "dynamic_light_effect_enable": false,
      "overheated": false
    }"#;

    const L530_JSON_OFF_NO_BRIGHTNESS: &'static str = r#"{
      "device_id": "0000000000000000000000000000000000000000",
      "type": "SMART.TAPOBULB",
      "model": "L530",
      "nickname": "Hall",
      "device_on": false
    }"#;

    pub const L530_USAGE_JSON: &'static str = r#"{
      "time_usage": {
        "today": 42,
        "past7": 610,
        "past30": 2315
      },
      "power_usage": {
        "today": 0,
        "past7": 0,
        "past30": 0
      },
      "saved_power": {
        "today": 0,
        "past7": 0,
        "past30": 0
      }
    }"#;

    #[test]
    fn deserialise_l530_usage() {
        let usage = serde_json::from_str::<DeviceUsage>(L530_USAGE_JSON).unwrap();

        assert_eq!(usage.time_usage.today, Some(42));
        assert_eq!(usage.time_usage.past30, Some(2315));
    }

    #[test]
    fn deserialise_usage_with_missing_periods() {
        let usage = serde_json::from_str::<DeviceUsage>(r#"{"time_usage": {"today": null}}"#).unwrap();

        assert_eq!(usage.time_usage, UsageByPeriod::default());
    }

    #[test]
    fn deserialise_l530_on() {
        let info = serde_json::from_str::<DeviceInfo>(L530_JSON_ON).unwrap();

        assert_eq!(info.nickname, "Desk Lamp");
        assert_eq!(info.model, "L530");
        assert_eq!(info.brightness, Some(75));
        assert_eq!(info.power(), "ON");
    }

    #[test]
    fn deserialise_l530_without_brightness() {
        let info = serde_json::from_str::<DeviceInfo>(L530_JSON_OFF_NO_BRIGHTNESS).unwrap();

        assert_eq!(info.nickname, "Hall");
        assert_eq!(info.brightness, None);
        assert_eq!(info.power(), "OFF");
    }
}
