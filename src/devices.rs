use std::time::Duration;

use serde_json::Value;
use tapo::{responses::DeviceInfoColorLightResult, ApiClient, ColorLightHandler};

use crate::{
    capabilities::{Colour, DeviceActions, Dimmer, Switch},
    config::Config,
    datatypes::{DeviceInfo, DeviceUsage},
    error::Result,
};

#[cfg(test)]
use std::cell::{Cell, RefCell};

#[cfg(test)]
use crate::{datatypes::tests::L530_USAGE_JSON, error::Error};

impl From<DeviceInfoColorLightResult> for DeviceInfo {
    fn from(result: DeviceInfoColorLightResult) -> Self {
        Self {
            nickname: result.nickname,
            device_on: result.device_on,
            brightness: Some(result.brightness),
            model: result.model,
        }
    }
}

/// Tapo L530 colour bulb behind an authenticated session
pub struct L530 {
    handler: ColorLightHandler,
}

impl L530 {
    /// Log in with the account credentials and open a session to the bulb
    pub async fn connect(config: &Config) -> Result<Self> {
        debug!("logging in to bulb at {}", config.address);
        let handler = ApiClient::new(config.email.as_str(), config.password.as_str())
            .l530(config.address.as_str())
            .await?;
        info!("connected to bulb at {}", config.address);
        Ok(Self { handler })
    }
}

impl DeviceActions for L530 {
    async fn device_info(&self) -> Result<DeviceInfo> {
        let info = self.handler.get_device_info().await?;
        debug!("device info received for {}", info.nickname);
        Ok(DeviceInfo::from(info))
    }

    async fn device_info_json(&self) -> Result<Value> {
        Ok(self.handler.get_device_info_json().await?)
    }

    async fn device_usage(&self) -> Result<DeviceUsage> {
        let usage = self.handler.get_device_usage().await?;
        // Read through JSON so null and absent periods both come out as `None`
        Ok(serde_json::from_value(serde_json::to_value(usage)?)?)
    }

    async fn reboot_with_delay(&self, delay: Duration) -> Result<()> {
        let delay_s = u16::try_from(delay.as_secs()).unwrap_or(u16::MAX);
        info!("rebooting bulb in {}s", delay_s);
        Ok(self.handler.device_reboot(delay_s).await?)
    }

    async fn reset(&self) -> Result<()> {
        info!("factory resetting bulb");
        Ok(self.handler.device_reset().await?)
    }
}

impl Switch for L530 {
    async fn switch_on(&self) -> Result<()> {
        info!("switching on");
        Ok(self.handler.on().await?)
    }

    async fn switch_off(&self) -> Result<()> {
        info!("switching off");
        Ok(self.handler.off().await?)
    }
}

impl Dimmer for L530 {
    async fn set_brightness(&self, brightness: u8) -> Result<()> {
        info!("setting brightness to {}", brightness);
        Ok(self.handler.set_brightness(brightness).await?)
    }
}

impl Colour for L530 {
    async fn set_hue_saturation(&self, hue: u16, saturation: u8) -> Result<()> {
        info!("setting hue {} saturation {}", hue, saturation);
        Ok(self.handler.set_hue_saturation(hue, saturation).await?)
    }

    async fn set_colour_temperature(&self, kelvin: u16) -> Result<()> {
        info!("setting colour temperature to {}K", kelvin);
        Ok(self.handler.set_color_temperature(kelvin).await?)
    }
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    DeviceInfo,
    DeviceInfoJson,
    DeviceUsage,
    Reboot(u64),
    Reset,
    On,
    Off,
    Brightness(u8),
    HueSaturation(u16, u8),
    ColourTemperature(u16),
}

#[cfg(test)]
impl Call {
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Call::DeviceInfo | Call::DeviceInfoJson | Call::DeviceUsage
        )
    }
}

/// Records every call and answers with a fixed snapshot
#[cfg(test)]
pub struct BulbMock {
    info: DeviceInfo,
    calls: RefCell<Vec<Call>>,
    fail: Cell<bool>,
}

#[cfg(test)]
impl BulbMock {
    pub fn new(info: DeviceInfo) -> BulbMock {
        BulbMock {
            info,
            calls: RefCell::new(vec![]),
            fail: Cell::new(false),
        }
    }

    pub fn set_failure(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutating).collect()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail.get() {
            Err(Error::Other(String::from("Device did not respond")))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
impl DeviceActions for BulbMock {
    async fn device_info(&self) -> Result<DeviceInfo> {
        self.record(Call::DeviceInfo)?;
        Ok(self.info.clone())
    }

    async fn device_info_json(&self) -> Result<Value> {
        self.record(Call::DeviceInfoJson)?;
        Ok(serde_json::to_value(&self.info)?)
    }

    async fn device_usage(&self) -> Result<DeviceUsage> {
        self.record(Call::DeviceUsage)?;
        Ok(serde_json::from_str(L530_USAGE_JSON)?)
    }

    async fn reboot_with_delay(&self, delay: Duration) -> Result<()> {
        self.record(Call::Reboot(delay.as_secs()))
    }

    async fn reset(&self) -> Result<()> {
        self.record(Call::Reset)
    }
}

#[cfg(test)]
impl Switch for BulbMock {
    async fn switch_on(&self) -> Result<()> {
        self.record(Call::On)
    }

    async fn switch_off(&self) -> Result<()> {
        self.record(Call::Off)
    }
}

#[cfg(test)]
impl Dimmer for BulbMock {
    async fn set_brightness(&self, brightness: u8) -> Result<()> {
        self.record(Call::Brightness(brightness))
    }
}

#[cfg(test)]
impl Colour for BulbMock {
    async fn set_hue_saturation(&self, hue: u16, saturation: u8) -> Result<()> {
        self.record(Call::HueSaturation(hue, saturation))
    }

    async fn set_colour_temperature(&self, kelvin: u16) -> Result<()> {
        self.record(Call::ColourTemperature(kelvin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::tests::L530_JSON_ON;

    fn mock() -> BulbMock {
        BulbMock::new(serde_json::from_str(L530_JSON_ON).unwrap())
    }

    #[tokio::test]
    async fn test_toggle_from_on_switches_off() {
        let device = mock();

        let now_on = device.toggle(true).await.unwrap();

        assert!(!now_on);
        assert_eq!(vec![Call::Off], device.calls());
    }

    #[tokio::test]
    async fn test_toggle_from_off_switches_on() {
        let device = mock();

        let now_on = device.toggle(false).await.unwrap();

        assert!(now_on);
        assert_eq!(vec![Call::On], device.calls());
    }

    #[tokio::test]
    async fn test_toggle_failure_propagates() {
        let device = mock();
        device.set_failure(true);

        assert!(device.toggle(true).await.is_err());
        assert_eq!(vec![Call::Off], device.calls());
    }

    #[tokio::test]
    async fn test_reboot_waits_one_second() {
        let device = mock();

        device.reboot().await.unwrap();

        assert_eq!(vec![Call::Reboot(1)], device.calls());
    }

    #[tokio::test]
    async fn test_device_usage_is_not_mutating() {
        let device = mock();

        let usage = device.device_usage().await.unwrap();

        assert_eq!(usage.time_usage.today, Some(42));
        assert!(device.mutating_calls().is_empty());
    }

    #[tokio::test]
    async fn test_device_info_failure() {
        let device = mock();
        device.set_failure(true);

        assert!(device.device_info().await.is_err());
        assert_eq!(vec![Call::DeviceInfo], device.calls());
    }

    #[tokio::test]
    async fn test_device_info_json_keeps_fields() {
        let device = mock();

        let json = device.device_info_json().await.unwrap();

        assert_eq!(json["nickname"], "Desk Lamp");
        assert_eq!(json["brightness"], 75);
        assert!(device.mutating_calls().is_empty());
    }
}
