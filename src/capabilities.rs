use std::time::Duration;

use serde_json::Value;

use crate::{
    datatypes::{DeviceInfo, DeviceUsage},
    error::Result,
};

pub trait DeviceActions {
    /// Fetch a fresh snapshot of the device state
    async fn device_info(&self) -> Result<DeviceInfo>;

    /// Fetch the device state exactly as the device reports it
    async fn device_info_json(&self) -> Result<Value>;

    /// Minutes the bulb has been on, by period
    async fn device_usage(&self) -> Result<DeviceUsage>;

    async fn reboot(&self) -> Result<()> {
        self.reboot_with_delay(Duration::from_secs(1)).await
    }

    async fn reboot_with_delay(&self, delay: Duration) -> Result<()>;

    /// Factory reset; the device is unpaired from the account afterwards
    async fn reset(&self) -> Result<()>;
}

pub trait Switch: DeviceActions {
    async fn switch_on(&self) -> Result<()>;

    async fn switch_off(&self) -> Result<()>;

    /// Flip the power state given the state last observed; returns the new state
    async fn toggle(&self, is_on: bool) -> Result<bool> {
        if is_on {
            self.switch_off().await?;
            Ok(false)
        } else {
            self.switch_on().await?;
            Ok(true)
        }
    }
}

pub trait Dimmer: Switch {
    async fn set_brightness(&self, brightness: u8) -> Result<()>;
}

pub trait Colour: Dimmer {
    async fn set_hue_saturation(&self, hue: u16, saturation: u8) -> Result<()>;

    async fn set_colour_temperature(&self, kelvin: u16) -> Result<()>;
}
