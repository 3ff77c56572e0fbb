use std::collections::HashMap;

use super::ChannelPair;
use super::service::QueryError;

/// Allow-listed devices and their channel wiring.
///
/// Lookups reject unknown device IDs before any store access happens.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    devices: HashMap<String, ChannelPair>,
    default_device: String,
}

impl DeviceRegistry {
    pub fn new(devices: HashMap<String, ChannelPair>, default_device: String) -> Self {
        Self {
            devices,
            default_device,
        }
    }

    pub fn channels(&self, device: &str) -> Result<&ChannelPair, QueryError> {
        self.devices
            .get(device)
            .ok_or_else(|| QueryError::InvalidDevice(device.to_owned()))
    }

    /// The device the dashboard endpoints report on.
    pub fn default_device(&self) -> &str {
        &self.default_device
    }
}
