use std::collections::{BTreeMap, HashMap};

use config::{Config, ConfigError, Environment, File};
use infrastructure::{DatabaseConfig, HttpServerConfig, MonitoringConfig};
use serde::Deserialize;

use crate::recovery::{ChannelPair, DEFAULT_PROJECTION_DAYS, DeviceRegistry, UnitPriceTable};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub http_server: HttpServerConfig,
    pub monitoring: MonitoringConfig,
    pub telemetry: TelemetrySettings,
    pub pricing: PricingSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config.toml"))
            .add_source(Environment::default().separator("_").list_separator(","));

        let s = builder.build()?;
        s.try_deserialize()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub default_device: String,
    pub default_channels: ChannelPair,
    pub devices: Vec<DeviceSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeviceSettings {
    pub id: String,
    pub channels: Option<ChannelPair>,
}

impl TelemetrySettings {
    pub fn into_registry(self) -> DeviceRegistry {
        let TelemetrySettings {
            default_device,
            default_channels,
            devices,
        } = self;

        let devices: HashMap<String, ChannelPair> = devices
            .into_iter()
            .map(|device| {
                let channels = device.channels.unwrap_or_else(|| default_channels.clone());
                (device.id, channels)
            })
            .collect();

        DeviceRegistry::new(devices, default_device)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    pub unit_prices: BTreeMap<String, f64>,
    #[serde(default = "default_projection_days")]
    pub projection_days: Vec<u32>,
}

fn default_projection_days() -> Vec<u32> {
    DEFAULT_PROJECTION_DAYS.to_vec()
}

impl PricingSettings {
    pub fn unit_prices(&self) -> UnitPriceTable {
        UnitPriceTable::new(self.unit_prices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_shipped_config_parses() {
        let source = find_file_upwards("config.toml").expect("config.toml not found");

        let settings: Settings = Config::builder()
            .add_source(File::from(source))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(settings.pricing.unit_prices.contains_key("electricity"));

        let registry = settings.telemetry.into_registry();
        assert!(registry.channels(registry.default_device()).is_ok());
    }

    fn find_file_upwards(file_name: &str) -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;

        // Iterate over ancestors, starting from the current directory
        for dir in current_dir.ancestors() {
            let file_path = dir.join(file_name);
            if file_path.exists() {
                return Some(file_path);
            }
        }

        None
    }
}
