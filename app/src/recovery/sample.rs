use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::time::DateTime;
use crate::core::unit::{CubicMetersPerHour, DegreeCelsius};

/// One telemetry reading as delivered by the sensor gateway. Never mutated.
#[derive(Debug, Clone)]
pub struct Sample {
    pub device: String,
    pub time: DateTime,
    pub temperatures: BTreeMap<String, DegreeCelsius>,
    pub flow: CubicMetersPerHour,
}

impl Sample {
    pub fn temperature(&self, channel: &str) -> Option<DegreeCelsius> {
        self.temperatures.get(channel).copied()
    }
}

/// Which two temperature channels form the hot/cold pair of a deployment.
///
/// Device variants wire their supply/discharge sensors to different channels,
/// so the pairing is per-device configuration, resolved once per query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelPair {
    pub hot: String,
    pub cold: String,
}
