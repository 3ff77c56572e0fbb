use std::fmt::Display;

use derive_more::derive::AsRef;

/// Volumetric flow rate in m³/h, the convention of the sensor fleet.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, AsRef)]
pub struct CubicMetersPerHour(pub f64);

impl Display for CubicMetersPerHour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} m³/h", self.0)
    }
}

impl From<&CubicMetersPerHour> for f64 {
    fn from(value: &CubicMetersPerHour) -> Self {
        value.0
    }
}

impl From<CubicMetersPerHour> for f64 {
    fn from(value: CubicMetersPerHour) -> Self {
        value.0
    }
}

impl From<f64> for CubicMetersPerHour {
    fn from(value: f64) -> Self {
        Self(value)
    }
}
