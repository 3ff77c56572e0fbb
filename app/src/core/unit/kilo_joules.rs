use std::{fmt::Display, ops::Add};

use derive_more::derive::AsRef;

use super::KiloWattHours;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef)]
pub struct KiloJoules(pub f64);

impl KiloJoules {
    pub fn to_kilo_watt_hours(self) -> KiloWattHours {
        KiloWattHours(self.0 / 3600.0)
    }
}

impl Display for KiloJoules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kJ", self.0)
    }
}

impl From<&KiloJoules> for f64 {
    fn from(value: &KiloJoules) -> Self {
        value.0
    }
}

impl From<f64> for KiloJoules {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for KiloJoules {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        KiloJoules(self.0 + rhs.0)
    }
}

impl std::ops::Neg for KiloJoules {
    type Output = Self;

    fn neg(self) -> Self::Output {
        KiloJoules(-self.0)
    }
}
