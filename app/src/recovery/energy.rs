use crate::core::unit::{CubicMetersPerHour, DegreeCelsius, KiloJoules};

use super::{ChannelPair, Sample};

const WATER_DENSITY: f64 = 1000.0; // kg/m³
const WATER_SPECIFIC_HEAT: f64 = 4.186; // kJ/(kg·°C)

/// Thermal energy recovered while `flow` passed through the temperature
/// differential `hot - cold`.
///
/// A negative differential yields negative energy. That is a legitimate
/// "no recovery happening" state and is surfaced, not rejected.
pub fn recovered_energy(hot: DegreeCelsius, cold: DegreeCelsius, flow: CubicMetersPerHour) -> KiloJoules {
    let delta = f64::from(hot - cold);

    KiloJoules(delta * f64::from(flow) * WATER_DENSITY * WATER_SPECIFIC_HEAT)
}

/// Instantaneous energy of one sample under the given channel pairing, or
/// `None` when the sample does not carry both channels.
pub fn sample_energy(sample: &Sample, channels: &ChannelPair) -> Option<KiloJoules> {
    let hot = sample.temperature(&channels.hot)?;
    let cold = sample.temperature(&channels.cold)?;

    Some(recovered_energy(hot, cold, sample.flow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_value() {
        let energy = recovered_energy(DegreeCelsius(40.0), DegreeCelsius(30.0), CubicMetersPerHour(10.0));

        assert_eq!(energy, KiloJoules(418_600.0));
    }

    #[test]
    fn test_linear_in_flow() {
        let single = recovered_energy(DegreeCelsius(45.0), DegreeCelsius(25.0), CubicMetersPerHour(3.0));
        let tripled = recovered_energy(DegreeCelsius(45.0), DegreeCelsius(25.0), CubicMetersPerHour(9.0));

        assert_eq!(KiloJoules(f64::from(&single) * 3.0), tripled);
    }

    #[test]
    fn test_antisymmetric_in_temperature_swap() {
        let forward = recovered_energy(DegreeCelsius(40.0), DegreeCelsius(30.0), CubicMetersPerHour(10.0));
        let swapped = recovered_energy(DegreeCelsius(30.0), DegreeCelsius(40.0), CubicMetersPerHour(10.0));

        assert_eq!(swapped, -forward);
    }
}
