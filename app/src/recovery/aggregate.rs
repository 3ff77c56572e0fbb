use crate::core::unit::KiloJoules;

use super::energy::sample_energy;
use super::{ChannelPair, Sample};

/// Cumulative recovered energy over a window of samples.
///
/// Summation, not averaging. Samples missing one of the configured channels
/// are skipped. `None` means the window held no usable sample, so callers
/// can tell "no data" from "zero recovery".
pub fn window_energy(samples: &[Sample], channels: &ChannelPair) -> Option<KiloJoules> {
    let mut total: Option<KiloJoules> = None;

    for sample in samples {
        match sample_energy(sample, channels) {
            Some(energy) => {
                total = Some(total.map_or(energy, |sum| sum + energy));
            }
            None => {
                tracing::warn!(
                    "Sample of {} from {} is missing channel {} or {}, skipping",
                    sample.device,
                    sample.time.to_human_readable(),
                    channels.hot,
                    channels.cold
                );
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::DateTime;
    use crate::test_support::sample;

    fn channels() -> ChannelPair {
        ChannelPair {
            hot: "tempC4".to_owned(),
            cold: "tempC3".to_owned(),
        }
    }

    fn at(iso: &str) -> DateTime {
        DateTime::from_iso(iso).unwrap()
    }

    #[test]
    fn test_empty_window_has_no_result() {
        assert_eq!(window_energy(&[], &channels()), None);
    }

    #[test]
    fn test_single_sample_equals_direct_energy() {
        let s = sample("demo", at("2025-06-10T10:00:00+09:00"), 40.0, 30.0, 10.0);

        let total = window_energy(std::slice::from_ref(&s), &channels());

        assert_eq!(total, sample_energy(&s, &channels()));
        assert_eq!(total, Some(KiloJoules(418_600.0)));
    }

    #[test]
    fn test_identical_samples_sum_up() {
        let samples: Vec<Sample> = (0..4)
            .map(|i| {
                sample(
                    "demo",
                    at(&format!("2025-06-10T1{i}:00:00+09:00")),
                    40.0,
                    30.0,
                    10.0,
                )
            })
            .collect();

        assert_eq!(window_energy(&samples, &channels()), Some(KiloJoules(4.0 * 418_600.0)));
    }

    #[test]
    fn test_negative_differential_is_kept() {
        let s = sample("demo", at("2025-06-10T10:00:00+09:00"), 30.0, 40.0, 10.0);

        assert_eq!(window_energy(std::slice::from_ref(&s), &channels()), Some(KiloJoules(-418_600.0)));
    }

    #[test]
    fn test_samples_without_channels_are_skipped() {
        let mut broken = sample("demo", at("2025-06-10T10:00:00+09:00"), 40.0, 30.0, 10.0);
        broken.temperatures.remove("tempC4");

        let intact = sample("demo", at("2025-06-10T11:00:00+09:00"), 40.0, 30.0, 10.0);

        assert_eq!(
            window_energy(&[broken.clone(), intact], &channels()),
            Some(KiloJoules(418_600.0))
        );
        assert_eq!(window_energy(&[broken], &channels()), None);
    }
}
