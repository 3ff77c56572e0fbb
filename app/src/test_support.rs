use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;

use crate::core::time::{DateTime, WindowBounds};
use crate::core::unit::{CubicMetersPerHour, DegreeCelsius};
use crate::port::TelemetryStore;
use crate::recovery::{ChannelPair, DeviceRegistry, Sample, UnitPriceTable};

/// In-memory stand-in for the telemetry store, counting queries so tests can
/// assert that invalid devices never reach the store.
pub struct FakeStore {
    samples: Vec<Sample>,
    queries: AtomicUsize,
}

impl FakeStore {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl TelemetryStore for FakeStore {
    async fn latest(&self, device: &str) -> Result<Option<Sample>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .samples
            .iter()
            .filter(|s| s.device == device)
            .max_by_key(|s| s.time)
            .cloned())
    }

    async fn range(&self, device: &str, bounds: &WindowBounds) -> Result<Vec<Sample>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let mut samples: Vec<Sample> = self
            .samples
            .iter()
            .filter(|s| s.device == device && bounds.contains(s.time))
            .cloned()
            .collect();
        samples.sort_by_key(|s| s.time);

        Ok(samples)
    }
}

pub fn sample(device: &str, time: DateTime, hot: f64, cold: f64, flow: f64) -> Sample {
    Sample {
        device: device.to_owned(),
        time,
        temperatures: BTreeMap::from([
            ("tempC3".to_owned(), DegreeCelsius(cold)),
            ("tempC4".to_owned(), DegreeCelsius(hot)),
        ]),
        flow: CubicMetersPerHour(flow),
    }
}

pub fn registry() -> DeviceRegistry {
    let channels = ChannelPair {
        hot: "tempC4".to_owned(),
        cold: "tempC3".to_owned(),
    };

    let devices = HashMap::from([
        ("hainetsukaishu-demo1".to_owned(), channels.clone()),
        ("hainetsukaishu-demo2".to_owned(), channels),
    ]);

    DeviceRegistry::new(devices, "hainetsukaishu-demo1".to_owned())
}

pub fn prices() -> UnitPriceTable {
    UnitPriceTable::new(BTreeMap::from([
        ("electricity".to_owned(), 30.0),
        ("gas".to_owned(), 20.0),
    ]))
}
