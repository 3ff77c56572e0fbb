use std::collections::BTreeMap;

use derive_more::derive::{Display, Error};

use crate::core::time::{AggregationWindow, DateTime};
use crate::core::unit::KiloJoules;
use crate::port::TelemetryStore;
use crate::t;

use super::energy::sample_energy;
use super::{CostBreakdown, DeviceRegistry, Sample, UnitPriceTable, project_yearly, window_energy};

/// Carrier the single-figure price endpoints report on.
const REFERENCE_CARRIER: &str = "electricity";

#[derive(Debug, Error, Display)]
pub enum QueryError {
    #[display("Invalid deviceId: {_0}")]
    #[error(ignore)]
    InvalidDevice(String),

    #[display("No data found for deviceId: {_0}")]
    #[error(ignore)]
    NoData(String),

    #[display("Failed to query telemetry store")]
    Store(anyhow::Error),
}

/// Query façade: validates the device, builds the time predicate, retrieves
/// samples and composes the calculators. One method per request type.
pub struct RecoveryApi<S> {
    store: S,
    registry: DeviceRegistry,
    prices: UnitPriceTable,
    horizons: Vec<u32>,
}

#[derive(Debug)]
pub struct InstantPrice {
    pub device: String,
    pub time: DateTime,
    pub price: f64,
}

#[derive(Debug)]
pub struct WindowTotal {
    pub device: String,
    pub total_price: f64,
}

#[derive(Debug)]
pub struct RealtimeSnapshot {
    pub sample: Sample,
    pub energy: KiloJoules,
    pub unit_costs: UnitPriceTable,
    pub cost: CostBreakdown,
}

#[derive(Debug)]
pub struct DailyReport {
    pub device: String,
    pub total_energy: KiloJoules,
    pub total_cost: CostBreakdown,
    pub yearly_savings: BTreeMap<String, CostBreakdown>,
}

impl<S: TelemetryStore> RecoveryApi<S> {
    pub fn new(store: S, registry: DeviceRegistry, prices: UnitPriceTable, horizons: Vec<u32>) -> Self {
        Self {
            store,
            registry,
            prices,
            horizons,
        }
    }

    /// Cost equivalent of the most recent sample of `device`.
    pub async fn instant_price(&self, device: &str) -> Result<InstantPrice, QueryError> {
        let channels = self.registry.channels(device)?.clone();

        let sample = self
            .store
            .latest(device)
            .await
            .map_err(QueryError::Store)?
            .ok_or_else(|| QueryError::NoData(device.to_owned()))?;

        let energy = sample_energy(&sample, &channels).ok_or_else(|| {
            QueryError::Store(anyhow::anyhow!(
                "Latest sample of {} is missing channel {} or {}",
                device,
                channels.hot,
                channels.cold
            ))
        })?;

        Ok(InstantPrice {
            device: device.to_owned(),
            time: sample.time,
            price: self.reference_amount(energy)?,
        })
    }

    /// Cumulative cost equivalent of `device` over a rolling window ending now.
    pub async fn window_total(&self, device: &str, window: AggregationWindow) -> Result<WindowTotal, QueryError> {
        let channels = self.registry.channels(device)?.clone();
        let bounds = window.bounds_at(t!(now)).map_err(QueryError::Store)?;

        let samples = self
            .store
            .range(device, &bounds)
            .await
            .map_err(QueryError::Store)?;

        let energy = window_energy(&samples, &channels).ok_or_else(|| QueryError::NoData(device.to_owned()))?;

        Ok(WindowTotal {
            device: device.to_owned(),
            total_price: self.reference_amount(energy)?,
        })
    }

    /// Latest sample of the dashboard device with derived energy and the full
    /// cost breakdown, plus the active unit prices.
    pub async fn realtime(&self) -> Result<RealtimeSnapshot, QueryError> {
        let device = self.registry.default_device().to_owned();
        let channels = self.registry.channels(&device)?.clone();

        let sample = self
            .store
            .latest(&device)
            .await
            .map_err(QueryError::Store)?
            .ok_or_else(|| QueryError::NoData(device.clone()))?;

        let energy = sample_energy(&sample, &channels).ok_or_else(|| {
            QueryError::Store(anyhow::anyhow!(
                "Latest sample of {} is missing channel {} or {}",
                device,
                channels.hot,
                channels.cold
            ))
        })?;

        Ok(RealtimeSnapshot {
            sample,
            energy,
            unit_costs: self.prices.clone(),
            cost: self.prices.cost_of(energy),
        })
    }

    /// Previous-calendar-day totals of the dashboard device with yearly
    /// projections.
    pub async fn daily_report(&self) -> Result<DailyReport, QueryError> {
        let device = self.registry.default_device().to_owned();
        let channels = self.registry.channels(&device)?.clone();

        let bounds = AggregationWindow::PreviousDay
            .bounds_at(t!(now))
            .map_err(QueryError::Store)?;

        let samples = self
            .store
            .range(&device, &bounds)
            .await
            .map_err(QueryError::Store)?;

        let total_energy = window_energy(&samples, &channels).ok_or_else(|| QueryError::NoData(device.clone()))?;
        let total_cost = self.prices.cost_of(total_energy);
        let yearly_savings = project_yearly(&total_cost, &self.horizons);

        Ok(DailyReport {
            device,
            total_energy,
            total_cost,
            yearly_savings,
        })
    }

    fn reference_amount(&self, energy: KiloJoules) -> Result<f64, QueryError> {
        let rate = self.prices.rate(REFERENCE_CARRIER).ok_or_else(|| {
            QueryError::Store(anyhow::anyhow!("No {} unit price configured", REFERENCE_CARRIER))
        })?;

        Ok(f64::from(&energy.to_kilo_watt_hours()) * rate)
    }
}
