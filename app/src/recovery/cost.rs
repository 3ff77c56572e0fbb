use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::unit::KiloJoules;

/// Price per kWh for each energy carrier the deployment compares against.
///
/// Loaded from configuration and threaded explicitly through every call;
/// there is no ambient price state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitPriceTable(BTreeMap<String, f64>);

impl UnitPriceTable {
    pub fn new(rates: BTreeMap<String, f64>) -> Self {
        Self(rates)
    }

    pub fn rate(&self, carrier: &str) -> Option<f64> {
        self.0.get(carrier).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(carrier, rate)| (carrier.as_str(), *rate))
    }

    /// Money equivalent of `energy` for every carrier in the table.
    ///
    /// The breakdown carries exactly the table's carrier set, always.
    pub fn cost_of(&self, energy: KiloJoules) -> CostBreakdown {
        let kwh = energy.to_kilo_watt_hours();

        CostBreakdown(
            self.0
                .iter()
                .map(|(carrier, rate)| (carrier.clone(), f64::from(&kwh) * rate))
                .collect(),
        )
    }
}

/// Per-carrier money amounts derived from one energy figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown(BTreeMap<String, f64>);

impl CostBreakdown {
    pub fn amount(&self, carrier: &str) -> Option<f64> {
        self.0.get(carrier).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(carrier, amount)| (carrier.as_str(), *amount))
    }

    pub fn scaled(&self, factor: f64) -> CostBreakdown {
        CostBreakdown(
            self.0
                .iter()
                .map(|(carrier, amount)| (carrier.clone(), amount * factor))
                .collect(),
        )
    }
}
