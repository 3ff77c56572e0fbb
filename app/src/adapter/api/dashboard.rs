use std::collections::BTreeMap;

use actix_web::web;
use serde::Serialize;

use crate::port::TelemetryStore;
use crate::recovery::{QueryError, RecoveryApi};

use super::{fixed2, fixed2_breakdown};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeDto {
    device: String,
    time: String,
    temperature: BTreeMap<String, f64>,
    flow: f64,
    energy: String,
    unit_costs: BTreeMap<String, f64>,
    cost: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDto {
    device: String,
    total_energy: String,
    total_cost: BTreeMap<String, String>,
    yearly_savings: BTreeMap<String, BTreeMap<String, String>>,
}

pub async fn realtime<S: TelemetryStore + 'static>(
    api: web::Data<RecoveryApi<S>>,
) -> Result<web::Json<RealtimeDto>, QueryError> {
    let snapshot = api.realtime().await?;

    Ok(web::Json(RealtimeDto {
        device: snapshot.sample.device.clone(),
        time: snapshot.sample.time.to_iso_string(),
        temperature: snapshot
            .sample
            .temperatures
            .iter()
            .map(|(channel, value)| (channel.clone(), f64::from(value)))
            .collect(),
        flow: f64::from(snapshot.sample.flow),
        energy: fixed2(f64::from(&snapshot.energy)),
        unit_costs: snapshot
            .unit_costs
            .iter()
            .map(|(carrier, rate)| (carrier.to_owned(), rate))
            .collect(),
        cost: fixed2_breakdown(&snapshot.cost),
    }))
}

pub async fn daily<S: TelemetryStore + 'static>(
    api: web::Data<RecoveryApi<S>>,
) -> Result<web::Json<DailyDto>, QueryError> {
    let report = api.daily_report().await?;

    Ok(web::Json(DailyDto {
        device: report.device,
        total_energy: fixed2(f64::from(&report.total_energy)),
        total_cost: fixed2_breakdown(&report.total_cost),
        yearly_savings: report
            .yearly_savings
            .iter()
            .map(|(horizon, breakdown)| (horizon.clone(), fixed2_breakdown(breakdown)))
            .collect(),
    }))
}
