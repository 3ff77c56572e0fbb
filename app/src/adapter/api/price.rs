use actix_web::web;
use serde::Serialize;

use crate::core::time::AggregationWindow;
use crate::port::TelemetryStore;
use crate::recovery::{QueryError, RecoveryApi};

use super::fixed2;

#[derive(Debug, Serialize)]
pub struct InstantPriceDto {
    device: String,
    time: String,
    price: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowTotalDto {
    device: String,
    total_price: String,
}

pub async fn instant<S: TelemetryStore + 'static>(
    api: web::Data<RecoveryApi<S>>,
    path: web::Path<String>,
) -> Result<web::Json<InstantPriceDto>, QueryError> {
    let device_id = path.into_inner();
    let price = api.instant_price(&device_id).await?;

    Ok(web::Json(InstantPriceDto {
        device: price.device,
        time: price.time.to_iso_string(),
        price: fixed2(price.price),
    }))
}

pub async fn hourly_total<S: TelemetryStore + 'static>(
    api: web::Data<RecoveryApi<S>>,
    path: web::Path<String>,
) -> Result<web::Json<WindowTotalDto>, QueryError> {
    window_total(api, path, AggregationWindow::RollingHour).await
}

pub async fn daily_total<S: TelemetryStore + 'static>(
    api: web::Data<RecoveryApi<S>>,
    path: web::Path<String>,
) -> Result<web::Json<WindowTotalDto>, QueryError> {
    window_total(api, path, AggregationWindow::RollingDay).await
}

async fn window_total<S: TelemetryStore + 'static>(
    api: web::Data<RecoveryApi<S>>,
    path: web::Path<String>,
    window: AggregationWindow,
) -> Result<web::Json<WindowTotalDto>, QueryError> {
    let device_id = path.into_inner();
    let total = api.window_total(&device_id, window).await?;

    Ok(web::Json(WindowTotalDto {
        device: total.device,
        total_price: fixed2(total.total_price),
    }))
}
