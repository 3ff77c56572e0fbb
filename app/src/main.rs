use std::sync::Arc;

use actix_web::web;
use settings::Settings;

use crate::adapter::db::TelemetryRepository;
use crate::recovery::RecoveryApi;

mod adapter;
mod core;
mod port;
mod recovery;
mod settings;

#[cfg(test)]
mod test_support;

#[tokio::main(flavor = "multi_thread")]
pub async fn main() {
    let settings = Settings::new().expect("Error reading configuration");

    settings.monitoring.init().expect("Error initializing monitoring");

    let db_pool = settings.database.new_pool().await.expect("Error initializing database");

    let api = Arc::new(RecoveryApi::new(
        TelemetryRepository::new(db_pool),
        settings.telemetry.clone().into_registry(),
        settings.pricing.unit_prices(),
        settings.pricing.projection_days.clone(),
    ));

    tracing::info!("Starting HTTP server");

    settings
        .http_server
        .run_server(move |cfg| {
            cfg.service(adapter::api::routes(api.clone()))
                .route("/", web::get().to(adapter::api::index));
        })
        .await
        .expect("HTTP server execution failed");
}
