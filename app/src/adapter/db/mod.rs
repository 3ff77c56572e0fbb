use std::collections::BTreeMap;

use anyhow::{Context as _, Result};
use sqlx::PgPool;

use crate::core::time::WindowBounds;
use crate::core::unit::{CubicMetersPerHour, DegreeCelsius};
use crate::port::TelemetryStore;
use crate::recovery::Sample;

#[derive(Debug, Clone)]
pub struct TelemetryRepository {
    pool: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct SampleRow {
    device: String,
    time: chrono::DateTime<chrono::Local>,
    temperatures: serde_json::Value,
    flow: f64,
}

impl TelemetryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TelemetryStore for TelemetryRepository {
    async fn latest(&self, device: &str) -> Result<Option<Sample>> {
        let row = sqlx::query_as::<_, SampleRow>(
            r#"SELECT device, time, temperatures, flow
                FROM telemetry_sample
                WHERE device = $1
                ORDER BY time DESC
                LIMIT 1"#,
        )
        .bind(device)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Error fetching latest sample for {device}"))?;

        Ok(row.and_then(into_sample))
    }

    async fn range(&self, device: &str, bounds: &WindowBounds) -> Result<Vec<Sample>> {
        //rolling windows are open at the start, calendar windows closed
        let query = if bounds.includes_start {
            r#"SELECT device, time, temperatures, flow
                FROM telemetry_sample
                WHERE device = $1 AND time >= $2 AND time <= $3
                ORDER BY time ASC"#
        } else {
            r#"SELECT device, time, temperatures, flow
                FROM telemetry_sample
                WHERE device = $1 AND time > $2 AND time <= $3
                ORDER BY time ASC"#
        };

        let rows = sqlx::query_as::<_, SampleRow>(query)
            .bind(device)
            .bind(bounds.start.into_db())
            .bind(bounds.end.into_db())
            .fetch_all(&self.pool)
            .await
            .with_context(|| {
                format!(
                    "Error fetching samples for {device} between {} and {}",
                    bounds.start, bounds.end
                )
            })?;

        Ok(rows.into_iter().filter_map(into_sample).collect())
    }
}

fn into_sample(row: SampleRow) -> Option<Sample> {
    match serde_json::from_value::<BTreeMap<String, f64>>(row.temperatures) {
        Ok(temperatures) => Some(Sample {
            device: row.device,
            time: row.time.into(),
            temperatures: temperatures
                .into_iter()
                .map(|(channel, value)| (channel, DegreeCelsius(value)))
                .collect(),
            flow: CubicMetersPerHour(row.flow),
        }),
        Err(e) => {
            tracing::warn!("Received malformed temperature record for {}: {:?}", row.device, e);
            None
        }
    }
}
