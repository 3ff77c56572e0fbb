#![allow(async_fn_in_trait)]

use anyhow::Result;

use crate::core::time::WindowBounds;
use crate::recovery::Sample;

/// The external telemetry store: an append-only, timestamp-ordered record
/// store queryable by device. This service only reads from it.
pub trait TelemetryStore {
    /// Most recent sample the device has ever reported, if any.
    async fn latest(&self, device: &str) -> Result<Option<Sample>>;

    /// All samples of the device within the window, ordered by time ascending.
    async fn range(&self, device: &str, bounds: &WindowBounds) -> Result<Vec<Sample>>;
}
