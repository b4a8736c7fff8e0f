//! Types that mirror the supervisor's stats JSON schema, plus the decoder.

use serde::Deserialize;
use thiserror::Error;

use crate::metrics::DisplayMetrics;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed stats frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

// Wire shape of one snapshot. Every numeric field is optional so a sparse
// frame still decodes; coercion to zero happens in `decode`.
#[derive(Debug, Deserialize)]
struct StatsFrame {
    memory_bytes: Option<u64>,
    cpu_absolute: Option<f64>,
    disk_bytes: Option<u64>,
    network: Option<NetworkCounters>,
    uptime: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct NetworkCounters {
    rx_bytes: Option<u64>,
    tx_bytes: Option<u64>,
}

/// Parse one raw stats frame into a [`DisplayMetrics`] record.
///
/// Missing or null numeric fields default to 0 rather than propagating an
/// absent value into the formatters. Malformed frames return an error and
/// are expected to be dropped by the caller; bad telemetry is a recoverable
/// condition, so this never panics on any input.
pub fn decode(raw: &str) -> Result<DisplayMetrics, DecodeError> {
    let frame: StatsFrame = serde_json::from_str(raw)?;
    let network = frame.network.unwrap_or_default();
    Ok(DisplayMetrics {
        memory: frame.memory_bytes.unwrap_or(0),
        cpu: frame.cpu_absolute.unwrap_or(0.0),
        disk: frame.disk_bytes.unwrap_or(0),
        uptime: frame.uptime.unwrap_or(0),
        rx: network.rx_bytes.unwrap_or(0),
        tx: network.tx_bytes.unwrap_or(0),
    })
}
