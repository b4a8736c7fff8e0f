//! Last-known metrics record for one pane, plus its derived display values.

use tracing::debug;

use crate::format;
use crate::snapshot;

/// The six fields the pane renders. Byte counts are raw totals, `cpu` is an
/// absolute percentage (not per-core normalized), and `uptime` is in
/// milliseconds, staying 0 until the managed process has started.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayMetrics {
    pub memory: u64,
    pub cpu: f64,
    pub disk: u64,
    pub uptime: u64,
    pub rx: u64,
    pub tx: u64,
}

impl DisplayMetrics {
    pub fn cpu_display(&self) -> String {
        format::cpu_percent(self.cpu)
    }

    pub fn memory_display(&self) -> String {
        format::human_size(self.memory)
    }

    pub fn disk_display(&self) -> String {
        format::human_size(self.disk)
    }

    pub fn rx_display(&self) -> String {
        format::human_size(self.rx)
    }

    pub fn tx_display(&self) -> String {
        format::human_size(self.tx)
    }

    /// Uptime rendered from milliseconds. `None` while the process has not
    /// started; the pane hides the field instead of showing "0s".
    pub fn uptime_display(&self) -> Option<String> {
        if self.uptime == 0 {
            None
        } else {
            Some(format::uptime(self.uptime / 1000))
        }
    }
}

/// Holds the most recently decoded snapshot for one mounted view. Owned by
/// the view instance, never shared across views.
#[derive(Debug, Default)]
pub struct MetricsReconciler {
    held: DisplayMetrics,
}

impl MetricsReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest successfully decoded snapshot; all zeros until one arrives.
    pub fn current(&self) -> DisplayMetrics {
        self.held
    }

    /// Replace the held record wholesale. The producer always sends complete
    /// snapshots, never deltas, so there is no field-level merging.
    pub fn apply(&mut self, decoded: DisplayMetrics) {
        self.held = decoded;
    }

    /// Back to all-zero defaults. Used when the pane detaches from a server
    /// or the channel instance is replaced.
    pub fn reset(&mut self) {
        self.held = DisplayMetrics::default();
    }

    /// Decode one raw frame and apply it. A malformed frame is dropped and
    /// the held record stays untouched.
    pub fn apply_frame(&mut self, raw: &str) {
        match snapshot::decode(raw) {
            Ok(m) => self.apply(m),
            Err(err) => debug!("dropping stats frame: {err}"),
        }
    }
}
