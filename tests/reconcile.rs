//! Reconciler semantics and the derived display formatting.

use statuspane::format;
use statuspane::{decode, DisplayMetrics, MetricsReconciler};

#[test]
fn snapshots_replace_wholesale_last_write_wins() {
    let s1 = decode(r#"{"memory_bytes":100,"cpu_absolute":50.0,"disk_bytes":10,
        "network":{"rx_bytes":1,"tx_bytes":2},"uptime":1000}"#)
    .unwrap();
    let s2 = decode(r#"{"cpu_absolute":1.0}"#).unwrap();

    let mut rec = MetricsReconciler::new();
    rec.apply(s1);
    rec.apply(s2);
    // No stale fields survive from s1; s2 is sparse and fully supersedes it.
    assert_eq!(rec.current(), s2);
    assert_eq!(rec.current().memory, 0);
}

#[test]
fn malformed_frame_leaves_held_record_unchanged() {
    let mut rec = MetricsReconciler::new();
    rec.apply_frame(r#"{"memory_bytes":42,"uptime":5000}"#);
    let before = rec.current();
    assert_eq!(before.memory, 42);

    rec.apply_frame("garbage {{{");
    assert_eq!(rec.current(), before);
    rec.apply_frame("");
    assert_eq!(rec.current(), before);
}

#[test]
fn reset_restores_zero_defaults() {
    let mut rec = MetricsReconciler::new();
    rec.apply_frame(r#"{"memory_bytes":42}"#);
    rec.reset();
    assert_eq!(rec.current(), DisplayMetrics::default());
}

#[test]
fn cpu_renders_two_decimals() {
    let m = DisplayMetrics {
        cpu: 12.345,
        ..Default::default()
    };
    assert_eq!(m.cpu_display(), "12.35%");
    assert_eq!(format::cpu_percent(0.0), "0.00%");
}

#[test]
fn byte_counts_render_binary_prefixed() {
    assert_eq!(format::human_size(0), "0 B");
    assert_eq!(format::human_size(1023), "1023 B");
    assert_eq!(format::human_size(1024), "1.00 KiB");
    assert_eq!(format::human_size(1_048_576), "1.00 MiB");
    assert_eq!(format::human_size(1_610_612_736), "1.50 GiB");

    let m = DisplayMetrics {
        memory: 1_048_576,
        ..Default::default()
    };
    assert_eq!(m.memory_display(), "1.00 MiB");
}

#[test]
fn zero_limit_means_unlimited() {
    assert_eq!(format::limit_display(0), "Unlimited");
    assert_eq!(format::limit_display(1024), "1.00 KiB");
    assert_eq!(format::cpu_limit_display(0), "Unlimited");
    assert_eq!(format::cpu_limit_display(150), "150%");
}

#[test]
fn uptime_converts_ms_to_seconds_and_hides_when_zero() {
    let stopped = DisplayMetrics::default();
    assert_eq!(stopped.uptime_display(), None);

    let m = DisplayMetrics {
        uptime: 65_000,
        ..Default::default()
    };
    assert_eq!(m.uptime_display().as_deref(), Some("1m 5s"));
}

#[test]
fn uptime_formatting_units() {
    assert_eq!(format::uptime(0), "0s");
    assert_eq!(format::uptime(59), "59s");
    assert_eq!(format::uptime(65), "1m 5s");
    assert_eq!(format::uptime(3600), "1h 0m 0s");
    assert_eq!(format::uptime(90_061), "1d 1h 1m 1s");
}
