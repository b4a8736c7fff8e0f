//! Display formatting helpers: human-readable sizes, percentages, uptime.

/// Binary-prefixed size string with threshold-based unit selection.
pub fn human_size(b: u64) -> String {
    const K: f64 = 1024.0;
    let b = b as f64;
    if b < K {
        return format!("{b:.0} B");
    }
    let kib = b / K;
    if kib < K {
        return format!("{kib:.2} KiB");
    }
    let mib = kib / K;
    if mib < K {
        return format!("{mib:.2} MiB");
    }
    let gib = mib / K;
    if gib < K {
        return format!("{gib:.2} GiB");
    }
    let tib = gib / K;
    format!("{tib:.2} TiB")
}

/// Byte-count limits: 0 means no cap, shown as "Unlimited" rather than "0 B".
pub fn limit_display(bytes: u64) -> String {
    if bytes == 0 {
        "Unlimited".into()
    } else {
        human_size(bytes)
    }
}

/// Whole-percent CPU cap; 0 means no cap.
pub fn cpu_limit_display(pct: u32) -> String {
    if pct == 0 {
        "Unlimited".into()
    } else {
        format!("{pct}%")
    }
}

/// CPU usage fixed to two decimal places.
pub fn cpu_percent(v: f64) -> String {
    format!("{v:.2}%")
}

/// Uptime given in whole seconds, largest unit first. Leading zero units
/// are skipped; inner zeros keep their place ("1h 0m 5s").
pub fn uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let mins = (secs % 3_600) / 60;
    let s = secs % 60;
    let mut out = String::new();
    if days > 0 {
        out.push_str(&format!("{days}d "));
    }
    if hours > 0 || days > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if mins > 0 || hours > 0 || days > 0 {
        out.push_str(&format!("{mins}m "));
    }
    out.push_str(&format!("{s}s"));
    out
}

/// IPv6 literals render bracketed so `host:port` stays readable.
pub fn ip_display(ip: &str) -> String {
    if ip.contains(':') {
        format!("[{ip}]")
    } else {
        ip.to_string()
    }
}
