use std::time::Duration;

use sysdash::core::{HostMetricsProbe, SampleMode};

#[test]
fn test_windowed_sample_in_range() {
    let mut probe = HostMetricsProbe::new();
    let snapshot = probe
        .sample(SampleMode::Windowed(Duration::from_millis(200)))
        .unwrap();

    assert!((0.0..=100.0).contains(&snapshot.cpu_percent));
    assert!((0.0..=100.0).contains(&snapshot.memory_percent));
    assert!(snapshot.memory_total_bytes > 0);
    assert!(snapshot.memory_used_bytes <= snapshot.memory_total_bytes);
}

#[test]
fn test_back_to_back_samples() {
    let mut probe = HostMetricsProbe::new();

    let first = probe.sample(SampleMode::Instant).unwrap();
    let second = probe.sample(SampleMode::Instant).unwrap();

    assert!((0.0..=100.0).contains(&first.cpu_percent));
    assert!((0.0..=100.0).contains(&second.cpu_percent));
    assert!(second.taken_at >= first.taken_at);
}

#[cfg(unix)]
#[test]
fn test_load_average_non_negative() {
    let mut probe = HostMetricsProbe::new();
    let snapshot = probe.sample(SampleMode::Instant).unwrap();

    let (one, five, fifteen) = snapshot.load_average;
    assert!(one >= 0.0 && five >= 0.0 && fifteen >= 0.0);
}

#[test]
fn test_snapshot_serializes() {
    let mut probe = HostMetricsProbe::new();
    let snapshot = probe.sample(SampleMode::Instant).unwrap();

    let value = serde_json::to_value(&snapshot).unwrap();
    assert!(value.get("cpu_percent").is_some());
    assert!(value.get("load_average").is_some());
}
