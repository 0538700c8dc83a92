use humansize::{format_size as human_format_size, BINARY};

/// Format a byte count in human-readable form (KiB, MiB, GiB)
pub fn format_size(bytes: u64) -> String {
    human_format_size(bytes, BINARY)
}

/// Format 1/5/15 minute load averages
pub fn format_load(load: (f64, f64, f64)) -> String {
    format!("{:.2} {:.2} {:.2}", load.0, load.1, load.2)
}

/// Format a percentage with one decimal
pub fn format_percent(value: f32) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert!(format_size(3 * 1024 * 1024).ends_with("MiB"));
    }

    #[test]
    fn test_format_load() {
        assert_eq!(format_load((0.5, 1.25, 2.0)), "0.50 1.25 2.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(42.04), "42.0%");
    }
}
