use ratatui::{prelude::*, widgets::Gauge};

/// Color for a utilization percentage
pub fn usage_color(value: f64) -> Color {
    match value {
        v if v < 50.0 => Color::Cyan,
        v if v < 75.0 => Color::LightYellow,
        v if v < 90.0 => Color::LightRed,
        _ => Color::Red,
    }
}

/// Create a gauge with color based on value thresholds
pub fn colored_gauge<'a>(value: f64, label: String) -> Gauge<'a> {
    let value = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };

    Gauge::default()
        .gauge_style(Style::default().fg(usage_color(value)).bg(Color::Black))
        .ratio(value / 100.0)
        .label(label)
}

/// Dimmed one-line placeholder for a panel without data
pub fn placeholder(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

/// Red one-line notice for a panel whose probe failed
pub fn unavailable(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("⚠ {}", text),
        Style::default().fg(Color::LightRed),
    ))
}

/// "Label: value" line with a bold label
pub fn labelled<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_color_thresholds() {
        assert_eq!(usage_color(10.0), Color::Cyan);
        assert_eq!(usage_color(60.0), Color::LightYellow);
        assert_eq!(usage_color(80.0), Color::LightRed);
        assert_eq!(usage_color(99.0), Color::Red);
    }

    #[test]
    fn test_gauge_accepts_out_of_range_values() {
        // Gauge::ratio panics outside [0, 1]
        let _ = colored_gauge(120.0, "over".to_string());
        let _ = colored_gauge(-5.0, "under".to_string());
        let _ = colored_gauge(f64::NAN, "nan".to_string());
    }
}
