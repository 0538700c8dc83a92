use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Tabs, Wrap},
};

use crate::core::{MetricsSnapshot, NetworkSnapshot};
use crate::ui::formatters::{format_load, format_size};

use super::app::{DashboardApp, Panel, Tab};
use super::widgets::{colored_gauge, labelled, placeholder, unavailable};

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs with live status
            Constraint::Min(8),    // Selected tab
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.selected_tab {
        Tab::Dashboard => render_dashboard_tab(frame, chunks[1], app),
        Tab::IpTools => render_ip_tools_tab(frame, chunks[1], app),
        Tab::DateTime => render_date_time_tab(frame, chunks[1], app),
        Tab::Browser => render_browser_tab(frame, chunks[1], app),
        Tab::Monitor => render_monitor_tab(frame, chunks[1], app),
    }

    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Tabs plus the CPU/memory status line in the border
fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let status = match &app.metrics {
        Panel::Ready(m) => format!(
            " CPU {:.1}% │ Memory {:.1}% │ Refresh: {}ms ",
            m.cpu_percent, m.memory_percent, app.config.refresh_interval_ms
        ),
        Panel::Unavailable(_) => " CPU/Memory unavailable ".to_string(),
        Panel::Loading | Panel::Idle => " Sampling... ".to_string(),
    };

    let block = Block::default()
        .title(" sysdash ")
        .title(Line::from(status).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let titles: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(block)
        .select(app.selected_tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_dashboard_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(rows[0]);

    render_network_overview(frame, columns[0], app);
    render_clock_card(frame, columns[1], app, false);
    render_date_card(frame, columns[2], app);
    render_gauges(frame, rows[1], &app.metrics);
}

fn render_network_overview(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .title(" Network Overview ")
        .borders(Borders::ALL);

    let lines = match &app.network {
        Panel::Ready(snapshot) => network_lines(snapshot),
        Panel::Loading => vec![placeholder("Collecting network info...")],
        Panel::Idle => vec![placeholder("Press r to collect network info")],
        Panel::Unavailable(msg) => vec![unavailable(msg)],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn network_lines(snapshot: &NetworkSnapshot) -> Vec<Line<'static>> {
    let mut lines = vec![match &snapshot.public_ip_error {
        Some(err) => Line::from(vec![
            Span::styled("Public IP: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(err.clone(), Style::default().fg(Color::LightRed)),
        ]),
        None => Line::from(vec![
            Span::styled("Public IP: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(snapshot.public_ip.clone(), Style::default().fg(Color::Green)),
        ]),
    }];

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Local Interfaces:",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    if snapshot.interfaces.is_empty() {
        lines.push(placeholder("  no IPv4 addresses configured"));
    }
    for iface in &snapshot.interfaces {
        lines.push(Line::from(format!("  {:<12} {}", iface.name, iface.cidr())));
    }

    lines
}

fn render_clock_card(frame: &mut Frame, area: Rect, app: &DashboardApp, large: bool) {
    let block = Block::default()
        .title(format!(" Current Time │ {} ", app.timezone()))
        .borders(Borders::ALL);

    let line = match app.clock() {
        Ok(reading) => Line::from(Span::styled(
            reading.formatted,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Err(e) => unavailable(&e.notice()),
    };

    let padding = if large { area.height.saturating_sub(3) / 2 } else { 1 };
    let mut lines = vec![Line::from(""); padding as usize];
    lines.push(line);
    if large {
        lines.push(Line::from(""));
        lines.push(placeholder(&format!("{} │ f: switch format", app.hour_format)));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_date_card(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .title(" Current Date ")
        .borders(Borders::ALL);

    let line = match app.clock() {
        Ok(reading) => Line::from(Span::styled(
            reading.date_line,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Err(e) => unavailable(&e.notice()),
    };

    let paragraph = Paragraph::new(vec![Line::from(""), line])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_gauges(frame: &mut Frame, area: Rect, metrics: &Panel<MetricsSnapshot>) {
    let block = Block::default()
        .title(" Live System Metrics ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let snapshot = match metrics {
        Panel::Ready(snapshot) => snapshot,
        Panel::Unavailable(msg) => {
            frame.render_widget(Paragraph::new(unavailable(msg)), inner);
            return;
        }
        Panel::Loading | Panel::Idle => {
            frame.render_widget(Paragraph::new(placeholder("Sampling...")), inner);
            return;
        }
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        colored_gauge(
            snapshot.cpu_percent as f64,
            format!("CPU Usage: {:.1}%", snapshot.cpu_percent),
        ),
        rows[0],
    );
    frame.render_widget(
        colored_gauge(
            snapshot.memory_percent as f64,
            format!(
                "Memory Usage: {:.1}% ({} / {})",
                snapshot.memory_percent,
                format_size(snapshot.memory_used_bytes),
                format_size(snapshot.memory_total_bytes)
            ),
        ),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(labelled("Load average (1/5/15 min)", format_load(snapshot.load_average))),
        rows[2],
    );
}

fn render_ip_tools_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_interfaces_table(frame, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(columns[1]);

    render_ip_input(frame, right[0], app);
    render_geo_results(frame, right[1], app);
}

fn render_interfaces_table(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let block = Block::default()
        .title(" Network Details │ r: refresh ")
        .borders(Borders::ALL);

    let snapshot = match &app.network {
        Panel::Ready(snapshot) => snapshot,
        Panel::Loading => {
            frame.render_widget(Paragraph::new(placeholder("Collecting...")).block(block), area);
            return;
        }
        Panel::Idle => {
            frame.render_widget(Paragraph::new(placeholder("Press r to collect")).block(block), area);
            return;
        }
        Panel::Unavailable(msg) => {
            frame.render_widget(Paragraph::new(unavailable(msg)).block(block), area);
            return;
        }
    };

    let rows: Vec<Row> = snapshot
        .interfaces
        .iter()
        .enumerate()
        .map(|(i, iface)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(iface.name.clone()),
                Cell::from(iface.cidr()),
            ])
        })
        .collect();

    let header = Row::new(vec!["#", "Interface", "IPv4"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Percentage(40),
            Constraint::Percentage(50),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn render_ip_input(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let (title, style) = if app.editing_ip {
        (
            " IP Address │ Enter: locate │ Esc: done ",
            Style::default().fg(Color::Yellow),
        )
    } else {
        (" IP Address │ e: edit │ Enter: locate ", Style::default())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style);

    let content = if app.ip_input.is_empty() && !app.editing_ip {
        placeholder(&format!("blank → {}", app.geo_query()))
    } else if app.editing_ip {
        Line::from(format!("{}▏", app.ip_input))
    } else {
        Line::from(app.ip_input.clone())
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_geo_results(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let title = match &app.geo_target {
        Some(ip) => format!(" Geolocation │ {} ", ip),
        None => " Geolocation ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let lines = match &app.geo {
        Panel::Idle => vec![placeholder("Press Enter to locate")],
        Panel::Loading => vec![placeholder("Fetching location data...")],
        Panel::Unavailable(msg) => vec![unavailable(msg)],
        Panel::Ready(record) => {
            let mut lines = vec![
                labelled("Location", record.place()),
                labelled(
                    "Coordinates",
                    format!("{:.4}, {:.4}", record.latitude, record.longitude),
                ),
                Line::from(""),
            ];
            lines.extend(
                record
                    .fields
                    .iter()
                    .map(|(key, value)| Line::from(format!("{:<14} {}", key, value))),
            );
            lines
        }
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_date_time_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let items: Vec<ListItem> = app
        .timezones
        .iter()
        .map(|tz| ListItem::new(*tz))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Timezone ({}) ", app.timezones.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected_timezone));
    frame.render_stateful_widget(list, columns[0], &mut state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(4)])
        .split(columns[1]);

    render_clock_card(frame, right[0], app, true);
    render_date_card(frame, right[1], app);
}

fn render_browser_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let mut items = vec![ListItem::new(format!(
        "Launch {}",
        app.config.browser_command
    ))];
    items.extend(
        app.config
            .quick_links
            .iter()
            .map(|link| ListItem::new(format!("{}  ({})", link.label, link.url))),
    );

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Controls & Quick Links │ Enter: open ")
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected_link));
    frame.render_stateful_widget(list, rows[0], &mut state);

    let status = match &app.status {
        Some(status) => Line::from(status.clone()),
        None => placeholder("Nothing launched yet"),
    };
    frame.render_widget(
        Paragraph::new(status).block(Block::default().title(" Status ").borders(Borders::ALL)),
        rows[1],
    );
}

fn render_monitor_tab(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_gauges(frame, rows[0], &app.metrics);

    let lines = match &app.metrics {
        Panel::Ready(m) => vec![
            labelled("Sampled at", m.taken_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            labelled(
                "Memory",
                format!(
                    "{} used of {}",
                    format_size(m.memory_used_bytes),
                    format_size(m.memory_total_bytes)
                ),
            ),
            labelled("Load average", format_load(m.load_average)),
        ],
        _ => vec![placeholder("No sample yet")],
    };

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(format!(" Details │ every {}ms ", app.config.refresh_interval_ms))
                .borders(Borders::ALL),
        ),
        rows[1],
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let help = if app.editing_ip {
        " Type an IP │ Enter: locate │ Esc: stop editing │ Ctrl+C: quit ".to_string()
    } else {
        " q: Quit │ ?: Help │ Tab/1-5: Switch tab │ r: Refresh network │ f: 12h/24h ".to_string()
    };
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    sysdash - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc       Quit the application
    ? / h         Toggle this help screen
    Tab / 1-5     Switch tab
    r             Refresh network info
    e             Edit the IP to geolocate
    Enter / l     Locate IP / open browser entry
    Up / Down     Select timezone or link
    PgUp / PgDn   Jump through timezones
    f             Toggle 12/24-hour clock

    Press any key to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    // Center the help popup
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
