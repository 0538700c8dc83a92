use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::clock::{self, ClockReading, HourFormat};
use crate::core::{DashboardConfig, GeoRecord, MetricsSnapshot, NetworkSnapshot};
use crate::error::{DashError, Result as DashResult};

use super::event_handler::{map_key, DashboardEvent};
use super::render::render_ui;
use super::runtime::DashboardRuntime;

/// Redraw cadence; keeps the clock's seconds moving between metric ticks
const UI_FRAME: Duration = Duration::from_millis(250);
const PAGE_STEP: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    IpTools,
    DateTime,
    Browser,
    Monitor,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::IpTools,
        Tab::DateTime,
        Tab::Browser,
        Tab::Monitor,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::IpTools => "IP Tools",
            Tab::DateTime => "Date & Time",
            Tab::Browser => "Browser Control",
            Tab::Monitor => "System Monitor",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn offset(self, delta: isize) -> Tab {
        let len = Tab::ALL.len() as isize;
        let next = (self.index() as isize + delta).rem_euclid(len);
        Tab::ALL[next as usize]
    }
}

/// What a panel currently shows
#[derive(Debug, Clone)]
pub enum Panel<T> {
    Idle,
    Loading,
    Ready(T),
    Unavailable(String),
}

impl<T> Panel<T> {
    pub fn from_result(result: DashResult<T>) -> Self {
        match result {
            Ok(value) => Panel::Ready(value),
            Err(e) => Panel::Unavailable(e.notice()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Work the dashboard asks the runtime to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    RefreshNetwork,
    Locate(String),
    LaunchBrowser(Option<String>),
}

/// Results delivered back from the runtime
#[derive(Debug)]
pub enum DashboardUpdate {
    Metrics(DashResult<MetricsSnapshot>),
    Network(NetworkSnapshot),
    Geo {
        ip: String,
        result: DashResult<GeoRecord>,
    },
    BrowserLaunched {
        target: Option<String>,
        result: DashResult<()>,
    },
}

/// Dashboard application state
///
/// Everything the renderer needs lives here; there is no global UI state.
pub struct DashboardApp {
    pub config: DashboardConfig,
    pub selected_tab: Tab,
    pub metrics: Panel<MetricsSnapshot>,
    pub network: Panel<NetworkSnapshot>,
    pub geo: Panel<GeoRecord>,
    pub geo_target: Option<String>,
    pub ip_input: String,
    pub editing_ip: bool,
    pub timezones: Vec<&'static str>,
    pub selected_timezone: usize,
    pub hour_format: HourFormat,
    /// 0 is the bare browser, 1.. index into `config.quick_links`
    pub selected_link: usize,
    pub status: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl DashboardApp {
    pub fn new(config: DashboardConfig) -> Self {
        let timezones = clock::timezones();
        let selected_timezone = timezones
            .iter()
            .position(|tz| *tz == config.timezone)
            .or_else(|| timezones.iter().position(|tz| *tz == clock::DEFAULT_TIMEZONE))
            .unwrap_or(0);
        let hour_format = config.hour_format;

        Self {
            config,
            selected_tab: Tab::Dashboard,
            metrics: Panel::Loading,
            network: Panel::Idle,
            geo: Panel::Idle,
            geo_target: None,
            ip_input: String::new(),
            editing_ip: false,
            timezones,
            selected_timezone,
            hour_format,
            selected_link: 0,
            status: None,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn timezone(&self) -> &str {
        self.timezones
            .get(self.selected_timezone)
            .copied()
            .unwrap_or(clock::DEFAULT_TIMEZONE)
    }

    pub fn clock(&self) -> DashResult<ClockReading> {
        clock::now(self.timezone(), self.hour_format)
    }

    /// IP to geolocate: typed input, else the last public IP, else the
    /// configured fallback. Never empty.
    pub fn geo_query(&self) -> String {
        let typed = self.ip_input.trim();
        if !typed.is_empty() {
            return typed.to_string();
        }

        match self.network.ready() {
            Some(snapshot) => snapshot.public_ip_or(&self.config.fallback_ip).to_string(),
            None => self.config.fallback_ip.clone(),
        }
    }

    /// Number of entries in the browser panel (bare launch + quick links)
    pub fn link_count(&self) -> usize {
        self.config.quick_links.len() + 1
    }

    fn selected_browser_target(&self) -> Option<String> {
        match self.selected_link {
            0 => None,
            i => self.config.quick_links.get(i - 1).map(|l| l.url.clone()),
        }
    }

    /// Apply an event; returns work for the runtime when there is any
    pub fn handle_event(&mut self, event: DashboardEvent) -> Option<AppAction> {
        if self.show_help && event != DashboardEvent::None {
            self.show_help = false;
            self.should_quit = event == DashboardEvent::Quit;
            return None;
        }

        match event {
            DashboardEvent::Quit => self.should_quit = true,
            DashboardEvent::ToggleHelp => self.show_help = !self.show_help,
            DashboardEvent::NextTab => self.selected_tab = self.selected_tab.offset(1),
            DashboardEvent::PrevTab => self.selected_tab = self.selected_tab.offset(-1),
            DashboardEvent::SelectTab(i) => {
                if let Some(tab) = Tab::ALL.get(i) {
                    self.selected_tab = *tab;
                }
            }
            DashboardEvent::Up => self.move_selection(-1),
            DashboardEvent::Down => self.move_selection(1),
            DashboardEvent::PageUp => self.move_selection(-(PAGE_STEP as isize)),
            DashboardEvent::PageDown => self.move_selection(PAGE_STEP as isize),
            DashboardEvent::ToggleHourFormat => self.hour_format = self.hour_format.toggled(),
            DashboardEvent::RefreshNetwork => {
                self.network = Panel::Loading;
                return Some(AppAction::RefreshNetwork);
            }
            DashboardEvent::StartEditing => {
                self.selected_tab = Tab::IpTools;
                self.editing_ip = true;
            }
            DashboardEvent::Input(c) => {
                if self.editing_ip {
                    self.ip_input.push(c);
                }
            }
            DashboardEvent::Backspace => {
                self.ip_input.pop();
            }
            DashboardEvent::CancelEditing => self.editing_ip = false,
            DashboardEvent::Activate => return self.activate(),
            DashboardEvent::None => {}
        }
        None
    }

    fn activate(&mut self) -> Option<AppAction> {
        if self.editing_ip {
            self.editing_ip = false;
            return Some(self.start_locate());
        }

        match self.selected_tab {
            Tab::IpTools => Some(self.start_locate()),
            Tab::Browser => {
                let target = self.selected_browser_target();
                self.status = Some(match &target {
                    Some(url) => format!("Opening {}...", url),
                    None => format!("Starting {}...", self.config.browser_command),
                });
                Some(AppAction::LaunchBrowser(target))
            }
            _ => None,
        }
    }

    fn start_locate(&mut self) -> AppAction {
        let ip = self.geo_query();
        self.geo = Panel::Loading;
        self.geo_target = Some(ip.clone());
        AppAction::Locate(ip)
    }

    fn move_selection(&mut self, delta: isize) {
        match self.selected_tab {
            Tab::DateTime => {
                self.selected_timezone = step(self.selected_timezone, delta, self.timezones.len());
            }
            Tab::Browser => {
                self.selected_link = step(self.selected_link, delta, self.link_count());
            }
            _ => {}
        }
    }

    /// Merge a result from the runtime
    pub fn apply_update(&mut self, update: DashboardUpdate) {
        match update {
            DashboardUpdate::Metrics(result) => {
                if let Err(e) = &result {
                    log::debug!("Metrics sample failed: {}", e);
                }
                self.metrics = Panel::from_result(result);
            }
            DashboardUpdate::Network(snapshot) => self.network = Panel::Ready(snapshot),
            DashboardUpdate::Geo { ip, result } => {
                // Ignore answers to a lookup that has since been replaced
                if self.geo_target.as_deref() == Some(ip.as_str()) {
                    self.geo = Panel::from_result(result);
                }
            }
            DashboardUpdate::BrowserLaunched { target, result } => {
                let what = target.unwrap_or_else(|| self.config.browser_command.clone());
                self.status = Some(match result {
                    Ok(()) => format!("Launched {}", what),
                    Err(e) => e.to_string(),
                });
            }
        }
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).clamp(0, len as isize - 1) as usize
}

/// Run the dashboard TUI until the user quits
pub fn run_dashboard_app(config: DashboardConfig) -> Result<()> {
    let mut runtime =
        DashboardRuntime::new(&config).context("Failed to start background runtime")?;
    let mut app = DashboardApp::new(config);

    if let Some(action) = app.handle_event(DashboardEvent::RefreshNetwork) {
        runtime.dispatch(action);
    }

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            runtime.shutdown();
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut runtime);

    // Abandon in-flight lookups before anything below can fail
    runtime.shutdown();

    // Restore terminal even when the loop failed
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
    runtime: &mut DashboardRuntime,
) -> Result<()> {
    loop {
        for update in runtime.drain() {
            app.apply_update(update);
        }

        terminal
            .draw(|frame| render_ui(frame, app))
            .map_err(|e| DashError::tui(e.to_string()))?;

        if event::poll(UI_FRAME).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let dashboard_event = map_key(key, app.editing_ip);
                    if let Some(action) = app.handle_event(dashboard_event) {
                        runtime.dispatch(action);
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
