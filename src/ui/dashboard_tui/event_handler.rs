use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events that can occur in the dashboard TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Switch to next tab
    NextTab,
    /// Switch to previous tab
    PrevTab,
    /// Jump straight to a tab by index
    SelectTab(usize),
    /// Move the current list selection
    Up,
    Down,
    PageUp,
    PageDown,
    /// Enter: locate on IP Tools, launch on Browser Control
    Activate,
    /// Re-run the network probe
    RefreshNetwork,
    ToggleHourFormat,
    /// Start typing an IP for geolocation
    StartEditing,
    /// A character typed while editing
    Input(char),
    Backspace,
    /// Leave editing without locating
    CancelEditing,
    /// No action
    None,
}

/// Translate a key press. While the IP input is being edited, printable
/// keys are text rather than shortcuts.
pub fn map_key(key: KeyEvent, editing: bool) -> DashboardEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return DashboardEvent::Quit;
    }

    if editing {
        return match key.code {
            KeyCode::Enter => DashboardEvent::Activate,
            KeyCode::Esc => DashboardEvent::CancelEditing,
            KeyCode::Backspace => DashboardEvent::Backspace,
            KeyCode::Char(c) if !c.is_control() => DashboardEvent::Input(c),
            _ => DashboardEvent::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => DashboardEvent::Quit,
        KeyCode::Char('?') | KeyCode::Char('h') => DashboardEvent::ToggleHelp,
        KeyCode::Tab | KeyCode::Right => DashboardEvent::NextTab,
        KeyCode::BackTab | KeyCode::Left => DashboardEvent::PrevTab,
        KeyCode::Char(c @ '1'..='5') => DashboardEvent::SelectTab(c as usize - '1' as usize),
        KeyCode::Up | KeyCode::Char('k') => DashboardEvent::Up,
        KeyCode::Down | KeyCode::Char('j') => DashboardEvent::Down,
        KeyCode::PageUp => DashboardEvent::PageUp,
        KeyCode::PageDown => DashboardEvent::PageDown,
        KeyCode::Enter | KeyCode::Char('l') => DashboardEvent::Activate,
        KeyCode::Char('r') => DashboardEvent::RefreshNetwork,
        KeyCode::Char('f') => DashboardEvent::ToggleHourFormat,
        KeyCode::Char('e') | KeyCode::Char('i') => DashboardEvent::StartEditing,
        _ => DashboardEvent::None,
    }
}
