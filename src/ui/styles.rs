use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Running countdown style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Stopped clock face
pub fn clock_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border of a pinned (always on top) window
pub fn pinned_border_style() -> Style {
    Style::default().fg(Color::LightBlue)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Text being typed
pub fn input_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Countdown progress bar
pub fn gauge_style() -> Style {
    Style::default().fg(Color::Blue).bg(Color::DarkGray)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

// Chart series colours

pub fn hours_style() -> Style {
    Style::default().fg(Color::LightMagenta)
}

pub fn tasks_style() -> Style {
    Style::default().fg(Color::LightGreen)
}

pub fn efficiency_style() -> Style {
    Style::default().fg(Color::Yellow)
}
