use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    /// Area the floating window may move within (the whole screen)
    pub desk_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Desk: the whole screen; the window may cover the hint bar
/// - Bottom bar: keybindings (last row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Space above the bar
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        desk_area: area,
        keybindings_area: chunks[1],
    }
}
