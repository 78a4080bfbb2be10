pub mod keybindings;
pub mod layout;
pub mod stats_pane;
pub mod styles;
pub mod tasks_pane;
pub mod timer_pane;
pub mod window;

use crate::app::AppState;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use window::render_window;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    app.set_viewport(layout.desk_area);
    let window_area = app.window.rect(layout.desk_area);

    // A pinned window stays above the hint bar; an unpinned one goes under it
    if app.window.pinned {
        render_keybindings(f, app, layout.keybindings_area);
        render_window(f, app, window_area);
    } else {
        render_window(f, app, window_area);
        render_keybindings(f, app, layout.keybindings_area);
    }
}
