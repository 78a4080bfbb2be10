use crate::app::AppState;
use crate::domain::{Tab, TimerAction, UiMode};
use crate::ui::window::TitleButton;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key, now),
        UiMode::AddingTask => handle_input_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    // Window movement (Shift+arrows)
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        let delta = match key.code {
            KeyCode::Left => Some((-1, 0)),
            KeyCode::Right => Some((1, 0)),
            KeyCode::Up => Some((0, -1)),
            KeyCode::Down => Some((0, 1)),
            _ => None,
        };
        if let Some((dx, dy)) = delta {
            app.move_window(dx, dy);
            return Ok(false);
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),

        // Tabs
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char('1') => app.active_tab = Tab::Timer,
        KeyCode::Char('2') => app.active_tab = Tab::Tasks,
        KeyCode::Char('3') => app.active_tab = Tab::Stats,

        // Window chrome
        KeyCode::Char('p') => app.window.toggle_pinned(),
        KeyCode::Char('m') => app.toggle_minimized(),

        // Timer controls work from every tab
        KeyCode::Char(' ') => {
            app.dispatch(TimerAction::Toggle, now);
        }
        KeyCode::Char('r') => {
            app.dispatch(TimerAction::Reset, now);
        }

        _ => match app.active_tab {
            Tab::Timer => handle_timer_tab(app, key, now),
            Tab::Tasks => handle_tasks_tab(app, key),
            Tab::Stats => handle_stats_tab(app, key),
        },
    }

    Ok(false)
}

fn handle_timer_tab(app: &mut AppState, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Up => app.move_pick_cursor_up(),
        KeyCode::Down => app.move_pick_cursor_down(),
        KeyCode::Enter => app.select_task_at_cursor(now),
        KeyCode::Char('x') => {
            app.dispatch(TimerAction::DeselectTask, now);
        }
        _ => {}
    }
}

fn handle_tasks_tab(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_task_cursor_up(),
        KeyCode::Down => app.move_task_cursor_down(),
        KeyCode::Enter => app.toggle_task_at_cursor(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.start_add_task(),
        _ => {}
    }
}

fn handle_stats_tab(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.scroll_stats_up(),
        KeyCode::Down => app.scroll_stats_down(),
        _ => {}
    }
}

/// Handle keys while typing a new task
fn handle_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle mouse events: title bar controls, and dragging the window
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match app.window.button_at(mouse.column, mouse.row, app.viewport) {
                Some(TitleButton::Pin) => app.window.toggle_pinned(),
                Some(TitleButton::Minimize) => app.toggle_minimized(),
                None => {
                    app.window.begin_drag(mouse.column, mouse.row);
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let viewport = app.viewport;
            app.window.drag_to(mouse.column, mouse.row, viewport);
        }
        MouseEventKind::Up(MouseButton::Left) => app.window.end_drag(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TimerPhase};
    use crate::persistence::{AppConfig, PersistedState};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn create_test_app() -> AppState {
        let state = PersistedState {
            tasks: vec![Task::new("Write report".to_string())],
            sessions: Vec::new(),
        };
        let config = AppConfig {
            notifications: false,
            ..AppConfig::default()
        };
        let mut app = AppState::new(state, config);
        app.set_viewport(Rect::new(0, 0, 100, 40));
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        let now = Instant::now();
        assert!(handle_key(&mut app, key(KeyCode::Char('q')), now).unwrap());
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now
        )
        .unwrap());
    }

    #[test]
    fn test_select_and_start_from_timer_tab() {
        let mut app = create_test_app();
        let now = Instant::now();

        // Space does nothing without a task
        handle_key(&mut app, key(KeyCode::Char(' ')), now).unwrap();
        assert_eq!(app.timer.phase(), TimerPhase::Idle);

        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        assert_eq!(app.timer.selected_task(), Some("Write report"));

        handle_key(&mut app, key(KeyCode::Char(' ')), now).unwrap();
        assert_eq!(app.timer.phase(), TimerPhase::Running);

        handle_key(&mut app, key(KeyCode::Char('x')), now).unwrap();
        assert_eq!(app.timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn test_add_task_via_keys() {
        let mut app = create_test_app();
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Char('2')), now).unwrap();
        handle_key(&mut app, key(KeyCode::Char('a')), now).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        // 'q' is text while typing
        for c in "quiz".chars() {
            assert!(!handle_key(&mut app, key(KeyCode::Char(c)), now).unwrap());
        }
        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();

        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.tasks.tasks()[1].text, "quiz");
        assert!(app.needs_save);
    }

    #[test]
    fn test_toggle_task_via_keys() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.active_tab = Tab::Tasks;
        handle_key(&mut app, key(KeyCode::Enter), now).unwrap();
        assert!(app.tasks.tasks()[0].completed);
    }

    #[test]
    fn test_shift_arrows_move_window() {
        let mut app = create_test_app();
        let now = Instant::now();
        let start = (app.window.x, app.window.y);

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT);
        handle_key(&mut app, left, now).unwrap();
        assert_eq!(app.window.x, start.0 - 1);

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT);
        handle_key(&mut app, down, now).unwrap();
        assert_eq!(app.window.y, start.1 + 1);
    }

    #[test]
    fn test_click_on_controls_toggles_instead_of_dragging() {
        let mut app = create_test_app();
        let right = app.window.x + app.window.width;
        let y = app.window.y;

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), right - 5, y));
        assert!(!app.window.pinned);
        assert!(!app.window.is_dragging());

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), right - 3, y));
        assert!(app.window.minimized);
        assert!(!app.window.is_dragging());

        // Dragging from a control does not move the window
        let start = (app.window.x, app.window.y);
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 0, 20));
        assert_eq!((app.window.x, app.window.y), start);
    }

    #[test]
    fn test_mouse_drag_clamps() {
        let mut app = create_test_app();
        let (x, y) = (app.window.x, app.window.y);

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), x + 2, y));
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 0, 100));
        assert_eq!(app.window.x, 0);
        assert_eq!(app.window.y, 40 - app.window.height);

        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert!(!app.window.is_dragging());
    }
}
