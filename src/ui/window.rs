use crate::app::AppState;
use crate::domain::{format_clock, Tab, TimerPhase};
use crate::ui::stats_pane::render_stats_pane;
use crate::ui::styles::{
    border_style, hint_style, pinned_border_style, running_style, selected_style, title_style,
};
use crate::ui::tasks_pane::render_tasks_pane;
use crate::ui::timer_pane::render_timer_pane;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

pub const WINDOW_WIDTH: u16 = 56;
pub const WINDOW_HEIGHT: u16 = 24;
/// Title bar plus one summary line
pub const MINIMIZED_HEIGHT: u16 = 3;

/// Columns from the right edge of the window to each title bar control.
/// The controls title " ◆ ▁ " is right-aligned against the top-right corner.
const PIN_FROM_RIGHT: u16 = 5;
const MINIMIZE_FROM_RIGHT: u16 = 3;

/// Clickable control on the title bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleButton {
    Pin,
    Minimize,
}

/// Position and chrome state of the floating window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingWindow {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub pinned: bool,
    pub minimized: bool,
    /// Pointer offset inside the window captured at mouse-down
    drag_offset: Option<(u16, u16)>,
}

impl FloatingWindow {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
            pinned: true,
            minimized: false,
            drag_offset: None,
        }
    }

    /// Top-right corner, one row down
    pub fn place_default(&mut self, bounds: Rect) {
        self.x = bounds.x + bounds.width.saturating_sub(self.width);
        self.y = bounds.y + 1;
        self.clamp_into(bounds);
    }

    /// Height currently occupied on screen
    pub fn visible_height(&self) -> u16 {
        if self.minimized {
            MINIMIZED_HEIGHT
        } else {
            self.height
        }
    }

    /// Screen rectangle, shrunk to fit `bounds` if the terminal is small
    pub fn rect(&self, bounds: Rect) -> Rect {
        let width = self.width.min(bounds.width);
        let height = self.visible_height().min(bounds.height);
        Rect::new(self.x, self.y, width, height)
    }

    /// Keep the window fully inside `bounds`
    pub fn clamp_into(&mut self, bounds: Rect) {
        let max_x = bounds.x + bounds.width.saturating_sub(self.width);
        let max_y = bounds.y + bounds.height.saturating_sub(self.visible_height());
        self.x = self.x.clamp(bounds.x, max_x.max(bounds.x));
        self.y = self.y.clamp(bounds.y, max_y.max(bounds.y));
    }

    /// Move to (x, y), clamped to `bounds`
    pub fn move_to(&mut self, x: i32, y: i32, bounds: Rect) {
        let max_x = (bounds.x + bounds.width.saturating_sub(self.width)) as i32;
        let max_y = (bounds.y + bounds.height.saturating_sub(self.visible_height())) as i32;
        self.x = x.min(max_x).max(bounds.x as i32) as u16;
        self.y = y.min(max_y).max(bounds.y as i32) as u16;
    }

    pub fn move_by(&mut self, dx: i32, dy: i32, bounds: Rect) {
        self.move_to(self.x as i32 + dx, self.y as i32 + dy, bounds);
    }

    /// Whether a screen cell lies on the title bar
    pub fn on_title_bar(&self, column: u16, row: u16) -> bool {
        row == self.y && column >= self.x && column < self.x.saturating_add(self.width)
    }

    /// Title bar control under a screen cell, if any
    pub fn button_at(&self, column: u16, row: u16, bounds: Rect) -> Option<TitleButton> {
        if row != self.y {
            return None;
        }
        let right = self.x + self.rect(bounds).width;
        if column == right.checked_sub(PIN_FROM_RIGHT)? {
            Some(TitleButton::Pin)
        } else if column == right.checked_sub(MINIMIZE_FROM_RIGHT)? {
            Some(TitleButton::Minimize)
        } else {
            None
        }
    }

    /// Start a drag if the pointer is on the title bar
    pub fn begin_drag(&mut self, column: u16, row: u16) -> bool {
        if !self.on_title_bar(column, row) {
            return false;
        }
        self.drag_offset = Some((column - self.x, row - self.y));
        true
    }

    pub fn drag_to(&mut self, column: u16, row: u16, bounds: Rect) {
        if let Some((dx, dy)) = self.drag_offset {
            self.move_to(column as i32 - dx as i32, row as i32 - dy as i32, bounds);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_offset = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    pub fn toggle_pinned(&mut self) {
        self.pinned = !self.pinned;
    }

    pub fn toggle_minimized(&mut self, bounds: Rect) {
        self.minimized = !self.minimized;
        self.clamp_into(bounds);
    }
}

fn window_title(app: &AppState) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Focus Clock ", title_style()),
        Span::styled(format!("[{}] ", app.timer.phase().to_tag()), hint_style()),
    ])
}

/// Pin and minimize controls; positions must match `button_at`
fn window_controls(window: &FloatingWindow) -> Title<'static> {
    let pin = if window.pinned { "◆" } else { "◇" };
    let size = if window.minimized { "▢" } else { "▁" };
    Title::from(Line::raw(format!(" {} {} ", pin, size))).alignment(Alignment::Right)
}

fn compact_line(app: &AppState) -> Line<'static> {
    let clock = format_clock(app.timer.remaining_secs());
    let task = app.timer.selected_task().unwrap_or("no task").to_string();
    let style = if app.timer.phase() == TimerPhase::Running {
        running_style()
    } else {
        hint_style()
    };
    Line::from(vec![
        Span::styled(format!(" {} ", clock), style),
        Span::raw(task),
    ])
}

/// Render the window chrome and the active tab
pub fn render_window(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Clear, area);

    let border = if app.window.pinned {
        pinned_border_style()
    } else {
        border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(window_title(app))
        .title(window_controls(&app.window));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.window.minimized {
        f.render_widget(Paragraph::new(compact_line(app)), inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let titles: Vec<Line> = Tab::all().iter().map(|t| Line::raw(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .highlight_style(selected_style())
        .divider("│")
        .block(Block::default().borders(Borders::BOTTOM).border_style(border_style()));
    f.render_widget(tabs, chunks[0]);

    match app.active_tab {
        Tab::Timer => render_timer_pane(f, app, chunks[1]),
        Tab::Tasks => render_tasks_pane(f, app, chunks[1]),
        Tab::Stats => render_stats_pane(f, app, chunks[1]),
    }
}
