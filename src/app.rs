use crate::domain::{
    FocusSession, FocusTimer, Tab, TaskList, TimerAction, TimerPhase, Transition, UiMode,
};
use crate::notifications;
use crate::persistence::{save_state, AppConfig, KeyValueStore, PersistedState};
use crate::ticker::Ticker;
use crate::ui::window::{FloatingWindow, WINDOW_HEIGHT, WINDOW_WIDTH};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use ratatui::layout::Rect;
use std::time::Instant;
use tracing::{debug, info};

/// Main application state
pub struct AppState {
    pub tasks: TaskList,
    pub sessions: Vec<FocusSession>,
    pub timer: FocusTimer,
    pub ticker: Ticker,
    pub config: AppConfig,
    pub active_tab: Tab,
    pub ui_mode: UiMode,
    pub input: String,
    /// Cursor in the Tasks tab (index into the full list)
    pub task_cursor: usize,
    /// Cursor in the Timer tab (index into the incomplete tasks)
    pub pick_cursor: usize,
    /// Scroll offset of the recent sessions list
    pub stats_scroll: usize,
    pub window: FloatingWindow,
    /// Screen area the window may occupy; updated on every render
    pub viewport: Rect,
    /// Shown in the timer pane after a session completes
    pub last_completed: Option<FocusSession>,
    pub needs_save: bool,
}

impl AppState {
    pub fn new(state: PersistedState, config: AppConfig) -> Self {
        Self {
            tasks: TaskList::new(state.tasks),
            sessions: state.sessions,
            timer: FocusTimer::new(),
            ticker: Ticker::every_second(),
            config,
            active_tab: Tab::Timer,
            ui_mode: UiMode::Normal,
            input: String::new(),
            task_cursor: 0,
            pick_cursor: 0,
            stats_scroll: 0,
            window: FloatingWindow::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            viewport: Rect::default(),
            last_completed: None,
            needs_save: false,
        }
    }

    /// Record the drawable area; places the window on first call
    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport == viewport {
            return;
        }
        let first = self.viewport.area() == 0;
        self.viewport = viewport;
        if first {
            self.window.place_default(viewport);
        } else {
            self.window.clamp_into(viewport);
        }
    }

    // ── Task list ──────────────────────────────────────────────────────────

    pub fn add_task(&mut self, text: &str) {
        if self.tasks.add_task(text) {
            debug!(count = self.tasks.len(), "task added");
            self.needs_save = true;
        }
    }

    pub fn toggle_task(&mut self, index: usize) {
        if self.tasks.toggle_task(index) {
            self.needs_save = true;
            self.clamp_pick_cursor();
        }
    }

    pub fn toggle_task_at_cursor(&mut self) {
        self.toggle_task(self.task_cursor);
    }

    pub fn move_task_cursor_up(&mut self) {
        self.task_cursor = self.task_cursor.saturating_sub(1);
    }

    pub fn move_task_cursor_down(&mut self) {
        if self.task_cursor + 1 < self.tasks.len() {
            self.task_cursor += 1;
        }
    }

    // ── Input form ─────────────────────────────────────────────────────────

    pub fn start_add_task(&mut self) {
        self.active_tab = Tab::Tasks;
        self.ui_mode = UiMode::AddingTask;
        self.input.clear();
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.add_task(&text);
        if !self.tasks.is_empty() {
            self.task_cursor = self.tasks.len() - 1;
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    // ── Timer ──────────────────────────────────────────────────────────────

    /// Incomplete tasks offered for selection
    pub fn selectable_tasks(&self) -> Vec<(usize, &str)> {
        self.tasks
            .incomplete()
            .map(|(idx, task)| (idx, task.text.as_str()))
            .collect()
    }

    fn clamp_pick_cursor(&mut self) {
        let count = self.tasks.incomplete().count();
        self.pick_cursor = self.pick_cursor.min(count.saturating_sub(1));
    }

    pub fn move_pick_cursor_up(&mut self) {
        self.pick_cursor = self.pick_cursor.saturating_sub(1);
    }

    pub fn move_pick_cursor_down(&mut self) {
        if self.pick_cursor + 1 < self.tasks.incomplete().count() {
            self.pick_cursor += 1;
        }
    }

    /// Bind the highlighted incomplete task to the timer
    pub fn select_task_at_cursor(&mut self, now: Instant) {
        let text = self
            .tasks
            .incomplete()
            .nth(self.pick_cursor)
            .map(|(_, task)| task.text.clone());
        if let Some(text) = text {
            self.dispatch(TimerAction::SelectTask(text), now);
        }
    }

    /// Apply a timer action at the current wall-clock time
    pub fn dispatch(&mut self, action: TimerAction, now: Instant) -> Transition {
        self.dispatch_at(action, now, Utc::now())
    }

    /// Apply a timer action and keep the ticker in step with the timer.
    ///
    /// The ticker is armed exactly while the timer is running.
    pub fn dispatch_at(
        &mut self,
        action: TimerAction,
        now: Instant,
        wall: DateTime<Utc>,
    ) -> Transition {
        let transition = self.timer.apply(action, wall);

        if let Some(session) = &transition.session {
            info!(task = %session.task, "focus session completed");
            if self.config.notifications {
                notifications::notify_session_complete(&session.task);
            }
            self.sessions.push(session.clone());
            self.last_completed = Some(session.clone());
            self.needs_save = true;
        }

        if self.timer.is_running() {
            if !self.ticker.is_armed() {
                self.last_completed = None;
            }
            self.ticker.arm(now);
        } else {
            self.ticker.cancel();
        }

        transition
    }

    /// Deliver elapsed one-second ticks
    pub fn tick(&mut self, now: Instant) {
        self.tick_at(now, Utc::now());
    }

    pub fn tick_at(&mut self, now: Instant, wall: DateTime<Utc>) {
        let fired = self.ticker.poll(now);
        for _ in 0..fired {
            if self.timer.phase() != TimerPhase::Running {
                break;
            }
            self.dispatch_at(TimerAction::Tick, now, wall);
        }
    }

    // ── Stats ──────────────────────────────────────────────────────────────

    pub fn scroll_stats_up(&mut self) {
        self.stats_scroll = self.stats_scroll.saturating_sub(1);
    }

    pub fn scroll_stats_down(&mut self) {
        if self.stats_scroll + 1 < self.sessions.len() {
            self.stats_scroll += 1;
        }
    }

    // ── Window ─────────────────────────────────────────────────────────────

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
    }

    pub fn toggle_minimized(&mut self) {
        self.window.toggle_minimized(self.viewport);
    }

    pub fn move_window(&mut self, dx: i32, dy: i32) {
        self.window.move_by(dx, dy, self.viewport);
    }

    // ── Persistence ────────────────────────────────────────────────────────

    /// Write both lists to the store
    pub fn save(&mut self, store: &mut dyn KeyValueStore) -> Result<()> {
        save_state(store, self.tasks.tasks(), &self.sessions)
            .context("Failed to save focus state")?;
        self.needs_save = false;
        Ok(())
    }

    /// Save only when something changed since the last save.
    /// Returns whether a write happened.
    pub fn save_if_dirty(&mut self, store: &mut dyn KeyValueStore) -> Result<bool> {
        if !self.needs_save {
            return Ok(false);
        }
        self.save(store)?;
        Ok(true)
    }
}
