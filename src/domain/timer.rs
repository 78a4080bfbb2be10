use super::enums::TimerPhase;
use super::session::{FocusSession, SESSION_MINUTES};
use chrono::{DateTime, Utc};

/// Length of one focus interval in seconds
pub const FOCUS_SECONDS: u32 = SESSION_MINUTES * 60;

/// User or clock event fed into the timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    SelectTask(String),
    DeselectTask,
    Start,
    Pause,
    /// Start when stopped, pause when running
    Toggle,
    Reset,
    /// One elapsed second of wall-clock time
    Tick,
}

/// Result of applying an action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Whether any timer field changed
    pub changed: bool,
    /// Session emitted by a natural expiry
    pub session: Option<FocusSession>,
}

impl Transition {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            session: None,
        }
    }
}

/// Countdown state for the focus session engine.
///
/// `is_running` is only ever true while a task is selected and
/// `remaining_secs > 0`; every mutator preserves that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTimer {
    remaining_secs: u32,
    is_running: bool,
    selected_task: Option<String>,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            remaining_secs: FOCUS_SECONDS,
            is_running: false,
            selected_task: None,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn selected_task(&self) -> Option<&str> {
        self.selected_task.as_deref()
    }

    pub fn phase(&self) -> TimerPhase {
        if self.is_running {
            TimerPhase::Running
        } else if self.selected_task.is_some() {
            TimerPhase::Ready
        } else {
            TimerPhase::Idle
        }
    }

    /// Whether `start` would be accepted right now
    pub fn can_start(&self) -> bool {
        !self.is_running && self.selected_task.is_some() && self.remaining_secs > 0
    }

    /// Fraction of the interval already elapsed (0.0 to 1.0)
    pub fn progress_ratio(&self) -> f64 {
        let done = FOCUS_SECONDS.saturating_sub(self.remaining_secs);
        done as f64 / FOCUS_SECONDS as f64
    }

    /// Bind a task to the timer. Ignored while running; remaining time is kept.
    pub fn select_task(&mut self, text: String) -> Transition {
        if self.is_running || self.selected_task.as_deref() == Some(text.as_str()) {
            return Transition::unchanged();
        }
        self.selected_task = Some(text);
        Transition::changed()
    }

    /// Unbind the task, stopping the countdown if it was running
    pub fn deselect_task(&mut self) -> Transition {
        if self.selected_task.is_none() {
            return Transition::unchanged();
        }
        self.selected_task = None;
        self.is_running = false;
        Transition::changed()
    }

    pub fn start(&mut self) -> Transition {
        if !self.can_start() {
            return Transition::unchanged();
        }
        self.is_running = true;
        Transition::changed()
    }

    pub fn pause(&mut self) -> Transition {
        if !self.is_running {
            return Transition::unchanged();
        }
        self.is_running = false;
        Transition::changed()
    }

    pub fn toggle(&mut self) -> Transition {
        if self.is_running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Stop and restore the full interval; the selected task is kept
    pub fn reset(&mut self) -> Transition {
        if !self.is_running && self.remaining_secs == FOCUS_SECONDS {
            return Transition::unchanged();
        }
        self.is_running = false;
        self.remaining_secs = FOCUS_SECONDS;
        Transition::changed()
    }

    /// Advance the countdown by one second.
    ///
    /// Reaching zero emits a completed session for the selected task, stops
    /// the countdown and rearms the full interval.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Transition {
        if !self.is_running {
            return Transition::unchanged();
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return Transition::changed();
        }

        let session = self
            .selected_task
            .clone()
            .map(|task| FocusSession::completed_at(task, now));
        self.is_running = false;
        self.remaining_secs = FOCUS_SECONDS;

        Transition {
            changed: true,
            session,
        }
    }

    /// Reducer entry point used by the event loop
    pub fn apply(&mut self, action: TimerAction, now: DateTime<Utc>) -> Transition {
        match action {
            TimerAction::SelectTask(text) => self.select_task(text),
            TimerAction::DeselectTask => self.deselect_task(),
            TimerAction::Start => self.start(),
            TimerAction::Pause => self.pause(),
            TimerAction::Toggle => self.toggle(),
            TimerAction::Reset => self.reset(),
            TimerAction::Tick => self.tick(now),
        }
    }
}

/// Format seconds as a zero-padded "MM:SS" clock face
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
