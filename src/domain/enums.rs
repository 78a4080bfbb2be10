/// Lifecycle phase of the focus timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// No task selected
    Idle,
    /// Task selected, countdown not running
    Ready,
    /// Counting down
    Running,
}

impl TimerPhase {
    /// Short badge used in the window title
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
        }
    }
}

/// Tab shown inside the floating window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Timer,
    Tasks,
    Stats,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Timer => "Focus Timer",
            Tab::Tasks => "Task List",
            Tab::Stats => "Focus Stats",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Timer, Tab::Tasks, Tab::Stats]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Timer => 0,
            Tab::Tasks => 1,
            Tab::Stats => 2,
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Timer => Tab::Tasks,
            Tab::Tasks => Tab::Stats,
            Tab::Stats => Tab::Timer,
        }
    }

    pub fn previous(&self) -> Tab {
        match self {
            Tab::Timer => Tab::Stats,
            Tab::Tasks => Tab::Timer,
            Tab::Stats => Tab::Tasks,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        for tab in Tab::all() {
            assert_eq!(tab.next().previous(), *tab);
        }
        assert_eq!(Tab::Stats.next(), Tab::Timer);
        assert_eq!(Tab::Timer.previous(), Tab::Stats);
    }

    #[test]
    fn test_tab_index_matches_order() {
        for (idx, tab) in Tab::all().iter().enumerate() {
            assert_eq!(tab.index(), idx);
        }
    }

    #[test]
    fn test_timer_phase_tag() {
        assert_eq!(TimerPhase::Idle.to_tag(), "IDLE");
        assert_eq!(TimerPhase::Running.to_tag(), "RUNNING");
    }
}
