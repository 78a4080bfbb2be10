pub mod enums;
pub mod session;
pub mod task;
pub mod timer;

pub use enums::{Tab, TimerPhase, UiMode};
pub use session::{FocusSession, SESSION_MINUTES};
pub use task::{Task, TaskList};
pub use timer::{format_clock, FocusTimer, TimerAction, Transition};
