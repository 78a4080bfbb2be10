pub mod generator;
pub mod stats;

pub use generator::{format_minutes, render_report};
pub use stats::{compute_daily_stats, last_days};
