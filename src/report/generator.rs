use crate::domain::FocusSession;
use crate::report::stats::{calculate_overall_stats, compute_daily_stats, last_days, recent_sessions};
use chrono::NaiveDate;
use std::fmt::Write;

/// Number of sessions listed in the report's history section
const RECENT_LIMIT: usize = 10;

/// Format minutes as "Xh Ym" or "Xm" for display
pub fn format_minutes(total_mins: u32) -> String {
    if total_mins < 60 {
        format!("{}m", total_mins)
    } else {
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

/// Render a markdown focus report covering the last `days` days
pub fn render_report(sessions: &[FocusSession], days: usize, generated_on: NaiveDate) -> String {
    let overall = calculate_overall_stats(sessions);
    let stats = compute_daily_stats(sessions);
    let window = last_days(&stats, days);

    let mut report = String::new();

    // write! into a String cannot fail
    let _ = writeln!(report, "# Focus Report - {}\n", generated_on);

    report.push_str("## Summary\n\n");
    let _ = writeln!(report, "- **Sessions:** {}", overall.session_count);
    let _ = writeln!(report, "- **Total Focus:** {}", format_minutes(overall.total_minutes));
    let _ = writeln!(report, "- **Active Days:** {}", overall.active_days);
    let _ = writeln!(
        report,
        "- **Average per Day:** {}",
        format_minutes(overall.avg_minutes_per_day.round() as u32)
    );
    if let Some((date, minutes)) = &overall.best_day {
        let _ = writeln!(report, "- **Best Day:** {} ({})", date, format_minutes(*minutes));
    }
    report.push('\n');

    let _ = writeln!(report, "## Last {} Days\n", days);
    if window.is_empty() {
        report.push_str("No focus sessions recorded.\n\n");
    } else {
        report.push_str("| Date | Hours | Completed | Efficiency |\n");
        report.push_str("|------|-------|-----------|------------|\n");
        for day in window {
            let _ = writeln!(
                report,
                "| {} | {:.1} | {} | {:.2} |",
                day.date, day.total_hours, day.completed_tasks, day.efficiency
            );
        }
        report.push('\n');
    }

    if !sessions.is_empty() {
        report.push_str("## Recent Sessions\n\n");
        for session in recent_sessions(sessions).take(RECENT_LIMIT) {
            let when = session
                .local_time()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| session.timestamp.clone());
            let mark = if session.completed { "x" } else { " " };
            let _ = writeln!(
                report,
                "- [{}] {} - {} ({} min)",
                mark, when, session.task, session.duration
            );
        }
        report.push('\n');
    }

    report
}
