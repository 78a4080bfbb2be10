use crate::domain::{FocusSession, SESSION_MINUTES};
use std::collections::HashMap;

/// Minutes-squared normalisation for the efficiency score (25 min x 100)
const EFFICIENCY_SCALE: f64 = (SESSION_MINUTES * 100) as f64;

/// Aggregated focus figures for one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyStat {
    /// "YYYY-MM-DD"
    pub date: String,
    pub total_minutes: u32,
    pub total_hours: f64,
    pub completed_tasks: usize,
    pub efficiency: f64,
}

/// Group sessions by calendar day.
///
/// Days appear in the order their first session appears in `sessions`.
pub fn compute_daily_stats(sessions: &[FocusSession]) -> Vec<DailyStat> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (u32, usize)> = HashMap::new();

    for session in sessions {
        let date = session.date_key();
        let entry = totals.entry(date).or_insert_with(|| {
            order.push(date);
            (0, 0)
        });
        entry.0 += session.duration;
        if session.completed {
            entry.1 += 1;
        }
    }

    order
        .into_iter()
        .map(|date| {
            let (total_minutes, completed_tasks) = totals[date];
            DailyStat {
                date: date.to_string(),
                total_minutes,
                total_hours: total_minutes as f64 / 60.0,
                completed_tasks,
                efficiency: (completed_tasks as f64 * total_minutes as f64) / EFFICIENCY_SCALE,
            }
        })
        .collect()
}

/// The last `n` entries of the daily stats, in their existing order
pub fn last_days(stats: &[DailyStat], n: usize) -> &[DailyStat] {
    &stats[stats.len().saturating_sub(n)..]
}

/// Sessions newest first (reverse of append order)
pub fn recent_sessions(sessions: &[FocusSession]) -> impl Iterator<Item = &FocusSession> {
    sessions.iter().rev()
}

/// Totals across every recorded session
#[derive(Debug, Default, PartialEq)]
pub struct OverallStats {
    pub session_count: usize,
    pub total_minutes: u32,
    pub active_days: usize,
    pub avg_minutes_per_day: f64,
    pub best_day: Option<(String, u32)>,
}

pub fn calculate_overall_stats(sessions: &[FocusSession]) -> OverallStats {
    let daily = compute_daily_stats(sessions);
    let total_minutes: u32 = daily.iter().map(|d| d.total_minutes).sum();

    let best_day = daily
        .iter()
        .fold(None::<&DailyStat>, |best, day| match best {
            Some(b) if b.total_minutes >= day.total_minutes => Some(b),
            _ => Some(day),
        })
        .map(|d| (d.date.clone(), d.total_minutes));

    let avg_minutes_per_day = if daily.is_empty() {
        0.0
    } else {
        total_minutes as f64 / daily.len() as f64
    };

    OverallStats {
        session_count: sessions.len(),
        total_minutes,
        active_days: daily.len(),
        avg_minutes_per_day,
        best_day,
    }
}
