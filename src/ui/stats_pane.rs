use crate::app::AppState;
use crate::domain::FocusSession;
use crate::report::stats::{compute_daily_stats, last_days, recent_sessions, DailyStat};
use crate::ui::styles::{
    default_style, done_style, efficiency_style, hint_style, hours_style, tasks_style,
    title_style,
};
use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph},
    Frame,
};

/// Short weekday label for a "YYYY-MM-DD" day, or the raw text
fn weekday_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a").to_string())
        .unwrap_or_else(|_| date.to_string())
}

fn series(days: &[DailyStat], value: impl Fn(&DailyStat) -> f64) -> Vec<(f64, f64)> {
    days.iter()
        .enumerate()
        .map(|(idx, day)| (idx as f64, value(day)))
        .collect()
}

fn render_chart(f: &mut Frame, days: &[DailyStat], area: Rect) {
    let hours = series(days, |d| d.total_hours);
    let tasks = series(days, |d| d.completed_tasks as f64);
    let efficiency = series(days, |d| d.efficiency);

    let y_max = hours
        .iter()
        .chain(tasks.iter())
        .chain(efficiency.iter())
        .map(|(_, y)| *y)
        .fold(1.0_f64, f64::max)
        .ceil();

    let datasets = vec![
        Dataset::default()
            .name("hours")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(hours_style())
            .data(&hours),
        Dataset::default()
            .name("tasks")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(tasks_style())
            .data(&tasks),
        Dataset::default()
            .name("efficiency")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(efficiency_style())
            .data(&efficiency),
    ];

    let x_labels: Vec<Span> = days
        .iter()
        .map(|d| Span::styled(weekday_label(&d.date), hint_style()))
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::BOTTOM))
        .x_axis(
            Axis::default()
                .bounds([0.0, (days.len().max(2) - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", hint_style()),
                    Span::styled(format!("{}", y_max), hint_style()),
                ]),
        );

    f.render_widget(chart, area);
}

fn session_line(session: &FocusSession) -> Line<'static> {
    let when = session
        .local_time()
        .map(|t| t.format("%m-%d %H:%M").to_string())
        .unwrap_or_else(|| session.timestamp.clone());
    let mark = if session.completed { " ✓" } else { "" };

    Line::from(vec![
        Span::styled(format!("{} ", when), hint_style()),
        Span::styled(session.task.clone(), default_style()),
        Span::styled(format!("  {} min{}", session.duration, mark), done_style()),
    ])
}

/// Render the statistics tab: chart of recent days and session history
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(55),
            Constraint::Min(0),
        ])
        .split(area);

    let stats = compute_daily_stats(&app.sessions);
    let days = last_days(&stats, app.config.stats_days);

    let title = Line::from(vec![
        Span::styled(format!("Last {} days ", app.config.stats_days), title_style()),
        Span::styled("hours", hours_style()),
        Span::raw(" · "),
        Span::styled("tasks", tasks_style()),
        Span::raw(" · "),
        Span::styled("efficiency", efficiency_style()),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    if days.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled(
                "No sessions recorded yet",
                hint_style(),
            )),
            chunks[1],
        );
    } else {
        render_chart(f, days, chunks[1]);
    }

    let items: Vec<ListItem> = recent_sessions(&app.sessions)
        .skip(app.stats_scroll)
        .map(|s| ListItem::new(session_line(s)))
        .collect();

    let list_title = if app.stats_scroll > 0 {
        format!(" Recent sessions ({}) [scrolled +{}] ", app.sessions.len(), app.stats_scroll)
    } else {
        format!(" Recent sessions ({}) ", app.sessions.len())
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::TOP)
            .title(Span::styled(list_title, title_style())),
    );
    f.render_widget(list, chunks[2]);
}
