use crate::app::AppState;
use crate::domain::{format_clock, TimerPhase};
use crate::ui::styles::{
    clock_style, default_style, done_style, gauge_style, hint_style, running_style,
    selected_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph},
    Frame,
};

/// Current task line, or the list of tasks to pick from
fn render_task_section(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(task) = app.timer.selected_task() {
        let lines = vec![
            Line::styled("Current task", title_style()),
            Line::from(vec![
                Span::styled(task.to_string(), default_style()),
                Span::styled("   [x] switch task", hint_style()),
            ]),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let selectable = app.selectable_tasks();
    let mut items = vec![ListItem::new(Line::styled(
        "Choose a task to focus on:",
        hint_style(),
    ))];

    if selectable.is_empty() {
        items.push(ListItem::new(Line::styled(
            "  (no open tasks, add one in the Task List tab)",
            hint_style(),
        )));
    }

    // Keep the cursor row visible below the prompt line
    let visible = (area.height as usize).saturating_sub(1).max(1);
    let offset = (app.pick_cursor + 1).saturating_sub(visible);

    for (pos, (_, text)) in selectable.iter().enumerate().skip(offset) {
        let style = if pos == app.pick_cursor {
            selected_style()
        } else {
            default_style()
        };
        items.push(ListItem::new(Line::styled(format!("  {}", text), style)));
    }

    f.render_widget(List::new(items), area);
}

/// Render the countdown tab
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Task section
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Controls / status
        ])
        .split(area);

    render_task_section(f, app, chunks[0]);

    let phase = app.timer.phase();
    let clock_span = if phase == TimerPhase::Running {
        Span::styled(format_clock(app.timer.remaining_secs()), running_style())
    } else {
        Span::styled(format_clock(app.timer.remaining_secs()), clock_style())
    };
    f.render_widget(
        Paragraph::new(Line::from(clock_span)).alignment(Alignment::Center),
        chunks[2],
    );

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(app.timer.progress_ratio())
        .label("");
    f.render_widget(gauge, chunks[3]);

    let toggle_label = if phase == TimerPhase::Running {
        "[space] pause"
    } else {
        "[space] start"
    };
    let toggle_style = if phase == TimerPhase::Running || app.timer.can_start() {
        title_style()
    } else {
        hint_style()
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(toggle_label, toggle_style),
        Span::raw("   "),
        Span::styled("[r] reset", title_style()),
    ])
    .alignment(Alignment::Center)];

    if phase == TimerPhase::Idle {
        lines.push(
            Line::styled("Select a task first to start focusing", hint_style())
                .alignment(Alignment::Center),
        );
    } else if let Some(session) = &app.last_completed {
        lines.push(
            Line::styled(
                format!("✓ {} min on \"{}\" recorded", session.duration, session.task),
                done_style(),
            )
            .alignment(Alignment::Center),
        );
    }

    f.render_widget(Paragraph::new(lines), chunks[5]);
}
