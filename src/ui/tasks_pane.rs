use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, input_style, selected_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn render_input_line(f: &mut Frame, app: &AppState, area: Rect) {
    let line = if app.ui_mode == UiMode::AddingTask {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.input.as_str(), input_style()),
            Span::styled("█", input_style()), // Cursor
        ])
    } else {
        Line::styled("[a] add a new task…", hint_style())
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    );
    f.render_widget(paragraph, area);
}

/// Render the task list tab
pub fn render_tasks_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_input_line(f, app, chunks[0]);

    // Keep the cursor row visible
    let visible = chunks[1].height as usize;
    let offset = (app.task_cursor + 1).saturating_sub(visible);

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(idx, task)| {
            let (mark, mut style) = if task.completed {
                ("✓ ", done_style().add_modifier(Modifier::CROSSED_OUT))
            } else {
                ("○ ", default_style())
            };
            if idx == app.task_cursor && app.ui_mode == UiMode::Normal {
                style = selected_style();
            }
            ListItem::new(Line::from(vec![
                Span::styled(mark, style),
                Span::styled(task.text.clone(), style),
            ]))
        })
        .collect();

    if items.is_empty() {
        f.render_widget(
            Paragraph::new(Line::styled("No tasks yet", hint_style())),
            chunks[1],
        );
        return;
    }

    f.render_widget(List::new(items), chunks[1]);
}
