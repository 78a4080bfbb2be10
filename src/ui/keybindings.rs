use crate::app::AppState;
use crate::domain::{Tab, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = Vec::new();

    if app.ui_mode == UiMode::AddingTask {
        spans.push(Span::raw(" Enter add   "));
        spans.push(Span::raw("Esc cancel"));
    } else {
        spans.push(Span::raw(" Tab switch   "));
        match app.active_tab {
            Tab::Timer => {
                spans.push(Span::raw("↑/↓ choose   "));
                spans.push(Span::raw("Enter select   "));
                spans.push(Span::raw("x switch task   "));
            }
            Tab::Tasks => {
                spans.push(Span::raw("↑/↓ select   "));
                spans.push(Span::raw("Enter done   "));
                spans.push(Span::raw("a add   "));
            }
            Tab::Stats => {
                spans.push(Span::raw("↑/↓ scroll   "));
            }
        }
        spans.push(Span::raw("Space start/pause   "));
        spans.push(Span::raw("r reset   "));
        spans.push(Span::raw("Shift+←↑↓→ move   "));
        spans.push(Span::raw("p pin   "));
        spans.push(Span::raw("m minimize   "));
        spans.push(Span::raw("q quit"));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(hint_style());
    f.render_widget(paragraph, area);
}
