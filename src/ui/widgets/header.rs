use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::domain::display::DisplayStatus;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title("skycast");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if state.postal.editing {
        Line::from(vec![
            Span::raw("Postal code: "),
            Span::styled(
                format!("{}_", state.postal.buffer),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Enter applies · Esc cancels",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        let location_style = match state.display.status {
            DisplayStatus::Failed => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().add_modifier(Modifier::BOLD),
        };
        let mut spans = vec![Span::styled(state.display.location_line.clone(), location_style)];
        if state.refreshing {
            spans.push(Span::styled(
                "  refreshing...",
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::styled(
            "   [r] refresh  [p] postal code  [q] quit",
            Style::default().fg(Color::DarkGray),
        ));
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), inner);
}
