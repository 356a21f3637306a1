use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title("Current");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(inner);

    let icon = Paragraph::new(Line::from(state.display.icon))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(icon, columns[0]);

    let details = vec![
        Line::from(state.display.temperature_line.clone()),
        Line::from(state.display.feels_like_line.clone()),
        Line::from(state.display.humidity_line.clone()),
        Line::from(state.display.pressure_line.clone()),
        Line::from(state.display.wind_line.clone()),
        Line::from(state.display.conditions_line.clone()),
    ];
    frame.render_widget(Paragraph::new(details), columns[1]);
}
