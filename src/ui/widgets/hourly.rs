use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title("Next hours");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tiles = &state.display.hourly;
    if tiles.is_empty() {
        let placeholder =
            Paragraph::new("No upcoming forecast").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, inner);
        return;
    }

    let constraints: Vec<Constraint> = tiles
        .iter()
        .map(|_| Constraint::Ratio(1, tiles.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (tile, cell) in tiles.iter().zip(columns.iter()) {
        let text = vec![
            Line::from(tile.time_label.clone()),
            Line::from(tile.icon),
            Line::from(tile.temp_label.clone()),
            Line::from(tile.precipitation_label.clone()),
        ];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            *cell,
        );
    }
}
