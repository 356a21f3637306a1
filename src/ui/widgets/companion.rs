use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title("Companion");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let comment = Paragraph::new(state.display.comment.clone())
        .style(Style::default().add_modifier(Modifier::ITALIC))
        .wrap(Wrap { trim: true });
    frame.render_widget(comment, inner);
}
