pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{app::state::AppState, resilience::freshness::FreshnessState};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < 40 || area.height < 16 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 40x16.")
            .block(Block::default().borders(Borders::ALL).title("skycast"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(7),
            Constraint::Length(4),
        ])
        .split(area);

    widgets::header::render(frame, chunks[0], state);
    widgets::current::render(frame, chunks[1], state);
    widgets::hourly::render(frame, chunks[2], state);
    widgets::companion::render(frame, chunks[3], state);

    render_freshness_badge(frame, area, state);
}

fn render_freshness_badge(frame: &mut Frame, area: Rect, state: &AppState) {
    let label = match state.refresh_meta.freshness() {
        FreshnessState::Fresh => None,
        FreshnessState::Stale => Some(("⚠ stale", Color::Yellow)),
        FreshnessState::Offline => Some(("⚠ offline", Color::LightRed)),
    };

    if let Some((text, color)) = label {
        let width = (text.chars().count() as u16 + 2).min(area.width);
        let badge_area = Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y,
            width,
            height: 1,
        };
        let badge = Paragraph::new(Line::from(text)).style(
            Style::default()
                .fg(color)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(badge, badge_area);
    }
}
