use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::{AppState, GRID_COLUMNS};

/// Card cell height including its border rows.
const CARD_HEIGHT: u16 = 5;

pub(crate) struct GalleryComponent;

impl Component for GalleryComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let visible = state.visible();
        if visible.is_empty() {
            render_empty_message(f, area, state);
            return;
        }

        let card_width = (area.width / GRID_COLUMNS as u16).max(20);
        let rows_fit = (area.height / CARD_HEIGHT).max(1) as usize;

        // Keep the cursor row on screen.
        let cursor_row = state.cursor / GRID_COLUMNS;
        if cursor_row < state.scroll_row {
            state.scroll_row = cursor_row;
        } else if cursor_row >= state.scroll_row + rows_fit {
            state.scroll_row = cursor_row + 1 - rows_fit;
        }

        for (pos, &index) in visible.iter().enumerate() {
            let row = pos / GRID_COLUMNS;
            if row < state.scroll_row || row >= state.scroll_row + rows_fit {
                continue;
            }
            let col = (pos % GRID_COLUMNS) as u16;
            let top = ((row - state.scroll_row) as u16) * CARD_HEIGHT;
            let cell = Rect {
                x: area.x + col * card_width,
                y: area.y + top,
                width: card_width.min(area.width.saturating_sub(col * card_width)),
                height: CARD_HEIGHT.min(area.height.saturating_sub(top)),
            };
            if cell.width == 0 || cell.height == 0 {
                continue;
            }

            let Some(entry) = state.gallery.cards().get(index) else {
                continue;
            };
            render_card(f, cell, entry, pos == state.cursor);
        }
    }
}

fn render_card(f: &mut Frame, cell: Rect, entry: &rolodeck_engine::CardEntry, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::styled(
            entry.card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(entry.card.email.clone()),
        Line::styled(
            entry.card.locality.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(widget, cell);
}

fn render_empty_message(f: &mut Frame, area: Rect, state: &AppState) {
    let message = if state.gallery.is_empty() {
        state
            .notice
            .clone()
            .unwrap_or_else(|| "No profiles loaded.".to_string())
    } else {
        "No matches.".to_string()
    };

    let widget = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
