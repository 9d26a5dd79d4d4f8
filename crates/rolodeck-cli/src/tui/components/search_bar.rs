use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct SearchBarComponent;

impl Component for SearchBarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let text = state.gallery.filter_text();
        let content = if text.is_empty() {
            Line::from(Span::styled(
                "Type to search by name...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::raw(text.to_string()),
                Span::styled("▌", Style::default().fg(Color::Cyan)),
            ])
        };

        let widget = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Search "),
        );
        f.render_widget(widget, area);
    }
}
