use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let hints = if state.overlay_open() {
            "←/→ prev/next  ·  esc close"
        } else {
            "type to search  ·  arrows move  ·  enter open  ·  esc clear/quit"
        };
        let counts = format!(
            "{}/{} shown",
            state.gallery.cards().visible_count(),
            state.gallery.len()
        );

        let footer_widget = Paragraph::new(Line::from(format!("{}  ·  {}", hints, counts)))
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(footer_widget, area);
    }
}
